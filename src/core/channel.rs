// Shake input adapters.
//
// Both the motion sensor and the pointer fallback turn raw readings into the
// same `Shake` value; the engine consumes it without knowing which channel
// produced it. Each channel keeps its own baseline and debounce window, but
// the last accepted shake time is shared and passed in by the engine.
use super::constants::*;
use super::timer::Millis;
use glam::{DVec3, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeSource {
    Motion,
    Pointer,
}

impl ShakeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShakeSource::Motion => "motion",
            ShakeSource::Pointer => "pointer",
        }
    }
}

/// A confirmed shake ready to be applied to the heart rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shake {
    pub source: ShakeSource,
    pub boost: u32,
}

/// One acceleration-including-gravity reading. Sensors may leave any axis
/// unset; such samples carry no usable delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelSample {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl AccelSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// All three axes, or `None` if the reading is incomplete.
    #[inline]
    pub fn axes(&self) -> Option<DVec3> {
        Some(DVec3::new(self.x?, self.y?, self.z?))
    }
}

/// A producer of shakes from some kind of raw input.
pub trait ShakeChannel {
    type Input;

    /// Feed one reading taken at `now`. `last_shake` is the time of the most
    /// recent shake accepted from any channel.
    fn observe(&mut self, input: Self::Input, now: Millis, last_shake: Option<Millis>)
        -> Option<Shake>;

    /// Forget baselines and partial progress.
    fn reset(&mut self);
}

#[inline]
fn debounced(now: Millis, last_shake: Option<Millis>, window: Millis) -> bool {
    last_shake.map_or(true, |t| now - t > window)
}

#[derive(Clone, Debug)]
pub struct MotionChannel {
    pub threshold: f64,
    pub debounce_ms: Millis,
    pub boost: u32,
    baseline: DVec3,
}

impl Default for MotionChannel {
    fn default() -> Self {
        Self::new(MOTION_SHAKE_THRESHOLD, MOTION_DEBOUNCE_MS, MOTION_SHAKE_BOOST)
    }
}

impl MotionChannel {
    pub fn new(threshold: f64, debounce_ms: Millis, boost: u32) -> Self {
        Self {
            threshold,
            debounce_ms,
            boost,
            baseline: DVec3::ZERO,
        }
    }

    #[inline]
    pub fn baseline(&self) -> DVec3 {
        self.baseline
    }
}

impl ShakeChannel for MotionChannel {
    type Input = AccelSample;

    fn observe(&mut self, sample: AccelSample, now: Millis, last_shake: Option<Millis>) -> Option<Shake> {
        let Some(axes) = sample.axes() else {
            log::trace!("[shake] dropped incomplete motion sample {:?}", sample);
            return None;
        };
        let delta = (axes - self.baseline).abs().max_element();
        self.baseline = axes;
        (delta > self.threshold && debounced(now, last_shake, self.debounce_ms)).then_some(Shake {
            source: ShakeSource::Motion,
            boost: self.boost,
        })
    }

    fn reset(&mut self) {
        self.baseline = DVec3::ZERO;
    }
}

/// Mouse-movement fallback for devices without a motion sensor.
///
/// A single large jump is treated as noise: a shake is only confirmed once
/// `confirmations` candidates have accumulated. Moves below the threshold do
/// not clear the count; only a confirmed shake does.
#[derive(Clone, Debug)]
pub struct PointerChannel {
    pub threshold: f32,
    pub debounce_ms: Millis,
    pub boost: u32,
    pub confirmations: u32,
    baseline: Vec2,
    candidates: u32,
}

impl Default for PointerChannel {
    fn default() -> Self {
        Self::new(
            POINTER_SHAKE_THRESHOLD,
            POINTER_DEBOUNCE_MS,
            POINTER_SHAKE_BOOST,
            POINTER_CONFIRMATIONS,
        )
    }
}

impl PointerChannel {
    pub fn new(threshold: f32, debounce_ms: Millis, boost: u32, confirmations: u32) -> Self {
        Self {
            threshold,
            debounce_ms,
            boost,
            confirmations: confirmations.max(1),
            baseline: Vec2::ZERO,
            candidates: 0,
        }
    }

    #[inline]
    pub fn baseline(&self) -> Vec2 {
        self.baseline
    }

    /// Candidates seen since the last confirmed shake.
    #[inline]
    pub fn candidates(&self) -> u32 {
        self.candidates
    }
}

impl ShakeChannel for PointerChannel {
    type Input = Vec2;

    fn observe(&mut self, pos: Vec2, now: Millis, last_shake: Option<Millis>) -> Option<Shake> {
        let delta = (pos - self.baseline).abs().max_element();
        self.baseline = pos;
        if delta <= self.threshold || !debounced(now, last_shake, self.debounce_ms) {
            return None;
        }
        self.candidates += 1;
        if self.candidates < self.confirmations {
            log::trace!("[shake] pointer candidate {}/{}", self.candidates, self.confirmations);
            return None;
        }
        self.candidates = 0;
        Some(Shake {
            source: ShakeSource::Pointer,
            boost: self.boost,
        })
    }

    fn reset(&mut self) {
        self.baseline = Vec2::ZERO;
        self.candidates = 0;
    }
}
