use super::channel::{AccelSample, MotionChannel, PointerChannel, Shake, ShakeChannel};
use super::constants::*;
use super::permission::{Granted, PermissionError, PermissionResult};
use super::timer::{Millis, TimerIds, TimerSlot};
use super::view::PulseSnapshot;
use glam::{DVec3, Vec2};

/// Tuning for the pulse engine.
///
/// - `resting_rate` / `max_rate` bound the heart rate
/// - `motion_*` and `pointer_*` configure the two shake channels
/// - `shake_hold_ms` is how long the shaking flag outlives the last shake
/// - `decay_period_ms` / `decay_step` set how fast the rate falls back
/// - `beat_pulse_ms` is how long each beat flag stays raised
#[derive(Clone, Debug, PartialEq)]
pub struct PulseParams {
    pub resting_rate: u32,
    pub max_rate: u32,
    pub motion_threshold: f64,
    pub motion_debounce_ms: Millis,
    pub motion_boost: u32,
    pub pointer_threshold: f32,
    pub pointer_debounce_ms: Millis,
    pub pointer_boost: u32,
    pub pointer_confirmations: u32,
    pub shake_hold_ms: Millis,
    pub decay_period_ms: Millis,
    pub decay_step: u32,
    pub beat_pulse_ms: Millis,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            resting_rate: RESTING_RATE,
            max_rate: MAX_RATE,
            motion_threshold: MOTION_SHAKE_THRESHOLD,
            motion_debounce_ms: MOTION_DEBOUNCE_MS,
            motion_boost: MOTION_SHAKE_BOOST,
            pointer_threshold: POINTER_SHAKE_THRESHOLD,
            pointer_debounce_ms: POINTER_DEBOUNCE_MS,
            pointer_boost: POINTER_SHAKE_BOOST,
            pointer_confirmations: POINTER_CONFIRMATIONS,
            shake_hold_ms: SHAKE_HOLD_MS,
            decay_period_ms: DECAY_PERIOD_MS,
            decay_step: DECAY_STEP,
            beat_pulse_ms: BEAT_PULSE_MS,
        }
    }
}

/// The engine's timers. Declaration order breaks ties between equal deadlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    ShakeClear,
    Decay,
    BeatOff,
    Beat,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::ShakeClear,
        TimerKind::Decay,
        TimerKind::BeatOff,
        TimerKind::Beat,
    ];
}

/// Motion-driven heart rate state machine.
///
/// All state changes happen inside `advance`, `handle_sample`,
/// `handle_pointer`, the permission calls and `stop`, each of which takes the
/// current time. Timers are deadlines that fire while time is advanced, in
/// chronological order, so the engine behaves the same whether it is driven
/// by a display loop or stepped by hand.
pub struct PulseEngine {
    params: PulseParams,
    permission_granted: bool,
    heart_rate: u32,
    shaking: bool,
    beat: bool,
    last_shake: Option<Millis>,
    motion: MotionChannel,
    pointer: PointerChannel,
    ids: TimerIds,
    shake_clear: TimerSlot,
    decay: TimerSlot,
    beat_off: TimerSlot,
    beat_ticker: TimerSlot,
    now: Millis,
    stopped: bool,
}

impl PulseEngine {
    /// Start at the resting rate. The beat animator runs from the start, so
    /// the first beat is raised at `now`.
    pub fn new(params: PulseParams, now: Millis) -> Self {
        let motion = MotionChannel::new(
            params.motion_threshold,
            params.motion_debounce_ms,
            params.motion_boost,
        );
        let pointer = PointerChannel::new(
            params.pointer_threshold,
            params.pointer_debounce_ms,
            params.pointer_boost,
            params.pointer_confirmations,
        );
        let mut engine = Self {
            heart_rate: params.resting_rate,
            params,
            permission_granted: false,
            shaking: false,
            beat: false,
            last_shake: None,
            motion,
            pointer,
            ids: TimerIds::default(),
            shake_clear: TimerSlot::default(),
            decay: TimerSlot::default(),
            beat_off: TimerSlot::default(),
            beat_ticker: TimerSlot::default(),
            now,
            stopped: false,
        };
        engine.restart_beat(now);
        log::info!(
            "[engine] started at {} bpm (beat every {:.0} ms)",
            engine.heart_rate,
            engine.beat_interval_ms()
        );
        engine
    }

    // ---------------- Accessors ----------------
    pub fn params(&self) -> &PulseParams {
        &self.params
    }

    #[inline]
    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    #[inline]
    pub fn heart_rate(&self) -> u32 {
        self.heart_rate
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    #[inline]
    pub fn beat(&self) -> bool {
        self.beat
    }

    #[inline]
    pub fn last_shake(&self) -> Option<Millis> {
        self.last_shake
    }

    #[inline]
    pub fn now(&self) -> Millis {
        self.now
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn motion_baseline(&self) -> DVec3 {
        self.motion.baseline()
    }

    pub fn pointer_baseline(&self) -> Vec2 {
        self.pointer.baseline()
    }

    pub fn pointer_candidates(&self) -> u32 {
        self.pointer.candidates()
    }

    /// Time between beats at the current rate.
    #[inline]
    pub fn beat_interval_ms(&self) -> Millis {
        beat_interval_ms(self.heart_rate)
    }

    pub fn timer(&self, kind: TimerKind) -> &TimerSlot {
        match kind {
            TimerKind::ShakeClear => &self.shake_clear,
            TimerKind::Decay => &self.decay,
            TimerKind::BeatOff => &self.beat_off,
            TimerKind::Beat => &self.beat_ticker,
        }
    }

    fn timer_mut(&mut self, kind: TimerKind) -> &mut TimerSlot {
        match kind {
            TimerKind::ShakeClear => &mut self.shake_clear,
            TimerKind::Decay => &mut self.decay,
            TimerKind::BeatOff => &mut self.beat_off,
            TimerKind::Beat => &mut self.beat_ticker,
        }
    }

    pub fn snapshot(&self) -> PulseSnapshot {
        PulseSnapshot {
            permission_granted: self.permission_granted,
            heart_rate: self.heart_rate,
            is_shaking: self.shaking,
            beat: self.beat,
        }
    }

    // ---------------- Permission ----------------

    /// The platform exposes no consent API, so motion access is granted on
    /// the spot.
    pub fn request_permission_without_consent(&mut self) -> PermissionResult {
        let result = Ok(Granted::Implicit);
        self.apply_permission(&result);
        result
    }

    /// Apply the outcome of a consent request. Returns whether motion access
    /// is granted afterwards. Failures are logged and leave the engine on the
    /// pointer channel only.
    pub fn apply_permission(&mut self, result: &PermissionResult) -> bool {
        match result {
            Ok(how) => {
                if !self.permission_granted && !self.stopped {
                    self.permission_granted = true;
                    log::info!("[permission] motion access granted ({:?})", how);
                }
            }
            Err(e @ PermissionError::Denied(_)) => {
                log::warn!("[permission] {}", e);
            }
            Err(e @ PermissionError::RequestFailed(_)) => {
                log::error!("[permission] {}", e);
            }
        }
        self.permission_granted
    }

    // ---------------- Inputs ----------------

    /// One motion reading. Ignored until motion access is granted.
    pub fn handle_sample(&mut self, sample: AccelSample, now: Millis) {
        self.advance(now);
        if self.stopped || !self.permission_granted {
            return;
        }
        let shake = self.motion.observe(sample, self.now, self.last_shake);
        if let Some(shake) = shake {
            self.register_shake(shake);
        }
    }

    /// One pointer position in page coordinates. Always active.
    pub fn handle_pointer(&mut self, pos: Vec2, now: Millis) {
        self.advance(now);
        if self.stopped {
            return;
        }
        let shake = self.pointer.observe(pos, self.now, self.last_shake);
        if let Some(shake) = shake {
            self.register_shake(shake);
        }
    }

    // ---------------- Time ----------------

    /// Fire every timer due at or before `now`, oldest first, each at its own
    /// deadline. Time never moves backwards.
    pub fn advance(&mut self, now: Millis) {
        if self.stopped {
            return;
        }
        while self.step(now).is_some() {}
        self.now = self.now.max(now);
    }

    /// Fire only the earliest timer due at or before `now`. Equal deadlines
    /// go in `TimerKind::ALL` order.
    pub fn step(&mut self, now: Millis) -> Option<(TimerKind, Millis)> {
        if self.stopped {
            return None;
        }
        let (kind, at) = self.next_due(now)?;
        self.now = at;
        self.fire(kind, at);
        Some((kind, at))
    }

    /// Earliest deadline of all timers, if any is armed.
    pub fn next_deadline(&self) -> Option<Millis> {
        TimerKind::ALL
            .iter()
            .filter_map(|k| self.timer(*k).deadline())
            .fold(None, |best: Option<Millis>, d| Some(best.map_or(d, |b| b.min(d))))
    }

    fn next_due(&self, now: Millis) -> Option<(TimerKind, Millis)> {
        let mut best: Option<(TimerKind, Millis)> = None;
        for kind in TimerKind::ALL {
            if let Some(at) = self.timer(kind).due(now) {
                match best {
                    Some((_, best_at)) if best_at <= at => {}
                    _ => best = Some((kind, at)),
                }
            }
        }
        best
    }

    fn fire(&mut self, kind: TimerKind, at: Millis) {
        _ = self.timer_mut(kind).fire();
        match kind {
            TimerKind::ShakeClear => {
                self.shaking = false;
                log::info!("[shake] settled at {} bpm", self.heart_rate);
                self.sync_decay(at);
            }
            TimerKind::Decay => {
                let floor = self.params.resting_rate;
                let next = self.heart_rate.saturating_sub(self.params.decay_step).max(floor);
                log::debug!("[decay] {} -> {}", self.heart_rate, next);
                self.set_heart_rate(next, at);
                self.sync_decay(at);
            }
            TimerKind::BeatOff => {
                self.beat = false;
            }
            TimerKind::Beat => {
                self.raise_beat(at);
            }
        }
    }

    /// Tear everything down. Inputs and time are ignored afterwards.
    pub fn stop(&mut self, now: Millis) {
        if self.stopped {
            return;
        }
        self.advance(now);
        for kind in TimerKind::ALL {
            _ = self.timer_mut(kind).cancel();
        }
        self.motion.reset();
        self.pointer.reset();
        self.beat = false;
        self.stopped = true;
        log::info!("[engine] stopped at {} bpm", self.heart_rate);
    }

    /// The page is being hidden. A page kept in the back/forward cache comes
    /// back with this engine intact, so it keeps running; otherwise it stops.
    /// Returns whether the engine is stopped afterwards.
    pub fn page_hidden(&mut self, persisted: bool, now: Millis) -> bool {
        if persisted {
            log::info!("[engine] page cached, keeping engine alive");
        } else {
            self.stop(now);
        }
        self.stopped
    }

    // ---------------- Reducer ----------------

    fn register_shake(&mut self, shake: Shake) {
        let at = self.now;
        self.shaking = true;
        self.last_shake = Some(at);
        _ = self
            .shake_clear
            .arm_timeout(&mut self.ids, at, self.params.shake_hold_ms);
        let boosted = self
            .heart_rate
            .saturating_add(shake.boost)
            .min(self.params.max_rate);
        log::info!(
            "[shake] {} shake: {} -> {} bpm",
            shake.source.as_str(),
            self.heart_rate,
            boosted
        );
        self.set_heart_rate(boosted, at);
        self.sync_decay(at);
    }

    fn set_heart_rate(&mut self, rate: u32, at: Millis) {
        let rate = rate.clamp(self.params.resting_rate, self.params.max_rate);
        if rate == self.heart_rate {
            return;
        }
        self.heart_rate = rate;
        self.restart_beat(at);
    }

    /// Run the decay ticker exactly while the rate is above rest and nothing
    /// is shaking.
    fn sync_decay(&mut self, at: Millis) {
        let wanted = !self.shaking && self.heart_rate > self.params.resting_rate;
        match (wanted, self.decay.is_armed()) {
            (true, false) => {
                _ = self
                    .decay
                    .arm_interval(&mut self.ids, at, self.params.decay_period_ms);
            }
            (false, true) => {
                _ = self.decay.cancel();
            }
            _ => {}
        }
    }

    /// Replace the beat ticker with one at the current cadence and beat now.
    fn restart_beat(&mut self, at: Millis) {
        let period = self.beat_interval_ms();
        _ = self.beat_ticker.arm_interval(&mut self.ids, at, period);
        log::debug!("[beat] cadence {:.1} ms at {} bpm", period, self.heart_rate);
        self.raise_beat(at);
    }

    fn raise_beat(&mut self, at: Millis) {
        self.beat = true;
        _ = self
            .beat_off
            .arm_timeout(&mut self.ids, at, self.params.beat_pulse_ms);
        log::trace!("[beat] at {:.1}", at);
    }
}

/// Milliseconds between beats at `rate` beats per minute.
#[inline]
pub fn beat_interval_ms(rate: u32) -> Millis {
    MS_PER_MINUTE / rate.max(1) as f64
}
