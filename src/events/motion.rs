use crate::clock::Clock;
use crate::core::{AccelSample, PulseEngine};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Convert a `devicemotion` event. Missing readings become missing axes.
#[inline]
pub fn accel_sample(ev: &web::DeviceMotionEvent) -> AccelSample {
    match ev.acceleration_including_gravity() {
        Some(a) => AccelSample {
            x: a.x(),
            y: a.y(),
            z: a.z(),
        },
        None => AccelSample::default(),
    }
}

pub fn wire_motion(
    window: &web::Window,
    engine: Rc<RefCell<PulseEngine>>,
    clock: Clock,
) -> anyhow::Result<Listener> {
    Listener::new(window, "devicemotion", move |ev: web::DeviceMotionEvent| {
        engine
            .borrow_mut()
            .handle_sample(accel_sample(&ev), clock.now_ms());
    })
}
