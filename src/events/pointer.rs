use crate::clock::Clock;
use crate::core::PulseEngine;
use crate::dom::Listener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Desktop fallback: rapid mouse movement counts as shaking.
pub fn wire_pointer(
    window: &web::Window,
    engine: Rc<RefCell<PulseEngine>>,
    clock: Clock,
) -> anyhow::Result<Listener> {
    Listener::new(window, "mousemove", move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        engine.borrow_mut().handle_pointer(pos, clock.now_ms());
    })
}
