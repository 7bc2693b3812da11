use crate::clock::Clock;
use crate::core::{PulseEngine, PulseSnapshot};
use crate::render::View;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<PulseEngine>>,
    pub clock: Clock,
    pub view: View,
    pub last: Option<PulseSnapshot>,
}

impl FrameContext {
    /// Advance the engine to now and redraw if anything visible changed.
    /// Returns false once the engine has been stopped.
    pub fn frame(&mut self) -> bool {
        let snap = {
            let mut eng = self.engine.borrow_mut();
            eng.advance(self.clock.now_ms());
            if eng.is_stopped() {
                return false;
            }
            eng.snapshot()
        };
        if self.last != Some(snap) {
            self.view.render(&snap);
            self.last = Some(snap);
        }
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop ended");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
