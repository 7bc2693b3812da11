#![cfg(target_arch = "wasm32")]
use crate::clock::Clock;
use crate::core::{PulseEngine, PulseParams};
use crate::dom::Listener;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod clock;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod permission;
mod render;

/// Listeners owned by the page; dropping them unsubscribes.
#[derive(Default)]
struct Subscriptions {
    pointer: Option<Listener>,
    motion: Option<Listener>,
}

#[derive(Clone)]
struct App {
    window: web::Window,
    engine: Rc<RefCell<PulseEngine>>,
    clock: Clock,
    subs: Rc<RefCell<Subscriptions>>,
}

impl App {
    /// Start delivering motion samples once access is granted. Safe to call
    /// repeatedly.
    fn enable_motion(&self) {
        if !self.engine.borrow().permission_granted() || self.subs.borrow().motion.is_some() {
            return;
        }
        match events::motion::wire_motion(&self.window, self.engine.clone(), self.clock) {
            Ok(l) => self.subs.borrow_mut().motion = Some(l),
            Err(e) => log::error!("[permission] {:?}", e),
        }
    }

    /// Handler for the enable button.
    fn request_permission(&self) {
        match permission::begin() {
            permission::ConsentRequest::NotRequired => {
                _ = self.engine.borrow_mut().request_permission_without_consent();
                self.enable_motion();
            }
            permission::ConsentRequest::Failed(e) => {
                _ = self.engine.borrow_mut().apply_permission(&Err(e));
            }
            permission::ConsentRequest::Pending(promise) => {
                let app = self.clone();
                spawn_local(async move {
                    let result = permission::finish(promise).await;
                    _ = app.engine.borrow_mut().apply_permission(&result);
                    app.enable_motion();
                });
            }
        }
    }

    fn page_hidden(&self, persisted: bool) {
        let stopped = self
            .engine
            .borrow_mut()
            .page_hidden(persisted, self.clock.now_ms());
        if !stopped {
            return;
        }
        let mut subs = self.subs.borrow_mut();
        subs.motion = None;
        subs.pointer = None;
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("heartrate-shaker starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let view = render::View::from_document(&document)?;

    let clock = Clock::start();
    let engine = Rc::new(RefCell::new(PulseEngine::new(
        PulseParams::default(),
        clock.now_ms(),
    )));
    let app = App {
        window: window.clone(),
        engine: engine.clone(),
        clock,
        subs: Rc::new(RefCell::new(Subscriptions::default())),
    };

    // Pointer fallback runs for the whole session, permission or not.
    let pointer = events::pointer::wire_pointer(&window, engine.clone(), clock)?;
    app.subs.borrow_mut().pointer = Some(pointer);

    let app_click = app.clone();
    dom::add_click_listener(&document, constants::ENABLE_BUTTON_ID, move || {
        app_click.request_permission();
    });

    let app_hide = app.clone();
    let on_pagehide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        app_hide.page_hidden(ev.persisted());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
    on_pagehide.forget();

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        engine,
        clock,
        view,
        last: None,
    })));
    Ok(())
}
