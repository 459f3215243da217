//! Browser resources that exist only while the board is running

use crate::session::Session;
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{KeyboardEvent, Window};

/// Tick timer plus keydown listener. Dropping this cancels the timer and
/// detaches the listener.
pub struct RunGuards {
    _interval: Interval,
    _keys: EventListener,
}

impl RunGuards {
    pub fn start(session: Rc<RefCell<Session>>, tick_ms: u32) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let ticking = Rc::clone(&session);
        let interval = Interval::new(tick_ms, move || {
            // Busy only if an alert is somehow re-entering; skip the tick
            let Ok(mut session) = ticking.try_borrow_mut() else {
                return;
            };
            session.tick(|message| announce(&window, message));
        });

        let keys = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Ok(mut session) = session.try_borrow_mut() {
                session.key_down(&event.code());
            }
        });

        Ok(Self {
            _interval: interval,
            _keys: keys,
        })
    }
}

fn announce(window: &Window, message: &str) {
    console_log!("{}", message.replace('\n', " "));
    if let Err(e) = window.alert_with_message(message) {
        console_error!("alert failed: {:?}", e);
    }
}
