//! `wasm_bindgen` exports: one global client driven from the page.

use crate::fsm::TransitionResult;
use crate::listener::RunGuards;
use crate::renderer::Renderer;
use crate::session::Session;
use game_core::{Config, Speed};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct Client {
    session: Rc<RefCell<Session>>,
    renderer: Renderer,
    guards: Option<RunGuards>,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement, config: Config) -> Result<Self, JsValue> {
        config.validate().map_err(|e| JsValue::from_str(&e))?;
        let renderer = Renderer::new(canvas, config.width, config.height)
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        Ok(Self {
            session: Rc::new(RefCell::new(Session::new(config))),
            renderer,
            guards: None,
        })
    }

    fn toggle_running(&mut self) -> Result<bool, JsValue> {
        let result = self.session.borrow_mut().toggle_running();
        self.follow(result)
    }

    fn set_running(&mut self, running: bool) -> Result<bool, JsValue> {
        let result = self.session.borrow_mut().set_running(running);
        self.follow(result)
    }

    /// Create or drop the run guards to match a state change
    fn follow(&mut self, result: TransitionResult) -> Result<bool, JsValue> {
        if result.started() {
            let tick_ms = self.session.borrow().board().config().tick_ms;
            match RunGuards::start(Rc::clone(&self.session), tick_ms) {
                Ok(guards) => self.guards = Some(guards),
                Err(e) => {
                    self.session.borrow_mut().pause();
                    return Err(e);
                }
            }
            console_log!("Running, tick every {}ms", tick_ms);
        } else if result.stopped() {
            self.guards = None;
            console_log!("Paused");
        }

        Ok(self.session.borrow().is_running())
    }

    fn render(&mut self) -> Result<(), JsValue> {
        let scene = self.session.borrow().board().scene();
        self.renderer.draw(&scene).map_err(|e| JsValue::from_str(&e))
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let client = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Client not initialized"))?;
        f(client)
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let config = Config::default();
        let client = Client::new(canvas, config.clone()).await.inspect_err(|e| {
            console_error!("Client init failed: {:?}", e);
        })?;
        console_log!(
            "Client ready: {}x{} board, speed {}",
            config.width,
            config.height,
            config.speed.label()
        );
        CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

/// Start or stop the board; returns whether it is now running
#[wasm_bindgen]
pub fn toggle_running() -> Result<bool, JsValue> {
    with_client(|client| client.toggle_running())
}

/// Start (`true`) or stop (`false`); repeating the current state does nothing
#[wasm_bindgen]
pub fn set_running(running: bool) -> Result<bool, JsValue> {
    with_client(|client| client.set_running(running))
}

#[wasm_bindgen]
pub fn is_running() -> Result<bool, JsValue> {
    with_client(|client| Ok(client.session.borrow().is_running()))
}

/// Accepts 1.0, 1.5 or 2.0
#[wasm_bindgen]
pub fn set_speed(multiplier: f64) -> Result<(), JsValue> {
    let speed = Speed::from_multiplier(multiplier)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown speed {}", multiplier)))?;
    with_client(|client| {
        client.session.borrow_mut().set_speed(speed);
        console_log!("Speed set to {}", speed.label());
        Ok(())
    })
}

#[wasm_bindgen]
pub fn set_player_names(left: &str, right: &str) -> Result<(), JsValue> {
    with_client(|client| {
        client.session.borrow_mut().set_player_names(left, right);
        Ok(())
    })
}

/// `[left, right]`
#[wasm_bindgen]
pub fn score() -> Result<Vec<u32>, JsValue> {
    with_client(|client| Ok(client.session.borrow().shell().score().as_pair().to_vec()))
}

#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.render())
}

/// Drop the client: stops the timer and detaches the key listener
#[wasm_bindgen]
pub fn shutdown() {
    let client = CLIENT.with(|slot| slot.borrow_mut().take());
    if client.is_some() {
        drop(client);
        console_log!("Client shut down");
    }
}
