//! WebGPU client for the panel-and-ball board
//!
//! The board itself lives in `game_core`. This crate adds the run/pause
//! shell, keyboard mapping and scoring on top of it and, on wasm32, the
//! browser timer, key listener, renderer and `wasm_bindgen` exports.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

pub mod camera;
pub mod fsm;
pub mod input;
pub mod instances;
pub mod mesh;
pub mod session;
pub mod shell;

#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
mod web;

pub use fsm::{FsmState, GameAction, GameFsm, TransitionResult};
pub use session::Session;
pub use shell::Shell;
#[cfg(target_arch = "wasm32")]
pub use web::*;
