//! # Tally WebAssembly Bindings
//!
//! This crate exposes the Tally counter to the browser: a bounded counter
//! with increment, decrement and reset buttons, persisted in `localStorage`
//! and animated on every change.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { CounterWidget } from 'tally-wasm';
//!
//! await init();
//!
//! const widget = CounterWidget.fromIds('count', 'inc', 'dec', 'reset', {
//!   minValue: -5,
//!   maxValue: 5,
//!   step: 2,
//! });
//! widget.addChangeListener((value) => console.log('now', value));
//! widget.init();
//!
//! // later
//! widget.destroy();
//! ```
//!
//! The display element gets the `bump` class re-applied on every change;
//! style it with a CSS animation to get the visual feedback.

pub mod logging;
pub mod storage;
pub mod view;
pub mod widget;

pub use storage::LocalStorage;
pub use tally_core::{CounterConfig, CounterError, STORAGE_KEY};
pub use view::DomView;
pub use widget::CounterWidget;

use wasm_bindgen::prelude::*;

// Panic hook and console logging, installed once when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(tracing::Level::INFO);
}

/// Log a message to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
