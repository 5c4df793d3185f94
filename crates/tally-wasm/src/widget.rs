//! The browser counter widget: a [`Counter`] bound to four DOM handles.

use crate::storage::LocalStorage;
use crate::view::DomView;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tally_core::{route_key, Control, Counter, CounterConfig, CounterError, Result};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

type SharedCounter = Rc<RefCell<Counter<LocalStorage, DomView>>>;

// ============================================================================
// CounterWidget
// ============================================================================

/// A bounded, persistent counter wired to a display element and three buttons.
///
/// Construction restores the value from `localStorage` and renders it.
/// Event handlers are attached by [`init`](Self::init) and released by
/// [`destroy`](Self::destroy) (or when the widget is freed).
#[wasm_bindgen]
pub struct CounterWidget {
    counter: SharedCounter,
    value: Rc<Cell<i64>>,
    min_value: i64,
    max_value: i64,
    step: i64,
    buttons: [HtmlElement; 3],
    bindings: Option<Bindings>,
}

/// Live event listeners, kept so they can be removed again.
struct Bindings {
    document: Document,
    clicks: Vec<(HtmlElement, Closure<dyn FnMut()>)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

#[wasm_bindgen]
impl CounterWidget {
    /// Create a widget over caller-supplied elements.
    ///
    /// # Arguments
    /// * `display` - Element whose text shows the value
    /// * `increment` / `decrement` / `reset` - The three control buttons
    /// * `config` - Optional `{ initialValue, minValue, maxValue, step }`
    ///
    /// Fails if any element is `null`/`undefined` or `config` is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(
        display: Option<HtmlElement>,
        increment: Option<HtmlElement>,
        decrement: Option<HtmlElement>,
        reset: Option<HtmlElement>,
        config: JsValue,
    ) -> std::result::Result<CounterWidget, JsValue> {
        let config = decode_config(config).map_err(to_js)?;
        Self::build(display, [increment, decrement, reset], config).map_err(to_js)
    }

    /// Create a widget by looking the four elements up by id.
    #[wasm_bindgen(js_name = fromIds)]
    pub fn from_ids(
        display_id: &str,
        increment_id: &str,
        decrement_id: &str,
        reset_id: &str,
        config: JsValue,
    ) -> std::result::Result<CounterWidget, JsValue> {
        let config = decode_config(config).map_err(to_js)?;
        let document = document().map_err(to_js)?;
        let lookup = |id: &str| -> Result<HtmlElement> {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .ok_or_else(|| CounterError::MissingElement(format!("#{}", id)))
        };

        let display = lookup(display_id).map_err(to_js)?;
        let increment = lookup(increment_id).map_err(to_js)?;
        let decrement = lookup(decrement_id).map_err(to_js)?;
        let reset = lookup(reset_id).map_err(to_js)?;

        Self::build(
            Some(display),
            [Some(increment), Some(decrement), Some(reset)],
            config,
        )
        .map_err(to_js)
    }

    /// Attach the click handlers and the document keydown handler.
    ///
    /// Calling this on an already initialized widget does nothing.
    #[wasm_bindgen]
    pub fn init(&mut self) -> std::result::Result<(), JsValue> {
        if self.bindings.is_some() {
            return Ok(());
        }
        let bindings = self.bind().map_err(to_js)?;
        self.bindings = Some(bindings);
        debug!("counter widget initialized");
        Ok(())
    }

    /// Detach every handler attached by [`init`](Self::init).
    ///
    /// The persisted value is left in storage.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        if let Some(bindings) = self.bindings.take() {
            bindings.release();
            debug!("counter widget destroyed");
        }
    }

    /// Whether event handlers are currently attached.
    #[wasm_bindgen(getter, js_name = isInitialized)]
    pub fn is_initialized(&self) -> bool {
        self.bindings.is_some()
    }

    /// Step up. Returns `false` when the step would pass the maximum.
    #[wasm_bindgen]
    pub fn increment(&self) -> bool {
        activate(&self.counter, Control::Increment)
    }

    /// Step down. Returns `false` when the step would pass the minimum.
    #[wasm_bindgen]
    pub fn decrement(&self) -> bool {
        activate(&self.counter, Control::Decrement)
    }

    /// Set the value to 0.
    #[wasm_bindgen]
    pub fn reset(&self) -> bool {
        activate(&self.counter, Control::Reset)
    }

    /// The current value.
    ///
    /// Safe to read from inside a change listener.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.value.get() as f64
    }

    #[wasm_bindgen(getter, js_name = minValue)]
    pub fn min_value(&self) -> f64 {
        self.min_value as f64
    }

    #[wasm_bindgen(getter, js_name = maxValue)]
    pub fn max_value(&self) -> f64 {
        self.max_value as f64
    }

    #[wasm_bindgen(getter)]
    pub fn step(&self) -> f64 {
        self.step as f64
    }

    /// Register a function called with the new value after every change.
    ///
    /// Listeners run in registration order and cannot be removed. A listener
    /// that throws is logged and the remaining listeners still run.
    #[wasm_bindgen(js_name = addChangeListener)]
    pub fn add_change_listener(
        &self,
        callback: js_sys::Function,
    ) -> std::result::Result<(), JsValue> {
        let mut counter = self.counter.try_borrow_mut().map_err(|_| {
            JsValue::from_str("cannot add a listener while the counter is changing")
        })?;
        counter.add_change_listener(move |value| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_f64(value as f64)) {
                warn!(value, error = ?e, "change listener threw");
            }
        });
        Ok(())
    }
}

impl CounterWidget {
    fn build(
        display: Option<HtmlElement>,
        controls: [Option<HtmlElement>; 3],
        config: CounterConfig,
    ) -> Result<Self> {
        let display = display.ok_or_else(|| CounterError::MissingElement("display".into()))?;
        let [increment, decrement, reset] = controls;
        let require = |el: Option<HtmlElement>, control: Control| {
            el.ok_or_else(|| CounterError::MissingElement(format!("{} button", control)))
        };
        let buttons = [
            require(increment, Control::Increment)?,
            require(decrement, Control::Decrement)?,
            require(reset, Control::Reset)?,
        ];

        let mut counter = Counter::new(config, LocalStorage::open(), DomView::new(display));

        // Mirror the value outside the RefCell so JS listeners can read it
        // while a commit still holds the borrow.
        let value = Rc::new(Cell::new(counter.value()));
        let mirror = Rc::clone(&value);
        counter.add_change_listener(move |v| mirror.set(v));

        Ok(Self {
            min_value: counter.min_value(),
            max_value: counter.max_value(),
            step: counter.step(),
            counter: Rc::new(RefCell::new(counter)),
            value,
            buttons,
            bindings: None,
        })
    }

    fn bind(&self) -> Result<Bindings> {
        let document = document()?;

        let mut clicks = Vec::with_capacity(self.buttons.len());
        for (control, button) in Control::ALL.into_iter().zip(self.buttons.iter()) {
            let counter = Rc::clone(&self.counter);
            let handler = Closure::<dyn FnMut()>::new(move || {
                activate(&counter, control);
            });
            if let Err(e) =
                button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            {
                release_clicks(&clicks);
                return Err(CounterError::Dom(format!("{} click listener: {:?}", control, e)));
            }
            clicks.push((button.clone(), handler));
        }

        let buttons = self.buttons.clone();
        let doc = document.clone();
        let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let focused = focused_control(&doc, &buttons);
            if let Some(control) = route_key(focused, &event.key()) {
                event.prevent_default();
                buttons[index_of(control)].click();
            }
        });
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        {
            release_clicks(&clicks);
            return Err(CounterError::Dom(format!("keydown listener: {:?}", e)));
        }

        Ok(Bindings {
            document,
            clicks,
            keydown,
        })
    }
}

impl Drop for CounterWidget {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl Bindings {
    fn release(self) {
        release_clicks(&self.clicks);
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "failed to remove keydown listener");
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn activate(counter: &SharedCounter, control: Control) -> bool {
    match counter.try_borrow_mut() {
        Ok(mut counter) => counter.activate(control),
        Err(_) => {
            warn!(%control, "ignoring re-entrant counter change from a listener");
            false
        }
    }
}

fn release_clicks(clicks: &[(HtmlElement, Closure<dyn FnMut()>)]) {
    for (button, handler) in clicks {
        if let Err(e) =
            button.remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "failed to remove click listener");
        }
    }
}

fn focused_control(document: &Document, buttons: &[HtmlElement; 3]) -> Option<Control> {
    let active = document.active_element()?;
    let active: &JsValue = active.as_ref();
    Control::ALL
        .into_iter()
        .zip(buttons.iter())
        .find(|(_, button)| {
            let button: &JsValue = button.as_ref();
            button == active
        })
        .map(|(control, _)| control)
}

fn index_of(control: Control) -> usize {
    match control {
        Control::Increment => 0,
        Control::Decrement => 1,
        Control::Reset => 2,
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CounterError::Dom("no document available".to_string()))
}

fn decode_config(config: JsValue) -> Result<CounterConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(CounterConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| CounterError::Config(e.to_string()))
}

fn to_js(e: CounterError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
