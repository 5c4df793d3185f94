//! The bounded counter model.
//!
//! A [`Counter`] holds an integer, a step and an inclusive `[min, max]`
//! range. Increment and decrement commit only when the candidate value stays
//! inside the range; otherwise they are silent no-ops. Reset always commits
//! and always lands on `0`, whatever the bounds say.
//!
//! Every commit runs the same sequence, synchronously and in order:
//!
//! 1. display sync (`view.set_text`)
//! 2. animation restart (remove class, force layout, add class)
//! 3. persistence under [`STORAGE_KEY`]
//! 4. listener notification, in registration order

use crate::config::CounterConfig;
use crate::controls::Control;
use crate::storage::Storage;
use crate::view::CounterView;
use std::fmt;
use tracing::{debug, trace, warn};

/// Storage key the counter value is persisted under.
pub const STORAGE_KEY: &str = "counterValue";

/// CSS class toggled on the display surface to replay the change animation.
pub const ANIMATION_CLASS: &str = "bump";

type Listener = Box<dyn FnMut(i64)>;

/// A bounded, persistent counter.
pub struct Counter<S: Storage, V: CounterView> {
    value: i64,
    min_value: i64,
    max_value: i64,
    step: i64,
    listeners: Vec<Listener>,
    storage: S,
    view: V,
}

impl<S: Storage, V: CounterView> Counter<S, V> {
    /// Create a counter, restoring the last persisted value when there is one.
    ///
    /// A restored value is taken as-is, even when it lies outside the
    /// configured bounds. Unreadable or unparseable storage falls back to
    /// `config.initial_value`, which is not bounds-checked either.
    ///
    /// Construction renders the starting value but does not animate, persist
    /// or notify.
    pub fn new(config: CounterConfig, storage: S, view: V) -> Self {
        let value = restore(&storage).unwrap_or(config.initial_value);

        debug!(
            value,
            min = config.min_value,
            max = config.max_value,
            step = config.step,
            "counter created"
        );

        let mut counter = Self {
            value,
            min_value: config.min_value,
            max_value: config.max_value,
            step: config.step,
            listeners: Vec::new(),
            storage,
            view,
        };
        counter.sync_display();
        counter
    }

    /// Add `step` if the result stays at or below `max_value`.
    ///
    /// Returns whether the change was committed.
    pub fn increment(&mut self) -> bool {
        match self.value.checked_add(self.step) {
            Some(candidate) if candidate <= self.max_value => {
                self.commit(candidate);
                true
            }
            _ => {
                trace!(value = self.value, step = self.step, "increment out of range");
                false
            }
        }
    }

    /// Subtract `step` if the result stays at or above `min_value`.
    ///
    /// Returns whether the change was committed.
    pub fn decrement(&mut self) -> bool {
        match self.value.checked_sub(self.step) {
            Some(candidate) if candidate >= self.min_value => {
                self.commit(candidate);
                true
            }
            _ => {
                trace!(value = self.value, step = self.step, "decrement out of range");
                false
            }
        }
    }

    /// Set the value to `0`, ignoring the configured bounds and initial value.
    pub fn reset(&mut self) {
        self.commit(0);
    }

    /// Run the operation bound to `control`. Returns whether it committed.
    pub fn activate(&mut self, control: Control) -> bool {
        match control {
            Control::Increment => self.increment(),
            Control::Decrement => self.decrement(),
            Control::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Register a callback invoked with the new value after every commit.
    ///
    /// Callbacks run in registration order. There is no way to remove one.
    pub fn add_change_listener<F>(&mut self, listener: F)
    where
        F: FnMut(i64) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Push the current value into the display surface.
    pub fn sync_display(&mut self) {
        self.view.set_text(&self.value.to_string());
    }

    /// Replay the change animation on the display surface.
    pub fn animate(&mut self) {
        self.view.remove_class(ANIMATION_CLASS);
        self.view.force_layout();
        self.view.add_class(ANIMATION_CLASS);
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.set(STORAGE_KEY, &self.value.to_string()) {
            warn!(value = self.value, error = %e, "failed to persist counter value");
        }
    }

    fn commit(&mut self, value: i64) {
        trace!(from = self.value, to = value, "commit");
        self.value = value;
        self.sync_display();
        self.animate();
        self.persist();
        for listener in self.listeners.iter_mut() {
            listener(value);
        }
    }
}

impl<S: Storage, V: CounterView> fmt::Debug for Counter<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("step", &self.step)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn restore<S: Storage>(storage: &S) -> Option<i64> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "failed to read persisted counter value");
            return None;
        }
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => {
            debug!(value, "restored counter value");
            Some(value)
        }
        Err(e) => {
            warn!(stored = %raw, error = %e, "ignoring unparseable counter value");
            None
        }
    }
}
