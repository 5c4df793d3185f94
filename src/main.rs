//! Headless walkthrough of the counter model.
//!
//! Drives a [`Counter`] against in-memory storage and a terminal view, then
//! "reloads the page" by building a second counter over the same storage.
//! Set `RUST_LOG=tally_core=trace` to see every commit and no-op.

use tally_core::{Counter, CounterConfig, CounterView, MemoryStorage, Storage, STORAGE_KEY};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints what a browser would render.
struct TerminalView {
    label: &'static str,
    text: String,
    frames: usize,
}

impl TerminalView {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            text: String::new(),
            frames: 0,
        }
    }
}

impl CounterView for TerminalView {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        println!("  [{}] display: {}", self.label, self.text);
    }

    fn remove_class(&mut self, _class: &str) {}

    fn force_layout(&mut self) {}

    fn add_class(&mut self, class: &str) {
        self.frames += 1;
        println!("  [{}] animate: .{} (#{})", self.label, class, self.frames);
    }
}

fn banner(title: &str) {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║  {:<58}║", title);
    println!("╚════════════════════════════════════════════════════════════╝");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CounterConfig::default()
        .with_initial_value(0)
        .with_bounds(-5, 5)
        .with_step(2);
    let storage = MemoryStorage::new();

    banner("Session 1: step 2 within [-5, 5]");
    let mut counter = Counter::new(config, storage.clone(), TerminalView::new("session 1"));
    counter.add_change_listener(|v| println!("  listener: value is now {}", v));

    for _ in 0..3 {
        let committed = counter.increment();
        info!(committed, value = counter.value(), "increment");
    }
    for _ in 0..3 {
        let committed = counter.decrement();
        info!(committed, value = counter.value(), "decrement");
    }
    counter.reset();
    info!(value = counter.value(), "reset");
    counter.increment();
    drop(counter);

    let persisted = storage.get(STORAGE_KEY).ok().flatten();
    info!(key = STORAGE_KEY, value = ?persisted, "persisted");

    banner("Session 2: reload over the same storage");
    let revived = Counter::new(
        config.with_initial_value(-5),
        storage,
        TerminalView::new("session 2"),
    );
    info!(value = revived.value(), "restored");

    println!("\n✓ Walkthrough complete!");
}
