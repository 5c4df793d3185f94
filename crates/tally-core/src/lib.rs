//! # Tally Core
//!
//! State model for a bounded, persistent counter widget.
//!
//! The [`Counter`] owns an integer clamped to `[min_value, max_value]` and
//! talks to the outside world only through two injected capabilities:
//!
//! - [`Storage`]: string key-value persistence (browser `localStorage` in production)
//! - [`CounterView`]: the text surface and its CSS animation hook
//!
//! Keyboard activation is expressed as a pure routing function
//! ([`controls::route_key`]) so the DOM layer stays thin.
//!
//! ```
//! use tally_core::{Counter, CounterConfig, MemoryStorage, NullView};
//!
//! let config = CounterConfig::default().with_bounds(-5, 5).with_step(2);
//! let mut counter = Counter::new(config, MemoryStorage::new(), NullView);
//!
//! assert!(counter.increment());
//! assert!(counter.increment());
//! assert!(!counter.increment()); // 6 > 5, no-op
//! assert_eq!(counter.value(), 4);
//! ```

pub mod config;
pub mod controls;
pub mod counter;
pub mod error;
pub mod storage;
pub mod view;

pub use config::{CounterConfig, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use controls::{is_activation_key, route_key, Control};
pub use counter::{Counter, ANIMATION_CLASS, STORAGE_KEY};
pub use error::{CounterError, Result};
pub use storage::{MemoryStorage, Storage};
pub use view::{CounterView, NullView};
