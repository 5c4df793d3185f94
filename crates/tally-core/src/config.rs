//! Constructor-time configuration for a [`Counter`](crate::Counter).

use serde::{Deserialize, Serialize};

/// Largest integer a JavaScript number represents exactly (`Number.MAX_SAFE_INTEGER`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest integer a JavaScript number represents exactly (`Number.MIN_SAFE_INTEGER`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Counter configuration.
///
/// Every field is optional when decoded; absent fields take the defaults
/// below. Field names are camelCase on the wire so a plain JS object
/// `{ initialValue, minValue, maxValue, step }` decodes directly.
///
/// Nothing here is validated: `initial_value` may lie outside the bounds and
/// `step` may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    /// Starting value when storage holds nothing usable. Default `0`.
    pub initial_value: i64,
    /// Inclusive lower bound. Default [`MIN_SAFE_INTEGER`].
    pub min_value: i64,
    /// Inclusive upper bound. Default [`MAX_SAFE_INTEGER`].
    pub max_value: i64,
    /// Amount applied per increment/decrement. Default `1`.
    pub step: i64,
}

impl CounterConfig {
    pub fn with_initial_value(mut self, value: i64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            min_value: MIN_SAFE_INTEGER,
            max_value: MAX_SAFE_INTEGER,
            step: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CounterConfig::default();
        assert_eq!(config.initial_value, 0);
        assert_eq!(config.min_value, -9_007_199_254_740_991);
        assert_eq!(config.max_value, 9_007_199_254_740_991);
        assert_eq!(config.step, 1);
    }

    #[test]
    fn test_builder() {
        let config = CounterConfig::default()
            .with_initial_value(3)
            .with_bounds(-5, 5)
            .with_step(2);
        assert_eq!(
            config,
            CounterConfig {
                initial_value: 3,
                min_value: -5,
                max_value: 5,
                step: 2,
            }
        );
    }

    #[test]
    fn test_decode_partial_object() {
        let config: CounterConfig =
            serde_json::from_str(r#"{"minValue": -5, "step": 2}"#).unwrap();
        assert_eq!(config.initial_value, 0);
        assert_eq!(config.min_value, -5);
        assert_eq!(config.max_value, MAX_SAFE_INTEGER);
        assert_eq!(config.step, 2);
    }

    #[test]
    fn test_decode_empty_object() {
        let config: CounterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn test_decode_rejects_wrong_type() {
        let result: Result<CounterConfig, _> = serde_json::from_str(r#"{"step": "two"}"#);
        assert!(result.is_err());
    }
}
