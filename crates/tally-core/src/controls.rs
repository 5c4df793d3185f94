//! The three counter controls and keyboard activation routing.

use std::fmt;

/// One of the widget's clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Increment,
    Decrement,
    Reset,
}

impl Control {
    /// All controls, in the order their handles are supplied.
    pub const ALL: [Control; 3] = [Control::Increment, Control::Decrement, Control::Reset];

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Increment => "increment",
            Control::Decrement => "decrement",
            Control::Reset => "reset",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a `KeyboardEvent.key` value activates a focused control.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Decide which control a keydown should synthesize a click on.
///
/// `focused` is the control that currently holds keyboard focus, if any.
/// When this returns `Some`, the caller must cancel the browser's default
/// action for the event and then click the returned control.
pub fn route_key(focused: Option<Control>, key: &str) -> Option<Control> {
    focused.filter(|_| is_activation_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Space"));
        assert!(!is_activation_key("a"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key(""));
    }

    #[test]
    fn test_route_focused_control() {
        for control in Control::ALL {
            assert_eq!(route_key(Some(control), "Enter"), Some(control));
            assert_eq!(route_key(Some(control), " "), Some(control));
            assert_eq!(route_key(Some(control), "ArrowUp"), None);
        }
    }

    #[test]
    fn test_route_without_focus() {
        assert_eq!(route_key(None, "Enter"), None);
        assert_eq!(route_key(None, " "), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Control::Increment.to_string(), "increment");
        assert_eq!(Control::Decrement.to_string(), "decrement");
        assert_eq!(Control::Reset.to_string(), "reset");
    }
}
