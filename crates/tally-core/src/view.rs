//! Display capability: the text surface plus the CSS animation hook.

/// The surface a counter renders into.
///
/// Restarting a CSS animation takes three calls in a fixed order:
/// [`remove_class`](Self::remove_class), [`force_layout`](Self::force_layout),
/// [`add_class`](Self::add_class). Without the synchronous layout read in the
/// middle, browsers coalesce the remove/add pair and the animation does not
/// replay.
pub trait CounterView {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Remove a CSS class from the surface.
    fn remove_class(&mut self, class: &str);

    /// Force a synchronous layout (style recalculation) of the surface.
    fn force_layout(&mut self);

    /// Add a CSS class to the surface.
    fn add_class(&mut self, class: &str);
}

/// A view that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl CounterView for NullView {
    fn set_text(&mut self, _text: &str) {}
    fn remove_class(&mut self, _class: &str) {}
    fn force_layout(&mut self) {}
    fn add_class(&mut self, _class: &str) {}
}
