//! DOM element as a counter [`CounterView`].

use tally_core::CounterView;
use tracing::warn;
use web_sys::HtmlElement;

/// Renders the counter into an element's text and toggles its animation class.
#[derive(Debug, Clone)]
pub struct DomView {
    element: HtmlElement,
}

impl DomView {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl CounterView for DomView {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(e) = self.element.class_list().remove_1(class) {
            warn!(class, error = ?e, "classList.remove failed");
        }
    }

    // Reading offsetWidth flushes pending style changes synchronously.
    fn force_layout(&mut self) {
        let _ = self.element.offset_width();
    }

    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.element.class_list().add_1(class) {
            warn!(class, error = ?e, "classList.add failed");
        }
    }
}
