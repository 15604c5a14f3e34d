use std::sync::{Arc, Mutex};

/// A handle to one rendered element. Widgets receive these at attach time
/// instead of looking anything up globally; the handle is cheap to clone and
/// every clone observes the same state.
#[derive(Clone)]
pub struct Element {
    inner: Arc<Mutex<ElementState>>,
}

struct ElementState {
    html: String,
    text: String,
    value: String,
    src: String,
    visible: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        ElementState {
            html: String::new(),
            text: String::new(),
            value: String::new(),
            src: String::new(),
            visible: true,
        }
    }
}

impl Element {
    pub fn new() -> Self {
        Element {
            inner: Arc::new(Mutex::new(ElementState::default())),
        }
    }

    /// Create an element whose input value is pre-filled, the way a form
    /// field can arrive with server-rendered content.
    pub fn with_value(value: &str) -> Self {
        let el = Element::new();
        el.set_value(value.to_string());
        el
    }

    /// Replace the element's inner HTML wholesale.
    pub fn set_html(&self, html: String) {
        self.inner.lock().unwrap().html = html;
    }

    pub fn html(&self) -> String {
        self.inner.lock().unwrap().html.clone()
    }

    pub fn set_text(&self, text: String) {
        self.inner.lock().unwrap().text = text;
    }

    pub fn text(&self) -> String {
        self.inner.lock().unwrap().text.clone()
    }

    /// Current input value (text field, textarea, select).
    pub fn value(&self) -> String {
        self.inner.lock().unwrap().value.clone()
    }

    pub fn set_value(&self, value: String) {
        self.inner.lock().unwrap().value = value;
    }

    pub fn src(&self) -> String {
        self.inner.lock().unwrap().src.clone()
    }

    pub fn set_src(&self, src: String) {
        self.inner.lock().unwrap().src = src;
    }

    pub fn show(&self) {
        self.inner.lock().unwrap().visible = true;
    }

    pub fn hide(&self) {
        self.inner.lock().unwrap().visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.inner.lock().unwrap().visible
    }
}

impl Default for Element {
    fn default() -> Self {
        Element::new()
    }
}
