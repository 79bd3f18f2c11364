//! [`Page`] over the browser DOM.

use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, IntersectionObserver, Window};

use crate::core::page::{ElementRef, Page, ScrollBehavior};

/// Browser page. DOM nodes handed to behaviors are interned here so the same
/// node always maps to the same [`ElementRef`].
pub struct WebPage {
    window: Window,
    document: Document,
    elements: Vec<Element>,
    // node -> registry index, keyed on JS object identity
    index: js_sys::Map,
    observer: Option<IntersectionObserver>,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            elements: Vec::new(),
            index: js_sys::Map::new(),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: IntersectionObserver) {
        self.observer = Some(observer);
    }

    pub fn intern(&mut self, element: Element) -> ElementRef {
        let key: &JsValue = element.as_ref();
        if let Some(index) = self.index.get(key).as_f64() {
            return ElementRef::new(index as u32);
        }
        let index = self.elements.len() as u32;
        self.index.set(key, &JsValue::from(index));
        self.elements.push(element);
        ElementRef::new(index)
    }

    pub fn element(&self, el: ElementRef) -> Option<&Element> {
        self.elements.get(el.index())
    }

    fn html(&self, el: ElementRef) -> Option<&HtmlElement> {
        self.element(el)?.dyn_ref::<HtmlElement>()
    }

    fn collect(&mut self, list: Result<web_sys::NodeList, JsValue>) -> Vec<ElementRef> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.intern(element))
            .collect()
    }
}

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(op, error = ?err, "DOM operation failed");
    }
}

impl Page for WebPage {
    fn element_by_id(&mut self, id: &str) -> Option<ElementRef> {
        let element = self.document.get_element_by_id(id)?;
        Some(self.intern(element))
    }

    fn query(&mut self, selector: &str) -> Option<ElementRef> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(self.intern(element))
    }

    fn query_all(&mut self, selector: &str) -> Vec<ElementRef> {
        let list = self.document.query_selector_all(selector);
        self.collect(list)
    }

    fn query_within(&mut self, scope: ElementRef, selector: &str) -> Option<ElementRef> {
        let element = self.element(scope)?.query_selector(selector).ok().flatten()?;
        Some(self.intern(element))
    }

    fn parent(&mut self, el: ElementRef) -> Option<ElementRef> {
        let parent = self.element(el)?.parent_element()?;
        Some(self.intern(parent))
    }

    fn append_child(&mut self, parent: ElementRef, tag: &str) -> Option<ElementRef> {
        let child = self.document.create_element(tag).ok()?;
        self.element(parent)?.append_child(&child).ok()?;
        Some(self.intern(child))
    }

    fn attribute(&self, el: ElementRef, name: &str) -> Option<String> {
        self.element(el)?.get_attribute(name)
    }

    fn set_attribute(&mut self, el: ElementRef, name: &str, value: &str) {
        if let Some(element) = self.element(el) {
            report("set_attribute", element.set_attribute(name, value));
        }
    }

    fn has_class(&self, el: ElementRef, class: &str) -> bool {
        self.element(el)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn add_class(&mut self, el: ElementRef, class: &str) {
        if let Some(element) = self.element(el) {
            report("add_class", element.class_list().add_1(class));
        }
    }

    fn remove_class(&mut self, el: ElementRef, class: &str) {
        if let Some(element) = self.element(el) {
            report("remove_class", element.class_list().remove_1(class));
        }
    }

    fn set_class_name(&mut self, el: ElementRef, value: &str) {
        if let Some(element) = self.element(el) {
            element.set_class_name(value);
        }
    }

    fn style(&self, el: ElementRef, property: &str) -> String {
        self.html(el)
            .and_then(|element| element.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&mut self, el: ElementRef, property: &str, value: &str) {
        if let Some(element) = self.html(el) {
            report("set_style", element.style().set_property(property, value));
        }
    }

    fn text(&self, el: ElementRef) -> String {
        self.element(el)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text(&mut self, el: ElementRef, text: &str) {
        if let Some(element) = self.element(el) {
            element.set_text_content(Some(text));
        }
    }

    fn inner_html(&self, el: ElementRef) -> String {
        self.element(el)
            .map(|element| element.inner_html())
            .unwrap_or_default()
    }

    fn set_inner_html(&mut self, el: ElementRef, html: &str) {
        if let Some(element) = self.element(el) {
            element.set_inner_html(html);
        }
    }

    // `value` and `disabled` are read as plain properties so inputs,
    // textareas, selects and buttons all work without per-type casts.
    fn value(&self, el: ElementRef) -> String {
        self.element(el)
            .and_then(|element| js_sys::Reflect::get(element, &JsValue::from_str("value")).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    fn set_disabled(&mut self, el: ElementRef, disabled: bool) {
        if let Some(element) = self.element(el) {
            let result = js_sys::Reflect::set(
                element,
                &JsValue::from_str("disabled"),
                &JsValue::from_bool(disabled),
            );
            report("set_disabled", result.map(|_| ()));
        }
    }

    fn is_disabled(&self, el: ElementRef) -> bool {
        self.element(el)
            .and_then(|element| js_sys::Reflect::get(element, &JsValue::from_str("disabled")).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    fn reset_form(&mut self, form: ElementRef) {
        match self.element(form).and_then(|el| el.dyn_ref::<HtmlFormElement>()) {
            Some(form) => form.reset(),
            None => warn!(%form, "reset requested on a non-form element"),
        }
    }

    fn offset_top(&self, el: ElementRef) -> f64 {
        self.html(el)
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or(0.0)
    }

    fn client_height(&self, el: ElementRef) -> f64 {
        self.element(el)
            .map(|element| f64::from(element.client_height()))
            .unwrap_or(0.0)
    }

    fn viewport_top(&self, el: ElementRef) -> f64 {
        self.element(el)
            .map(|element| element.get_bounding_client_rect().top())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn location(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn open_popup(&mut self, url: &str, features: &str) {
        if let Err(err) = self
            .window
            .open_with_url_and_target_and_features(url, "_blank", features)
        {
            warn!(error = ?err, "popup blocked");
        }
    }

    fn alert(&mut self, message: &str) {
        report("alert", self.window.alert_with_message(message));
    }

    fn observe_visibility(&mut self, el: ElementRef) -> bool {
        match (&self.observer, self.elements.get(el.index())) {
            (Some(observer), Some(element)) => {
                observer.observe(element);
                true
            }
            _ => false,
        }
    }

    fn unobserve_visibility(&mut self, el: ElementRef) {
        if let (Some(observer), Some(element)) = (&self.observer, self.elements.get(el.index())) {
            observer.unobserve(element);
        }
    }
}
