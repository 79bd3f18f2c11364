//! In-memory page and virtual clock for behavior tests.
//!
//! [`FakePage`] understands the small selector subset the behaviors use:
//! selector lists (`a, button`), tag names, `.class`, `#id`, `[attr]`,
//! `[attr="value"]` and `[attr^="prefix"]`. Geometry is whatever the test
//! sets on each element.
//!
//! ```ignore
//! let mut page = FakePage::new();
//! let nav = page.add(FakeElement::new("nav").id("mainNav"));
//! page.set_scroll_y(150.0);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::core::page::{ElementRef, Page, ScrollBehavior};
use crate::core::schedule::{Scheduler, Wake};
use crate::core::timing::FALLBACK_FRAME_MS;

// =========================================================================
// Fake elements
// =========================================================================

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub inner_html: String,
    pub value: String,
    pub disabled: bool,
    pub parent: Option<ElementRef>,
    pub offset_top: f64,
    pub client_height: f64,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        for name in class.split_whitespace() {
            self.classes.push(name.to_string());
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.style.insert(property.to_string(), value.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.inner_html = html.to_string();
        self.text = html.to_string();
        self
    }

    pub fn within(mut self, parent: ElementRef) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn geometry(mut self, offset_top: f64, client_height: f64) -> Self {
        self.offset_top = offset_top;
        self.client_height = client_height;
        self
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|compound| !compound.is_empty())
            .any(|compound| self.matches_compound(compound))
    }

    fn matches_compound(&self, compound: &str) -> bool {
        let is_marker = |c: char| matches!(c, '.' | '#' | '[');
        let tag_end = compound.find(is_marker).unwrap_or(compound.len());
        let tag = &compound[..tag_end];
        if !tag.is_empty() && tag != "*" && tag != self.tag {
            return false;
        }

        let mut rest = &compound[tag_end..];
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('[') {
                let Some(close) = after.find(']') else {
                    return false;
                };
                if !self.matches_attr(&after[..close]) {
                    return false;
                }
                rest = &after[close + 1..];
                continue;
            }

            let (marker, after) = rest.split_at(1);
            let end = after.find(is_marker).unwrap_or(after.len());
            let name = &after[..end];
            let ok = match marker {
                "." => self.classes.iter().any(|c| c == name),
                "#" => self.attrs.get("id").map(String::as_str) == Some(name),
                _ => false,
            };
            if !ok {
                return false;
            }
            rest = &after[end..];
        }
        true
    }

    fn matches_attr(&self, inner: &str) -> bool {
        let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_string();
        if let Some((name, value)) = inner.split_once("^=") {
            let prefix = unquote(value);
            self.attrs
                .get(name.trim())
                .is_some_and(|actual| actual.starts_with(&prefix))
        } else if let Some((name, value)) = inner.split_once('=') {
            let expected = unquote(value);
            self.attrs.get(name.trim()) == Some(&expected)
        } else {
            self.attrs.contains_key(inner.trim())
        }
    }
}

// =========================================================================
// Fake page
// =========================================================================

#[derive(Debug)]
pub struct FakePage {
    elements: Vec<FakeElement>,
    scroll_y: f64,
    viewport_height: f64,
    location: String,
    title: String,
    observer_supported: bool,
    observed: BTreeSet<ElementRef>,
    pub scrolls: Vec<(f64, ScrollBehavior)>,
    pub popups: Vec<(String, String)>,
    pub alerts: Vec<String>,
    pub resets: Vec<ElementRef>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            scroll_y: 0.0,
            viewport_height: 800.0,
            location: "https://example.com/".to_string(),
            title: "Portfolio".to_string(),
            observer_supported: true,
            observed: BTreeSet::new(),
            scrolls: Vec::new(),
            popups: Vec::new(),
            alerts: Vec::new(),
            resets: Vec::new(),
        }
    }

    pub fn add(&mut self, element: FakeElement) -> ElementRef {
        let handle = ElementRef::new(self.elements.len() as u32);
        self.elements.push(element);
        handle
    }

    pub fn el(&self, el: ElementRef) -> &FakeElement {
        &self.elements[el.index()]
    }

    pub fn el_mut(&mut self, el: ElementRef) -> &mut FakeElement {
        &mut self.elements[el.index()]
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    pub fn set_location(&mut self, url: &str, title: &str) {
        self.location = url.to_string();
        self.title = title.to_string();
    }

    pub fn set_value(&mut self, el: ElementRef, value: &str) {
        self.el_mut(el).value = value.to_string();
    }

    pub fn without_observer(mut self) -> Self {
        self.observer_supported = false;
        self
    }

    pub fn is_observed(&self, el: ElementRef) -> bool {
        self.observed.contains(&el)
    }

    pub fn style_of(&self, el: ElementRef, property: &str) -> Option<&str> {
        self.el(el).style.get(property).map(String::as_str)
    }

    pub fn classes_of(&self, el: ElementRef) -> &[String] {
        &self.el(el).classes
    }

    /// Elements carrying `class`, in insertion order.
    pub fn with_class(&self, class: &str) -> Vec<ElementRef> {
        self.handles()
            .filter(|h| self.el(*h).classes.iter().any(|c| c == class))
            .collect()
    }

    fn handles(&self) -> impl Iterator<Item = ElementRef> + '_ {
        (0..self.elements.len()).map(|i| ElementRef::new(i as u32))
    }

    fn is_descendant(&self, el: ElementRef, ancestor: ElementRef) -> bool {
        let mut current = self.el(el).parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.el(parent).parent;
        }
        false
    }
}

impl Page for FakePage {
    fn element_by_id(&mut self, id: &str) -> Option<ElementRef> {
        self.handles()
            .find(|h| self.el(*h).attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query(&mut self, selector: &str) -> Option<ElementRef> {
        self.handles().find(|h| self.el(*h).matches(selector))
    }

    fn query_all(&mut self, selector: &str) -> Vec<ElementRef> {
        self.handles()
            .filter(|h| self.el(*h).matches(selector))
            .collect()
    }

    fn query_within(&mut self, scope: ElementRef, selector: &str) -> Option<ElementRef> {
        self.handles()
            .find(|h| self.is_descendant(*h, scope) && self.el(*h).matches(selector))
    }

    fn parent(&mut self, el: ElementRef) -> Option<ElementRef> {
        self.el(el).parent
    }

    fn append_child(&mut self, parent: ElementRef, tag: &str) -> Option<ElementRef> {
        Some(self.add(FakeElement::new(tag).within(parent)))
    }

    fn attribute(&self, el: ElementRef, name: &str) -> Option<String> {
        if name == "class" {
            return Some(self.el(el).classes.join(" "));
        }
        self.el(el).attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, el: ElementRef, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(el, value);
            return;
        }
        self.el_mut(el)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, el: ElementRef, class: &str) -> bool {
        self.el(el).classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, el: ElementRef, class: &str) {
        if !self.has_class(el, class) {
            self.el_mut(el).classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, el: ElementRef, class: &str) {
        self.el_mut(el).classes.retain(|c| c != class);
    }

    fn set_class_name(&mut self, el: ElementRef, value: &str) {
        self.el_mut(el).classes = value.split_whitespace().map(str::to_string).collect();
    }

    fn style(&self, el: ElementRef, property: &str) -> String {
        self.el(el).style.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&mut self, el: ElementRef, property: &str, value: &str) {
        self.el_mut(el)
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn text(&self, el: ElementRef) -> String {
        self.el(el).text.clone()
    }

    fn set_text(&mut self, el: ElementRef, text: &str) {
        let element = self.el_mut(el);
        element.text = text.to_string();
        element.inner_html = text.to_string();
    }

    fn inner_html(&self, el: ElementRef) -> String {
        self.el(el).inner_html.clone()
    }

    fn set_inner_html(&mut self, el: ElementRef, html: &str) {
        self.el_mut(el).inner_html = html.to_string();
    }

    fn value(&self, el: ElementRef) -> String {
        self.el(el).value.clone()
    }

    fn set_disabled(&mut self, el: ElementRef, disabled: bool) {
        self.el_mut(el).disabled = disabled;
    }

    fn is_disabled(&self, el: ElementRef) -> bool {
        self.el(el).disabled
    }

    fn reset_form(&mut self, form: ElementRef) {
        let fields: Vec<ElementRef> = self
            .handles()
            .filter(|h| self.is_descendant(*h, form))
            .collect();
        for field in fields {
            self.el_mut(field).value.clear();
        }
        self.resets.push(form);
    }

    fn offset_top(&self, el: ElementRef) -> f64 {
        self.el(el).offset_top
    }

    fn client_height(&self, el: ElementRef) -> f64 {
        self.el(el).client_height
    }

    fn viewport_top(&self, el: ElementRef) -> f64 {
        self.el(el).offset_top - self.scroll_y
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scrolls.push((top, behavior));
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn open_popup(&mut self, url: &str, features: &str) {
        self.popups.push((url.to_string(), features.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn observe_visibility(&mut self, el: ElementRef) -> bool {
        if self.observer_supported {
            self.observed.insert(el);
        }
        self.observer_supported
    }

    fn unobserve_visibility(&mut self, el: ElementRef) {
        self.observed.remove(&el);
    }
}

// =========================================================================
// Virtual clock
// =========================================================================

#[derive(Debug, Clone)]
struct PendingWake {
    due: u64,
    seq: u64,
    wake: Wake,
    period: Option<u64>,
}

/// Scheduler backed by a virtual millisecond clock.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: u64,
    seq: u64,
    pending: Vec<PendingWake>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, wake: &Wake) -> bool {
        self.pending.iter().any(|p| &p.wake == wake)
    }

    /// Move the clock forward by `ms`, handing every wake that falls due to
    /// `deliver` in due order. Wakes scheduled during delivery run too when
    /// they fall inside the window.
    pub fn advance(&mut self, ms: u64, mut deliver: impl FnMut(Wake, &mut ManualTimers)) {
        let until = self.now + ms;
        while let Some(wake) = self.pop_due(until) {
            deliver(wake, self);
        }
        self.now = until;
    }

    fn pop_due(&mut self, until: u64) -> Option<Wake> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(position);
        self.now = entry.due;
        if let Some(period) = entry.period {
            self.push(entry.due + period, entry.wake, Some(period));
        }
        Some(entry.wake)
    }

    fn push(&mut self, due: u64, wake: Wake, period: Option<u64>) {
        self.seq += 1;
        self.pending.push(PendingWake {
            due,
            seq: self.seq,
            wake,
            period,
        });
    }
}

impl Scheduler for ManualTimers {
    fn after(&mut self, delay_ms: u64, wake: Wake) {
        self.push(self.now + delay_ms, wake, None);
    }

    fn every(&mut self, period_ms: u64, wake: Wake) {
        self.push(self.now + period_ms, wake, Some(period_ms.max(1)));
    }

    fn next_frame(&mut self, wake: Wake) {
        self.push(self.now + FALLBACK_FRAME_MS, wake, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_subset_matches() {
        let mut page = FakePage::new();
        let link = page.add(
            FakeElement::new("a")
                .class("nav-link")
                .attr("href", "#about"),
        );
        let img = page.add(FakeElement::new("img").attr("data-src", "a.jpg"));
        let button = page.add(FakeElement::new("button").attr("type", "submit"));

        assert_eq!(page.query_all("a[href^=\"#\"]"), vec![link]);
        assert_eq!(page.query_all("img[data-src]"), vec![img]);
        assert_eq!(page.query("button[type=\"submit\"]"), Some(button));
        assert_eq!(page.query_all("a, button"), vec![link, button]);
        assert_eq!(page.query_all(".nav-link"), vec![link]);
        assert!(page.query("#missing").is_none());
    }

    #[test]
    fn manual_timers_deliver_in_due_order_and_repeat() {
        let mut timers = ManualTimers::new();
        timers.after(300, Wake::LoaderHide);
        timers.every(100, Wake::CarouselAdvance);

        let mut seen = Vec::new();
        timers.advance(300, |wake, t| seen.push((t.now(), wake)));

        assert_eq!(
            seen,
            vec![
                (100, Wake::CarouselAdvance),
                (200, Wake::CarouselAdvance),
                (300, Wake::LoaderHide),
                (300, Wake::CarouselAdvance),
            ]
        );
        assert!(timers.is_pending(&Wake::CarouselAdvance));
    }
}
