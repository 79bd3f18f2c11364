//! Page environment abstraction.
//!
//! Behaviors never touch `window` or `document` directly. They talk to a
//! [`Page`], which the wasm adapter implements over `web-sys` and the tests
//! implement with an in-memory fake. Elements are referred to by opaque
//! [`ElementRef`] handles; two handles for the same node compare equal.

use std::fmt;

/// Opaque handle to an element owned by a [`Page`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(u32);

impl ElementRef {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Everything a behavior may read from or write to the rendered page.
pub trait Page {
    fn element_by_id(&mut self, id: &str) -> Option<ElementRef>;
    fn query(&mut self, selector: &str) -> Option<ElementRef>;
    fn query_all(&mut self, selector: &str) -> Vec<ElementRef>;
    fn query_within(&mut self, scope: ElementRef, selector: &str) -> Option<ElementRef>;
    fn parent(&mut self, el: ElementRef) -> Option<ElementRef>;
    /// Create `<tag>` and append it as the last child of `parent`.
    fn append_child(&mut self, parent: ElementRef, tag: &str) -> Option<ElementRef>;

    fn attribute(&self, el: ElementRef, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: ElementRef, name: &str, value: &str);

    fn has_class(&self, el: ElementRef, class: &str) -> bool;
    fn add_class(&mut self, el: ElementRef, class: &str);
    fn remove_class(&mut self, el: ElementRef, class: &str);
    /// Replace the whole `class` attribute.
    fn set_class_name(&mut self, el: ElementRef, value: &str);

    /// Inline style property; empty string when unset.
    fn style(&self, el: ElementRef, property: &str) -> String;
    fn set_style(&mut self, el: ElementRef, property: &str, value: &str);

    fn text(&self, el: ElementRef) -> String;
    fn set_text(&mut self, el: ElementRef, text: &str);
    fn inner_html(&self, el: ElementRef) -> String;
    fn set_inner_html(&mut self, el: ElementRef, html: &str);

    /// Current value of a form control; empty for non-controls.
    fn value(&self, el: ElementRef) -> String;
    fn set_disabled(&mut self, el: ElementRef, disabled: bool);
    fn is_disabled(&self, el: ElementRef) -> bool;
    fn reset_form(&mut self, form: ElementRef);

    fn offset_top(&self, el: ElementRef) -> f64;
    fn client_height(&self, el: ElementRef) -> f64;
    /// Top edge relative to the viewport (bounding client rect).
    fn viewport_top(&self, el: ElementRef) -> f64;

    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    fn location(&self) -> String;
    fn title(&self) -> String;
    fn open_popup(&mut self, url: &str, features: &str);
    fn alert(&mut self, message: &str);

    /// Start delivering [`PageEvent::BecameVisible`] for `el`.
    /// Returns `false` when the environment cannot observe visibility.
    fn observe_visibility(&mut self, el: ElementRef) -> bool;
    fn unobserve_visibility(&mut self, el: ElementRef);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Load,
    Click,
    Submit,
    TouchStart,
    TouchEnd,
    MouseMove,
    MouseEnter,
    MouseLeave,
    Focus,
    Blur,
}

impl EventKind {
    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Load => "load",
            Self::Click => "click",
            Self::Submit => "submit",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::MouseMove => "mousemove",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::Focus => "focus",
            Self::Blur => "blur",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Window,
    Document,
    Element(ElementRef),
}

/// A listener a behavior asks the adapter to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub source: EventSource,
    pub kind: EventKind,
}

impl Subscription {
    pub fn window(kind: EventKind) -> Self {
        Self {
            source: EventSource::Window,
            kind,
        }
    }

    pub fn document(kind: EventKind) -> Self {
        Self {
            source: EventSource::Document,
            kind,
        }
    }

    pub fn element(el: ElementRef, kind: EventKind) -> Self {
        Self {
            source: EventSource::Element(el),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Scroll,
    Loaded,
    Click(ElementRef),
    Submit(ElementRef),
    TouchStart { target: ElementRef, screen_x: f64 },
    TouchEnd { target: ElementRef, screen_x: f64 },
    MouseMove { client_x: f64, client_y: f64 },
    MouseEnter(ElementRef),
    MouseLeave(ElementRef),
    Focus(ElementRef),
    Blur(ElementRef),
    BecameVisible(ElementRef),
}

/// What the adapter should do with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    PreventDefault,
}

impl Flow {
    pub fn merge(self, other: Flow) -> Flow {
        if self == Flow::PreventDefault || other == Flow::PreventDefault {
            Flow::PreventDefault
        } else {
            Flow::Continue
        }
    }

    pub fn prevents_default(self) -> bool {
        self == Flow::PreventDefault
    }
}

/// Collects subscriptions, dropping duplicates while keeping first-seen order.
#[derive(Debug, Default)]
pub struct Subscriptions(Vec<Subscription>);

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: Subscription) {
        if !self.0.contains(&sub) {
            self.0.push(sub);
        }
    }

    pub fn extend(&mut self, subs: impl IntoIterator<Item = Subscription>) {
        for sub in subs {
            self.push(sub);
        }
    }

    pub fn into_vec(self) -> Vec<Subscription> {
        self.0
    }
}
