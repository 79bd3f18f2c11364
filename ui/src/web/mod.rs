//! Browser adapter: wires DOM events and the intersection observer to a
//! [`Driver`] over [`WebPage`].

mod dom;

pub use dom::WebPage;

use tracing::{info, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, MouseEvent, TouchEvent, Window,
};

use crate::core::config::SiteConfig;
use crate::core::error::{PageError, Result};
use crate::core::page::{ElementRef, EventKind, EventSource, PageEvent, Subscription};
use crate::driver::Driver;

/// Mount every behavior on the live document and register its listeners.
///
/// Call once, after the page markup is in the DOM. Listeners stay attached
/// for the lifetime of the page.
pub fn mount(config: &SiteConfig) -> Result<Driver<WebPage>> {
    let window = web_sys::window().ok_or(PageError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(PageError::MissingGlobal("document"))?;

    let driver = Driver::new(WebPage::new(window.clone(), document.clone()));
    install_observer(&driver);

    let subscriptions = driver.mount(config);
    let mut registered = 0usize;
    for subscription in subscriptions {
        match listen(&driver, &window, &document, subscription) {
            Ok(()) => registered += 1,
            Err(err) => warn!(?subscription, %err, "listener not registered"),
        }
    }

    if document.ready_state() == "complete" {
        driver.dispatch(PageEvent::Loaded);
    }

    info!(
        behaviors = ?driver.mounted_behaviors(),
        listeners = registered,
        "portfolio page interactive"
    );
    signature();
    Ok(driver)
}

fn signature() {
    info!("Professional VA Portfolio");
    info!("Built with passion and attention to detail");
    info!("Looking to collaborate? Let's connect!");
}

fn install_observer(driver: &Driver<WebPage>) {
    let handle = driver.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(el) = handle.with_page(|page| page.intern(entry.target())) {
                    handle.dispatch(PageEvent::BecameVisible(el));
                }
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            driver.with_page(|page| page.set_observer(observer));
            callback.forget();
        }
        Err(err) => warn!(error = ?err, "IntersectionObserver unavailable"),
    }
}

fn listen(
    driver: &Driver<WebPage>,
    window: &Window,
    document: &Document,
    subscription: Subscription,
) -> Result<()> {
    let (target, element): (EventTarget, Option<ElementRef>) = match subscription.source {
        EventSource::Window => (window.clone().into(), None),
        EventSource::Document => (document.clone().into(), None),
        EventSource::Element(el) => {
            let node = driver
                .with_page(|page| page.element(el).cloned())
                .flatten()
                .ok_or_else(|| PageError::Dom(format!("{el} is not attached")))?;
            (node.into(), Some(el))
        }
    };

    let kind = subscription.kind;
    let handle = driver.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(page_event) = translate(kind, element, &event) else {
            return;
        };
        if handle.dispatch(page_event).prevents_default() {
            event.prevent_default();
        }
    });

    target
        .add_event_listener_with_callback(kind.dom_name(), callback.as_ref().unchecked_ref())
        .map_err(|err| PageError::Dom(format!("{err:?}")))?;
    callback.forget();
    Ok(())
}

/// Turn a raw DOM event into the page event behaviors understand.
fn translate(kind: EventKind, element: Option<ElementRef>, event: &Event) -> Option<PageEvent> {
    let page_event = match kind {
        EventKind::Scroll => PageEvent::Scroll,
        EventKind::Load => PageEvent::Loaded,
        EventKind::MouseMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            PageEvent::MouseMove {
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            }
        }
        EventKind::Click => PageEvent::Click(element?),
        EventKind::Submit => PageEvent::Submit(element?),
        EventKind::MouseEnter => PageEvent::MouseEnter(element?),
        EventKind::MouseLeave => PageEvent::MouseLeave(element?),
        EventKind::Focus => PageEvent::Focus(element?),
        EventKind::Blur => PageEvent::Blur(element?),
        EventKind::TouchStart => PageEvent::TouchStart {
            target: element?,
            screen_x: touch_screen_x(event)?,
        },
        EventKind::TouchEnd => PageEvent::TouchEnd {
            target: element?,
            screen_x: touch_screen_x(event)?,
        },
    };
    Some(page_event)
}

fn touch_screen_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
