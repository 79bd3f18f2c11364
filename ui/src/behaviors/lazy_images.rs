//! Deferred image loading for `img[data-src]`.
//!
//! Each image is swapped in the first time it scrolls into view. Where the
//! page cannot observe visibility every image is loaded at mount instead.

use tracing::debug;

use crate::core::page::{ElementRef, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

pub struct LazyImages {
    pending: Vec<ElementRef>,
}

impl LazyImages {
    pub fn mount(page: &mut dyn Page) -> Self {
        let images = page.query_all(&format!("img[{}]", hooks::DATA_SRC));
        let mut pending = Vec::with_capacity(images.len());
        for image in images {
            if page.observe_visibility(image) {
                pending.push(image);
            } else {
                load(page, image);
            }
        }
        debug!(watching = pending.len(), "lazy images mounted");
        Self { pending }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

fn load(page: &mut dyn Page, image: ElementRef) {
    if let Some(src) = page.attribute(image, hooks::DATA_SRC) {
        page.set_attribute(image, "src", &src);
    }
    page.add_class(image, hooks::LOADED);
}

impl Behavior for LazyImages {
    fn name(&self) -> &'static str {
        "lazy-images"
    }

    // Visibility is delivered by the observer, not by a listener.
    fn subscriptions(&self) -> Vec<Subscription> {
        Vec::new()
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        if let PageEvent::BecameVisible(image) = *event {
            if let Some(position) = self.pending.iter().position(|el| *el == image) {
                self.pending.swap_remove(position);
                load(page, image);
                page.unobserve_visibility(image);
            }
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage, ManualTimers};

    #[test]
    fn loads_once_when_visible() {
        let mut page = FakePage::new();
        let image = page.add(FakeElement::new("img").attr("data-src", "/img/one.jpg"));
        let mut timers = ManualTimers::new();
        let mut lazy = LazyImages::mount(&mut page);
        assert!(page.is_observed(image));
        assert_eq!(page.attribute(image, "src"), None);

        lazy.handle(&PageEvent::BecameVisible(image), &mut page, &mut timers);
        assert_eq!(page.attribute(image, "src").as_deref(), Some("/img/one.jpg"));
        assert!(page.has_class(image, hooks::LOADED));
        assert!(!page.is_observed(image));
        assert_eq!(lazy.pending(), 0);

        page.set_attribute(image, "src", "/img/changed.jpg");
        lazy.handle(&PageEvent::BecameVisible(image), &mut page, &mut timers);
        assert_eq!(page.attribute(image, "src").as_deref(), Some("/img/changed.jpg"));
    }

    #[test]
    fn loads_eagerly_without_observer() {
        let mut page = FakePage::new().without_observer();
        let image = page.add(FakeElement::new("img").attr("data-src", "/img/two.jpg"));
        let lazy = LazyImages::mount(&mut page);
        assert_eq!(lazy.pending(), 0);
        assert_eq!(page.attribute(image, "src").as_deref(), Some("/img/two.jpg"));
    }
}
