//! In-page anchors scroll smoothly to their target, leaving room for the
//! fixed header.

use tracing::debug;

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, ScrollBehavior, Subscription};
use crate::core::schedule::Scheduler;

use super::Behavior;

const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

pub struct SmoothScroll {
    anchors: Vec<ElementRef>,
    header_offset: f64,
}

impl SmoothScroll {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Self {
        Self {
            anchors: page.query_all(IN_PAGE_ANCHORS),
            header_offset: config.header_offset,
        }
    }

    /// Document offset to scroll to so `target` sits just below the header.
    pub fn destination(page: &dyn Page, target: ElementRef, header_offset: f64) -> f64 {
        page.viewport_top(target) + page.scroll_y() - header_offset
    }

    fn follow(&self, anchor: ElementRef, page: &mut dyn Page) -> Flow {
        let Some(href) = page.attribute(anchor, "href") else {
            return Flow::Continue;
        };
        let fragment = href.trim_start_matches('#');
        if fragment.is_empty() {
            return Flow::Continue;
        }
        let Some(target) = page.element_by_id(fragment) else {
            return Flow::Continue;
        };

        let top = Self::destination(page, target, self.header_offset);
        debug!(fragment, top, "smooth scrolling to anchor");
        page.scroll_to(top, ScrollBehavior::Smooth);
        Flow::PreventDefault
    }
}

impl Behavior for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.anchors
            .iter()
            .map(|anchor| Subscription::element(*anchor, EventKind::Click))
            .collect()
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        match event {
            PageEvent::Click(target) if self.anchors.contains(target) => self.follow(*target, page),
            _ => Flow::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage, ManualTimers};

    #[test]
    fn scrolls_to_target_minus_header() {
        let mut page = FakePage::new();
        let anchor = page.add(FakeElement::new("a").attr("href", "#services"));
        page.add(FakeElement::new("section").id("services").geometry(1200.0, 400.0));
        page.set_scroll_y(300.0);

        let mut scroll = SmoothScroll::mount(&mut page, &BehaviorConfig::default());
        let flow = scroll.handle(&PageEvent::Click(anchor), &mut page, &mut ManualTimers::new());

        assert_eq!(flow, Flow::PreventDefault);
        assert_eq!(page.scrolls, vec![(1120.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn missing_target_leaves_default_behavior() {
        let mut page = FakePage::new();
        let dangling = page.add(FakeElement::new("a").attr("href", "#nowhere"));
        let bare = page.add(FakeElement::new("a").attr("href", "#"));

        let mut scroll = SmoothScroll::mount(&mut page, &BehaviorConfig::default());
        let mut timers = ManualTimers::new();

        assert_eq!(
            scroll.handle(&PageEvent::Click(dangling), &mut page, &mut timers),
            Flow::Continue
        );
        assert_eq!(
            scroll.handle(&PageEvent::Click(bare), &mut page, &mut timers),
            Flow::Continue
        );
        assert!(page.scrolls.is_empty());
    }
}
