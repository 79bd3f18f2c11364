use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, ScrollBehavior, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

/// Floating "back to top" button.
pub struct ScrollTop {
    button: ElementRef,
    threshold: f64,
}

impl ScrollTop {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Option<Self> {
        let button = page.element_by_id(hooks::SCROLL_TOP_ID)?;
        Some(Self {
            button,
            threshold: config.scroll_top_threshold,
        })
    }
}

impl Behavior for ScrollTop {
    fn name(&self) -> &'static str {
        "scroll-top"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![
            Subscription::window(EventKind::Scroll),
            Subscription::element(self.button, EventKind::Click),
        ]
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        match *event {
            PageEvent::Scroll => {
                if page.scroll_y() > self.threshold {
                    page.add_class(self.button, hooks::VISIBLE);
                } else {
                    page.remove_class(self.button, hooks::VISIBLE);
                }
            }
            PageEvent::Click(target) if target == self.button => {
                page.scroll_to(0.0, ScrollBehavior::Smooth);
            }
            _ => {}
        }
        Flow::Continue
    }
}
