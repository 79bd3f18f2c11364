//! Skill progress bars replay their width transition the first time the
//! about section comes into view.

use tracing::debug;

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::{scrolled_past_half, Behavior};

struct Bar {
    element: ElementRef,
    width: String,
}

pub struct ProgressBars {
    section: Option<ElementRef>,
    bars: Vec<Bar>,
    restore_delay_ms: u64,
    has_animated: bool,
}

impl ProgressBars {
    pub fn mount(
        page: &mut dyn Page,
        config: &BehaviorConfig,
        timers: &mut dyn Scheduler,
    ) -> Self {
        let section = page.element_by_id(hooks::ABOUT_ID);
        let bars = page
            .query_all(&hooks::class_selector(hooks::PROGRESS_BAR))
            .into_iter()
            .map(|element| Bar {
                element,
                width: String::new(),
            })
            .collect();

        let mut progress = Self {
            section,
            bars,
            restore_delay_ms: config.progress_restore_delay_ms,
            has_animated: false,
        };
        progress.check_position(page, timers);
        progress
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    fn check_position(&mut self, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        let Some(section) = self.section else {
            return;
        };
        if self.has_animated || !scrolled_past_half(page, section) {
            return;
        }
        self.has_animated = true;
        debug!(bars = self.bars.len(), "progress bars replaying");

        for (slot, bar) in self.bars.iter_mut().enumerate() {
            bar.width = page.style(bar.element, "width");
            page.set_style(bar.element, "width", "0");
            timers.after(self.restore_delay_ms, Wake::ProgressRestore { slot });
        }
    }
}

impl Behavior for ProgressBars {
    fn name(&self) -> &'static str {
        "progress-bars"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        if self.section.is_some() {
            vec![Subscription::window(EventKind::Scroll)]
        } else {
            Vec::new()
        }
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow {
        if *event == PageEvent::Scroll {
            self.check_position(page, timers);
        }
        Flow::Continue
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, _timers: &mut dyn Scheduler) {
        if let Wake::ProgressRestore { slot } = wake {
            if let Some(bar) = self.bars.get(slot) {
                page.set_style(bar.element, "width", &bar.width);
            }
        }
    }
}
