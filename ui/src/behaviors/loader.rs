use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::Behavior;

/// Fades the page loader out once the window has loaded.
pub struct PageLoader {
    loader: ElementRef,
    fade_ms: u64,
}

impl PageLoader {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Option<Self> {
        let loader = page.query(&hooks::class_selector(hooks::PAGE_LOADER))?;
        Some(Self {
            loader,
            fade_ms: config.loader_fade_ms,
        })
    }
}

impl Behavior for PageLoader {
    fn name(&self) -> &'static str {
        "page-loader"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::window(EventKind::Load)]
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow {
        if *event == PageEvent::Loaded {
            page.set_style(self.loader, "opacity", "0");
            timers.after(self.fade_ms, Wake::LoaderHide);
        }
        Flow::Continue
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, _timers: &mut dyn Scheduler) {
        if wake == Wake::LoaderHide {
            page.set_style(self.loader, "display", "none");
        }
    }
}
