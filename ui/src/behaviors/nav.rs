//! Navigation bar: scrolled styling, active-section highlighting and closing
//! the mobile menu after a link is picked.

use tracing::debug;

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

pub struct Navigation {
    navbar: Option<ElementRef>,
    links: Vec<ElementRef>,
    sections: Vec<ElementRef>,
    scrolled_threshold: f64,
    lookahead: f64,
    current: Option<String>,
}

impl Navigation {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Self {
        let navbar = page.element_by_id(hooks::MAIN_NAV_ID);
        let links = page.query_all(&hooks::class_selector(hooks::NAV_LINK));
        let sections = page.query_all("section");
        Self {
            navbar,
            links,
            sections,
            scrolled_threshold: config.nav_scrolled_threshold,
            lookahead: config.section_lookahead,
            current: None,
        }
    }

    /// Id of the last section whose top, minus the lookahead, has been
    /// scrolled past. `None` when that section has no id.
    pub fn current_section(&self, page: &mut dyn Page) -> Option<String> {
        let scroll_y = page.scroll_y();
        let current = self
            .sections
            .iter()
            .copied()
            .filter(|section| scroll_y >= page.offset_top(*section) - self.lookahead)
            .last()?;
        page.attribute(current, "id")
    }

    fn on_scroll(&mut self, page: &mut dyn Page) {
        if let Some(navbar) = self.navbar {
            if page.scroll_y() > self.scrolled_threshold {
                page.add_class(navbar, hooks::SCROLLED);
            } else {
                page.remove_class(navbar, hooks::SCROLLED);
            }
        }

        let current = self.current_section(page);
        let wanted = current.as_ref().map(|id| format!("#{id}"));
        for link in &self.links {
            page.remove_class(*link, hooks::ACTIVE);
            if wanted.is_some() && page.attribute(*link, "href") == wanted {
                page.add_class(*link, hooks::ACTIVE);
            }
        }

        if current != self.current {
            debug!(section = ?current, "active section changed");
            self.current = current;
        }
    }

    fn collapse_menu(&self, page: &mut dyn Page) {
        if let Some(collapse) = page.query(&hooks::class_selector(hooks::NAVBAR_COLLAPSE)) {
            if page.has_class(collapse, hooks::SHOW) {
                page.remove_class(collapse, hooks::SHOW);
            }
        }
    }
}

impl Behavior for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        let mut subs = vec![Subscription::window(EventKind::Scroll)];
        subs.extend(
            self.links
                .iter()
                .map(|link| Subscription::element(*link, EventKind::Click)),
        );
        subs
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        match event {
            PageEvent::Scroll => self.on_scroll(page),
            PageEvent::Click(target) if self.links.contains(target) => self.collapse_menu(page),
            _ => {}
        }
        Flow::Continue
    }
}
