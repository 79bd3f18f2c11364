//! Custom cursor follower with a hover state over interactive elements.

use tracing::warn;

use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

pub struct CursorFollower {
    cursor: ElementRef,
    targets: Vec<ElementRef>,
}

impl CursorFollower {
    pub fn mount(page: &mut dyn Page) -> Option<Self> {
        let Some(body) = page.query("body") else {
            warn!("no <body>; custom cursor skipped");
            return None;
        };
        let cursor = page.append_child(body, "div")?;
        page.add_class(cursor, hooks::CUSTOM_CURSOR);

        let selector = format!(
            "a, button, {}, {}",
            hooks::class_selector(hooks::SERVICE_CARD),
            hooks::class_selector(hooks::PORTFOLIO_CARD)
        );
        let targets = page.query_all(&selector);
        Some(Self { cursor, targets })
    }

    pub fn element(&self) -> ElementRef {
        self.cursor
    }
}

impl Behavior for CursorFollower {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        let mut subs = vec![Subscription::document(EventKind::MouseMove)];
        for target in &self.targets {
            subs.push(Subscription::element(*target, EventKind::MouseEnter));
            subs.push(Subscription::element(*target, EventKind::MouseLeave));
        }
        subs
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        match *event {
            PageEvent::MouseMove { client_x, client_y } => {
                page.set_style(self.cursor, "left", &format!("{client_x}px"));
                page.set_style(self.cursor, "top", &format!("{client_y}px"));
            }
            PageEvent::MouseEnter(target) if self.targets.contains(&target) => {
                page.add_class(self.cursor, hooks::HOVER);
            }
            PageEvent::MouseLeave(target) if self.targets.contains(&target) => {
                page.remove_class(self.cursor, hooks::HOVER);
            }
            _ => {}
        }
        Flow::Continue
    }
}
