use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

/// Hero sections drift at a fraction of the scroll speed.
pub struct Parallax {
    layers: Vec<ElementRef>,
    speed: f64,
}

impl Parallax {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Self {
        Self {
            layers: page.query_all(&hooks::class_selector(hooks::HERO_SECTION)),
            speed: config.parallax_speed,
        }
    }
}

impl Behavior for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        if self.layers.is_empty() {
            return Vec::new();
        }
        vec![Subscription::window(EventKind::Scroll)]
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        if *event == PageEvent::Scroll {
            let offset = page.scroll_y() * self.speed;
            let transform = format!("translateY({offset}px)");
            for layer in &self.layers {
                page.set_style(*layer, "transform", &transform);
            }
        }
        Flow::Continue
    }
}
