//! Portfolio gallery filtering.
//!
//! Clicking a filter button fades matching items in and the rest out. Each
//! click bumps a generation counter; pending fades from earlier clicks carry
//! the old generation and are dropped when they fire.

use tracing::debug;

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::Behavior;

const ITEM_TRANSITION: &str = "opacity 0.3s ease, transform 0.3s ease";

/// Whether an item with `category` is shown under `filter`. A missing
/// attribute on both sides counts as equal.
pub fn matches_filter(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(hooks::FILTER_ALL) || category == filter
}

pub struct GalleryFilter {
    buttons: Vec<ElementRef>,
    items: Vec<ElementRef>,
    reveal_delay_ms: u64,
    fade_ms: u64,
    generation: u64,
}

impl GalleryFilter {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Self {
        let buttons = page.query_all(&hooks::class_selector(hooks::FILTER_BUTTON));
        let items = page.query_all(&hooks::class_selector(hooks::PORTFOLIO_ITEM));
        for item in &items {
            page.set_style(*item, "transition", ITEM_TRANSITION);
        }
        Self {
            buttons,
            items,
            reveal_delay_ms: config.gallery_reveal_delay_ms,
            fade_ms: config.gallery_fade_ms,
            generation: 0,
        }
    }

    fn apply(&mut self, button: ElementRef, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        for other in &self.buttons {
            page.remove_class(*other, hooks::ACTIVE);
        }
        page.add_class(button, hooks::ACTIVE);

        let filter = page.attribute(button, hooks::DATA_FILTER);
        self.generation += 1;
        let generation = self.generation;
        debug!(?filter, generation, "gallery filter applied");

        for item in &self.items {
            let category = page.attribute(*item, hooks::DATA_CATEGORY);
            if matches_filter(filter.as_deref(), category.as_deref()) {
                page.remove_class(*item, hooks::HIDDEN);
                page.set_style(*item, "display", "block");
                timers.after(
                    self.reveal_delay_ms,
                    Wake::GalleryReveal {
                        item: *item,
                        generation,
                    },
                );
            } else {
                page.set_style(*item, "opacity", "0");
                page.set_style(*item, "transform", "translateY(20px)");
                timers.after(
                    self.fade_ms,
                    Wake::GalleryConceal {
                        item: *item,
                        generation,
                    },
                );
            }
        }
    }
}

impl Behavior for GalleryFilter {
    fn name(&self) -> &'static str {
        "gallery-filter"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.buttons
            .iter()
            .map(|button| Subscription::element(*button, EventKind::Click))
            .collect()
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow {
        if let PageEvent::Click(target) = event {
            if self.buttons.contains(target) {
                self.apply(*target, page, timers);
            }
        }
        Flow::Continue
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, _timers: &mut dyn Scheduler) {
        match wake {
            Wake::GalleryReveal { item, generation } if generation == self.generation => {
                page.set_style(item, "opacity", "1");
                page.set_style(item, "transform", "translateY(0)");
            }
            Wake::GalleryConceal { item, generation } if generation == self.generation => {
                page.add_class(item, hooks::HIDDEN);
                page.set_style(item, "display", "none");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage, ManualTimers};
    use proptest::prelude::*;

    struct Fixture {
        page: FakePage,
        timers: ManualTimers,
        gallery: GalleryFilter,
        all: ElementRef,
        web: ElementRef,
        web_item: ElementRef,
        design_item: ElementRef,
    }

    fn fixture() -> Fixture {
        let mut page = FakePage::new();
        let all = page.add(
            FakeElement::new("button")
                .class("filter-btn active")
                .attr("data-filter", "all"),
        );
        let web = page.add(
            FakeElement::new("button")
                .class("filter-btn")
                .attr("data-filter", "web"),
        );
        let web_item = page.add(
            FakeElement::new("div")
                .class("portfolio-item")
                .attr("data-category", "web"),
        );
        let design_item = page.add(
            FakeElement::new("div")
                .class("portfolio-item")
                .attr("data-category", "design"),
        );
        let gallery = GalleryFilter::mount(&mut page, &BehaviorConfig::default());
        Fixture {
            page,
            timers: ManualTimers::new(),
            gallery,
            all,
            web,
            web_item,
            design_item,
        }
    }

    fn click(f: &mut Fixture, button: ElementRef) {
        f.gallery
            .handle(&PageEvent::Click(button), &mut f.page, &mut f.timers);
    }

    fn advance(f: &mut Fixture, ms: u64) {
        let Fixture {
            page,
            timers,
            gallery,
            ..
        } = f;
        timers.advance(ms, |wake, t| gallery.wake(wake, &mut *page, t));
    }

    #[test]
    fn mount_sets_item_transitions() {
        let f = fixture();
        assert_eq!(f.page.style_of(f.web_item, "transition"), Some(ITEM_TRANSITION));
    }

    #[test]
    fn filtering_hides_non_matching_after_fade() {
        let mut f = fixture();
        let web = f.web;
        click(&mut f, web);

        assert!(f.page.has_class(f.web, hooks::ACTIVE));
        assert!(!f.page.has_class(f.all, hooks::ACTIVE));
        assert_eq!(f.page.style_of(f.design_item, "opacity"), Some("0"));
        assert!(!f.page.has_class(f.design_item, hooks::HIDDEN));

        advance(&mut f, 10);
        assert_eq!(f.page.style_of(f.web_item, "opacity"), Some("1"));
        assert_eq!(f.page.style_of(f.web_item, "display"), Some("block"));

        advance(&mut f, 290);
        assert!(f.page.has_class(f.design_item, hooks::HIDDEN));
        assert_eq!(f.page.style_of(f.design_item, "display"), Some("none"));
    }

    #[test]
    fn button_without_filter_shows_only_uncategorised_items() {
        let mut f = fixture();
        let bare = f.page.add(FakeElement::new("button").class("filter-btn"));
        let loose_item = f.page.add(FakeElement::new("div").class("portfolio-item"));
        f.gallery = GalleryFilter::mount(&mut f.page, &BehaviorConfig::default());

        click(&mut f, bare);
        advance(&mut f, 300);
        assert_eq!(f.page.style_of(loose_item, "display"), Some("block"));
        assert!(f.page.has_class(f.web_item, hooks::HIDDEN));
        assert!(f.page.has_class(f.design_item, hooks::HIDDEN));
    }

    #[test]
    fn later_click_supersedes_pending_conceal() {
        let mut f = fixture();
        let (all, web) = (f.all, f.web);
        click(&mut f, web);
        advance(&mut f, 100);
        click(&mut f, all);
        advance(&mut f, 400);

        assert!(!f.page.has_class(f.design_item, hooks::HIDDEN));
        assert_eq!(f.page.style_of(f.design_item, "display"), Some("block"));
        assert_eq!(f.page.style_of(f.design_item, "opacity"), Some("1"));
    }

    proptest! {
        #[test]
        fn shown_iff_all_or_equal(filter in "[a-z]{1,6}", category in "[a-z]{1,6}") {
            let shown = matches_filter(Some(&filter), Some(&category));
            prop_assert_eq!(shown, filter == "all" || filter == category);
            prop_assert!(matches_filter(Some("all"), Some(&category)));
            prop_assert_eq!(matches_filter(Some(&filter), None), filter == "all");
            prop_assert!(!matches_filter(None, Some(&category)));
        }
    }
}
