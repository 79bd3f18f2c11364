//! The set of behaviors mounted on one page.

use tracing::{debug, info};

use crate::behaviors::carousel::Carousel;
use crate::behaviors::contact::ContactForm;
use crate::behaviors::cursor::CursorFollower;
use crate::behaviors::field_focus::FieldFocus;
use crate::behaviors::gallery::GalleryFilter;
use crate::behaviors::lazy_images::LazyImages;
use crate::behaviors::loader::PageLoader;
use crate::behaviors::nav::Navigation;
use crate::behaviors::newsletter::Newsletter;
use crate::behaviors::parallax::Parallax;
use crate::behaviors::progress::ProgressBars;
use crate::behaviors::scroll_top::ScrollTop;
use crate::behaviors::share::SocialShare;
use crate::behaviors::smooth_scroll::SmoothScroll;
use crate::behaviors::stats::StatsCounter;
use crate::behaviors::typewriter::Typewriter;
use crate::behaviors::Behavior;
use crate::core::config::SiteConfig;
use crate::core::page::{Flow, Page, PageEvent, Subscription, Subscriptions};
use crate::core::schedule::{Scheduler, Wake};

pub struct Site {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Site {
    /// Mount every behavior against `page`. Behaviors whose markup is absent
    /// are skipped; optional effects follow `config.effects`.
    pub fn mount(page: &mut dyn Page, config: &SiteConfig, timers: &mut dyn Scheduler) -> Self {
        let behavior = &config.behavior;
        let effects = &config.effects;
        let mut behaviors: Vec<Box<dyn Behavior>> = Vec::new();

        behaviors.push(Box::new(Navigation::mount(page, behavior)));
        behaviors.push(Box::new(SmoothScroll::mount(page, behavior)));
        behaviors.push(Box::new(GalleryFilter::mount(page, behavior)));
        if let Some(carousel) = Carousel::mount(page, behavior, timers) {
            behaviors.push(Box::new(carousel));
        }
        behaviors.push(Box::new(StatsCounter::mount(page, behavior, timers)));
        if let Some(contact) = ContactForm::mount(page, behavior) {
            behaviors.push(Box::new(contact));
        }
        if let Some(scroll_top) = ScrollTop::mount(page, behavior) {
            behaviors.push(Box::new(scroll_top));
        }
        behaviors.push(Box::new(ProgressBars::mount(page, behavior, timers)));

        if effects.newsletter {
            behaviors.push(Box::new(Newsletter::mount(page)));
        }
        if effects.social_share {
            behaviors.push(Box::new(SocialShare::mount(page)));
        }
        if effects.cursor {
            if let Some(cursor) = CursorFollower::mount(page) {
                behaviors.push(Box::new(cursor));
            }
        }
        if effects.parallax {
            behaviors.push(Box::new(Parallax::mount(page, behavior)));
        }
        if effects.lazy_images {
            behaviors.push(Box::new(LazyImages::mount(page)));
        }
        if effects.page_loader {
            if let Some(loader) = PageLoader::mount(page, behavior) {
                behaviors.push(Box::new(loader));
            }
        }
        if effects.field_focus {
            behaviors.push(Box::new(FieldFocus::mount(page)));
        }
        if effects.typewriter.enabled {
            if let Some(typewriter) = Typewriter::mount(page, &effects.typewriter, timers) {
                behaviors.push(Box::new(typewriter));
            }
        }

        let site = Self { behaviors };
        info!(behaviors = ?site.names(), "site mounted");
        site
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    pub fn is_mounted(&self, name: &str) -> bool {
        self.behaviors.iter().any(|b| b.name() == name)
    }

    /// Listeners to register, one per distinct source and event kind.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let mut subs = Subscriptions::new();
        for behavior in &self.behaviors {
            subs.extend(behavior.subscriptions());
        }
        subs.into_vec()
    }

    /// Hand `event` to every behavior in mount order.
    pub fn dispatch(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow {
        let mut flow = Flow::Continue;
        for behavior in &mut self.behaviors {
            flow = flow.merge(behavior.handle(event, page, timers));
        }
        if flow.prevents_default() {
            debug!(?event, "default action cancelled");
        }
        flow
    }

    /// Route a due continuation to its owner.
    pub fn wake(&mut self, wake: Wake, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        for behavior in &mut self.behaviors {
            behavior.wake(wake, page, timers);
        }
    }
}
