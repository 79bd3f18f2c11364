//! Page behaviors. Each one owns its state, mounts itself against the page
//! once, and afterwards only reacts to [`PageEvent`]s and its own [`Wake`]s.

pub mod carousel;
pub mod contact;
pub mod cursor;
pub mod field_focus;
pub mod gallery;
pub mod lazy_images;
pub mod loader;
pub mod nav;
pub mod newsletter;
pub mod parallax;
pub mod progress;
pub mod scroll_top;
pub mod share;
pub mod smooth_scroll;
pub mod stats;
pub mod typewriter;

use crate::core::page::{ElementRef, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};

pub trait Behavior {
    fn name(&self) -> &'static str;

    /// Listeners this behavior needs.
    fn subscriptions(&self) -> Vec<Subscription>;

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow;

    /// Deferred continuation. Wakes addressed to other behaviors are ignored.
    fn wake(&mut self, _wake: Wake, _page: &mut dyn Page, _timers: &mut dyn Scheduler) {}
}

/// True once the bottom of the viewport has passed the middle of `section`.
pub(crate) fn scrolled_past_half(page: &dyn Page, section: ElementRef) -> bool {
    let viewport_bottom = page.scroll_y() + page.viewport_height();
    viewport_bottom > page.offset_top(section) + page.client_height(section) / 2.0
}
