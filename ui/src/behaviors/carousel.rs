//! Testimonial carousel: a cyclic slide cursor driven by a timer, arrow
//! buttons, dots and horizontal swipes.

use tracing::{debug, warn};

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::Behavior;

/// Index over `len` slides that wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    /// `None` when there is nothing to cycle through.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to `index`; out-of-range requests leave the cursor untouched.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Classify a horizontal gesture. Moving left by more than `threshold`
/// advances, moving right by more than `threshold` goes back.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    if end_x < start_x - threshold {
        Some(SwipeDirection::Next)
    } else if end_x > start_x + threshold {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

pub struct Carousel {
    cursor: SlideCursor,
    slides: Vec<ElementRef>,
    dots: Vec<ElementRef>,
    prev_button: Option<ElementRef>,
    next_button: Option<ElementRef>,
    slider: Option<ElementRef>,
    swipe_threshold: f64,
    touch_start_x: f64,
}

impl Carousel {
    /// Builds the dots and starts auto-advance. Returns `None` on pages
    /// without testimonials.
    pub fn mount(
        page: &mut dyn Page,
        config: &BehaviorConfig,
        timers: &mut dyn Scheduler,
    ) -> Option<Self> {
        let slides = page.query_all(&hooks::class_selector(hooks::TESTIMONIAL_ITEM));
        let cursor = SlideCursor::new(slides.len())?;

        let mut dots = Vec::with_capacity(slides.len());
        match page.query(&hooks::class_selector(hooks::TESTIMONIAL_DOTS)) {
            Some(container) => {
                for index in 0..slides.len() {
                    let Some(dot) = page.append_child(container, "span") else {
                        warn!(index, "could not create testimonial dot");
                        continue;
                    };
                    page.add_class(dot, hooks::TESTIMONIAL_DOT);
                    if index == 0 {
                        page.add_class(dot, hooks::ACTIVE);
                    }
                    dots.push(dot);
                }
            }
            None => debug!("no testimonial dots container; dots skipped"),
        }

        let carousel = Self {
            cursor,
            prev_button: page.query(&hooks::class_selector(hooks::TESTIMONIAL_PREV)),
            next_button: page.query(&hooks::class_selector(hooks::TESTIMONIAL_NEXT)),
            slider: page.query(&hooks::class_selector(hooks::TESTIMONIALS_SLIDER)),
            slides,
            dots,
            swipe_threshold: config.swipe_threshold,
            touch_start_x: 0.0,
        };

        timers.every(config.carousel_interval_ms, Wake::CarouselAdvance);
        Some(carousel)
    }

    pub fn current(&self) -> usize {
        self.cursor.index()
    }

    fn show(&self, page: &mut dyn Page) {
        for slide in &self.slides {
            page.remove_class(*slide, hooks::ACTIVE);
        }
        for dot in &self.dots {
            page.remove_class(*dot, hooks::ACTIVE);
        }
        let index = self.cursor.index();
        if let Some(slide) = self.slides.get(index) {
            page.add_class(*slide, hooks::ACTIVE);
        }
        if let Some(dot) = self.dots.get(index) {
            page.add_class(*dot, hooks::ACTIVE);
        }
    }

    pub fn next(&mut self, page: &mut dyn Page) {
        self.cursor.next();
        self.show(page);
    }

    pub fn previous(&mut self, page: &mut dyn Page) {
        self.cursor.previous();
        self.show(page);
    }

    pub fn go_to(&mut self, index: usize, page: &mut dyn Page) {
        if self.cursor.go_to(index) {
            self.show(page);
        }
    }
}

impl Behavior for Carousel {
    fn name(&self) -> &'static str {
        "testimonial-carousel"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        let mut subs = Vec::new();
        for button in [self.prev_button, self.next_button].into_iter().flatten() {
            subs.push(Subscription::element(button, EventKind::Click));
        }
        for dot in &self.dots {
            subs.push(Subscription::element(*dot, EventKind::Click));
        }
        if let Some(slider) = self.slider {
            subs.push(Subscription::element(slider, EventKind::TouchStart));
            subs.push(Subscription::element(slider, EventKind::TouchEnd));
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
            PageEvent::Click(target) if Some(target) == self.next_button => self.next(page),
            PageEvent::Click(target) if Some(target) == self.prev_button => self.previous(page),
            PageEvent::Click(target) => {
                if let Some(index) = self.dots.iter().position(|dot| *dot == target) {
                    self.go_to(index, page);
                }
            }
            PageEvent::TouchStart { target, screen_x } if Some(target) == self.slider => {
                self.touch_start_x = screen_x;
            }
            PageEvent::TouchEnd { target, screen_x } if Some(target) == self.slider => {
                match classify_swipe(self.touch_start_x, screen_x, self.swipe_threshold) {
                    Some(SwipeDirection::Next) => self.next(page),
                    Some(SwipeDirection::Previous) => self.previous(page),
                    None => {}
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, _timers: &mut dyn Scheduler) {
        if wake == Wake::CarouselAdvance {
            self.next(page);
        }
    }
}
