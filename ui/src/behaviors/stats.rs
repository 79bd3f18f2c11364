//! Animated statistic counters.
//!
//! Counters count up from zero once the stats section is half on screen.
//! Progress is derived from the frame number rather than accumulated, so the
//! displayed value never drifts past the target however frames are timed.

use tracing::{debug, warn};

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::{scrolled_past_half, Behavior};

/// Parse the leading integer of `raw` the way browsers read `data-target`:
/// leading whitespace, an optional sign, then digits. Anything after the
/// digits is ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Frame-indexed count-up from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: i64,
    steps: u64,
    frame: u64,
}

impl CountUp {
    pub fn new(target: i64, duration_ms: u64, frame_ms: u64) -> Self {
        let steps = duration_ms.div_ceil(frame_ms.max(1)).max(1);
        Self {
            target,
            steps,
            frame: 0,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance one frame; returns the text to display and whether the
    /// animation is finished.
    pub fn tick(&mut self) -> (String, bool) {
        self.frame += 1;
        if self.target <= 0 || self.frame >= self.steps {
            return (format!("{}+", self.target), true);
        }
        let shown = (i128::from(self.target) * i128::from(self.frame)) / i128::from(self.steps);
        (shown.to_string(), false)
    }
}

struct Counter {
    element: ElementRef,
    count: CountUp,
}

pub struct StatsCounter {
    section: Option<ElementRef>,
    counters: Vec<Counter>,
    has_animated: bool,
}

impl StatsCounter {
    pub fn mount(
        page: &mut dyn Page,
        config: &BehaviorConfig,
        timers: &mut dyn Scheduler,
    ) -> Self {
        let section = page.query(&hooks::class_selector(hooks::STATS_SECTION));
        let counters = page
            .query_all(&hooks::class_selector(hooks::STAT_NUMBER))
            .into_iter()
            .filter_map(|element| {
                let raw = page.attribute(element, hooks::DATA_TARGET).unwrap_or_default();
                match parse_target(&raw) {
                    Some(target) => Some(Counter {
                        element,
                        count: CountUp::new(
                            target,
                            config.counter_duration_ms,
                            config.counter_frame_ms,
                        ),
                    }),
                    None => {
                        warn!(%element, raw = %raw, "stat counter without numeric data-target skipped");
                        None
                    }
                }
            })
            .collect();

        let mut stats = Self {
            section,
            counters,
            has_animated: false,
        };
        stats.check_position(page, timers);
        stats
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
        debug!(counters = self.counters.len(), "stats counters started");
        for slot in 0..self.counters.len() {
            self.step(slot, page, timers);
        }
    }

    fn step(&mut self, slot: usize, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        let Some(counter) = self.counters.get_mut(slot) else {
            return;
        };
        let (text, done) = counter.count.tick();
        page.set_text(counter.element, &text);
        if !done {
            timers.next_frame(Wake::CounterFrame { slot });
        }
    }
}

impl Behavior for StatsCounter {
    fn name(&self) -> &'static str {
        "stats-counter"
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

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        if let Wake::CounterFrame { slot } = wake {
            self.step(slot, page, timers);
        }
    }
}
