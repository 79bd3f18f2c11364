//! Typing effect for the hero heading.
//!
//! The heading cycles through a list of words after a fixed prefix: one
//! letter typed per step, a hold on the full word, letters deleted one by one,
//! a short pause, then the next word. Disabled unless switched on in the
//! effects configuration.

use tracing::debug;

use crate::core::config::TypewriterConfig;
use crate::core::page::{ElementRef, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::Behavior;

/// The typing state machine, independent of any page.
#[derive(Debug, Clone)]
pub struct TypeCycle {
    prefix: String,
    words: Vec<Vec<char>>,
    word: usize,
    letters: usize,
    deleting: bool,
    type_ms: u64,
    delete_ms: u64,
    hold_ms: u64,
    next_word_ms: u64,
}

impl TypeCycle {
    /// `None` when there is no non-empty word to type.
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        let words: Vec<Vec<char>> = config
            .words
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| word.chars().collect())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            prefix: config.prefix.clone(),
            words,
            word: 0,
            letters: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_word_ms: config.next_word_ms,
        })
    }

    /// Advance one letter. Returns the heading text and the delay before the
    /// next step.
    pub fn step(&mut self) -> (String, u64) {
        let len = self.words[self.word].len();
        if self.deleting {
            self.letters = self.letters.saturating_sub(1);
        } else {
            self.letters = (self.letters + 1).min(len);
        }

        let shown: String = self.words[self.word][..self.letters].iter().collect();
        let text = format!("{}{shown}", self.prefix);

        let delay = if !self.deleting && self.letters == len {
            self.deleting = true;
            self.hold_ms
        } else if self.deleting && self.letters == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            self.next_word_ms
        } else if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };
        (text, delay)
    }
}

pub struct Typewriter {
    heading: ElementRef,
    cycle: TypeCycle,
}

impl Typewriter {
    pub fn mount(
        page: &mut dyn Page,
        config: &TypewriterConfig,
        timers: &mut dyn Scheduler,
    ) -> Option<Self> {
        let heading = page.query(&hooks::class_selector(hooks::HERO_TITLE))?;
        let cycle = TypeCycle::new(config)?;
        debug!(words = cycle.words.len(), "typewriter armed");
        timers.after(config.start_delay_ms, Wake::TypewriterStep);
        Some(Self { heading, cycle })
    }
}

impl Behavior for Typewriter {
    fn name(&self) -> &'static str {
        "typewriter"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        Vec::new()
    }

    fn handle(
        &mut self,
        _event: &PageEvent,
        _page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        Flow::Continue
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        if wake == Wake::TypewriterStep {
            let (text, delay) = self.cycle.step();
            page.set_text(self.heading, &text);
            timers.after(delay, Wake::TypewriterStep);
        }
    }
}
