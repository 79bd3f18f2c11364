//! Deferred continuations.
//!
//! Behaviors never sleep. When something has to happen later they hand a
//! [`Wake`] to a [`Scheduler`], and the owner of the scheduler feeds the wake
//! back into the site once it is due.

use super::page::ElementRef;

/// A continuation addressed to a specific behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    GalleryReveal { item: ElementRef, generation: u64 },
    GalleryConceal { item: ElementRef, generation: u64 },
    CarouselAdvance,
    CounterFrame { slot: usize },
    ProgressRestore { slot: usize },
    FormMessageExpired { generation: u64 },
    SubmissionSettled,
    LoaderHide,
    TypewriterStep,
}

pub trait Scheduler {
    /// Deliver `wake` once after `delay_ms`.
    fn after(&mut self, delay_ms: u64, wake: Wake);
    /// Deliver `wake` every `period_ms` for the lifetime of the page.
    fn every(&mut self, period_ms: u64, wake: Wake);
    /// Deliver `wake` before the next repaint.
    fn next_frame(&mut self, wake: Wake);
}
