//! Runs a [`Site`] against a live page with real timers.
//!
//! Timers are spawned futures that sleep and then post their [`Wake`] into a
//! channel. A single pump future drains the channel and feeds each wake back
//! into the site. DOM listeners call [`Driver::dispatch`] synchronously so
//! the default-action decision is known before the listener returns.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::core::config::SiteConfig;
use crate::core::page::{Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::core::{platform, timing};
use crate::site::Site;

/// Scheduler that turns every request into a spawned sleep.
pub struct ChannelScheduler {
    sender: UnboundedSender<Wake>,
}

impl ChannelScheduler {
    fn new(sender: UnboundedSender<Wake>) -> Self {
        Self { sender }
    }
}

impl Scheduler for ChannelScheduler {
    fn after(&mut self, delay_ms: u64, wake: Wake) {
        let sender = self.sender.clone();
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(wake);
        });
    }

    fn every(&mut self, period_ms: u64, wake: Wake) {
        let sender = self.sender.clone();
        let period_ms = period_ms.max(1);
        platform::spawn_future(async move {
            loop {
                timing::sleep_ms(period_ms).await;
                if sender.unbounded_send(wake).is_err() {
                    break;
                }
            }
        });
    }

    fn next_frame(&mut self, wake: Wake) {
        let sender = self.sender.clone();
        platform::spawn_future(async move {
            timing::next_frame().await;
            let _ = sender.unbounded_send(wake);
        });
    }
}

struct Inner<P> {
    page: P,
    timers: ChannelScheduler,
    site: Option<Site>,
}

impl<P: Page> Inner<P> {
    fn wake(&mut self, wake: Wake) {
        if let Some(site) = self.site.as_mut() {
            site.wake(wake, &mut self.page, &mut self.timers);
        }
    }
}

/// Shared handle; clones refer to the same page and site.
pub struct Driver<P> {
    inner: Rc<RefCell<Inner<P>>>,
}

impl<P> Clone for Driver<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Page + 'static> Driver<P> {
    /// Wrap `page` and start the wake pump. Must run on the platform
    /// executor (a `LocalSet` natively).
    pub fn new(page: P) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        let inner = Rc::new(RefCell::new(Inner {
            page,
            timers: ChannelScheduler::new(sender),
            site: None,
        }));
        platform::spawn_future(pump(Rc::downgrade(&inner), receiver));
        Self { inner }
    }

    /// Mount the behaviors and return the listeners the page must register.
    /// Mounting twice replaces the previous site.
    pub fn mount(&self, config: &SiteConfig) -> Vec<Subscription> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let site = Site::mount(&mut inner.page, config, &mut inner.timers);
        let subscriptions = site.subscriptions();
        debug!(listeners = subscriptions.len(), "driver mounted");
        inner.site = Some(site);
        subscriptions
    }

    pub fn dispatch(&self, event: PageEvent) -> Flow {
        let Ok(mut guard) = self.inner.try_borrow_mut() else {
            warn!(?event, "re-entrant dispatch refused");
            return Flow::Continue;
        };
        let inner = &mut *guard;
        match inner.site.as_mut() {
            Some(site) => site.dispatch(&event, &mut inner.page, &mut inner.timers),
            None => Flow::Continue,
        }
    }

    /// Run `f` against the page, or `None` while a dispatch is in progress.
    pub fn with_page<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R> {
        let mut guard = self.inner.try_borrow_mut().ok()?;
        Some(f(&mut guard.page))
    }

    pub fn mounted_behaviors(&self) -> Vec<&'static str> {
        self.inner
            .try_borrow()
            .ok()
            .and_then(|inner| inner.site.as_ref().map(Site::names))
            .unwrap_or_default()
    }
}

async fn pump<P: Page>(inner: Weak<RefCell<Inner<P>>>, mut receiver: UnboundedReceiver<Wake>) {
    while let Some(wake) = receiver.next().await {
        let Some(inner) = inner.upgrade() else {
            break;
        };
        match inner.try_borrow_mut() {
            Ok(mut guard) => guard.wake(wake),
            Err(_) => warn!(?wake, "page busy; wake dropped"),
        };
    }
}
