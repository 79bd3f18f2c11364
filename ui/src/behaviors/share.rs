//! Social share buttons (`[data-share="facebook|twitter|linkedin"]`).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

pub const POPUP_FEATURES: &str = "width=600,height=400";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Twitter,
    LinkedIn,
}

impl Platform {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "facebook" => Some(Self::Facebook),
            "twitter" => Some(Self::Twitter),
            "linkedin" => Some(Self::LinkedIn),
            _ => None,
        }
    }

    /// Share dialog URL for a page at `url` titled `title`.
    pub fn share_url(self, url: &str, title: &str) -> String {
        let url = encode_uri_component(url);
        let title = encode_uri_component(title);
        match self {
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            Self::Twitter => format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
            Self::LinkedIn => format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={url}&title={title}"
            ),
        }
    }
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

pub struct SocialShare {
    buttons: Vec<ElementRef>,
}

impl SocialShare {
    pub fn mount(page: &mut dyn Page) -> Self {
        Self {
            buttons: page.query_all(&format!("[{}]", hooks::DATA_SHARE)),
        }
    }
}

impl Behavior for SocialShare {
    fn name(&self) -> &'static str {
        "social-share"
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
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        let PageEvent::Click(button) = *event else {
            return Flow::Continue;
        };
        if !self.buttons.contains(&button) {
            return Flow::Continue;
        }

        let name = page.attribute(button, hooks::DATA_SHARE).unwrap_or_default();
        match Platform::parse(&name) {
            Some(platform) => {
                let target = platform.share_url(&page.location(), &page.title());
                debug!(?platform, "opening share dialog");
                page.open_popup(&target, POPUP_FEATURES);
            }
            None => warn!(platform = %name, "unknown share platform"),
        }
        Flow::PreventDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage, ManualTimers};

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("https://example.com/a b?x=1&y=2#top"),
            "https%3A%2F%2Fexample.com%2Fa%20b%3Fx%3D1%26y%3D2%23top"
        );
        assert_eq!(encode_uri_component("it's (fine)!*~"), "it's (fine)!*~");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("a-b_c.d\ne"), "a-b_c.d%0Ae");
    }

    #[test]
    fn builds_platform_urls() {
        let url = "https://example.com/";
        let title = "My Portfolio";
        assert_eq!(
            Platform::Facebook.share_url(url, title),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2F"
        );
        assert_eq!(
            Platform::Twitter.share_url(url, title),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2F&text=My%20Portfolio"
        );
        assert_eq!(
            Platform::LinkedIn.share_url(url, title),
            "https://www.linkedin.com/shareArticle?mini=true&url=https%3A%2F%2Fexample.com%2F&title=My%20Portfolio"
        );
    }

    #[test]
    fn click_opens_popup_and_unknown_only_prevents() {
        let mut page = FakePage::new();
        page.set_location("https://example.com/", "Portfolio");
        let twitter = page.add(FakeElement::new("a").attr("data-share", "twitter"));
        let myspace = page.add(FakeElement::new("a").attr("data-share", "myspace"));
        let mut timers = ManualTimers::new();
        let mut share = SocialShare::mount(&mut page);

        assert_eq!(
            share.handle(&PageEvent::Click(twitter), &mut page, &mut timers),
            Flow::PreventDefault
        );
        assert_eq!(page.popups.len(), 1);
        assert_eq!(page.popups[0].1, POPUP_FEATURES);
        assert!(page.popups[0].0.ends_with("&text=Portfolio"));

        assert_eq!(
            share.handle(&PageEvent::Click(myspace), &mut page, &mut timers),
            Flow::PreventDefault
        );
        assert_eq!(page.popups.len(), 1);
    }
}
