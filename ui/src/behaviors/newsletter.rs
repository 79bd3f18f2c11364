//! Newsletter signup stub: acknowledges the address and clears the form.

use tracing::debug;

use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

const EMAIL_INPUT: &str = "input[type=\"email\"]";

pub fn subscribed_message(email: &str) -> String {
    format!("Thank you for subscribing! You will receive updates at {email}")
}

pub struct Newsletter {
    forms: Vec<ElementRef>,
}

impl Newsletter {
    pub fn mount(page: &mut dyn Page) -> Self {
        Self {
            forms: page.query_all(&hooks::class_selector(hooks::NEWSLETTER_FORM)),
        }
    }
}

impl Behavior for Newsletter {
    fn name(&self) -> &'static str {
        "newsletter"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.forms
            .iter()
            .map(|form| Subscription::element(*form, EventKind::Submit))
            .collect()
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        let PageEvent::Submit(form) = *event else {
            return Flow::Continue;
        };
        if !self.forms.contains(&form) {
            return Flow::Continue;
        }

        let email = page
            .query_within(form, EMAIL_INPUT)
            .map(|input| page.value(input))
            .unwrap_or_default();
        if !email.is_empty() {
            debug!("newsletter signup");
            page.alert(&subscribed_message(&email));
            page.reset_form(form);
        }
        Flow::PreventDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage, ManualTimers};

    fn page() -> (FakePage, ElementRef, ElementRef) {
        let mut page = FakePage::new();
        let form = page.add(FakeElement::new("form").class("newsletter-form"));
        let input = page.add(
            FakeElement::new("input")
                .attr("type", "email")
                .within(form),
        );
        (page, form, input)
    }

    #[test]
    fn acknowledges_and_resets() {
        let (mut page, form, input) = page();
        page.set_value(input, "fan@example.com");
        let mut timers = ManualTimers::new();
        let mut newsletter = Newsletter::mount(&mut page);

        let flow = newsletter.handle(&PageEvent::Submit(form), &mut page, &mut timers);
        assert_eq!(flow, Flow::PreventDefault);
        assert_eq!(
            page.alerts,
            vec!["Thank you for subscribing! You will receive updates at fan@example.com"]
        );
        assert_eq!(page.value(input), "");
    }

    #[test]
    fn empty_address_is_ignored_but_still_prevented() {
        let (mut page, form, _) = page();
        let mut timers = ManualTimers::new();
        let mut newsletter = Newsletter::mount(&mut page);

        let flow = newsletter.handle(&PageEvent::Submit(form), &mut page, &mut timers);
        assert_eq!(flow, Flow::PreventDefault);
        assert!(page.alerts.is_empty());
        assert!(page.resets.is_empty());
    }
}
