//! Contact form: client-side validation and a simulated send.
//!
//! No request leaves the page. A successful submit disables the button,
//! waits for the configured latency and then reports success, standing in
//! for the POST a server integration would make with [`ContactSubmission`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::config::BehaviorConfig;
use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::{Scheduler, Wake};
use crate::hooks;

use super::Behavior;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I will get back to you soon!";
const SENDING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin me-2\"></i>Sending...";
const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// The request body a real backend would receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with `\s` spelled out as the browser's
/// whitespace class. The regex crate's `\s` differs from it at U+0085 and
/// U+FEFF.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const NOT_SPACE_OR_AT: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";
    let pattern = format!(r"^{NOT_SPACE_OR_AT}@{NOT_SPACE_OR_AT}\.{NOT_SPACE_OR_AT}$");
    Regex::new(&pattern).expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

struct Fields {
    name: Option<ElementRef>,
    email: Option<ElementRef>,
    subject: Option<ElementRef>,
    message: Option<ElementRef>,
}

struct InFlight {
    button: Option<ElementRef>,
    original_label: String,
}

pub struct ContactForm {
    form: ElementRef,
    message: Option<ElementRef>,
    fields: Fields,
    message_ms: u64,
    send_ms: u64,
    message_generation: u64,
    in_flight: Option<InFlight>,
}

impl ContactForm {
    pub fn mount(page: &mut dyn Page, config: &BehaviorConfig) -> Option<Self> {
        let form = page.element_by_id(hooks::CONTACT_FORM_ID)?;
        let fields = Fields {
            name: page.element_by_id(hooks::FIELD_NAME_ID),
            email: page.element_by_id(hooks::FIELD_EMAIL_ID),
            subject: page.element_by_id(hooks::FIELD_SUBJECT_ID),
            message: page.element_by_id(hooks::FIELD_MESSAGE_ID),
        };
        Some(Self {
            form,
            message: page.element_by_id(hooks::FORM_MESSAGE_ID),
            fields,
            message_ms: config.form_message_ms,
            send_ms: config.simulated_send_ms,
            message_generation: 0,
            in_flight: None,
        })
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    fn read(&self, page: &dyn Page) -> ContactSubmission {
        let value = |field: Option<ElementRef>| field.map(|el| page.value(el)).unwrap_or_default();
        ContactSubmission {
            name: value(self.fields.name),
            email: value(self.fields.email),
            subject: value(self.fields.subject),
            message: value(self.fields.message),
        }
    }

    fn submit(&mut self, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        if self.in_flight.is_some() {
            debug!("contact form already sending; submit ignored");
            return;
        }

        let submission = self.read(page);
        if let Err(err) = submission.validate() {
            debug!(%err, "contact form rejected");
            self.show_message(&err.to_string(), MessageKind::Error, page, timers);
            return;
        }

        match serde_json::to_string(&submission) {
            Ok(body) => debug!(%body, "simulating contact submission"),
            Err(err) => warn!(%err, "could not serialise contact submission"),
        }

        let button = page.query_within(self.form, SUBMIT_BUTTON);
        let original_label = button.map(|b| page.inner_html(b)).unwrap_or_default();
        if let Some(button) = button {
            page.set_inner_html(button, SENDING_LABEL);
            page.set_disabled(button, true);
        }
        self.in_flight = Some(InFlight {
            button,
            original_label,
        });
        timers.after(self.send_ms, Wake::SubmissionSettled);
    }

    fn settle(&mut self, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        info!("contact message accepted");
        self.show_message(SUCCESS_MESSAGE, MessageKind::Success, page, timers);
        page.reset_form(self.form);
        if let Some(button) = in_flight.button {
            page.set_inner_html(button, &in_flight.original_label);
            page.set_disabled(button, false);
        }
    }

    fn show_message(
        &mut self,
        text: &str,
        kind: MessageKind,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) {
        let Some(message) = self.message else {
            return;
        };
        page.set_text(message, text);
        page.set_class_name(message, &format!("form-message {}", kind.class()));
        page.set_style(message, "display", "block");

        self.message_generation += 1;
        timers.after(
            self.message_ms,
            Wake::FormMessageExpired {
                generation: self.message_generation,
            },
        );
    }
}

impl Behavior for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::element(self.form, EventKind::Submit)]
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        timers: &mut dyn Scheduler,
    ) -> Flow {
        match event {
            PageEvent::Submit(target) if *target == self.form => {
                self.submit(page, timers);
                Flow::PreventDefault
            }
            _ => Flow::Continue,
        }
    }

    fn wake(&mut self, wake: Wake, page: &mut dyn Page, timers: &mut dyn Scheduler) {
        match wake {
            Wake::SubmissionSettled => self.settle(page, timers),
            Wake::FormMessageExpired { generation } if generation == self.message_generation => {
                if let Some(message) = self.message {
                    page.set_style(message, "display", "none");
                }
            }
            _ => {}
        }
    }
}
