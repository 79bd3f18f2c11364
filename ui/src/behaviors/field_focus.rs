use crate::core::page::{ElementRef, EventKind, Flow, Page, PageEvent, Subscription};
use crate::core::schedule::Scheduler;
use crate::hooks;

use super::Behavior;

/// Marks a form field's wrapper as `focused` while it is in use or filled.
pub struct FieldFocus {
    fields: Vec<ElementRef>,
}

impl FieldFocus {
    pub fn mount(page: &mut dyn Page) -> Self {
        Self {
            fields: page.query_all(&hooks::class_selector(hooks::FORM_CONTROL)),
        }
    }
}

impl Behavior for FieldFocus {
    fn name(&self) -> &'static str {
        "field-focus"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.fields
            .iter()
            .flat_map(|field| {
                [
                    Subscription::element(*field, EventKind::Focus),
                    Subscription::element(*field, EventKind::Blur),
                ]
            })
            .collect()
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        page: &mut dyn Page,
        _timers: &mut dyn Scheduler,
    ) -> Flow {
        match *event {
            PageEvent::Focus(field) if self.fields.contains(&field) => {
                if let Some(wrapper) = page.parent(field) {
                    page.add_class(wrapper, hooks::FOCUSED);
                }
            }
            PageEvent::Blur(field) if self.fields.contains(&field) => {
                if page.value(field).is_empty() {
                    if let Some(wrapper) = page.parent(field) {
                        page.remove_class(wrapper, hooks::FOCUSED);
                    }
                }
            }
            _ => {}
        }
        Flow::Continue
    }
}
