// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact forms delivered through an email relay service.
//!
//! The relay call itself belongs to the host (it is the only asynchronous
//! step on the page). This module owns everything around it: reading the
//! relay identifiers from the form, the translated status line, and a
//! per-form guard so a second submit is ignored while one is in flight.
//!
//! ```text
//! begin_submit ──► Send(ticket) ──► host sends ──► finish_submit(ticket, outcome)
//!      │
//!      ├──► NotConfigured   (status: form.status.missing, is-error)
//!      └──► InFlight        (nothing changes)
//! ```

use crate::dom::{attr, Document};
use crate::i18n::{StatusState, Translator};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const STATUS_MISSING: &str = "form.status.missing";
pub const STATUS_SENDING: &str = "form.status.sending";
pub const STATUS_SUCCESS: &str = "form.status.success";
pub const STATUS_FAIL: &str = "form.status.fail";

/// Relay identifiers carried by the form's `data-emailjs-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// `None` unless all three identifiers are present and non-empty.
    pub fn from_element<D: Document>(doc: &D, form: &D::Element) -> Option<Self> {
        let read = |name: &str| doc.attribute(form, name).filter(|value| !value.trim().is_empty());
        Some(Self {
            service_id: read(attr::EMAILJS_SERVICE)?,
            template_id: read(attr::EMAILJS_TEMPLATE)?,
            public_key: read(attr::EMAILJS_PUBLIC)?,
        })
    }
}

/// Why the relay did not accept a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message not delivered: {reason}")]
pub struct SubmitFailure {
    pub reason: String,
}

impl SubmitFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Completion of one relay call.
pub type SubmitOutcome = Result<(), SubmitFailure>;

/// Permission for the host to send one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub form: usize,
    pub relay: RelayConfig,
    /// Set on the first send of the session: the host initialises the relay
    /// client with this public key before sending.
    pub initialize_with: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Send(SubmitTicket),
    NotConfigured,
    InFlight,
}

#[derive(Debug, Clone)]
struct FormSlot<E> {
    element: E,
    in_flight: bool,
}

/// Every `[data-email-form]` on the page.
#[derive(Debug, Clone)]
pub struct ContactForms<E> {
    forms: Vec<FormSlot<E>>,
    relay_initialized: bool,
}

impl<E: Clone> ContactForms<E> {
    pub fn discover<D>(doc: &D) -> Self
    where
        D: Document<Element = E>,
    {
        let forms = doc
            .query_all(attr::EMAIL_FORM)
            .into_iter()
            .map(|element| FormSlot {
                element,
                in_flight: false,
            })
            .collect();
        Self {
            forms,
            relay_initialized: false,
        }
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn is_in_flight(&self, form: usize) -> bool {
        self.forms.get(form).is_some_and(|slot| slot.in_flight)
    }

    /// Handles a submit event on form `form`.
    ///
    /// `relay_available` reports whether the host loaded the relay client.
    pub fn begin_submit<D>(
        &mut self,
        doc: &mut D,
        translator: &Translator<E>,
        form: usize,
        relay_available: bool,
    ) -> SubmitDecision
    where
        D: Document<Element = E>,
    {
        let Some(slot) = self.forms.get(form) else {
            warn!(form, "submit for unknown form");
            return SubmitDecision::NotConfigured;
        };
        if slot.in_flight {
            debug!(form, "submission already in flight");
            return SubmitDecision::InFlight;
        }
        let element = slot.element.clone();

        let relay = RelayConfig::from_element(doc, &element).filter(|_| relay_available);
        let Some(relay) = relay else {
            show_status(doc, translator, &element, STATUS_MISSING, StatusState::Error);
            return SubmitDecision::NotConfigured;
        };

        let initialize_with = if self.relay_initialized {
            None
        } else {
            self.relay_initialized = true;
            Some(relay.public_key.clone())
        };

        show_status(doc, translator, &element, STATUS_SENDING, StatusState::Neutral);
        self.forms[form].in_flight = true;
        SubmitDecision::Send(SubmitTicket {
            form,
            relay,
            initialize_with,
        })
    }

    /// Applies the relay's answer for `ticket` and releases the guard.
    pub fn finish_submit<D>(
        &mut self,
        doc: &mut D,
        translator: &Translator<E>,
        ticket: SubmitTicket,
        outcome: SubmitOutcome,
    ) where
        D: Document<Element = E>,
    {
        let Some(slot) = self.forms.get_mut(ticket.form) else {
            return;
        };
        slot.in_flight = false;
        let element = slot.element.clone();

        match outcome {
            Ok(()) => {
                info!(form = ticket.form, "contact message sent");
                show_status(doc, translator, &element, STATUS_SUCCESS, StatusState::Success);
                doc.reset_form(&element);
            }
            Err(failure) => {
                warn!(form = ticket.form, %failure, "contact message failed");
                show_status(doc, translator, &element, STATUS_FAIL, StatusState::Error);
            }
        }
    }
}

fn show_status<D, E>(
    doc: &mut D,
    translator: &Translator<E>,
    form: &E,
    key: &str,
    state: StatusState,
) where
    D: Document<Element = E>,
    E: Clone,
{
    if let Some(status) = doc.query_first_within(form, attr::FORM_STATUS) {
        translator.set_status(doc, &status, key, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{class, MemoryDocument, NodeId};
    use crate::i18n::{Dictionary, Lang};
    use std::sync::Arc;

    struct Page {
        doc: MemoryDocument,
        status: NodeId,
        name: NodeId,
    }

    fn page(configured: bool) -> Page {
        let mut doc = MemoryDocument::new();
        let mut form = doc.create("form").attr(attr::EMAIL_FORM, "");
        if configured {
            form = form
                .attr(attr::EMAILJS_SERVICE, "service_pl")
                .attr(attr::EMAILJS_TEMPLATE, "template_contact")
                .attr(attr::EMAILJS_PUBLIC, "pk_live");
        }
        let form = form.finish();
        let name = doc.create("input").child_of(form).finish();
        let status = doc
            .create("p")
            .attr(attr::FORM_STATUS, "")
            .child_of(form)
            .finish();
        Page { doc, status, name }
    }

    fn translator(lang: Lang) -> Translator<NodeId> {
        Translator::new(Arc::new(Dictionary::builtin()), lang)
    }

    #[test]
    fn unconfigured_form_reports_missing_relay() {
        let mut page = page(false);
        let translator = translator(Lang::En);
        let mut forms = ContactForms::discover(&page.doc);
        let decision = forms.begin_submit(&mut page.doc, &translator, 0, true);
        assert_eq!(decision, SubmitDecision::NotConfigured);
        assert_eq!(page.doc.text(&page.status), "Email service not configured yet.");
        assert!(page.doc.has_class(&page.status, class::ERROR));
        assert!(!forms.is_in_flight(0));
    }

    #[test]
    fn missing_relay_client_counts_as_unconfigured() {
        let mut page = page(true);
        let translator = translator(Lang::Sw);
        let mut forms = ContactForms::discover(&page.doc);
        let decision = forms.begin_submit(&mut page.doc, &translator, 0, false);
        assert_eq!(decision, SubmitDecision::NotConfigured);
        assert_eq!(page.doc.text(&page.status), "Huduma ya barua pepe haijawekwa bado.");
    }

    #[test]
    fn successful_send_resets_fields() {
        let mut page = page(true);
        let translator = translator(Lang::En);
        let mut forms = ContactForms::discover(&page.doc);
        page.doc.type_into(page.name, "Asha");

        let SubmitDecision::Send(ticket) = forms.begin_submit(&mut page.doc, &translator, 0, true)
        else {
            panic!("configured form should be sent");
        };
        assert_eq!(ticket.initialize_with.as_deref(), Some("pk_live"));
        assert_eq!(ticket.relay.service_id, "service_pl");
        assert_eq!(page.doc.text(&page.status), "Sending...");
        assert!(forms.is_in_flight(0));

        forms.finish_submit(&mut page.doc, &translator, ticket, Ok(()));
        assert_eq!(page.doc.text(&page.status), "Message sent. We will reply soon.");
        assert!(page.doc.has_class(&page.status, class::SUCCESS));
        assert_eq!(page.doc.input_value(page.name), None);
        assert!(!forms.is_in_flight(0));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut page = page(true);
        let translator = translator(Lang::En);
        let mut forms = ContactForms::discover(&page.doc);
        let first = forms.begin_submit(&mut page.doc, &translator, 0, true);
        assert!(matches!(first, SubmitDecision::Send(_)));
        let second = forms.begin_submit(&mut page.doc, &translator, 0, true);
        assert_eq!(second, SubmitDecision::InFlight);
    }

    #[test]
    fn failure_keeps_fields_and_relay_initialised_once() {
        let mut page = page(true);
        let translator = translator(Lang::En);
        let mut forms = ContactForms::discover(&page.doc);
        page.doc.type_into(page.name, "Asha");

        let SubmitDecision::Send(ticket) = forms.begin_submit(&mut page.doc, &translator, 0, true)
        else {
            panic!("configured form should be sent");
        };
        forms.finish_submit(
            &mut page.doc,
            &translator,
            ticket,
            Err(SubmitFailure::new("relay returned 502")),
        );
        assert_eq!(page.doc.text(&page.status), "Message failed. Please try again.");
        assert!(page.doc.has_class(&page.status, class::ERROR));
        assert_eq!(page.doc.input_value(page.name), Some("Asha"));

        let SubmitDecision::Send(retry) = forms.begin_submit(&mut page.doc, &translator, 0, true)
        else {
            panic!("guard should be released");
        };
        assert_eq!(retry.initialize_with, None);
    }
}
