//! Contact form submission.
//!
//! Submitting the form never navigates: the browser's default submit action
//! is always prevented by the form component. The values are then handed to
//! a [`ContactTransport`]. The only transport today is [`ConsoleTransport`],
//! which logs the submission and delivers nothing; a network-backed
//! transport plugs in here.

use crate::core::error::SubmitError;
use crate::models::ContactSubmission;
use crate::utils::console;

/// Delivers contact form submissions.
pub trait ContactTransport {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Transport that only logs to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTransport;

impl ContactTransport for ConsoleTransport {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        console::log(&format!(
            "Form submitted: {} <{}> ({})",
            submission.name, submission.email, submission.contact_type
        ));
        Ok(())
    }
}

/// Read a submission and pass it to the transport.
pub fn handle_submit<T, F>(transport: &T, lookup: F) -> Result<ContactSubmission, SubmitError>
where
    T: ContactTransport + ?Sized,
    F: Fn(&str) -> Option<String>,
{
    let submission = ContactSubmission::from_lookup(lookup)?;
    transport.deliver(&submission)?;
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::ContactType;

    #[derive(Default)]
    struct Recording {
        delivered: RefCell<Vec<ContactSubmission>>,
    }

    impl ContactTransport for Recording {
        fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            self.delivered.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct Failing;

    impl ContactTransport for Failing {
        fn deliver(&self, _: &ContactSubmission) -> Result<(), SubmitError> {
            Err(SubmitError::Transport("offline".to_string()))
        }
    }

    fn form(name: &str) -> Option<String> {
        match name {
            "name" => Some("Ada".to_string()),
            "email" => Some("ada@example.com".to_string()),
            "contactType" => Some("business".to_string()),
            "organization" => Some("Engines".to_string()),
            "message" => Some("Hello".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_console_transport_is_noop_success() {
        assert!(handle_submit(&ConsoleTransport, form).is_ok());
    }

    #[test]
    fn test_delivers_parsed_submission() {
        let transport = Recording::default();
        let submission = handle_submit(&transport, form).unwrap();
        assert_eq!(submission.name, "Ada");
        let delivered = transport.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].contact_type, ContactType::Business);
        assert_eq!(delivered[0].organization.as_deref(), Some("Engines"));
    }

    #[test]
    fn test_invalid_form_is_not_delivered() {
        let transport = Recording::default();
        let err = handle_submit(&transport, |name: &str| {
            (name != "email").then(|| form(name)).flatten()
        })
        .unwrap_err();
        assert!(matches!(err, SubmitError::MissingField("email")));
        assert!(transport.delivered.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure_is_reported() {
        let err = handle_submit(&Failing, form).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(ref reason) if reason == "offline"));
    }
}
