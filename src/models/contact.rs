//! Contact form fields and the submission they produce.

use crate::core::error::SubmitError;
use crate::models::ContactType;

/// Form field names as submitted.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const CONTACT_TYPE: &str = "contactType";
    pub const ORGANIZATION: &str = "organization";
    pub const MESSAGE: &str = "message";
}

/// Input control used for a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Radio group selecting the contact form mode
    ContactType,
    TextArea { rows: u32 },
}

/// A single labeled form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
        }
    }

    /// Whether the field sits in the two-column row at the top of the form.
    pub fn is_inline(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Email) && self.required
    }
}

/// Fields of the contact form for a given mode, in display order.
///
/// The organization field is present only for [`ContactType::Business`].
pub fn form_fields(contact_type: ContactType) -> Vec<FormField> {
    let mut fields = vec![
        FormField::new(field::NAME, "Name", FieldKind::Text, true),
        FormField::new(field::EMAIL, "Email", FieldKind::Email, true),
        FormField::new(field::CONTACT_TYPE, "Contact Type", FieldKind::ContactType, true),
    ];
    if contact_type == ContactType::Business {
        fields.push(FormField::new(
            field::ORGANIZATION,
            "Organization Name",
            FieldKind::Text,
            false,
        ));
    }
    fields.push(FormField::new(
        field::MESSAGE,
        "Message",
        FieldKind::TextArea { rows: 6 },
        true,
    ));
    fields
}

/// Composed contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub contact_type: ContactType,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

impl ContactForm {
    pub fn new(contact_type: ContactType, submit_label: impl Into<String>) -> Self {
        Self {
            contact_type,
            fields: form_fields(contact_type),
            submit_label: submit_label.into(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// Values read from a submitted contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub contact_type: ContactType,
    pub organization: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from a field lookup (e.g. `FormData::get`).
    ///
    /// Values are trimmed. Required fields must be present and non-blank.
    /// The organization is kept only for business inquiries.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SubmitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| value(name).ok_or(SubmitError::MissingField(name));

        let contact_type: ContactType = required(field::CONTACT_TYPE)?.parse()?;
        let organization = match contact_type {
            ContactType::Business => value(field::ORGANIZATION),
            ContactType::Personal => None,
        };

        Ok(Self {
            name: required(field::NAME)?,
            email: required(field::EMAIL)?,
            contact_type,
            organization,
            message: required(field::MESSAGE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_fields_personal() {
        let names: Vec<_> = form_fields(ContactType::Personal)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["name", "email", "contactType", "message"]);
    }

    #[test]
    fn test_fields_business() {
        let fields = form_fields(ContactType::Business);
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["name", "email", "contactType", "organization", "message"]
        );
        let org = fields.iter().find(|f| f.name == field::ORGANIZATION).unwrap();
        assert!(!org.required);
        assert!(!org.is_inline());
    }

    #[test]
    fn test_required_flags() {
        let fields = form_fields(ContactType::Business);
        let required: Vec<_> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, vec!["name", "email", "contactType", "message"]);
        assert_eq!(
            fields.last().map(|f| &f.kind),
            Some(&FieldKind::TextArea { rows: 6 })
        );
    }

    #[test]
    fn test_submission_business() {
        let submission = ContactSubmission::from_lookup(lookup(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("contactType", "business"),
            ("organization", "  Analytical Engines Ltd "),
            ("message", "Sponsorship?"),
        ]))
        .unwrap();
        assert_eq!(submission.contact_type, ContactType::Business);
        assert_eq!(
            submission.organization.as_deref(),
            Some("Analytical Engines Ltd")
        );
    }

    #[test]
    fn test_submission_values_are_trimmed() {
        let submission = ContactSubmission::from_lookup(lookup(&[
            ("name", " Ada "),
            ("email", "ada@example.com\n"),
            ("contactType", " personal"),
            ("message", "\tHello  "),
        ]))
        .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.contact_type, ContactType::Personal);
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn test_submission_personal_drops_organization() {
        let submission = ContactSubmission::from_lookup(lookup(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("contactType", "personal"),
            ("organization", "stale value"),
            ("message", "Hello"),
        ]))
        .unwrap();
        assert_eq!(submission.organization, None);
    }

    #[test]
    fn test_submission_missing_message() {
        let err = ContactSubmission::from_lookup(lookup(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("contactType", "personal"),
            ("message", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, SubmitError::MissingField("message")));
    }

    #[test]
    fn test_submission_unknown_contact_type() {
        let err = ContactSubmission::from_lookup(lookup(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("contactType", "press"),
            ("message", "Hi"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SubmitError::UnknownContactType(_)));
    }
}
