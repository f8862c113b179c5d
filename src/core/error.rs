//! Error types for the site.
//!
//! - [`ContentError`] - Embedded site content failed to parse or validate
//! - [`SubmitError`] - Contact form values could not be read or delivered

use thiserror::Error;

/// Site content errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file is not valid TOML for the content schema
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// A list that must have entries is empty
    #[error("site content list `{0}` must not be empty")]
    Empty(&'static str),
    /// Video at the given index has an empty id
    #[error("video #{0} has an empty id")]
    MissingVideoId(usize),
}

/// Contact form submission errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A required field is absent or blank
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// The contact type value is not one of the known modes
    #[error("unknown contact type `{0}`")]
    UnknownContactType(String),
    /// The form element or its data could not be read
    #[error("could not read form data")]
    FormUnavailable,
    /// The transport failed to deliver the submission
    #[error("delivery failed: {0}")]
    Transport(String),
}
