//! Core logic, independent of the UI framework.
//!
//! - [`compose`] - Pure page composition from view state and content
//! - [`ticker`] - Sponsor ticker track construction
//! - [`submit`] - Contact form submission extension point
//! - [`error`] - Error types

pub mod compose;
pub mod error;
pub mod submit;
pub mod ticker;

pub use compose::compose;
pub use error::{ContentError, SubmitError};
pub use submit::{ConsoleTransport, ContactTransport, handle_submit};
