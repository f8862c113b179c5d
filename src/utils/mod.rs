//! Utility modules for browser access.
//!
//! Provides:
//! - [`console`] - Console logging that compiles to no-ops off wasm32
//! - [`dom`] - Window scrolling and form data access

pub mod console;
pub mod dom;
