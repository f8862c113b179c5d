//! UI components built with Leptos.
//!
//! - [`Shell`] - Root shell owning the view state
//! - [`header`] / [`footer`] - Site chrome
//! - [`page`] - Renders the composed page
//! - [`contact`] - Contact form
//! - [`ticker`] - Sponsor ticker
//! - [`primitives`] - Stateless building blocks
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod contact;
pub mod footer;
pub mod header;
pub mod icons;
pub mod page;
pub mod primitives;
pub mod shell;
pub mod ticker;

pub use shell::Shell;
