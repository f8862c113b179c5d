//! SV Worldz marketing site.
//!
//! A Leptos client-side app with two pages (home and about) selected by an
//! in-memory [`ViewState`](models::ViewState). Page composition is a pure
//! function ([`core::compose`]) so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, Site};
