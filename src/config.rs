//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site.
//! Page copy and content lists are loaded at compile time using `include_str!`.

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Site content for both pages, parsed by [`crate::models::SiteContent`].
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the header and footer.
pub const APP_NAME: &str = "SV Worldz";

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Navigation
// =============================================================================

/// Same-page anchor links shown after the page links: `(label, anchor id)`.
pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("Videos", "videos"),
    ("Sponsors", "sponsors"),
    ("Features", "features"),
    ("Contact", "contact"),
];

/// Media query above which the header shows the full navigation.
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";

// =============================================================================
// Media
// =============================================================================

/// Video thumbnail URL template: `{PREFIX}{video id}{SUFFIX}`.
pub mod thumbnail {
    pub const PREFIX: &str = "https://img.youtube.com/vi/";
    pub const SUFFIX: &str = "/maxresdefault.jpg";
}

// =============================================================================
// Animation Timing
// =============================================================================

/// Seconds for the sponsor ticker to scroll one full copy of the list.
pub const SPONSOR_CYCLE_SECS: u32 = 20;

/// Period of one rise of a floating element, in milliseconds.
pub const FLOAT_PERIOD_MS: u32 = 2000;

/// Entry animation delays for the hero elements (milliseconds).
pub mod reveal_delays {
    pub const TITLE: u32 = 0;
    pub const SUBTITLE: u32 = 200;
    pub const ACTION: u32 = 400;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
