//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconName;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBrain as Brain, LuCoffee as Coffee, LuHeart as Heart, LuInstagram as Instagram,
        LuLinkedin as Linkedin, LuRocket as Rocket, LuTwitter as Twitter, LuYoutube as Youtube,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCupHot as Coffee, BsHeart as Heart, BsInstagram as Instagram, BsLightbulb as Brain,
        BsLinkedin as Linkedin, BsRocket as Rocket, BsTwitter as Twitter, BsYoutube as Youtube,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(YOUTUBE, Youtube);
themed_icon!(COFFEE, Coffee);
themed_icon!(BRAIN, Brain);
themed_icon!(ROCKET, Rocket);
themed_icon!(HEART, Heart);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(TWITTER, Twitter);
themed_icon!(LINKEDIN, Linkedin);

/// Icon for a name referenced from site content.
pub fn for_name(name: IconName) -> Icon {
    match name {
        IconName::Youtube => YOUTUBE,
        IconName::Coffee => COFFEE,
        IconName::Brain => BRAIN,
        IconName::Rocket => ROCKET,
        IconName::Heart => HEART,
        IconName::Instagram => INSTAGRAM,
        IconName::Twitter => TWITTER,
        IconName::Linkedin => LINKEDIN,
    }
}
