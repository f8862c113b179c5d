//! Data models and types for the site.
//!
//! Contains domain types for:
//! - [`ViewState`], [`Page`], [`ContactType`] - The mutable view state
//! - [`SiteContent`] and its entries - Static content for both pages
//! - [`ContactForm`], [`ContactSubmission`] - Contact form fields and values
//! - [`RenderTree`], [`Section`] - Composed page description

mod contact;
mod content;
mod render;
mod view_state;

pub use contact::{ContactForm, ContactSubmission, FieldKind, FormField, field, form_fields};
pub use content::{
    AboutContent, AboutHeroContent, Action, Brand, CallToActionContent, Fact, FeatureEntry,
    FooterContent, Heading, HeroContent, HomeContent, IconName, Link, MissionContent,
    ProfileContent, SiteContent, SocialLink, SponsorEntry, StatEntry, VideoEntry,
};
pub use render::{CtaVariant, MediaCard, RenderTree, Section, TickerTrack};
pub use view_state::{ContactType, Page, ViewState};
