//! Render tree: the composed description of a page, independent of how it
//! is drawn.

use crate::models::{
    AboutHeroContent, CallToActionContent, ContactForm, FeatureEntry, Heading, HeroContent,
    MissionContent, Page, ProfileContent, SponsorEntry, StatEntry, VideoEntry,
};

/// Video card as displayed in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaCard {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub caption: String,
}

impl From<&VideoEntry> for MediaCard {
    fn from(entry: &VideoEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            thumbnail: entry.thumbnail_url(),
            caption: entry.caption(),
        }
    }
}

/// Sponsor ticker track.
///
/// `items` holds the sponsor list twice back to back, so translating the
/// track by half its width loops without a visible seam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerTrack {
    pub items: Vec<SponsorEntry>,
    pub cycle_secs: u32,
}

/// Call-to-action placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    /// Dark full-width band (home page)
    Banner,
    /// Centered closing block with a floating button (about page)
    Closing,
}

/// One section of a composed page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Hero(HeroContent),
    Stats(Vec<StatEntry>),
    Videos {
        heading: Heading,
        cards: Vec<MediaCard>,
    },
    AboutBlurb(ProfileContent),
    Sponsors {
        heading: Heading,
        track: TickerTrack,
    },
    Features {
        heading: Heading,
        items: Vec<FeatureEntry>,
    },
    CallToAction {
        variant: CtaVariant,
        content: CallToActionContent,
    },
    Contact {
        heading: Heading,
        form: ContactForm,
    },
    AboutHero(AboutHeroContent),
    Mission(MissionContent),
    Profile(ProfileContent),
    SecretSauce {
        heading: Heading,
        items: Vec<FeatureEntry>,
    },
}

impl Section {
    /// Same-page anchor id targeted by the navigation links, if any.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Self::Videos { .. } => Some("videos"),
            Self::AboutBlurb(_) => Some("about"),
            Self::Sponsors { .. } => Some("sponsors"),
            Self::Features { .. } => Some("features"),
            Self::Contact { .. } => Some("contact"),
            _ => None,
        }
    }

    /// Short kind name, used for keys and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
            Self::Stats(_) => "stats",
            Self::Videos { .. } => "videos",
            Self::AboutBlurb(_) => "about-blurb",
            Self::Sponsors { .. } => "sponsors",
            Self::Features { .. } => "features",
            Self::CallToAction { .. } => "call-to-action",
            Self::Contact { .. } => "contact",
            Self::AboutHero(_) => "about-hero",
            Self::Mission(_) => "mission",
            Self::Profile(_) => "profile",
            Self::SecretSauce { .. } => "secret-sauce",
        }
    }
}

/// A composed page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTree {
    pub page: Page,
    pub sections: Vec<Section>,
}

impl RenderTree {
    /// The contact form, present only on the home page.
    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.sections.iter().find_map(|s| match s {
            Section::Contact { form, .. } => Some(form),
            _ => None,
        })
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::kind).collect()
    }
}
