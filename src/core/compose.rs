//! Page composition.
//!
//! [`compose`] is the single place where view state selects what is shown.
//! It is a pure function of the view state and the static content, total
//! over all four `(Page, ContactType)` combinations.

use crate::core::ticker;
use crate::models::{
    ContactForm, CtaVariant, FeatureEntry, MediaCard, Page, RenderTree, Section, SiteContent,
    ViewState,
};

/// Compose the render tree for the given view state.
pub fn compose(state: &ViewState, content: &SiteContent) -> RenderTree {
    let sections = match state.active_page {
        Page::Home => home_sections(state, content),
        Page::About => about_sections(content),
    };
    RenderTree {
        page: state.active_page,
        sections,
    }
}

fn home_sections(state: &ViewState, content: &SiteContent) -> Vec<Section> {
    let home = &content.home;
    vec![
        Section::Hero(home.hero.clone()),
        Section::Stats(home.stats.clone()),
        Section::Videos {
            heading: home.videos_heading.clone(),
            cards: home.videos.iter().map(MediaCard::from).collect(),
        },
        Section::AboutBlurb(home.profile.clone()),
        Section::Sponsors {
            heading: home.sponsors_heading.clone(),
            track: ticker::track(&home.sponsors),
        },
        Section::Features {
            heading: home.features_heading.clone(),
            items: home.features.clone(),
        },
        Section::CallToAction {
            variant: CtaVariant::Banner,
            content: home.call_to_action.clone(),
        },
        Section::Contact {
            heading: home.contact_heading.clone(),
            form: ContactForm::new(state.contact_type, home.contact_submit.as_str()),
        },
    ]
}

// The about page has no contact form, so contact type does not reach it.
fn about_sections(content: &SiteContent) -> Vec<Section> {
    let about = &content.about;
    vec![
        Section::AboutHero(about.hero.clone()),
        Section::Mission(about.mission.clone()),
        Section::Profile(about.profile.clone()),
        Section::SecretSauce {
            heading: about.sauce_heading.clone(),
            items: numbered(&about.sauce),
        },
        Section::CallToAction {
            variant: CtaVariant::Closing,
            content: about.closing.clone(),
        },
    ]
}

/// Prefix titles with their 1-based position ("1. Thorough Research").
fn numbered(items: &[FeatureEntry]) -> Vec<FeatureEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| FeatureEntry {
            title: format!("{}. {}", i + 1, item.title),
            description: item.description.clone(),
        })
        .collect()
}
