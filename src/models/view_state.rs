//! View state: which page is shown and which contact-form mode is selected.

use std::fmt;
use std::str::FromStr;

use crate::core::error::SubmitError;

/// Top-level page selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page with videos, sponsors and the contact form (default)
    #[default]
    Home,
    /// Alternate about page
    About,
}

impl Page {
    /// Label used in navigation links.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
        }
    }
}

/// Contact form mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// Personal inquiry (default)
    #[default]
    Personal,
    /// Business inquiry, adds the organization field
    Business,
}

impl ContactType {
    /// All modes in display order.
    pub const ALL: [ContactType; 2] = [Self::Personal, Self::Business];

    /// Form value submitted for this mode.
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Business => "Business",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl FromStr for ContactType {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            other => Err(SubmitError::UnknownContactType(other.to_string())),
        }
    }
}

/// The only mutable state of the site.
///
/// Both fields are independent two-state toggles: there is no terminal
/// state and no transition of one field affects the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_page: Page,
    pub contact_type: ContactType,
}

impl ViewState {
    pub fn new(active_page: Page, contact_type: ContactType) -> Self {
        Self {
            active_page,
            contact_type,
        }
    }

    /// Replace the active page.
    pub fn select_page(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Replace the contact form mode.
    pub fn select_contact_type(&mut self, contact_type: ContactType) {
        self.contact_type = contact_type;
    }
}
