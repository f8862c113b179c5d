//! Static site content.
//!
//! Everything shown on the two pages that is not layout lives here. The
//! content is embedded at compile time from `assets/content/site.toml` and
//! is immutable for the lifetime of the page.

use serde::Deserialize;

use crate::config::{SITE_CONTENT, thumbnail};
use crate::core::error::ContentError;

/// Section title with a gold accent segment: `{lead} {accent}{trail}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Heading {
    pub lead: String,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub trail: String,
}

/// Icons referenced from content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconName {
    Youtube,
    Coffee,
    Brain,
    Rocket,
    Heart,
    Instagram,
    Twitter,
    Linkedin,
}

/// A button or link. Without `href` it renders as a button with no bound
/// behavior beyond logging.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Action {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub icon: Option<IconName>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: IconName,
    pub href: String,
}

/// A published video.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub views: String,
    pub duration: String,
}

impl VideoEntry {
    /// Thumbnail URL, built by plain concatenation of the id into the
    /// thumbnail template (no escaping).
    pub fn thumbnail_url(&self) -> String {
        let mut url =
            String::with_capacity(thumbnail::PREFIX.len() + self.id.len() + thumbnail::SUFFIX.len());
        url.push_str(thumbnail::PREFIX);
        url.push_str(&self.id);
        url.push_str(thumbnail::SUFFIX);
        url
    }

    /// `"{views} views • {duration}"`
    pub fn caption(&self) -> String {
        format!("{} views • {}", self.views, self.duration)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureEntry {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SponsorEntry {
    pub name: String,
    pub image: String,
}

/// Label/value pair; the value is a literal such as `"100M+"`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Fact {
    pub icon: IconName,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroContent {
    pub heading: Heading,
    pub subtitle: String,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileContent {
    pub heading: Heading,
    pub name: String,
    pub image: String,
    pub image_alt: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CallToActionContent {
    pub heading: Heading,
    pub paragraphs: Vec<String>,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MissionContent {
    pub heading: Heading,
    pub paragraphs: Vec<String>,
    pub facts_title: String,
    pub facts: Vec<Fact>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutHeroContent {
    pub heading: Heading,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomeContent {
    pub hero: HeroContent,
    pub stats: Vec<StatEntry>,
    pub videos_heading: Heading,
    pub videos: Vec<VideoEntry>,
    pub profile: ProfileContent,
    pub sponsors_heading: Heading,
    pub sponsors: Vec<SponsorEntry>,
    pub features_heading: Heading,
    pub features: Vec<FeatureEntry>,
    pub call_to_action: CallToActionContent,
    pub contact_heading: Heading,
    pub contact_submit: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
    pub hero: AboutHeroContent,
    pub mission: MissionContent,
    pub profile: ProfileContent,
    pub sauce_heading: Heading,
    pub sauce: Vec<FeatureEntry>,
    pub closing: CallToActionContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterContent {
    pub legal: Vec<Link>,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

/// All static content for both pages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub home: HomeContent,
    pub about: AboutContent,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Parse and validate content from TOML source.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// The content embedded in the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.home.sponsors.is_empty() {
            return Err(ContentError::Empty("home.sponsors"));
        }
        if self.home.videos.is_empty() {
            return Err(ContentError::Empty("home.videos"));
        }
        if let Some(index) = self.home.videos.iter().position(|v| v.id.is_empty()) {
            return Err(ContentError::MissingVideoId(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            title: "The Enron Scandal Explained".to_string(),
            views: "1.8M".to_string(),
            duration: "18:45".to_string(),
        }
    }

    #[test]
    fn test_thumbnail_url_is_verbatim() {
        assert_eq!(
            video("abc123").thumbnail_url(),
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
        // No escaping of characters that a URL encoder would touch
        assert_eq!(
            video("a b&c").thumbnail_url(),
            "https://img.youtube.com/vi/a b&c/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_caption() {
        assert_eq!(video("x").caption(), "1.8M views • 18:45");
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.brand.name, "SV Worldz");
        assert_eq!(content.home.videos.len(), 5);
        assert_eq!(content.home.sponsors.len(), 5);
        assert_eq!(content.home.features.len(), 6);
        assert_eq!(content.about.sauce.len(), 3);
        assert_eq!(content.home.stats[1].value, "100M+");
        assert_eq!(content.about.mission.facts[0].icon, IconName::Youtube);
    }

    #[test]
    fn test_rejects_empty_sponsors() {
        let mut content = SiteContent::embedded().unwrap();
        content.home.sponsors.clear();
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::Empty("home.sponsors")));
    }

    #[test]
    fn test_rejects_empty_video_id() {
        let source = SITE_CONTENT.replacen("id = \"rNJWZ7SFhEM\"", "id = \"\"", 1);
        let err = SiteContent::parse(&source).unwrap_err();
        assert!(matches!(err, ContentError::MissingVideoId(0)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SiteContent::parse("[brand\nname = ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
