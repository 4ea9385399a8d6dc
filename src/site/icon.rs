//! Social icons.

use serde::Serialize;

const GITHUB_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><title>GitHub</title><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path></svg>"#;

const LINKEDIN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><title>LinkedIn</title><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle></svg>"#;

const TWITTER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><title>Twitter</title><path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path></svg>"#;

/// Icon shown next to a social link.
///
/// Unknown names map to [`Icon::Fallback`], drawn with the GitHub glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Fallback,
}

impl Icon {
    /// Icons that have their own glyph.
    pub const KNOWN: [Self; 3] = [Self::Github, Self::Linkedin, Self::Twitter];

    /// Match a social link name exactly (`Github`, `Linkedin`, `Twitter`).
    ///
    /// Matching is case-sensitive: `github` falls back.
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or(Self::Fallback)
    }

    /// Social link name that selects this icon.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Linkedin => "Linkedin",
            Self::Twitter => "Twitter",
            Self::Fallback => "",
        }
    }

    pub const fn id(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Fallback => "fallback",
        }
    }

    /// Inline SVG markup.
    pub const fn svg(&self) -> &'static str {
        match self {
            Self::Github | Self::Fallback => GITHUB_SVG,
            Self::Linkedin => LINKEDIN_SVG,
            Self::Twitter => TWITTER_SVG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Icon::from_name("Github"), Icon::Github);
        assert_eq!(Icon::from_name("Linkedin"), Icon::Linkedin);
        assert_eq!(Icon::from_name("Twitter"), Icon::Twitter);
        assert_eq!(Icon::from_name("Mastodon"), Icon::Fallback);
        assert_eq!(Icon::from_name(""), Icon::Fallback);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Icon::from_name("linkedin"), Icon::Fallback);
        assert_eq!(Icon::from_name("GitHub"), Icon::Fallback);
        assert_eq!(Icon::from_name(" Twitter"), Icon::Fallback);
        assert_eq!(Icon::from_name("linkedin").svg(), Icon::Github.svg());
        for icon in Icon::KNOWN {
            assert_eq!(Icon::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn test_fallback_renders_github() {
        assert_eq!(Icon::Fallback.svg(), Icon::Github.svg());
        assert_ne!(Icon::Linkedin.svg(), Icon::Github.svg());
        assert!(Icon::Twitter.svg().contains("<title>Twitter</title>"));
    }

    #[test]
    fn test_serialize_id() {
        assert_eq!(serde_json::to_string(&Icon::Linkedin).unwrap(), "\"linkedin\"");
        assert_eq!(serde_json::to_string(&Icon::Fallback).unwrap(), "\"fallback\"");
    }
}
