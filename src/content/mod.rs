//! Read-only profile record shown by every section of the site.
//!
//! The record ships embedded in the binary as `assets/profile.toml`. Call
//! [`Profile::load`] for the bundled copy or [`Profile::from_toml_str`] to parse a
//! different one.

mod markdown;

use std::sync::OnceLock;

use rust_embed::RustEmbed;
use serde::Deserialize;

pub use markdown::render_markdown;

pub const PROFILE_ASSET: &str = "profile.toml";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct ContentAssets;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("embedded asset `{0}` is missing")]
    MissingAsset(&'static str),
    #[error("asset `{asset}` is not valid UTF-8")]
    InvalidUtf8 {
        asset: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Profile {
    pub personal: Personal,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub training: Vec<Training>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Training {
    pub title: String,
    pub organization: String,
    pub duration: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Project {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
}

impl Project {
    /// Repository link, if it points somewhere. `#` is the placeholder for "not public".
    pub fn github_url(&self) -> Option<&str> {
        real_link(self.github.as_deref())
    }

    pub fn live_url(&self) -> Option<&str> {
        real_link(self.live.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub web: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub core: Vec<String>,
}

impl Skills {
    /// Display groups in page order. Empty groups are skipped.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Languages", self.languages.as_slice()),
            ("Web Technologies", self.web.as_slice()),
            ("Frameworks & Libraries", self.frameworks.as_slice()),
            ("Tools", self.tools.as_slice()),
            ("Core Competencies", self.core.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub score: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub value: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

impl Personal {
    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        vec![
            ContactChannel {
                kind: ChannelKind::Email,
                label: "Email",
                value: self.email.clone(),
                link: Some(format!("mailto:{}", self.email)),
            },
            ContactChannel {
                kind: ChannelKind::Phone,
                label: "Phone",
                value: self.phone.clone(),
                link: Some(format!("tel:{}", self.phone)),
            },
            ContactChannel {
                kind: ChannelKind::Location,
                label: "Location",
                value: self.location.clone(),
                link: None,
            },
        ]
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        [("LinkedIn", &self.linkedin), ("GitHub", &self.github)]
            .into_iter()
            .filter_map(|(label, url)| {
                real_link(Some(url.as_str())).map(|url| SocialLink {
                    label,
                    url: url.to_owned(),
                })
            })
            .collect()
    }
}

impl Profile {
    /// The bundled profile, parsed once per process.
    pub fn load() -> ContentResult<&'static Profile> {
        static PROFILE: OnceLock<Profile> = OnceLock::new();
        if let Some(profile) = PROFILE.get() {
            return Ok(profile);
        }
        let profile = Self::from_embedded()?;
        Ok(PROFILE.get_or_init(|| profile))
    }

    pub fn from_embedded() -> ContentResult<Self> {
        let file =
            ContentAssets::get(PROFILE_ASSET).ok_or(ContentError::MissingAsset(PROFILE_ASSET))?;
        let source = std::str::from_utf8(file.data.as_ref()).map_err(|source| {
            ContentError::InvalidUtf8 {
                asset: PROFILE_ASSET,
                source,
            }
        })?;
        Self::from_toml_str(source)
    }

    pub fn from_toml_str(source: &str) -> ContentResult<Self> {
        let profile: Profile = toml::from_str(source)?;
        tracing::debug!(
            name = %profile.personal.name,
            projects = profile.projects.len(),
            experience = profile.experience.len(),
            education = profile.education.len(),
            "profile loaded"
        );
        Ok(profile)
    }

    pub fn summary_html(&self) -> String {
        render_markdown(&self.summary)
    }

    /// Every technology named by a project, deduplicated, in first-seen order.
    pub fn project_tech(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for tech in self.projects.iter().flat_map(|project| &project.tech) {
            if !seen.contains(&tech.as_str()) {
                seen.push(tech.as_str());
            }
        }
        seen
    }
}

fn real_link(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|url| !url.is_empty() && *url != "#")
}
