use std::fmt;

use serde::{Deserialize, Serialize};

/// The static data store: everything in `data/data.json`, read once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub timeline: Vec<TimelineEvent>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub university: String,
    pub degree: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: Year,
    pub event: String,
}

/// Timeline years appear both as `2021` and as `"2021 - 2022"` in data files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{n}"),
            Year::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    /// The code link, if one is set and non-empty.
    pub fn code_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty())
    }
}

/// `level` is a proficiency fraction, expected in `[0, 1]` but never clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}

/// Any key left out of the data file falls back to its built-in link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_facebook")]
    pub facebook: String,
}

fn default_linkedin() -> String {
    "https://linkedin.com/in/Elvis".to_string()
}

fn default_github() -> String {
    "https://github.com/Elvis940".to_string()
}

fn default_email() -> String {
    "mailto:harmonelvis78@gmail.com".to_string()
}

fn default_facebook() -> String {
    "https://www.facebook.com/profile.php?id=100089809514352".to_string()
}

impl Default for SocialLinks {
    fn default() -> Self {
        SocialLinks {
            linkedin: default_linkedin(),
            github: default_github(),
            email: default_email(),
            facebook: default_facebook(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    LinkedIn,
    GitHub,
    Email,
    Facebook,
}

impl SocialPlatform {
    /// Display order of the "Connect with Me" row.
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::GitHub,
        SocialPlatform::Email,
        SocialPlatform::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "Linkedin",
            SocialPlatform::GitHub => "Github",
            SocialPlatform::Email => "Email",
            SocialPlatform::Facebook => "Facebook",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "👔",
            SocialPlatform::GitHub => "🐙",
            SocialPlatform::Email => "📧",
            SocialPlatform::Facebook => "📘",
        }
    }
}

impl SocialLinks {
    pub fn url(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::GitHub => &self.github,
            SocialPlatform::Email => &self.email,
            SocialPlatform::Facebook => &self.facebook,
        }
    }
}
