// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: the biographical data rendered by the page.
//!
//! The default content is embedded from `assets/content/portfolio.toml`. A
//! user-provided file with the same layout replaces it entirely; gallery
//! sources in that file resolve relative to the file's directory.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const EMBEDDED_FILE: &str = "portfolio.toml";
const EMBEDDED_GALLERY_DIR: &str = "gallery/";

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

/// Everything shown on the page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub expertise: Vec<ExpertiseCard>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Degree>,
    #[serde(default)]
    pub awards: Vec<Award>,
    /// Technology chips, one inner list per row.
    #[serde(default)]
    pub technologies: Vec<Vec<String>>,
    #[serde(default)]
    pub gallery: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    /// Navbar logo text; the name is used when absent.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_accent: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    pub role: String,
    #[serde(default)]
    pub role_accent: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// A cell of the statistics bar.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Stat {
    /// Fixed text such as "SQL".
    Text {
        value: String,
        label: String,
        #[serde(default)]
        highlight: bool,
    },
    /// Animated number that counts up once it scrolls into view.
    Counter(CounterStat),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CounterStat {
    pub target: u64,
    /// Overrides `[counter].duration_ms` from the settings.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    pub label: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Purple,
    Amber,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExpertiseCard {
    pub title: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    /// The ongoing position is drawn with the accent color.
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Degree {
    pub title: String,
    pub years: String,
    pub institution: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Award {
    pub title: String,
    pub issuer: String,
}

/// A picture of the gallery carousel.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    /// Local path or URI of the picture.
    pub source: String,
    pub alt_text: String,
}

impl MediaItem {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Resolves the source to a file on disk.
    ///
    /// Remote URIs yield `None`: pictures are never fetched over the network.
    /// Relative paths are joined onto `base_dir` when one is given.
    pub fn local_path(&self, base_dir: Option<&Path>) -> Option<PathBuf> {
        let source = self.source.trim();
        if source.is_empty() || source.starts_with("http://") || source.starts_with("https://") {
            return None;
        }

        let path = PathBuf::from(source.strip_prefix("file://").unwrap_or(source));
        match base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path),
        }
    }
}

impl Portfolio {
    /// Parses portfolio content from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(text).map_err(|err| Error::Content(err.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Reads and parses a portfolio file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parses the content bundled with the application.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_FILE)
            .ok_or_else(|| Error::Content(format!("{EMBEDDED_FILE} is not embedded")))?;
        Self::from_toml(&String::from_utf8_lossy(file.data.as_ref()))
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Content("profile.name must not be empty".to_string()));
        }
        if let Some(position) = self
            .gallery
            .iter()
            .position(|item| item.source.trim().is_empty())
        {
            return Err(Error::Content(format!(
                "gallery item {position} has an empty source"
            )));
        }
        Ok(())
    }

    /// Text shown in the navbar logo.
    pub fn logo(&self) -> &str {
        self.profile
            .logo
            .as_deref()
            .unwrap_or(self.profile.name.as_str())
    }
}

/// Bytes of a picture bundled with the embedded content, looked up by its
/// gallery source.
#[must_use]
pub fn embedded_picture(source: &str) -> Option<Vec<u8>> {
    let source = source.trim();
    if !source.starts_with(EMBEDDED_GALLERY_DIR) {
        return None;
    }
    Asset::get(source).map(|file| file.data.into_owned())
}

/// Portfolio content together with the directory its relative paths refer to.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub portfolio: Portfolio,
    /// Directory of the content file; `None` for the embedded content.
    pub base_dir: Option<PathBuf>,
}

/// Loads the portfolio from `path`, or the embedded content when `path` is `None`.
///
/// Returns the content and an optional i18n warning key. A file that cannot
/// be read or parsed falls back to the embedded content.
pub fn load(path: Option<&Path>) -> (LoadedContent, Option<String>) {
    if let Some(path) = path {
        match Portfolio::from_path(path) {
            Ok(portfolio) => {
                log::info!("Loaded portfolio content from {}", path.display());
                let base_dir = path.parent().map(Path::to_path_buf);
                return (
                    LoadedContent {
                        portfolio,
                        base_dir,
                    },
                    None,
                );
            }
            Err(err) => {
                log::warn!("Falling back to embedded content: {err}");
                return (
                    embedded_or_default(),
                    Some("notification-content-load-error".to_string()),
                );
            }
        }
    }

    (embedded_or_default(), None)
}

fn embedded_or_default() -> LoadedContent {
    let portfolio = Portfolio::embedded().unwrap_or_else(|err| {
        log::error!("Embedded portfolio content is invalid: {err}");
        Portfolio::default()
    });
    LoadedContent {
        portfolio,
        base_dir: None,
    }
}
