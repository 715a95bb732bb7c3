use crate::error::{QuireError, Result};
use crate::layout::presets::{self, Platform};
use crate::layout::{Margins, words_per_page};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which names appear in the running heads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    #[default]
    AuthorTitle,
    TitleOnly,
    AuthorOnly,
    None,
}

/// Book-level settings read from a YAML file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub imprint: String,
    pub isbn: String,

    pub trim: String,
    pub paper: String,

    pub font_family: String,
    pub font_size_pt: f64,
    pub line_height: f64,

    pub outer_margin_in: f64,
    pub top_margin_in: f64,
    pub bottom_margin_in: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_in: Option<f64>,

    pub chapter_starts_right: bool,
    pub hyphenate: bool,
    pub header_style: HeaderStyle,

    pub include_toc: bool,
    pub toc_depth: u8,

    pub include_dedication: bool,
    pub dedication_text: String,
    pub include_copyright: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<u16>,
    pub copyright_holder: String,
    pub include_ack: bool,
    pub ack_text: String,
    pub include_about_author: bool,
    pub about_author_text: String,

    pub scene_break: String,
    pub target_platform: Platform,
    pub bleed: bool,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_per_page: Option<u32>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            subtitle: String::new(),
            author: String::new(),
            imprint: String::new(),
            isbn: String::new(),
            trim: presets::DEFAULT_TRIM.to_string(),
            paper: presets::DEFAULT_PAPER.to_string(),
            font_family: "EB Garamond".to_string(),
            font_size_pt: 11.0,
            line_height: 1.35,
            outer_margin_in: 0.75,
            top_margin_in: 0.75,
            bottom_margin_in: 0.85,
            gutter_in: None,
            chapter_starts_right: true,
            hyphenate: true,
            header_style: HeaderStyle::default(),
            include_toc: true,
            toc_depth: 2,
            include_dedication: false,
            dedication_text: String::new(),
            include_copyright: true,
            copyright_year: None,
            copyright_holder: String::new(),
            include_ack: false,
            ack_text: String::new(),
            include_about_author: false,
            about_author_text: String::new(),
            scene_break: "\u{2042}".to_string(),
            target_platform: Platform::default(),
            bleed: false,
            language: "en".to_string(),
            words_per_page: None,
        }
    }
}

impl BookConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), trim = %config.trim, "loaded book config");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if presets::trim_preset(&self.trim).is_none() {
            return Err(QuireError::UnknownTrim {
                key: self.trim.clone(),
                known: presets::trim_keys(),
            });
        }
        if !(1..=6).contains(&self.toc_depth) {
            return Err(QuireError::Config(format!(
                "toc_depth must be between 1 and 6, got {}",
                self.toc_depth
            )));
        }
        if !(self.font_size_pt.is_finite() && self.font_size_pt > 0.0) {
            return Err(QuireError::Config(format!(
                "font_size_pt must be positive, got {}",
                self.font_size_pt
            )));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(QuireError::Config(format!(
                "line_height must be positive, got {}",
                self.line_height
            )));
        }
        if self.words_per_page == Some(0) {
            return Err(QuireError::Config(
                "words_per_page must be at least 1".to_string(),
            ));
        }

        if let Some(stock) = presets::paper_stock(&self.paper)
            && !stock.supports(self.target_platform)
        {
            tracing::warn!(
                paper = stock.key,
                platform = %self.target_platform,
                "paper stock is not offered by the target platform"
            );
        }
        Ok(())
    }

    pub fn margins(&self) -> Margins {
        Margins {
            top: self.top_margin_in,
            bottom: self.bottom_margin_in,
            outer: self.outer_margin_in,
            gutter: self.gutter_in,
        }
    }

    /// Explicit override, else the font-size heuristic.
    pub fn words_per_page(&self) -> u32 {
        self.words_per_page
            .unwrap_or_else(|| words_per_page(self.font_size_pt))
    }
}
