//! Print layout arithmetic: page geometry, gutter, spine and wrap cover.
//!
//! Every length is in inches. [`LayoutParameters::in_millimeters`] converts
//! for renderers that work in metric units; all presented values are
//! rounded to three decimals so identical inputs always produce identical
//! numbers.

pub mod estimate;
pub mod presets;

use crate::error::{QuireError, Result};
use presets::{PaperStock, TrimPreset};
use serde::{Deserialize, Serialize};

pub use estimate::{count_words, estimate_pages, words_per_page};

pub const MM_PER_INCH: f64 = 25.4;

/// Bleed added on every outer edge of the cover when bleed is enabled.
pub const BLEED_IN: f64 = 0.125;

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn inch_to_mm(inches: f64) -> f64 {
    round3(inches * MM_PER_INCH)
}

/// Gutter width for perfect-bound books, by page-count bracket.
pub fn suggested_gutter(page_count: u32) -> f64 {
    if page_count < 150 {
        0.6
    } else if page_count < 300 {
        0.7
    } else if page_count < 500 {
        0.8
    } else {
        0.9
    }
}

pub fn spine_width(page_count: u32, paper: &PaperStock) -> f64 {
    round3(f64::from(page_count) / paper.pages_per_inch)
}

/// Page margins in inches. `gutter: None` means use [`suggested_gutter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub outer: f64,
    pub gutter: Option<f64>,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 0.75,
            bottom: 0.85,
            outer: 0.75,
            gutter: None,
        }
    }
}

impl Margins {
    fn validate(&self) -> Result<()> {
        let named = [
            ("top", Some(self.top)),
            ("bottom", Some(self.bottom)),
            ("outer", Some(self.outer)),
            ("gutter", self.gutter),
        ];
        for (name, value) in named {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(QuireError::InvalidMargin(format!(
                    "{name} margin must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Full wrap-cover size: back panel, spine and front panel side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverDimensions {
    pub width: f64,
    pub height: f64,
    pub spine_width: f64,
    pub bleed: f64,
}

/// Compute the wrap-cover size for a trim, page count and paper stock.
///
/// Both panels share the trim size. Unknown paper keys fall back to the
/// default stock; unknown trim keys are an error.
pub fn cover_dimensions(
    trim_key: &str,
    paper_key: &str,
    page_count: u32,
    bleed: bool,
) -> Result<CoverDimensions> {
    let trim = lookup_trim(trim_key)?;
    let paper = presets::paper_stock_or_default(paper_key);
    Ok(cover_for(trim, paper, page_count, bleed))
}

fn cover_for(trim: &TrimPreset, paper: &PaperStock, page_count: u32, bleed: bool) -> CoverDimensions {
    let bleed = if bleed { BLEED_IN } else { 0.0 };
    let spine = spine_width(page_count, paper);
    CoverDimensions {
        width: round3(2.0 * trim.width_in + spine + 2.0 * bleed),
        height: round3(trim.height_in + 2.0 * bleed),
        spine_width: spine,
        bleed,
    }
}

fn lookup_trim(key: &str) -> Result<&'static TrimPreset> {
    presets::trim_preset(key).ok_or_else(|| QuireError::UnknownTrim {
        key: key.to_string(),
        known: presets::trim_keys(),
    })
}

/// Derived page and cover geometry for one book, in inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutParameters {
    pub trim: &'static str,
    pub paper: &'static str,
    pub page_count: u32,
    pub bleed: bool,
    pub page_width: f64,
    pub page_height: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
    pub outer_margin: f64,
    pub gutter_margin: f64,
    pub spine_width: f64,
    pub full_cover_width: f64,
    pub full_cover_height: f64,
}

/// The same geometry as [`LayoutParameters`], in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MillimeterLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub top_margin_mm: f64,
    pub bottom_margin_mm: f64,
    pub outer_margin_mm: f64,
    pub gutter_mm: f64,
    pub spine_width_mm: f64,
    pub full_cover_width_mm: f64,
    pub full_cover_height_mm: f64,
}

impl LayoutParameters {
    pub fn in_millimeters(&self) -> MillimeterLayout {
        MillimeterLayout {
            page_width_mm: inch_to_mm(self.page_width),
            page_height_mm: inch_to_mm(self.page_height),
            top_margin_mm: inch_to_mm(self.top_margin),
            bottom_margin_mm: inch_to_mm(self.bottom_margin),
            outer_margin_mm: inch_to_mm(self.outer_margin),
            gutter_mm: inch_to_mm(self.gutter_margin),
            spine_width_mm: inch_to_mm(self.spine_width),
            full_cover_width_mm: inch_to_mm(self.full_cover_width),
            full_cover_height_mm: inch_to_mm(self.full_cover_height),
        }
    }

    /// Width left for text between the outer margin and the gutter.
    pub fn text_block_width(&self) -> f64 {
        round3(self.page_width - self.outer_margin - self.gutter_margin)
    }

    pub fn text_block_height(&self) -> f64 {
        round3(self.page_height - self.top_margin - self.bottom_margin)
    }
}

/// Compute page and cover geometry.
///
/// Fails with [`QuireError::UnknownTrim`] for an unknown trim key and
/// [`QuireError::InvalidMargin`] when margins are negative or leave no
/// room for text. An unknown paper key is replaced by the default stock.
pub fn compute_layout(
    trim_key: &str,
    paper_key: &str,
    margins: &Margins,
    page_count: u32,
    bleed: bool,
) -> Result<LayoutParameters> {
    let trim = lookup_trim(trim_key)?;
    let paper = presets::paper_stock_or_default(paper_key);
    margins.validate()?;

    let gutter = margins
        .gutter
        .unwrap_or_else(|| suggested_gutter(page_count));

    if margins.outer + gutter >= trim.width_in {
        return Err(QuireError::InvalidMargin(format!(
            "outer ({}) and gutter ({gutter}) margins exceed the {}in page width",
            margins.outer, trim.width_in
        )));
    }
    if margins.top + margins.bottom >= trim.height_in {
        return Err(QuireError::InvalidMargin(format!(
            "top ({}) and bottom ({}) margins exceed the {}in page height",
            margins.top, margins.bottom, trim.height_in
        )));
    }

    let cover = cover_for(trim, paper, page_count, bleed);

    Ok(LayoutParameters {
        trim: trim.key,
        paper: paper.key,
        page_count,
        bleed,
        page_width: trim.width_in,
        page_height: trim.height_in,
        top_margin: round3(margins.top),
        bottom_margin: round3(margins.bottom),
        outer_margin: round3(margins.outer),
        gutter_margin: round3(gutter),
        spine_width: cover.spine_width,
        full_cover_width: cover.width,
        full_cover_height: cover.height,
    })
}
