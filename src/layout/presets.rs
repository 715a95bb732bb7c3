use serde::{Deserialize, Serialize};
use std::fmt;

/// Named finished page size, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrimPreset {
    pub key: &'static str,
    pub width_in: f64,
    pub height_in: f64,
    pub target_use: &'static str,
}

/// Named paper stock. `pages_per_inch` drives spine width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperStock {
    pub key: &'static str,
    pub pages_per_inch: f64,
    pub kdp: bool,
    pub ingram: bool,
}

/// Print-on-demand platform a book is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Kdp,
    Ingram,
    Generic,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Kdp => write!(f, "kdp"),
            Platform::Ingram => write!(f, "ingram"),
            Platform::Generic => write!(f, "generic"),
        }
    }
}

pub const TRIM_PRESETS: &[TrimPreset] = &[
    TrimPreset {
        key: "5x8",
        width_in: 5.0,
        height_in: 8.0,
        target_use: "trade",
    },
    TrimPreset {
        key: "5.5x8.5",
        width_in: 5.5,
        height_in: 8.5,
        target_use: "trade",
    },
    TrimPreset {
        key: "6x9",
        width_in: 6.0,
        height_in: 9.0,
        target_use: "trade",
    },
    TrimPreset {
        key: "8.5x11",
        width_in: 8.5,
        height_in: 11.0,
        target_use: "workbook",
    },
];

pub const PAPER_STOCKS: &[PaperStock] = &[
    PaperStock {
        key: "cream_55lb",
        pages_per_inch: 444.0,
        kdp: true,
        ingram: true,
    },
    PaperStock {
        key: "white_50lb",
        pages_per_inch: 512.0,
        kdp: true,
        ingram: true,
    },
];

pub const DEFAULT_TRIM: &str = "6x9";
pub const DEFAULT_PAPER: &str = "cream_55lb";

pub fn trim_preset(key: &str) -> Option<&'static TrimPreset> {
    TRIM_PRESETS.iter().find(|t| t.key == key)
}

pub fn paper_stock(key: &str) -> Option<&'static PaperStock> {
    PAPER_STOCKS.iter().find(|p| p.key == key)
}

pub fn default_paper_stock() -> &'static PaperStock {
    &PAPER_STOCKS[0]
}

/// Look up a paper stock, substituting the default for unknown keys.
pub fn paper_stock_or_default(key: &str) -> &'static PaperStock {
    paper_stock(key).unwrap_or_else(|| {
        let fallback = default_paper_stock();
        tracing::warn!(
            requested = key,
            using = fallback.key,
            "unknown paper stock, using default"
        );
        fallback
    })
}

/// Comma-separated trim keys, for error messages and help text.
pub fn trim_keys() -> String {
    TRIM_PRESETS
        .iter()
        .map(|t| t.key)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn paper_keys() -> String {
    PAPER_STOCKS
        .iter()
        .map(|p| p.key)
        .collect::<Vec<_>>()
        .join(", ")
}

impl PaperStock {
    pub fn supports(&self, platform: Platform) -> bool {
        match platform {
            Platform::Kdp => self.kdp,
            Platform::Ingram => self.ingram,
            Platform::Generic => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_exist() {
        assert!(trim_preset(DEFAULT_TRIM).is_some());
        assert_eq!(default_paper_stock().key, DEFAULT_PAPER);
    }

    #[test]
    fn lookup_trim() {
        let trim = trim_preset("8.5x11").unwrap();
        assert_eq!(trim.width_in, 8.5);
        assert_eq!(trim.target_use, "workbook");
        assert!(trim_preset("7x10").is_none());
    }

    #[test]
    fn unknown_paper_falls_back() {
        assert_eq!(paper_stock_or_default("vellum").key, "cream_55lb");
        assert_eq!(paper_stock_or_default("white_50lb").pages_per_inch, 512.0);
    }

    #[test]
    fn key_lists() {
        assert_eq!(trim_keys(), "5x8, 5.5x8.5, 6x9, 8.5x11");
        assert_eq!(paper_keys(), "cream_55lb, white_50lb");
    }

    #[test]
    fn platform_support() {
        let stock = paper_stock("cream_55lb").unwrap();
        assert!(stock.supports(Platform::Kdp));
        assert!(stock.supports(Platform::Generic));
        assert_eq!(Platform::Ingram.to_string(), "ingram");
    }
}
