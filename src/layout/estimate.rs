use regex::Regex;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Words per page at body sizes up to [`SMALL_FONT_MAX_PT`].
pub const WORDS_PER_PAGE_SMALL_FONT: u32 = 350;
/// Words per page at larger body sizes.
pub const WORDS_PER_PAGE_LARGE_FONT: u32 = 300;
pub const SMALL_FONT_MAX_PT: f64 = 11.0;

/// Two-bucket words-per-page heuristic from the body font size.
pub fn words_per_page(font_size_pt: f64) -> u32 {
    if font_size_pt <= SMALL_FONT_MAX_PT {
        WORDS_PER_PAGE_SMALL_FONT
    } else {
        WORDS_PER_PAGE_LARGE_FONT
    }
}

pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Estimate the printed page count of `text`. Never less than 1.
pub fn estimate_pages(text: &str, words_per_page: u32) -> u32 {
    let rate = f64::from(words_per_page.max(1));
    let pages = (count_words(text) as f64 / rate).round();
    (pages as u32).max(1)
}
