use super::{ContentBlock, ContentKind};
use crate::layout::estimate::count_words;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Straight or curly double-quoted span on a single line.
static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"\n]*"|\u{201C}[^\u{201D}\n]*\u{201D}"#).expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ManuscriptStats {
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub chapters: usize,
    pub sections: usize,
    pub scene_breaks: usize,
    pub avg_sentence_length: f64,
    pub avg_paragraph_length: usize,
    pub dialogue_percentage: f64,
}

/// Summary counts for a manuscript and its parsed blocks.
pub fn compute(text: &str, blocks: &[ContentBlock]) -> ManuscriptStats {
    let words = count_words(text);
    let sentences = SENTENCE_END.find_iter(text).count();

    let mut stats = ManuscriptStats {
        words,
        sentences,
        ..ManuscriptStats::default()
    };

    for block in blocks {
        match block.kind {
            ContentKind::Paragraph => stats.paragraphs += 1,
            ContentKind::ChapterHeading => stats.chapters += 1,
            ContentKind::SectionHeading(_) => stats.sections += 1,
            ContentKind::SceneBreak => stats.scene_breaks += 1,
            ContentKind::Title | ContentKind::Blank => {}
        }
    }

    if sentences > 0 {
        stats.avg_sentence_length = round1(words as f64 / sentences as f64);
    }

    let paragraph_words: usize = blocks
        .iter()
        .filter(|b| b.kind == ContentKind::Paragraph)
        .map(|b| count_words(&b.text))
        .sum();
    if stats.paragraphs > 0 {
        stats.avg_paragraph_length = paragraph_words / stats.paragraphs;
    }

    if words > 0 {
        let quoted: usize = QUOTED
            .find_iter(text)
            .map(|m| count_words(m.as_str()))
            .sum();
        stats.dialogue_percentage = round1(quoted as f64 * 100.0 / words as f64);
    }

    stats
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
