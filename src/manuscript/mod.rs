pub mod classify;
pub mod normalize;
pub mod parser;
pub mod patterns;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub use classify::classify;
pub use normalize::{normalize, normalize_headings};
pub use parser::{ParseOptions, parse, parse_with};

/// Which end of the book a section heading belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    Front,
    Back,
}

/// Semantic type of a manuscript line or block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Title,
    ChapterHeading,
    SectionHeading(SectionRole),
    Paragraph,
    SceneBreak,
    Blank,
}

impl ContentKind {
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            ContentKind::Title | ContentKind::ChapterHeading | ContentKind::SectionHeading(_)
        )
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Title => write!(f, "title"),
            ContentKind::ChapterHeading => write!(f, "chapter"),
            ContentKind::SectionHeading(SectionRole::Front) => write!(f, "front-matter"),
            ContentKind::SectionHeading(SectionRole::Back) => write!(f, "back-matter"),
            ContentKind::Paragraph => write!(f, "paragraph"),
            ContentKind::SceneBreak => write!(f, "scene-break"),
            ContentKind::Blank => write!(f, "blank"),
        }
    }
}

/// One classified unit of manuscript structure.
///
/// `level` is 1 for chapter/part headings, 2 for front/back-matter
/// section headings and 0 for everything else. Paragraph blocks always
/// carry non-empty, whitespace-collapsed text; scene breaks carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub kind: ContentKind,
    pub text: String,
    pub level: u8,
}

impl ContentBlock {
    pub fn new(kind: ContentKind, text: impl Into<String>, level: u8) -> Self {
        Self {
            kind,
            text: text.into(),
            level,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ContentKind::Title, text, 0)
    }

    pub fn chapter(text: impl Into<String>) -> Self {
        Self::new(ContentKind::ChapterHeading, text, 1)
    }

    pub fn section(role: SectionRole, text: impl Into<String>) -> Self {
        Self::new(ContentKind::SectionHeading(role), text, 2)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(ContentKind::Paragraph, text, 0)
    }

    pub fn scene_break() -> Self {
        Self::new(ContentKind::SceneBreak, String::new(), 0)
    }

    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }
}

/// Ornament written for scene breaks by [`render_plain`].
pub const PLAIN_SCENE_BREAK: &str = "* * *";

/// Render blocks back to plain manuscript text, one block per paragraph.
///
/// Scene breaks become [`PLAIN_SCENE_BREAK`] and blank blocks are skipped,
/// so the output parses back into the same sequence of block kinds.
pub fn render_plain(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block.kind {
            ContentKind::Blank => None,
            ContentKind::SceneBreak => Some(Cow::Borrowed(PLAIN_SCENE_BREAK)),
            ContentKind::Paragraph => Some(plain_paragraph(&block.text)),
            _ => Some(Cow::Borrowed(block.text.as_str())),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Paragraph text, wrapped onto several lines when the single joined line
/// would read as a heading or an ornament. The parser joins the lines back
/// into the same text.
fn plain_paragraph(text: &str) -> Cow<'_, str> {
    let is_prose = |line: &str| classify(line).0 == ContentKind::Paragraph;
    if is_prose(text) {
        return Cow::Borrowed(text);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    for split in 1..words.len() {
        let head = words[..split].join(" ");
        let tail = words[split..].join(" ");
        if is_prose(&head) && is_prose(&tail) {
            return Cow::Owned(format!("{head}\n{tail}"));
        }
    }
    if words.iter().all(|w| is_prose(w)) {
        return Cow::Owned(words.join("\n"));
    }
    Cow::Borrowed(text)
}

/// Parse a manuscript and clean up redundant chapter labels.
///
/// This is the full text pipeline: structural parse followed by heading
/// normalization of every chapter heading.
pub fn structure(text: &str) -> Vec<ContentBlock> {
    structure_with(text, &ParseOptions::default())
}

pub fn structure_with(text: &str, options: &ParseOptions) -> Vec<ContentBlock> {
    let mut blocks = parse_with(text, options);
    normalize_headings(&mut blocks);
    blocks
}
