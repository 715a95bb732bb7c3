//! Assemble a parsed manuscript and a book config into a render-ready document.
//!
//! The document carries front matter, body and back matter as content
//! blocks, a table of contents with stable anchors, running-head text, body
//! typography and the computed page geometry. Turning it into HTML, PDF or
//! DOCX is left to the renderer.

use crate::config::{BookConfig, HeaderStyle};
use crate::error::Result;
use crate::layout::{self, LayoutParameters};
use crate::manuscript::{self, ContentBlock, ContentKind, SectionRole};
use serde::Serialize;
use std::collections::HashMap;

const ANCHOR_MAX_CHARS: usize = 60;

const RIGHTS_NOTICE: &str = "No part of this book may be reproduced without permission, \
except for brief quotations used in reviews or scholarly works.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub title: String,
    pub level: u8,
    pub anchor: String,
}

/// Text for the left (verso) and right (recto) page headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunningHeads {
    pub verso: String,
    pub recto: String,
}

/// Body text settings for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typography {
    pub font_family: String,
    pub font_size_pt: f64,
    pub line_height: f64,
    pub hyphenate: bool,
}

impl Typography {
    fn from_config(config: &BookConfig) -> Self {
        Self {
            font_family: config.font_family.trim().to_string(),
            font_size_pt: config.font_size_pt,
            line_height: config.line_height,
            hyphenate: config.hyphenate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDocument {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub imprint: String,
    pub isbn: String,
    pub language: String,
    pub front_matter: Vec<ContentBlock>,
    pub body: Vec<ContentBlock>,
    pub back_matter: Vec<ContentBlock>,
    pub toc: Vec<TocEntry>,
    pub running_heads: RunningHeads,
    pub typography: Typography,
    pub layout: LayoutParameters,
    pub chapter_count: usize,
    pub chapter_starts_right: bool,
    pub scene_break: String,
}

pub fn assemble(config: &BookConfig, text: &str) -> Result<BookDocument> {
    config.validate()?;

    let body = manuscript::structure(text);
    let front_matter = front_matter(config);
    let back_matter = back_matter(config);

    let toc = if config.include_toc {
        table_of_contents(body.iter().chain(&back_matter), config.toc_depth)
    } else {
        Vec::new()
    };

    let pages = layout::estimate_pages(text, config.words_per_page());
    let layout = layout::compute_layout(
        &config.trim,
        &config.paper,
        &config.margins(),
        pages,
        config.bleed,
    )?;

    let chapter_count = body
        .iter()
        .filter(|b| b.kind == ContentKind::ChapterHeading)
        .count();

    tracing::debug!(
        chapters = chapter_count,
        toc_entries = toc.len(),
        pages,
        "assembled book"
    );

    Ok(BookDocument {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        author: config.author.clone(),
        imprint: config.imprint.clone(),
        isbn: config.isbn.clone(),
        language: config.language.clone(),
        front_matter,
        body,
        back_matter,
        toc,
        running_heads: running_heads(config),
        typography: Typography::from_config(config),
        layout,
        chapter_count,
        chapter_starts_right: config.chapter_starts_right,
        scene_break: config.scene_break.clone(),
    })
}

fn front_matter(config: &BookConfig) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::title(config.title.trim())];
    if !config.subtitle.trim().is_empty() {
        blocks.push(ContentBlock::title(config.subtitle.trim()));
    }

    if config.include_copyright {
        let holder = if config.copyright_holder.trim().is_empty() {
            config.author.trim()
        } else {
            config.copyright_holder.trim()
        };
        let mut line = String::from("Copyright \u{a9}");
        if let Some(year) = config.copyright_year {
            line.push_str(&format!(" {year}"));
        }
        if !holder.is_empty() {
            line.push_str(&format!(" {holder}"));
        }
        line.push_str(". All rights reserved.");
        blocks.push(ContentBlock::section(SectionRole::Front, "Copyright"));
        blocks.push(ContentBlock::paragraph(line));
        blocks.push(ContentBlock::paragraph(RIGHTS_NOTICE));
    }

    if config.include_dedication && !config.dedication_text.trim().is_empty() {
        blocks.push(ContentBlock::section(SectionRole::Front, "Dedication"));
        push_paragraphs(&mut blocks, &config.dedication_text);
    }
    blocks
}

fn back_matter(config: &BookConfig) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    if config.include_ack && !config.ack_text.trim().is_empty() {
        blocks.push(ContentBlock::section(SectionRole::Back, "Acknowledgments"));
        push_paragraphs(&mut blocks, &config.ack_text);
    }
    if config.include_about_author && !config.about_author_text.trim().is_empty() {
        blocks.push(ContentBlock::section(SectionRole::Back, "About the Author"));
        push_paragraphs(&mut blocks, &config.about_author_text);
    }
    blocks
}

/// Config text may hold several paragraphs separated by blank lines.
fn push_paragraphs(blocks: &mut Vec<ContentBlock>, text: &str) {
    blocks.extend(
        text.split("\n\n")
            .map(manuscript::parser::collapse_whitespace)
            .filter(|p| !p.is_empty())
            .map(ContentBlock::paragraph),
    );
}

fn table_of_contents<'a>(
    blocks: impl Iterator<Item = &'a ContentBlock>,
    depth: u8,
) -> Vec<TocEntry> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    blocks
        .filter(|b| b.is_heading() && b.level >= 1 && b.level <= depth)
        .map(|b| TocEntry {
            title: b.text.clone(),
            level: b.level,
            anchor: unique_anchor(&b.text, &mut seen),
        })
        .collect()
}

fn unique_anchor(title: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = anchor_for(title);
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{base}-{count}")
    }
}

/// URL-safe anchor for a heading, at most 60 characters.
pub fn anchor_for(title: &str) -> String {
    let slug = slug::slugify(title);
    let truncated: String = slug.chars().take(ANCHOR_MAX_CHARS).collect();
    let anchor = truncated.trim_end_matches('-');
    if anchor.is_empty() {
        "section".to_string()
    } else {
        anchor.to_string()
    }
}

fn running_heads(config: &BookConfig) -> RunningHeads {
    let author = config.author.trim().to_string();
    let title = config.title.trim().to_string();
    match config.header_style {
        HeaderStyle::AuthorTitle => RunningHeads {
            verso: author,
            recto: title,
        },
        HeaderStyle::TitleOnly => RunningHeads {
            verso: String::new(),
            recto: title,
        },
        HeaderStyle::AuthorOnly => RunningHeads {
            verso: author,
            recto: String::new(),
        },
        HeaderStyle::None => RunningHeads::default(),
    }
}
