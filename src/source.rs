//! Read manuscript files into plain text for the structural parser.
//!
//! Markdown and HTML are flattened to lines of prose separated by blank
//! lines, so the parser sees the same shape it would in a plain-text file.

use crate::error::{QuireError, Result};
use crate::manuscript::PLAIN_SCENE_BREAK;
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Sections the converter should never see: document metadata, scripts and styles.
static NON_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:head|script|style)\b[^>]*>.*?</(?:head|script|style)\s*>")
        .expect("valid regex")
});

/// Input formats the manuscript reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Text,
    Markdown,
    Html,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "text" => Ok(SourceFormat::Text),
            "md" | "markdown" => Ok(SourceFormat::Markdown),
            "html" | "htm" => Ok(SourceFormat::Html),
            _ => Err(QuireError::UnsupportedFormat(format!(
                "{} (expected .txt, .md or .html)",
                path.display()
            ))),
        }
    }
}

/// Read a manuscript file as plain text with `\n` line endings.
pub fn read_manuscript(path: &Path) -> Result<String> {
    let format = SourceFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path)?;
    let text = extract_text(&raw, format);
    tracing::debug!(path = %path.display(), ?format, bytes = text.len(), "read manuscript");
    Ok(text)
}

pub fn extract_text(raw: &str, format: SourceFormat) -> String {
    let raw = normalize_line_endings(raw);
    match format {
        SourceFormat::Text => raw,
        SourceFormat::Markdown => markdown_to_text(&raw),
        SourceFormat::Html => html_to_text(&raw),
    }
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::new();
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                out.push_str(PLAIN_SCENE_BREAK);
                out.push_str("\n\n");
            }
            Event::End(TagEnd::TableCell) => out.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote(_)
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => end_block(&mut out),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn end_block(out: &mut String) {
    out.truncate(out.trim_end_matches(' ').len());
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
}

/// Convert HTML to Markdown, then flatten it like any Markdown manuscript.
fn html_to_text(html: &str) -> String {
    let html = NON_CONTENT.replace_all(html, "");
    let markdown = match html_to_markdown_rs::convert(&html, None) {
        Ok(markdown) => markdown,
        Err(err) => {
            tracing::warn!(error = %err, "HTML conversion failed; reading as plain text");
            return html.into_owned();
        }
    };
    markdown_to_text(&markdown)
}
