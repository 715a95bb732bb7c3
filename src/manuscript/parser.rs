use super::classify::classify;
use super::patterns::HEADING_MAX_CHARS;
use super::{ContentBlock, ContentKind};

/// Consecutive blank lines that mark a scene gap rather than a paragraph break.
pub const SCENE_GAP_BLANKS: usize = 3;

/// Subtitle lines merged into a chapter heading must be at most this long.
pub const SUBTITLE_MAX_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Merge a short line directly below a chapter heading into it as a subtitle.
    pub merge_subtitles: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            merge_subtitles: true,
        }
    }
}

/// Parse manuscript text into an ordered sequence of content blocks.
pub fn parse(text: &str) -> Vec<ContentBlock> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Vec<ContentBlock> {
    let mut acc = Accumulator::new(*options);
    for line in text.lines() {
        acc.push_line(line);
    }
    let blocks = acc.finish();

    tracing::debug!(
        blocks = blocks.len(),
        chapters = blocks
            .iter()
            .filter(|b| b.kind == ContentKind::ChapterHeading)
            .count(),
        "parsed manuscript"
    );
    blocks
}

/// Cross-line state for a single parse call.
struct Accumulator {
    options: ParseOptions,
    blocks: Vec<ContentBlock>,
    paragraph: Vec<String>,
    blank_run: usize,
    /// The last block is a break emitted for a blank-line gap.
    gap_break: bool,
    /// Index of a chapter heading that may still absorb a subtitle line.
    open_heading: Option<usize>,
}

impl Accumulator {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            blocks: Vec::new(),
            paragraph: Vec::new(),
            blank_run: 0,
            gap_break: false,
            open_heading: None,
        }
    }

    fn push_line(&mut self, line: &str) {
        let (kind, level) = classify(line);
        let trimmed = line.trim();

        match kind {
            ContentKind::Blank => {
                self.blank_run += 1;
                self.open_heading = None;
                self.flush_paragraph();
                if self.blank_run == SCENE_GAP_BLANKS
                    && self
                        .blocks
                        .last()
                        .is_some_and(|b| b.kind == ContentKind::Paragraph)
                {
                    self.blocks.push(ContentBlock::scene_break());
                    self.gap_break = true;
                }
            }
            ContentKind::Paragraph => {
                self.blank_run = 0;
                if let Some(index) = self.open_heading.take()
                    && is_subtitle(trimmed)
                    && self.merge_subtitle(index, trimmed)
                {
                    return;
                }
                self.gap_break = false;
                self.paragraph.push(trimmed.to_string());
            }
            ContentKind::SceneBreak => {
                self.flush_paragraph();
                // An ornament right after a blank-line gap marks the same break.
                if !self.gap_break {
                    self.blocks.push(ContentBlock::scene_break());
                }
                self.reset_run();
            }
            ContentKind::Title | ContentKind::ChapterHeading | ContentKind::SectionHeading(_) => {
                self.flush_paragraph();
                self.reset_run();
                let text = collapse_whitespace(trimmed);
                if kind == ContentKind::ChapterHeading
                    && self.options.merge_subtitles
                    && !has_title(&text)
                {
                    self.open_heading = Some(self.blocks.len());
                }
                self.blocks.push(ContentBlock::new(kind, text, level));
            }
        }
    }

    fn reset_run(&mut self) {
        self.blank_run = 0;
        self.gap_break = false;
        self.open_heading = None;
    }

    /// Append `subtitle` to the heading at `index`. Returns false when the
    /// merged heading would no longer classify as a heading.
    fn merge_subtitle(&mut self, index: usize, subtitle: &str) -> bool {
        let Some(heading) = self.blocks.get_mut(index) else {
            return false;
        };
        let subtitle = collapse_whitespace(subtitle);
        let merged = if heading.text.ends_with(':') {
            format!("{} {subtitle}", heading.text)
        } else {
            format!("{}: {subtitle}", heading.text)
        };
        if merged.chars().count() > HEADING_MAX_CHARS {
            return false;
        }
        heading.text = merged;
        true
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = collapse_whitespace(&self.paragraph.join(" "));
        self.paragraph.clear();
        if !text.is_empty() {
            self.blocks.push(ContentBlock::paragraph(text));
        }
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        self.flush_paragraph();
        self.blocks
    }
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Short line without sentence-ending punctuation.
fn is_subtitle(line: &str) -> bool {
    let core = line.trim_end_matches(['"', '\'', '\u{201D}', '\u{2019}', ')', ']']);
    line.chars().count() <= SUBTITLE_MAX_CHARS
        && !core.ends_with(['.', '!', '?', '\u{2026}', ',', ';'])
}

/// A heading already carries a title after its label.
fn has_title(heading: &str) -> bool {
    heading
        .split_once([':', '\u{2013}', '\u{2014}'])
        .is_some_and(|(_, rest)| !rest.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manuscript::SectionRole;

    fn kinds(blocks: &[ContentBlock]) -> Vec<ContentKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn three_blank_lines_make_a_scene_break() {
        let blocks = parse("CHAPTER ONE\n\nIt was a dark night.\n\n\n\nShe never returned.");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("CHAPTER ONE"),
                ContentBlock::paragraph("It was a dark night."),
                ContentBlock::scene_break(),
                ContentBlock::paragraph("She never returned."),
            ]
        );
    }

    #[test]
    fn two_blank_lines_are_just_a_paragraph_break() {
        let blocks = parse("First.\n\n\nSecond.");
        assert_eq!(
            kinds(&blocks),
            vec![ContentKind::Paragraph, ContentKind::Paragraph]
        );
    }

    #[test]
    fn long_blank_run_emits_one_break() {
        let blocks = parse("First.\n\n\n\n\n\n\n\nSecond.");
        assert_eq!(
            kinds(&blocks),
            vec![
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::Paragraph
            ]
        );
    }

    #[test]
    fn trailing_blank_run_emits_a_break() {
        let blocks = parse("Only paragraph.\n\n\n\n\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Only paragraph."),
                ContentBlock::scene_break()
            ]
        );
        assert_eq!(
            kinds(&parse("Text.\n\n\n\n")),
            vec![ContentKind::Paragraph, ContentKind::SceneBreak]
        );
    }

    #[test]
    fn blank_gap_before_heading_is_a_scene_break() {
        let blocks = parse("End of part.\n\n\n\nCHAPTER 2\n\nNext.");
        assert_eq!(
            kinds(&blocks),
            vec![
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::ChapterHeading,
                ContentKind::Paragraph
            ]
        );
        assert_eq!(
            kinds(&parse("Text.\n\n\n\nCHAPTER TWO")),
            vec![
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::ChapterHeading
            ]
        );
    }

    #[test]
    fn blank_gap_after_heading_adds_nothing() {
        let blocks = parse("CHAPTER ONE\n\n\n\nIt began.");
        assert_eq!(
            kinds(&blocks),
            vec![ContentKind::ChapterHeading, ContentKind::Paragraph]
        );
    }

    #[test]
    fn ornament_after_gap_and_prose_is_a_new_break() {
        let blocks = parse("A.\n\n\n\nB.\n\n* * *\n\nC.");
        assert_eq!(
            kinds(&blocks),
            vec![
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::Paragraph
            ]
        );
    }

    #[test]
    fn blank_gap_then_literal_break_emits_one_break() {
        let blocks = parse("Before.\n\n\n\n* * *\n\nAfter.");
        assert_eq!(
            kinds(&blocks),
            vec![
                ContentKind::Paragraph,
                ContentKind::SceneBreak,
                ContentKind::Paragraph
            ]
        );
    }

    #[test]
    fn wrapped_lines_join_into_one_paragraph() {
        let blocks = parse("The rain   fell\n  on the roof\nall night.");
        assert_eq!(
            blocks,
            vec![ContentBlock::paragraph("The rain fell on the roof all night.")]
        );
    }

    #[test]
    fn headings_flush_pending_prose() {
        let blocks = parse("Some prose\nDEDICATION\nFor Ada.");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Some prose"),
                ContentBlock::section(SectionRole::Front, "DEDICATION"),
                ContentBlock::paragraph("For Ada."),
            ]
        );
    }

    #[test]
    fn literal_scene_break_has_empty_text() {
        let blocks = parse("One.\n***\nTwo.");
        assert_eq!(blocks[1], ContentBlock::scene_break());
    }

    #[test]
    fn subtitle_merges_into_chapter_heading() {
        let blocks = parse("CHAPTER ONE\nThe Beginning\n\nIt started here.");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("CHAPTER ONE: The Beginning"),
                ContentBlock::paragraph("It started here."),
            ]
        );
    }

    #[test]
    fn subtitle_after_trailing_colon() {
        let blocks = parse("PART II:\nThe Return");
        assert_eq!(blocks, vec![ContentBlock::chapter("PART II: The Return")]);
    }

    #[test]
    fn sentence_below_heading_is_not_a_subtitle() {
        let blocks = parse("CHAPTER ONE\nIt was cold.");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("CHAPTER ONE"),
                ContentBlock::paragraph("It was cold."),
            ]
        );
    }

    #[test]
    fn titled_heading_does_not_absorb_subtitle() {
        let blocks = parse("CHAPTER ONE: Dawn\nMorning came");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("CHAPTER ONE: Dawn"),
                ContentBlock::paragraph("Morning came"),
            ]
        );
    }

    #[test]
    fn only_one_subtitle_line_is_merged() {
        let blocks = parse("PROLOGUE\nThe Fall\nSnow drifted");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("PROLOGUE: The Fall"),
                ContentBlock::paragraph("Snow drifted"),
            ]
        );
    }

    #[test]
    fn subtitle_merge_can_be_disabled() {
        let options = ParseOptions {
            merge_subtitles: false,
        };
        let blocks = parse_with("CHAPTER ONE\nThe Beginning", &options);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("CHAPTER ONE"),
                ContentBlock::paragraph("The Beginning"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n\n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let blocks = parse("PROLOGUE\r\n\r\nRain.\r\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::chapter("PROLOGUE"),
                ContentBlock::paragraph("Rain."),
            ]
        );
    }

    #[test]
    fn heading_whitespace_is_collapsed() {
        let blocks = parse("  CHAPTER    ONE:   The   Start  ");
        assert_eq!(blocks[0].text, "CHAPTER ONE: The Start");
    }

    #[test]
    fn subtitle_is_not_merged_past_heading_limit() {
        let heading = format!("PART {}", "1".repeat(HEADING_MAX_CHARS - 10));
        let text = format!("{heading}\nThe Long Night");
        let blocks = parse(&text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], ContentBlock::paragraph("The Long Night"));
    }

    #[test]
    fn subtitle_rules() {
        assert!(is_subtitle("The Beginning"));
        assert!(!is_subtitle("It ended."));
        assert!(!is_subtitle("\"Run!\""));
        assert!(!is_subtitle(&"word ".repeat(20)));
    }
}
