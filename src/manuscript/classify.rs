use super::patterns::{self, HEADING_MAX_CHARS};
use super::{ContentKind, SectionRole};

/// One classification rule. Rules are tried top to bottom; the first
/// whose predicate accepts the trimmed line decides the result.
struct Rule {
    kind: ContentKind,
    level: u8,
    heading: bool,
    matches: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        kind: ContentKind::Blank,
        level: 0,
        heading: false,
        matches: str::is_empty,
    },
    Rule {
        kind: ContentKind::SceneBreak,
        level: 0,
        heading: false,
        matches: patterns::is_scene_break,
    },
    Rule {
        kind: ContentKind::ChapterHeading,
        level: 1,
        heading: true,
        matches: patterns::is_chapter_heading,
    },
    Rule {
        kind: ContentKind::SectionHeading(SectionRole::Front),
        level: 2,
        heading: true,
        matches: patterns::is_front_matter_heading,
    },
    Rule {
        kind: ContentKind::SectionHeading(SectionRole::Back),
        level: 2,
        heading: true,
        matches: patterns::is_back_matter_heading,
    },
];

/// Classify a single manuscript line.
///
/// Returns the content kind and its heading level. The result depends on
/// this line alone; merging across lines is left to the parser. Heading
/// candidates longer than [`HEADING_MAX_CHARS`] fall through to
/// `Paragraph`, since long lines are prose that happens to open with a
/// heading word.
pub fn classify(line: &str) -> (ContentKind, u8) {
    let line = line.trim();
    let too_long = line.chars().count() > HEADING_MAX_CHARS;

    RULES
        .iter()
        .filter(|rule| !(rule.heading && too_long))
        .find(|rule| (rule.matches)(line))
        .map_or((ContentKind::Paragraph, 0), |rule| (rule.kind, rule.level))
}
