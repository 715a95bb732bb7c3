//! Pattern catalog for manuscript line classification.
//!
//! Every set is ordered and compiled once per process. Patterns are
//! case-insensitive and anchored at the start of the trimmed line.

use regex::Regex;
use std::sync::LazyLock;

/// Heading candidates longer than this are treated as prose.
pub const HEADING_MAX_CHARS: usize = 200;

/// Cardinal number words accepted in `CHAPTER <word-number>` headings.
const NUMBER_WORD: &str = "(?:ONE|TWO|THREE|FOUR|FIVE|SIX|SEVEN|EIGHT|NINE|TEN|ELEVEN|TWELVE|\
THIRTEEN|FOURTEEN|FIFTEEN|SIXTEEN|SEVENTEEN|EIGHTEEN|NINETEEN|TWENTY|THIRTY|FORTY|FIFTY|\
SIXTY|SEVENTY|EIGHTY|NINETY|HUNDRED)";

/// Roman numerals stay case-sensitive so words like "mix" or "did" never match.
const ROMAN: &str = "(?-i:[IVXLCDM]+)";

/// Optional `: Title` tail after a heading label.
const TITLE_TAIL: &str = r"\s*(?:[:\u{2013}\u{2014}].*)?$";

/// Literal scene-break ornaments that the repeated-character rule misses.
pub const SCENE_BREAK_LITERALS: &[&str] = &["***", "* * *", "---", "~~~", "- - -", "# # #", "\u{2042}"];

pub static SCENE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-~#]{3,}$").expect("valid regex"));

fn number_label() -> String {
    format!(r"{NUMBER_WORD}(?:(?:\s+AND)?[\s-]+{NUMBER_WORD})*\b")
}

/// Chapter, part and other level-1 divisions.
pub static CHAPTER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let words = number_label();
    [
        // "CHAPTER ONE", "Chapter Twenty-One: The Return"
        format!(r"(?i)^CHAPTER\s+{words}{TITLE_TAIL}"),
        // "CHAPTER 12", "Chapter 3: Storm"
        format!(r"(?i)^CHAPTER\s+\d+\.?{TITLE_TAIL}"),
        // "CHAPTER IV"
        format!(r"(?i)^CHAPTER\s+{ROMAN}\b{TITLE_TAIL}"),
        format!(r"(?i)^PART\s+(?:{ROMAN}|\d+|{words})\b{TITLE_TAIL}"),
        format!(r"(?i)^PROLOGUE{TITLE_TAIL}"),
        format!(r"(?i)^EPILOGUE{TITLE_TAIL}"),
        format!(r"(?i)^INTERLUDE{TITLE_TAIL}"),
        format!(r"(?i)^ACT\s+(?:{ROMAN}|\d+)\b{TITLE_TAIL}"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Front-matter section headings; each must be the whole line.
pub static FRONT_MATTER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^DEDICATION$",
        r"(?i)^ACKNOWLEDGE?MENTS?$",
        r"(?i)^PREFACE$",
        r"(?i)^FOREWORD$",
        r"(?i)^INTRODUCTION$",
        r"(?i)^NOTE\s+TO\s+(?:THE\s+)?READERS?$",
        r"(?i)^AUTHOR(?:'S|\u{2019}S|S)?\s+NOTE$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Back-matter section headings.
///
/// Labels that commonly carry a name or identifier ("Also by Jane Doe",
/// "Appendix B", "Bonus Chapter") accept a tail, but never one containing
/// sentence punctuation.
pub static BACK_MATTER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^ABOUT\s+THE\s+AUTHORS?$",
        r"(?i)^ALSO\s+BY(?:\s+[^.!?]+)?$",
        r"(?i)^BIBLIOGRAPHY$",
        r"(?i)^GLOSSARY$",
        r"(?i)^INDEX$",
        r"(?i)^NOTES$",
        r"(?i)^APPENDIX(?:\s+\w+)?\s*(?:[:\u{2013}\u{2014}].*)?$",
        r"(?i)^AFTERWORD$",
        r"(?i)^BONUS(?:\s+[^.!?]+)?$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

pub fn is_scene_break(line: &str) -> bool {
    SCENE_BREAK_RUN.is_match(line) || SCENE_BREAK_LITERALS.contains(&line)
}

pub fn is_chapter_heading(line: &str) -> bool {
    CHAPTER_PATTERNS.iter().any(|re| re.is_match(line))
}

pub fn is_front_matter_heading(line: &str) -> bool {
    FRONT_MATTER_PATTERNS.iter().any(|re| re.is_match(line))
}

pub fn is_back_matter_heading(line: &str) -> bool {
    BACK_MATTER_PATTERNS.iter().any(|re| re.is_match(line))
}
