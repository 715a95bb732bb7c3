use super::{ContentBlock, ContentKind};
use regex::Regex;
use std::sync::LazyLock;

/// "CHAPTER 1: CHAPTER ONE: Title"
static NUMERIC_THEN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^CHAPTER\s+(\d+)\s*:\s*(CHAPTER\s+([A-Z]+(?:[\s-]+[A-Z]+)*))\s*(?::\s*(.*))?$",
    )
    .expect("valid regex")
});

/// "CHAPTER ONE: CHAPTER 1: Title"
static WORD_THEN_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(CHAPTER\s+([A-Z]+(?:[\s-]+[A-Z]+)*))\s*:\s*CHAPTER\s+(\d+)\s*(?::\s*(.*))?$",
    )
    .expect("valid regex")
});

/// Collapse a doubled chapter label into its word form.
///
/// Extraction sometimes emits both label conventions back to back
/// ("Chapter 1: Chapter One: The Storm"); the word-form label is kept.
/// Unless both labels read as the same number, the heading is returned
/// unchanged.
pub fn normalize(heading: &str) -> String {
    if let Some(caps) = NUMERIC_THEN_WORD.captures(heading) {
        let title = caps.get(4).map_or("", |m| m.as_str());
        if labels_agree(&caps[1], &caps[3]) {
            return join_label(&caps[2], title);
        }
    }

    if let Some(caps) = WORD_THEN_NUMERIC.captures(heading) {
        let title = caps.get(4).map_or("", |m| m.as_str());
        if labels_agree(&caps[3], &caps[2]) {
            return join_label(&caps[1], title);
        }
    }

    heading.to_string()
}

/// Normalize every chapter heading in place; other blocks are untouched.
pub fn normalize_headings(blocks: &mut [ContentBlock]) {
    for block in blocks
        .iter_mut()
        .filter(|b| b.kind == ContentKind::ChapterHeading)
    {
        let normalized = normalize(&block.text);
        if normalized != block.text {
            tracing::debug!(from = %block.text, to = %normalized, "collapsed chapter label");
            block.text = normalized;
        }
    }
}

fn join_label(label: &str, title: &str) -> String {
    let label = label.split_whitespace().collect::<Vec<_>>().join(" ");
    let title = title.trim();
    if title.is_empty() {
        label
    } else {
        format!("{label}: {title}")
    }
}

/// Both labels read as the same number.
fn labels_agree(digits: &str, words: &str) -> bool {
    matches!(
        (digits.parse::<u32>().ok(), word_value(words)),
        (Some(a), Some(b)) if a == b
    )
}

fn word_value(words: &str) -> Option<u32> {
    number_words(words).or_else(|| roman_value(words.trim()))
}

/// Value of an English cardinal such as "twenty-one" or "one hundred and five".
fn number_words(words: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut current = 0u32;
    let mut seen = false;

    for word in words
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
    {
        let word = word.to_ascii_lowercase();
        if word == "and" {
            continue;
        }
        let value = match word.as_str() {
            "zero" => 0,
            "one" => 1,
            "two" => 2,
            "three" => 3,
            "four" => 4,
            "five" => 5,
            "six" => 6,
            "seven" => 7,
            "eight" => 8,
            "nine" => 9,
            "ten" => 10,
            "eleven" => 11,
            "twelve" => 12,
            "thirteen" => 13,
            "fourteen" => 14,
            "fifteen" => 15,
            "sixteen" => 16,
            "seventeen" => 17,
            "eighteen" => 18,
            "nineteen" => 19,
            "twenty" => 20,
            "thirty" => 30,
            "forty" => 40,
            "fifty" => 50,
            "sixty" => 60,
            "seventy" => 70,
            "eighty" => 80,
            "ninety" => 90,
            "hundred" => {
                current = current.max(1).saturating_mul(100);
                seen = true;
                continue;
            }
            "thousand" => {
                total = total.saturating_add(current.max(1).saturating_mul(1000));
                current = 0;
                seen = true;
                continue;
            }
            _ => return None,
        };
        current = current.saturating_add(value);
        seen = true;
    }

    seen.then_some(total.saturating_add(current))
}

fn roman_value(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut total = 0u32;
    let mut prev = 0u32;
    for c in s.chars().rev() {
        let value = match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value < prev {
            total = total.checked_sub(value)?;
        } else {
            total = total.saturating_add(value);
            prev = value;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_then_word_keeps_word_form() {
        assert_eq!(
            normalize("CHAPTER 1: CHAPTER ONE: The Beginning"),
            "CHAPTER ONE: The Beginning"
        );
    }

    #[test]
    fn word_then_numeric_keeps_word_form() {
        assert_eq!(
            normalize("Chapter Twenty-One: Chapter 21: Homecoming"),
            "Chapter Twenty-One: Homecoming"
        );
    }

    #[test]
    fn doubled_labels_without_title() {
        assert_eq!(normalize("Chapter 3: Chapter Three"), "Chapter Three");
        assert_eq!(normalize("Chapter 3: Chapter Three:"), "Chapter Three");
    }

    #[test]
    fn mismatched_labels_pass_through() {
        let heading = "CHAPTER 2: CHAPTER FIVE: Lost";
        assert_eq!(normalize(heading), heading);
    }

    #[test]
    fn word_label_must_be_a_number() {
        for heading in [
            "Chapter 1: Chapter Seven Seas",
            "Chapter 7: Chapter Seven Seas: Sailing",
            "Chapter Lost Souls: Chapter 3",
        ] {
            assert_eq!(normalize(heading), heading);
        }
    }

    #[test]
    fn roman_word_form_is_checked() {
        assert_eq!(normalize("Chapter 4: Chapter IV: Ashes"), "Chapter IV: Ashes");
        let heading = "Chapter 4: Chapter IX: Ashes";
        assert_eq!(normalize(heading), heading);
    }

    #[test]
    fn unrelated_headings_pass_through() {
        for heading in ["CHAPTER ONE: The Beginning", "PROLOGUE", "Chapter 7: Seven Seas"] {
            assert_eq!(normalize(heading), heading);
        }
    }

    #[test]
    fn normalize_headings_only_touches_chapters() {
        let mut blocks = vec![
            ContentBlock::chapter("Chapter 1: Chapter One: Dawn"),
            ContentBlock::paragraph("Chapter 1: Chapter One: Dawn"),
        ];
        normalize_headings(&mut blocks);
        assert_eq!(blocks[0].text, "Chapter One: Dawn");
        assert_eq!(blocks[1].text, "Chapter 1: Chapter One: Dawn");
    }

    #[test]
    fn number_word_values() {
        assert_eq!(number_words("one"), Some(1));
        assert_eq!(number_words("Twenty-One"), Some(21));
        assert_eq!(number_words("one hundred and five"), Some(105));
        assert_eq!(number_words("the end"), None);
        assert_eq!(roman_value("XIV"), Some(14));
        assert_eq!(roman_value("XQ"), None);
    }
}
