//! Greedy word wrapping.

use unicode_normalization::UnicodeNormalization;

/// Wrap `text` into lines no wider than `max_width`.
///
/// Hard line breaks in the input start a new line; blank input lines are
/// dropped. Words are packed greedily; a word wider than `max_width` is
/// placed alone on its own line and never split. `width_of` measures a
/// candidate line in the same unit as `max_width`.
pub fn wrap_text<F>(text: &str, max_width: f32, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let normalized: String = text.nfc().collect();
    let mut lines = Vec::new();

    for paragraph in normalized.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate_len = current.len();
            current.push(' ');
            current.push_str(word);
            if width_of(&current) > max_width {
                current.truncate(candidate_len);
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Collapse all whitespace runs to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_greedy() {
        let lines = wrap_text("the quick brown fox jumps", 10.0, chars);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_long_word_alone() {
        let lines = wrap_text("a supercalifragilistic b", 5.0, chars);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_hard_breaks() {
        let lines = wrap_text("Led team\n\n  Shipped v2  \n", 40.0, chars);
        assert_eq!(lines, vec!["Led team", "Shipped v2"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10.0, chars).is_empty());
        assert!(wrap_text("   \n ", 10.0, chars).is_empty());
    }

    #[test]
    fn test_wrap_round_trip() {
        let text = "  Designed   and\tbuilt a distributed\njob scheduler serving  many teams ";
        let lines = wrap_text(text, 12.0, chars);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), normalize_whitespace(text));
    }

    #[test]
    fn test_wrap_exact_fit() {
        let lines = wrap_text("abcd efgh", 9.0, chars);
        assert_eq!(lines, vec!["abcd efgh"]);
    }
}
