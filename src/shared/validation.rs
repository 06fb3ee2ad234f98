//! Validation Utilities

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use validator::{ValidationError, ValidationErrors};

use super::error::FieldError;

/// Every scalar must be pictographic or an emoji component (ZWJ, variation
/// selectors, skin tones, keycap marks, regional indicators, tags).
static EMOJI_SCALARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\p{Extended_Pictographic}|\p{Emoji_Component})+$")
        .expect("emoji scalar pattern is valid")
});

static PICTOGRAPHIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Extended_Pictographic}").expect("pictographic pattern is valid"));

const COMBINING_KEYCAP: char = '\u{20E3}';

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// A grapheme is an emoji when it carries a pictograph, is a keycap
/// sequence, or is built from regional indicators (flags).
fn is_emoji_grapheme(grapheme: &str) -> bool {
    PICTOGRAPHIC.is_match(grapheme)
        || grapheme.contains(COMBINING_KEYCAP)
        || grapheme.chars().any(is_regional_indicator)
}

/// Returns true when `value` is non-empty and made only of emoji.
///
/// Bare digits, `#` and `*` are emoji components but not emoji on their own,
/// so they are only accepted as part of a keycap sequence.
pub fn is_emoji_only(value: &str) -> bool {
    !value.is_empty()
        && EMOJI_SCALARS.is_match(value)
        && value.graphemes(true).all(is_emoji_grapheme)
}

/// `validator` custom rule for emoji-only text. Empty input is left to the
/// length rule.
pub fn validate_emoji_only(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_emoji_only(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("emoji");
    error.message = Some(Cow::Borrowed("Only emojis are allowed"));
    Err(error)
}

/// Flatten validation errors into per-field messages.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("😀" ; "single emoji")]
    #[test_case("😀😂🎉" ; "several emoji")]
    #[test_case("👍🏽" ; "skin tone modifier")]
    #[test_case("👨‍👩‍👧" ; "zwj family sequence")]
    #[test_case("🇯🇵" ; "flag")]
    #[test_case("1️⃣" ; "keycap sequence")]
    #[test_case("❤️" ; "variation selector")]
    fn accepts_emoji(input: &str) {
        assert!(is_emoji_only(input), "{input:?} should be accepted");
    }

    #[test_case("" ; "empty")]
    #[test_case("hello" ; "ascii text")]
    #[test_case("😀 😂" ; "space between emoji")]
    #[test_case("😀a" ; "trailing letter")]
    #[test_case("1" ; "bare digit")]
    #[test_case("#" ; "bare hash")]
    #[test_case("🏻" ; "bare skin tone modifier")]
    #[test_case("é" ; "accented letter")]
    fn rejects_non_emoji(input: &str) {
        assert!(!is_emoji_only(input), "{input:?} should be rejected");
    }

    #[test]
    fn validate_emoji_only_defers_empty_to_length_rule() {
        assert!(validate_emoji_only("").is_ok());
        let err = validate_emoji_only("abc").unwrap_err();
        assert_eq!(err.code, "emoji");
        assert_eq!(err.message.as_deref(), Some("Only emojis are allowed"));
    }
}
