//! Recovery of expected/actual widths from free-text model errors.
//!
//! Only used for models that do not report [`ModelError::ShapeMismatch`]
//! directly. The accepted shape is narrow:
//!
//! ```text
//! expected <N1><sep>got<sep><N2>
//! ```
//!
//! matched case-insensitively anywhere in the message, where the separator
//! after `expected` and `got` is any run of whitespace, `:` or `=`, and the
//! separator before `got` is any run of whitespace, `,` or `;`.
//!
//! [`ModelError::ShapeMismatch`]: crate::port::outbound::model::ModelError::ShapeMismatch

const EXPECTED: &str = "expected";
const GOT: &str = "got";

/// Widths recovered from a shape-mismatch message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeHint {
    pub expected: usize,
    pub got: usize,
}

/// Parse the first `expected N ... got M` occurrence in `message`.
#[must_use]
pub fn parse_shape_mismatch(message: &str) -> Option<ShapeHint> {
    // ASCII lowercasing keeps byte offsets aligned with the input.
    let lower = message.to_ascii_lowercase();
    lower
        .match_indices(EXPECTED)
        .find_map(|(start, _)| match_after_expected(&lower[start + EXPECTED.len()..]))
}

fn match_after_expected(rest: &str) -> Option<ShapeHint> {
    let rest = skip_some(rest, is_value_separator)?;
    let (expected, rest) = take_number(rest)?;
    let rest = skip_some(rest, is_clause_separator)?;
    let rest = rest.strip_prefix(GOT)?;
    let rest = skip_some(rest, is_value_separator)?;
    let (got, _) = take_number(rest)?;
    Some(ShapeHint { expected, got })
}

fn is_value_separator(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == '='
}

fn is_clause_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

/// Skip one or more leading characters matching `pred`.
fn skip_some(s: &str, pred: fn(char) -> bool) -> Option<&str> {
    let trimmed = s.trim_start_matches(pred);
    (trimmed.len() < s.len()).then_some(trimmed)
}

fn take_number(s: &str) -> Option<(usize, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let n = s[..end].parse().ok()?;
    Some((n, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(expected: usize, got: usize) -> Option<ShapeHint> {
        Some(ShapeHint { expected, got })
    }

    #[test]
    fn parses_plain_comma_form() {
        assert_eq!(parse_shape_mismatch("expected 7, got 5"), hint(7, 5));
    }

    #[test]
    fn parses_colon_form() {
        assert_eq!(parse_shape_mismatch("expected: 8, got: 5"), hint(8, 5));
    }

    #[test]
    fn parses_embedded_in_longer_message() {
        assert_eq!(
            parse_shape_mismatch("Input shape mismatch: expected 7, got 5"),
            hint(7, 5)
        );
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(
            parse_shape_mismatch("Feature shape mismatch, EXPECTED 12 GOT 5"),
            hint(12, 5)
        );
    }

    #[test]
    fn skips_earlier_non_matching_occurrence() {
        assert_eq!(
            parse_shape_mismatch("expected array; expected=9; got=5"),
            hint(9, 5)
        );
    }

    #[test]
    fn rejects_sklearn_wording() {
        assert_eq!(
            parse_shape_mismatch(
                "X has 5 features, but LinearRegression is expecting 7 features as input."
            ),
            None
        );
    }

    #[test]
    fn rejects_text_between_number_and_got() {
        assert_eq!(parse_shape_mismatch("expected 7 features, got 5"), None);
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(parse_shape_mismatch("expected7, got 5"), None);
        assert_eq!(parse_shape_mismatch("expected 7got 5"), None);
    }

    #[test]
    fn rejects_unrelated_message() {
        assert_eq!(parse_shape_mismatch("could not convert string to float"), None);
    }
}
