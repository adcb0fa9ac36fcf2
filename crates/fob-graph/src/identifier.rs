//! Helpers turning arbitrary strings into JavaScript identifiers and comments.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^a-zA-Z$_])").expect("static regex"));
static NON_ALPHA_NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9$]+").expect("static regex"));

/// Convert a string (typically a request) into a valid identifier.
///
/// A leading character that cannot start an identifier gets an `_` prefix,
/// then every run of non-alphanumeric characters collapses into one `_`.
///
/// ```rust
/// use fob_graph::identifier::to_identifier;
///
/// assert_eq!(to_identifier("./utils/math"), "_utils_math");
/// assert_eq!(to_identifier("lodash-es"), "lodash_es");
/// ```
pub fn to_identifier(value: &str) -> String {
    let prefixed = LEADING_NON_IDENTIFIER.replace(value, "_$1");
    NON_ALPHA_NUMERIC_RUN
        .replace_all(&prefixed, "_")
        .into_owned()
}

/// Render `value` as a preserved (`/*! ... */`) block comment.
///
/// Returns an empty string for empty input. A `*/` inside the text is
/// defused so the comment cannot terminate early.
pub fn to_comment(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("/*! {} */", escape_comment_end(value))
}

/// Render `value` as an ordinary (`/* ... */`) block comment.
pub fn to_normal_comment(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("/* {} */", escape_comment_end(value))
}

fn escape_comment_end(value: &str) -> String {
    value.replace("*/", "* /")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prefixes_invalid_leading_char() {
        assert_eq!(to_identifier("1abc"), "_1abc");
        assert_eq!(to_identifier("$scope"), "$scope");
        assert_eq!(to_identifier("../a/b.js"), "_a_b_js");
    }

    #[test]
    fn comments_are_defused() {
        assert_eq!(to_comment("a */ b"), "/*! a * / b */");
        assert_eq!(to_normal_comment("x"), "/* x */");
        assert_eq!(to_comment(""), "");
    }
}
