//! Output trimming
//!
//! The trimmer runs once, after the pending buffer is fully drained, and
//! normalizes the blank regions at the edges of the reflowed text. `top`
//! and `bottom` force an exact number of blank lines at their edge; with
//! `bottom` unset only trailing spaces are stripped, so breaks already
//! present at the end of the input survive.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_BLANKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*[\r\n]+)*").expect("leading-blanks pattern is valid"));

static TRAILING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*$").expect("trailing-whitespace pattern is valid"));

static TRAILING_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +$").expect("trailing-spaces pattern is valid"));

/// Normalize the blank edges of the fully reflowed text.
pub fn trim_output(output: &str, eol: &str, top: Option<usize>, bottom: Option<usize>) -> String {
    let mut trimmed = output.to_string();

    if let Some(top) = top {
        trimmed = LEADING_BLANKS
            .replace(&trimmed, eol.repeat(top))
            .into_owned();
    }

    match bottom {
        Some(bottom) => {
            trimmed = TRAILING_WHITESPACE
                .replace(&trimmed, eol.repeat(bottom))
                .into_owned();
        }
        None => {
            trimmed = TRAILING_SPACES.replace(&trimmed, "").into_owned();
        }
    }

    trimmed
}
