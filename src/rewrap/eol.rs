//! Line-ending detection
//!
//! The engine emits a single terminator for every break it generates,
//! regardless of the styles present in the input. When no terminator was
//! configured, the first terminator sequence found in the input is adopted;
//! when the input contains none, the engine falls back to a host-provided
//! default (injectable, see [`Engine::with_fallback_eol`]).
//!
//! [`Engine::with_fallback_eol`]: crate::rewrap::engine::Engine::with_fallback_eol

use once_cell::sync::Lazy;
use regex::Regex;

// Alternation order matters: the two-character sequences must be tried first
// so "\r\n" is adopted as a unit rather than as "\r".
static TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n\r|\r|\n").expect("terminator pattern is valid"));

/// Find the first line-terminator sequence in `input`, if any.
pub fn detect(input: &str) -> Option<&str> {
    TERMINATOR.find(input).map(|m| m.as_str())
}

/// The default terminator of the execution environment.
pub fn host_default() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}
