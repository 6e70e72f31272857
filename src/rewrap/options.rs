//! Options and configuration normalization
//!
//! This module defines the public options bag and the canonical configuration
//! record the engine runs under. Normalization never fails: every out-of-range
//! value is silently clamped or defaulted, so the engine is total over its
//! configuration domain.

use serde::{Deserialize, Serialize};

/// Sentinel for "no limit" on `width` and `spaced_tab_stop`.
///
/// The engine only ever compares against these fields or subtracts from them
/// with saturating arithmetic, so the sentinel behaves like an unreachable
/// bound.
pub const UNBOUNDED: usize = usize::MAX;

/// Public options bag. All fields are optional; unset fields take the
/// documented defaults during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum output column width. Zero or negative means unbounded.
    pub width: Option<i32>,
    /// Columns per tab stop. Defaults to 4; zero disables tab expansion.
    pub tab_width: Option<i32>,
    /// Number of consecutive spaces reinterpreted as indentation when seen
    /// mid-line. Zero or negative disables the trigger; 1 is raised to 2.
    pub spaced_tab_stop: Option<i32>,
    /// Explicit line terminator. Accepted only if non-empty and composed
    /// solely of carriage-return/line-feed characters.
    pub eol: Option<String>,
    /// Blank lines forced at the start of the output.
    pub top: Option<i32>,
    /// Blank lines forced at the end of the output. When unset, only
    /// trailing spaces are trimmed and existing trailing breaks are kept.
    pub bottom: Option<i32>,
}

/// Canonical configuration, immutable for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub tab_width: usize,
    pub spaced_tab_stop: usize,
    pub eol: Option<String>,
    pub top: Option<usize>,
    pub bottom: Option<usize>,
}

impl Options {
    /// Normalize the options into a canonical [`Config`].
    ///
    /// Clamping rules:
    /// - `width <= 0` (or unset) becomes [`UNBOUNDED`]
    /// - `tab_width` defaults to 4, floors at 0, and is clamped to `width`
    /// - `spaced_tab_stop <= 0` (or unset) becomes [`UNBOUNDED`]; 1 becomes 2
    /// - `eol` is kept only if it consists of `\r`/`\n` characters
    /// - negative `top`/`bottom` clamp to 0
    pub fn normalize(&self) -> Config {
        let width = match self.width {
            Some(w) if w > 0 => w as usize,
            _ => UNBOUNDED,
        };

        let tab_width = match self.tab_width {
            None => 4,
            Some(t) if t < 0 => 0,
            Some(t) => t as usize,
        }
        .min(width);

        let spaced_tab_stop = match self.spaced_tab_stop {
            Some(1) => 2,
            Some(s) if s > 1 => s as usize,
            _ => UNBOUNDED,
        };

        let eol = self
            .eol
            .as_ref()
            .filter(|s| !s.is_empty() && s.chars().all(|c| matches!(c, '\r' | '\n')))
            .cloned();

        Config {
            width,
            tab_width,
            spaced_tab_stop,
            eol,
            top: self.top.map(|t| t.max(0) as usize),
            bottom: self.bottom.map(|b| b.max(0) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = Options::default().normalize();
        assert_eq!(config.width, UNBOUNDED);
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.spaced_tab_stop, UNBOUNDED);
        assert_eq!(config.eol, None);
        assert_eq!(config.top, None);
        assert_eq!(config.bottom, None);
    }

    #[rstest(input, expected,
        case(Some(-5), UNBOUNDED),
        case(Some(0), UNBOUNDED),
        case(Some(72), 72),
        case(None, UNBOUNDED)
    )]
    fn test_width_normalization(input: Option<i32>, expected: usize) {
        let config = Options {
            width: input,
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.width, expected);
    }

    #[rstest(input, expected,
        case(Some(-1), 0),
        case(Some(0), 0),
        case(Some(8), 8),
        case(None, 4)
    )]
    fn test_tab_width_normalization(input: Option<i32>, expected: usize) {
        let config = Options {
            tab_width: input,
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.tab_width, expected);
    }

    #[test]
    fn test_tab_width_clamped_to_width() {
        let config = Options {
            width: Some(3),
            tab_width: Some(8),
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.tab_width, 3);

        // The default tab width is clamped too
        let config = Options {
            width: Some(2),
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.tab_width, 2);
    }

    #[rstest(input, expected,
        case(Some(0), UNBOUNDED),
        case(Some(-3), UNBOUNDED),
        case(Some(1), 2),
        case(Some(2), 2),
        case(Some(6), 6)
    )]
    fn test_spaced_tab_stop_normalization(input: Option<i32>, expected: usize) {
        let config = Options {
            spaced_tab_stop: input,
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.spaced_tab_stop, expected);
    }

    #[test]
    fn test_eol_accepts_terminator_strings_only() {
        let accept = |eol: &str| {
            Options {
                eol: Some(eol.to_string()),
                ..Default::default()
            }
            .normalize()
            .eol
        };

        assert_eq!(accept("\n"), Some("\n".to_string()));
        assert_eq!(accept("\r\n"), Some("\r\n".to_string()));
        assert_eq!(accept("\n\r"), Some("\n\r".to_string()));
        assert_eq!(accept(""), None);
        assert_eq!(accept("x\n"), None);
        assert_eq!(accept(" "), None);
    }

    #[test]
    fn test_negative_top_and_bottom_clamp_to_zero() {
        let config = Options {
            top: Some(-2),
            bottom: Some(-1),
            ..Default::default()
        }
        .normalize();
        assert_eq!(config.top, Some(0));
        assert_eq!(config.bottom, Some(0));
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: Options = serde_json::from_str(r#"{"width": 80}"#).unwrap();
        assert_eq!(options.width, Some(80));
        assert_eq!(options.tab_width, None);
    }
}
