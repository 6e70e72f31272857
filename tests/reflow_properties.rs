//! Property-based tests for the reflow engine
//!
//! These tests ensure that the engine is total over its input domain and
//! that the documented output guarantees hold: the width bound, terminator
//! purity, and idempotence under an identical configuration.

use proptest::prelude::*;
use rewrap::{reflow, Options};

fn options(width: i32) -> Options {
    Options {
        width: Some(width),
        eol: Some("\n".to_string()),
        ..Default::default()
    }
}

/// Generate text mixing words, whitespace runs, and terminator styles
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            // Plain words
            "[a-zA-Z0-9]{1,12}",
            // Space/tab padding
            "[ \t]{1,4}",
            // Terminator styles
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("\r".to_string()),
        ],
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

proptest! {
    /// Every input string, including control characters, produces a defined
    /// result without panicking.
    #[test]
    fn reflow_is_total(input in ".*", width in -5i32..100) {
        let _ = reflow(&input, options(width));
    }

    /// With a finite width, every output line fits within it once tabs are
    /// expanded (hard-split lines land exactly on the bound).
    #[test]
    fn output_lines_respect_width(input in text_strategy(), width in 1i32..60) {
        let output = reflow(&input, options(width));
        prop_assert!(!output.contains('\r'));
        prop_assert!(!output.contains('\t'));
        for line in output.split('\n') {
            prop_assert!(line.chars().count() <= width as usize);
        }
    }

    /// Reflowing already-reflowed output under the same configuration is a
    /// no-op.
    #[test]
    fn reflow_is_idempotent(input in text_strategy(), width in 1i32..60) {
        let once = reflow(&input, options(width));
        let twice = reflow(&once, options(width));
        prop_assert_eq!(once, twice);
    }

    /// A single unsplittable run is hard-split into width-sized lines
    /// without losing a character.
    #[test]
    fn long_words_hard_split_exactly(length in 1usize..200, width in 1i32..30) {
        let input = "x".repeat(length);
        let output = reflow(&input, options(width));

        let lines: Vec<&str> = output.split('\n').collect();
        for line in &lines[..lines.len() - 1] {
            prop_assert_eq!(line.chars().count(), width as usize);
        }
        prop_assert!(lines[lines.len() - 1].chars().count() <= width as usize);
        prop_assert_eq!(output.replace('\n', ""), input);
    }

    /// The first terminator in the input is adopted for every emitted
    /// break, whatever styles follow.
    #[test]
    fn detected_terminator_is_used_throughout(lines in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let separators = ["\n", "\r", "\r\n", "\n\r"];
        let mut input = String::new();
        for (i, line) in lines.iter().enumerate() {
            input.push_str(line);
            input.push_str("\r\n");
            input.push_str(separators[i % separators.len()]);
        }

        let output = reflow(&input, Options::default());
        prop_assert!(output.replace("\r\n", "").chars().all(|c| c != '\r' && c != '\n'));
    }
}
