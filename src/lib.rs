//! # rewrap
//!
//! A reflow engine for monospace text.
//!
//! rewrap re-wraps plain fixed-width text to a maximum column width while
//! preserving the author's indentation, normalizing line terminators,
//! expanding tabs into columns, and trimming incidental whitespace. The
//! typical use case is re-wrapping comment blocks or documentation after
//! editing.
//!
//! One-shot:
//!
//! ```rust,ignore
//! let wrapped = rewrap::reflow("    word1 word2", rewrap::Options {
//!     width: Some(10),
//!     ..Default::default()
//! });
//! ```
//!
//! Incremental, via the engine:
//!
//! ```rust,ignore
//! let mut engine = rewrap::Engine::new(options);
//! engine.write(chunk_one).write(chunk_two);
//! let wrapped = engine.finish();
//! ```

pub mod rewrap;

pub use crate::rewrap::engine::Engine;
pub use crate::rewrap::options::Options;

/// Reflow `text` in one call: construct an engine, feed it the full input,
/// and finalize.
pub fn reflow(text: &str, options: Options) -> String {
    Engine::new(options).write(text).finish()
}
