//! The reflow engine
//!
//! This module implements the tokenizing state machine at the heart of the
//! crate. An [`Engine`] accumulates raw text into a pending buffer; on
//! finalization it resolves the output terminator, drains the buffer
//! token-by-token, and post-processes the result with the output trimmer.
//!
//! State
//!
//!     The machine tracks the current column (`offset`), the column width
//!     captured as the current line's indentation (`indent_width`), and
//!     whether it is still inside the leading-indentation region of the line
//!     (`indenting`). Indentation is re-applied to every continuation line a
//!     wrap produces, and resets at blank-line boundaries.
//!
//! Wrapping
//!
//!     A word that cannot fit on the remaining line either soft-wraps (the
//!     trailing padding on the current line is replaced by a terminator and
//!     the word re-evaluates on a fresh indented line) or, when the cursor
//!     already sits at the start-of-content position and wrapping would not
//!     create room, hard-splits at the width boundary, possibly repeatedly
//!     for a single very long token.

use crate::rewrap::eol;
use crate::rewrap::lexer::Token;
use crate::rewrap::options::{Config, Options};
use crate::rewrap::trim::trim_output;
use logos::Logos;

/// Incremental reflow engine.
///
/// Construct with [`Engine::new`], feed text with [`Engine::write`], and
/// produce the reflowed result with [`Engine::finish`]. Finalization is
/// idempotent: calling [`Engine::finish`] again without further writes
/// returns the same string, and writing more text afterwards continues from
/// the committed output.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    fallback_eol: String,
    /// Terminator resolved for this session, once known.
    eol: Option<String>,
    pending: String,
    output: String,
    trimmed: String,
    offset: usize,
    indent_width: usize,
    indenting: bool,
}

impl Engine {
    /// Create an engine using the host environment's default terminator as
    /// the fallback when none is configured and none occurs in the input.
    pub fn new(options: Options) -> Self {
        Self::with_fallback_eol(options, eol::host_default())
    }

    /// Create an engine with an explicit fallback terminator, keeping the
    /// engine deterministic regardless of the host platform.
    pub fn with_fallback_eol(options: Options, fallback_eol: impl Into<String>) -> Self {
        Engine {
            config: options.normalize(),
            fallback_eol: fallback_eol.into(),
            eol: None,
            pending: String::new(),
            output: String::new(),
            trimmed: String::new(),
            offset: 0,
            indent_width: 0,
            indenting: true,
        }
    }

    /// Append raw text to the pending input buffer.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.pending.push_str(text);
        self
    }

    /// Drain all pending input and return the trimmed, reflowed text.
    pub fn finish(&mut self) -> String {
        self.process_pending();
        self.trimmed.clone()
    }

    fn process_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let eol = self.resolve_eol();
        let pending = std::mem::take(&mut self.pending);

        let mut tokens = Token::lexer(&pending).spanned().peekable();
        while let Some((token, span)) = tokens.next() {
            match token {
                Ok(Token::Newline) => {
                    let mut count = 1;
                    while matches!(tokens.peek(), Some((Ok(Token::Newline), _))) {
                        tokens.next();
                        count += 1;
                    }
                    self.newline_run(&eol, count);
                }
                Ok(first @ (Token::Space | Token::Tab)) => {
                    let mut run = vec![first];
                    while let Some((Ok(next @ (Token::Space | Token::Tab)), _)) = tokens.peek() {
                        run.push(*next);
                        tokens.next();
                    }
                    self.whitespace_run(&eol, &run);
                }
                Ok(Token::Word) => {
                    self.word(&eol, &pending[span]);
                }
                // The token classes cover every character, so this should be
                // unreachable; skipping the span keeps the drain total on any
                // input.
                Err(()) => {}
            }
        }

        self.trimmed = trim_output(&self.output, &eol, self.config.top, self.config.bottom);
    }

    /// Fix the terminator for this session: the configured one, else the
    /// first terminator in the untouched input, else the fallback.
    fn resolve_eol(&mut self) -> String {
        if let Some(resolved) = &self.eol {
            return resolved.clone();
        }

        let resolved = match &self.config.eol {
            Some(configured) => configured.clone(),
            None => match eol::detect(&self.pending) {
                Some(found) => found.to_string(),
                None => self.fallback_eol.clone(),
            },
        };

        self.eol = Some(resolved.clone());
        resolved
    }

    /// Process a run of space/tab characters.
    ///
    /// The run is walked one character at a time while columns remain: a
    /// space consumes one column, a tab consumes columns up to the next tab
    /// stop. A run that fits is committed as spaces; a run that exhausts the
    /// line is discarded and replaced by a wrap.
    fn whitespace_run(&mut self, eol: &str, run: &[Token]) {
        let mut remaining = self.config.width.saturating_sub(self.offset);
        let mut count = 0;

        for token in run {
            if remaining == 0 {
                break;
            }
            match token {
                Token::Space => {
                    count += 1;
                    remaining -= 1;
                    if count >= self.config.spaced_tab_stop {
                        self.indenting = true;
                    }
                }
                Token::Tab => {
                    self.indenting = true;
                    if self.config.tab_width > 0 {
                        let step =
                            self.config.tab_width - ((self.offset + count) % self.config.tab_width);
                        count += step;
                        remaining = remaining.saturating_sub(step);
                    }
                }
                _ => {}
            }
        }

        if remaining > 0 {
            self.output.push_str(&" ".repeat(count));
            self.offset += count;
            if self.indenting {
                self.indent_width = self.offset;
            }
        } else {
            self.indenting = false;
            self.output.push_str(eol);
            self.offset = 0;
            self.indent();
        }
    }

    /// Process one word, wrapping or hard-splitting as needed.
    fn word(&mut self, eol: &str, word: &str) {
        let mut word = word;
        let mut len = word.chars().count();

        loop {
            if self.offset + len > self.config.width {
                if self.offset == self.indent_width {
                    // Wrapping would not create room; split at the boundary.
                    let take = self.config.width - self.indent_width;
                    let split = word
                        .char_indices()
                        .nth(take)
                        .map(|(index, _)| index)
                        .unwrap_or(word.len());
                    self.output.push_str(&word[..split]);
                    self.output.push_str(eol);
                    word = &word[split..];
                    len -= take;
                } else {
                    // The padding before the wrap point is superfluous once
                    // the word moves down.
                    let kept = self.output.trim_end_matches(' ').len();
                    self.output.truncate(kept);
                    self.output.push_str(eol);
                }
                self.offset = 0;
                self.indent();
            } else {
                self.output.push_str(word);
                self.offset += len;
                break;
            }
        }

        self.indenting = false;
    }

    /// Process a run of `count` consecutive line breaks.
    fn newline_run(&mut self, eol: &str, count: usize) {
        for _ in 0..count {
            self.output.push_str(eol);
        }
        self.offset = 0;
        self.indent_width = 0;
        self.indenting = true;
    }

    /// Re-apply the captured indentation at the start of a fresh line.
    fn indent(&mut self) {
        if self.indent_width > 0 {
            self.output.push_str(&" ".repeat(self.indent_width));
            self.offset = self.indent_width;
        }
    }
}
