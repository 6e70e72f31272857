//! Token definitions for the reflow engine
//!
//! This module defines the tokens the pending input buffer is lexed into.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. Three classes cover every character the engine can see:
//!
//! - `Newline`: one logical line break, together with any trailing spaces or
//!   tabs sitting before it on the same line. A blank-line run lexes into a
//!   run of consecutive `Newline` tokens.
//! - `Space` / `Tab`: a single whitespace character. Whitespace is tokenized
//!   one character at a time so the engine can measure spaces and tabs
//!   individually while walking a run.
//! - `Word`: the longest run of characters containing no space, tab, or
//!   line-break character.
//!
//! The classes are exhaustive, so the lexer's error arm should be
//! unreachable; the engine still skips unmatched spans so that tokenization
//! always makes progress on any input.

use logos::Logos;

/// All tokens produced from the pending input buffer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // A line break plus any trailing whitespace that precedes it. The
    // two-character sequences must win over their one-character prefixes.
    #[regex(r"[ \t]*(\r\n|\n\r|\r|\n)")]
    Newline,

    #[token(" ")]
    Space,

    #[token("\t")]
    Tab,

    // Catch-all for everything that is not whitespace or a line break
    #[regex(r"[^ \t\r\n]+")]
    Word,
}

impl Token {
    /// Check if this token is a space or tab (not a line break)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Space | Token::Tab)
    }

    /// Check if this token is a line break
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}
