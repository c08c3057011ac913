// SPDX-License-Identifier: Apache-2.0

//! Token cursor and the skip-scan used to hand nested structures to a
//! recursive parse.
//!
//! A structural parser owns a [`Cursor`] over its token range. When it meets
//! a nested `[` or `{`, [`Cursor::delegate`] finds the matching close token,
//! moves the cursor onto it and hands back the inclusive sub-slice. The
//! nested parse runs over that borrowed view and the outer loop resumes one
//! past the close token on its next advance. Nothing is shared between the
//! two parses except the returned slice.

use log::trace;

use crate::parse_error::ParseError;
use crate::token::{Kind, Token};

/// Finds the index of the `close` token matching the `open` token at `start`.
///
/// Only `open`/`close` tokens move the depth counter, so `[{]}`-style
/// interleavings of the other bracket kind are not detected here; the
/// nested parse rejects them.
///
/// Fails with a syntax error blaming the first token of `tokens` when the
/// structure never closes.
pub fn skip_scan(
    tokens: &[Token],
    start: usize,
    open: Kind,
    close: Kind,
) -> Result<usize, ParseError> {
    let mut depth = 0isize;
    for (index, token) in tokens.iter().enumerate().skip(start) {
        let kind = token.kind();
        if kind == open {
            depth += 1;
        } else if kind == close {
            depth -= 1;
            if depth == 0 {
                return Ok(index);
            }
        }
    }
    Err(ParseError::unterminated(tokens))
}

/// The next-unconsumed-token position within one token range.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor at the start of `tokens`.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The token under the cursor.
    ///
    /// Reading past the end means the structure was never closed, which is
    /// reported against the first token of the range.
    pub fn current(&self) -> Result<&'t Token, ParseError> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| ParseError::unterminated(self.tokens))
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Skips over the nested structure starting under the cursor.
    ///
    /// Returns the inclusive `[open ..= close]` sub-slice for the nested
    /// parse and leaves the cursor on the close token, so the caller's next
    /// [`advance`](Self::advance) lands just past it.
    pub fn delegate(&mut self, open: Kind, close: Kind) -> Result<&'t [Token], ParseError> {
        let start = self.pos;
        let end = skip_scan(self.tokens, start, open, close)?;
        trace!("Delegating {} tokens [{}..={}]", end - start + 1, start, end);
        self.pos = end;
        Ok(&self.tokens[start..=end])
    }
}
