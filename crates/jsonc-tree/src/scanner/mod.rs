//! Lexical layer: a byte cursor with line tracking, plus the string, number
//! and keyword recognizers that run on it.
//!
//! A single [`Scanner`] is created per top-level parse and threaded by
//! `&mut` through every recursive container frame, so position, line and
//! error location are shared across nesting levels.

mod keyword;
mod number;
mod string;


use alloc::vec::Vec;

use bstr::BString;

pub(crate) use keyword::Keyword;
pub(crate) use number::NumberKind;

use crate::error::{ErrorCode, ParseError};

/// `0x09..=0x0D` and space.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, 0x09..=0x0D | b' ')
}

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
    line: usize,
    allow_comments: bool,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src [u8], allow_comments: bool) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            allow_comments,
        }
    }

    #[cfg(test)]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Consumes one byte, counting lines.
    #[inline]
    pub(crate) fn bump(&mut self) {
        if let Some(byte) = self.peek() {
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// An error located at the current byte.
    pub(crate) fn error(&self, code: ErrorCode) -> ParseError {
        self.error_at(code, self.pos, 0)
    }

    pub(crate) fn error_at(&self, code: ErrorCode, position: usize, length: usize) -> ParseError {
        ParseError {
            code,
            line: self.line,
            position,
            length,
        }
    }

    /// Skips whitespace and comments, then returns the next significant byte
    /// without consuming it. `Ok(None)` means the buffer is exhausted.
    ///
    /// # Errors
    ///
    /// A block comment left open at the end of the buffer is
    /// [`ErrorCode::UnexpectedEndOfInput`]; a `/` that starts neither kind of
    /// comment is [`ErrorCode::UnexpectedToken`].
    pub(crate) fn skip_insignificant(&mut self) -> Result<Option<u8>, ParseError> {
        loop {
            match self.peek() {
                Some(byte) if is_whitespace(byte) => self.bump(),
                Some(b'/') if self.allow_comments => self.skip_comment()?,
                other => return Ok(other),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        match self.peek_at(1) {
            Some(b'/') => {
                self.pos += 2;
                // The terminating newline is left for the whitespace skipper.
                while self.peek().is_some_and(|byte| byte != b'\n') {
                    self.pos += 1;
                }
                Ok(())
            }
            Some(b'*') => {
                self.pos += 2;
                loop {
                    match self.peek() {
                        None => {
                            return Err(self.error_at(
                                ErrorCode::UnexpectedEndOfInput,
                                self.pos,
                                self.pos - start,
                            ));
                        }
                        Some(b'*') if self.peek_at(1) == Some(b'/') => {
                            self.pos += 2;
                            return Ok(());
                        }
                        Some(_) => self.bump(),
                    }
                }
            }
            Some(_) => Err(self.error(ErrorCode::UnexpectedToken)),
            None => Err(self.error_at(ErrorCode::UnexpectedEndOfInput, self.input.len(), 1)),
        }
    }

    /// Copies `input[start..pos]` into an owned lexeme.
    fn copy_lexeme(&self, start: usize) -> Result<BString, ParseError> {
        let bytes = &self.input[start..self.pos];
        let mut lexeme = Vec::new();
        lexeme
            .try_reserve_exact(bytes.len())
            .map_err(|_| self.error_at(ErrorCode::OutOfMemory, start, bytes.len()))?;
        lexeme.extend_from_slice(bytes);
        Ok(BString::from(lexeme))
    }
}
