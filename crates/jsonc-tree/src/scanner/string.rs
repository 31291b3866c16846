use bstr::BString;

use super::Scanner;
use crate::error::{ErrorCode, ParseError};

/// Characters allowed after a backslash.
fn is_escape(byte: u8) -> bool {
    matches!(
        byte,
        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u'
    )
}

impl Scanner<'_> {
    /// Scans a string literal whose opening quote is at the cursor.
    ///
    /// Escapes are validated but not decoded: the returned lexeme is the raw
    /// text between the quotes. The cursor ends just past the closing quote.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::InvalidControlSequence`] for an escape outside the
    ///   allowed set.
    /// - [`ErrorCode::HexDigitsRequired`] if fewer than four bytes follow
    ///   `\u`.
    /// - [`ErrorCode::InvalidHexDigit`] if one of those four is not hex.
    /// - [`ErrorCode::UnexpectedEndOfInput`] if the closing quote is missing.
    pub(crate) fn scan_string(&mut self) -> Result<BString, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        let start = self.pos;

        loop {
            let Some(byte) = self.peek() else {
                return Err(self.error_at(
                    ErrorCode::UnexpectedEndOfInput,
                    self.pos,
                    self.pos - start,
                ));
            };

            match byte {
                b'"' => {
                    let lexeme = self.copy_lexeme(start)?;
                    self.pos += 1;
                    return Ok(lexeme);
                }
                b'\\' => {
                    self.pos += 1;
                    self.scan_escape(start)?;
                }
                _ => self.bump(),
            }
        }
    }

    /// Validates the escape whose backslash was just consumed.
    fn scan_escape(&mut self, start: usize) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(self.error_at(
                ErrorCode::UnexpectedEndOfInput,
                self.pos,
                self.pos - start,
            )),
            Some(b'u') => {
                self.pos += 1;
                if self.remaining() < 4 {
                    return Err(self.error_at(
                        ErrorCode::HexDigitsRequired,
                        self.pos,
                        self.pos - start,
                    ));
                }
                for _ in 0..4 {
                    if !self.peek().is_some_and(|byte| byte.is_ascii_hexdigit()) {
                        return Err(self.error_at(
                            ErrorCode::InvalidHexDigit,
                            self.pos,
                            self.pos - start,
                        ));
                    }
                    self.pos += 1;
                }
                Ok(())
            }
            Some(byte) if is_escape(byte) => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(self.error_at(
                ErrorCode::InvalidControlSequence,
                self.pos,
                self.pos - start,
            )),
        }
    }
}
