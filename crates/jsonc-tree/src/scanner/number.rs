use bstr::BString;

use super::{Scanner, is_whitespace};
use crate::error::{ErrorCode, ParseError};

/// Whether a number lexeme contained a decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Int,
    Double,
}

/// States of `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Init,
    Sign,
    Zero,
    Integer,
    DecimalPoint,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
}

impl NumberState {
    fn is_accepting(self) -> bool {
        matches!(
            self,
            NumberState::Zero
                | NumberState::Integer
                | NumberState::Fraction
                | NumberState::ExponentDigits
        )
    }
}

/// Bytes that end a number lexeme without being part of it. `/` is included
/// so a comment may follow a number directly.
fn is_terminator(byte: u8) -> bool {
    matches!(byte, b',' | b'}' | b']' | b'/') || is_whitespace(byte)
}

impl Scanner<'_> {
    /// Runs the number DFA from the cursor and returns the raw lexeme.
    ///
    /// On success the cursor rests on the terminating byte (or the end of the
    /// buffer).
    ///
    /// # Errors
    ///
    /// [`ErrorCode::InvalidNumber`] at the first byte the DFA rejects, or at
    /// the terminator if the DFA stopped in a non-accepting state.
    pub(crate) fn scan_number(&mut self) -> Result<(NumberKind, BString), ParseError> {
        use NumberState::*;

        let start = self.pos;
        let mut state = Init;
        let mut kind = NumberKind::Int;

        while let Some(byte) = self.peek() {
            if is_terminator(byte) {
                break;
            }

            state = match (state, byte) {
                (Init, b'-') => Sign,
                (Init | Sign, b'0') => Zero,
                (Init | Sign, b'1'..=b'9') | (Integer, b'0'..=b'9') => Integer,
                (Zero | Integer, b'.') => {
                    kind = NumberKind::Double;
                    DecimalPoint
                }
                (DecimalPoint | Fraction, b'0'..=b'9') => Fraction,
                (Zero | Integer | Fraction, b'e' | b'E') => Exponent,
                (Exponent, b'+' | b'-') => ExponentSign,
                (Exponent | ExponentSign | ExponentDigits, b'0'..=b'9') => ExponentDigits,
                _ => {
                    return Err(self.error_at(
                        ErrorCode::InvalidNumber,
                        self.pos,
                        self.pos - start,
                    ));
                }
            };
            self.pos += 1;
        }

        if !state.is_accepting() {
            return Err(self.error_at(ErrorCode::InvalidNumber, self.pos, self.pos - start));
        }

        Ok((kind, self.copy_lexeme(start)?))
    }
}
