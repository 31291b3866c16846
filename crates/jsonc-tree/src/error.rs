use alloc::collections::TryReserveError;

use thiserror::Error;

/// The reason a parse failed.
///
/// A successful parse is represented by `Ok`, so there is no "no error" code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A backslash in a string was followed by a character outside the escape
    /// set `" \ / b f n r t u`.
    #[error("invalid control sequence")]
    InvalidControlSequence,
    /// A `\u` escape was cut short by the end of the buffer.
    #[error("four hexadecimal digits required")]
    HexDigitsRequired,
    /// A `\u` escape contained a byte that is not a hexadecimal digit.
    #[error("invalid hexadecimal digit")]
    InvalidHexDigit,
    /// A byte that is not allowed in the current parser state.
    #[error("unexpected token")]
    UnexpectedToken,
    /// A keyword literal ran straight into further identifier characters.
    #[error("unexpected expression")]
    UnexpectedExpression,
    /// The buffer ended before the root value was complete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A malformed number lexeme.
    #[error("invalid number")]
    InvalidNumber,
    /// An allocation on the parse path failed.
    #[error("out of memory")]
    OutOfMemory,
    /// Containers were nested deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
}

/// A failed parse, with the location of the offending byte.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code} at line {line}, byte {position}")]
pub struct ParseError {
    /// What went wrong.
    pub code: ErrorCode,
    /// 1-based line number, advanced on every consumed `'\n'`.
    pub line: usize,
    /// 0-based byte offset of the offending byte (the buffer length when the
    /// input ran out).
    pub position: usize,
    /// Length of the lexeme consumed before a lexical error, 0 otherwise.
    pub length: usize,
}

/// Errors raised by [`Map`](crate::Map) and [`Array`](crate::Array).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Growing the backing storage failed or its size overflowed.
    #[error("out of memory")]
    OutOfMemory,
}

impl From<TryReserveError> for CollectionError {
    fn from(_: TryReserveError) -> Self {
        CollectionError::OutOfMemory
    }
}

impl From<CollectionError> for ErrorCode {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::OutOfMemory => ErrorCode::OutOfMemory,
        }
    }
}
