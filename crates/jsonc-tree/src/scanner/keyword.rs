use super::Scanner;
use crate::error::{ErrorCode, ParseError};

/// One of the fixed literals `true`, `false`, `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    /// The literal a value starting with `first` would have to be.
    pub(crate) fn from_first(first: u8) -> Option<Self> {
        match first {
            b't' => Some(Keyword::True),
            b'f' => Some(Keyword::False),
            b'n' => Some(Keyword::Null),
            _ => None,
        }
    }

    pub(crate) fn text(self) -> &'static [u8] {
        match self {
            Keyword::True => b"true",
            Keyword::False => b"false",
            Keyword::Null => b"null",
        }
    }
}

impl Scanner<'_> {
    /// Matches `keyword` as an exact byte sequence at the cursor.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::UnexpectedEndOfInput`] if the buffer ends part-way
    ///   through the literal.
    /// - [`ErrorCode::UnexpectedToken`] if the bytes differ.
    /// - [`ErrorCode::UnexpectedExpression`] if the literal runs straight
    ///   into an identifier character, as in `truex`.
    pub(crate) fn scan_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        let text = keyword.text();
        let rest = &self.input[self.pos..];

        if !rest.starts_with(text) {
            let code = if text.starts_with(rest) {
                ErrorCode::UnexpectedEndOfInput
            } else {
                ErrorCode::UnexpectedToken
            };
            let matched = rest.iter().zip(text).take_while(|(a, b)| a == b).count();
            return Err(self.error_at(code, self.pos + matched, matched));
        }

        if rest
            .get(text.len())
            .is_some_and(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
        {
            return Err(self.error_at(ErrorCode::UnexpectedExpression, self.pos, text.len()));
        }

        self.pos += text.len();
        Ok(())
    }
}
