//! Recursive-descent parser that builds a [`Value`] tree from a byte buffer.
//!
//! Each container (object or array) is driven by its own run of the
//! [`ParseState`] automaton. Nested containers recurse with the same
//! [`Scanner`], so cursor, line and error location are shared by every frame
//! of one parse.
//!
//! Children are moved into their parent's [`Map`] or [`Array`] as soon as
//! they are complete. When any frame fails, the error is returned with `?`
//! and every partially built container on the call stack is dropped on the
//! way out, so a failed parse never leaks or returns a partial tree.
//!
//! # Examples
//!
//! ```rust
//! use jsonc_tree::{ValueKind, parse, path};
//!
//! let root = parse(br#"{"a":1,"b":[true,false,null]}"#).unwrap();
//! assert_eq!(root.as_object().unwrap().len(), 2);
//! assert_eq!(root.get_path(&path!["a"]).unwrap().as_lexeme().unwrap(), "1");
//! assert_eq!(root.get_path(&path!["b", 2]).unwrap().kind(), ValueKind::Null);
//! ```

use bstr::BString;

use crate::{
    ParserOptions,
    collections::{Array, Map},
    error::{ErrorCode, ParseError},
    scanner::{Keyword, NumberKind, Scanner},
    value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    ObjectKeyOrEnd,
    ObjectKey,
    ObjectColon,
    ObjectValue,
    ObjectNext,
    ArrayValueOrEnd,
    ArrayValue,
    ArrayNext,
    End,
}

/// The container under construction in one parser frame.
enum Container {
    Object(Map<Value>),
    Array(Array<Value>),
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::Object(map) => Value::Object(map),
            Container::Array(array) => Value::Array(array),
        }
    }
}

struct Parser<'src> {
    scanner: Scanner<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(input, options.allow_comments),
            options,
            depth: 0,
        }
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        let root = self.parse_container()?;

        if !self.options.allow_trailing_content && self.scanner.skip_insignificant()?.is_some() {
            return Err(self.scanner.error(ErrorCode::UnexpectedToken));
        }

        Ok(root)
    }

    /// Next significant byte; running out of input here is always an error
    /// because some container is still open.
    fn next_significant(&mut self) -> Result<u8, ParseError> {
        self.scanner
            .skip_insignificant()?
            .ok_or_else(|| self.scanner.error(ErrorCode::UnexpectedEndOfInput))
    }

    fn parse_container(&mut self) -> Result<Value, ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.scanner.error(ErrorCode::DepthLimitExceeded));
        }
        let result = self.run_container();
        self.depth -= 1;
        result
    }

    /// `Start`: opens the container at the cursor.
    fn open(&mut self) -> Result<(Container, ParseState), ParseError> {
        let opened = match self.next_significant()? {
            b'{' => {
                let map = Map::try_new().map_err(|err| self.scanner.error(err.into()))?;
                (Container::Object(map), ParseState::ObjectKeyOrEnd)
            }
            b'[' => {
                let array =
                    Array::try_with_growth(self.options.array_capacity, self.options.array_growth_factor)
                        .map_err(|err| self.scanner.error(err.into()))?;
                (Container::Array(array), ParseState::ArrayValueOrEnd)
            }
            _ => return Err(self.scanner.error(ErrorCode::UnexpectedToken)),
        };
        self.scanner.bump();
        log::trace!("{:?} -> {:?} (depth {})", ParseState::Start, opened.1, self.depth);
        Ok(opened)
    }

    fn run_container(&mut self) -> Result<Value, ParseError> {
        let (mut container, mut state) = self.open()?;
        let mut key: Option<BString> = None;

        while state != ParseState::End {
            let byte = self.next_significant()?;

            let next = match (state, &mut container, byte) {
                (ParseState::ObjectKeyOrEnd | ParseState::ObjectNext, Container::Object(_), b'}')
                | (ParseState::ArrayValueOrEnd | ParseState::ArrayNext, Container::Array(_), b']') => {
                    self.scanner.bump();
                    ParseState::End
                }

                (ParseState::ObjectKeyOrEnd | ParseState::ObjectKey, Container::Object(_), b'"') => {
                    key = Some(self.scanner.scan_string()?);
                    ParseState::ObjectColon
                }

                (ParseState::ObjectColon, Container::Object(_), b':') => {
                    self.scanner.bump();
                    ParseState::ObjectValue
                }

                (ParseState::ObjectValue, Container::Object(map), _) => {
                    let value = self.parse_value(byte)?;
                    let replaced = map
                        .insert(key.take().unwrap_or_default(), value)
                        .map_err(|err| self.scanner.error(err.into()))?;
                    // A duplicate key keeps the later value.
                    drop(replaced);
                    ParseState::ObjectNext
                }

                (ParseState::ArrayValueOrEnd | ParseState::ArrayValue, Container::Array(array), _) => {
                    let value = self.parse_value(byte)?;
                    array
                        .push(value)
                        .map_err(|err| self.scanner.error(err.into()))?;
                    ParseState::ArrayNext
                }

                (ParseState::ObjectNext, Container::Object(_), b',') => {
                    self.scanner.bump();
                    ParseState::ObjectKey
                }

                (ParseState::ArrayNext, Container::Array(_), b',') => {
                    self.scanner.bump();
                    ParseState::ArrayValue
                }

                _ => return Err(self.scanner.error(ErrorCode::UnexpectedToken)),
            };

            log::trace!("{state:?} -> {next:?} (depth {})", self.depth);
            state = next;
        }

        Ok(container.into_value())
    }

    /// Parses the value starting with `byte`, which is at the cursor.
    fn parse_value(&mut self, byte: u8) -> Result<Value, ParseError> {
        match byte {
            b'{' | b'[' => self.parse_container(),
            b'"' => Ok(Value::String(self.scanner.scan_string()?)),
            b'-' | b'+' | b'.' | b'0'..=b'9' => {
                let (kind, lexeme) = self.scanner.scan_number()?;
                Ok(match kind {
                    NumberKind::Int => Value::Int(lexeme),
                    NumberKind::Double => Value::Double(lexeme),
                })
            }
            _ => match Keyword::from_first(byte) {
                Some(keyword) => {
                    self.scanner.scan_keyword(keyword)?;
                    Ok(keyword.value())
                }
                None => Err(self.scanner.error(ErrorCode::UnexpectedToken)),
            },
        }
    }
}

/// Parses `input` with the default [`ParserOptions`].
///
/// The root must be an object or an array. Comments (`//` and `/* */`) may
/// appear anywhere whitespace may.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is returned.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses `input` with explicit options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is returned.
pub fn parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParseError> {
    let input = input.as_ref();
    log::debug!("parsing {} bytes", input.len());

    let result = Parser::new(input, options).parse_root();
    match &result {
        Ok(root) => log::debug!("parsed {:?} root", root.kind()),
        Err(err) => log::debug!("parse failed: {err}"),
    }
    result
}
