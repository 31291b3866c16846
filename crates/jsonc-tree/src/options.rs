/// Configuration options for [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```rust
/// use jsonc_tree::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     allow_trailing_content: true,
///     ..Default::default()
/// };
/// let root = parse_with_options(b"[1] trailing garbage", options).unwrap();
/// assert!(root.is_array());
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether `//` line comments and `/* */` block comments are skipped
    /// like whitespace.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_comments: bool,

    /// Whether bytes after the root container's closing bracket are ignored.
    ///
    /// When `false`, only whitespace (and comments, if allowed) may follow
    /// the root; anything else is an [`UnexpectedToken`] error. When `true`,
    /// parsing stops at the closing bracket and the rest of the buffer is
    /// never inspected.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`UnexpectedToken`]: crate::ErrorCode::UnexpectedToken
    pub allow_trailing_content: bool,

    /// Maximum container nesting depth. The root container is depth 1.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    /// Initial capacity of every parsed array.
    ///
    /// # Default
    ///
    /// `1`
    pub array_capacity: usize,

    /// Factor by which a parsed array's capacity grows when full.
    ///
    /// # Default
    ///
    /// `2`
    pub array_growth_factor: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_content: false,
            max_depth: 128,
            array_capacity: 1,
            array_growth_factor: 2,
        }
    }
}
