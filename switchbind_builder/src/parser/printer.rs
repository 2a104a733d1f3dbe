/// The tokens of a failed bind, rendered with a caret under the offending token.
///
/// ### Example
/// ```
/// # use switchbind_builder as switchbind;
/// use switchbind::ErrorContext;
///
/// let context = ErrorContext::new(1, &["/Count", "abc"]);
/// assert_eq!(context.to_string(), "/Count abc\n       ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// Create an error context pointing at the token at position `offset`.
    /// An `offset` past the final token points just beyond the end of the line.
    pub fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let preceding = std::cmp::min(self.offset, self.tokens.len());
        // Each preceding token is followed by a single space.
        let width: usize = self.tokens[..preceding]
            .iter()
            .map(|token| token.len() + 1)
            .sum();

        write!(f, "{projection}\n{:width$}^", "")
    }
}
