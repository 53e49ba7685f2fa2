//! Parser configuration.

/// Default width of the unconsumed-text excerpt carried by a parse failure.
pub const DEFAULT_EXCERPT_LEN: usize = 40;

/// Default bound on nested container types and list/map literals.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for [`parse_with_options`](crate::parse_with_options). The defaults
/// parse the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Byte offset to start reading at, for Thrift embedded in larger text.
    pub start_offset: usize,
    /// Maximum bytes of remaining input quoted in a parse failure.
    pub excerpt_len: usize,
    /// Name shown for the source in rendered diagnostics.
    pub source_name: String,
    /// How deeply container types and literals may nest before the parse fails.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            start_offset: 0,
            excerpt_len: DEFAULT_EXCERPT_LEN,
            source_name: "<input>".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn with_excerpt_len(mut self, len: usize) -> Self {
        self.excerpt_len = len;
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
