//! Byte cursor over the source buffer.
//!
//! The cursor is the only mutable parse state. Readers advance it, combinators
//! snapshot and restore it, and it keeps a note of the furthest point any
//! reader failed at so the driver can explain a failed parse.

use super::combinators::Mismatch;
use crate::options::DEFAULT_MAX_DEPTH;

/// Saved cursor position, restored verbatim on backtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

impl Snapshot {
    pub fn offset(self) -> usize {
        self.0
    }
}

/// The furthest failure seen so far: byte offset and what was expected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Furthest {
    pub offset: usize,
    pub expected: &'static str,
}

pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    furthest: Option<Furthest>,
    depth: usize,
    max_depth: usize,
    too_deep: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Start reading at `offset`, clamped to the end of the source and moved
    /// back onto a char boundary.
    pub fn at(source: &'a str, offset: usize) -> Self {
        let mut pos = offset.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        Self {
            source,
            pos,
            furthest: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            too_deep: None,
        }
    }

    /// Limit how deeply containers and literals may nest.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte at the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `offset` positions ahead of the cursor.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    /// Whether the input at the cursor starts with `literal`.
    pub fn starts_with(&self, literal: &str) -> bool {
        self.source.as_bytes()[self.pos..].starts_with(literal.as_bytes())
    }

    /// Move forward `count` bytes, never past the end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.source.len());
    }

    /// Consume bytes while `predicate` holds and return how many were consumed.
    pub fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !predicate(byte) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.pos)
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.0;
    }

    /// Source text between a snapshot and the current position.
    pub fn slice_from(&self, snapshot: Snapshot) -> &'a str {
        &self.source[snapshot.0..self.pos]
    }

    /// Up to `len` bytes of unconsumed input, cut back to a char boundary.
    pub fn excerpt(&self, len: usize) -> &'a str {
        let mut end = (self.pos + len).min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        &self.source[self.pos..end]
    }

    /// Build a mismatch at the current position and remember it if it is the
    /// furthest failure so far. Earlier failures at the same offset win.
    pub fn mismatch(&mut self, expected: &'static str) -> Mismatch {
        let offset = self.pos;
        match self.furthest {
            Some(f) if f.offset >= offset => {}
            _ => self.furthest = Some(Furthest { offset, expected }),
        }
        Mismatch { offset, expected }
    }

    pub fn furthest(&self) -> Option<Furthest> {
        self.furthest
    }

    /// Enter one nesting level. Past the limit this is a mismatch, and the
    /// first offset where that happened is kept for the error report.
    pub fn descend(&mut self) -> Result<(), Mismatch> {
        if self.depth >= self.max_depth {
            self.too_deep.get_or_insert(self.pos);
            return Err(self.mismatch("shallower nesting"));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Offset where nesting first went past the limit, if it ever did.
    pub fn too_deep(&self) -> Option<usize> {
        self.too_deep
    }
}

// ============================================================================
// TESTS
// ============================================================================
