//! Backtracking combinators.
//!
//! Every reader returns an [`Attempt`]. A [`Mismatch`] is an expected,
//! silent outcome: the combinators below inspect it, rewind the cursor and
//! move on. Nothing in this module ever reports an error to the caller of the
//! parser; only the document driver turns a final mismatch into a
//! [`ParseError`](crate::errors::ParseError).

use super::cursor::Cursor;
use std::collections::BTreeMap;

/// A reader did not match at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub offset: usize,
    pub expected: &'static str,
}

pub type Attempt<T> = Result<T, Mismatch>;

/// A borrowed reader usable as a choice alternative.
pub type Alternative<'r, 'a, T> = &'r dyn Fn(&mut Cursor<'a>) -> Attempt<T>;

/// Run `read`; on mismatch rewind to where it started.
pub fn attempt<'a, T>(
    cursor: &mut Cursor<'a>,
    read: impl FnOnce(&mut Cursor<'a>) -> Attempt<T>,
) -> Attempt<T> {
    let start = cursor.snapshot();
    let result = read(cursor);
    if result.is_err() {
        cursor.restore(start);
    }
    result
}

/// Like [`attempt`], but a mismatch simply yields `None`.
pub fn optional<'a, T>(
    cursor: &mut Cursor<'a>,
    read: impl FnOnce(&mut Cursor<'a>) -> Attempt<T>,
) -> Option<T> {
    attempt(cursor, read).ok()
}

/// Run `read` one nesting level deeper. Fails without reading when the
/// cursor is already at its depth limit.
pub fn nested<'a, T>(
    cursor: &mut Cursor<'a>,
    read: impl FnOnce(&mut Cursor<'a>) -> Attempt<T>,
) -> Attempt<T> {
    cursor.descend()?;
    let result = read(cursor);
    cursor.ascend();
    result
}

/// Ordered choice: the first alternative that matches wins.
///
/// Order matters. A reader that accepts a prefix of another reader's input
/// (decimal numbers versus hex or e-notation, one-argument versus
/// two-argument containers) must come after it.
pub fn one_of<'a, T>(
    cursor: &mut Cursor<'a>,
    expected: &'static str,
    alternatives: &[Alternative<'_, 'a, T>],
) -> Attempt<T> {
    let start = cursor.snapshot();
    for alternative in alternatives {
        match alternative(cursor) {
            Ok(value) => return Ok(value),
            Err(_) => cursor.restore(start),
        }
    }
    Err(cursor.mismatch(expected))
}

/// Match `read` as many times as possible. Never fails.
///
/// Stops at the first mismatch (rewinding it) or at an item that matched
/// without consuming input.
pub fn repeat<'a, T>(
    cursor: &mut Cursor<'a>,
    mut read: impl FnMut(&mut Cursor<'a>) -> Attempt<T>,
) -> Vec<T> {
    let mut items = Vec::new();
    loop {
        let start = cursor.snapshot();
        match read(cursor) {
            Ok(item) => {
                items.push(item);
                if cursor.position() == start.offset() {
                    break;
                }
            }
            Err(_) => {
                cursor.restore(start);
                break;
            }
        }
    }
    items
}

/// [`repeat`] into a map keyed by `key`; later items replace earlier ones
/// with the same key.
pub fn repeat_keyed<'a, T>(
    cursor: &mut Cursor<'a>,
    read: impl FnMut(&mut Cursor<'a>) -> Attempt<T>,
    key: impl Fn(&T) -> String,
) -> BTreeMap<String, T> {
    repeat(cursor, read)
        .into_iter()
        .map(|item| (key(&item), item))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
