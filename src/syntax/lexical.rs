//! Lexical readers.
//!
//! There is no token stream: each reader inspects bytes at the cursor,
//! consumes its token and then skips trailing whitespace and comments, so
//! every reader can assume it starts on meaningful input.

use super::combinators::{attempt, one_of, Attempt};
use super::cursor::Cursor;
use serde_json::Number;

/// Characters allowed in names. `.` is included so dotted identifiers such
/// as `shared.Thing` read as a single name.
pub fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

fn is_scope_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'*'
}

fn is_space_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

// ============================================================================
// WHITESPACE & COMMENTS
// ============================================================================

/// Skip any interleaving of whitespace, `/* */` block comments and `#` or
/// `//` line comments.
///
/// An unterminated block comment is left in place; the reader after it
/// fails on the `/*` and the parse reports it.
pub fn skip_space(cursor: &mut Cursor<'_>) {
    loop {
        cursor.advance_while(is_space_byte);

        if cursor.starts_with("/*") {
            let body = &cursor.source()[cursor.position() + 2..];
            match body.find("*/") {
                Some(end) => {
                    cursor.advance(2 + end + 2);
                    continue;
                }
                None => return,
            }
        }

        if cursor.starts_with("//") || cursor.starts_with("#") {
            cursor.advance_while(|b| b != b'\n' && b != b'\r');
            continue;
        }

        return;
    }
}

// ============================================================================
// KEYWORDS, PUNCTUATION, SEPARATORS
// ============================================================================

/// Match `word` exactly. A word ending in a letter must not run on into a
/// longer name: `oneway_count` is not the keyword `oneway`.
pub fn keyword(cursor: &mut Cursor<'_>, word: &'static str) -> Attempt<&'static str> {
    if !cursor.starts_with(word) {
        return Err(cursor.mismatch(word));
    }
    let ends_in_letter = word.bytes().last().is_some_and(|b| b.is_ascii_alphabetic());
    if ends_in_letter && cursor.peek_at(word.len()).is_some_and(is_name_byte) {
        return Err(cursor.mismatch(word));
    }
    cursor.advance(word.len());
    skip_space(cursor);
    Ok(word)
}

/// Match a single punctuation token such as `{` or `=`.
pub fn symbol(cursor: &mut Cursor<'_>, punct: &'static str) -> Attempt<()> {
    if !cursor.starts_with(punct) {
        return Err(cursor.mismatch(punct));
    }
    cursor.advance(punct.len());
    skip_space(cursor);
    Ok(())
}

/// Consume an optional `,` or `;` list separator.
pub fn list_separator(cursor: &mut Cursor<'_>) {
    if matches!(cursor.peek(), Some(b',' | b';')) {
        cursor.advance(1);
        skip_space(cursor);
    }
}

// ============================================================================
// NAMES
// ============================================================================

pub fn read_name(cursor: &mut Cursor<'_>) -> Attempt<String> {
    read_run(cursor, is_name_byte, "identifier")
}

/// Namespace scope: a language tag such as `cpp` or the wildcard `*`.
pub fn read_scope(cursor: &mut Cursor<'_>) -> Attempt<String> {
    read_run(cursor, is_scope_byte, "namespace scope")
}

fn read_run(
    cursor: &mut Cursor<'_>,
    accept: fn(u8) -> bool,
    expected: &'static str,
) -> Attempt<String> {
    let start = cursor.snapshot();
    if cursor.advance_while(accept) == 0 {
        return Err(cursor.mismatch(expected));
    }
    let text = cursor.slice_from(start).to_string();
    skip_space(cursor);
    Ok(text)
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Any numeric literal. Hex and e-notation go first: the decimal reader
/// would otherwise stop inside them at the `x` or `e`.
pub fn read_number<'a>(cursor: &mut Cursor<'a>) -> Attempt<Number> {
    one_of(
        cursor,
        "number",
        &[&read_hex_number, &read_exponent_number, &read_decimal_number],
    )
}

/// `[+-]?0[xX][0-9A-Fa-f]+`
///
/// Values are not limited to `i64`: up to 64 bits of magnitude stay integral
/// (`0xFFFFFFFFFFFFFFFF`, `-0x8000000000000000`) and anything wider becomes
/// a float, so the literal is always read as one token.
pub fn read_hex_number<'a>(cursor: &mut Cursor<'a>) -> Attempt<Number> {
    attempt(cursor, |cursor| {
        let (negative, digits) = scan_hex(cursor)?;
        let number = match u64::from_str_radix(digits, 16) {
            Ok(magnitude) if !negative => Some(Number::from(magnitude)),
            Ok(magnitude) => match i64::try_from(-i128::from(magnitude)) {
                Ok(value) => Some(Number::from(value)),
                Err(_) => Number::from_f64(-(magnitude as f64)),
            },
            Err(_) => {
                let magnitude = digits
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .fold(0.0_f64, |acc, digit| acc * 16.0 + f64::from(digit));
                number_from_f64(if negative { -magnitude } else { magnitude })
            }
        };
        let number = number.ok_or_else(|| cursor.mismatch("hexadecimal literal"))?;
        skip_space(cursor);
        Ok(number)
    })
}

/// `[+-]?[0-9.]+[eE][0-9]+`
pub fn read_exponent_number<'a>(cursor: &mut Cursor<'a>) -> Attempt<Number> {
    attempt(cursor, |cursor| {
        let start = cursor.snapshot();
        read_sign(cursor);
        if cursor.advance_while(|b| b.is_ascii_digit() || b == b'.') == 0 {
            return Err(cursor.mismatch("number"));
        }
        if !matches!(cursor.peek(), Some(b'e' | b'E')) {
            return Err(cursor.mismatch("exponent"));
        }
        cursor.advance(1);
        if cursor.advance_while(|b| b.is_ascii_digit()) == 0 {
            return Err(cursor.mismatch("exponent digits"));
        }
        let text = cursor.slice_from(start);
        let number = text
            .parse::<f64>()
            .ok()
            .and_then(number_from_f64)
            .ok_or_else(|| cursor.mismatch("number"))?;
        skip_space(cursor);
        Ok(number)
    })
}

/// `[+-]?[0-9.]+`
pub fn read_decimal_number<'a>(cursor: &mut Cursor<'a>) -> Attempt<Number> {
    attempt(cursor, |cursor| {
        let start = cursor.snapshot();
        read_sign(cursor);
        if cursor.advance_while(|b| b.is_ascii_digit() || b == b'.') == 0 {
            return Err(cursor.mismatch("number"));
        }
        if cursor.peek().is_some_and(is_name_byte) {
            return Err(cursor.mismatch("end of number"));
        }
        let text = cursor.slice_from(start);
        let number = match text.parse::<i64>() {
            Ok(int) => Some(Number::from(int)),
            Err(_) => text.parse::<f64>().ok().and_then(number_from_f64),
        };
        let number = number.ok_or_else(|| cursor.mismatch("number"))?;
        skip_space(cursor);
        Ok(number)
    })
}

/// Signed integer, decimal or hex. Used for field ids and enum values,
/// where fractions and exponents are not allowed: the digits must not run on
/// into a name character, so `1.5` and `1e2` are rejected whole.
pub fn read_integer<'a>(cursor: &mut Cursor<'a>) -> Attempt<i64> {
    let decimal = |cursor: &mut Cursor<'a>| {
        let start = cursor.snapshot();
        read_sign(cursor);
        if cursor.advance_while(|b| b.is_ascii_digit()) == 0 {
            return Err(cursor.mismatch("integer"));
        }
        if cursor.peek().is_some_and(is_name_byte) {
            return Err(cursor.mismatch("end of integer"));
        }
        let value = cursor
            .slice_from(start)
            .parse::<i64>()
            .map_err(|_| cursor.mismatch("integer"))?;
        skip_space(cursor);
        Ok(value)
    };
    one_of(cursor, "integer", &[&read_hex_integer, &decimal])
}

fn read_hex_integer<'a>(cursor: &mut Cursor<'a>) -> Attempt<i64> {
    let (negative, digits) = scan_hex(cursor)?;
    let magnitude =
        i64::from_str_radix(digits, 16).map_err(|_| cursor.mismatch("hexadecimal literal"))?;
    skip_space(cursor);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Sign, `0x` prefix and digits of a hex literal that ends on a word boundary.
fn scan_hex<'a>(cursor: &mut Cursor<'a>) -> Attempt<(bool, &'a str)> {
    let negative = read_sign(cursor);
    if cursor.peek() != Some(b'0') || !matches!(cursor.peek_at(1), Some(b'x' | b'X')) {
        return Err(cursor.mismatch("hexadecimal literal"));
    }
    cursor.advance(2);
    let start = cursor.snapshot();
    if cursor.advance_while(|b| b.is_ascii_hexdigit()) == 0 {
        return Err(cursor.mismatch("hexadecimal digits"));
    }
    if cursor.peek().is_some_and(is_name_byte) {
        return Err(cursor.mismatch("end of integer"));
    }
    Ok((negative, cursor.slice_from(start)))
}

/// Consume an optional `+` or `-`; returns true for `-`.
fn read_sign(cursor: &mut Cursor<'_>) -> bool {
    match cursor.peek() {
        Some(b'-') => {
            cursor.advance(1);
            true
        }
        Some(b'+') => {
            cursor.advance(1);
            false
        }
        _ => false,
    }
}

/// Whole values inside the exactly representable range become integers so
/// `2.147483647e9` serializes as `2147483647`.
fn number_from_f64(value: f64) -> Option<Number> {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

// ============================================================================
// STRINGS & BOOLEANS
// ============================================================================

/// Quoted literal. Opens with `"` or `'` and closes only on the same quote.
/// A backslash protects the next byte while scanning; escapes are decoded
/// afterwards by [`unescape`].
pub fn read_string<'a>(cursor: &mut Cursor<'a>) -> Attempt<String> {
    attempt(cursor, |cursor| {
        let quote = match cursor.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(cursor.mismatch("string literal")),
        };
        cursor.advance(1);
        let start = cursor.snapshot();
        loop {
            match cursor.peek() {
                None => return Err(cursor.mismatch("closing quote")),
                Some(b'\\') => cursor.advance(2),
                Some(b) if b == quote => break,
                Some(_) => cursor.advance(1),
            }
        }
        let body = cursor.slice_from(start);
        let value = unescape(body).ok_or_else(|| cursor.mismatch("valid escape sequence"))?;
        cursor.advance(1);
        skip_space(cursor);
        Ok(value)
    })
}

/// Decode backslash escapes the way a quoted string literal resolves them.
/// Unknown escapes stand for the escaped character itself; malformed `\x`
/// and `\u` sequences yield `None`.
pub fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => out.push(hex_char(&mut chars, 2)?),
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let digits: String = chars.by_ref().take_while(|&c| c != '}').collect();
                let code = u32::from_str_radix(&digits, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            'u' => out.push(hex_char(&mut chars, 4)?),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' => {}
            other => out.push(other),
        }
    }
    Some(out)
}

fn hex_char(chars: &mut impl Iterator<Item = char>, len: usize) -> Option<char> {
    let digits: String = chars.take(len).collect();
    if digits.len() != len {
        return None;
    }
    char::from_u32(u32::from_str_radix(&digits, 16).ok()?)
}

pub fn read_bool<'a>(cursor: &mut Cursor<'a>) -> Attempt<bool> {
    let yes = |cursor: &mut Cursor<'a>| keyword(cursor, "true").map(|_| true);
    let no = |cursor: &mut Cursor<'a>| keyword(cursor, "false").map(|_| false);
    one_of(cursor, "boolean", &[&yes, &no])
}

// ============================================================================
// TESTS
// ============================================================================
