//! Literal value readers: numbers, strings, booleans, list and map literals
//! and dotted references.

use super::combinators::{attempt, nested, one_of, repeat, Attempt};
use super::cursor::Cursor;
use super::lexical::{
    list_separator, read_bool, read_decimal_number, read_exponent_number, read_hex_number,
    read_name, read_string, symbol,
};
use crate::ast::{ConstValue, MapEntry, ValueShape};

/// Any literal value.
///
/// The numeric readers keep their hex, e-notation, decimal order, and the
/// reference reader comes last because it accepts nearly anything
/// name-shaped.
pub fn read_value<'a>(cursor: &mut Cursor<'a>) -> Attempt<ConstValue> {
    let hex = |c: &mut Cursor<'a>| read_hex_number(c).map(ConstValue::Number);
    let exponent = |c: &mut Cursor<'a>| read_exponent_number(c).map(ConstValue::Number);
    let decimal = |c: &mut Cursor<'a>| read_decimal_number(c).map(ConstValue::Number);
    let string = |c: &mut Cursor<'a>| read_string(c).map(ConstValue::String);
    let boolean = |c: &mut Cursor<'a>| read_bool(c).map(ConstValue::Bool);
    let reference = |c: &mut Cursor<'a>| read_reference(c).map(ConstValue::Identifier);
    one_of(
        cursor,
        "value",
        &[
            &hex,
            &exponent,
            &decimal,
            &string,
            &boolean,
            &read_list_value,
            &read_map_value,
            &reference,
        ],
    )
}

/// A value read against a declared type: containers only accept the
/// matching literal form.
pub fn read_typed_value<'a>(cursor: &mut Cursor<'a>, shape: ValueShape) -> Attempt<ConstValue> {
    match shape {
        ValueShape::Any => read_value(cursor),
        ValueShape::List => read_list_value(cursor),
        ValueShape::Map => read_map_value(cursor),
    }
}

/// `[ value (sep value)* sep? ]`
pub fn read_list_value<'a>(cursor: &mut Cursor<'a>) -> Attempt<ConstValue> {
    attempt(cursor, |cursor| {
        symbol(cursor, "[")?;
        nested(cursor, |cursor| {
            let items = repeat(cursor, |cursor| {
                let value = read_value(cursor)?;
                list_separator(cursor);
                Ok(value)
            });
            symbol(cursor, "]")?;
            Ok(ConstValue::List(items))
        })
    })
}

/// `{ key : value (sep key : value)* sep? }`
pub fn read_map_value<'a>(cursor: &mut Cursor<'a>) -> Attempt<ConstValue> {
    attempt(cursor, |cursor| {
        symbol(cursor, "{")?;
        nested(cursor, |cursor| {
            let entries = repeat(cursor, |cursor| {
                let key = read_value(cursor)?;
                symbol(cursor, ":")?;
                let value = read_value(cursor)?;
                list_separator(cursor);
                Ok(MapEntry { key, value })
            });
            symbol(cursor, "}")?;
            Ok(ConstValue::Map(entries))
        })
    })
}

/// Dotted reference such as `Color.RED` or `shared.Base`. Dots are already
/// name characters, so this also joins parts separated by whitespace
/// (`shared . Base`).
pub fn read_reference<'a>(cursor: &mut Cursor<'a>) -> Attempt<String> {
    attempt(cursor, |cursor| {
        let mut path = read_name(cursor)?;
        let rest = repeat(cursor, |cursor| {
            symbol(cursor, ".")?;
            read_name(cursor)
        });
        for part in rest {
            path.push('.');
            path.push_str(&part);
        }
        Ok(path)
    })
}

// ============================================================================
// TESTS
// ============================================================================
