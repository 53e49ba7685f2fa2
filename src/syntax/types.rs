//! Type reference readers.

use super::combinators::{attempt, nested, one_of, Attempt};
use super::cursor::Cursor;
use super::lexical::{read_name, symbol};
use crate::ast::{ContainerType, FieldType};

/// A type: `name<K, V>`, `name<T>` or a bare name.
///
/// Container names are not checked against a fixed list; `Foo<Bar>` reads
/// like `list<Bar>`. Only the built-in names have a fixed arity: `map` takes
/// two arguments, `list` and `set` take one. A container that does not close
/// falls back to the bare name.
pub fn read_type<'a>(cursor: &mut Cursor<'a>) -> Attempt<FieldType> {
    let plain = |c: &mut Cursor<'a>| read_name(c).map(FieldType::Named);
    one_of(cursor, "type", &[&read_container_type, &plain])
}

/// `name < T >` or `name < K , V >`. The first argument is read once and the
/// arity is decided by the token after it.
fn read_container_type<'a>(cursor: &mut Cursor<'a>) -> Attempt<FieldType> {
    attempt(cursor, |cursor| {
        let name = read_name(cursor)?;
        symbol(cursor, "<")?;
        nested(cursor, |cursor| {
            let first = read_type(cursor)?;
            if symbol(cursor, ",").is_ok() {
                if name == "list" || name == "set" {
                    return Err(cursor.mismatch("single type argument"));
                }
                let value_type = read_type(cursor)?;
                symbol(cursor, ">")?;
                return Ok(FieldType::Container(ContainerType {
                    name,
                    key_type: Some(Box::new(first)),
                    value_type: Box::new(value_type),
                }));
            }
            if name == "map" {
                return Err(cursor.mismatch("key and value types"));
            }
            symbol(cursor, ">")?;
            Ok(FieldType::Container(ContainerType {
                name,
                key_type: None,
                value_type: Box::new(first),
            }))
        })
    })
}
