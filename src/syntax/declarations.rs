//! Declaration readers, one per top-level construct.
//!
//! Each reader is a fixed sequence of sub-reads wrapped in [`attempt`], so a
//! declaration that fails halfway leaves the cursor where it started and the
//! document driver can try the next alternative.

use super::combinators::{attempt, one_of, optional, repeat, repeat_keyed, Attempt};
use super::cursor::Cursor;
use super::lexical::{
    keyword, list_separator, read_integer, read_name, read_scope, read_string, symbol,
};
use super::types::read_type;
use super::values::{read_reference, read_typed_value};
use crate::ast::{
    Const, Declaration, Enum, EnumItem, Field, FieldOption, Function, Include, Namespace, Service,
    Typedef,
};

/// Any of the nine declarations.
pub fn read_declaration<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    one_of(
        cursor,
        "declaration",
        &[
            &read_typedef,
            &read_const,
            &read_enum,
            &read_struct,
            &read_union,
            &read_exception,
            &read_service,
            &read_namespace,
            &read_include,
        ],
    )
}

// ============================================================================
// TYPEDEF & CONST
// ============================================================================

pub fn read_typedef<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "typedef")?;
        let field_type = read_type(cursor)?;
        let name = read_name(cursor)?;
        list_separator(cursor);
        Ok(Declaration::Typedef(name, Typedef { field_type }))
    })
}

/// `const Type Name = Value`. The value must fit the declared type's shape:
/// `map<..>` takes a map literal, `list<..>` and `set<..>` a list literal.
pub fn read_const<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "const")?;
        let field_type = read_type(cursor)?;
        let name = read_name(cursor)?;
        symbol(cursor, "=")?;
        let value = read_typed_value(cursor, field_type.value_shape())?;
        list_separator(cursor);
        Ok(Declaration::Const(name, Const { field_type, value }))
    })
}

// ============================================================================
// ENUM
// ============================================================================

pub fn read_enum<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "enum")?;
        let name = read_name(cursor)?;
        symbol(cursor, "{")?;
        let items = repeat(cursor, read_enum_item);
        symbol(cursor, "}")?;
        list_separator(cursor);
        Ok(Declaration::Enum(name, Enum { items }))
    })
}

fn read_enum_item<'a>(cursor: &mut Cursor<'a>) -> Attempt<EnumItem> {
    attempt(cursor, |cursor| {
        let name = read_name(cursor)?;
        let value = optional(cursor, |cursor| {
            symbol(cursor, "=")?;
            read_integer(cursor)
        });
        list_separator(cursor);
        Ok(EnumItem { name, value })
    })
}

// ============================================================================
// STRUCT, UNION, EXCEPTION
// ============================================================================

pub fn read_struct<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    read_field_block(cursor, "struct", true).map(|(name, fields)| Declaration::Struct(name, fields))
}

/// Union fields may say `required` or `optional`, but the word is dropped.
pub fn read_union<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    read_field_block(cursor, "union", false).map(|(name, fields)| Declaration::Union(name, fields))
}

pub fn read_exception<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    read_field_block(cursor, "exception", true)
        .map(|(name, fields)| Declaration::Exception(name, fields))
}

fn read_field_block<'a>(
    cursor: &mut Cursor<'a>,
    kind: &'static str,
    keep_option: bool,
) -> Attempt<(String, Vec<Field>)> {
    attempt(cursor, |cursor| {
        keyword(cursor, kind)?;
        let name = read_name(cursor)?;
        symbol(cursor, "{")?;
        let fields = repeat(cursor, |cursor| read_field(cursor, keep_option));
        symbol(cursor, "}")?;
        list_separator(cursor);
        Ok((name, fields))
    })
}

/// `[id :] [required | optional] Type Name [= Value] [sep]`
pub fn read_field<'a>(cursor: &mut Cursor<'a>, keep_option: bool) -> Attempt<Field> {
    attempt(cursor, |cursor| {
        let id = optional(cursor, |cursor| {
            let id = read_integer(cursor)?;
            symbol(cursor, ":")?;
            Ok(id)
        });
        let option = optional(cursor, read_field_option);
        let field_type = read_type(cursor)?;
        let name = read_name(cursor)?;
        let default_value = optional(cursor, |cursor| {
            symbol(cursor, "=")?;
            read_typed_value(cursor, field_type.value_shape())
        });
        list_separator(cursor);
        Ok(Field {
            id,
            option: option.filter(|_| keep_option),
            field_type,
            name,
            default_value,
        })
    })
}

fn read_field_option<'a>(cursor: &mut Cursor<'a>) -> Attempt<FieldOption> {
    let required = |c: &mut Cursor<'a>| keyword(c, "required").map(|_| FieldOption::Required);
    let not_required = |c: &mut Cursor<'a>| keyword(c, "optional").map(|_| FieldOption::Optional);
    one_of(cursor, "field option", &[&required, &not_required])
}

// ============================================================================
// SERVICE
// ============================================================================

pub fn read_service<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "service")?;
        let name = read_name(cursor)?;
        let extends = optional(cursor, |cursor| {
            keyword(cursor, "extends")?;
            read_reference(cursor)
        });
        symbol(cursor, "{")?;
        let functions = repeat_keyed(cursor, read_function, |function| function.name.clone());
        symbol(cursor, "}")?;
        list_separator(cursor);
        Ok(Declaration::Service(name, Service { extends, functions }))
    })
}

/// `[oneway] Type Name ( Field* ) [throws ( Field* )] [sep]`. `void` reads as
/// an ordinary type name.
pub fn read_function<'a>(cursor: &mut Cursor<'a>) -> Attempt<Function> {
    attempt(cursor, |cursor| {
        let oneway = optional(cursor, |cursor| keyword(cursor, "oneway")).is_some();
        let return_type = read_type(cursor)?;
        let name = read_name(cursor)?;
        let args = read_field_list(cursor)?;
        let throws = optional(cursor, |cursor| {
            keyword(cursor, "throws")?;
            read_field_list(cursor)
        })
        .unwrap_or_default();
        list_separator(cursor);
        Ok(Function {
            return_type,
            name,
            args,
            throws,
            oneway,
        })
    })
}

fn read_field_list<'a>(cursor: &mut Cursor<'a>) -> Attempt<Vec<Field>> {
    attempt(cursor, |cursor| {
        symbol(cursor, "(")?;
        let fields = repeat(cursor, |cursor| read_field(cursor, true));
        symbol(cursor, ")")?;
        Ok(fields)
    })
}

// ============================================================================
// NAMESPACE & INCLUDE
// ============================================================================

pub fn read_namespace<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "namespace")?;
        let scope = read_scope(cursor)?;
        let service_name = read_reference(cursor)?;
        list_separator(cursor);
        Ok(Declaration::Namespace(scope, Namespace { service_name }))
    })
}

/// `include "path/to/file.thrift"`, keyed by the file's basename without the
/// `.thrift` extension.
pub fn read_include<'a>(cursor: &mut Cursor<'a>) -> Attempt<Declaration> {
    attempt(cursor, |cursor| {
        keyword(cursor, "include")?;
        let path = read_string(cursor)?;
        list_separator(cursor);
        Ok(Declaration::Include(include_key(&path), Include { path }))
    })
}

fn include_key(path: &str) -> String {
    let basename = path.rsplit('/').next().unwrap_or(path);
    basename
        .strip_suffix(".thrift")
        .unwrap_or(basename)
        .to_string()
}

// ============================================================================
// TESTS
// ============================================================================
