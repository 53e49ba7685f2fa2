//! Thrift document tree.
//!
//! Every type here serializes to the JSON shape consumers of the parser rely
//! on: mappings keyed by construct kind and then by declared name, `camelCase`
//! keys, and optional keys omitted rather than emitted as `null`.

use serde::Serialize;
use serde_json::Number;
use std::collections::BTreeMap;

// ============================================================================
// DOCUMENT
// ============================================================================

/// Root of a parsed Thrift source.
///
/// Each construct kind maps declared names to their bodies. A kind that never
/// occurs in the source is left out of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub namespace: BTreeMap<String, Namespace>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub typedef: BTreeMap<String, Typedef>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub include: BTreeMap<String, Include>,
    #[serde(rename = "const", skip_serializing_if = "BTreeMap::is_empty")]
    pub constant: BTreeMap<String, Const>,
    #[serde(rename = "enum", skip_serializing_if = "BTreeMap::is_empty")]
    pub enumeration: BTreeMap<String, Enum>,
    #[serde(rename = "struct", skip_serializing_if = "BTreeMap::is_empty")]
    pub structure: BTreeMap<String, Vec<Field>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub union: BTreeMap<String, Vec<Field>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exception: BTreeMap<String, Vec<Field>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub service: BTreeMap<String, Service>,
}

impl Document {
    /// Insert a declaration under its kind. A later declaration with the same
    /// kind and name replaces the earlier one.
    pub fn insert(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Namespace(scope, body) => {
                self.namespace.insert(scope, body);
            }
            Declaration::Typedef(name, body) => {
                self.typedef.insert(name, body);
            }
            Declaration::Include(key, body) => {
                self.include.insert(key, body);
            }
            Declaration::Const(name, body) => {
                self.constant.insert(name, body);
            }
            Declaration::Enum(name, body) => {
                self.enumeration.insert(name, body);
            }
            Declaration::Struct(name, fields) => {
                self.structure.insert(name, fields);
            }
            Declaration::Union(name, fields) => {
                self.union.insert(name, fields);
            }
            Declaration::Exception(name, fields) => {
                self.exception.insert(name, fields);
            }
            Declaration::Service(name, body) => {
                self.service.insert(name, body);
            }
        }
    }

    /// True when the source contained no declarations at all.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
            && self.typedef.is_empty()
            && self.include.is_empty()
            && self.constant.is_empty()
            && self.enumeration.is_empty()
            && self.structure.is_empty()
            && self.union.is_empty()
            && self.exception.is_empty()
            && self.service.is_empty()
    }
}

/// One top-level construct together with the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Namespace(String, Namespace),
    Typedef(String, Typedef),
    Include(String, Include),
    Const(String, Const),
    Enum(String, Enum),
    Struct(String, Vec<Field>),
    Union(String, Vec<Field>),
    Exception(String, Vec<Field>),
    Service(String, Service),
}

impl Declaration {
    /// The construct-kind tag used as the first-level key of a [`Document`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Namespace(..) => "namespace",
            Self::Typedef(..) => "typedef",
            Self::Include(..) => "include",
            Self::Const(..) => "const",
            Self::Enum(..) => "enum",
            Self::Struct(..) => "struct",
            Self::Union(..) => "union",
            Self::Exception(..) => "exception",
            Self::Service(..) => "service",
        }
    }

    /// The second-level key: declared name, namespace scope or include key.
    pub fn name(&self) -> &str {
        match self {
            Self::Namespace(name, _)
            | Self::Typedef(name, _)
            | Self::Include(name, _)
            | Self::Const(name, _)
            | Self::Enum(name, _)
            | Self::Struct(name, _)
            | Self::Union(name, _)
            | Self::Exception(name, _)
            | Self::Service(name, _) => name,
        }
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// A type reference: either a bare name or a container descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldType {
    Named(String),
    Container(ContainerType),
}

impl FieldType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Two-argument containers (`map<K, V>`) take map literals, one-argument
    /// containers take list literals, and plain names take anything.
    pub fn value_shape(&self) -> ValueShape {
        match self {
            Self::Named(_) => ValueShape::Any,
            Self::Container(container) if container.key_type.is_some() => ValueShape::Map,
            Self::Container(_) => ValueShape::List,
        }
    }
}

/// `map<K, V>`, `list<T>`, `set<T>` and any other `name<...>` container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<Box<FieldType>>,
    pub value_type: Box<FieldType>,
}

/// Which literal form a declared type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Any,
    List,
    Map,
}

// ============================================================================
// VALUES
// ============================================================================

/// A literal value from a const declaration or a field default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstValue {
    Number(Number),
    String(String),
    Bool(bool),
    List(Vec<ConstValue>),
    Map(Vec<MapEntry>),
    /// Dotted reference to another constant or an enum member.
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapEntry {
    pub key: ConstValue,
    pub value: ConstValue,
}

// ============================================================================
// DECLARATION BODIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOption {
    Required,
    Optional,
}

/// A member of a struct, union or exception, or a function argument / throws entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<FieldOption>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConstValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namespace {
    #[serde(rename = "serviceName")]
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Include {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typedef {
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Const {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: ConstValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub items: Vec<EnumItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub functions: BTreeMap<String, Function>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    #[serde(rename = "type")]
    pub return_type: FieldType,
    pub name: String,
    pub args: Vec<Field>,
    pub throws: Vec<Field>,
    pub oneway: bool,
}

// ============================================================================
// TESTS
// ============================================================================
