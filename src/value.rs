//! The value model: a closed, twelve-variant tagged sum covering the same
//! domain as JSON plus bytes, timestamps, reference ids, structs and sums.
//!
//! Containers own their children outright (`Vec<Value>`, `ObjectMap`); there
//! is no shared ownership and no possibility of a cycle, so the tree is
//! strict by construction. Accessors never panic — a call against the wrong
//! variant returns the sentinel documented on the method, matching the
//! "never fail loudly" discipline of the canonicalizer itself.

use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered string-keyed map backing Map/Struct payloads. Order is
/// not observable in canonical form (the writer always sorts keys), but
/// preserving it keeps JSON serialization and debug output stable and
/// matches how `get`/`set` are expected to behave during construction.
pub type ObjectMap = IndexMap<String, Value>;

/// A GLYPH value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// Milliseconds since the Unix epoch, UTC.
    Time(i64),
    /// A reference identifier. `prefix` is empty when absent.
    Id { prefix: String, value: String },
    List(Vec<Value>),
    /// Unique keys; last `map_set` for a given key wins (see design notes on
    /// duplicate-key handling).
    Map(ObjectMap),
    Struct {
        name: String,
        fields: ObjectMap,
    },
    Sum {
        tag: String,
        value: Option<Box<Value>>,
    },
}

/// The twelve value kinds, for type queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Time,
    Id,
    List,
    Map,
    Struct,
    Sum,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::Bytes => "bytes",
            Kind::Time => "time",
            Kind::Id => "id",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Sum => "sum",
        };
        f.write_str(name)
    }
}

impl Value {
    // ---- constructors -----------------------------------------------

    pub fn null() -> Value {
        Value::Null
    }

    pub fn bool(b: bool) -> Value {
        Value::Bool(b)
    }

    pub fn int(n: i64) -> Value {
        Value::Int(n)
    }

    pub fn float(x: f64) -> Value {
        Value::Float(x)
    }

    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn bytes(buf: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(buf.into())
    }

    pub fn time(millis_since_epoch: i64) -> Value {
        Value::Time(millis_since_epoch)
    }

    /// `prefix` of `None` or `Some("")` is treated as absent.
    pub fn id(prefix: Option<&str>, value: impl Into<String>) -> Value {
        Value::Id {
            prefix: prefix.unwrap_or("").to_string(),
            value: value.into(),
        }
    }

    pub fn list() -> Value {
        Value::List(Vec::new())
    }

    pub fn map() -> Value {
        Value::Map(ObjectMap::new())
    }

    pub fn r#struct(name: impl Into<String>) -> Value {
        Value::Struct {
            name: name.into(),
            fields: ObjectMap::new(),
        }
    }

    pub fn sum(tag: impl Into<String>, inner: Option<Value>) -> Value {
        Value::Sum {
            tag: tag.into(),
            value: inner.map(Box::new),
        }
    }

    // ---- appenders (ownership of `item`/`value` transfers in) -------

    /// No-op if `self` is not a [`Value::List`].
    pub fn list_push(&mut self, item: Value) {
        if let Value::List(items) = self {
            items.push(item);
        }
    }

    /// Overwrites any existing entry for `key` (last write wins). No-op if
    /// `self` is not a [`Value::Map`].
    pub fn map_set(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Map(entries) = self {
            entries.insert(key.into(), value);
        }
    }

    /// Overwrites any existing field named `key`. No-op if `self` is not a
    /// [`Value::Struct`].
    pub fn struct_set(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Struct { fields, .. } = self {
            fields.insert(key.into(), value);
        }
    }

    // ---- type query ---------------------------------------------------

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Bytes(_) => Kind::Bytes,
            Value::Time(_) => Kind::Time,
            Value::Id { .. } => Kind::Id,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Struct { .. } => Kind::Struct,
            Value::Sum { .. } => Kind::Sum,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    // ---- typed accessors (sentinel on mismatch) ------------------------

    pub fn as_bool(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(x) => *x,
            _ => 0.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::Str(s) => s.as_str(),
            _ => "",
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Value::Bytes(b) => b.as_slice(),
            _ => &[],
        }
    }

    pub fn as_time(&self) -> i64 {
        match self {
            Value::Time(t) => *t,
            _ => 0,
        }
    }

    /// Number of elements (List), entries (Map), or fields (Struct). `0` for
    /// any other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::List(items) => items.len(),
            Value::Map(entries) => entries.len(),
            Value::Struct { fields, .. } => fields.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List indexing; `None` out of range or not a List.
    pub fn get_index(&self, i: usize) -> Option<&Value> {
        match self {
            Value::List(items) => items.get(i),
            _ => None,
        }
    }

    /// Keyed lookup on Map/Struct, first (only, post-dedup) match.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.get(key),
            Value::Struct { fields, .. } => fields.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}
