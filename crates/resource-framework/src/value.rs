//! # Attribute Values
//!
//! A [`Value`] is whatever an attribute can hold: a scalar, a nested resource
//! (has-one) or a list (has-many, or a plain array of scalars).

use crate::entity::Resource;
use crate::inspect::InspectOptions;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Resource(Box<Resource>),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Unescaped text used when the value fills a route placeholder.
    ///
    /// Null, `false`, lists and nested resources cannot fill a placeholder.
    pub fn to_path_param(&self) -> Option<String> {
        match self {
            Value::Bool(true) => Some("true".to_string()),
            Value::Bool(false) => None,
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Null | Value::Resource(_) | Value::List(_) => None,
        }
    }

    /// Renders the value the way it appears after `key=` in an inspect string.
    ///
    /// Nested resources are never expanded, only named.
    pub fn inspect(&self, options: &InspectOptions) -> String {
        match self {
            Value::Null => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format!("{f:?}"),
            Value::String(s) => quote(s, options.max_string_length),
            Value::Resource(resource) => format!("#<{}>", resource.class()),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(|item| item.inspect(options)).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

fn quote(s: &str, max_len: Option<usize>) -> String {
    let limit = max_len.unwrap_or(usize::MAX);
    let mut out = String::with_capacity(s.len().min(limit) + 5);
    out.push('"');
    for c in s.chars().take(limit) {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    if max_len.is_some_and(|max_len| s.chars().nth(max_len).is_some()) {
        out.push_str("...");
    }
    out.push('"');
    out
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        Value::Resource(Box::new(resource))
    }
}

impl From<Vec<Resource>> for Value {
    fn from(resources: Vec<Resource>) -> Self {
        Value::List(resources.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
