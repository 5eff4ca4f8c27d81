//! Runtime values.
//!
//! Heap-backed values are only constructed through factory methods:
//!
//! ```text
//! let s = Value::string("one");
//! let xs = Value::list(vec![Value::int(1), Value::float(2.0)]);
//! let m = Value::dict(vec![(Value::int(1), Value::string("one"))]);
//! ```
//!
//! `Value::set` drops repeated members and `Value::dict` keeps the last value
//! written for a repeated key, so a built container never holds duplicates.

mod heap;

use std::fmt;
use std::sync::Arc;

use tymatch_ir::BaseType;

use crate::Instance;

pub use heap::Heap;

/// A dynamically typed runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Scalars
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Complex number.
    Complex { re: f64, im: f64 },
    /// The `None` singleton.
    None,

    // Heap types
    /// UTF-8 text.
    Str(Heap<String>),
    /// Raw bytes.
    Bytes(Heap<Vec<u8>>),
    /// Ordered list.
    List(Heap<Vec<Value>>),
    /// Set of distinct members, in insertion order.
    Set(Heap<Vec<Value>>),
    /// Mapping with distinct keys, in insertion order.
    Dict(Heap<Vec<(Value, Value)>>),
    /// Fixed-position heterogeneous tuple.
    Tuple(Heap<Vec<Value>>),
    /// Instance of a user-defined class, compared by identity.
    Object(Heap<dyn Instance>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex { re, im }
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a set, keeping the first occurrence of each member.
    pub fn set(items: Vec<Value>) -> Self {
        let mut members: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if !members.contains(&item) {
                members.push(item);
            }
        }
        Value::Set(Heap::new(members))
    }

    /// Create a dict. A repeated key keeps its first position and its last
    /// value.
    pub fn dict(entries: Vec<(Value, Value)>) -> Self {
        let mut map: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match map.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => map.push((key, value)),
            }
        }
        Value::Dict(Heap::new(map))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Wrap a shared object. The value refers to the same instance.
    pub fn object<I: Instance + 'static>(instance: Arc<I>) -> Self {
        let instance: Arc<dyn Instance> = instance;
        Value::Object(Heap::shared(instance))
    }
}

// Accessors

impl Value {
    /// Base type of a scalar or object value; `None` for containers.
    pub fn base_type(&self) -> Option<BaseType> {
        Some(match self {
            Value::Int(_) => BaseType::Int,
            Value::Float(_) => BaseType::Float,
            Value::Bool(_) => BaseType::Bool,
            Value::Complex { .. } => BaseType::Complex,
            Value::None => BaseType::NoneType,
            Value::Str(_) => BaseType::Str,
            Value::Bytes(_) => BaseType::Bytes,
            Value::Object(obj) => BaseType::Class(obj.class_name().clone()),
            Value::List(_) | Value::Set(_) | Value::Dict(_) | Value::Tuple(_) => return None,
        })
    }

    /// Name of the runtime class of this value.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Complex { .. } => "complex",
            Value::None => "NoneType",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Dict(_) => "dict",
            Value::Tuple(_) => "tuple",
            Value::Object(obj) => obj.class_name().as_str(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Instance> {
        match self {
            Value::Object(obj) => Some(&**obj),
            _ => None,
        }
    }

    /// Number of members of a container value.
    pub fn container_len(&self) -> Option<usize> {
        match self {
            Value::List(items) | Value::Set(items) | Value::Tuple(items) => Some(items.len()),
            Value::Dict(entries) => Some(entries.len()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (
                Value::Complex { re: r1, im: i1 },
                Value::Complex { re: r2, im: i2 },
            ) => r1 == r2 && i1 == i2,
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|member| b.contains(member))
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.iter().any(|(bk, bv)| k == bk && v == bv))
            }
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Complex { re, im } => write!(f, "({re:?}{im:+?}j)"),
            Value::None => f.write_str("None"),
            Value::Str(s) => write!(f, "{:?}", &***s),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_str("{")?;
                write_items(f, items)?;
                f.write_str("}")
            }
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                f.write_str(")")
            }
            Value::Object(obj) => write!(f, "<{} object>", obj.class_name()),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
