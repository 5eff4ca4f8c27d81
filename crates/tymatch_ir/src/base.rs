//! Atomic base types.

use std::fmt;

use crate::ClassName;

/// Opaque atomic type identity.
///
/// Builtins are listed explicitly; everything else is a nominal
/// [`BaseType::Class`]. There is no numeric tower: `bool` is not an `int`
/// and `int` is not a `float`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BaseType {
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 text.
    Str,
    /// Raw byte string.
    Bytes,
    /// Complex number.
    Complex,
    /// The type of `None`.
    NoneType,
    /// User-defined nominal type.
    Class(ClassName),
}

impl BaseType {
    /// Name of this base type as written in annotations.
    pub fn name(&self) -> &str {
        match self {
            BaseType::Int => "int",
            BaseType::Float => "float",
            BaseType::Bool => "bool",
            BaseType::Str => "str",
            BaseType::Bytes => "bytes",
            BaseType::Complex => "complex",
            BaseType::NoneType => "None",
            BaseType::Class(name) => name.as_str(),
        }
    }

    /// Look up a builtin by its annotation name.
    pub fn builtin(name: &str) -> Option<Self> {
        Some(match name {
            "int" => BaseType::Int,
            "float" => BaseType::Float,
            "bool" => BaseType::Bool,
            "str" => BaseType::Str,
            "bytes" => BaseType::Bytes,
            "complex" => BaseType::Complex,
            "None" => BaseType::NoneType,
            _ => return None,
        })
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
