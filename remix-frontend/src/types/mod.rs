//! Type system definitions for the supported C subset
//!
//! The set is closed: scalar `int`/`char`, `void` for return types, and
//! pointer/array constructors. Only `int` and the argument-vector shape have a
//! target-dialect rendering; anything else is rejected during lowering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source-dialect type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    Int,
    Char,
    Pointer(Box<Type>),
    /// Array without a size (`T name[]`)
    Array(Box<Type>),
}

impl Type {
    pub fn pointer_to(target: Type) -> Type {
        Type::Pointer(Box::new(target))
    }

    pub fn array_of(element: Type) -> Type {
        Type::Array(Box::new(element))
    }

    /// Is this the process argument vector shape, `char **` or `char *[]`?
    pub fn is_argument_vector(&self) -> bool {
        match self {
            Type::Pointer(inner) | Type::Array(inner) => {
                matches!(inner.as_ref(), Type::Pointer(target) if **target == Type::Char)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int => write!(f, "int"),
            Type::Char => write!(f, "char"),
            Type::Pointer(target) => write!(f, "{}*", target),
            Type::Array(element) => write!(f, "{}[]", element),
        }
    }
}
