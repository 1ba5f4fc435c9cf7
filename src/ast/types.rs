//! Type vocabulary for the AST.
//!
//! The language only knows two numeric types. Every declared variable,
//! every temporary and every literal is classified as one of them.

use std::fmt::Display;

/// The static type of a variable, temporary or literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
}

impl Type {
    pub fn is_float(&self) -> bool {
        matches!(self, Type::Float)
    }

    /// The common type of a binary operation: FLOAT as soon as one side is FLOAT.
    pub fn unify(self, other: Type) -> Type {
        if self.is_float() || other.is_float() {
            Type::Float
        } else {
            Type::Int
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "INT"),
            Type::Float => write!(f, "FLOAT"),
        }
    }
}

/// A numeric literal, kept in its lexical form.
///
/// The lexical form decides the type: a literal with a decimal point is FLOAT,
/// any other literal is INT.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericLiteral(pub String);

impl NumericLiteral {
    pub fn new(text: &str) -> Self {
        NumericLiteral(String::from(text))
    }

    pub fn get_type(&self) -> Type {
        if self.0.contains('.') {
            Type::Float
        } else {
            Type::Int
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
