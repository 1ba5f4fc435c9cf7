//! Expression chains.
//!
//! Binary chains are right-anchored: a node always owns its newest (right)
//! operand and optionally an operator together with the continuation holding
//! everything to its left. `a - b + c` is therefore
//! `Expression { right: c, left: Some(("+", Expression { right: b, left: Some(("-", a)) })) }`.
//! A node without a continuation is a pass-through for its right operand.

use crate::{Position, Span};

use super::{
    ast::Identifier,
    types::{NumericLiteral, Type},
};

/// An operator symbol as written in the source (`+`, `<=`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub symbol: String,
    pub position: Position,
}

impl Operator {
    pub fn new(symbol: &str, position: Position) -> Self {
        Operator {
            symbol: String::from(symbol),
            position,
        }
    }
}

/// Additive chain: `expression ADDOP term | term`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub right: Term,
    pub left: Option<(Operator, Box<Expression>)>,
}

impl Expression {
    pub fn single(term: Term) -> Self {
        Expression {
            right: term,
            left: None,
        }
    }
}

/// Multiplicative chain: `term MULOP factor | factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub right: Factor,
    pub left: Option<(Operator, Box<Term>)>,
}

impl Term {
    pub fn single(factor: Factor) -> Self {
        Term {
            right: factor,
            left: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Identifier(Identifier),
    Literal(NumericLiteral),
    /// `( expression )` or `static_cast<T>( expression )`
    Parenthesized {
        expression: Box<Expression>,
        cast: Option<Type>,
        span: Span,
    },
}

/// Disjunction: `boolexpr || boolterm | boolterm`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub right: BoolTerm,
    pub left: Option<Box<BoolExpr>>,
}

impl BoolExpr {
    pub fn single(term: BoolTerm) -> Self {
        BoolExpr {
            right: term,
            left: None,
        }
    }
}

/// Conjunction: `boolterm && boolfactor | boolfactor`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolTerm {
    pub right: BoolFactor,
    pub left: Option<Box<BoolTerm>>,
}

impl BoolTerm {
    pub fn single(factor: BoolFactor) -> Self {
        BoolTerm {
            right: factor,
            left: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoolFactor {
    Relational {
        left: Expression,
        operator: Operator,
        right: Expression,
    },
    /// `!( boolexpr )`
    Negation { inner: Box<BoolExpr>, span: Span },
}
