//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::ast::Program). It is a recursive descent
//! parser over the language grammar and handles:
//!
//! - Declarations (`a, b: int;`)
//! - Statement parsing, dispatched through a lookup table keyed by token kind
//! - Arithmetic and boolean expression chains, built right-anchored
//! - Type and cast parsing
//!
//! Left-recursive grammar rules are parsed as loops: each iteration wraps
//! everything parsed so far as the left continuation of a new node.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
