//! Code generation module for the compiler.
//!
//! This module turns the AST into a flat list of quad instructions. It handles:
//!
//! - Expression evaluation into typed temporaries, widening INT to FLOAT
//! - Boolean evaluation through short-circuit templates
//! - Control flow linearisation with relative jumps
//! - Resolution of relative jumps into absolute line numbers

pub mod compiler;
pub mod expr;
pub mod instruction;
pub mod resolver;
pub mod stmt;
pub mod templates;
