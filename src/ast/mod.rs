/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the parsed program
///
/// Submodules:
/// - ast: The program root, declarations and the statement sum type
/// - expressions: Arithmetic and boolean expression chains
/// - statements: Definitions for the individual statement kinds
/// - types: The numeric type vocabulary and numeric literals
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
