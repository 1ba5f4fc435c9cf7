//! Main compiler module.
//!
//! This module contains the core Compiler structure and the compilation
//! pipeline from the AST to a resolved quad program. It owns the symbol
//! table for one compilation and collects non-fatal warnings.

use tracing::{debug, warn};

use crate::{
    ast::ast::{Declaration, Program},
    errors::errors::{Error, ErrorImpl, WithPosition},
    symbol_table::symbol_table::SymbolTable,
};

use super::{
    instruction::{Instruction, Operand, QuadProgram},
    resolver::resolve_offsets,
    stmt::gen_block,
};

/// Instructions emitted for a subtree together with the operand holding its value.
pub type Generated = (Vec<Instruction>, Operand);

/// State of a single compilation.
///
/// A compiler is used for exactly one program: the symbol table keeps every
/// temporary it allocated, and temporaries are never reused.
#[derive(Debug, Default)]
pub struct Compiler {
    /// Declared variables and allocated temporaries
    pub symbols: SymbolTable,
    /// Non-fatal diagnostics, in the order they were raised
    warnings: Vec<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler::default()
    }

    /// Logs a warning and keeps it for the caller.
    pub fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Registers every declared identifier, in source order.
    pub fn declare(&mut self, declarations: &[Declaration]) -> Result<(), Error> {
        for declaration in declarations {
            for identifier in declaration.identifiers.iter() {
                self.symbols
                    .declare(&identifier.name, declaration.var_type)
                    .at(&identifier.span.start)?;
            }
        }

        Ok(())
    }

    /// Generates the whole program, `HALT` included, with jumps still relative.
    ///
    /// Fails with `BreakOutsideOfLoop` if a `break` was not closed by an
    /// enclosing loop or switch.
    pub fn generate(&mut self, program: &Program) -> Result<Vec<Instruction>, Error> {
        self.declare(&program.declarations)?;

        let mut instructions = gen_block(self, &program.body)?;

        if let Some(Instruction::PendingBreak { position }) = instructions
            .iter()
            .find(|instruction| instruction.is_pending_break())
        {
            return Err(Error::new(ErrorImpl::BreakOutsideOfLoop, position.clone()));
        }

        instructions.push(Instruction::halt());
        Ok(instructions)
    }
}

/// Compiles a parsed program into a resolved quad program.
///
/// Every call starts from an empty symbol table, so temporaries are numbered
/// from `t0` again.
pub fn compile(program: &Program) -> Result<QuadProgram, Error> {
    let mut compiler = Compiler::new();

    let instructions = compiler.generate(program)?;
    debug!(
        "generated {} instructions using {} temporaries",
        instructions.len(),
        compiler.symbols.temporaries()
    );

    let instructions = resolve_offsets(instructions).at(&program.body.span.start)?;

    Ok(QuadProgram::new(instructions, compiler.warnings))
}
