//! Quad instruction model.
//!
//! Instructions are kept structured until the very end: jump targets stay
//! relative while code is generated and are only turned into absolute line
//! numbers by the resolver. Text is produced by the `Display` impls.

use std::fmt::Display;

use crate::{ast::types::NumericLiteral, Position};

/// Opcodes of the quad machine.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    IASN,
    RASN,
    IINP,
    RINP,
    IPRT,
    RPRT,
    IADD,
    ISUB,
    IMLT,
    IDIV,
    RADD,
    RSUB,
    RMLT,
    RDIV,
    IEQL,
    INQL,
    ILSS,
    IGRT,
    REQL,
    RNQL,
    RLSS,
    RGRT,
    ITOR,
    RTOI,
    JUMP,
    JMPZ,
    HALT,
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where a jump lands.
///
/// `Forward(n)` and `Backward(n)` count instructions from the jump's own
/// final position: `Forward(1)` is the next instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// Absolute, 1-based line number
    Resolved(usize),
    Forward(usize),
    Backward(usize),
}

impl JumpTarget {
    pub fn is_resolved(&self) -> bool {
        matches!(self, JumpTarget::Resolved(_))
    }
}

impl Display for JumpTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpTarget::Resolved(line) => write!(f, "{}", line),
            JumpTarget::Forward(offset) => write!(f, "%+{}", offset),
            JumpTarget::Backward(offset) => write!(f, "%-{}", offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A declared variable or a temporary
    Name(String),
    Literal(NumericLiteral),
    Jump(JumpTarget),
}

impl Operand {
    pub fn name(name: &str) -> Self {
        Operand::Name(String::from(name))
    }

    pub fn literal(text: &str) -> Self {
        Operand::Literal(NumericLiteral::new(text))
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Name(name) => write!(f, "{}", name),
            Operand::Literal(literal) => write!(f, "{}", literal),
            Operand::Jump(target) => write!(f, "{}", target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Quad {
        opcode: Opcode,
        operands: Vec<Operand>,
    },
    /// A `break` waiting for its enclosing loop or switch to close.
    PendingBreak { position: Position },
}

impl Instruction {
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> Self {
        Instruction::Quad { opcode, operands }
    }

    /// `JUMP target`
    pub fn jump(target: JumpTarget) -> Self {
        Instruction::new(Opcode::JUMP, vec![Operand::Jump(target)])
    }

    /// `JMPZ target condition`: jumps when `condition` is zero.
    pub fn jump_if_zero(target: JumpTarget, condition: Operand) -> Self {
        Instruction::new(Opcode::JMPZ, vec![Operand::Jump(target), condition])
    }

    pub fn halt() -> Self {
        Instruction::new(Opcode::HALT, vec![])
    }

    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Instruction::Quad { opcode, .. } => Some(*opcode),
            Instruction::PendingBreak { .. } => None,
        }
    }

    pub fn operands(&self) -> &[Operand] {
        match self {
            Instruction::Quad { operands, .. } => operands,
            Instruction::PendingBreak { .. } => &[],
        }
    }

    pub fn is_pending_break(&self) -> bool {
        matches!(self, Instruction::PendingBreak { .. })
    }

    /// True while any jump operand still holds a relative offset.
    pub fn has_relative_jump(&self) -> bool {
        self.operands()
            .iter()
            .any(|operand| matches!(operand, Operand::Jump(target) if !target.is_resolved()))
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Quad { opcode, operands } => {
                write!(f, "{}", opcode)?;
                for operand in operands {
                    write!(f, " {}", operand)?;
                }
                Ok(())
            }
            Instruction::PendingBreak { .. } => write!(f, "%BREAK"),
        }
    }
}

/// A finished program: resolved instructions ending in `HALT`, plus the
/// non-fatal diagnostics collected while generating them.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadProgram {
    instructions: Vec<Instruction>,
    warnings: Vec<String>,
}

impl QuadProgram {
    pub fn new(instructions: Vec<Instruction>, warnings: Vec<String>) -> Self {
        QuadProgram {
            instructions,
            warnings,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(|instruction| instruction.to_string())
            .collect()
    }

    /// One instruction per line, optionally prefixed with its line number.
    pub fn render(&self, with_line_numbers: bool) -> String {
        self.lines()
            .iter()
            .enumerate()
            .map(|(index, line)| {
                if with_line_numbers {
                    format!("{}:\t{}\n", index + 1, line)
                } else {
                    format!("{}\n", line)
                }
            })
            .collect()
    }
}
