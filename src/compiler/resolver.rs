use crate::errors::errors::ErrorImpl;

use super::instruction::{Instruction, JumpTarget, Operand};

/// Rewrites every relative jump target into an absolute 1-based line number.
///
/// A target is relative to the final index of the instruction holding it, so
/// this runs once, after every instruction is in place. Resolved targets are
/// left untouched.
pub fn resolve_offsets(instructions: Vec<Instruction>) -> Result<Vec<Instruction>, ErrorImpl> {
    instructions
        .into_iter()
        .enumerate()
        .map(|(index, instruction)| resolve_instruction(index, instruction))
        .collect()
}

fn resolve_instruction(index: usize, instruction: Instruction) -> Result<Instruction, ErrorImpl> {
    let (opcode, operands) = match instruction {
        Instruction::Quad { opcode, operands } => (opcode, operands),
        pending => return Ok(pending),
    };

    let operands = operands
        .into_iter()
        .map(|operand| match operand {
            Operand::Jump(target) => resolve_target(index, target).map(Operand::Jump),
            operand => Ok(operand),
        })
        .collect::<Result<Vec<Operand>, ErrorImpl>>()?;

    Ok(Instruction::Quad { opcode, operands })
}

/// Resolves a target held by the instruction at 0-based `index`.
///
/// A backward jump may land on line 1 at the earliest.
pub fn resolve_target(index: usize, target: JumpTarget) -> Result<JumpTarget, ErrorImpl> {
    let line = index + 1;

    match target {
        JumpTarget::Forward(offset) => Ok(JumpTarget::Resolved(line + offset)),
        JumpTarget::Backward(offset) if offset < line => Ok(JumpTarget::Resolved(line - offset)),
        JumpTarget::Backward(offset) => Err(ErrorImpl::JumpBeforeFirstLine { line, offset }),
        resolved => Ok(resolved),
    }
}
