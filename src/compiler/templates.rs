//! Opcode templates.
//!
//! Pure expansions from a source operator to quad instructions. The target
//! machine has no polymorphic opcodes, so every table entry holds an integer
//! and a real variant. Jumps inside a template are relative to the template
//! itself and need no knowledge of where it ends up.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::types::Type, errors::errors::ErrorImpl};

use super::instruction::{Instruction, JumpTarget, Opcode, Operand};

lazy_static! {
    static ref ARITHMETIC: HashMap<&'static str, (Opcode, Opcode)> = {
        let mut map = HashMap::new();
        map.insert("+", (Opcode::IADD, Opcode::RADD));
        map.insert("-", (Opcode::ISUB, Opcode::RSUB));
        map.insert("*", (Opcode::IMLT, Opcode::RMLT));
        map.insert("/", (Opcode::IDIV, Opcode::RDIV));
        map
    };
    static ref RELATIONAL: HashMap<&'static str, (Opcode, Opcode)> = {
        let mut map = HashMap::new();
        map.insert("==", (Opcode::IEQL, Opcode::REQL));
        map.insert("!=", (Opcode::INQL, Opcode::RNQL));
        map.insert("<", (Opcode::ILSS, Opcode::RLSS));
        map.insert(">", (Opcode::IGRT, Opcode::RGRT));
        map
    };
}

fn select(opcodes: (Opcode, Opcode), operand_type: Type) -> Opcode {
    match operand_type {
        Type::Int => opcodes.0,
        Type::Float => opcodes.1,
    }
}

fn unknown(operator: &str) -> ErrorImpl {
    ErrorImpl::UnknownOperation {
        operator: String::from(operator),
    }
}

/// `dest = left OP right` for `+ - * /`.
pub fn arithmetic(
    operator: &str,
    operand_type: Type,
    dest: &str,
    left: Operand,
    right: Operand,
) -> Result<Vec<Instruction>, ErrorImpl> {
    let opcodes = ARITHMETIC.get(operator).copied().ok_or_else(|| unknown(operator))?;

    Ok(vec![Instruction::new(
        select(opcodes, operand_type),
        vec![Operand::name(dest), left, right],
    )])
}

/// `dest = left RELOP right`, comparing operands of `operand_type`.
///
/// `<=` and `>=` have no opcode and expand to four instructions writing
/// the same slot: the equality test, then the strict test when unequal.
pub fn relational(
    operator: &str,
    operand_type: Type,
    dest: &str,
    left: Operand,
    right: Operand,
) -> Result<Vec<Instruction>, ErrorImpl> {
    let strict = match operator {
        "<=" => (Opcode::ILSS, Opcode::RLSS),
        ">=" => (Opcode::IGRT, Opcode::RGRT),
        _ => {
            let opcodes = RELATIONAL.get(operator).copied().ok_or_else(|| unknown(operator))?;
            return Ok(vec![Instruction::new(
                select(opcodes, operand_type),
                vec![Operand::name(dest), left, right],
            )]);
        }
    };

    let equal = select((Opcode::IEQL, Opcode::REQL), operand_type);
    let strict = select(strict, operand_type);

    Ok(vec![
        Instruction::new(equal, vec![Operand::name(dest), left.clone(), right.clone()]),
        Instruction::jump_if_zero(JumpTarget::Forward(2), Operand::name(dest)),
        Instruction::jump(JumpTarget::Forward(2)),
        Instruction::new(strict, vec![Operand::name(dest), left, right]),
    ])
}

/// `dest = left && right`
pub fn logical_and(dest: &str, left: Operand, right: Operand) -> Vec<Instruction> {
    vec![
        Instruction::new(Opcode::IASN, vec![Operand::name(dest), Operand::literal("0")]),
        Instruction::jump_if_zero(JumpTarget::Forward(3), left),
        Instruction::jump_if_zero(JumpTarget::Forward(2), right),
        Instruction::new(Opcode::IASN, vec![Operand::name(dest), Operand::literal("1")]),
    ]
}

/// `dest = left || right`
pub fn logical_or(dest: &str, left: Operand, right: Operand) -> Vec<Instruction> {
    vec![
        Instruction::new(Opcode::IASN, vec![Operand::name(dest), Operand::literal("0")]),
        Instruction::jump_if_zero(JumpTarget::Forward(2), left),
        Instruction::new(Opcode::IASN, vec![Operand::name(dest), Operand::literal("1")]),
        Instruction::jump_if_zero(JumpTarget::Forward(2), right),
        Instruction::new(Opcode::IASN, vec![Operand::name(dest), Operand::literal("1")]),
    ]
}

pub fn assign(target_type: Type, target: &str, value: Operand) -> Instruction {
    let opcode = select((Opcode::IASN, Opcode::RASN), target_type);
    Instruction::new(opcode, vec![Operand::name(target), value])
}

pub fn input(target_type: Type, target: &str) -> Instruction {
    let opcode = select((Opcode::IINP, Opcode::RINP), target_type);
    Instruction::new(opcode, vec![Operand::name(target)])
}

pub fn print(value_type: Type, value: Operand) -> Instruction {
    let opcode = select((Opcode::IPRT, Opcode::RPRT), value_type);
    Instruction::new(opcode, vec![value])
}

/// `ITOR dest value` when converting to FLOAT, `RTOI dest value` otherwise.
pub fn convert(to: Type, dest: &str, value: Operand) -> Instruction {
    let opcode = select((Opcode::RTOI, Opcode::ITOR), to);
    Instruction::new(opcode, vec![Operand::name(dest), value])
}
