use crate::{
    ast::{
        expressions::{BoolExpr, BoolFactor, BoolTerm, Expression, Factor, Operator, Term},
        types::Type,
    },
    errors::errors::{Error, WithPosition},
    Position,
};

use super::{
    compiler::{Compiler, Generated},
    instruction::{Instruction, Opcode, Operand},
    templates,
};

/// Generates an additive chain: right term first, then the left continuation.
pub fn gen_expression(
    compiler: &mut Compiler,
    expression: &Expression,
) -> Result<Generated, Error> {
    let (mut instructions, right) = gen_term(compiler, &expression.right)?;

    let Some((operator, left)) = &expression.left else {
        return Ok((instructions, right));
    };

    let (left_instructions, left) = gen_expression(compiler, left)?;
    instructions.extend(left_instructions);

    combine_arithmetic(compiler, instructions, operator, left, right)
}

/// Generates a multiplicative chain, in the same order as [`gen_expression`].
pub fn gen_term(compiler: &mut Compiler, term: &Term) -> Result<Generated, Error> {
    let (mut instructions, right) = gen_factor(compiler, &term.right)?;

    let Some((operator, left)) = &term.left else {
        return Ok((instructions, right));
    };

    let (left_instructions, left) = gen_term(compiler, left)?;
    instructions.extend(left_instructions);

    combine_arithmetic(compiler, instructions, operator, left, right)
}

fn combine_arithmetic(
    compiler: &mut Compiler,
    mut instructions: Vec<Instruction>,
    operator: &Operator,
    left: Operand,
    right: Operand,
) -> Result<Generated, Error> {
    let (left, right, operand_type) =
        widen_pair(compiler, &mut instructions, left, right, &operator.position)?;

    let dest = compiler.symbols.new_temporary(operand_type);
    instructions.extend(
        templates::arithmetic(&operator.symbol, operand_type, &dest, left, right)
            .at(&operator.position)?,
    );

    Ok((instructions, Operand::Name(dest)))
}

pub fn gen_factor(compiler: &mut Compiler, factor: &Factor) -> Result<Generated, Error> {
    match factor {
        Factor::Identifier(identifier) => {
            compiler
                .symbols
                .lookup(&identifier.name)
                .at(&identifier.span.start)?;

            Ok((vec![], Operand::name(&identifier.name)))
        }
        Factor::Literal(literal) => Ok((vec![], Operand::Literal(literal.clone()))),
        Factor::Parenthesized {
            expression,
            cast,
            span,
        } => {
            let (mut instructions, value) = gen_expression(compiler, expression)?;

            let Some(cast) = cast else {
                return Ok((instructions, value));
            };

            let value_type = compiler.symbols.type_of(&value).at(&span.start)?;
            if value_type == *cast {
                compiler.warn(format!(
                    "cast of a {} value to {} has no effect ({}:{})",
                    value_type, cast, span.start.1, span.start.0
                ));
                return Ok((instructions, value));
            }

            let dest = compiler.symbols.new_temporary(*cast);
            instructions.push(templates::convert(*cast, &dest, value));

            Ok((instructions, Operand::Name(dest)))
        }
    }
}

/// Materialises `value` as FLOAT through a fresh temporary.
pub fn widen(
    compiler: &mut Compiler,
    instructions: &mut Vec<Instruction>,
    value: Operand,
) -> Operand {
    let dest = compiler.symbols.new_temporary(Type::Float);
    instructions.push(templates::convert(Type::Float, &dest, value));
    Operand::Name(dest)
}

/// Brings both operands of a binary operation to a common type.
///
/// When exactly one side is FLOAT, the INT side is widened. Returns the
/// operands to use and their shared type.
pub fn widen_pair(
    compiler: &mut Compiler,
    instructions: &mut Vec<Instruction>,
    left: Operand,
    right: Operand,
    position: &Position,
) -> Result<(Operand, Operand, Type), Error> {
    let left_type = compiler.symbols.type_of(&left).at(position)?;
    let right_type = compiler.symbols.type_of(&right).at(position)?;
    let operand_type = left_type.unify(right_type);

    let left = if left_type == operand_type {
        left
    } else {
        widen(compiler, instructions, left)
    };
    let right = if right_type == operand_type {
        right
    } else {
        widen(compiler, instructions, right)
    };

    Ok((left, right, operand_type))
}

/// Generates a disjunction into a fresh INT temporary.
pub fn gen_bool_expr(compiler: &mut Compiler, expression: &BoolExpr) -> Result<Generated, Error> {
    let (mut instructions, right) = gen_bool_term(compiler, &expression.right)?;

    let Some(left) = &expression.left else {
        return Ok((instructions, right));
    };

    let (left_instructions, left) = gen_bool_expr(compiler, left)?;
    instructions.extend(left_instructions);

    let dest = compiler.symbols.new_temporary(Type::Int);
    instructions.extend(templates::logical_or(&dest, left, right));

    Ok((instructions, Operand::Name(dest)))
}

/// Generates a conjunction into a fresh INT temporary.
pub fn gen_bool_term(compiler: &mut Compiler, term: &BoolTerm) -> Result<Generated, Error> {
    let (mut instructions, right) = gen_bool_factor(compiler, &term.right)?;

    let Some(left) = &term.left else {
        return Ok((instructions, right));
    };

    let (left_instructions, left) = gen_bool_term(compiler, left)?;
    instructions.extend(left_instructions);

    let dest = compiler.symbols.new_temporary(Type::Int);
    instructions.extend(templates::logical_and(&dest, left, right));

    Ok((instructions, Operand::Name(dest)))
}

pub fn gen_bool_factor(compiler: &mut Compiler, factor: &BoolFactor) -> Result<Generated, Error> {
    match factor {
        BoolFactor::Negation { inner, .. } => {
            let (mut instructions, value) = gen_bool_expr(compiler, inner)?;

            let dest = compiler.symbols.new_temporary(Type::Int);
            instructions.push(Instruction::new(
                Opcode::IEQL,
                vec![Operand::name(&dest), value, Operand::literal("0")],
            ));

            Ok((instructions, Operand::Name(dest)))
        }
        BoolFactor::Relational {
            left,
            operator,
            right,
        } => {
            let (mut instructions, left) = gen_expression(compiler, left)?;
            let (right_instructions, right) = gen_expression(compiler, right)?;
            instructions.extend(right_instructions);

            let (left, right, operand_type) =
                widen_pair(compiler, &mut instructions, left, right, &operator.position)?;

            // Comparisons always yield 0 or 1
            let dest = compiler.symbols.new_temporary(Type::Int);
            instructions.extend(
                templates::relational(&operator.symbol, operand_type, &dest, left, right)
                    .at(&operator.position)?,
            );

            Ok((instructions, Operand::Name(dest)))
        }
    }
}
