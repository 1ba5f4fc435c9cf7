use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignmentStmt, BlockStmt, IfStmt, InputStmt, OutputStmt, SwitchStmt, WhileStmt,
        },
        types::Type,
    },
    errors::errors::{Error, ErrorImpl, WithPosition},
};

use super::{
    compiler::Compiler,
    expr::{gen_bool_expr, gen_expression, widen, widen_pair},
    instruction::{Instruction, JumpTarget, Operand},
    templates,
};

pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<Vec<Instruction>, Error> {
    match statement {
        Stmt::Assignment(stmt) => gen_assignment(compiler, stmt),
        Stmt::Input(stmt) => gen_input(compiler, stmt),
        Stmt::Output(stmt) => gen_output(compiler, stmt),
        Stmt::If(stmt) => gen_if(compiler, stmt),
        Stmt::While(stmt) => gen_while(compiler, stmt),
        Stmt::Switch(stmt) => gen_switch(compiler, stmt),
        Stmt::Break(stmt) => Ok(vec![Instruction::PendingBreak {
            position: stmt.span.start.clone(),
        }]),
        Stmt::Block(block) => gen_block(compiler, block),
    }
}

pub fn gen_block(compiler: &mut Compiler, block: &BlockStmt) -> Result<Vec<Instruction>, Error> {
    let mut instructions = vec![];

    for statement in block.iter() {
        instructions.extend(gen_statement(compiler, statement)?);
    }

    Ok(instructions)
}

fn gen_assignment(
    compiler: &mut Compiler,
    stmt: &AssignmentStmt,
) -> Result<Vec<Instruction>, Error> {
    let (mut instructions, value) = gen_expression(compiler, &stmt.expression)?;

    let target = &stmt.target;
    let target_type = compiler
        .symbols
        .lookup(&target.name)
        .at(&target.span.start)?
        .var_type;
    let value_type = compiler.symbols.type_of(&value).at(&stmt.span.start)?;

    let value = match (target_type, value_type) {
        (Type::Int, Type::Float) => {
            return Err(Error::new(
                ErrorImpl::AssignFloatToInt {
                    variable: target.name.clone(),
                },
                stmt.span.start.clone(),
            ))
        }
        (Type::Float, Type::Int) => widen(compiler, &mut instructions, value),
        _ => value,
    };

    instructions.push(templates::assign(target_type, &target.name, value));
    Ok(instructions)
}

fn gen_input(compiler: &mut Compiler, stmt: &InputStmt) -> Result<Vec<Instruction>, Error> {
    let target_type = compiler
        .symbols
        .lookup(&stmt.target.name)
        .at(&stmt.target.span.start)?
        .var_type;

    Ok(vec![templates::input(target_type, &stmt.target.name)])
}

/// Output always prints a real.
fn gen_output(compiler: &mut Compiler, stmt: &OutputStmt) -> Result<Vec<Instruction>, Error> {
    let (mut instructions, value) = gen_expression(compiler, &stmt.expression)?;

    let value = if compiler.symbols.is_float(&value).at(&stmt.span.start)? {
        value
    } else {
        widen(compiler, &mut instructions, value)
    };

    instructions.push(templates::print(Type::Float, value));
    Ok(instructions)
}

fn gen_if(compiler: &mut Compiler, stmt: &IfStmt) -> Result<Vec<Instruction>, Error> {
    let (mut instructions, condition) = gen_bool_expr(compiler, &stmt.condition)?;
    let then_body = gen_statement(compiler, &stmt.then_body)?;

    match &stmt.else_body {
        None => {
            instructions.push(Instruction::jump_if_zero(
                JumpTarget::Forward(then_body.len() + 1),
                condition,
            ));
            instructions.extend(then_body);
        }
        Some(else_body) => {
            let else_body = gen_statement(compiler, else_body)?;

            // Skip the then body and the jump over the else body
            instructions.push(Instruction::jump_if_zero(
                JumpTarget::Forward(then_body.len() + 2),
                condition,
            ));
            instructions.extend(then_body);
            instructions.push(Instruction::jump(JumpTarget::Forward(else_body.len() + 1)));
            instructions.extend(else_body);
        }
    }

    Ok(instructions)
}

/// Test-at-top loop: `cond; JMPZ past-loop; body; JUMP cond`.
fn gen_while(compiler: &mut Compiler, stmt: &WhileStmt) -> Result<Vec<Instruction>, Error> {
    let body = gen_statement(compiler, &stmt.body)?;
    let (mut instructions, condition) = gen_bool_expr(compiler, &stmt.condition)?;

    instructions.push(Instruction::jump_if_zero(
        JumpTarget::Forward(body.len() + 2),
        condition,
    ));
    instructions.extend(body);

    let back = instructions.len();
    instructions.push(Instruction::jump(JumpTarget::Backward(back)));

    close_breaks(&mut instructions);
    Ok(instructions)
}

/// Evaluates the selector once, then one guarded arm per case.
///
/// A failed guard skips to the next guard. Nothing is emitted after a case
/// body, so leaving a body without `break` continues with the next guard and
/// finally the default arm.
fn gen_switch(compiler: &mut Compiler, stmt: &SwitchStmt) -> Result<Vec<Instruction>, Error> {
    let (mut instructions, selector) = gen_expression(compiler, &stmt.selector)?;

    for case in stmt.cases.iter() {
        let guard = compiler.symbols.new_temporary(Type::Int);
        let body = gen_block(compiler, &case.body)?;

        let label = Operand::Literal(case.label.clone());
        let (left, right, operand_type) = widen_pair(
            compiler,
            &mut instructions,
            selector.clone(),
            label,
            &case.span.start,
        )?;

        instructions.extend(
            templates::relational("==", operand_type, &guard, left, right)
                .at(&case.span.start)?,
        );
        instructions.push(Instruction::jump_if_zero(
            JumpTarget::Forward(body.len() + 1),
            Operand::Name(guard),
        ));
        instructions.extend(body);
    }

    instructions.extend(gen_block(compiler, &stmt.default)?);

    close_breaks(&mut instructions);
    Ok(instructions)
}

/// Turns every pending `break` into a jump to just past `instructions`.
fn close_breaks(instructions: &mut [Instruction]) {
    let len = instructions.len();

    for (index, instruction) in instructions.iter_mut().enumerate() {
        if instruction.is_pending_break() {
            *instruction = Instruction::jump(JumpTarget::Forward(len - index));
        }
    }
}
