//! A small quad machine used to execute generated programs in tests.
//!
//! Values are stored as `f64`. Integer opcodes truncate their result, so an
//! INT slot always holds a whole number.

use std::collections::{HashMap, VecDeque};

use cpq::{
    compile_source,
    compiler::instruction::{Instruction, JumpTarget, Opcode, Operand, QuadProgram},
};

const STEP_LIMIT: usize = 100_000;

#[derive(Debug, Default)]
pub struct Machine {
    pub variables: HashMap<String, f64>,
    pub outputs: Vec<f64>,
    inputs: VecDeque<f64>,
}

impl Machine {
    pub fn get(&self, name: &str) -> f64 {
        self.variables.get(name).copied().unwrap_or(0.0)
    }

    fn value(&self, operand: &Operand) -> f64 {
        match operand {
            Operand::Name(name) => self.get(name),
            Operand::Literal(literal) => literal.as_str().parse().unwrap(),
            Operand::Jump(target) => panic!("jump target {} used as a value", target),
        }
    }

    fn set(&mut self, operand: &Operand, value: f64) {
        match operand {
            Operand::Name(name) => {
                self.variables.insert(name.clone(), value);
            }
            other => panic!("cannot store into {}", other),
        }
    }
}

fn line_of(operand: &Operand) -> usize {
    match operand {
        Operand::Jump(JumpTarget::Resolved(line)) => *line,
        other => panic!("unresolved jump target {}", other),
    }
}

fn truth(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Runs a resolved program until `HALT`.
pub fn run(program: &QuadProgram, inputs: &[f64]) -> Machine {
    let mut machine = Machine {
        inputs: inputs.iter().copied().collect(),
        ..Machine::default()
    };
    let instructions = program.instructions();
    let mut line = 1;

    for _ in 0..STEP_LIMIT {
        let Instruction::Quad { opcode, operands } = &instructions[line - 1] else {
            panic!("pending break reached the machine at line {}", line);
        };
        let mut next = line + 1;

        match opcode {
            Opcode::HALT => return machine,
            Opcode::IASN | Opcode::RASN => {
                let value = machine.value(&operands[1]);
                machine.set(&operands[0], value);
            }
            Opcode::IINP => {
                let value = machine.inputs.pop_front().expect("input exhausted").trunc();
                machine.set(&operands[0], value);
            }
            Opcode::RINP => {
                let value = machine.inputs.pop_front().expect("input exhausted");
                machine.set(&operands[0], value);
            }
            Opcode::IPRT | Opcode::RPRT => {
                let value = machine.value(&operands[0]);
                machine.outputs.push(value);
            }
            Opcode::ITOR => {
                let value = machine.value(&operands[1]);
                machine.set(&operands[0], value);
            }
            Opcode::RTOI => {
                let value = machine.value(&operands[1]).trunc();
                machine.set(&operands[0], value);
            }
            Opcode::JUMP => next = line_of(&operands[0]),
            Opcode::JMPZ => {
                if machine.value(&operands[1]) == 0.0 {
                    next = line_of(&operands[0]);
                }
            }
            binary => {
                let a = machine.value(&operands[1]);
                let b = machine.value(&operands[2]);
                let result = match binary {
                    Opcode::IADD | Opcode::RADD => a + b,
                    Opcode::ISUB | Opcode::RSUB => a - b,
                    Opcode::IMLT | Opcode::RMLT => a * b,
                    Opcode::IDIV => (a / b).trunc(),
                    Opcode::RDIV => a / b,
                    Opcode::IEQL | Opcode::REQL => truth(a == b),
                    Opcode::INQL | Opcode::RNQL => truth(a != b),
                    Opcode::ILSS | Opcode::RLSS => truth(a < b),
                    Opcode::IGRT | Opcode::RGRT => truth(a > b),
                    other => unreachable!("{} handled above", other),
                };
                machine.set(&operands[0], result);
            }
        }

        line = next;
    }

    panic!("program did not halt within {} steps", STEP_LIMIT);
}

/// Compiles and runs a source program, returning the printed values.
pub fn outputs(source: &str, inputs: &[f64]) -> Vec<f64> {
    let program = compile_source(source.to_string(), "test.ou").unwrap();
    run(&program, inputs).outputs
}
