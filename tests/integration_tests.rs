//! Integration tests for end-to-end compilation.
//!
//! These tests run source programs through the complete pipeline
//! (tokenization, parsing, code generation and offset resolution) and
//! execute the resulting quads on the test machine in `common`.

mod common;

use common::{outputs, run};
use cpq::{
    compile_source,
    compiler::instruction::{Instruction, Opcode},
    errors::errors::ErrorImpl,
    format_error,
};

const SWITCH_WITHOUT_BREAK: &str = "x: int; {
    input(x);
    switch (x) {
        case 1: output(1);
        case 2: output(2);
        default: output(0);
    }
}";

const SWITCH_WITH_BREAK: &str = "x: int; {
    input(x);
    switch (x) {
        case 1: output(1); break;
        case 2: output(2); break;
        default: output(0);
    }
}";

#[test]
fn test_input_then_output() {
    let program = compile_source("a: int; { input(a); output(a); }".to_string(), "a.ou").unwrap();

    assert_eq!(program.len(), 4);
    assert_eq!(run(&program, &[7.0]).outputs, vec![7.0]);
}

#[test]
fn test_while_loop_terminates() {
    let source = "a, b: float; { a = 1; while (a < 5) { a = a + 1; } output(a); }";
    let program = compile_source(source.to_string(), "b.ou").unwrap();

    let machine = run(&program, &[]);
    assert_eq!(machine.get("a"), 5.0);
    assert_eq!(machine.outputs, vec![5.0]);

    // The back jump lands on the first condition instruction
    let back_jump = program
        .instructions()
        .iter()
        .rev()
        .find(|instruction| instruction.opcode() == Some(Opcode::JUMP))
        .unwrap();
    assert_eq!(back_jump.to_string(), "JUMP 3");
}

#[test]
fn test_break_in_while() {
    let source = "i: int; {
        i = 0;
        while (i < 100) {
            if (i == 4) break;
            i = i + 1;
        }
        output(i);
    }";

    assert_eq!(outputs(source, &[]), vec![4.0]);
}

#[test]
fn test_break_only_leaves_innermost_loop() {
    let source = "i, j, count: int; {
        i = 0;
        count = 0;
        while (i < 3) {
            j = 0;
            while (j < 10) {
                if (j == 2) break;
                j = j + 1;
                count = count + 1;
            }
            i = i + 1;
        }
        output(count);
        output(i);
    }";

    assert_eq!(outputs(source, &[]), vec![6.0, 3.0]);
}

#[test]
fn test_break_outside_of_loop() {
    let source = "a: int; { if (a == 0) break; }";
    let error = compile_source(source.to_string(), "c.ou").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::BreakOutsideOfLoop);
    assert_eq!(error.get_position().0, source.find("break").unwrap() as u32);
}

#[test]
fn test_switch_without_break_reaches_default() {
    assert_eq!(outputs(SWITCH_WITHOUT_BREAK, &[1.0]), vec![1.0, 0.0]);
    assert_eq!(outputs(SWITCH_WITHOUT_BREAK, &[2.0]), vec![2.0, 0.0]);
    assert_eq!(outputs(SWITCH_WITHOUT_BREAK, &[9.0]), vec![0.0]);
}

#[test]
fn test_switch_with_break() {
    assert_eq!(outputs(SWITCH_WITH_BREAK, &[1.0]), vec![1.0]);
    assert_eq!(outputs(SWITCH_WITH_BREAK, &[2.0]), vec![2.0]);
    assert_eq!(outputs(SWITCH_WITH_BREAK, &[3.0]), vec![0.0]);
}

#[test]
fn test_switch_inside_loop_break_leaves_switch_only() {
    let source = "i: int; {
        i = 0;
        while (i < 3) {
            switch (i) {
                case 1: output(10); break;
                default: output(i);
            }
            i = i + 1;
        }
    }";

    assert_eq!(outputs(source, &[]), vec![0.0, 10.0, 2.0]);
}

#[test]
fn test_less_equal_and_greater_equal_truth_tables() {
    let less_equal = "a, b: int; { input(a); input(b); if (a <= b) output(1); else output(0); }";
    let greater_equal = "a, b: int; { input(a); input(b); if (a >= b) output(1); else output(0); }";

    assert_eq!(outputs(less_equal, &[3.0, 3.0]), vec![1.0]);
    assert_eq!(outputs(less_equal, &[3.0, 4.0]), vec![1.0]);
    assert_eq!(outputs(less_equal, &[4.0, 3.0]), vec![0.0]);

    assert_eq!(outputs(greater_equal, &[3.0, 3.0]), vec![1.0]);
    assert_eq!(outputs(greater_equal, &[3.0, 4.0]), vec![0.0]);
    assert_eq!(outputs(greater_equal, &[4.0, 3.0]), vec![1.0]);
}

#[test]
fn test_real_comparisons() {
    let source = "x: float; { input(x); if (x >= 2) output(1); else output(0); }";

    assert_eq!(outputs(source, &[2.0]), vec![1.0]);
    assert_eq!(outputs(source, &[2.5]), vec![1.0]);
    assert_eq!(outputs(source, &[1.5]), vec![0.0]);
}

#[test]
fn test_and_or_truth_tables() {
    let and = "a, b: int; { input(a); input(b); if (a == 1 && b == 1) output(1); else output(0); }";
    let or = "a, b: int; { input(a); input(b); if (a == 1 || b == 1) output(1); else output(0); }";

    for (a, b, expected_and, expected_or) in [
        (0.0, 0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0, 1.0),
        (0.0, 1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0, 1.0),
    ] {
        assert_eq!(outputs(and, &[a, b]), vec![expected_and], "AND({}, {})", a, b);
        assert_eq!(outputs(or, &[a, b]), vec![expected_or], "OR({}, {})", a, b);
    }
}

#[test]
fn test_negation() {
    let source = "a: int; { input(a); if (!(a < 5 || a > 10)) output(1); else output(0); }";

    assert_eq!(outputs(source, &[7.0]), vec![1.0]);
    assert_eq!(outputs(source, &[3.0]), vec![0.0]);
    assert_eq!(outputs(source, &[12.0]), vec![0.0]);
}

#[test]
fn test_int_to_float_assignment_inserts_one_conversion() {
    let program =
        compile_source("a: int; x: float; { input(a); x = a; }".to_string(), "d.ou").unwrap();

    let opcodes = program
        .instructions()
        .iter()
        .filter_map(Instruction::opcode)
        .collect::<Vec<Opcode>>();
    assert_eq!(
        opcodes,
        vec![Opcode::IINP, Opcode::ITOR, Opcode::RASN, Opcode::HALT]
    );
}

#[test]
fn test_float_to_int_assignment_is_rejected() {
    let source = "a: int; x: float; { x = 1.5; a = x * 2; }";
    let error = compile_source(source.to_string(), "e.ou").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::AssignFloatToInt {
            variable: "a".to_string()
        }
    );
}

#[test]
fn test_integer_division_and_casts() {
    let source = "a: int; x: float; {
        a = 7 / 2;
        output(a);
        x = 7.0 / 2;
        output(x);
        a = static_cast<int>(x * 3);
        output(a);
        x = static_cast<float>(a) / 4;
        output(x);
    }";

    assert_eq!(outputs(source, &[]), vec![3.0, 3.5, 10.0, 2.5]);
}

#[test]
fn test_operator_precedence_and_associativity() {
    let source = "a: int; {
        a = 10 - 4 - 3;
        output(a);
        a = 2 + 3 * 4;
        output(a);
        a = (2 + 3) * 4;
        output(a);
    }";
    assert_eq!(outputs(source, &[]), vec![3.0, 14.0, 20.0]);
}

#[test]
fn test_fibonacci() {
    let source = "n, i, a, b, t: int; {
        input(n);
        a = 0;
        b = 1;
        i = 0;
        while (i < n) {
            output(a);
            t = a + b;
            a = b;
            b = t;
            i = i + 1;
        }
    }";

    assert_eq!(
        outputs(source, &[7.0]),
        vec![0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0]
    );
}

#[test]
fn test_unknown_variable_report() {
    let source = "a: int;\n{\n    a = b;\n}\n";
    let error = compile_source(source.to_string(), "f.ou").unwrap_err();

    let report = format_error(&error, "f.ou", source);
    assert!(report.starts_with("Error: UnknownVariable (Variable `b` is not declared)"));
    assert!(report.contains("3 | a = b;"));
}

#[test]
fn test_numbered_rendering() {
    let program = compile_source("a: int; { input(a); }".to_string(), "g.ou").unwrap();

    assert_eq!(program.render(false), "IINP a\nHALT\n");
    assert_eq!(program.render(true), "1:\tIINP a\n2:\tHALT\n");
}
