#![allow(clippy::module_inception)]

use std::{rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    compiler::{compiler::compile, instruction::QuadProgram},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol_table;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline on a source text: tokenize, parse, generate and resolve.
pub fn compile_source(source: String, file_name: &str) -> Result<QuadProgram, Error> {
    let start = Instant::now();
    let tokens = tokenize(source, Some(String::from(file_name)))?;
    debug!("tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(String::from(file_name)))?;
    debug!("parsed in {:?}", parse_start.elapsed());

    let compile_start = Instant::now();
    let quads = compile(&program)?;
    debug!("generated quads in {:?}", compile_start.elapsed());

    Ok(quads)
}

/// Finds the line holding a byte offset.
///
/// Returns the 1-based line number, the line text and the column of the offset
/// inside that line. An offset at the very end of the source maps onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), line.len()));
        start = end;
        line_number += 1;
    }

    // EOF errors point one past the last character
    last.or(Some((1, String::new(), 0)))
}

pub fn format_error(error: &Error, file_name: &str, source: &str) -> String {
    /*
        Error: UnknownVariable (Variable `x` is not declared)
        -> prog.ou
           |
        20 | x = 4;
           | ^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file_name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
