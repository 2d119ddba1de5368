#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

pub use cli::Cli;

extern crate regex;

/// Byte offset into a source, paired with the source's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and
/// the offset of `position` inside that line. Offsets at or past the end of the
/// source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}

/// Formats a diagnostic against the source it was produced from.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected `Assignment`, found `Integer`)
        -> shell
          |
        1 | let x 5;
          | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Columns count chars, the offset counts bytes
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    println!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
