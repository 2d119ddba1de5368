//! REPL (Read-Parse-Print Loop) implementation
//!
//! Every line is parsed on its own with a fresh lexer and parser. Lines
//! starting with `.` are REPL commands.

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

pub const PROMPT: &str = ">> ";

/// What the loop should do after a line has been handled.
#[derive(Debug, PartialEq)]
pub enum Action {
    Print(Vec<String>),
    Exit,
}

/// Session state that survives between lines.
#[derive(Debug, Default)]
pub struct Repl {
    trace: bool,
}

impl Repl {
    pub fn new(trace: bool) -> Self {
        Repl { trace }
    }

    pub fn is_tracing(&self) -> bool {
        self.trace
    }

    /// Handles one line of input and returns the lines to print.
    pub fn handle_line(&mut self, line: &str) -> Action {
        let trimmed = line.trim();

        match trimmed {
            "" => Action::Print(vec![]),
            "exit" | "quit" | ".exit" => Action::Exit,
            _ if trimmed.starts_with('.') => Action::Print(self.handle_repl_command(trimmed)),
            _ => Action::Print(evaluate_line(line, self.trace)),
        }
    }

    fn handle_repl_command(&mut self, command: &str) -> Vec<String> {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match (name, argument) {
            (".help", _) => vec![
                "REPL Commands:".to_string(),
                "  .help          - Show this help message".to_string(),
                "  .tokens <src>  - Show the tokens of <src>".to_string(),
                "  .trace on|off  - Toggle the parser trace".to_string(),
                "  .exit          - Exit the REPL".to_string(),
                "  exit           - Exit the REPL".to_string(),
                "  quit           - Exit the REPL".to_string(),
            ],
            (".tokens", source) => tokenize(source.to_string(), None)
                .iter()
                .map(|token| token.debug())
                .collect(),
            (".trace", "on") => {
                self.trace = true;
                vec!["Tracing enabled".to_string()]
            }
            (".trace", "off") => {
                self.trace = false;
                vec!["Tracing disabled".to_string()]
            }
            (".trace", "") => vec![format!(
                "Tracing: {}",
                if self.trace { "enabled" } else { "disabled" }
            )],
            _ => vec![
                format!("Unknown command: {}", command),
                "Type .help for available commands".to_string(),
            ],
        }
    }
}

/// Parses one line and returns what the REPL prints for it.
///
/// Diagnostics are printed one per line, indented with a tab, and the tree
/// is discarded. Otherwise the tree's canonical rendering is printed.
pub fn evaluate_line(line: &str, trace: bool) -> Vec<String> {
    let lexer = Lexer::new(line.to_string(), None);
    let mut parser = if trace {
        Parser::with_tracing(lexer)
    } else {
        Parser::new(lexer)
    };

    let program = parser.parse_program();
    let mut output = parser.trace_lines().to_vec();

    if parser.errors().is_empty() {
        output.push(program.to_string());
    } else {
        output.extend(parser.errors().iter().map(|error| format!("\t{}", error)));
    }

    output
}

/// Run the interactive REPL
///
/// # Returns
/// `Ok(())` when the user exits, or the editor error that ended the session
pub fn run_repl(repl: &mut Repl) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    println!("inti parser v{}", env!("CARGO_PKG_VERSION"));
    println!("Type an expression, .help for commands or 'exit' to quit.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }

                match repl.handle_line(&line) {
                    Action::Print(lines) => {
                        for line in lines {
                            println!("{}", line);
                        }
                    }
                    Action::Exit => break,
                }
            }
            // Ctrl-C drops the current line
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
