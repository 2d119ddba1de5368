use std::{fs::read_to_string, process::ExitCode, time::Instant};

use clap::Parser as ClapParser;
use inti::{
    display_error,
    Cli,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
    repl::{run_repl, Repl},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.file {
        Some(file_path) => parse_file(file_path, &cli),
        None => {
            let mut repl = Repl::new(cli.trace);
            match run_repl(&mut repl) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("Readline error: {}", error);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn parse_file(file_path: &str, cli: &Cli) -> ExitCode {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let start = Instant::now();

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    if cli.tokens {
        for token in tokenize(file_contents.clone(), Some(String::from(file_name))) {
            println!("{}", token.debug());
        }
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let lexer = Lexer::new(file_contents.clone(), Some(String::from(file_name)));
    let mut parser = if cli.trace {
        Parser::with_tracing(lexer)
    } else {
        Parser::new(lexer)
    };
    let program = parser.parse_program();

    eprintln!("Parsed in {:?}", parse_start.elapsed());

    for line in parser.trace_lines() {
        println!("{}", line);
    }

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            display_error(error, &file_contents);
        }
        eprintln!("{} error(s) found", parser.errors().len());
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    eprintln!("Total time: {:?}", start.elapsed());

    ExitCode::SUCCESS
}
