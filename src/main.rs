use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use macaque::{
    error::ParseError,
    interpreter::{
        evaluator::core::{DEFAULT_MAX_CALL_DEPTH, EvalConfig, Evaluator},
        lexer::Lexer,
        parser::parse,
        token::TokenKind,
        value::environment::{Env, Environment},
    },
};

const PROMPT: &str = ">> ";

/// macaque runs Monkey programs, either from a file or line by line in an
/// interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Without it, an interactive prompt starts.
    file: Option<PathBuf>,

    /// What to do with the input: print its tokens, print its syntax tree,
    /// or evaluate it.
    #[arg(short, long, value_enum, default_value_t = Mode::Eval)]
    mode: Mode,

    /// Maximum number of nested function calls before evaluation fails.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Lex,
    Parse,
    Eval,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let config = EvalConfig { max_call_depth: args.max_depth };

    match &args.file {
        Some(path) => run_file(path, args.mode, config),
        None => {
            repl(args.mode, config);
            ExitCode::SUCCESS
        },
    }
}

/// Installs a stderr subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_file(path: &Path, mode: Mode, config: EvalConfig) -> ExitCode {
    let script = match fs::read_to_string(path) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    match mode {
        Mode::Lex => print_tokens(&script),
        Mode::Parse => {
            let (program, errors) = parse(&script);
            if !errors.is_empty() {
                print_parse_errors(&errors);
                return ExitCode::FAILURE;
            }
            println!("{program}");
        },
        Mode::Eval => {
            let (program, errors) = parse(&script);
            if !errors.is_empty() {
                print_parse_errors(&errors);
                return ExitCode::FAILURE;
            }

            let env = Environment::new().into_shared();
            let result = Evaluator::new(config).evaluate(&program, &env);

            if result.is_error() {
                println!("{}", result.inspect());
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn repl(mut mode: Mode, config: EvalConfig) {
    let env = Environment::new().into_shared();
    let mut evaluator = Evaluator::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();

        match line {
            "exit" | "exit()" => {
                println!("Exiting...");
                break;
            },
            "mode=lexing" => mode = switch_mode(Mode::Lex, "lexing"),
            "mode=parsing" => mode = switch_mode(Mode::Parse, "parsing"),
            "mode=eval" => mode = switch_mode(Mode::Eval, "eval"),
            "" => {},
            _ => handle_line(line, mode, &mut evaluator, &env),
        }
    }
}

fn switch_mode(mode: Mode, name: &str) -> Mode {
    println!("Entering {name} mode");
    println!("Successfully configured\n");
    mode
}

fn handle_line(line: &str, mode: Mode, evaluator: &mut Evaluator, env: &Env) {
    match mode {
        Mode::Lex => print_tokens(line),
        Mode::Parse => {
            let (program, errors) = parse(line);
            if errors.is_empty() {
                println!("{program}");
            } else {
                print_parse_errors(&errors);
            }
        },
        Mode::Eval => {
            let (program, errors) = parse(line);
            if errors.is_empty() {
                println!("{}", evaluator.evaluate(&program, env).inspect());
            } else {
                print_parse_errors(&errors);
            }
        },
    }
}

fn print_tokens(source: &str) {
    for token in Lexer::new(source).take_while(|token| !token.is(TokenKind::Eof)) {
        println!("{token}");
    }
}

fn print_parse_errors(errors: &[ParseError]) {
    println!("Error: Parsing errors found.");
    for error in errors {
        println!("{error}");
    }
}
