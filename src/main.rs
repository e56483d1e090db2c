use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Once,
    time::Instant,
};

use calculator::{
    ast::expressions::{add, multiply, number, subtract},
    display_error,
    errors::errors::Error,
    interpreter::interpreter::{Interpreter, InterpreterConfig, DEFAULT_MAX_CALL_DEPTH},
    lexer::lexer::tokenize,
    parser::parser::{parse_program, parse_statements},
};
use clap::Parser;

/// Runs programs written in a small expression language.
///
/// A program is a list of `global` and `define` definitions; its value is the
/// value of `main()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run.
    file: Option<PathBuf>,

    /// Run program text given on the command line instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Start an interactive session evaluating one line at a time.
    #[arg(short, long, conflicts_with_all = ["file", "eval"])]
    repl: bool,

    /// Print the tokens of the program instead of running it.
    #[arg(long)]
    tokens: bool,

    /// Pretty-print the parsed program instead of running it.
    #[arg(long)]
    ast: bool,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,
}

static TRACING_INIT: Once = Once::new();

/// Installs the log subscriber, once, and only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let config = InterpreterConfig {
        max_call_depth: args.max_depth,
        ..InterpreterConfig::default()
    };

    if args.repl {
        return repl(config);
    }

    let (source, file_name) = match (&args.file, &args.eval) {
        (Some(path), _) => match read_to_string(path) {
            Ok(source) => (source, file_name(path)),
            Err(error) => {
                eprintln!("Failed to read '{}': {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(source)) => (source.clone(), String::from("eval")),
        (None, None) => return demo(config),
    };

    match run_source(&args, config, &source, file_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, &source);
            ExitCode::FAILURE
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run_source(
    args: &Args,
    config: InterpreterConfig,
    source: &str,
    file_name: String,
) -> Result<(), Error> {
    if args.tokens {
        for token in tokenize(source, Some(file_name))? {
            println!("{}", token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let program = parse_program(source, Some(file_name))?;
    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");

    if args.ast {
        print!("{}", program);
        return Ok(());
    }

    let run_start = Instant::now();
    let value = Interpreter::with_config(config).run_program(&program)?;
    tracing::info!(elapsed = ?run_start.elapsed(), "ran main");

    println!("{}", value);
    Ok(())
}

/// Evaluates `(1 - 2 * 3) + 4` and prints the result.
fn demo(config: InterpreterConfig) -> ExitCode {
    let expr = add(
        subtract(number(1), multiply(number(2), number(3))),
        number(4),
    );

    match Interpreter::with_config(config).interpret(&expr) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, "");
            ExitCode::FAILURE
        }
    }
}

/// Reads one line at a time. Lines starting with `define` or `global` are
/// registered as definitions, anything else is evaluated as statements and
/// the value of the last one printed. Errors are reported and the line is
/// dropped; bindings from earlier lines survive.
fn repl(config: InterpreterConfig) -> ExitCode {
    let mut interpreter = Interpreter::with_config(config);
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Failed to read input: {}", error);
                return ExitCode::FAILURE;
            }
        }

        let first_word = line
            .trim_start()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .next()
            .unwrap_or_default();
        let result = if matches!(first_word, "define" | "global") {
            parse_program(&line, None)
                .and_then(|program| interpreter.register(&program))
                .map(|()| None)
        } else {
            parse_statements(&line, None).and_then(|statements| {
                let mut value = None;
                for statement in &statements {
                    value = Some(interpreter.interpret_one(statement)?);
                }
                Ok(value)
            })
        };

        match result {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => {}
            Err(error) => display_error(&error, &line),
        }
    }
}
