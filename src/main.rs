use std::{collections::HashMap, process::ExitCode};

use clap::Parser;
use complexpr::interpreter::{
    environment::{Environment, Resolution, collect_variables},
    expression::Expression,
    value::Complex,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::Level;

/// complexpr evaluates arithmetic expressions over complex numbers and shows
/// how they were parsed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a one-letter variable, for example `--var x=3+2i`. May be
    /// repeated. Variables left unbound default to 0.
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, Complex)>,

    /// Prompts for every variable not bound with `--var`.
    #[arg(short, long)]
    interactive: bool,

    /// Compares the syntax tree of the expression with that of OTHER.
    #[arg(short, long, value_name = "OTHER")]
    compare: Option<String>,

    /// Prints debug logs to stderr.
    #[arg(long)]
    verbose: bool,

    /// The expression to evaluate, for example `(3+2i)*(1-i)`.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn parse_binding(s: &str) -> Result<(String, Complex), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let value = Complex::parse(value).map_err(|e| e.to_string())?;
    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut sources = vec![args.expression.as_str()];
    if let Some(other) = &args.compare {
        sources.push(other);
    }
    let environment = build_environment(&sources, args.vars, args.interactive)?;

    let mut first = Expression::new(args.expression.clone(), environment.clone());
    first.evaluate().map_err(|e| format!("Error: {e}"))?;

    match args.compare {
        Some(other) => {
            let mut second = Expression::new(other, environment);
            second.evaluate().map_err(|e| format!("Error: {e}"))?;

            print!("{}", first.comparison_report(&second));
            if first.same_structure(&second) {
                println!("The expressions are structurally identical.");
            } else {
                println!("The expressions are different.");
            }
        },
        None => print!("{}", first.report()),
    }

    Ok(())
}

/// Binds every variable the sources need, from `--var` first and then, in
/// interactive mode, from the terminal.
fn build_environment(sources: &[&str],
                     given: Vec<(String, Complex)>,
                     interactive: bool)
                     -> Result<Environment, String> {
    let given: HashMap<String, Complex> = given.into_iter().collect();
    let mut editor = if interactive {
        Some(DefaultEditor::new().map_err(|e| format!("Error: {e}"))?)
    } else {
        None
    };

    let mut resolver = |name: &str| {
        if let Some(value) = given.get(name) {
            return Resolution::Value(*value);
        }
        editor.as_mut()
              .map_or(Resolution::Unset, |editor| prompt(editor, name))
    };
    let mut environment =
        collect_variables(sources, &mut resolver).ok_or_else(|| "Cancelled.".to_string())?;

    for (name, value) in given {
        if !environment.contains(&name) {
            environment.insert(name, value);
        }
    }

    Ok(environment)
}

fn prompt(editor: &mut DefaultEditor, name: &str) -> Resolution {
    let line = match editor.readline(&format!("{name} (e.g. 3+2i, -1, 4i; empty for 0) = ")) {
        Ok(line) => line,
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Resolution::Cancelled,
        Err(e) => {
            eprintln!("Error: {e}");
            return Resolution::Cancelled;
        },
    };

    let line = line.trim();
    if line.is_empty() {
        return Resolution::Unset;
    }

    match Complex::parse(line) {
        Ok(value) => Resolution::Value(value),
        Err(e) => {
            eprintln!("Invalid value for {name}: {e}");
            Resolution::Cancelled
        },
    }
}
