//! Command line interface of the `rpncalc` calculator.

mod logging;

use std::{cell::Cell, process::ExitCode};

use clap::{CommandFactory as _, Parser, ValueEnum};
use rpncalc::{
    base::{self, log::SourceCodeDisplay, Handler},
    util,
};

/// Evaluates an arithmetic expression and shows its tokens, its postfix form and its value.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Raises the log level (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// The expression to evaluate. Multiple words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    expression: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Prints diagnostics together with the part of the expression they point at.
struct ExpressionPrinter<'a> {
    expression: &'a str,
    printed: Cell<bool>,
}

impl<'a> ExpressionPrinter<'a> {
    fn new(expression: &'a str) -> Self {
        Self {
            expression,
            printed: Cell::new(false),
        }
    }
}

impl Handler<base::Error> for ExpressionPrinter<'_> {
    fn receive(&self, error: base::Error) {
        eprintln!("{error}");

        if let Some(position) = error.position() {
            eprintln!(
                "{}",
                SourceCodeDisplay::new(self.expression, position, Option::<u8>::None)
            );
        }

        self.printed.set(true);
    }

    fn has_received(&self) -> bool {
        self.printed.get()
    }
}

/// Runs the stages one by one, printing the output of each stage before starting the next.
fn run(expression: &str, handler: &impl Handler<base::Error>) -> base::Result<()> {
    let tokens = rpncalc::tokenize(expression, handler)?;
    println!("Tokens: {tokens}");

    let postfix = rpncalc::to_postfix(&tokens, handler)?;
    println!("RPN:    {postfix}");

    let value = rpncalc::evaluate_postfix(&postfix, handler)?;
    println!("Result: {}", util::format_number(value));

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.color.apply();
    logging::init(args.verbose);

    if args.expression.is_empty() {
        if let Err(err) = Args::command().print_help() {
            tracing::error!("Failed to print usage: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let expression = args.expression.join(" ");
    tracing::info!(%expression, "Evaluating expression");

    let printer = ExpressionPrinter::new(&expression);

    match run(&expression, &printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => {
            tracing::debug!(reported = printer.has_received(), "Evaluation failed");
            ExitCode::FAILURE
        }
    }
}
