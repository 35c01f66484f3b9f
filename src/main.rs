use std::process::ExitCode;

use arithtree::{evaluate, self_check};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

/// arithtree evaluates arithmetic expression trees over a set of variable
/// bindings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the built-in self-check suite and exits non-zero on failure.
    #[arg(short, long)]
    self_check: bool,

    /// Evaluates the demo expression `-Num1 + 2 * (4 - Num2)`.
    #[arg(short, long)]
    demo: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                 EnvFilter::new("warn")
                                             }))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if args.demo {
        let (environment, expr) = self_check::demo();
        println!("{expr}");
        println!("Result: {}", evaluate(&expr, &environment));
    }

    if args.self_check {
        let total = self_check::cases().len();
        let failures = self_check::run();
        for failure in &failures {
            eprintln!("{failure}");
        }
        println!("{} of {total} self-checks passed.", total - failures.len());
        if !failures.is_empty() {
            return ExitCode::FAILURE;
        }
    }

    if !args.demo
       && !args.self_check
       && let Err(e) = Args::command().print_help()
    {
        eprintln!("Failed to print usage: {e}");
    }

    ExitCode::SUCCESS
}
