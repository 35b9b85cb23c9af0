use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use meeny::{
    error::Error,
    interpreter::{evaluator::core::Options, lexer::tokenize},
    parse, run_with_io,
};
use tracing::Level;

/// meeny runs programs written in a small imperative teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the source file to run.
    file: PathBuf,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the token stream and exit without parsing.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed syntax tree and exit without running it.
    #[arg(long)]
    ast: bool,

    /// Do not report declared variables that were never written.
    #[arg(long)]
    no_warnings: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        return ExitCode::FAILURE;
    };

    match execute(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", e.kind_name());
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args, source: &str) -> Result<(), Error> {
    if args.tokens {
        for (token, line) in tokenize(source)? {
            println!("{line:>4}  {token:?}");
        }
        return Ok(());
    }

    if args.ast {
        println!("{:#?}", parse(source)?);
        return Ok(());
    }

    let options = Options { warn_unused: !args.no_warnings };
    run_with_io(source,
                io::stdin().lock(),
                BufWriter::new(io::stdout().lock()),
                options)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
