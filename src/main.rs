//! `sheetscript` command line compiler.
//!
//! Compiles a file given on the command line, or runs one stdin session:
//! source lines are read until a line reading `EOF`, then compiled.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sheetscript::SheetScriptError;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const END_OF_SOURCE: &str = "EOF";
const GENERIC_FAILURE: &str = "Error occurred while compiling";

#[derive(Parser, Debug)]
#[command(name = "sheetscript", about = "Compile SheetScript to a spreadsheet formula", version)]
struct Cli {
    /// Source file; a stdin session is read when omitted
    input: Option<PathBuf>,

    /// Print the compiler's diagnostic instead of the generic message
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read standard input: {0}")]
    Stdin(#[from] io::Error),

    #[error(transparent)]
    Compile(#[from] SheetScriptError),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read lines until one whose trimmed text is `EOF`, or the stream ends.
fn read_session(input: impl BufRead) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim() == END_OF_SOURCE {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn read_source(cli: &Cli) -> Result<String, CliError> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        None => {
            println!("Enter your SheetScript program, then a line containing only {END_OF_SOURCE}:");
            io::stdout().flush()?;
            Ok(read_session(io::stdin().lock())?)
        }
    }
}

fn run(source: &str) -> Result<(), CliError> {
    let program = sheetscript::compile(source)?;
    info!(
        classes = ?program.classes,
        functions = ?program.functions,
        "compiled"
    );
    println!("{}", program.formula);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    debug!(?cli, "starting");

    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    match run(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Compile(error)) if cli.verbose => {
            eprint!("{}", error.display_with_source(&source));
            ExitCode::FAILURE
        }
        Err(error) => {
            debug!(%error, "compilation failed");
            println!("{}", GENERIC_FAILURE);
            ExitCode::FAILURE
        }
    }
}
