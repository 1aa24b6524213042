//! ulisp - dump the tokens of a micro LISP program.
//!
//! Reads a whole program from a file or stdin and prints one lexeme per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ulisp::{Reader, Token};

/// Print the lexemes of a micro LISP program
#[derive(Parser, Debug)]
#[command(name = "ulisp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the lexemes of a micro LISP program", long_about = None)]
struct Cli {
    /// Source file (default: stdin)
    file: Option<PathBuf>,

    /// Print one JSON object per token
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, env = "ULISP_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "ULISP_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color).and_then(|_| run(&cli)) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only tokens. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let reader = match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Reader::from_reader(file)?
        }
        None => Reader::from_reader(io::stdin().lock())?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;

    for token in reader {
        match token {
            Ok(token) => {
                write_token(&mut out, &token, cli.json)?;
                count += 1;
            }
            Err(e) => {
                // Tokens read before the error are still shown
                out.flush()?;
                return Err(e.into());
            }
        }
    }

    out.flush()?;
    tracing::debug!(count, "done");
    Ok(())
}

fn write_token<W: Write>(out: &mut W, token: &Token, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, token)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
