use clap::{Parser, Subcommand};
use colored::Colorize;
use palindrome_core::{CharClass, CheckReport};
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Palindrome — check text for palindromes, ignoring case and punctuation
///
/// With no TEXT arguments, each line of stdin is checked.
#[derive(Parser)]
#[command(name = "palindrome", version, about, long_about = None)]
struct Cli {
    /// Suppress stdout (exit code is unaffected)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether each input is a palindrome (prints true/false)
    Check {
        /// Text to check; reads stdin lines if omitted
        text: Vec<String>,
        /// Output one JSON report per input
        #[arg(long)]
        json: bool,
        /// Only ASCII letters and digits count
        #[arg(long)]
        ascii: bool,
    },

    /// Print the normalized form that the check compares
    Normalize {
        /// Text to normalize; reads stdin lines if omitted
        text: Vec<String>,
        /// Only ASCII letters and digits count
        #[arg(long)]
        ascii: bool,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn char_class(ascii: bool) -> CharClass {
    if ascii {
        CharClass::Ascii
    } else {
        CharClass::Unicode
    }
}

/// Check the given texts, or stdin lines when there are none,
/// handing each report to `f` as soon as it is produced
fn for_each_report(
    text: &[String],
    class: CharClass,
    mut f: impl FnMut(CheckReport) -> io::Result<()>,
) -> palindrome_core::Result<usize> {
    let mut count = 0;
    if text.is_empty() {
        debug!("reading stdin");
        for report in palindrome_core::check_lines(io::stdin().lock(), class) {
            f(report?)?;
            count += 1;
        }
    } else {
        for t in text {
            f(palindrome_core::check(t, class))?;
            count += 1;
        }
    }
    Ok(count)
}

/// Write one line to stdout unless `--quiet` is set
fn emit(out: &mut impl Write, quiet: bool, line: &str) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(out, "{}", line)
}

fn run(cli: Cli) -> palindrome_core::Result<()> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Check { text, json, ascii } => {
            let class = char_class(ascii);
            let inputs = for_each_report(&text, class, |r| {
                if json {
                    emit(&mut out, cli.quiet, &serde_json::json!(r).to_string())
                } else {
                    emit(&mut out, cli.quiet, &r.palindrome.to_string())
                }
            })?;
            debug!(inputs, %class, "check");
        }
        Commands::Normalize { text, ascii } => {
            for_each_report(&text, char_class(ascii), |r| {
                emit(&mut out, cli.quiet, &r.normalized)
            })?;
        }
        Commands::Version => {
            let line = format!(
                "{} {} (palindrome-core {})",
                "palindrome".bold(),
                env!("CARGO_PKG_VERSION"),
                palindrome_core::VERSION
            );
            emit(&mut out, cli.quiet, &line)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Exit code is 0 for every verdict and every input. A failing stdin or
    // stdout is reported on stderr; output already written stays valid.
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
    }

    process::exit(0);
}
