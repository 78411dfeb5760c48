//! Command-line interface for gocolonize
//! This binary adds the implicit semicolons to Go source files.
//!
//! Usage:
//!   gocolonize `<file>`...                 - Rewrite the given files in place
//!   gocolonize -d out -r `<dir>`           - Colonize a tree into another directory
//!   gocolonize                             - Read STDIN, write STDOUT

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use gocolonize::files::{self, OutputTemplate};
use gocolonize::{scanning, version, Colonizer, Error, OnParseError};

fn main() -> ExitCode {
    init_logging();

    let matches = Command::new("gocolonize")
        .version(version::VERSION)
        .long_version(Box::leak(version::long_version().into_boxed_str()) as &str)
        .about("Adds the implicit semicolons to Go source files")
        .arg(
            Arg::new("input")
                .help("Input files or directories; '-' or nothing reads STDIN")
                .value_parser(clap::value_parser!(PathBuf))
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .help("Recurse into directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('d')
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write outputs into DIR instead of next to the inputs"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .value_name("PREFIX")
                .help("Prepend PREFIX to each output file name"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .value_name("SUFFIX")
                .help("Append SUFFIX to each output file stem"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .value_name("EXT")
                .help("Replace the output file extension with EXT"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("List the input -> output pairs without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("on-error")
                .long("on-error")
                .value_parser(["fatal", "warn", "ignore"])
                .default_value("warn")
                .help("What to do with lexical anomalies"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token lines as JSON instead of colonizing")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let policy = match matches.get_one::<String>("on-error").map(String::as_str) {
        Some("fatal") => OnParseError::Fatal,
        Some("ignore") => OnParseError::Ignore,
        _ => OnParseError::Warn,
    };
    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let template = OutputTemplate {
        dir: matches.get_one::<PathBuf>("output-dir").cloned(),
        prefix: matches.get_one::<String>("prefix").cloned(),
        suffix: matches.get_one::<String>("suffix").cloned(),
        extension: matches.get_one::<String>("ext").cloned(),
    };
    let recursive = matches.get_flag("recursive");
    let dry_run = matches.get_flag("dry-run");
    let dump_tokens = matches.get_flag("tokens");

    let stdin_only = inputs.is_empty() || (inputs.len() == 1 && inputs[0] == Path::new("-"));
    if stdin_only {
        run_stdin(policy, dump_tokens)
    } else {
        run_files(&inputs, recursive, &template, policy, dry_run, dump_tokens)
    }
}

/// Colonize standard input to standard output.
fn run_stdin(policy: OnParseError, dump_tokens: bool) -> ExitCode {
    let result = if dump_tokens {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(Error::from)
            .and_then(|_| print_tokens(&source))
    } else {
        files::open_input(None)
            .and_then(|input| files::open_output(None).map(|output| (input, output)))
            .map_err(Error::from)
            .and_then(|(mut input, mut output)| {
                Colonizer::new(policy).colonize(&mut input, &mut output)
            })
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("stdin: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Process the resolved file list, continuing past per-file failures.
fn run_files(
    inputs: &[PathBuf],
    recursive: bool,
    template: &OutputTemplate,
    policy: OnParseError,
    dry_run: bool,
    dump_tokens: bool,
) -> ExitCode {
    let found = match files::discover(inputs, recursive) {
        Ok(found) => found,
        Err(error) => {
            tracing::error!("discovering inputs: {error}");
            return ExitCode::FAILURE;
        }
    };
    if found.is_empty() {
        tracing::warn!("no input files found");
        return ExitCode::SUCCESS;
    }

    let colonizer = Colonizer::new(policy);
    let mut failed = false;
    for input in &found {
        let output_path = template.resolve(input);
        if dry_run {
            println!("{} -> {}", input.display(), output_path.display());
            continue;
        }
        if let Err(error) = process_file(&colonizer, input, &output_path, dump_tokens) {
            tracing::error!("{}: {error}", input.display());
            failed = true;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process_file(
    colonizer: &Colonizer,
    input: &Path,
    output_path: &Path,
    dump_tokens: bool,
) -> Result<(), Error> {
    // Read fully up front; an in-place rewrite would otherwise truncate its
    // own input before scanning it.
    let source = fs::read_to_string(input)?;
    if dump_tokens {
        return print_tokens(&source);
    }
    let output = colonizer.colonize_str(&source)?;
    fs::write(output_path, output)?;
    Ok(())
}

/// Dump the token lines of one input as JSON.
fn print_tokens(source: &str) -> Result<(), Error> {
    let lines = scanning::tokenize(source);
    let json = serde_json::to_string_pretty(&lines).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
