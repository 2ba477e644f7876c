//! Command-line interface for indentree
//! Builds the block tree of a text file (or stdin) and prints it in one of the registered formats.
//!
//! Usage:
//!   indentree [`<path>`|-] [--format `<format>`] [--no-strip] [--no-empty-lines] [--config `<file>`]
//!   indentree --list-formats                  - List all available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use indentree::config::{IndentreeConfig, Loader};
use indentree::{Error, Processor};
use std::io::Read;
use tracing::{debug, info};

fn main() {
    let matches = Command::new("indentree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build a tree from text using leading-whitespace depth")
        .arg(
            Arg::new("path")
                .help("Path to the input file; reads stdin when absent or '-'")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'sexp', 'tag', 'treeviz', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("no-strip")
                .long("no-strip")
                .help("Keep trailing whitespace in block text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-empty-lines")
                .long("no-empty-lines")
                .help("Drop blank lines instead of emitting blank blocks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity on stderr (-v, -vv)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let processor = Processor::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&processor);
        return;
    }

    let path = matches.get_one::<String>("path").map(String::as_str);
    match handle_build_command(&processor, path) {
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Error::Format(_) = e {
                eprintln!(
                    "\nAvailable formats: {}",
                    processor.formats().names().collect::<Vec<_>>().join(", ")
                );
            }
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout only ever carries the serialized tree.
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbosity {
        0 => "indentree=warn",
        1 => "indentree=debug",
        _ => "indentree=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then command-line flags.
fn load_config(matches: &ArgMatches) -> indentree::Result<IndentreeConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering config file");
        loader = loader.with_file(path);
    }
    if matches.get_flag("no-strip") {
        loader = loader.set_override("build.strip", false)?;
    }
    if matches.get_flag("no-empty-lines") {
        loader = loader.set_override("build.track_empty_lines", false)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Handle the default command: build and serialize one input
fn handle_build_command(processor: &Processor, path: Option<&str>) -> indentree::Result<String> {
    let format = processor.default_format();
    match path {
        Some(path) if path != "-" => {
            info!(path, format, "building file");
            processor.load_and_execute(path, format)
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| Error::io("<stdin>", e))?;
            info!(format, "building stdin");
            Ok(processor.execute(&source, format)?)
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(processor: &Processor) {
    println!("Available output formats:\n");

    for (name, description) in processor.formats().entries() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
