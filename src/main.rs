//! URI Template Lint CLI
//!
//! Usage:
//!   uri-template-lint [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Lint configuration (TOML format)
//!   -d, --debug          Log parser decisions to stderr
//!       --deny           Exit with an error when warnings remain
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use uri_template_lint::{check_document, LintConfig};

#[derive(Parser)]
#[command(name = "uri-template-lint")]
#[command(about = "Check RFC 6570 URI templates, one per line")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Lint configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug mode: log parser decisions to stderr
    #[arg(short, long)]
    debug: bool,

    /// Exit with status 1 when any warning is reported
    #[arg(long)]
    deny: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    // Load config
    let config = match &cli.config {
        Some(path) => match LintConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LintConfig::default(),
    };
    let config = if cli.deny {
        config.with_deny_warnings(true)
    } else {
        config
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let (parsed, report) = check_document(&source);

    let mut shown = 0;
    for warning in config.visible(&report) {
        eprint!("{}", warning.format(&source, &filename));
        shown += 1;
    }
    println!(
        "{}: {} template(s) checked, {} warning(s)",
        filename,
        parsed.len(),
        shown
    );

    if config.fails(&report) {
        std::process::exit(1);
    }
}
