mod cli;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use lsystem::{parser, LSystem, SyntaxError};
use tracing_subscriber::EnvFilter;

fn summary(path: &Path, lsystem: &LSystem) -> String {
    format!(
        "{}: {} generations, angle {}, scale {}, {} axiom symbols, {} productions for {} predecessors",
        path.display(),
        lsystem.generations,
        lsystem.angle,
        lsystem.scale,
        lsystem.axiom.len(),
        lsystem.production_count(),
        lsystem.productions.len()
    )
}

// Parses one file and prints it the way the flags ask for. Errors come back
// ready to print
fn run(path: &Path, cli: &Cli) -> Result<(), String> {
    let lsystem = File::open(path)
        .map_err(SyntaxError::from)
        .and_then(parser::parse_reader)
        .map_err(|e| e.in_file(path).to_string())?;

    let warnings = parser::verify(&lsystem);
    for warning in &warnings {
        eprintln!("{}: warning: {}", path.display(), warning);
    }
    if cli.strict && !warnings.is_empty() {
        return Err(format!("{}: {} warning(s) treated as errors", path.display(), warnings.len()));
    }

    if cli.canonical {
        print!("{}", lsystem);
    } else if cli.debug {
        println!("{:#?}", lsystem);
    } else {
        println!("{}", summary(path, &lsystem));
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut failed = false;

    for path in &cli.files {
        if let Err(message) = run(path, &cli) {
            eprintln!("{}", message);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
