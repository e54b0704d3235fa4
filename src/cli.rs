use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Files containing L-system descriptions
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print each L-system back in canonical form
    #[arg(short, long, conflicts_with = "debug")]
    pub canonical: bool,

    /// Print the parsed model of each L-system
    #[arg(short, long)]
    pub debug: bool,

    /// Treat warnings (e.g. probabilities not adding up to 1) as errors
    #[arg(short, long)]
    pub strict: bool
}
