use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "molc",
    about = "Compile MMT device descriptions to MMB binary artifacts",
    version,
    author
)]
pub struct Cli {
    /// Input MMT file (prompts for a filename, or reads stdin when piped)
    #[arg(value_name = "SRC")]
    pub src: Option<PathBuf>,

    /// Output MMB file
    #[arg(short, long, value_name = "FILE", default_value = "compiled.mmb")]
    pub output: PathBuf,

    /// Trailing delimiter stripped from each value
    #[arg(
        long,
        value_name = "CHAR",
        default_value_t = ';',
        conflicts_with = "no_terminator"
    )]
    pub terminator: char,

    /// Treat values as bare (no trailing delimiter)
    #[arg(long)]
    pub no_terminator: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
