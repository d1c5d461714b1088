use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jar-finder")]
#[command(about = "Find which jar files under the given directories contain a Java class")]
pub struct Cli {
    /// Fully-qualified (`com.foo.Bar`) or bare (`Bar`) class name.
    #[arg(value_name = "CLASS_NAME")]
    pub class_name: Option<String>,

    /// Directories or jar files to search; defaults to the current directory.
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
