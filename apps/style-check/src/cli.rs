use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_RULES_PATH: &str = "Rules/style_guide.json";

#[derive(Parser, Debug)]
#[command(name = "style-check")]
#[command(version, about = "Check documents against a house style guide")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate a document and report style issues
    Check(CheckArgs),

    /// Show the normalized rule list
    Rules(RulesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Document to check: `.json` for a serialized document, anything else
    /// is plain text with one paragraph per line
    pub document: PathBuf,

    /// Style guide rule file
    #[arg(long, env = "STYLE_CHECK_RULES", default_value = DEFAULT_RULES_PATH)]
    pub rules: PathBuf,

    /// Engine configuration (JSON)
    #[arg(long, env = "STYLE_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra word frequency list merged into the built-in lexicon
    #[arg(long)]
    pub frequencies: Option<PathBuf>,

    /// Report format on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the annotated document here (`.html` renders HTML, otherwise JSON)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    /// Style guide rule file
    #[arg(long, env = "STYLE_CHECK_RULES", default_value = DEFAULT_RULES_PATH)]
    pub rules: PathBuf,

    /// Rewrite the file using the current section names
    #[arg(long)]
    pub migrate: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
