use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mixkit",
    about = "mixkit — merge objects and inspect the standard namespace",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge JSON objects left to right
    Merge(MergeArgs),
    /// Run every type predicate against a JSON value
    Check(CheckArgs),
    /// Show the detected environment
    Env(EnvArgs),
    /// List registered methods and utilities
    List(ListArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Target object followed by one or more sources, as JSON text
    #[arg(required = true, num_args = 2..)]
    pub objects: Vec<String>,
    /// Overwrite colliding keys instead of merging them
    #[arg(long)]
    pub shallow: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// JSON value to classify
    pub value: String,
}

#[derive(Args)]
pub struct EnvArgs {}

#[derive(Args)]
pub struct ListArgs {}
