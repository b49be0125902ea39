use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tagconst",
    about = "tagconst: generate Go string constants from a nested JSON tag tree",
    version
)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Go constants file and write it to the output path
    Generate {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the output file matches what generate would write
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the Go constants file to stdout without writing it
    Print {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Input/output selection shared by every command. Unset flags fall back to
/// the config file, then to built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// TOML config file providing defaults for the options below
    #[arg(long)]
    pub config: Option<String>,

    /// Input JSON document [default: tags.json]
    #[arg(long = "in")]
    pub input: Option<String>,

    /// Output Go file [default: tags.go]
    #[arg(long = "out")]
    pub output: Option<String>,

    /// Go package name [default: main]
    #[arg(short = 'p', long)]
    pub package: Option<String>,

    /// Top-level key whose subtree is walked instead of the whole document
    #[arg(long)]
    pub root: Option<String>,
}
