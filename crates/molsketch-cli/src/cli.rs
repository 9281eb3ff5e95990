use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molsketch - drive the 2D structure-sketching model from the command line.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sketch a zigzag chain by repeatedly growing bonds and print the resulting atoms.
    Chain(ChainArgs),
    /// Print the six bond directions and the two candidate tripods.
    Directions(DirectionsArgs),
}

/// Session settings shared by the subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct SketchArgs {
    /// Path to a sketch configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the bond length from the config file.
    #[arg(short = 'b', long, value_name = "FLOAT")]
    pub bond_length: Option<f64>,
}

/// Arguments for the `chain` subcommand.
#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Number of atoms in the chain.
    #[arg(short = 'n', long, default_value_t = 6, value_name = "INT")]
    pub length: usize,

    /// Element label for the chain atoms, overriding the config file.
    #[arg(short, long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Path to a TOML file with additional label capacities.
    #[arg(long, value_name = "PATH")]
    pub valence: Option<PathBuf>,

    /// Draw the first bond upwards (as with a ctrl-click) instead of downwards.
    #[arg(long)]
    pub start_up: bool,

    #[command(flatten)]
    pub sketch: SketchArgs,
}

/// Arguments for the `directions` subcommand.
#[derive(Args, Debug)]
pub struct DirectionsArgs {
    #[command(flatten)]
    pub sketch: SketchArgs,
}
