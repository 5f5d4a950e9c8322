use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elo ratings for combat-sports fight records")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate every contest in the fight log and rebuild exports and database
    Process(ProcessArgs),
    /// Start the read-only ratings API
    Serve {
        /// Port number (optional, defaults to 5000)
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
    /// Print the stored fight history of a fighter
    History {
        /// Fighter name as it appears in the fight log
        fighter: String,
    },
    /// Compare two fighters side by side
    Compare {
        first: String,
        second: String,
    },
    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ProcessArgs {
    /// Fight log CSV
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The log lists the newest contests first
    #[arg(long)]
    pub newest_first: bool,

    #[arg(long)]
    pub k_factor: Option<f64>,

    /// K-factor multiplier for KO, TKO and submission wins
    #[arg(long)]
    pub finish_multiplier: Option<f64>,

    /// Rating given to a fighter on first appearance
    #[arg(long)]
    pub default_rating: Option<f64>,

    /// Per-contest rating snapshot CSV
    #[arg(long)]
    pub snapshots: Option<PathBuf>,

    /// Final leaderboard CSV
    #[arg(long)]
    pub leaderboard: Option<PathBuf>,
}
