use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::review::ReviewCommands;

#[derive(Parser)]
#[command(
    name = "reviewkit",
    bin_name = "rk",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Activity review operations
    Review {
        /// API base URL (overrides REVIEWKIT_SERVER_ENDPOINT and the config file)
        #[arg(long, global = true)]
        server: Option<String>,

        #[command(subcommand)]
        command: ReviewCommands,
    },

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
