use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::shared::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tmux-selector",
    version,
    about,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Output format [default: plain, or `format` from the config file]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Auto-select the most recently used pane
    #[arg(short, long)]
    pub auto: bool,

    /// Always prompt, even when the config file sets `auto: true`
    #[arg(short, long, conflicts_with = "auto")]
    pub interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Completions { shell } => {
                let mut command = Cli::command();
                let bin_name = command.get_name().to_string();
                clap_complete::generate(*shell, &mut command, bin_name, &mut io::stdout());
            }
        }
        Ok(())
    }
}
