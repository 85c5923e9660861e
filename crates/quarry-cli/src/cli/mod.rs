use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::GlobalFlags;
pub use root_commands::Commands;

/// Top-level CLI parser for the `quarry` binary.
#[derive(Debug, Parser)]
#[command(
    name = "quarry",
    version,
    about = "Quarry - administration of users, groups, organizations, and data sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (overrides `database.path`)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            database: self.database.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
