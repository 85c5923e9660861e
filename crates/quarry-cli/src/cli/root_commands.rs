use clap::Subcommand;

use crate::cli::subcommands::{DataSourceCommands, GroupCommands, OrgCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Users.
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Groups and their permissions.
    Groups {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Organizations.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Data sources.
    #[command(alias = "data-sources")]
    Ds {
        #[command(subcommand)]
        action: DataSourceCommands,
    },
}
