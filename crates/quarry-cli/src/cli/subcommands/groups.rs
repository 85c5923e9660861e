use clap::Subcommand;

/// Group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// Create a regular group.
    Create {
        name: String,
        /// Comma-separated permissions (defaults to the configured set)
        #[arg(long)]
        permissions: Option<String>,
        #[arg(long)]
        org: Option<String>,
    },
    /// Replace the permissions of a group.
    ChangePermissions {
        group_id: i64,
        #[arg(long)]
        permissions: Option<String>,
    },
    /// List groups.
    List {
        #[arg(long)]
        org: Option<String>,
    },
}
