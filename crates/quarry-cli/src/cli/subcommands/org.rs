use clap::Subcommand;

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// List organizations.
    List,
    /// Create an organization with its builtin groups.
    Create {
        name: String,
        /// URL slug (defaults to the lower-cased name)
        #[arg(long)]
        slug: Option<String>,
    },
    /// Replace the Google Apps domain allow-list.
    SetGoogleAppsDomains {
        /// Comma-separated domains
        domains: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// Show the Google Apps domain allow-list.
    ShowGoogleAppsDomains {
        #[arg(long)]
        org: Option<String>,
    },
}
