use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user.
    Create {
        email: String,
        name: String,
        /// Organization slug (defaults to the configured default organization)
        #[arg(long)]
        org: Option<String>,
        /// Add the user to the admin group
        #[arg(long)]
        admin: bool,
        /// Sign in through Google only; no password is stored
        #[arg(long)]
        google: bool,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Comma-separated group ids (defaults to the default group)
        #[arg(long)]
        groups: Option<String>,
    },
    /// Delete every user with the email.
    Delete {
        email: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// Set a user's password.
    Password {
        email: String,
        password: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// Add a user to the admin group.
    GrantAdmin {
        email: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// Create a user and send an invitation.
    Invite {
        email: String,
        name: String,
        inviter_email: String,
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        admin: bool,
        #[arg(long)]
        groups: Option<String>,
    },
    /// List users.
    List {
        #[arg(long)]
        org: Option<String>,
    },
}
