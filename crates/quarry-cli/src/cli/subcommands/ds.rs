use clap::Subcommand;

/// Data source commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DataSourceCommands {
    /// Create a data source (prompts for anything omitted).
    New {
        name: Option<String>,
        #[arg(long = "type")]
        connector_type: Option<String>,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
        #[arg(long)]
        org: Option<String>,
    },
    /// Edit a data source.
    Edit {
        name: String,
        /// New name
        #[arg(long = "name")]
        new_name: Option<String>,
        #[arg(long = "type")]
        connector_type: Option<String>,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
        #[arg(long)]
        org: Option<String>,
    },
    /// Delete a data source.
    Delete {
        name: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// Test the connection of a data source.
    Test {
        name: String,
        #[arg(long)]
        org: Option<String>,
    },
    /// List data sources.
    List {
        #[arg(long)]
        org: Option<String>,
    },
}
