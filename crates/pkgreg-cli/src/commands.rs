//! Main commands enum.

use clap::Subcommand;

use pkgreg_core::DEFAULT_PORT;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the registry HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PKGREG_PORT")]
        port: u16,
        /// Allowed CORS origin (repeatable); all origins when omitted
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Record a new package version in the local registry database
    Publish {
        /// Package name
        name: String,
        /// Version number (e.g. 1.2.0)
        version: String,
        /// Publishing user
        #[arg(long, default_value_t = 1)]
        user_id: i64,
    },

    /// List packages
    List {
        /// 1-based page number
        #[arg(long)]
        page: Option<i64>,
        /// Packages per page (at most 100)
        #[arg(long)]
        per_page: Option<i64>,
        /// Only packages starting with this letter
        #[arg(long)]
        letter: Option<String>,
    },

    /// Show a package and its versions
    Show {
        /// Package name
        name: String,
    },

    /// Show registry statistics
    Summary,

    /// Download a package version
    Download {
        /// Package name
        package: String,
        /// Version number
        version: String,
        /// Print the resolved URL instead of opening it
        #[arg(long)]
        print_only: bool,
    },
}
