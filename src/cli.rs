//! Command line interface built on clap.
//!
//! Defines [`Cli`] with its [`Command`] subcommands (badge, progress, actions,
//! inspect, graph) and the global flags (--config, --verbose, --no-color).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect order fulfillment status: badges, picking progress and role actions.
#[derive(Debug, Parser)]
#[command(name = "fulfillment", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file (defaults to ./fulfillment.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable styled output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the status badge for an order.
    Badge {
        /// Order status code, e.g. APROBADO.
        status: String,

        /// JSON file with the picking snapshot.
        #[arg(long)]
        picking: Option<PathBuf>,
    },

    /// Show picking progress and completeness.
    Progress {
        /// JSON file with the picking snapshot.
        #[arg(long)]
        picking: PathBuf,
    },

    /// List the statuses a role may request next.
    Actions {
        /// Current order status code.
        status: String,

        /// Actor role (supervisor, bodeguero, transportista, admin).
        #[arg(long)]
        role: Option<String>,
    },

    /// Badge, progress and actions for an order snapshot.
    Inspect {
        /// JSON file with the order snapshot.
        #[arg(long)]
        order: PathBuf,

        /// JSON file with the picking snapshot.
        #[arg(long)]
        picking: Option<PathBuf>,

        /// Actor role (supervisor, bodeguero, transportista, admin).
        #[arg(long)]
        role: Option<String>,

        /// Emit a JSON report instead of styled text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the order transition table.
    Graph,
}
