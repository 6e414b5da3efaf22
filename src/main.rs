mod cli;
mod config;
mod error;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::FulfillmentConfig;
use error::FulfillmentError;
use fulfillment_status::{
    OrderSnapshot, PickingProgress, PickingSnapshot, Reported, RolePolicy, StatusResolver,
};
use ui::{InspectReport, Renderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => FulfillmentConfig::load_from(path),
        None => FulfillmentConfig::load(),
    }
    .context("failed to load configuration")?;

    let renderer = Renderer::new(config.bar_width, config.color && !cli.no_color);

    match cli.command {
        Command::Badge { status, picking } => {
            let picking = read_picking(picking.as_deref())?;
            let display = StatusResolver::resolve(&Reported::parse(&status), picking.as_ref());
            renderer.badge(&display);
        }
        Command::Progress { picking } => {
            let picking = read_picking(Some(picking.as_path()))?;
            renderer.progress(&PickingProgress::summarize(picking.as_ref()))?;
        }
        Command::Actions { status, role } => {
            let role = config.role(role.as_deref())?;
            let order = OrderSnapshot {
                status: Reported::parse(&status),
            };
            renderer.actions(&role, &RolePolicy::next_statuses(&order, &role));
        }
        Command::Inspect {
            order,
            picking,
            role,
            json,
        } => {
            let order: OrderSnapshot = read_json(&order)?;
            let picking = read_picking(picking.as_deref())?;
            let role = config.role(role.as_deref())?;

            let report = InspectReport {
                display: StatusResolver::resolve(&order.status, picking.as_ref()),
                progress: PickingProgress::summarize(picking.as_ref()),
                next_statuses: RolePolicy::next_statuses(&order, &role),
                role,
            };

            if json {
                renderer.report(&report)?;
            } else {
                renderer.badge(&report.display);
                renderer.progress(&report.progress)?;
                renderer.actions(&report.role, &report.next_statuses);
            }
        }
        Command::Graph => renderer.graph(),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FulfillmentError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FulfillmentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// A file holding `null` is read as "no picking yet".
fn read_picking(path: Option<&Path>) -> Result<Option<PickingSnapshot>, FulfillmentError> {
    match path {
        Some(path) => read_json::<Option<PickingSnapshot>>(path),
        None => Ok(None),
    }
}
