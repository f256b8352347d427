mod cmd_plans;
mod cmd_quote;
mod cmd_tui;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "credcalc",
    version,
    about = "Estimate subscription credit usage for messages and calls"
)]
struct Cli {
    /// Catalog YAML file (defaults to the user catalog, then the built-in plans)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the plans in the catalog
    Plans {
        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,
        /// Output as an editable catalog file (see --catalog)
        #[arg(long)]
        yaml: bool,
    },
    /// Compute credit consumption for one set of inputs
    Quote {
        /// Plan id (defaults to the catalog's default plan)
        #[arg(long)]
        plan: Option<String>,
        /// Messages sent; non-numeric input counts as 0, out-of-range input is clamped
        #[arg(long, allow_hyphen_values = true)]
        messages: Option<String>,
        /// Call minutes; non-numeric input counts as 0, out-of-range input is clamped
        #[arg(long, allow_hyphen_values = true)]
        minutes: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive calculator
    Tui {
        /// Plan to start on
        #[arg(long)]
        plan: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.cmd, Command::Tui { .. });
    logging::init(cli.log_file.as_deref(), interactive)?;

    let catalog = credcalc_core::config::resolve_catalog(cli.catalog.as_deref())
        .context("loading plan catalog")?;

    match cli.cmd {
        Command::Plans { json, yaml } => cmd_plans::execute(&catalog, json, yaml),
        Command::Quote {
            plan,
            messages,
            minutes,
            json,
        } => cmd_quote::execute(cmd_quote::QuoteParams {
            catalog,
            plan: plan.as_deref(),
            messages: messages.as_deref(),
            minutes: minutes.as_deref(),
            json,
        }),
        Command::Tui { plan } => cmd_tui::execute(catalog, plan.as_deref()),
    }
}
