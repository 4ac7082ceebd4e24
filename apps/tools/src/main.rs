use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filter_core::FilterSelectionController;
use serde::Serialize;
use shared::{
    domain::{ConsultationMode, FilterSelection, Section, SortKey, Specialty},
    element_ids,
    protocol::FilterAction,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the specialty catalog with element identifiers.
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Apply scripted actions and print one JSON line per notification.
    Replay {
        #[arg(long)]
        mode: Option<ConsultationMode>,
        #[arg(long = "specialty")]
        specialties: Vec<Specialty>,
        #[arg(long)]
        sort: Option<SortKey>,
        /// Emit the initial selection before the first action.
        #[arg(long)]
        announce: bool,
        /// Actions such as `mode:video`, `specialty:Dentist`, `sort:fees`, `clear`, `section:moc`.
        actions: Vec<FilterAction>,
    },
}

#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    element_id: String,
}

#[derive(Serialize)]
struct ReplayLine<'a> {
    seq: usize,
    cause: Option<String>,
    selection: &'a FilterSelection,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Catalog { json } => print_catalog(json, out),
        Command::Replay {
            mode,
            specialties,
            sort,
            announce,
            actions,
        } => {
            let initial = FilterSelection::new(mode, specialties, sort);
            replay(initial, announce, &actions, out)
        }
    }
}

fn print_catalog(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let entries: Vec<CatalogEntry> = Specialty::CATALOG
            .iter()
            .map(|s| CatalogEntry {
                name: s.name(),
                element_id: s.element_id(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for section in Section::ALL {
        writeln!(out, "{:<24} {}", section.title(), section.header_element_id())?;
    }
    for key in SortKey::ALL {
        writeln!(out, "{:<24} {}", key.label(), key.element_id())?;
    }
    for mode in ConsultationMode::ALL {
        writeln!(out, "{:<24} {}", mode.label(), mode.element_id())?;
    }
    for specialty in Specialty::CATALOG {
        writeln!(
            out,
            "{:<24} {}",
            specialty.name(),
            element_ids::specialty(specialty.name())
        )?;
    }
    Ok(())
}

fn replay(
    initial: FilterSelection,
    announce: bool,
    actions: &[FilterAction],
    out: &mut impl Write,
) -> Result<()> {
    let mut emitted: Vec<FilterSelection> = Vec::new();
    let mut controller =
        FilterSelectionController::new(initial, |selection: &FilterSelection| {
            emitted.push(selection.clone())
        });

    let mut causes: Vec<Option<String>> = Vec::new();
    if announce {
        controller.announce();
        causes.push(None);
    }
    for action in actions {
        tracing::debug!(%action, "replaying filter action");
        controller.apply(*action);
        if action.notifies() {
            causes.push(Some(action.to_string()));
        }
    }
    drop(controller);

    for (seq, (selection, cause)) in emitted.iter().zip(causes).enumerate() {
        let line = ReplayLine {
            seq: seq + 1,
            cause,
            selection,
        };
        serde_json::to_writer(&mut *out, &line).context("failed to encode notification")?;
        writeln!(out)?;
    }
    Ok(())
}
