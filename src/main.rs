use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use seatkit::{guest_list_command, init_logging, open_store, EventBus, SettingsPersistence};

/// Open the persisted seating layout, optionally import guests and export a dated snapshot.
#[derive(Debug, Parser)]
#[command(name = "seatkit", version = seatkit::VERSION)]
struct Cli {
    /// Guest list to import, one name per line
    #[arg(long = "import", value_name = "GUESTS_TXT")]
    import: Option<PathBuf>,

    /// Directory that receives `seating-layout-YYYY-MM-DD.json`
    #[arg(long = "export", value_name = "DIR")]
    export: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout file to open instead of the configured one
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::info!("seatkit {} (built {})", seatkit::VERSION, seatkit::BUILD_DATE);

    let mut settings = match &cli.config {
        Some(path) => SettingsPersistence::load_or_default(path)?,
        None => SettingsPersistence::load_default()?,
    };
    settings.config().validate()?;
    if let Some(layout) = &cli.layout {
        settings.config_mut().storage.snapshot_path = Some(layout.clone());
    }

    let bus = Arc::new(EventBus::new());
    let mut store = open_store(&settings, bus)?;

    if let Some(path) = &cli.import {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read guest list {}", path.display()))?;
        store.dispatch(guest_list_command(&text))?;
        settings.config_mut().add_recent_file(path.clone());
    }

    let layout = store.layout();
    println!(
        "{} tables, {} seats ({} occupied), {} guests ({} unassigned)",
        layout.tables().len(),
        layout.seat_count(),
        layout.seated_count(),
        layout.guests().len(),
        layout.unassigned_guests().len()
    );

    if let Some(dir) = &cli.export {
        let path = store
            .export_to_directory(dir)
            .with_context(|| format!("Export to {} failed", dir.display()))?;
        println!("Exported {}", path.display());
        settings.config_mut().add_recent_file(path);
    }

    if !store.autosave() {
        store.save()?;
    }
    if let Err(e) = settings.save() {
        tracing::warn!("Could not save settings: {}", e);
    }
    Ok(())
}
