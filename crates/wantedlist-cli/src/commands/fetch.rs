use super::config::load_config;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use std::path::PathBuf;
use wanted_models::NormalizedEntry;
use wanted_sources::{CouchPotatoClient, FetchContext, WantedSource};

pub async fn run_fetch(config_path: Option<PathBuf>, test_mode: bool, output: &Output) -> Result<()> {
    tracing::debug!("Fetch command started");

    let config = load_config(config_path)?;
    config.validate()?;

    let client = CouchPotatoClient::new(&config.couchpotato)?;
    tracing::debug!(endpoint = ?client.endpoint(), "Fetching wanted list");

    let entries = WantedSource::fetch_entries(&client, &FetchContext { test_mode }).await?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if entries.is_empty() {
                output.warn("No active movies on the wanted list");
                return Ok(());
            }
            println!("{}", entries_table(&entries));
            output.success(format!("{} entries from {}", entries.len(), client.source_name()));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&entries)?);
        }
    }

    Ok(())
}

fn entries_table(entries: &[NormalizedEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("IMDB ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("TMDB ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Quality").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.title),
            Cell::new(entry.imdb_id.as_deref().unwrap_or("-")),
            Cell::new(entry.tmdb_id.as_deref().unwrap_or("-")),
            Cell::new(entry.quality_req.trim()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
