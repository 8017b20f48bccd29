pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod pager;
pub mod query;

use anyhow::Result;
use config::Settings;

/// Counts reported after a completed run.
#[derive(Debug)]
pub struct ExportSummary {
    pub fetched: usize,
    pub kept: usize,
    pub rows_written: usize,
}

/// Runs the whole pipeline: build query, fetch all pages, optionally
/// filter by description, project, and write the CSV file.
pub fn run(settings: &Settings) -> Result<ExportSummary> {
    let client = pager::build_client()?;

    let listings = pager::fetch_all_pages(&client, settings)?;
    let fetched = listings.len();

    let listings = match settings.description_filter.as_deref() {
        Some(pattern) => filter::filter_by_description(listings, pattern),
        None => listings,
    };
    let kept = listings.len();

    let columns = settings.csv_columns();
    let rows_written = export::write_csv(&settings.output_path, &columns, &listings, settings)?;

    Ok(ExportSummary {
        fetched,
        kept,
        rows_written,
    })
}
