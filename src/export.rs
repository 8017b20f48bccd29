// CSV projection and writing. Each configured column is either a
// passthrough of a raw listing field, a currency conversion from cents,
// or a synthesized value (detail link, composite place string).

use crate::{config::Settings, error::ExportError, models::Listing};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

fn missing(field: &str, id: u64) -> ExportError {
    ExportError::MissingField {
        field: field.to_string(),
        id,
    }
}

/// Projects one listing onto the configured column set. A field the
/// columns expect but the listing lacks is a fatal error.
pub fn project_row(
    listing: &Listing,
    columns: &[String],
    settings: &Settings,
) -> Result<Vec<String>, ExportError> {
    let id = listing.id;
    let mut row = Vec::with_capacity(columns.len());

    for column in columns {
        let value = match column.as_str() {
            "link" => format!("{}{}", settings.post_url_base, id),
            "price" => {
                let cents = listing.price.ok_or_else(|| missing("price", id))?;
                (cents as f64 / 100.0).to_string()
            }
            "place" => {
                let place = listing.place.as_ref().ok_or_else(|| missing("place", id))?;
                format!("{}, {}", place.place_name, place.admin_name1)
            }
            "distance" => listing
                .distance
                .ok_or_else(|| missing("distance", id))?
                .to_string(),
            "title" => listing
                .title
                .clone()
                .ok_or_else(|| missing("title", id))?,
            "make" => listing.make.clone().ok_or_else(|| missing("make", id))?,
            "model" => listing
                .model
                .clone()
                .ok_or_else(|| missing("model", id))?,
            "fuel" => listing.fuel.clone().ok_or_else(|| missing("fuel", id))?,
            "odometer" => listing
                .odometer
                .ok_or_else(|| missing("odometer", id))?
                .to_string(),
            "year" => listing
                .year
                .ok_or_else(|| missing("year", id))?
                .to_string(),
            "isSold" => listing
                .is_sold
                .ok_or_else(|| missing("isSold", id))?
                .to_string(),
            other => return Err(ExportError::UnsupportedColumn(other.to_string())),
        };
        row.push(value);
    }

    Ok(row)
}

fn write_to<W: Write>(
    writer: W,
    columns: &[String],
    listings: &[Listing],
    settings: &Settings,
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(columns)
        .context("Failed to write CSV header")?;

    for listing in listings {
        let row = project_row(listing, columns, settings)
            .with_context(|| format!("Failed to project listing {}", listing.id))?;
        csv_writer
            .write_record(&row)
            .with_context(|| format!("Failed to write CSV row for listing {}", listing.id))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(listings.len())
}

/// Writes header plus one row per listing, overwriting any existing
/// file. Returns the number of data rows written.
pub fn write_csv(
    path: &Path,
    columns: &[String],
    listings: &[Listing],
    settings: &Settings,
) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let rows = write_to(file, columns, listings, settings)?;
    tracing::info!(rows, path = %path.display(), "Wrote CSV output");
    Ok(rows)
}
