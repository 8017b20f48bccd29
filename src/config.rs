// Runtime configuration for an export run.
// Everything the pipeline needs lives here so independent runs (and
// tests) don't share module-level state.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Listings endpoint queried for pages.
    pub api_url: String,
    /// Base URL for synthesized detail-page links (id is appended).
    pub post_url_base: String,
    pub output_path: PathBuf,
    pub page_size: u32,
    /// Selects the basic variant: geo-distance modifier, distance sort
    /// key, place eager-load, and the `distance` and `place` CSV
    /// columns. When off, listings sort by creation date and neither
    /// column is emitted.
    pub include_distance: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: u32,
    pub country_code: String,
    /// Case-insensitive substring matched against descriptions.
    /// `None` keeps every listing.
    pub description_filter: Option<String>,
    /// Fields requested from the API, in `$select[i]` order.
    pub select_fields: Vec<String>,
    /// Output columns, in order. `distance` is injected separately via
    /// `csv_columns()` so the toggle stays in one place.
    pub csv_fields: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: "https://api.thevancamper.com/posts".to_string(),
            post_url_base: "https://thevancamper.com/post/".to_string(),
            output_path: PathBuf::from("vans.csv"),
            page_size: 50,
            include_distance: true,
            latitude: 39.833,
            longitude: -98.585,
            radius_miles: 500,
            country_code: "US".to_string(),
            description_filter: Some("promaster".to_string()),
            select_fields: [
                "id",
                "title",
                "price",
                "odometer",
                "year",
                "fuel",
                "make",
                "model",
                "isSold",
                "description",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            csv_fields: [
                "title", "make", "model", "price", "odometer", "place", "year", "fuel",
                "isSold", "link",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., VANS_OUTPUT_PATH)
            .add_source(Environment::with_prefix("VANS").separator("__"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Final CSV column order. With the distance toggle on, `distance`
    /// slots in just before the trailing `link` column; with it off,
    /// the `place` column goes away along with the place eager-load.
    pub fn csv_columns(&self) -> Vec<String> {
        let mut columns = self.csv_fields.clone();
        if self.include_distance {
            let at = columns.len().saturating_sub(1);
            columns.insert(at, "distance".to_string());
        } else {
            columns.retain(|c| c != "place");
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_column_sits_before_link() {
        let settings = Settings::default();
        let columns = settings.csv_columns();
        assert_eq!(columns.last().map(String::as_str), Some("link"));
        assert_eq!(columns[columns.len() - 2], "distance");
    }

    #[test]
    fn minimal_variant_omits_place_and_distance() {
        let settings = Settings {
            include_distance: false,
            ..Settings::default()
        };
        let columns = settings.csv_columns();
        assert!(!columns.iter().any(|c| c == "distance"));
        assert!(!columns.iter().any(|c| c == "place"));
        assert_eq!(
            columns,
            ["title", "make", "model", "price", "odometer", "year", "fuel", "isSold", "link"]
        );
    }
}
