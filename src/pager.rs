// Page-fetch loop against the listings endpoint. Synchronous blocking
// I/O, one request at a time; any network or HTTP error aborts the run
// since a one-shot batch job can simply be rerun from page 0.

use crate::{
    config::Settings,
    models::{Listing, PostsResponse},
    query::{self, QueryParams},
};
use anyhow::{Context, Result};
use reqwest::blocking::Client;

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36")
        .build()
        .context("Failed to build reqwest client")
}

/// Fetches a single page of listings.
fn fetch_page(
    client: &Client,
    settings: &Settings,
    base: &QueryParams,
    page: u32,
) -> Result<Vec<Listing>> {
    let params = query::with_paging(base, settings.page_size, page);
    tracing::debug!(page, url = %settings.api_url, "Fetching page");

    let response = client
        .get(&settings.api_url)
        .query(&params)
        .send()
        .with_context(|| format!("Request for page {} failed", page))?
        .error_for_status()
        .with_context(|| format!("HTTP error fetching page {}", page))?;

    let body: PostsResponse = response
        .json()
        .with_context(|| format!("Failed to parse JSON response for page {}", page))?;

    tracing::debug!(page, count = body.data.len(), "Fetched page");
    Ok(body.data)
}

/// Accumulates all pages in arrival order, advancing the offset until
/// the endpoint returns an empty page.
pub fn fetch_all_pages(client: &Client, settings: &Settings) -> Result<Vec<Listing>> {
    let base = query::base_query_params(settings);

    let mut listings = Vec::new();
    let mut page = 0u32;
    loop {
        let batch = fetch_page(client, settings, &base, page)?;
        if batch.is_empty() {
            break;
        }
        listings.extend(batch);
        page += 1;
    }

    tracing::info!(
        pages = page,
        count = listings.len(),
        "Fetched all pages"
    );
    Ok(listings)
}
