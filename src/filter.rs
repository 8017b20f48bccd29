// Optional description filter. Plain case-insensitive substring match;
// listings with no description are dropped along with non-matches.

use crate::models::Listing;

pub fn filter_by_description(listings: Vec<Listing>, pattern: &str) -> Vec<Listing> {
    let pattern_lower = pattern.to_lowercase();
    let before = listings.len();

    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|item| {
            item.description
                .as_ref()
                .map_or(false, |d| d.to_lowercase().contains(&pattern_lower))
        })
        .collect();

    tracing::info!(
        pattern = %pattern,
        kept = kept.len(),
        dropped = before - kept.len(),
        "Applied description filter"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64, description: Option<&str>) -> Listing {
        serde_json::from_value(match description {
            Some(d) => serde_json::json!({ "id": id, "description": d }),
            None => serde_json::json!({ "id": id }),
        })
        .unwrap()
    }

    #[test]
    fn match_is_case_insensitive() {
        let kept = filter_by_description(
            vec![
                listing(1, Some("2019 Ram Promaster")),
                listing(2, Some("Sprinter van")),
            ],
            "promaster",
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn missing_description_is_dropped() {
        let kept = filter_by_description(vec![listing(3, None)], "promaster");
        assert!(kept.is_empty());
    }

    #[test]
    fn substring_matches_anywhere() {
        let kept = filter_by_description(
            vec![listing(4, Some("Low-mileage PROMASTER 3500, high roof"))],
            "ProMaster",
        );
        assert_eq!(kept.len(), 1);
    }
}
