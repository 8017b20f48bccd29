// Builds the query-string parameters for the listings endpoint.
// Order matters for the indexed `$select[i]` / `$modify[i]` keys, so
// params are kept as an ordered list of pairs rather than a map.

use crate::config::Settings;

pub type QueryParams = Vec<(String, String)>;

/// Base parameters for a run: field selection, sort keys, the country
/// filter, and, in the distance variant, the geo-distance modifier and
/// place eager-load. Deterministic; built once and cloned per page.
pub fn base_query_params(settings: &Settings) -> QueryParams {
    let mut params: QueryParams = Vec::new();

    if settings.include_distance {
        params.push(("$modify[0]".to_string(), "maxDistance".to_string()));
        params.push(("$modify[1]".to_string(), settings.latitude.to_string()));
        params.push(("$modify[2]".to_string(), settings.longitude.to_string()));
        params.push(("$modify[3]".to_string(), settings.radius_miles.to_string()));
    }

    // Fields to include are written as $select[0]=currency etc.
    for (index, field) in settings.select_fields.iter().enumerate() {
        params.push((format!("$select[{}]", index), field.clone()));
    }

    // The place eager-load rides the same toggle as the distance
    // filter; the minimal variant has no place column to feed.
    if settings.include_distance {
        params.push((
            "$eager".to_string(),
            "[place(defaultSelects)]".to_string(),
        ));
    }

    params.push(("$sort[isSold]".to_string(), "1".to_string()));
    if settings.include_distance {
        params.push(("$sort[distance]".to_string(), "1".to_string()));
    } else {
        params.push(("$sort[createdAt]".to_string(), "-1".to_string()));
    }

    params.push((
        "countryCode[$ilike]".to_string(),
        format!("%{}%", settings.country_code),
    ));

    params
}

/// Clones the base params and appends the paging window for `page`.
pub fn with_paging(base: &QueryParams, limit: u32, page: u32) -> QueryParams {
    let mut params = base.clone();
    params.push(("$limit".to_string(), limit.to_string()));
    params.push(("$skip".to_string(), (limit * page).to_string()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn select_params_preserve_field_order() {
        let settings = Settings::default();
        let params = base_query_params(&settings);

        let selects: Vec<&str> = params
            .iter()
            .filter(|(k, _)| k.starts_with("$select["))
            .map(|(_, v)| v.as_str())
            .collect();
        let expected: Vec<&str> = settings.select_fields.iter().map(String::as_str).collect();
        assert_eq!(selects, expected);
        assert_eq!(value_of(&params, "$select[0]"), Some("id"));
    }

    #[test]
    fn distance_toggle_controls_geo_sort_and_eager() {
        let with_distance = base_query_params(&Settings::default());
        assert_eq!(value_of(&with_distance, "$modify[0]"), Some("maxDistance"));
        assert_eq!(value_of(&with_distance, "$modify[1]"), Some("39.833"));
        assert_eq!(value_of(&with_distance, "$modify[2]"), Some("-98.585"));
        assert_eq!(value_of(&with_distance, "$modify[3]"), Some("500"));
        assert_eq!(value_of(&with_distance, "$sort[distance]"), Some("1"));
        assert_eq!(value_of(&with_distance, "$sort[createdAt]"), None);
        assert_eq!(
            value_of(&with_distance, "$eager"),
            Some("[place(defaultSelects)]")
        );

        let without = base_query_params(&Settings {
            include_distance: false,
            ..Settings::default()
        });
        assert_eq!(value_of(&without, "$modify[0]"), None);
        assert_eq!(value_of(&without, "$sort[distance]"), None);
        assert_eq!(value_of(&without, "$sort[createdAt]"), Some("-1"));
        assert_eq!(value_of(&without, "$eager"), None);
    }

    #[test]
    fn common_params_always_present() {
        let params = base_query_params(&Settings::default());
        assert_eq!(value_of(&params, "$sort[isSold]"), Some("1"));
        assert_eq!(value_of(&params, "countryCode[$ilike]"), Some("%US%"));
    }

    #[test]
    fn paging_appends_limit_and_offset() {
        let base = base_query_params(&Settings::default());
        let page3 = with_paging(&base, 50, 3);
        assert_eq!(page3.len(), base.len() + 2);
        assert_eq!(value_of(&page3, "$limit"), Some("50"));
        assert_eq!(value_of(&page3, "$skip"), Some("150"));
        // The base is untouched
        assert_eq!(value_of(&base, "$limit"), None);
    }
}
