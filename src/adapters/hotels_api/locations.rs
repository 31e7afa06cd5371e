//! City lookup against `GET /locations/search`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::LocationId;
use crate::domain::search::{CityCandidate, CityLookup};
use crate::ports::{ApiError, LocationDirectory};

use super::HotelsApiClient;

const CITY_GROUP: &str = "CITY_GROUP";

#[async_trait]
impl LocationDirectory for HotelsApiClient {
    async fn resolve_city(&self, name: &str) -> Result<CityLookup, ApiError> {
        let params = [
            ("query", name.to_lowercase()),
            ("locale", self.config.locale.clone()),
        ];
        let response: LocationSearchResponse =
            self.get_json("/locations/search", &params).await?;
        let lookup = lookup_from_response(name, response);
        tracing::debug!(city = name, found = lookup.is_found(), "City lookup finished");
        Ok(lookup)
    }
}

/// Applies the matching rule to the city group of a search response.
fn lookup_from_response(name: &str, response: LocationSearchResponse) -> CityLookup {
    if response.moresuggestions == 0 {
        return CityLookup::NotFound;
    }
    let candidates = response
        .suggestions
        .into_iter()
        .filter(|group| group.group == CITY_GROUP)
        .flat_map(|group| group.entities)
        .filter_map(|entity| {
            let id = id_text(&entity.destination_id)?;
            Some(CityCandidate::new(LocationId::new(id), entity.name))
        });
    CityLookup::from_candidates(name, candidates)
}

/// Destination ids arrive as strings, occasionally as bare numbers.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ----- Hotel API Types -----

#[derive(Debug, Deserialize)]
struct LocationSearchResponse {
    #[serde(default)]
    moresuggestions: u64,
    #[serde(default)]
    suggestions: Vec<SuggestionGroup>,
}

#[derive(Debug, Deserialize)]
struct SuggestionGroup {
    group: String,
    #[serde(default)]
    entities: Vec<LocationEntity>,
}

#[derive(Debug, Deserialize)]
struct LocationEntity {
    #[serde(rename = "destinationId", default)]
    destination_id: Value,
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::hotels_api::test_server::{client_for, respond_with};

    fn parse(json: &str) -> LocationSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    const PARIS_RESPONSE: &str = r#"{
        "term": "paris",
        "moresuggestions": 12,
        "suggestions": [
            {
                "group": "LANDMARK_GROUP",
                "entities": [{ "destinationId": "111", "name": "Paris" }]
            },
            {
                "group": "CITY_GROUP",
                "entities": [
                    { "destinationId": "222", "name": "Paris Beach" },
                    { "destinationId": "504261", "name": "Paris", "type": "CITY" }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn resolves_city_over_http() {
        let base = respond_with("200 OK", PARIS_RESPONSE).await;
        let lookup = client_for(&base).resolve_city("Paris").await.unwrap();
        assert!(lookup.is_found());
    }

    #[tokio::test]
    async fn server_error_fails_the_lookup() {
        let base = respond_with("500 Internal Server Error", "oops").await;
        let result = client_for(&base).resolve_city("Paris").await;
        assert_eq!(result, Err(ApiError::status(500, "oops")));
    }

    #[tokio::test]
    async fn malformed_json_fails_the_lookup() {
        let base = respond_with("200 OK", "<html>maintenance</html>").await;
        let result = client_for(&base).resolve_city("Paris").await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn finds_exact_city_in_city_group() {
        let lookup = lookup_from_response("PARIS", parse(PARIS_RESPONSE));
        assert_eq!(
            lookup,
            CityLookup::Found {
                location_id: LocationId::new("504261"),
                canonical_name: "Paris".to_string(),
            }
        );
    }

    #[test]
    fn ignores_matches_outside_city_group() {
        let json = r#"{
            "moresuggestions": 1,
            "suggestions": [
                { "group": "HOTEL_GROUP", "entities": [{ "destinationId": "9", "name": "Paris" }] }
            ]
        }"#;
        assert_eq!(lookup_from_response("Paris", parse(json)), CityLookup::NotFound);
    }

    #[test]
    fn non_matching_city_group_is_not_found() {
        assert_eq!(
            lookup_from_response("Lyon", parse(PARIS_RESPONSE)),
            CityLookup::NotFound
        );
    }

    #[test]
    fn zero_suggestions_is_not_found() {
        let json = r#"{ "moresuggestions": 0, "suggestions": [
            { "group": "CITY_GROUP", "entities": [{ "destinationId": "1", "name": "Paris" }] }
        ] }"#;
        assert_eq!(lookup_from_response("Paris", parse(json)), CityLookup::NotFound);
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        assert_eq!(lookup_from_response("Paris", parse("{}")), CityLookup::NotFound);
    }

    #[test]
    fn numeric_destination_ids_are_accepted() {
        let json = r#"{ "moresuggestions": 1, "suggestions": [
            { "group": "CITY_GROUP", "entities": [{ "destinationId": 1506246, "name": "Москва" }] }
        ] }"#;
        assert_eq!(
            lookup_from_response("москва", parse(json)),
            CityLookup::Found {
                location_id: LocationId::new("1506246"),
                canonical_name: "Москва".to_string(),
            }
        );
    }
}
