use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use screener::{
    repository::{self, AddressScorer, Repository},
    shared::normalize::chomp,
};
use serde_json::json;
use tokio::task::yield_now;
use tracing::info;

use crate::{
    dto::{
        AddressDto, AltDto, BisEntityDto, DeniedPersonDto, SdnDto, SearchResponse,
        SectoralSanctionDto,
    },
    state::AppState,
};

const SOFT_RESULTS_LIMIT: usize = 10;
const HARD_RESULTS_LIMIT: usize = 100;

pub enum ApiError {
    NoSearchParams,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoSearchParams => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "no search parameters" })),
            )
                .into_response(),
        }
    }
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let limit = extract_limit(&params);
    let repository = state.snapshot().await;

    // Search over all fields
    if let Some(q) = param(&params, "q") {
        info!("searching all names and addresses for {q}");
        return Ok(Json(search_all(&repository, limit, q).await).into_response());
    }

    // Search by name
    if let Some(name) = param(&params, "name") {
        info!("searching SDN names for {name}");
        return Ok(Json(search_by_name(&repository, limit, name).await).into_response());
    }

    // Search by alt name
    if let Some(alt) = param(&params, "altName") {
        info!("searching SDN alt names for {alt}");
        let response = SearchResponse {
            alt_names: repository
                .top_alt_names(limit, alt)
                .into_iter()
                .map(|(weight, value)| AltDto::from(value, weight))
                .collect(),
            ..Default::default()
        };
        return Ok(Json(response).into_response());
    }

    // Search addresses
    let address = AddressQuery::read(&params);
    if !address.is_empty() {
        info!("searching addresses for {address:?}");
        let compare = repository::multi_address_compare(address.compares());
        let response = SearchResponse {
            addresses: repository
                .top_addresses_fn(limit, compare)
                .into_iter()
                .map(|(weight, value)| AddressDto::from(value, weight))
                .collect(),
            ..Default::default()
        };
        return Ok(Json(response).into_response());
    }

    Err(ApiError::NoSearchParams)
}

/// Top-K over every collection. Yields between collection scans so a
/// dropped (cancelled) request stops at the next scan boundary.
async fn search_all(repository: &Repository, limit: usize, q: &str) -> SearchResponse {
    let sdns = repository
        .top_sdns(limit, q)
        .into_iter()
        .map(|(weight, value)| SdnDto::from(value, weight))
        .collect();
    yield_now().await;
    let alt_names = repository
        .top_alt_names(limit, q)
        .into_iter()
        .map(|(weight, value)| AltDto::from(value, weight))
        .collect();
    yield_now().await;
    let addresses = repository
        .top_addresses(limit, q)
        .into_iter()
        .map(|(weight, value)| AddressDto::from(value, weight))
        .collect();
    yield_now().await;
    let denied_persons = repository
        .top_dps(limit, q)
        .into_iter()
        .map(|(weight, value)| DeniedPersonDto::from(value, weight))
        .collect();
    yield_now().await;
    let sectoral_sanctions = repository
        .top_ssis(limit, q)
        .into_iter()
        .map(|(weight, value)| SectoralSanctionDto::from(value, weight))
        .collect();
    yield_now().await;
    let bis_entities = repository
        .top_els(limit, q)
        .into_iter()
        .map(|(weight, value)| BisEntityDto::from(value, weight))
        .collect();

    SearchResponse {
        sdns,
        alt_names,
        addresses,
        denied_persons,
        sectoral_sanctions,
        bis_entities,
    }
}

async fn search_by_name(repository: &Repository, limit: usize, name: &str) -> SearchResponse {
    let sdns = repository
        .top_sdns(limit, name)
        .into_iter()
        .map(|(weight, value)| SdnDto::from(value, weight))
        .collect();
    yield_now().await;
    let denied_persons = repository
        .top_dps(limit, name)
        .into_iter()
        .map(|(weight, value)| DeniedPersonDto::from(value, weight))
        .collect();
    yield_now().await;
    let sectoral_sanctions = repository
        .top_ssis(limit, name)
        .into_iter()
        .map(|(weight, value)| SectoralSanctionDto::from(value, weight))
        .collect();
    yield_now().await;
    let bis_entities = repository
        .top_els(limit, name)
        .into_iter()
        .map(|(weight, value)| BisEntityDto::from(value, weight))
        .collect();

    SearchResponse {
        sdns,
        denied_persons,
        sectoral_sanctions,
        bis_entities,
        ..Default::default()
    }
}

#[derive(Debug, Default)]
struct AddressQuery {
    address: String,
    city: String,
    state: String,
    providence: String,
    zip: String,
    country: String,
}

impl AddressQuery {
    fn read(params: &HashMap<String, String>) -> Self {
        let field = |name: &str| {
            params
                .get(name)
                .map(|value| chomp(value).to_lowercase())
                .unwrap_or_default()
        };
        Self {
            address: field("address"),
            city: field("city"),
            state: field("state"),
            providence: field("providence"),
            zip: field("zip"),
            country: field("country"),
        }
    }

    fn is_empty(&self) -> bool {
        self.address.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.providence.is_empty()
            && self.zip.is_empty()
            && self.country.is_empty()
    }

    /// One scorer per populated field. The city, state, providence and zip
    /// fields all compare against the record's single combined
    /// city/state/province/postal key.
    fn compares(&self) -> Vec<AddressScorer> {
        let mut compares: Vec<AddressScorer> = Vec::new();
        if !self.address.is_empty() {
            compares.push(repository::address_line_scorer(&self.address));
        }
        if !self.city.is_empty() {
            compares.push(repository::city_state_scorer(&self.city));
        }
        if !self.state.is_empty() {
            compares.push(repository::city_state_scorer(&self.state));
        }
        if !self.providence.is_empty() {
            compares.push(repository::city_state_scorer(&self.providence));
        }
        if !self.zip.is_empty() {
            compares.push(repository::city_state_scorer(&self.zip));
        }
        if !self.country.is_empty() {
            compares.push(repository::country_scorer(&self.country));
        }
        compares
    }
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// A missing or unparseable limit falls back to the soft default; anything
/// above the hard cap is clamped down to it.
fn extract_limit(params: &HashMap<String, String>) -> usize {
    params
        .get("limit")
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(SOFT_RESULTS_LIMIT)
        .min(HARD_RESULTS_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(extract_limit(&params(&[])), SOFT_RESULTS_LIMIT);
    }

    #[test]
    fn limit_defaults_when_invalid() {
        assert_eq!(extract_limit(&params(&[("limit", "abc")])), SOFT_RESULTS_LIMIT);
        assert_eq!(extract_limit(&params(&[("limit", "0")])), SOFT_RESULTS_LIMIT);
        assert_eq!(extract_limit(&params(&[("limit", "-4")])), SOFT_RESULTS_LIMIT);
    }

    #[test]
    fn limit_clamps_to_hard_cap() {
        assert_eq!(extract_limit(&params(&[("limit", "1000")])), HARD_RESULTS_LIMIT);
    }

    #[test]
    fn limit_passes_through_in_range() {
        assert_eq!(extract_limit(&params(&[("limit", "25")])), 25);
        assert_eq!(extract_limit(&params(&[("limit", "1")])), 1);
    }

    #[test]
    fn address_query_trims_and_lowercases() {
        let query = AddressQuery::read(&params(&[("address", "  Ibex House "), ("zip", "")]));
        assert_eq!(query.address, "ibex house");
        assert!(query.zip.is_empty());
        assert!(!query.is_empty());
        assert_eq!(query.compares().len(), 1);
    }

    #[test]
    fn address_query_empty_without_fields() {
        assert!(AddressQuery::read(&params(&[("q", "x")])).is_empty());
    }
}
