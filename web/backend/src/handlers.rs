use crate::error::ApiError;
use crate::models::{
    CitiesQuery, CommuneQuery, CommuneResponse, CommuneSearchResult, CompareQuery, DatasetStats,
    DepartmentsQuery, HealthResponse, HousingQuery, NamesResponse, SearchQuery, SearchResponse,
    StatsResponse,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use citycompare_core::{Comparison, HousingProfile, RentKind, normalize_name};
use std::sync::Arc;
use tracing::debug;

const MAX_SEARCH_LIMIT: usize = 100;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "CityCompare API is running".to_string(),
    })
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let context = state.engine.context();

    let mut datasets = Vec::new();
    for kind in RentKind::ALL {
        if let Some(table) = context.rent_table(kind) {
            datasets.push(DatasetStats {
                dataset: kind.as_str().to_string(),
                rows: table.len(),
                rejected: table.report().rejected_total(),
            });
        }
    }
    datasets.push(DatasetStats {
        dataset: "land_registry".to_string(),
        rows: context.registry().len(),
        rejected: context.registry().report().rejected_total(),
    });

    Json(StatsResponse {
        total_communes: context.catalog().len(),
        datasets,
    })
}

pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<NamesResponse> {
    Json(NamesResponse::new(state.engine.context().catalog().regions()))
}

pub async fn list_departments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DepartmentsQuery>,
) -> Json<NamesResponse> {
    let catalog = state.engine.context().catalog();
    Json(NamesResponse::new(catalog.departments_of(params.region.trim())))
}

pub async fn list_cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CitiesQuery>,
) -> Json<NamesResponse> {
    let catalog = state.engine.context().catalog();
    Json(NamesResponse::new(catalog.cities_of(params.department.trim())))
}

pub async fn search_communes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = params.q.trim();
    let limit = params.limit.min(MAX_SEARCH_LIMIT);

    let results: Vec<CommuneSearchResult> = state
        .engine
        .context()
        .catalog()
        .search(query, limit)
        .into_iter()
        .map(CommuneSearchResult::from)
        .collect();

    debug!(query, count = results.len(), "commune search");

    Json(SearchResponse {
        query: query.to_string(),
        count: results.len(),
        results,
    })
}

pub async fn get_commune(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommuneQuery>,
) -> Result<Json<CommuneResponse>, ApiError> {
    if normalize_name(&params.name).is_empty() {
        return Err(ApiError::BadRequest("Commune name is empty".to_string()));
    }

    let catalog = state.engine.context().catalog();
    let commune = catalog
        .find_by_name(&params.name)
        .ok_or_else(|| ApiError::NotFound(format!("Commune '{}' not found", params.name)))?;

    let homonyms = catalog
        .communes()
        .iter()
        .filter(|other| other.key == commune.key)
        .count();

    Ok(Json(CommuneResponse {
        commune: commune.clone(),
        homonyms,
    }))
}

pub async fn get_housing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HousingQuery>,
) -> Json<HousingProfile> {
    Json(state.engine.housing_profile(&params.city))
}

pub async fn compare_cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareQuery>,
) -> Json<Comparison> {
    Json(state.engine.compare(&params.city1, &params.city2))
}
