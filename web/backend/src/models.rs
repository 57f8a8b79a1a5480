use citycompare_core::Commune;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct DatasetStats {
    pub dataset: String,
    pub rows: usize,
    pub rejected: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_communes: usize,
    pub datasets: Vec<DatasetStats>,
}

#[derive(Serialize)]
pub struct NamesResponse {
    pub names: Vec<String>,
    pub count: usize,
}

impl NamesResponse {
    pub fn new(names: Vec<&str>) -> Self {
        Self {
            count: names.len(),
            names: names.into_iter().map(str::to_string).collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct DepartmentsQuery {
    pub region: String,
}

#[derive(Deserialize)]
pub struct CitiesQuery {
    pub department: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize)]
pub struct CommuneSearchResult {
    pub name: String,
    pub department: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_insee: Option<String>,
}

impl From<&Commune> for CommuneSearchResult {
    fn from(commune: &Commune) -> Self {
        Self {
            name: commune.name.clone(),
            department: commune.department.clone(),
            region: commune.region.clone(),
            code_insee: commune.code_insee.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<CommuneSearchResult>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct CommuneQuery {
    pub name: String,
}

#[derive(Serialize)]
pub struct CommuneResponse {
    pub commune: Commune,
    /// Communes sharing the same normalized name, this one included
    pub homonyms: usize,
}

#[derive(Deserialize)]
pub struct HousingQuery {
    pub city: String,
}

#[derive(Deserialize)]
pub struct CompareQuery {
    pub city1: String,
    pub city2: String,
}
