use crate::fixtures::create_test_state;
use citycompare_web::error::ApiError;
use citycompare_web::handlers::{
    get_commune, get_stats, health_check, list_cities, list_departments, list_regions,
    search_communes,
};
use citycompare_web::models::{CitiesQuery, CommuneQuery, DepartmentsQuery, SearchQuery};
use axum::extract::{Query, State};

#[tokio::test]
async fn health_reports_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn stats_count_communes_and_rows() {
    let data = get_stats(State(create_test_state())).await.0;

    // The two Saint-Denis share a key
    assert_eq!(data.total_communes, 4);
    assert_eq!(data.datasets.len(), 2);
    assert_eq!(data.datasets[0].dataset, "apartments");
    assert_eq!(data.datasets[0].rows, 4);
    assert_eq!(data.datasets[0].rejected, 1);
    assert_eq!(data.datasets[1].dataset, "land_registry");
    assert_eq!(data.datasets[1].rows, 7);
    assert_eq!(data.datasets[1].rejected, 1);
}

#[tokio::test]
async fn regions_in_catalog_order() {
    let data = list_regions(State(create_test_state())).await.0;

    assert_eq!(
        data.names,
        vec![
            "Auvergne-Rhône-Alpes",
            "Île-de-France",
            "Provence-Alpes-Côte d'Azur",
            "La Réunion"
        ]
    );
    assert_eq!(data.count, 4);
}

#[tokio::test]
async fn departments_of_region() {
    let params = DepartmentsQuery {
        region: "Île-de-France".to_string(),
    };
    let data = list_departments(State(create_test_state()), Query(params)).await.0;
    assert_eq!(data.names, vec!["Paris", "Seine-Saint-Denis"]);

    let params = DepartmentsQuery {
        region: "Bretagne".to_string(),
    };
    let data = list_departments(State(create_test_state()), Query(params)).await.0;
    assert!(data.names.is_empty());
}

#[tokio::test]
async fn cities_of_department() {
    let params = CitiesQuery {
        department: "Loire".to_string(),
    };
    let data = list_cities(State(create_test_state()), Query(params)).await.0;
    assert_eq!(data.names, vec!["Saint-Étienne"]);
}

#[tokio::test]
async fn search_returns_empty_for_empty_query() {
    let params = SearchQuery {
        q: "  ".to_string(),
        limit: 10,
    };
    let data = search_communes(State(create_test_state()), Query(params)).await.0;

    assert_eq!(data.count, 0);
    assert!(data.results.is_empty());
    assert_eq!(data.query, "");
}

#[tokio::test]
async fn search_ignores_accents_and_case() {
    let params = SearchQuery {
        q: "SAINT".to_string(),
        limit: 10,
    };
    let data = search_communes(State(create_test_state()), Query(params)).await.0;

    assert_eq!(data.count, 3);
    // Shorter names first among prefix matches
    assert_eq!(data.results[0].name, "Saint-Denis");
    assert_eq!(data.results[2].name, "Saint-Étienne");
}

#[tokio::test]
async fn search_respects_limit() {
    let params = SearchQuery {
        q: "saint".to_string(),
        limit: 1,
    };
    let data = search_communes(State(create_test_state()), Query(params)).await.0;
    assert_eq!(data.count, 1);
}

#[tokio::test]
async fn commune_found_with_homonyms() {
    let params = CommuneQuery {
        name: "saint denis".to_string(),
    };
    let data = get_commune(State(create_test_state()), Query(params))
        .await
        .unwrap()
        .0;

    assert_eq!(data.commune.name, "Saint-Denis");
    assert_eq!(data.commune.department, "Seine-Saint-Denis");
    assert_eq!(data.homonyms, 2);
}

#[tokio::test]
async fn commune_unknown_is_not_found() {
    let params = CommuneQuery {
        name: "Grenoble".to_string(),
    };
    let result = get_commune(State(create_test_state()), Query(params)).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    let params = CommuneQuery {
        name: "--".to_string(),
    };
    let result = get_commune(State(create_test_state()), Query(params)).await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));
}
