#[path = "../fixtures/mod.rs"]
mod fixtures;

use citycompare_core::{
    DataConfig, DataContext, Estimate, LoadError, LookupEngine, PropertyKind, RentKind,
};
use tempfile::tempdir;

#[test]
fn test_rent_estimate_is_mean_of_matching_rows() {
    let engine = fixtures::engine();
    assert_eq!(
        engine.rent_estimate(RentKind::Apartments, "Saint-Étienne"),
        Estimate::Available(13.0)
    );
    assert_eq!(
        engine.rent_estimate(RentKind::Houses, "Saint-Étienne"),
        Estimate::Available(10.4)
    );
}

#[test]
fn test_rent_estimate_same_result_for_any_spelling() {
    let engine = fixtures::engine();
    let expected = engine.rent_estimate(RentKind::Apartments, "Saint-Étienne");

    for spelling in ["SAINT ETIENNE", "saint   etienne", "Saint Etienne", "SAINT-ÉTIENNE"] {
        assert_eq!(engine.rent_estimate(RentKind::Apartments, spelling), expected);
    }
}

#[test]
fn test_rent_estimate_unknown_city_is_unavailable() {
    let engine = fixtures::engine();

    let estimate = engine.rent_estimate(RentKind::Apartments, "Grenoble");
    assert_eq!(estimate, Estimate::Unavailable);
    assert_eq!(estimate.value(), None);
    assert_eq!(engine.rent_estimate(RentKind::Apartments, ""), Estimate::Unavailable);
}

#[test]
fn test_rent_estimate_missing_table_is_unavailable() {
    let engine = fixtures::engine();
    assert_eq!(
        engine.rent_estimate(RentKind::LargeApartments, "Saint-Étienne"),
        Estimate::Unavailable
    );
}

#[test]
fn test_rent_estimate_non_numeric_rows() {
    let engine = fixtures::engine();
    assert_eq!(
        engine.rent_estimate(RentKind::Apartments, "Marseille 13e"),
        Estimate::NonNumeric
    );
    // zero is not a rent
    assert_eq!(engine.rent_estimate(RentKind::Houses, "Firminy"), Estimate::NonNumeric);
}

#[test]
fn test_sale_price_is_median_not_mean() {
    let engine = fixtures::engine();
    // 2000, 2200 and 5000 euros per m²
    assert_eq!(engine.sale_price_per_area("Saint-Étienne"), Estimate::Available(2200.0));
}

#[test]
fn test_sale_price_only_counts_apartments() {
    let engine = fixtures::engine();
    assert_eq!(
        engine.sale_price_per_area_of("Saint-Etienne", PropertyKind::House),
        Estimate::Available(1800.0)
    );
    assert_eq!(
        engine.sale_price_per_area_of("Marseille 13e", PropertyKind::House),
        Estimate::Available(3333.33)
    );
    assert_eq!(engine.sale_price_per_area("Marseille 13e"), Estimate::Unavailable);
}

#[test]
fn test_sale_price_matches_harmonized_districts() {
    let engine = fixtures::engine();
    // 10000, 11000 and 15000 euros per m²
    assert_eq!(engine.sale_price_per_area("Paris 1er"), Estimate::Available(11000.0));
    assert_eq!(engine.sale_price_per_area("PARIS 1ER"), Estimate::Available(11000.0));
    assert_eq!(engine.sale_price_per_area("Paris 3e"), Estimate::Available(11000.0));
}

#[test]
fn test_districts_are_not_aggregated_into_the_city() {
    let engine = fixtures::engine();
    assert_eq!(engine.sale_price_per_area("Paris"), Estimate::Unavailable);
    assert_eq!(engine.sale_price_per_area("Paris 2e"), Estimate::Unavailable);
}

#[test]
fn test_sale_price_zero_surface_is_non_numeric() {
    let engine = fixtures::engine();
    assert_eq!(engine.sale_price_per_area("Lyon 3e"), Estimate::NonNumeric);
}

#[test]
fn test_sale_price_missing_fields_is_unavailable() {
    let engine = fixtures::engine();
    assert_eq!(engine.sale_price_per_area("Nice"), Estimate::Unavailable);
}

#[test]
fn test_registry_rows() {
    let registry = fixtures::registry();
    assert_eq!(registry.len(), 9);

    let rows = registry.rows_for_key(&"Paris 1er".into());
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.commune == "Paris 1er"));
    assert_eq!(rows[0].price_per_area, 10_000.0);
    assert!(registry.rows_for_key(&"Grenoble".into()).is_empty());
}

#[test]
fn test_housing_profile() {
    let engine = fixtures::engine();
    let profile = engine.housing_profile("saint etienne");

    assert_eq!(profile.city, "saint etienne");
    assert_eq!(profile.commune.as_ref().unwrap().name, "Saint-Étienne");
    assert_eq!(profile.apartments_rent, Estimate::Available(13.0));
    assert_eq!(profile.houses_rent, Estimate::Available(10.4));
    assert_eq!(profile.small_apartments_rent, Estimate::Unavailable);
    assert_eq!(profile.rent(RentKind::LargeApartments), Estimate::Unavailable);
    assert_eq!(profile.apartment_sale_price, Estimate::Available(2200.0));
    assert_eq!(profile.house_sale_price, Estimate::Available(1800.0));
}

#[test]
fn test_housing_profile_for_unknown_city() {
    let engine = fixtures::engine();
    let profile = engine.housing_profile("Atlantis");

    assert!(profile.commune.is_none());
    for kind in RentKind::ALL {
        assert_eq!(profile.rent(kind), Estimate::Unavailable);
    }
    assert_eq!(profile.apartment_sale_price, Estimate::Unavailable);
}

#[test]
fn test_compare_two_cities() {
    let engine = fixtures::engine();
    let comparison = engine.compare("Nice", "Paris 1er");

    assert_eq!(comparison.first.apartments_rent, Estimate::Available(17.2));
    assert_eq!(comparison.second.apartments_rent, Estimate::Available(30.1));
    assert_eq!(comparison.second.apartment_sale_price, Estimate::Available(11000.0));
}

#[test]
fn test_estimate_display() {
    assert_eq!(Estimate::Available(13.0).to_string(), "13.00");
    assert_eq!(Estimate::Available(2200.4).to_string(), "2200.40");
    assert_eq!(Estimate::Unavailable.to_string(), "Non disponible");
    assert_eq!(Estimate::NonNumeric.to_string(), "Non numérique");
}

#[test]
fn test_estimate_serialization() {
    assert_eq!(
        serde_json::to_string(&Estimate::Available(13.0)).unwrap(),
        r#"{"status":"available","value":13.0}"#
    );
    assert_eq!(
        serde_json::to_string(&Estimate::Unavailable).unwrap(),
        r#"{"status":"unavailable"}"#
    );
    assert_eq!(
        serde_json::to_string(&Estimate::NonNumeric).unwrap(),
        r#"{"status":"non_numeric"}"#
    );
}

#[test]
fn test_context_loads_from_data_dir() {
    let dir = tempdir().unwrap();
    fixtures::write_data_dir(dir.path());

    let config = DataConfig::new(dir.path());
    assert!(config.missing_files().is_empty());

    let engine = LookupEngine::new(DataContext::load(&config).unwrap());
    assert_eq!(engine.context().catalog().len(), 9);
    assert_eq!(
        engine.rent_estimate(RentKind::Apartments, "Saint-Étienne"),
        Estimate::Available(13.0)
    );
    assert_eq!(
        engine.rent_estimate(RentKind::SmallApartments, "Nice"),
        Estimate::Available(17.2)
    );
    assert_eq!(
        engine.rent_estimate(RentKind::LargeApartments, "Nice"),
        Estimate::Unavailable
    );
    assert_eq!(engine.sale_price_per_area("Paris 1er"), Estimate::Available(11000.0));
}

#[test]
fn test_context_load_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    fixtures::write_data_dir(dir.path());
    std::fs::remove_file(dir.path().join("m2 pour les maisons.csv")).unwrap();

    let config = DataConfig::new(dir.path());
    assert_eq!(config.missing_files(), vec![dir.path().join("m2 pour les maisons.csv")]);
    assert!(matches!(
        DataContext::load(&config),
        Err(LoadError::MissingFile { .. })
    ));
}

#[test]
fn test_context_uses_configured_district_cities() {
    let dir = tempdir().unwrap();
    fixtures::write_data_dir(dir.path());

    let config = DataConfig {
        district_cities: vec!["MARSEILLE".to_string()],
        ..DataConfig::new(dir.path())
    };
    let engine = LookupEngine::new(DataContext::load(&config).unwrap());

    assert_eq!(engine.sale_price_per_area("Paris 1er"), Estimate::Unavailable);
    assert_eq!(
        engine.sale_price_per_area_of("Marseille 13e", PropertyKind::House),
        Estimate::Available(3333.33)
    );
}
