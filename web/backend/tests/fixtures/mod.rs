#![allow(dead_code)]

use axum::Router;
use citycompare_core::parsing::Table;
use citycompare_core::{
    Catalog, DataContext, DistrictRules, LandRegistry, RentDataset, RentKind, TableFormat,
};
use citycompare_web::router;
use citycompare_web::state::AppState;
use std::sync::Arc;

pub const CATALOG_CSV: &str = "\
code_insee,nom_standard,reg_nom,dep_nom,latitude_centre,longitude_centre,population
42218,Saint-Étienne,Auvergne-Rhône-Alpes,Loire,45.4339,4.3903,170049
75101,Paris 1er,Île-de-France,Paris,48.8626,2.3363,15919
93066,Saint-Denis,Île-de-France,Seine-Saint-Denis,48.9300,2.3570,113000
06088,Nice,Provence-Alpes-Côte d'Azur,Alpes-Maritimes,43.7120,7.2380,348000
97411,Saint-Denis,La Réunion,La Réunion,-20.8800,55.4500,153000
";

pub const APARTMENT_RENTS_CSV: &str = "\
LIBGEO;loypredm2
Saint-Étienne;12,5
SAINT ETIENNE;13,5
Nice;17,2
Paris 1er;30,1
Nice;n/a
";

pub const REGISTRY_TXT: &str = "\
Commune|Type local|Surface reelle bati|Valeur fonciere
PARIS 01|Appartement|50|500000,00
PARIS 01|Appartement|40|440000,00
PARIS 01|Appartement|100|1500000,00
SAINT-ETIENNE|Appartement|50|100000,00
SAINT-ETIENNE|Appartement|50|110000,00
SAINT-ETIENNE|Appartement|20|100000,00
SAINT-ETIENNE|Maison|100|180000,00
NICE|Dépendance||
";

fn table(name: &str, text: &str, format: TableFormat) -> Table {
    Table::from_bytes(name, text.as_bytes(), format).unwrap()
}

pub fn create_test_context() -> DataContext {
    let catalog =
        Catalog::from_table(&table("catalog.csv", CATALOG_CSV, TableFormat::utf8(b','))).unwrap();
    let registry = LandRegistry::from_table(
        &table("registry.txt", REGISTRY_TXT, TableFormat::utf8(b'|')),
        &DistrictRules::default(),
    )
    .unwrap();
    let apartments = RentDataset::from_table(
        &table("rents.csv", APARTMENT_RENTS_CSV, TableFormat::utf8(b';')),
        RentKind::Apartments,
        "loypredm2",
    )
    .unwrap();

    DataContext::new(catalog, registry).with_rent_table(apartments)
}

pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::from_context(create_test_context()))
}

pub fn create_test_app() -> Router {
    router(create_test_state())
}
