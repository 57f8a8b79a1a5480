use citycompare::app::CityCompareApp;
use tempfile::tempdir;

#[test]
fn test_app_rejects_missing_data_dir() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");

    let error = CityCompareApp::new(Some(missing)).err().unwrap();
    assert!(error.to_string().contains("Data path does not exist"));
}

#[test]
fn test_app_lists_missing_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("communes-france-2025.csv"), "").unwrap();

    let error = CityCompareApp::new(Some(dir.path().to_path_buf())).err().unwrap();
    let message = error.to_string();
    assert!(message.contains("Data files not found"));
    assert!(message.contains("m2 pour les maisons.csv"));
    assert!(message.contains("ValeursFoncieres-2024.txt"));
    assert!(!message.contains("communes-france-2025.csv"));
}
