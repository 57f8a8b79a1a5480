use citycompare_core::{Catalog, Commune, normalize_name};

const SUGGESTION_COUNT: usize = 3;

/// Resolves a user-typed name to its catalog entry, suggesting close
/// names when nothing matches exactly.
pub fn find_best_city_match<'a>(name: &str, catalog: &'a Catalog) -> Result<&'a Commune, String> {
    if normalize_name(name).is_empty() {
        return Err("Commune name is empty".to_string());
    }

    if let Some(commune) = catalog.find_by_name(name) {
        return Ok(commune);
    }

    let suggestions = catalog
        .search(name, SUGGESTION_COUNT)
        .iter()
        .map(|commune| format!("{} ({})", commune.name, commune.department))
        .collect::<Vec<_>>();

    if suggestions.is_empty() {
        Err(format!("Commune '{}' not found in catalog", name))
    } else {
        Err(format!(
            "Commune '{}' not found in catalog. Did you mean: {}?",
            name,
            suggestions.join(", ")
        ))
    }
}

/// Communes sharing the normalized name of `commune`, the match itself
/// included.
pub fn homonyms<'a>(commune: &Commune, catalog: &'a Catalog) -> Vec<&'a Commune> {
    catalog
        .communes()
        .iter()
        .filter(|other| other.key == commune.key)
        .collect()
}
