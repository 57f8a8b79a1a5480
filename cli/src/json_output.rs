use citycompare_core::{Commune, HousingProfile};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonNames<'a> {
    pub title: String,
    pub names: &'a [&'a str],
}

#[derive(Serialize)]
pub struct JsonSearch<'a> {
    pub query: &'a str,
    pub results: Vec<JsonCommune>,
}

#[derive(Serialize)]
pub struct JsonCommune {
    pub name: String,
    pub department: String,
    pub region: String,
}

impl From<&Commune> for JsonCommune {
    fn from(commune: &Commune) -> Self {
        Self {
            name: commune.name.clone(),
            department: commune.department.clone(),
            region: commune.region.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct JsonShow<'a> {
    pub commune: &'a Commune,
    pub homonyms: usize,
    pub housing: &'a HousingProfile,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON output: {}", e))?;
    println!("{}", text);
    Ok(())
}
