use citycompare_core::{Commune, Comparison, Estimate, HousingProfile, RentKind};

use crate::colors::ColorScheme;
use crate::utils::format_number;

const LABEL_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 18;

pub fn display_list(title: &str, items: &[&str], colors: &ColorScheme) {
    println!("{}\n", colors.heading(title));
    for item in items {
        println!("  {}", item);
    }
    if items.is_empty() {
        println!("  {}", colors.missing("(aucun résultat)"));
    }
}

pub fn display_search_results(results: &[&Commune], colors: &ColorScheme) {
    if results.is_empty() {
        println!("{}", colors.error("❌ No commune matches this query"));
        return;
    }
    for (index, commune) in results.iter().enumerate() {
        println!(
            "{:>3}. {} - {}, {}",
            index + 1,
            colors.city_name(&commune.name),
            commune.department,
            commune.region
        );
    }
}

pub fn display_commune(commune: &Commune, homonym_count: usize, colors: &ColorScheme) {
    println!("🏙️  {}", colors.city_name(&commune.name));
    println!("📍 {}, {}", commune.department, commune.region);
    if homonym_count > 1 {
        println!(
            "{}",
            colors.missing(&format!(
                "   ({} communes share this name; showing the first listed)",
                homonym_count
            ))
        );
    }
    println!();

    let population = commune.population.map(format_number);
    print_attribute("👥 Population", population.as_deref(), colors);

    let area = commune.area_km2.map(|area| format!("{:.2} km²", area));
    print_attribute("📐 Superficie", area.as_deref(), colors);

    let density = commune.density.map(|density| format!("{:.1} hab/km²", density));
    print_attribute("📊 Densité", density.as_deref(), colors);

    let altitude = commune.altitude.map(|band| match (band.min, band.max) {
        (Some(min), Some(max)) => format!("{:.0} m - {:.0} m", min, max),
        (Some(min), None) => format!("min {:.0} m", min),
        (None, Some(max)) => format!("max {:.0} m", max),
        (None, None) => String::new(),
    });
    print_attribute("🏔️  Altitude", altitude.as_deref(), colors);

    let coordinates = commune
        .centroid
        .map(|c| format!("{:.4}, {:.4}", c.latitude, c.longitude));
    print_attribute("🗺️  Coordonnées", coordinates.as_deref(), colors);

    print_attribute(
        "🏘️  Type de commune",
        commune.urban_classification.as_deref(),
        colors,
    );

    if let Some(url) = &commune.wikipedia_url {
        println!("{:<LABEL_WIDTH$} {}", "🔗 Wikipédia", colors.url(url));
    }
}

fn print_attribute(label: &str, value: Option<&str>, colors: &ColorScheme) {
    match value.filter(|value| !value.is_empty()) {
        Some(value) => println!("{:<LABEL_WIDTH$} {}", label, value),
        None => println!("{:<LABEL_WIDTH$} {}", label, colors.missing("Non disponible")),
    }
}

pub fn display_housing(profile: &HousingProfile, colors: &ColorScheme) {
    println!("\n{}", colors.heading("Prix des loyers (€/m²/mois)"));
    for kind in RentKind::ALL {
        println!(
            "  {:<LABEL_WIDTH$}{}",
            kind.label(),
            format_estimate(profile.rent(kind), "€", colors)
        );
    }

    println!("\n{}", colors.heading("Prix d'achat immobilier (€/m², médiane)"));
    println!(
        "  {:<LABEL_WIDTH$}{}",
        "Appartements",
        format_estimate(profile.apartment_sale_price, "€", colors)
    );
    println!(
        "  {:<LABEL_WIDTH$}{}",
        "Maisons",
        format_estimate(profile.house_sale_price, "€", colors)
    );
}

pub fn display_comparison(comparison: &Comparison, colors: &ColorScheme) {
    let first = &comparison.first;
    let second = &comparison.second;

    println!(
        "🏙️  {} vs {}\n",
        colors.city_name(&display_name(first)),
        colors.city_name(&display_name(second))
    );

    println!(
        "  {:<LABEL_WIDTH$}{}{}",
        "",
        colors.heading(&format!("{:>VALUE_WIDTH$}", truncate(&display_name(first), VALUE_WIDTH))),
        colors.heading(&format!("{:>VALUE_WIDTH$}", truncate(&display_name(second), VALUE_WIDTH)))
    );

    println!("{}", colors.heading("Prix des loyers (€/m²/mois)"));
    for kind in RentKind::ALL {
        print_comparison_row(kind.label(), first.rent(kind), second.rent(kind), colors);
    }

    println!("{}", colors.heading("Prix d'achat immobilier (€/m², médiane)"));
    print_comparison_row(
        "Appartements",
        first.apartment_sale_price,
        second.apartment_sale_price,
        colors,
    );
    print_comparison_row("Maisons", first.house_sale_price, second.house_sale_price, colors);
}

fn print_comparison_row(label: &str, first: Estimate, second: Estimate, colors: &ColorScheme) {
    println!(
        "  {:<LABEL_WIDTH$}{}{}",
        label,
        format_estimate(first, "€", colors),
        format_estimate(second, "€", colors)
    );
}

/// Right-aligned estimate, colored by availability.
pub fn format_estimate(estimate: Estimate, unit: &str, colors: &ColorScheme) -> String {
    match estimate {
        Estimate::Available(_) => colors
            .number(&format!("{:>VALUE_WIDTH$}", format!("{} {}", estimate, unit)))
            .to_string(),
        _ => colors
            .missing(&format!("{:>VALUE_WIDTH$}", estimate.to_string()))
            .to_string(),
    }
}

fn display_name(profile: &HousingProfile) -> String {
    profile
        .commune
        .as_ref()
        .map(|commune| commune.name.clone())
        .unwrap_or_else(|| profile.city.clone())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}
