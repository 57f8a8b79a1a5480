use anyhow::Result;
use citycompare::app::CityCompareApp;
use citycompare::colors::ColorScheme;
use citycompare::display::{
    display_commune, display_comparison, display_housing, display_list, display_search_results,
};
use citycompare::json_output::{JsonCommune, JsonNames, JsonSearch, JsonShow, print_json};
use citycompare::search::homonyms;
use citycompare::{Args, Command, find_best_city_match};
use citycompare_core::LookupEngine;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);
    let app = CityCompareApp::new(args.data_dir.clone())?;
    let engine = app.load_engine()?;

    if let Err(error_message) = run_command(&args, &engine, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error_message)));
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_command(args: &Args, engine: &LookupEngine, colors: &ColorScheme) -> Result<(), String> {
    let catalog = engine.context().catalog();

    match &args.command {
        Command::Regions => {
            print_names("Régions".to_string(), &catalog.regions(), args.json, colors)?;
        }

        Command::Departments { region } => {
            let departments = catalog.departments_of(region);
            if departments.is_empty() {
                return Err(format!("Region '{}' not found", region));
            }
            print_names(format!("Départements - {}", region), &departments, args.json, colors)?;
        }

        Command::Cities { department } => {
            let cities = catalog.cities_of(department);
            if cities.is_empty() {
                return Err(format!("Department '{}' not found", department));
            }
            print_names(format!("Communes - {}", department), &cities, args.json, colors)?;
        }

        Command::Search { query, limit } => {
            let results = catalog.search(query, *limit);
            if args.json {
                print_json(&JsonSearch {
                    query,
                    results: results.iter().map(|commune| JsonCommune::from(*commune)).collect(),
                })?;
            } else {
                display_search_results(&results, colors);
            }
        }

        Command::Show { city } => {
            let commune = find_best_city_match(city, catalog)?;
            let homonym_count = homonyms(commune, catalog).len();
            let housing = engine.housing_profile(&commune.name);
            if args.json {
                print_json(&JsonShow {
                    commune,
                    homonyms: homonym_count,
                    housing: &housing,
                })?;
            } else {
                display_commune(commune, homonym_count, colors);
                display_housing(&housing, colors);
            }
        }

        Command::Compare { city1, city2 } => {
            let first = find_best_city_match(city1, catalog)?;
            let second = find_best_city_match(city2, catalog)?;
            let comparison = engine.compare(&first.name, &second.name);
            if args.json {
                print_json(&comparison)?;
            } else {
                display_comparison(&comparison, colors);
            }
        }
    }

    Ok(())
}

fn print_names(title: String, names: &[&str], json: bool, colors: &ColorScheme) -> Result<(), String> {
    if json {
        print_json(&JsonNames { title, names })
    } else {
        display_list(&title, names, colors);
        Ok(())
    }
}
