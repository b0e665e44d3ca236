// Filter Preview
//
// Purpose: run the catalog filter against a JSON page fixture and print
// which plants and locations stay visible.
// Usage: CATALOG=demos/catalog.json FILTER_NAME=fer cargo run --features cli --bin filter_preview

use plant_catalog_ui::config::DomContract;
use plant_catalog_ui::dom::{Display, DomAdapter};
use plant_catalog_ui::filter::{check, FilterCriteria};
use plant_catalog_ui::fixture::{build_page, CatalogFixture};
use plant_catalog_ui::page::{filter_plants, read_controls, read_records};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_or(name: &str, current: &mut String) {
    if let Ok(value) = std::env::var(name) {
        *current = value;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plant_catalog_ui=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path = std::env::var("CATALOG").unwrap_or_else(|_| "catalog.json".to_string());
    let contract = match std::env::var("CONTRACT") {
        Ok(path) => DomContract::from_json(&std::fs::read_to_string(&path)?)?,
        Err(_) => DomContract::default(),
    };

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG: {}", catalog_path);

    let mut fixture = CatalogFixture::load(&catalog_path)?;

    // Environment overrides whatever the fixture's controls hold
    let controls = &mut fixture.controls;
    env_or("FILTER_NAME", &mut controls.name);
    env_or("FILTER_SPECIES", &mut controls.species);
    env_or("FILTER_MAX", &mut controls.max_temp);
    env_or("FILTER_MAX_DIR", &mut controls.max_temp_direction);
    env_or("FILTER_MIN", &mut controls.min_temp);
    env_or("FILTER_MIN_DIR", &mut controls.min_temp_direction);
    if let Ok(location) = std::env::var("FILTER_LOCATION") {
        controls.location = Some(location);
    }

    let (mut dom, nodes) = build_page(&fixture, &contract);
    let summary = filter_plants(&mut dom, &contract)?;

    let criteria = FilterCriteria::from_controls(&read_controls(&dom, &contract)?);
    println!("Criteria: {}", serde_json::to_string(&criteria)?);
    println!();

    for (location, group) in fixture.locations.iter().zip(&nodes.groups) {
        let marker = if dom.display(group) == Some(Display::None) { "-" } else { "+" };
        println!("{} {}", marker, location.name);
    }
    println!();

    for (_, record) in read_records(&dom, &contract)? {
        match check(&record, &criteria) {
            Ok(()) => println!("  shown   {}", record.name),
            Err(reason) => println!("  hidden  {} ({:?})", record.name, reason),
        }
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
