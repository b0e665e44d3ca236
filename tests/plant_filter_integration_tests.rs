//! Plant Filter Integration Tests
//!
//! Drives `filter_plants` over catalog pages built in memory, checking item
//! visibility, location-group collapsing and idempotence.

use plant_catalog_ui::config::DomContract;
use plant_catalog_ui::dom::{Display, DomAdapter, MemoryDom, NodeSpec};
use plant_catalog_ui::filter::{evaluate, FilterCriteria};
use plant_catalog_ui::fixture::{build_page, CatalogFixture, LocationEntry, PageNodes, PlantEntry};
use plant_catalog_ui::page::{filter_plants, read_controls, read_records};
use plant_catalog_ui::UiError;

fn catalog(controls: &[(&str, &str)]) -> CatalogFixture {
    let mut fixture = CatalogFixture {
        locations: vec![
            LocationEntry {
                name: "Den".to_string(),
                plants: vec![PlantEntry::new("Fern", Some("Boston Fern"), 30.0, 10.0)],
            },
            LocationEntry {
                name: "Patio".to_string(),
                plants: vec![PlantEntry::new("Cactus", Some("Saguaro"), 45.0, 5.0)],
            },
        ],
        ..Default::default()
    };
    let raw = &mut fixture.controls;
    raw.max_temp_direction = "+".to_string();
    raw.min_temp_direction = "+".to_string();
    for (key, value) in controls {
        let value = value.to_string();
        match *key {
            "name" => raw.name = value,
            "species" => raw.species = value,
            "location" => raw.location = Some(value),
            "max" => raw.max_temp = value,
            "max_dir" => raw.max_temp_direction = value,
            "min" => raw.min_temp = value,
            "min_dir" => raw.min_temp_direction = value,
            other => panic!("unknown control {other}"),
        }
    }
    fixture
}

fn visible_names(dom: &MemoryDom, contract: &DomContract) -> Vec<String> {
    read_records(dom, contract)
        .unwrap()
        .into_iter()
        .filter(|(item, _)| dom.display(item) != Some(Display::None))
        .map(|(_, record)| record.name)
        .collect()
}

fn run(controls: &[(&str, &str)]) -> (MemoryDom, PageNodes, DomContract) {
    let contract = DomContract::default();
    let (mut dom, nodes) = build_page(&catalog(controls), &contract);
    filter_plants(&mut dom, &contract).unwrap();
    (dom, nodes, contract)
}

#[test]
fn test_name_filter_scenario() {
    let (dom, _, contract) = run(&[("name", "fer")]);
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);
}

#[test]
fn test_max_temp_at_most_scenario() {
    let (dom, _, contract) = run(&[("max", "40"), ("max_dir", "-")]);
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);
}

#[test]
fn test_min_temp_threshold_is_numeric() {
    // Compared as text, "10" would sort before "6"
    let (dom, _, contract) = run(&[("min", "6"), ("min_dir", "+")]);
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);

    let (dom, _, contract) = run(&[("min", "6"), ("min_dir", "-")]);
    assert_eq!(visible_names(&dom, &contract), vec!["cactus"]);
}

#[test]
fn test_empty_controls_show_everything() {
    let (dom, nodes, contract) = run(&[]);
    assert_eq!(visible_names(&dom, &contract), vec!["fern", "cactus"]);
    for group in &nodes.groups {
        assert_eq!(dom.display(group), Some(Display::Flex));
    }
}

#[test]
fn test_visibility_matches_pure_evaluation() {
    let (dom, _, contract) = run(&[("species", "o"), ("max", "35"), ("max_dir", "+")]);
    let criteria = FilterCriteria::from_controls(&read_controls(&dom, &contract).unwrap());
    for (item, record) in read_records(&dom, &contract).unwrap() {
        let shown = dom.display(&item) == Some(Display::Block);
        assert_eq!(shown, evaluate(&record, &criteria).is_visible(), "{}", record.name);
    }
}

#[test]
fn test_location_group_collapses() {
    let (dom, nodes, _) = run(&[("name", "cac")]);
    assert_eq!(dom.display(&nodes.groups[0]), Some(Display::None));
    assert_eq!(dom.display(&nodes.groups[1]), Some(Display::Flex));
}

#[test]
fn test_group_with_one_visible_item_stays() {
    let contract = DomContract::default();
    let mut fixture = catalog(&[("name", "ivy")]);
    fixture.locations[0].plants = vec![
        PlantEntry::new("Fern", Some("Boston Fern"), 30.0, 10.0),
        PlantEntry::new("Ivy", Some("Hedera"), 25.0, 0.0),
        PlantEntry::new("Palm", Some("Areca"), 35.0, 12.0),
    ];
    let (mut dom, nodes) = build_page(&fixture, &contract);
    let summary = filter_plants(&mut dom, &contract).unwrap();

    assert_eq!(summary.items, 4);
    assert_eq!(summary.visible, 1);
    assert_eq!(summary.visible_groups, 1);
    assert_eq!(dom.display(&nodes.groups[0]), Some(Display::Flex));
    assert_eq!(dom.display(&nodes.groups[1]), Some(Display::None));
}

#[test]
fn test_location_control_when_present() {
    let (dom, nodes, contract) = run(&[("location", "PAT")]);
    assert_eq!(visible_names(&dom, &contract), vec!["cactus"]);
    assert_eq!(dom.display(&nodes.groups[0]), Some(Display::None));
}

#[test]
fn test_missing_species_hidden_only_by_species_filter() {
    let contract = DomContract::default();
    let mut fixture = catalog(&[]);
    fixture.locations[0].plants.push(PlantEntry::new("Orchid", None, 28.0, 15.0));
    let (mut dom, _) = build_page(&fixture, &contract);

    filter_plants(&mut dom, &contract).unwrap();
    assert!(visible_names(&dom, &contract).contains(&"orchid".to_string()));

    let species = dom.element_by_id("plant_search_species").unwrap();
    dom.set_value(species, "fern");
    filter_plants(&mut dom, &contract).unwrap();
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);
}

#[test]
fn test_refilter_after_typing() {
    let contract = DomContract::default();
    let (mut dom, _) = build_page(&catalog(&[("name", "fer")]), &contract);
    filter_plants(&mut dom, &contract).unwrap();
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);

    let name = dom.element_by_id("plant_search_name").unwrap();
    dom.set_value(name, "");
    filter_plants(&mut dom, &contract).unwrap();
    assert_eq!(visible_names(&dom, &contract), vec!["fern", "cactus"]);
}

#[test]
fn test_filter_is_idempotent() {
    let contract = DomContract::default();
    let (mut dom, nodes) = build_page(&catalog(&[("max", "40"), ("max_dir", "-")]), &contract);

    let first = filter_plants(&mut dom, &contract).unwrap();
    let snapshot: Vec<_> = nodes.items.iter().chain(&nodes.groups).map(|n| dom.display(n)).collect();

    let second = filter_plants(&mut dom, &contract).unwrap();
    let again: Vec<_> = nodes.items.iter().chain(&nodes.groups).map(|n| dom.display(n)).collect();

    assert_eq!(first, second);
    assert_eq!(snapshot, again);
}

#[test]
fn test_malformed_temperature_hides_under_threshold() {
    let contract = DomContract::default();
    let mut fixture = catalog(&[]);
    fixture.locations[1].plants[0].temp_max = Some("hot".to_string());
    let (mut dom, _) = build_page(&fixture, &contract);

    filter_plants(&mut dom, &contract).unwrap();
    assert_eq!(visible_names(&dom, &contract), vec!["fern", "cactus"]);

    let max = dom.element_by_id("plant_search_max_temp").unwrap();
    dom.set_value(max, "0");
    filter_plants(&mut dom, &contract).unwrap();
    assert_eq!(visible_names(&dom, &contract), vec!["fern"]);
}

#[test]
fn test_missing_control_fails_without_writes() {
    let contract = DomContract::default();
    let mut dom = MemoryDom::new();
    let body = dom.root();
    let group = dom.append(body, NodeSpec::new("div").class("location_group"));
    let item = dom.append(group, NodeSpec::new("div").class("plant_list_item"));
    dom.append(item, NodeSpec::new("a").class("plant_link").text("Fern"));

    let err = filter_plants(&mut dom, &contract).unwrap_err();
    assert!(matches!(err, UiError::MissingElement { ref id } if id == "plant_search_name"));
    assert_eq!(dom.display(&item), None);
    assert_eq!(dom.display(&group), None);
}

#[test]
fn test_item_without_name_aborts_pass() {
    let contract = DomContract::default();
    let (mut dom, nodes) = build_page(&catalog(&[("name", "zzz")]), &contract);
    let broken = dom.append(nodes.groups[0], NodeSpec::new("div").class("plant_list_item"));
    dom.append(broken, NodeSpec::new("span").class("temp_max").text("20"));

    let err = filter_plants(&mut dom, &contract).unwrap_err();
    assert!(matches!(err, UiError::MissingField { item: 1, .. }));
    // Nothing was hidden even though no plant matches "zzz"
    for item in &nodes.items {
        assert_eq!(dom.display(item), None);
    }
}
