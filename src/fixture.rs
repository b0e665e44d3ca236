//! Catalog Page Fixtures
//!
//! Builds a `MemoryDom` laid out like a generated catalog page from a small
//! JSON description. Used by the preview binary, integration tests and
//! benchmarks.
//!
//! ```json
//! {
//!   "controls": {"name": "fer", "max_temp_direction": "+", "min_temp_direction": "+"},
//!   "locations": [
//!     {"name": "Den", "plants": [{"name": "Fern", "species": "Boston Fern", "temp_max": "30", "temp_min": "10"}]}
//!   ],
//!   "galleries": [["img/fern_1.jpg", "img/fern_2.jpg"]],
//!   "thumbnails": ["img/small/fern.jpg"]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::DomContract;
use crate::dom::{Display, MemoryDom, NodeId, NodeSpec};
use crate::filter::ControlValues;

/// One plant list entry; temperatures stay text as rendered on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantEntry {
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub temp_max: Option<String>,
    #[serde(default)]
    pub temp_min: Option<String>,
}

impl PlantEntry {
    pub fn new(name: &str, species: Option<&str>, temp_max: f64, temp_min: f64) -> Self {
        Self {
            name: name.to_string(),
            species: species.map(str::to_string),
            temp_max: Some(temp_max.to_string()),
            temp_min: Some(temp_min.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    #[serde(default)]
    pub plants: Vec<PlantEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    pub controls: ControlValues,
    pub locations: Vec<LocationEntry>,
    /// Image sources per gallery; the first image starts visible
    pub galleries: Vec<Vec<String>>,
    pub thumbnails: Vec<String>,
}

impl CatalogFixture {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog fixture {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog fixture {}", path.display()))
    }
}

/// Handles to the interesting nodes of a built page
#[derive(Debug, Clone, Default)]
pub struct PageNodes {
    /// Plant items in document order
    pub items: Vec<NodeId>,
    pub groups: Vec<NodeId>,
    /// Images per gallery, then the (previous, next) arrows
    pub gallery_images: Vec<Vec<NodeId>>,
    pub gallery_arrows: Vec<(NodeId, NodeId)>,
    pub thumbnails: Vec<NodeId>,
    pub overlay: Option<NodeId>,
    pub overlay_image: Option<NodeId>,
}

/// Lay the fixture out the way the site generator renders a catalog page
pub fn build_page(fixture: &CatalogFixture, contract: &DomContract) -> (MemoryDom, PageNodes) {
    let mut dom = MemoryDom::new();
    let body = dom.root();
    let mut nodes = PageNodes::default();

    add_controls(&mut dom, body, &fixture.controls, contract);

    let list = dom.append(body, NodeSpec::new("div").class("plant_list"));
    for location in &fixture.locations {
        let group = dom.append(list, NodeSpec::new("div").class(&contract.location_group));
        dom.append(
            group,
            NodeSpec::new("h3").class(&contract.location_header).text(&location.name),
        );
        for plant in &location.plants {
            let item = add_plant(&mut dom, group, plant, &location.name, contract);
            nodes.items.push(item);
        }
        nodes.groups.push(group);
    }

    for sources in &fixture.galleries {
        let (images, arrows) = add_gallery(&mut dom, body, sources, contract);
        nodes.gallery_images.push(images);
        nodes.gallery_arrows.push(arrows);
    }

    for src in &fixture.thumbnails {
        nodes.thumbnails.push(dom.append(body, NodeSpec::new("img").src(src)));
    }

    let overlay = dom.append(
        body,
        NodeSpec::new("div").id(&contract.viewer.overlay).display(Display::None),
    );
    let overlay_image = dom.append(overlay, NodeSpec::new("img").id(&contract.viewer.overlay_image));
    nodes.overlay = Some(overlay);
    nodes.overlay_image = Some(overlay_image);

    (dom, nodes)
}

fn add_controls(dom: &mut MemoryDom, parent: NodeId, controls: &ControlValues, contract: &DomContract) {
    let ids = &contract.controls;
    let inputs = [
        ("input", &ids.name, &controls.name),
        ("input", &ids.species, &controls.species),
        ("select", &ids.max_temp_direction, &controls.max_temp_direction),
        ("input", &ids.max_temp, &controls.max_temp),
        ("select", &ids.min_temp_direction, &controls.min_temp_direction),
        ("input", &ids.min_temp, &controls.min_temp),
    ];
    for (tag, id, value) in inputs {
        dom.append(parent, NodeSpec::new(tag).id(id).value(value));
    }
    if let Some(location) = &controls.location {
        dom.append(parent, NodeSpec::new("input").id(&ids.location).value(location));
    }
}

fn add_plant(
    dom: &mut MemoryDom,
    group: NodeId,
    plant: &PlantEntry,
    location: &str,
    contract: &DomContract,
) -> NodeId {
    let fields = &contract.fields;
    let item = dom.append(group, NodeSpec::new("div").class(&contract.plant_item));
    dom.append(item, NodeSpec::new("a").class(&fields.name).text(&plant.name));
    if let Some(species) = &plant.species {
        dom.append(item, NodeSpec::new("a").class(&fields.species).text(species));
    }
    dom.append(item, NodeSpec::new("span").class(&fields.location).text(location));
    if let Some(temp_max) = &plant.temp_max {
        dom.append(item, NodeSpec::new("span").class(&fields.temp_max).text(temp_max));
    }
    if let Some(temp_min) = &plant.temp_min {
        dom.append(item, NodeSpec::new("span").class(&fields.temp_min).text(temp_min));
    }
    item
}

fn add_gallery(
    dom: &mut MemoryDom,
    parent: NodeId,
    sources: &[String],
    contract: &DomContract,
) -> (Vec<NodeId>, (NodeId, NodeId)) {
    let markup = &contract.viewer;
    let container = dom.append(
        parent,
        NodeSpec::new("div").class(&format!("flex_container {}", markup.gallery_container)),
    );
    let strip = dom.append(container, NodeSpec::new("div").class(&markup.gallery_images));
    let images = sources
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let display = if index == 0 { Display::Block } else { Display::None };
            let figure = dom.append(strip, NodeSpec::new("figure").class("plant_image").display(display));
            dom.append(figure, NodeSpec::new("img").src(src));
            figure
        })
        .collect();
    let controls = dom.append(container, NodeSpec::new("div").class(&markup.gallery_controls));
    let previous = dom.append(controls, NodeSpec::new("div").class(&markup.previous_arrow));
    let next = dom.append(controls, NodeSpec::new("div").class(&markup.next_arrow));
    (images, (previous, next))
}

/// Add the canvases and injected arrays of a plant details page
pub fn add_chart_data(
    dom: &mut MemoryDom,
    contract: &DomContract,
    dates: &[&str],
    heights: &[f64],
    widths: &[f64],
    healths: Option<&[f64]>,
) {
    let names = &contract.charts;
    let body = dom.root();
    let dates: Vec<String> = dates.iter().map(|d| d.to_string()).collect();

    dom.append(body, NodeSpec::new("canvas").id(&names.growth_canvas));
    dom.set_label_global(&names.growth_dates, dates.clone());
    dom.set_number_global(&names.growth_heights, heights.to_vec());
    dom.set_number_global(&names.growth_widths, widths.to_vec());

    if let Some(healths) = healths {
        dom.append(body, NodeSpec::new("canvas").id(&names.health_canvas));
        dom.set_label_global(&names.health_dates, dates);
        dom.set_number_global(&names.health_values, healths.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DomAdapter;

    #[test]
    fn test_fixture_json() {
        let raw = r#"{
            "controls": {"name": "fer"},
            "locations": [{"name": "Den", "plants": [{"name": "Fern", "temp_max": "30"}]}],
            "galleries": [["a.jpg", "b.jpg"]]
        }"#;
        let fixture: CatalogFixture = serde_json::from_str(raw).unwrap();
        assert_eq!(fixture.controls.name, "fer");
        assert_eq!(fixture.locations[0].plants[0].species, None);
        assert!(fixture.thumbnails.is_empty());
    }

    #[test]
    fn test_build_page_layout() {
        let contract = DomContract::default();
        let fixture = CatalogFixture {
            locations: vec![LocationEntry {
                name: "Den".to_string(),
                plants: vec![PlantEntry::new("Fern", Some("Boston Fern"), 30.0, 10.0)],
            }],
            galleries: vec![vec!["a.jpg".to_string(), "b.jpg".to_string()]],
            ..Default::default()
        };
        let (dom, nodes) = build_page(&fixture, &contract);

        assert_eq!(dom.elements_by_class("plant_list_item"), nodes.items);
        assert_eq!(dom.elements_by_class("location_group"), nodes.groups);
        assert_eq!(dom.display(&nodes.gallery_images[0][0]), Some(Display::Block));
        assert_eq!(dom.display(&nodes.gallery_images[0][1]), Some(Display::None));
        assert!(dom.element_by_id("plant_search_location").is_none());
        assert!(dom.element_by_id("image_viewer").is_some());
    }
}
