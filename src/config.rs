//! Page Contract Configuration
//!
//! Ids and class names the catalog pages are generated with. The defaults
//! match the site generator's markup; a page can override any subset by
//! embedding a JSON object, e.g. `{"plant_item": "plant_row"}`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FieldMapping;

/// Ids of the filter controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterControls {
    pub name: String,
    pub species: String,
    /// Only present on pages that group plants by location
    pub location: String,
    pub max_temp: String,
    pub max_temp_direction: String,
    pub min_temp: String,
    pub min_temp_direction: String,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self {
            name: "plant_search_name".to_string(),
            species: "plant_search_species".to_string(),
            location: "plant_search_location".to_string(),
            max_temp: "plant_search_max_temp".to_string(),
            max_temp_direction: "max_temp_updown".to_string(),
            min_temp: "plant_search_min_temp".to_string(),
            min_temp_direction: "min_temp_updown".to_string(),
        }
    }
}

/// Image viewer and gallery markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerMarkup {
    /// Overlay container id
    pub overlay: String,
    /// `<img>` inside the overlay
    pub overlay_image: String,
    /// Substring of `src` marking a thumbnail
    pub thumbnail_marker: String,
    pub gallery_container: String,
    pub gallery_images: String,
    pub gallery_controls: String,
    pub previous_arrow: String,
    pub next_arrow: String,
}

impl Default for ViewerMarkup {
    fn default() -> Self {
        Self {
            overlay: "image_viewer".to_string(),
            overlay_image: "image_viewer_image".to_string(),
            thumbnail_marker: "small".to_string(),
            gallery_container: "images_plant_container".to_string(),
            gallery_images: "images_plant".to_string(),
            gallery_controls: "img_controls".to_string(),
            previous_arrow: "left_arrow".to_string(),
            next_arrow: "right_arrow".to_string(),
        }
    }
}

/// Runtime behaviour of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Close the overlay when it is clicked
    pub close_on_backdrop: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self { close_on_backdrop: true }
    }
}

/// Canvas ids and page-global array names for the two charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSources {
    pub growth_canvas: String,
    pub growth_dates: String,
    pub growth_heights: String,
    pub growth_widths: String,
    pub health_canvas: String,
    pub health_dates: String,
    pub health_values: String,
}

impl Default for ChartSources {
    fn default() -> Self {
        Self {
            growth_canvas: "growth_chart".to_string(),
            growth_dates: "growth_dates".to_string(),
            growth_heights: "growth_heights".to_string(),
            growth_widths: "growth_widths".to_string(),
            health_canvas: "health_chart".to_string(),
            health_dates: "health_dates".to_string(),
            health_values: "health_healths".to_string(),
        }
    }
}

/// Colours shared by every chart on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub tick_color: String,
    pub height_color: String,
    pub width_color: String,
    pub health_color: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            tick_color: "rgba(102,204,224,100)".to_string(),
            height_color: "green".to_string(),
            width_color: "blue".to_string(),
            health_color: "red".to_string(),
        }
    }
}

/// Everything the handlers need to know about the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomContract {
    pub controls: FilterControls,
    pub plant_item: String,
    pub location_group: String,
    pub location_header: String,
    pub fields: FieldMapping,
    pub viewer: ViewerMarkup,
    pub viewer_options: ViewerOptions,
    pub charts: ChartSources,
    pub theme: ChartTheme,
}

impl Default for DomContract {
    fn default() -> Self {
        Self {
            controls: FilterControls::default(),
            plant_item: "plant_list_item".to_string(),
            location_group: "location_group".to_string(),
            location_header: "location_header".to_string(),
            fields: FieldMapping::default(),
            viewer: ViewerMarkup::default(),
            viewer_options: ViewerOptions::default(),
            charts: ChartSources::default(),
            theme: ChartTheme::default(),
        }
    }
}

impl DomContract {
    /// Parse an override; missing keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
