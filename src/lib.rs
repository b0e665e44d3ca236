//! Plant Catalog Page Behaviour
//!
//! Client-side behaviour of the generated plant catalog site:
//! - `filter/`: list filtering by name, species, location and temperature
//! - `viewer/`: image overlay and per-plant gallery navigation
//! - `chart/`: growth and health line charts for the charting library
//! - `dom/`: the document seam (`DomAdapter`), in-memory and browser-backed
//! - `page`: handlers tying the document to the pure logic above
//!
//! Builds natively for tests and tooling. With the `web` feature on
//! `wasm32`, `web_entry` wires the handlers into the browser page.

pub mod error;
pub mod config;
pub mod filter;
pub mod viewer;
pub mod chart;
pub mod dom;
pub mod page;
pub mod fixture;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web_entry;

// Re-export commonly used types
pub use error::{Result, UiError};
pub use config::DomContract;
pub use filter::{evaluate, FilterCriteria, PlantRecord, TempDirection, Visibility};
pub use viewer::{Gallery, GalleryRegistry, Step, ViewerState};
pub use chart::{create_graphs, ChartConfig};
pub use dom::{Display, DomAdapter, MemoryDom};
pub use page::{
    bind_galleries, close_image_viewer, filter_plants, navigate_gallery, open_image_viewer,
    setup_img_events, viewer_targets, FilterSummary, GalleryBinding, ViewerTargets,
};
