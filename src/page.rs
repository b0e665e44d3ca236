//! Page Handlers
//!
//! Thin layer between the document and the pure logic in `filter` and
//! `viewer`. Each function reads what it needs from a `DomAdapter`, calls
//! into the core and writes back `display`/`src`/`cursor`. They are generic
//! over the adapter so the browser entry point and the tests share them.

use serde::Serialize;

use crate::config::DomContract;
use crate::dom::{
    child_with_class, control_value, node_has_class, optional_control_value, require, Display,
    DomAdapter,
};
use crate::error::Result;
use crate::filter::{evaluate, group_visibility, ControlValues, FilterCriteria, PlantRecord, Visibility};
use crate::viewer::{is_thumbnail, Gallery, GalleryRegistry, Step, Toggle, ViewerState};

// ============================================================================
// Plant filter
// ============================================================================

/// Counts after one filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub items: usize,
    pub visible: usize,
    pub groups: usize,
    pub visible_groups: usize,
}

/// Current control values; the location control is optional
pub fn read_controls<D: DomAdapter>(dom: &D, contract: &DomContract) -> Result<ControlValues> {
    let ids = &contract.controls;
    Ok(ControlValues {
        name: control_value(dom, &ids.name)?,
        species: control_value(dom, &ids.species)?,
        location: optional_control_value(dom, &ids.location),
        max_temp: control_value(dom, &ids.max_temp)?,
        max_temp_direction: control_value(dom, &ids.max_temp_direction)?,
        min_temp: control_value(dom, &ids.min_temp)?,
        min_temp_direction: control_value(dom, &ids.min_temp_direction)?,
    })
}

/// Every plant list item with its extracted record, in document order
pub fn read_records<D: DomAdapter>(
    dom: &D,
    contract: &DomContract,
) -> Result<Vec<(D::Node, PlantRecord)>> {
    dom.elements_by_class(&contract.plant_item)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let children = dom
                .children(&item)
                .into_iter()
                .map(|child| (dom.class_name(&child), dom.text_content(&child)));
            let record = PlantRecord::extract(index, children, &contract.fields)?;
            Ok((item, record))
        })
        .collect()
}

fn shown<D: DomAdapter>(dom: &D, node: &D::Node) -> Visibility {
    Visibility::from_bool(dom.display(node) != Some(Display::None))
}

/// Recompute every item and location group from the current controls
///
/// All items are read before anything is written, so a malformed item
/// aborts the pass without leaving the list half-filtered.
pub fn filter_plants<D: DomAdapter>(dom: &mut D, contract: &DomContract) -> Result<FilterSummary> {
    let criteria = FilterCriteria::from_controls(&read_controls(&*dom, contract)?);
    let records = read_records(&*dom, contract)?;

    let mut summary = FilterSummary {
        items: records.len(),
        ..Default::default()
    };

    for (item, record) in &records {
        let display = match evaluate(record, &criteria) {
            Visibility::Visible => {
                summary.visible += 1;
                Display::Block
            }
            Visibility::Hidden => Display::None,
        };
        dom.set_display(item, display);
    }

    for group in dom.elements_by_class(&contract.location_group) {
        let members: Vec<Visibility> = {
            let view: &D = dom;
            view.children(&group)
                .iter()
                .filter(|child| !node_has_class(view, child, &contract.location_header))
                .map(|child| shown(view, child))
                .collect()
        };
        let display = match group_visibility(members) {
            Visibility::Visible => {
                summary.visible_groups += 1;
                Display::Flex
            }
            Visibility::Hidden => Display::None,
        };
        dom.set_display(&group, display);
        summary.groups += 1;
    }

    tracing::debug!(
        "Filter pass: {}/{} plants, {}/{} locations visible",
        summary.visible,
        summary.items,
        summary.visible_groups,
        summary.groups
    );
    Ok(summary)
}

// ============================================================================
// Image viewer
// ============================================================================

/// Mark thumbnails as non-interactive and return the clickable images
pub fn setup_img_events<D: DomAdapter>(dom: &mut D, contract: &DomContract) -> Vec<D::Node> {
    let marker = &contract.viewer.thumbnail_marker;
    let mut clickable = Vec::new();
    for image in dom.elements_by_tag("img") {
        let src = dom.src(&image).unwrap_or_default();
        if is_thumbnail(&src, marker) {
            dom.set_cursor(&image, "default");
        } else {
            clickable.push(image);
        }
    }
    tracing::debug!("{} clickable images", clickable.len());
    clickable
}

/// Click targets of the image viewer
#[derive(Debug, Clone)]
pub struct ViewerTargets<N> {
    /// Full-size images that open the overlay
    pub images: Vec<N>,
    /// The overlay, when clicking its backdrop closes it
    pub backdrop: Option<N>,
}

/// Mark thumbnails and collect everything the viewer listens on
pub fn viewer_targets<D: DomAdapter>(dom: &mut D, contract: &DomContract) -> ViewerTargets<D::Node> {
    let images = setup_img_events(dom, contract);
    let backdrop = if contract.viewer_options.close_on_backdrop {
        dom.element_by_id(&contract.viewer.overlay)
    } else {
        None
    };
    ViewerTargets { images, backdrop }
}

/// Show `src` enlarged; thumbnails are refused
///
/// Returns whether the overlay was opened.
pub fn open_image_viewer<D: DomAdapter>(
    dom: &mut D,
    contract: &DomContract,
    state: &mut ViewerState,
    src: &str,
) -> Result<bool> {
    let markup = &contract.viewer;
    if is_thumbnail(src, &markup.thumbnail_marker) {
        return Ok(false);
    }
    let image = require(&*dom, &markup.overlay_image)?;
    let overlay = require(&*dom, &markup.overlay)?;
    dom.set_src(&image, src);
    dom.set_display(&overlay, Display::Block);
    state.open(src);
    Ok(true)
}

/// Hide the overlay; returns whether it was open
pub fn close_image_viewer<D: DomAdapter>(
    dom: &mut D,
    contract: &DomContract,
    state: &mut ViewerState,
) -> Result<bool> {
    let overlay = require(&*dom, &contract.viewer.overlay)?;
    dom.set_display(&overlay, Display::None);
    Ok(state.close())
}

// ============================================================================
// Galleries
// ============================================================================

/// Nodes of one gallery and its arrows
#[derive(Debug, Clone)]
pub struct GalleryBinding<N> {
    /// Key into the `GalleryRegistry`
    pub key: usize,
    pub images: Vec<N>,
    pub previous: Option<N>,
    pub next: Option<N>,
}

/// Register every gallery on the page
///
/// Each gallery starts at its first visible image and is normalised so
/// exactly that image is shown.
pub fn bind_galleries<D: DomAdapter>(
    dom: &mut D,
    contract: &DomContract,
    registry: &mut GalleryRegistry,
) -> Vec<GalleryBinding<D::Node>> {
    let markup = &contract.viewer;
    let mut bindings = Vec::new();

    for (key, container) in dom.elements_by_class(&markup.gallery_container).into_iter().enumerate() {
        let view: &D = dom;
        let Some(strip) = child_with_class(view, &container, &markup.gallery_images) else {
            tracing::debug!("Gallery {} has no .{} strip, skipped", key, markup.gallery_images);
            continue;
        };
        let images = view.children(&strip);
        let gallery = Gallery::from_visibility(
            images.iter().map(|image| view.display(image) == Some(Display::Block)),
        );
        let controls = child_with_class(view, &container, &markup.gallery_controls);
        let arrow = |class: &str| {
            controls
                .as_ref()
                .and_then(|controls| child_with_class(view, controls, class))
        };
        let previous = arrow(&markup.previous_arrow);
        let next = arrow(&markup.next_arrow);

        for (index, image) in images.iter().enumerate() {
            let display = if index == gallery.current() { Display::Block } else { Display::None };
            dom.set_display(image, display);
        }

        registry.insert(key, gallery);
        bindings.push(GalleryBinding { key, images, previous, next });
    }

    tracing::debug!("{} galleries bound", bindings.len());
    bindings
}

/// Show the neighbouring image; no-op at either end
pub fn navigate_gallery<D: DomAdapter>(
    dom: &mut D,
    registry: &mut GalleryRegistry,
    binding: &GalleryBinding<D::Node>,
    step: Step,
) -> Option<Toggle> {
    let toggle = registry.step(binding.key, step)?;
    if let Some(image) = binding.images.get(toggle.hide) {
        dom.set_display(image, Display::None);
    }
    if let Some(image) = binding.images.get(toggle.show) {
        dom.set_display(image, Display::Block);
    }
    Some(toggle)
}
