//! Browser entry point
//!
//! `start` runs when the module loads and wires every handler into the
//! page: filter controls, image overlay, gallery arrows and charts. The
//! handlers are also exported for pages that call them directly
//! (`oninput="filter_plants()"`, `onload="create_graphs();setup_img_events()"`).
//! Those exports are safe to call after `start`: charts already drawn are
//! not drawn again and image listeners are attached once.
//!
//! Each handler reports its own failure to the console and returns, so a
//! page missing e.g. the overlay still gets a working filter.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::chart::RenderedCharts;
use crate::config::DomContract;
use crate::dom::web::{global, js_error, WebDom};
use crate::dom::DomAdapter;
use crate::error::{Result, UiError};
use crate::page::{self as handlers, GalleryBinding};
use crate::viewer::{GalleryRegistry, Step, ViewerState};

/// Optional page global holding a JSON `DomContract` override
const CONTRACT_GLOBAL: &str = "plant_catalog_contract";

struct Page {
    contract: DomContract,
    viewer: RefCell<ViewerState>,
    galleries: RefCell<GalleryRegistry>,
    charts: RefCell<RenderedCharts>,
    images_wired: Cell<bool>,
}

impl Page {
    fn load() -> Self {
        let contract = match read_contract() {
            Ok(Some(contract)) => contract,
            Ok(None) => DomContract::default(),
            Err(err) => {
                report_error("load_contract", &err);
                DomContract::default()
            }
        };
        Self {
            contract,
            viewer: RefCell::new(ViewerState::default()),
            galleries: RefCell::new(GalleryRegistry::new()),
            charts: RefCell::new(RenderedCharts::new()),
            images_wired: Cell::new(false),
        }
    }
}

thread_local! {
    static PAGE: Rc<Page> = Rc::new(Page::load());
}

fn current_page() -> Rc<Page> {
    PAGE.with(Rc::clone)
}

fn read_contract() -> Result<Option<DomContract>> {
    match global(CONTRACT_GLOBAL)?.and_then(|value| value.as_string()) {
        Some(raw) => Ok(Some(DomContract::from_json(&raw)?)),
        None => Ok(None),
    }
}

fn report_error(handler: &str, err: &UiError) {
    tracing::error!("{} failed: {}", handler, err);
    web_sys::console::error_1(&JsValue::from_str(&format!("{handler} failed: {err}")));
}

fn report<T>(handler: &str, result: Result<T>) {
    if let Err(err) = result {
        report_error(handler, &err);
    }
}

/// Attach `callback` for each event type and leak it for the page lifetime
fn listen<F>(target: &EventTarget, events: &[&str], callback: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    for event in events {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
    }
    closure.forget();
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

fn run_filter(page: &Page) -> Result<()> {
    let mut dom = WebDom::from_window()?;
    handlers::filter_plants(&mut dom, &page.contract)?;
    Ok(())
}

fn run_graphs(page: &Page) -> Result<()> {
    let mut dom = WebDom::from_window()?;
    let source = dom.clone();
    let [growth, health] = page.charts.borrow_mut().create_graphs(&source, &mut dom, &page.contract);
    report("create_growth_chart", growth);
    report("create_health_chart", health);
    Ok(())
}

fn run_close(page: &Page) -> Result<()> {
    let mut dom = WebDom::from_window()?;
    handlers::close_image_viewer(&mut dom, &page.contract, &mut page.viewer.borrow_mut())?;
    Ok(())
}

fn run_open(page: &Page, event: &Event) -> Result<()> {
    let mut dom = WebDom::from_window()?;
    let image = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .ok_or_else(|| UiError::Js("click without an element target".to_string()))?;
    let src = dom.src(&image).unwrap_or_default();
    handlers::open_image_viewer(&mut dom, &page.contract, &mut page.viewer.borrow_mut(), &src)?;
    Ok(())
}

fn run_navigate(page: &Page, binding: &GalleryBinding<Element>, step: Step) -> Result<()> {
    let mut dom = WebDom::from_window()?;
    handlers::navigate_gallery(&mut dom, &mut page.galleries.borrow_mut(), binding, step);
    Ok(())
}

// ============================================================================
// Wiring
// ============================================================================

fn wire_filter(page: &Rc<Page>) -> Result<()> {
    let dom = WebDom::from_window()?;
    let ids = &page.contract.controls;
    let controls = [
        &ids.name,
        &ids.species,
        &ids.location,
        &ids.max_temp,
        &ids.max_temp_direction,
        &ids.min_temp,
        &ids.min_temp_direction,
    ];
    for id in controls {
        // The location control only exists on grouped pages
        let Some(control) = dom.element_by_id(id) else {
            continue;
        };
        let page = Rc::clone(page);
        listen(&control, &["input", "change"], move |_| {
            report("filter_plants", run_filter(&page))
        })?;
    }
    Ok(())
}

fn wire_viewer(page: &Rc<Page>) -> Result<()> {
    if page.images_wired.replace(true) {
        return Ok(());
    }
    let mut dom = WebDom::from_window()?;
    let targets = handlers::viewer_targets(&mut dom, &page.contract);

    for image in targets.images {
        let page = Rc::clone(page);
        listen(&image, &["click"], move |event| {
            report("open_image_viewer", run_open(&page, &event))
        })?;
    }

    if let Some(overlay) = targets.backdrop {
        let page = Rc::clone(page);
        listen(&overlay, &["click"], move |_| {
            report("close_image_viewer", run_close(&page))
        })?;
    }

    let bindings = handlers::bind_galleries(&mut dom, &page.contract, &mut page.galleries.borrow_mut());
    for binding in bindings {
        let binding = Rc::new(binding);
        let arrows = [(binding.previous.clone(), Step::Previous), (binding.next.clone(), Step::Next)];
        for (arrow, step) in arrows {
            let Some(arrow) = arrow else {
                continue;
            };
            let page = Rc::clone(page);
            let binding = Rc::clone(&binding);
            listen(&arrow, &["click"], move |_| {
                report("navigate_gallery", run_navigate(&page, &binding, step))
            })?;
        }
    }
    Ok(())
}

fn wire_page() {
    let page = current_page();
    report("wire_filter", wire_filter(&page));
    report("wire_viewer", wire_viewer(&page));
    report("create_graphs", run_graphs(&page));
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match WebDom::from_window() {
        Ok(dom) => dom.document().clone(),
        Err(err) => {
            report_error("start", &err);
            return;
        }
    };
    if document.ready_state() == "loading" {
        report("start", listen(&document, &["DOMContentLoaded"], |_| wire_page()));
    } else {
        wire_page();
    }
}

// ============================================================================
// Exports
// ============================================================================

#[wasm_bindgen]
pub fn filter_plants() {
    report("filter_plants", run_filter(&current_page()));
}

#[wasm_bindgen]
pub fn create_graphs() {
    report("create_graphs", run_graphs(&current_page()));
}

/// Wire the image viewer unless `start` already did
#[wasm_bindgen]
pub fn setup_img_events() {
    report("wire_viewer", wire_viewer(&current_page()));
}

#[wasm_bindgen]
pub fn close_image_viewer() {
    report("close_image_viewer", run_close(&current_page()));
}
