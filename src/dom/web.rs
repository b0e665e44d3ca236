//! Browser document
//!
//! `DomAdapter` and the chart traits over the live page: `web-sys` for
//! elements and styles, `js-sys` reflection for the injected data arrays
//! and the global `Chart` constructor.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCollection, HtmlElement, HtmlImageElement, HtmlInputElement,
    HtmlSelectElement,
};

use super::{Display, DomAdapter};
use crate::chart::{ChartConfig, ChartDataSource, ChartRenderer};
use crate::error::{Result, UiError};

/// Global name of the charting library's constructor
const CHART_CONSTRUCTOR: &str = "Chart";

pub fn js_error(value: JsValue) -> UiError {
    UiError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

/// Look up a page global; `None` when undefined or null
pub fn global(name: &str) -> Result<Option<JsValue>> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| UiError::Js("no document on window".to_string()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DomAdapter for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_class_name(class))
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_tag_name(tag))
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        collect(node.children())
    }

    fn class_name(&self, node: &Element) -> String {
        node.class_name()
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn value(&self, node: &Element) -> Option<String> {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else {
            node.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
        }
    }

    fn src(&self, node: &Element) -> Option<String> {
        match node.dyn_ref::<HtmlImageElement>() {
            Some(image) => Some(image.src()),
            None => node.get_attribute("src"),
        }
    }

    fn display(&self, node: &Element) -> Option<Display> {
        let element = node.dyn_ref::<HtmlElement>()?;
        let value = element.style().get_property_value("display").ok()?;
        Display::parse(&value)
    }

    fn set_display(&mut self, node: &Element, display: Display) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            if let Err(err) = element.style().set_property("display", display.as_css()) {
                tracing::warn!("Failed to set display: {:?}", err);
            }
        }
    }

    fn set_src(&mut self, node: &Element, src: &str) {
        match node.dyn_ref::<HtmlImageElement>() {
            Some(image) => image.set_src(src),
            None => {
                if let Err(err) = node.set_attribute("src", src) {
                    tracing::warn!("Failed to set src: {:?}", err);
                }
            }
        }
    }

    fn set_cursor(&mut self, node: &Element, cursor: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            if let Err(err) = element.style().set_property("cursor", cursor) {
                tracing::warn!("Failed to set cursor: {:?}", err);
            }
        }
    }
}

fn label_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

impl ChartDataSource for WebDom {
    fn label_array(&self, name: &str) -> Result<Option<Vec<String>>> {
        let Some(value) = global(name)? else {
            return Ok(None);
        };
        let labels: Vec<serde_json::Value> =
            serde_wasm_bindgen::from_value(value).map_err(|err| UiError::Js(err.to_string()))?;
        Ok(Some(labels.into_iter().map(label_text).collect()))
    }

    fn number_array(&self, name: &str) -> Result<Option<Vec<f64>>> {
        let Some(value) = global(name)? else {
            return Ok(None);
        };
        let numbers: Vec<f64> =
            serde_wasm_bindgen::from_value(value).map_err(|err| UiError::Js(err.to_string()))?;
        Ok(Some(numbers))
    }
}

impl ChartRenderer for WebDom {
    fn has_canvas(&self, canvas_id: &str) -> bool {
        self.document
            .get_element_by_id(canvas_id)
            .map_or(false, |element| element.tag_name().eq_ignore_ascii_case("canvas"))
    }

    fn render(&mut self, canvas_id: &str, config: &ChartConfig) -> Result<()> {
        let constructor = global(CHART_CONSTRUCTOR)?
            .ok_or_else(|| UiError::Chart(format!("{CHART_CONSTRUCTOR} is not loaded")))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| UiError::Chart(format!("{CHART_CONSTRUCTOR} is not a constructor")))?;

        // Plain objects, not Maps, so the library can read the config
        let config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| UiError::Chart(err.to_string()))?;
        let args = js_sys::Array::of2(&JsValue::from_str(canvas_id), &config);
        js_sys::Reflect::construct(&constructor, &args).map_err(js_error)?;
        Ok(())
    }
}
