//! Document access
//!
//! `DomAdapter` is the narrow slice of the DOM the page handlers use: find
//! elements, read text/values/sources and inline `display`, and write
//! `display`, `src` and `cursor`. Nodes are never created or removed.
//!
//! - `memory`: arena-backed document for tests and the preview binary
//! - `web`: the browser document through `web-sys` (feature `web`, wasm32)

pub mod memory;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::filter::has_class;

pub use memory::{MemoryDom, NodeId, NodeSpec};

/// Inline `display` values the handlers write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Display {
    Block,
    Flex,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }

    /// Unrecognised or empty values are `None` (no inline override)
    pub fn parse(css: &str) -> Option<Self> {
        match css.trim() {
            "block" => Some(Display::Block),
            "flex" => Some(Display::Flex),
            "none" => Some(Display::None),
            _ => None,
        }
    }
}

pub trait DomAdapter {
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
    /// Document order
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node>;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Raw `class` attribute
    fn class_name(&self, node: &Self::Node) -> String;
    fn text_content(&self, node: &Self::Node) -> String;
    /// Current value of an input or select; `None` for other elements
    fn value(&self, node: &Self::Node) -> Option<String>;
    fn src(&self, node: &Self::Node) -> Option<String>;
    /// Inline `display`, if one is set
    fn display(&self, node: &Self::Node) -> Option<Display>;

    fn set_display(&mut self, node: &Self::Node, display: Display);
    fn set_src(&mut self, node: &Self::Node, src: &str);
    fn set_cursor(&mut self, node: &Self::Node, cursor: &str);
}

/// Element that must exist for the current handler to run
pub fn require<D: DomAdapter>(dom: &D, id: &str) -> Result<D::Node> {
    dom.element_by_id(id).ok_or_else(|| UiError::missing_element(id))
}

/// Value of a required control
pub fn control_value<D: DomAdapter>(dom: &D, id: &str) -> Result<String> {
    let node = require(dom, id)?;
    dom.value(&node).ok_or_else(|| UiError::missing_element(id))
}

/// Value of a control some page variants omit
pub fn optional_control_value<D: DomAdapter>(dom: &D, id: &str) -> Option<String> {
    dom.element_by_id(id).and_then(|node| dom.value(&node))
}

pub fn node_has_class<D: DomAdapter>(dom: &D, node: &D::Node, class: &str) -> bool {
    has_class(&dom.class_name(node), class)
}

/// First direct child carrying `class`
pub fn child_with_class<D: DomAdapter>(dom: &D, node: &D::Node, class: &str) -> Option<D::Node> {
    dom.children(node)
        .into_iter()
        .find(|child| node_has_class(dom, child, class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_css_round() {
        for display in [Display::Block, Display::Flex, Display::None] {
            assert_eq!(Display::parse(display.as_css()), Some(display));
        }
        assert_eq!(Display::parse(""), None);
        assert_eq!(Display::parse("inline"), None);
    }

    #[test]
    fn test_control_helpers() {
        let mut dom = MemoryDom::new();
        let body = dom.root();
        dom.append(body, NodeSpec::new("input").id("plant_search_name").value("fern"));
        dom.append(body, NodeSpec::new("div").id("not_a_control"));

        assert_eq!(control_value(&dom, "plant_search_name").unwrap(), "fern");
        assert!(matches!(
            control_value(&dom, "plant_search_species"),
            Err(UiError::MissingElement { .. })
        ));
        assert!(control_value(&dom, "not_a_control").is_err());
        assert_eq!(optional_control_value(&dom, "plant_search_location"), None);
    }
}
