//! In-memory document
//!
//! Arena tree implementing `DomAdapter`, plus the chart traits so a whole
//! page (markup, injected globals, rendered charts) can be exercised
//! without a browser.

use rustc_hash::FxHashMap;

use super::{Display, DomAdapter};
use crate::chart::{ChartConfig, ChartDataSource, ChartRenderer};
use crate::error::Result;
use crate::filter::has_class;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Element description used when building a document
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    tag: String,
    id: Option<String>,
    class: String,
    text: String,
    value: Option<String>,
    src: Option<String>,
    display: Option<Display>,
}

impl NodeSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn src(mut self, src: &str) -> Self {
        self.src = Some(src.to_string());
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    spec: NodeSpec,
    cursor: Option<String>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    label_globals: FxHashMap<String, Vec<String>>,
    number_globals: FxHashMap<String, Vec<f64>>,
    rendered: Vec<(String, ChartConfig)>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Empty document with a `body` root
    pub fn new() -> Self {
        let body = NodeData {
            spec: NodeSpec::new("body"),
            cursor: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![body],
            label_globals: FxHashMap::default(),
            number_globals: FxHashMap::default(),
            rendered: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            spec,
            cursor: None,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Simulate typing into a control
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node.0].spec.value = Some(value.to_string());
    }

    pub fn cursor(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].cursor.as_deref()
    }

    pub fn set_label_global(&mut self, name: &str, values: Vec<String>) {
        self.label_globals.insert(name.to_string(), values);
    }

    pub fn set_number_global(&mut self, name: &str, values: Vec<f64>) {
        self.number_globals.insert(name.to_string(), values);
    }

    /// Charts handed to the renderer, in call order
    pub fn rendered_charts(&self) -> &[(String, ChartConfig)] {
        &self.rendered
    }

    fn walk(&self, from: NodeId, out: &mut Vec<NodeId>) {
        out.push(from);
        for child in &self.nodes[from.0].children {
            self.walk(*child, out);
        }
    }

    /// All nodes in document order
    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk(self.root(), &mut out);
        out
    }

    fn data(&self, node: &NodeId) -> &NodeData {
        &self.nodes[node.0]
    }
}

impl DomAdapter for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|node| self.data(node).spec.id.as_deref() == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|node| has_class(&self.data(node).spec.class, class))
            .collect()
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|node| self.data(node).spec.tag.eq_ignore_ascii_case(tag))
            .collect()
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.data(node).children.clone()
    }

    fn class_name(&self, node: &NodeId) -> String {
        self.data(node).spec.class.clone()
    }

    fn text_content(&self, node: &NodeId) -> String {
        let mut text = self.data(node).spec.text.clone();
        for child in &self.data(node).children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        let spec = &self.data(node).spec;
        match spec.tag.as_str() {
            "input" | "select" | "textarea" => Some(spec.value.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn src(&self, node: &NodeId) -> Option<String> {
        self.data(node).spec.src.clone()
    }

    fn display(&self, node: &NodeId) -> Option<Display> {
        self.data(node).spec.display
    }

    fn set_display(&mut self, node: &NodeId, display: Display) {
        self.nodes[node.0].spec.display = Some(display);
    }

    fn set_src(&mut self, node: &NodeId, src: &str) {
        self.nodes[node.0].spec.src = Some(src.to_string());
    }

    fn set_cursor(&mut self, node: &NodeId, cursor: &str) {
        self.nodes[node.0].cursor = Some(cursor.to_string());
    }
}

impl ChartDataSource for MemoryDom {
    fn label_array(&self, name: &str) -> Result<Option<Vec<String>>> {
        Ok(self.label_globals.get(name).cloned())
    }

    fn number_array(&self, name: &str) -> Result<Option<Vec<f64>>> {
        Ok(self.number_globals.get(name).cloned())
    }
}

impl ChartRenderer for MemoryDom {
    fn has_canvas(&self, canvas_id: &str) -> bool {
        self.element_by_id(canvas_id)
            .map_or(false, |node| self.data(&node).spec.tag == "canvas")
    }

    fn render(&mut self, canvas_id: &str, config: &ChartConfig) -> Result<()> {
        self.rendered.push((canvas_id.to_string(), config.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDom, NodeId, NodeId) {
        let mut dom = MemoryDom::new();
        let body = dom.root();
        let list = dom.append(body, NodeSpec::new("div").class("location_group"));
        let item = dom.append(list, NodeSpec::new("div").class("plant_list_item"));
        dom.append(item, NodeSpec::new("a").class("plant_link").text("Fern"));
        dom.append(item, NodeSpec::new("span").class("temp_max").text("30"));
        let header = dom.append(body, NodeSpec::new("h2").class("plant_list_item extra"));
        (dom, item, header)
    }

    #[test]
    fn test_lookup_in_document_order() {
        let (dom, item, header) = sample();
        assert_eq!(dom.elements_by_class("plant_list_item"), vec![item, header]);
        assert_eq!(dom.elements_by_tag("A").len(), 1);
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let (dom, item, _) = sample();
        assert_eq!(dom.text_content(&item), "Fern30");
    }

    #[test]
    fn test_mutations() {
        let (mut dom, item, _) = sample();
        assert_eq!(dom.display(&item), None);
        dom.set_display(&item, Display::None);
        assert_eq!(dom.display(&item), Some(Display::None));
        dom.set_cursor(&item, "default");
        assert_eq!(dom.cursor(item), Some("default"));
    }

    #[test]
    fn test_value_only_for_controls() {
        let mut dom = MemoryDom::new();
        let body = dom.root();
        let input = dom.append(body, NodeSpec::new("input").id("q"));
        let div = dom.append(body, NodeSpec::new("div").value("x"));
        assert_eq!(dom.value(&input), Some(String::new()));
        dom.set_value(input, "abc");
        assert_eq!(dom.value(&input), Some("abc".to_string()));
        assert_eq!(dom.value(&div), None);
    }

    #[test]
    fn test_canvas_detection() {
        let mut dom = MemoryDom::new();
        let body = dom.root();
        dom.append(body, NodeSpec::new("canvas").id("growth_chart"));
        dom.append(body, NodeSpec::new("div").id("health_chart"));
        assert!(dom.has_canvas("growth_chart"));
        assert!(!dom.has_canvas("health_chart"));
        assert!(!dom.has_canvas("missing"));
    }
}
