// SPDX-License-Identifier: PMPL-1.0-or-later

//! Arena-backed document used by tests and the `pangaleo render` command.
//!
//! Nodes are stored in insertion order, which is also document order: a
//! parent always precedes its children. The whole document round-trips
//! through JSON so page snapshots can be rendered offline.

use super::Document;
use crate::error::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Index of a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Node {
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    classes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
    /// Live value of a form field, as typed by the visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(default)]
    nodes: Vec<Node>,
}

/// Fluent constructor returned by [`MemoryDocument::create`].
pub struct ElementBuilder<'a> {
    doc: &'a mut MemoryDocument,
    node: Node,
}

impl ElementBuilder<'_> {
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.node.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.node.classes.insert(class.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.node.text = text.to_string();
        self
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.node.parent = Some(parent);
        self
    }

    /// Inserts the node. A parent that does not precede it is dropped, so
    /// the node becomes a root.
    pub fn finish(mut self) -> NodeId {
        let id = NodeId(self.doc.nodes.len());
        if let Some(parent) = self.node.parent.filter(|parent| *parent >= id) {
            warn!(
                node = id.0,
                parent = parent.0,
                tag = %self.node.tag,
                "ignoring parent that does not precede node"
            );
            self.node.parent = None;
        }
        self.doc.nodes.push(self.node);
        id
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new element; nothing is inserted until [`ElementBuilder::finish`].
    pub fn create(&mut self, tag: &str) -> ElementBuilder<'_> {
        ElementBuilder {
            doc: self,
            node: Node {
                tag: tag.to_string(),
                ..Node::default()
            },
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Direct children of `id`, in document order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.ids().filter(|&child| self.parent(child) == Some(id)).collect()
    }

    /// Simulates a visitor typing into a form field.
    pub fn type_into(&mut self, id: NodeId, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.input = Some(value.to_string());
        }
    }

    pub fn input_value(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|node| node.input.as_deref())
    }

    pub fn from_json(json: &str) -> SiteResult<Self> {
        let doc: MemoryDocument =
            serde_json::from_str(json).map_err(|e| SiteError::Document(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> SiteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SiteError::Document(e.to_string()))
    }

    fn validate(&self) -> SiteResult<()> {
        for (index, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                if parent.0 >= index {
                    return Err(SiteError::Document(format!(
                        "node {} ({}) names parent {} which does not precede it",
                        index, node.tag, parent.0
                    )));
                }
            }
        }
        Ok(())
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    fn is_descendant(&self, id: NodeId, root: NodeId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if current == root {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn has_attr(&self, id: NodeId, attr: &str) -> bool {
        self.nodes
            .get(id.0)
            .is_some_and(|node| node.attributes.contains_key(attr))
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn set_language(&mut self, code: &str) {
        self.lang = Some(code.to_string());
    }

    fn language(&self) -> Option<String> {
        self.lang.clone()
    }

    fn query_all(&self, attr: &str) -> Vec<NodeId> {
        self.ids().filter(|&id| self.has_attr(id, attr)).collect()
    }

    fn query_within(&self, root: &NodeId, attr: &str) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| self.has_attr(id, attr) && self.is_descendant(id, *root))
            .collect()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(element.0)
            .and_then(|node| node.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, element: &NodeId) -> String {
        self.nodes
            .get(element.0)
            .map(|node| node.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.text = text.to_string();
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes
            .get(element.0)
            .is_some_and(|node| node.classes.contains(class))
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.classes.remove(class);
        }
    }

    fn append_element(&mut self, parent: &NodeId, tag: &str) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        Some(self.create(tag).child_of(*parent).finish())
    }

    fn reset_form(&mut self, form: &NodeId) {
        let fields: Vec<NodeId> = self
            .ids()
            .filter(|&id| self.is_descendant(id, *form))
            .collect();
        for id in fields {
            self.nodes[id.0].input = None;
        }
    }
}
