// src/core/tree.rs
//! Lightweight in-memory element tree.
//!
//! For callers that already hold table data in some other shape (and for
//! tests) without going through HTML text. Nodes live in one arena; handles
//! are `(tree, index)` pairs.
//!
//! ```
//! use star_scrape::{Tree, extract_records};
//!
//! let mut t = Tree::new();
//! let tr = t.element(t.root(), "tr", &[]);
//! let td = t.element(tr, "td", &[("class", "bold")]);
//! t.text(td, " Algorithms ");
//!
//! let records = extract_records(&t);
//! assert_eq!(records[0].course, "Algorithms");
//! ```

use super::dom::{Document, Node};
use super::query::Query;

/// Index of a node inside its [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum Kind {
    Root,
    Element { tag: String, attrs: Vec<(String, String)> },
    Text(String),
}

#[derive(Debug)]
struct Slot {
    kind: Kind,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Debug)]
pub struct Tree {
    slots: Vec<Slot>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self { slots: vec![Slot { kind: Kind::Root, children: Vec::new(), parent: None }] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element under `parent`. Tag and attribute names are lowercased.
    pub fn element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), s!(*v)))
            .collect();
        self.push(parent, Kind::Element { tag: tag.to_ascii_lowercase(), attrs })
    }

    /// Append a text node under `parent`.
    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, Kind::Text(s!(text)))
    }

    /// Handle for an element id; `None` for the root or a text node.
    pub fn get(&self, id: NodeId) -> Option<TreeNode<'_>> {
        match self.slots.get(id.0)?.kind {
            Kind::Element { .. } => Some(TreeNode { tree: self, id }),
            _ => None,
        }
    }

    fn push(&mut self, parent: NodeId, kind: Kind) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { kind, children: Vec::new(), parent: Some(parent) });
        self.slots[parent.0].children.push(id);
        id
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(self.slots[id.0].kind, Kind::Element { .. })
    }

    fn matches(&self, id: NodeId, query: &Query) -> bool {
        match &self.slots[id.0].kind {
            Kind::Element { tag, attrs } => query.matches(tag, |name| {
                attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
            }),
            _ => false,
        }
    }

    /// Pre-order walk of the subtree below `id` (excluding `id`).
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.slots[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.slots[next.0].children.iter().rev().copied());
        }
        out
    }

    fn sibling_element(&self, id: NodeId, forward: bool) -> Option<NodeId> {
        let parent = self.slots[id.0].parent?;
        let siblings = &self.slots[parent.0].children;
        let pos = siblings.iter().position(|&s| s == id)?;

        if forward {
            siblings[pos + 1..].iter().copied().find(|&s| self.is_element(s))
        } else {
            siblings[..pos].iter().rev().copied().find(|&s| self.is_element(s))
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TreeNode<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> TreeNode<'a> {
    pub fn tag(&self) -> &'a str {
        match &self.tree.slots[self.id.0].kind {
            Kind::Element { tag, .. } => tag.as_str(),
            _ => "",
        }
    }

    fn wrap(&self, id: NodeId) -> Self {
        Self { tree: self.tree, id }
    }
}

impl Document for Tree {
    type Node<'a> = TreeNode<'a>;

    fn rows<'a>(&'a self, query: &Query) -> Vec<TreeNode<'a>> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.matches(id, query))
            .map(|id| TreeNode { tree: self, id })
            .collect()
    }
}

impl<'a> Node<'a> for TreeNode<'a> {
    fn find_first(&self, query: &Query) -> Option<Self> {
        self.tree
            .descendants(self.id)
            .into_iter()
            .find(|&id| self.tree.matches(id, query))
            .map(|id| self.wrap(id))
    }

    fn prev_element(&self) -> Option<Self> {
        self.tree.sibling_element(self.id, false).map(|id| self.wrap(id))
    }

    fn next_element(&self) -> Option<Self> {
        self.tree.sibling_element(self.id, true).map(|id| self.wrap(id))
    }

    fn element_children(&self) -> Vec<Self> {
        self.tree.slots[self.id.0]
            .children
            .iter()
            .copied()
            .filter(|&id| self.tree.is_element(id))
            .map(|id| self.wrap(id))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        match &self.tree.slots[self.id.0].kind {
            Kind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn text_content(&self) -> String {
        let mut out = s!();
        for id in self.tree.descendants(self.id) {
            if let Kind::Text(t) = &self.tree.slots[id.0].kind {
                out.push_str(t);
            }
        }
        out
    }
}
