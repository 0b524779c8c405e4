//! DOM tree implementation for plume.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Ownership
//! flows downward through `children`; the `parent` index is a plain back-link
//! that is only ever followed upward.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// [§ 4.9.2 Interface NamedNodeMap](https://dom.spec.whatwg.org/#interface-namednodemap)
///
/// "An element has an associated attribute list."
///
/// Attribute names are unique and iteration follows insertion order, so a
/// serialized element keeps the attribute order it was parsed with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributesMap {
    entries: Vec<(String, String)>,
}

impl AttributesMap {
    /// Create an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get the value of an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// [§ 4.9 set an attribute value](https://dom.spec.whatwg.org/#concept-element-attributes-set-value)
    ///
    /// "If attribute is null, create an attribute ... and then append this
    /// attribute to element. ... Change attribute to value."
    ///
    /// Returns the previous value when the attribute already existed; an
    /// existing attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// [§ 4.9 remove an attribute by name](https://dom.spec.whatwg.org/#concept-element-attributes-remove-by-name)
    ///
    /// Returns the removed value, if any.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the element carries no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributesMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            let _ = map.insert(key, value);
        }
        map
    }
}

impl Serialize for AttributesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
/// Identity is per tree: ids are never meaningful across two trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.6 Interface DocumentType](https://dom.spec.whatwg.org/#interface-documenttype)
    /// Stores the raw declaration text between `<!` and `>`.
    Doctype(String),
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: We only store `tag_name` (local name) and attrs. Namespaces and
/// custom element state are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Returns the class names from the class attribute, in attribute order.
    ///
    /// Per [§ 2.3.7 Space-separated tokens](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#space-separated-tokens):
    /// tokens are split on whitespace and empty tokens are discarded.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs.get("class").unwrap_or_default().split_whitespace()
    }

    /// Whether the class attribute contains `class_name` as a whole token.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|c| c == class_name)
    }

    /// The first token of the class attribute, if any.
    #[must_use]
    pub fn first_class(&self) -> Option<&str> {
        self.classes().next()
    }

    /// The raw `style` attribute value if present.
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.attrs.get("style")
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree. A tree is a finite hierarchical
/// tree structure."
///
/// Removed nodes stay allocated but detached; they are unreachable from
/// the root and are skipped by every traversal.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, detached ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Allocate a detached element node.
    pub fn create_element(&mut self, element: ElementData) -> NodeId {
        self.alloc(NodeType::Element(element))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Text(data.into()))
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// "Remove node from its parent's children." The node keeps its own
    /// subtree but is no longer reachable from the root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.nodes[parent.0].children;
        if let Some(index) = children.iter().position(|&c| c == child) {
            let _ = children.remove(index);
            self.nodes[child.0].parent = None;
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 4.2 Tree order](https://dom.spec.whatwg.org/#concept-tree-order)
    ///
    /// "Preorder, depth-first traversal of a tree."
    ///
    /// Iterates over `from` and all of its attached descendants.
    #[must_use]
    pub fn descendants(&self, from: NodeId) -> TreeOrderIterator<'_> {
        TreeOrderIterator {
            tree: self,
            stack: vec![from],
        }
    }

    /// Iterate over every attached node in tree order.
    #[must_use]
    pub fn iter_all(&self) -> TreeOrderIterator<'_> {
        self.descendants(NodeId::ROOT)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Whether the node is an element with the given (lower-case) tag name.
    #[must_use]
    pub fn is_element_named(&self, id: NodeId, tag: &str) -> bool {
        self.as_element(id).is_some_and(|e| e.tag_name == tag)
    }

    /// First element in tree order with the given tag name.
    #[must_use]
    pub fn find_element(&self, tag: &str) -> Option<NodeId> {
        self.iter_all().find(|&id| self.is_element_named(id, tag))
    }

    /// All elements in tree order with the given tag name.
    #[must_use]
    pub fn find_elements(&self, tag: &str) -> Vec<NodeId> {
        self.iter_all()
            .filter(|&id| self.is_element_named(id, tag))
            .collect()
    }

    /// Concatenated data of the node's direct text children.
    #[must_use]
    pub fn child_text(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .filter_map(|&c| self.as_text(c))
            .collect()
    }

    /// A serializable view of the subtree rooted at `id`.
    #[must_use]
    pub const fn subtree(&self, id: NodeId) -> SubtreeView<'_> {
        SubtreeView { tree: self, id }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order (first-child-first) iterator over a subtree.
pub struct TreeOrderIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for TreeOrderIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

/// A subtree that serializes as nested `{ "node": ..., "children": [...] }`
/// objects, so the arena layout does not leak into the output.
pub struct SubtreeView<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl Serialize for SubtreeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(node) = self.tree.get(self.id) else {
            return serializer.serialize_none();
        };
        let children: Vec<SubtreeView<'_>> = node
            .children
            .iter()
            .map(|&id| self.tree.subtree(id))
            .collect();

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("node", &node.node_type)?;
        map.serialize_entry("children", &children)?;
        map.end()
    }
}
