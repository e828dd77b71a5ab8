//! Output tree abstraction.
//!
//! Page builders only talk to [`TreeBuilder`], so the same assembly code can
//! target any backend. [`Tree`] is the in-memory arena backend that the
//! serializers in `render` consume.

/// Create nodes, set attributes, append children.
pub trait TreeBuilder {
    type Handle: Copy;

    fn create_element(&mut self, tag: &'static str) -> Self::Handle;
    fn create_text(&mut self, text: &str) -> Self::Handle;
    /// Set or replace an attribute. Ignored on text nodes.
    fn set_attribute(&mut self, node: Self::Handle, name: &'static str, value: &str);
    fn remove_attribute(&mut self, node: Self::Handle, name: &'static str);
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Create an element and append it to `parent`.
    fn append_element(&mut self, parent: Self::Handle, tag: &'static str) -> Self::Handle {
        let element = self.create_element(tag);
        self.append_child(parent, element);
        element
    }

    fn append_text(&mut self, parent: Self::Handle, text: &str) {
        let node = self.create_text(text);
        self.append_child(parent, node);
    }

    /// Append `<a href=...>text</a>` to `parent`.
    fn append_link(&mut self, parent: Self::Handle, href: &str, text: &str) -> Self::Handle {
        let a = self.append_element(parent, "a");
        self.set_attribute(a, "href", href);
        self.append_text(a, text);
        a
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Element(Element),
    Text(String),
}

/// Arena-backed element tree with a single root element.
///
/// Two trees built by the same calls compare equal: ids are assigned in
/// creation order and nothing else is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn new(root_tag: &'static str) -> Self {
        Tree {
            nodes: vec![TreeNode::Element(Element {
                tag: root_tag,
                attributes: Vec::new(),
                children: Vec::new(),
            })],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The node behind `id`, or `None` for an id minted by another tree.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0)? {
            TreeNode::Element(e) => Some(e),
            TreeNode::Text(_) => None,
        }
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

/// Read-only queries used by the page tests.
#[cfg(test)]
impl Tree {
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.node(id)? {
            TreeNode::Element(e) => Some(e),
            TreeNode::Text(_) => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.element(id) {
            Some(e) => &e.children,
            None => &[],
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of `id` and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id) {
            Some(TreeNode::Text(t)) => out.push_str(t),
            Some(TreeNode::Element(e)) => {
                for &child in &e.children {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Depth-first, document-order search for the element with `id="..."`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.attribute(n, "id") == Some(id))
    }

    /// All elements with the given tag under the root, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(|e| e.tag == tag))
            .collect()
    }

    /// Element children only, skipping text nodes.
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.element(c).is_some())
            .collect()
    }

    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }
}

impl TreeBuilder for Tree {
    type Handle = NodeId;

    fn create_element(&mut self, tag: &'static str) -> NodeId {
        self.push(TreeNode::Element(Element {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }))
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(TreeNode::Text(text.to_string()))
    }

    fn set_attribute(&mut self, node: NodeId, name: &'static str, value: &str) {
        let Some(element) = self.element_mut(node) else {
            tracing::debug!(attribute = name, "attribute on non-element ignored");
            return;
        };
        match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element.attributes.push((name, value.to_string())),
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &'static str) {
        if let Some(element) = self.element_mut(node) {
            element.attributes.retain(|(n, _)| *n != name);
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if child.0 >= self.nodes.len() {
            tracing::debug!("append of unknown node ignored");
            return;
        }
        match self.element_mut(parent) {
            Some(element) => element.children.push(child),
            None => tracing::debug!("append to text node ignored"),
        }
    }
}
