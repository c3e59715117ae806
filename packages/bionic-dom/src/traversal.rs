use crate::BaseDocument;

#[derive(Clone)]
/// Pre-order depth-first iterator over a subtree, yielding node ids
pub struct TreeTraverser<'a> {
    doc: &'a BaseDocument,
    stack: Vec<usize>,
}

impl<'a> TreeTraverser<'a> {
    /// Creates a new tree traverser for the given document which starts at the root node.
    pub fn new(doc: &'a BaseDocument) -> Self {
        Self::new_with_root(doc, 0)
    }

    /// Creates a new tree traverser for the given document which starts at the specified node.
    pub fn new_with_root(doc: &'a BaseDocument, root: usize) -> Self {
        let mut stack = Vec::with_capacity(32);
        if doc.get_node(root).is_some() {
            stack.push(root);
        }
        TreeTraverser { doc, stack }
    }
}

impl Iterator for TreeTraverser<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(node) = self.doc.get_node(id) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(id)
    }
}

#[derive(Clone)]
/// An iterator over a node's ancestors, nearest first, not including the node itself
pub struct AncestorTraverser<'a> {
    doc: &'a BaseDocument,
    current: usize,
}

impl<'a> AncestorTraverser<'a> {
    pub fn new(doc: &'a BaseDocument, node_id: usize) -> Self {
        AncestorTraverser {
            doc,
            current: node_id,
        }
    }
}

impl Iterator for AncestorTraverser<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current_node = self.doc.get_node(self.current)?;
        self.current = current_node.parent?;
        Some(self.current)
    }
}
