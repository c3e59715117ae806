use bionic_dom::{BaseDocument, NodeData};

use crate::AncestorFilter;

/// Collects the text nodes under a root that the reader should render
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'a> {
    filter: &'a AncestorFilter,
}

impl<'a> TreeWalker<'a> {
    pub fn new(filter: &'a AncestorFilter) -> Self {
        Self { filter }
    }

    /// Eligible text nodes under (and including) `root`, in tree order
    pub fn collect(&self, doc: &BaseDocument, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_into(doc, root, &mut out);
        out
    }

    /// Like [`TreeWalker::collect`], appending to `out`
    pub fn collect_into(&self, doc: &BaseDocument, node_id: usize, out: &mut Vec<usize>) {
        let Some(node) = doc.get_node(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Text(text) => {
                if !text.has_visible_content() {
                    return;
                }
                // A rejected node only skips itself; its siblings are still visited
                if self.filter.is_eligible(doc, node_id) {
                    out.push(node_id);
                }
            }
            NodeData::Comment(_) => {}
            NodeData::Document | NodeData::DocumentFragment | NodeData::Element(_) => {
                for &child in &node.children {
                    self.collect_into(doc, child, out);
                }
            }
        }
    }
}
