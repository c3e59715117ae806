use std::collections::HashSet;

use bionic_dom::{BaseDocument, ElementData};

use crate::ReaderConfig;

/// Decides whether a text node may be reshaped, based on the elements enclosing it
#[derive(Debug, Clone)]
pub struct AncestorFilter {
    skip_tags: HashSet<String>,
    marker_class: String,
}

impl AncestorFilter {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            skip_tags: config.skip_tags.clone(),
            marker_class: config.marker_class.clone(),
        }
    }

    /// Whether text directly inside `element` must be left alone
    pub fn rejects(&self, element: &ElementData) -> bool {
        let local = element.local_name();
        let skipped = if local.bytes().any(|b| b.is_ascii_uppercase()) {
            self.skip_tags.contains(&local.to_ascii_lowercase())
        } else {
            self.skip_tags.contains(local)
        };
        skipped || element.has_class(&self.marker_class)
    }

    /// Walk the ancestors of `node_id` up to the root. The node is eligible unless one of
    /// them is a skipped tag or an already rendered container.
    pub fn is_eligible(&self, doc: &BaseDocument, node_id: usize) -> bool {
        !doc.ancestors(node_id).any(|id| {
            doc.get_node(id)
                .and_then(|node| node.element_data())
                .is_some_and(|element| self.rejects(element))
        })
    }
}
