use markup5ever::{LocalName, QualName};

use crate::node::{Attribute, ElementData, NodeData};
use crate::observer::MutationRecord;
use crate::{BaseDocument, DomError, DomResult};

/// Tree mutations on a [`BaseDocument`].
///
/// Every change to a node's child list goes through here so that registered observers
/// see it as a [`MutationRecord`].
pub struct DocumentMutator<'doc> {
    /// Document is public as an escape hatch, but users of this API should ideally avoid using it
    /// and prefer exposing additional functionality in DocumentMutator.
    pub doc: &'doc mut BaseDocument,
}

impl<'doc> DocumentMutator<'doc> {
    pub fn new(doc: &'doc mut BaseDocument) -> Self {
        Self { doc }
    }

    // Query methods

    pub fn node_has_parent(&self, node_id: usize) -> bool {
        self.doc
            .get_node(node_id)
            .is_some_and(|node| node.parent.is_some())
    }

    pub fn previous_sibling_id(&self, node_id: usize) -> Option<usize> {
        let parent = self.doc.get_node(self.doc.parent_id(node_id)?)?;
        let idx = parent.index_of_child(node_id)?;
        idx.checked_sub(1).map(|prev| parent.children[prev])
    }

    pub fn last_child_id(&self, node_id: usize) -> Option<usize> {
        self.doc.get_node(node_id)?.children.last().copied()
    }

    pub fn element_name(&self, node_id: usize) -> Option<&QualName> {
        self.doc
            .get_node(node_id)?
            .element_data()
            .map(|el| &el.name)
    }

    // Node creation methods

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> usize {
        self.doc
            .create_node(NodeData::Element(ElementData::new(name, attrs)))
    }

    pub fn create_text_node(&mut self, text: &str) -> usize {
        self.doc.create_text_node(text)
    }

    pub fn create_comment_node(&mut self, text: &str) -> usize {
        self.doc.create_node(NodeData::Comment(text.to_string()))
    }

    pub fn create_fragment(&mut self) -> usize {
        self.doc.create_node(NodeData::DocumentFragment)
    }

    // Attribute methods

    pub fn set_attribute(&mut self, node_id: usize, local: LocalName, value: &str) -> DomResult<()> {
        self.element_mut(node_id)?.set_attr(local, value);
        Ok(())
    }

    pub fn add_class(&mut self, node_id: usize, class: &str) -> DomResult<bool> {
        Ok(self.element_mut(node_id)?.add_class(class))
    }

    pub fn add_attrs_if_missing(&mut self, node_id: usize, attrs: Vec<Attribute>) -> DomResult<()> {
        let element = self.element_mut(node_id)?;
        for attr in attrs {
            if !element.attrs.iter().any(|existing| existing.name == attr.name) {
                element.attrs.push(attr);
            }
        }
        Ok(())
    }

    pub fn append_text_to_node(&mut self, node_id: usize, text: &str) -> DomResult<()> {
        match self.doc.get_node_mut(node_id).map(|node| &mut node.data) {
            Some(NodeData::Text(data)) => {
                data.content.push_str(text);
                Ok(())
            }
            Some(_) => Err(DomError::NotAText(node_id)),
            None => Err(DomError::NodeNotFound(node_id)),
        }
    }

    // Tree methods

    pub fn append_children(&mut self, parent_id: usize, child_ids: &[usize]) -> DomResult<()> {
        let idx = self.node(parent_id)?.children.len();
        self.insert_at(parent_id, idx, child_ids)
    }

    pub fn insert_nodes_before(&mut self, anchor_id: usize, new_node_ids: &[usize]) -> DomResult<()> {
        let parent_id = self
            .doc
            .parent_id(anchor_id)
            .ok_or(DomError::NodeNotFound(anchor_id))?;
        // Detaching one of the new nodes can shift the anchor, so resolve its index per node.
        for &id in new_node_ids {
            self.detach(id)?;
            let idx = self
                .node(parent_id)?
                .index_of_child(anchor_id)
                .ok_or(DomError::NotAChild {
                    parent: parent_id,
                    child: anchor_id,
                })?;
            self.insert_at(parent_id, idx, &[id])?;
        }
        Ok(())
    }

    /// Detach a node from its parent. Nodes without a parent are left alone.
    pub fn remove_node(&mut self, node_id: usize) -> DomResult<()> {
        self.detach(node_id).map(|_| ())
    }

    /// Replace `old_id` (a child of `parent_id`) with `new_id` (DOM `replaceChild`).
    pub fn replace_child(&mut self, parent_id: usize, new_id: usize, old_id: usize) -> DomResult<()> {
        self.node(new_id)?;
        if self.node(parent_id)?.index_of_child(old_id).is_none() {
            return Err(DomError::NotAChild {
                parent: parent_id,
                child: old_id,
            });
        }
        if new_id == old_id {
            return Ok(());
        }
        self.ensure_not_ancestor(parent_id, new_id)?;

        self.detach(new_id)?;
        let parent = self.node_mut(parent_id)?;
        let Some(idx) = parent.index_of_child(old_id) else {
            return Err(DomError::NotAChild {
                parent: parent_id,
                child: old_id,
            });
        };
        parent.children[idx] = new_id;
        let previous_sibling = idx.checked_sub(1).map(|prev| parent.children[prev]);
        let next_sibling = parent.children.get(idx + 1).copied();

        self.node_mut(old_id)?.parent = None;
        self.node_mut(new_id)?.parent = Some(parent_id);

        self.doc.queue_mutation(MutationRecord {
            target: parent_id,
            added_nodes: vec![new_id],
            removed_nodes: vec![old_id],
            previous_sibling,
            next_sibling,
        });
        Ok(())
    }

    /// Move every child of `old_parent_id` to the end of `new_parent_id`
    pub fn reparent_children(&mut self, old_parent_id: usize, new_parent_id: usize) -> DomResult<()> {
        let children = self.node(old_parent_id)?.children.clone();
        self.append_children(new_parent_id, &children)
    }

    /// Remove every child of `node_id`, returning them (detached)
    pub fn remove_children(&mut self, node_id: usize) -> DomResult<Vec<usize>> {
        let children = std::mem::take(&mut self.node_mut(node_id)?.children);
        if children.is_empty() {
            return Ok(children);
        }
        for &child in &children {
            self.node_mut(child)?.parent = None;
        }
        self.doc.queue_mutation(MutationRecord {
            target: node_id,
            added_nodes: Vec::new(),
            removed_nodes: children.clone(),
            previous_sibling: None,
            next_sibling: None,
        });
        Ok(children)
    }

    fn insert_at(&mut self, parent_id: usize, idx: usize, child_ids: &[usize]) -> DomResult<()> {
        if child_ids.is_empty() {
            return Ok(());
        }
        self.node(parent_id)?;
        for &id in child_ids {
            self.node(id)?;
            self.ensure_not_ancestor(parent_id, id)?;
        }

        let mut idx = idx;
        for &id in child_ids {
            if let Some((old_parent, old_idx)) = self.detach(id)? {
                if old_parent == parent_id && old_idx < idx {
                    idx -= 1;
                }
            }
        }

        let parent = self.node_mut(parent_id)?;
        let idx = idx.min(parent.children.len());
        let previous_sibling = idx.checked_sub(1).map(|prev| parent.children[prev]);
        let next_sibling = parent.children.get(idx).copied();
        for (offset, &id) in child_ids.iter().enumerate() {
            parent.children.insert(idx + offset, id);
        }

        for &id in child_ids {
            self.node_mut(id)?.parent = Some(parent_id);
        }

        self.doc.queue_mutation(MutationRecord {
            target: parent_id,
            added_nodes: child_ids.to_vec(),
            removed_nodes: Vec::new(),
            previous_sibling,
            next_sibling,
        });
        Ok(())
    }

    /// Unlink `node_id` from its parent, returning where it used to be
    fn detach(&mut self, node_id: usize) -> DomResult<Option<(usize, usize)>> {
        let Some(parent_id) = self.node(node_id)?.parent else {
            return Ok(None);
        };
        let parent = self.node_mut(parent_id)?;
        let Some(idx) = parent.index_of_child(node_id) else {
            return Err(DomError::NotAChild {
                parent: parent_id,
                child: node_id,
            });
        };
        parent.children.remove(idx);
        let previous_sibling = idx.checked_sub(1).map(|prev| parent.children[prev]);
        let next_sibling = parent.children.get(idx).copied();
        self.node_mut(node_id)?.parent = None;

        self.doc.queue_mutation(MutationRecord {
            target: parent_id,
            added_nodes: Vec::new(),
            removed_nodes: vec![node_id],
            previous_sibling,
            next_sibling,
        });
        Ok(Some((parent_id, idx)))
    }

    fn ensure_not_ancestor(&self, parent_id: usize, node_id: usize) -> DomResult<()> {
        if self.doc.contains(node_id, parent_id) {
            return Err(DomError::HierarchyRequest {
                parent: parent_id,
                node: node_id,
            });
        }
        Ok(())
    }

    fn node(&self, node_id: usize) -> DomResult<&crate::Node> {
        self.doc
            .get_node(node_id)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    fn node_mut(&mut self, node_id: usize) -> DomResult<&mut crate::Node> {
        self.doc
            .get_node_mut(node_id)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    fn element_mut(&mut self, node_id: usize) -> DomResult<&mut ElementData> {
        self.node_mut(node_id)?
            .element_data_mut()
            .ok_or(DomError::NotAnElement(node_id))
    }
}
