use markup5ever::{LocalName, local_name};
use slab::Slab;

use crate::node::{ElementData, Node, NodeData, TextNodeData};
use crate::observer::{MutationObservers, MutationRecord, ObserveOptions, ObserverId};
use crate::traversal::{AncestorTraverser, TreeTraverser};
use crate::DocumentMutator;

pub struct BaseDocument {
    /// A slab-backed tree of nodes
    ///
    /// Node 0 is always the `Document` node. Detached nodes keep their slot until they are
    /// explicitly dropped with [`BaseDocument::drop_node`], so a node id stays valid for as
    /// long as anyone may still hold it.
    pub nodes: Box<Slab<Node>>,

    /// Registered child-list observers and their undelivered records
    pub(crate) observers: MutationObservers,
}

impl Default for BaseDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseDocument {
    /// Create a new (empty) [`BaseDocument`] holding only the `Document` node
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Box::new(Slab::new()),
            observers: MutationObservers::default(),
        };

        // Initialise document with root Document node
        doc.create_node(NodeData::Document);
        doc
    }

    pub fn tree(&self) -> &Slab<Node> {
        &self.nodes
    }

    pub fn get_node(&self, node_id: usize) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_node_mut(&mut self, node_id: usize) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn mutate<'doc>(&'doc mut self) -> DocumentMutator<'doc> {
        DocumentMutator::new(self)
    }

    pub fn create_node(&mut self, node_data: NodeData) -> usize {
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, node_data));
        id
    }

    pub fn create_text_node(&mut self, text: &str) -> usize {
        let data = NodeData::Text(TextNodeData::new(text.to_string()));
        self.create_node(data)
    }

    pub fn create_element(&mut self, data: ElementData) -> usize {
        self.create_node(NodeData::Element(data))
    }

    pub fn parent_id(&self, node_id: usize) -> Option<usize> {
        self.nodes.get(node_id)?.parent
    }

    /// Whether `node_id` is `ancestor_id` or one of its descendants (DOM `Node.contains`)
    pub fn contains(&self, ancestor_id: usize, node_id: usize) -> bool {
        if !self.nodes.contains(ancestor_id) || !self.nodes.contains(node_id) {
            return false;
        }
        node_id == ancestor_id || self.ancestors(node_id).any(|id| id == ancestor_id)
    }

    /// Whether the node is reachable from the `Document` node
    pub fn is_connected(&self, node_id: usize) -> bool {
        self.contains(0, node_id)
    }

    pub fn ancestors(&self, node_id: usize) -> AncestorTraverser<'_> {
        AncestorTraverser::new(self, node_id)
    }

    pub fn descendants(&self, node_id: usize) -> TreeTraverser<'_> {
        TreeTraverser::new_with_root(self, node_id)
    }

    /// First element with the given local name, in tree order
    pub fn find_element(&self, local: &LocalName) -> Option<usize> {
        TreeTraverser::new(self).find(|id| {
            self.nodes[*id]
                .element_data()
                .is_some_and(|el| el.name.local == *local)
        })
    }

    /// The `<body>` element, if the document has one
    pub fn body_id(&self) -> Option<usize> {
        self.find_element(&local_name!("body"))
    }

    /// Concatenated text of every text node under `node_id`
    pub fn text_content(&self, node_id: usize) -> String {
        let mut out = String::new();
        for id in self.descendants(node_id) {
            if let Some(text) = self.nodes[id].text_data() {
                out.push_str(&text.content);
            }
        }
        out
    }

    /// Detach `node_id` and free it together with its whole subtree.
    ///
    /// Returns the number of slots released.
    pub fn drop_node(&mut self, node_id: usize) -> usize {
        if !self.nodes.contains(node_id) {
            return 0;
        }
        // Detaching may fail only for unknown ids, which we ruled out above.
        let _ = self.mutate().remove_node(node_id);

        let mut released = 0;
        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.try_remove(id) {
                stack.extend(node.children);
                released += 1;
            }
        }
        released
    }

    /// Start observing `target` and return the observer's handle
    pub fn observe(&mut self, target: usize, options: ObserveOptions) -> ObserverId {
        #[cfg(feature = "tracing")]
        tracing::trace!(target_node = target, ?options, "observer registered");
        self.observers.observe(target, options)
    }

    /// Stop an observer. Records it had not delivered yet are discarded.
    pub fn disconnect(&mut self, observer: ObserverId) -> bool {
        self.observers.disconnect(observer)
    }

    pub fn is_observing(&self, observer: ObserverId) -> bool {
        self.observers.is_observing(observer)
    }

    /// Take the records queued for `observer` since the last call
    pub fn take_records(&mut self, observer: ObserverId) -> Vec<MutationRecord> {
        self.observers.take_records(observer)
    }

    pub fn has_pending_records(&self, observer: ObserverId) -> bool {
        self.observers.has_pending(observer)
    }

    pub(crate) fn queue_mutation(&mut self, record: MutationRecord) {
        if self.observers.is_empty() {
            return;
        }
        let mut chain = vec![record.target];
        chain.extend(self.ancestors(record.target));
        let _queued = self.observers.queue(record, &chain);

        #[cfg(feature = "tracing")]
        if _queued > 0 {
            tracing::trace!(observers = _queued, "child-list mutation queued");
        }
    }
}
