//! Child-list mutation observers.
//!
//! Observers are registered against a target node. Every child-list change made through
//! [`DocumentMutator`](crate::DocumentMutator) is queued as a [`MutationRecord`] on each
//! registration interested in the changed parent. Records stay queued until the embedder
//! takes them with [`BaseDocument::take_records`](crate::BaseDocument::take_records), which
//! plays the role of the browser's batched observer callback.

use slab::Slab;

/// Handle to a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// Which changes an observer wants to hear about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObserveOptions {
    /// Report children being added to or removed from the target
    pub child_list: bool,
    /// Extend observation to every descendant of the target
    pub subtree: bool,
}

impl ObserveOptions {
    /// Child-list changes anywhere under the target
    pub const fn child_list_subtree() -> Self {
        Self {
            child_list: true,
            subtree: true,
        }
    }
}

/// One child-list change on `target`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationRecord {
    /// The node whose children changed
    pub target: usize,
    pub added_nodes: Vec<usize>,
    pub removed_nodes: Vec<usize>,
    pub previous_sibling: Option<usize>,
    pub next_sibling: Option<usize>,
}

#[derive(Debug)]
struct Registration {
    target: usize,
    options: ObserveOptions,
    pending: Vec<MutationRecord>,
}

#[derive(Debug, Default)]
pub(crate) struct MutationObservers {
    registrations: Slab<Registration>,
}

impl MutationObservers {
    pub(crate) fn observe(&mut self, target: usize, options: ObserveOptions) -> ObserverId {
        ObserverId(self.registrations.insert(Registration {
            target,
            options,
            pending: Vec::new(),
        }))
    }

    /// Drop the registration along with any records it had not delivered yet
    pub(crate) fn disconnect(&mut self, id: ObserverId) -> bool {
        self.registrations.try_remove(id.0).is_some()
    }

    pub(crate) fn is_observing(&self, id: ObserverId) -> bool {
        self.registrations.contains(id.0)
    }

    pub(crate) fn take_records(&mut self, id: ObserverId) -> Vec<MutationRecord> {
        self.registrations
            .get_mut(id.0)
            .map(|reg| std::mem::take(&mut reg.pending))
            .unwrap_or_default()
    }

    pub(crate) fn has_pending(&self, id: ObserverId) -> bool {
        self.registrations
            .get(id.0)
            .is_some_and(|reg| !reg.pending.is_empty())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Queue `record` on every registration that observes `record.target`.
    ///
    /// `ancestors` is the inclusive ancestor chain of the target, nearest first.
    pub(crate) fn queue(&mut self, record: MutationRecord, ancestors: &[usize]) -> usize {
        let mut queued = 0;
        for (_, reg) in self.registrations.iter_mut() {
            if !reg.options.child_list {
                continue;
            }
            let interested = reg.target == record.target
                || (reg.options.subtree && ancestors.contains(&reg.target));
            if interested {
                reg.pending.push(record.clone());
                queued += 1;
            }
        }
        queued
    }
}
