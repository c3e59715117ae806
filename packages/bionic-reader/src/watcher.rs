use bionic_dom::{BaseDocument, MutationRecord, ObserveOptions, ObserverId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatcherState {
    #[default]
    Stopped,
    Running { observer: ObserverId, root: usize },
}

/// Owns the single child-list observer the reader keeps on the page.
#[derive(Debug, Default)]
pub struct MutationWatcher {
    state: WatcherState,
}

impl MutationWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, WatcherState::Running { .. })
    }

    pub fn observer(&self) -> Option<ObserverId> {
        match self.state {
            WatcherState::Running { observer, .. } => Some(observer),
            WatcherState::Stopped => None,
        }
    }

    /// The node being watched, while running
    pub fn root(&self) -> Option<usize> {
        match self.state {
            WatcherState::Running { root, .. } => Some(root),
            WatcherState::Stopped => None,
        }
    }

    /// Observe child-list changes anywhere under `root`. Does nothing if already running.
    pub fn start(&mut self, doc: &mut BaseDocument, root: usize) -> ObserverId {
        if let WatcherState::Running { observer, .. } = self.state {
            return observer;
        }
        let observer = doc.observe(root, ObserveOptions::child_list_subtree());
        self.state = WatcherState::Running { observer, root };
        observer
    }

    /// Disconnect, returning the root that was being watched
    pub fn stop(&mut self, doc: &mut BaseDocument) -> Option<usize> {
        match std::mem::take(&mut self.state) {
            WatcherState::Running { observer, root } => {
                doc.disconnect(observer);
                Some(root)
            }
            WatcherState::Stopped => None,
        }
    }

    /// Records queued since the last batch; empty while stopped
    pub fn take_batch(&self, doc: &mut BaseDocument) -> Vec<MutationRecord> {
        self.observer()
            .map(|observer| doc.take_records(observer))
            .unwrap_or_default()
    }

    pub fn has_pending(&self, doc: &BaseDocument) -> bool {
        self.observer()
            .is_some_and(|observer| doc.has_pending_records(observer))
    }

    /// Run `mutate` with the observer disconnected, then observe the same root again.
    ///
    /// Changes made inside the bracket are never reported back to this watcher.
    pub fn suspended<R>(
        &mut self,
        doc: &mut BaseDocument,
        mutate: impl FnOnce(&mut BaseDocument) -> R,
    ) -> R {
        let root = self.stop(doc);
        let result = mutate(doc);
        if let Some(root) = root {
            self.start(doc, root);
        }
        result
    }
}
