use std::collections::HashSet;

use bionic_dom::{BaseDocument, MutationRecord, ObserverId};

use crate::render::{RestoreSummary, SubstitutionRecord, WordRenderer, restore};
use crate::{AncestorFilter, MutationWatcher, ReaderConfig, TreeWalker, WordStyler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    Enabled,
    Disabled,
}

/// The toggle controller: owns the enabled flag, the substitution records and the watcher
/// for one document.
#[derive(Debug)]
pub struct Reader {
    filter: AncestorFilter,
    renderer: WordRenderer,
    watcher: MutationWatcher,
    enabled: bool,
    records: Vec<SubstitutionRecord>,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

impl Reader {
    pub fn new(config: ReaderConfig) -> Self {
        let styler = WordStyler::new(config.strong_weight, config.regular_weight);
        Self {
            filter: AncestorFilter::new(&config),
            renderer: WordRenderer::new(styler, config.marker_class),
            watcher: MutationWatcher::new(),
            enabled: false,
            records: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> ReaderState {
        if self.enabled {
            ReaderState::Enabled
        } else {
            ReaderState::Disabled
        }
    }

    /// Substitutions made since the reader was last enabled, oldest first
    pub fn records(&self) -> &[SubstitutionRecord] {
        &self.records
    }

    pub fn watcher(&self) -> &MutationWatcher {
        &self.watcher
    }

    /// The live observer, while enabled
    pub fn observer(&self) -> Option<ObserverId> {
        self.watcher.observer()
    }

    pub fn filter(&self) -> &AncestorFilter {
        &self.filter
    }

    /// Flip between enabled and disabled
    pub fn toggle(&mut self, doc: &mut BaseDocument) -> ReaderState {
        if self.enabled {
            self.disable(doc);
        } else {
            self.enable(doc);
        }
        self.state()
    }

    /// Render the whole body, then start watching it. Returns the number of text nodes
    /// rendered; zero if already enabled.
    pub fn enable(&mut self, doc: &mut BaseDocument) -> usize {
        if self.enabled {
            return 0;
        }
        self.enabled = true;

        let root = match doc.body_id() {
            Some(body) => body,
            None => {
                tracing::warn!("document has no <body>, rendering from the document root");
                0
            }
        };

        let rendered = self.render_subtree(doc, root);
        self.watcher.start(doc, root);
        tracing::info!(rendered, "reader enabled");
        rendered
    }

    /// Stop watching and put every original text node back
    pub fn disable(&mut self, doc: &mut BaseDocument) -> RestoreSummary {
        if !self.enabled {
            return RestoreSummary::default();
        }
        self.enabled = false;

        self.watcher.stop(doc);
        let summary = restore(doc, self.records.drain(..));
        tracing::info!(
            restored = summary.restored,
            skipped = summary.skipped,
            "reader disabled"
        );
        summary
    }

    /// Render every eligible text node under `root`, recording each swap
    pub fn render_subtree(&mut self, doc: &mut BaseDocument, root: usize) -> usize {
        let targets = TreeWalker::new(&self.filter).collect(doc, root);
        self.render_all(doc, targets)
    }

    /// Handle one delivered batch of mutation records.
    ///
    /// Every added text node and every text node inside an added element is rendered if the
    /// filter allows it. The whole batch is rendered inside a single disconnect/reconnect of
    /// the watcher, so the containers inserted here are never delivered back.
    pub fn handle_mutations(&mut self, doc: &mut BaseDocument, batch: Vec<MutationRecord>) -> usize {
        if !self.enabled || batch.is_empty() {
            return 0;
        }

        let Some(root) = self.watcher.root() else {
            return 0;
        };
        let walker = TreeWalker::new(&self.filter);
        let mut targets = Vec::new();
        for record in &batch {
            for &added in &record.added_nodes {
                // Nodes removed again before delivery are no longer ours to render
                if doc.contains(root, added) {
                    walker.collect_into(doc, added, &mut targets);
                }
            }
        }

        // A node can be reported by several records in one batch
        let mut seen = HashSet::with_capacity(targets.len());
        targets.retain(|id| seen.insert(*id));

        tracing::debug!(
            records = batch.len(),
            candidates = targets.len(),
            "mutation batch"
        );
        if targets.is_empty() {
            return 0;
        }

        let Self {
            watcher,
            renderer,
            records,
            ..
        } = self;
        watcher.suspended(doc, |doc| {
            let before = records.len();
            records.extend(targets.into_iter().filter_map(|id| renderer.render(doc, id)));
            records.len() - before
        })
    }

    /// Take whatever the watcher has queued and handle it
    pub fn process_pending(&mut self, doc: &mut BaseDocument) -> usize {
        let batch = self.watcher.take_batch(doc);
        self.handle_mutations(doc, batch)
    }

    fn render_all(&mut self, doc: &mut BaseDocument, targets: Vec<usize>) -> usize {
        let before = self.records.len();
        for id in targets {
            if let Some(record) = self.renderer.render(doc, id) {
                self.records.push(record);
            }
        }
        self.records.len() - before
    }
}
