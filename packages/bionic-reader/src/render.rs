use bionic_dom::{BaseDocument, DomResult, ElementData, local_name};

use crate::{Segment, WordStyler};

/// One text node swapped out for a rendered container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRecord {
    /// The parent both nodes were swapped under
    pub parent: usize,
    /// The original text node, now detached
    pub original: usize,
    /// The container that took its place
    pub rendered: usize,
}

/// What a [`restore`] pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub restored: usize,
    /// Records whose container had moved or disappeared
    pub skipped: usize,
}

/// Replaces text nodes with styled `<span>` containers
#[derive(Debug, Clone)]
pub struct WordRenderer {
    styler: WordStyler,
    marker_class: String,
}

impl WordRenderer {
    pub fn new(styler: WordStyler, marker_class: impl Into<String>) -> Self {
        Self {
            styler,
            marker_class: marker_class.into(),
        }
    }

    pub fn styler(&self) -> &WordStyler {
        &self.styler
    }

    /// Swap the text node for a rendered container.
    ///
    /// Returns `None` when there is nothing to render or the node is no longer where its
    /// parent link says it is. A record is only produced for a swap that happened.
    pub fn render(&self, doc: &mut BaseDocument, node_id: usize) -> Option<SubstitutionRecord> {
        let node = doc.get_node(node_id)?;
        let text = node.text_data()?;
        if !text.has_visible_content() {
            return None;
        }
        let parent = node.parent?;
        if !doc.contains(parent, node_id) {
            return None;
        }

        let content = text.content.clone();
        let segments = self.styler.segments(&content);
        let span = doc.create_element(ElementData::html(local_name!("span")));
        match self.swap_in(doc, parent, node_id, span, &segments) {
            Ok(()) => {
                tracing::trace!(node = node_id, container = span, "text node rendered");
                Some(SubstitutionRecord {
                    parent,
                    original: node_id,
                    rendered: span,
                })
            }
            Err(err) => {
                tracing::debug!(node = node_id, "skipping text node: {err}");
                doc.drop_node(span);
                None
            }
        }
    }

    fn swap_in(
        &self,
        doc: &mut BaseDocument,
        parent: usize,
        node_id: usize,
        span: usize,
        segments: &[Segment<'_>],
    ) -> DomResult<()> {
        doc.mutate().add_class(span, &self.marker_class)?;
        fill_container(doc, span, segments)?;
        doc.mutate().replace_child(parent, span, node_id)
    }
}

/// Build the segments as children of the detached `container`.
///
/// Adjacent plain segments share one text node, matching what parsing the equivalent markup
/// would produce.
fn fill_container(doc: &mut BaseDocument, container: usize, segments: &[Segment<'_>]) -> DomResult<()> {
    let mut plain = String::new();
    for segment in segments {
        let Some(weight) = segment.font_weight else {
            plain.push_str(segment.text);
            continue;
        };
        if !plain.is_empty() {
            let text = doc.create_text_node(&plain);
            doc.mutate().append_children(container, &[text])?;
            plain.clear();
        }
        let run = doc.create_element(ElementData::html(local_name!("span")));
        let mut mutr = doc.mutate();
        mutr.append_children(container, &[run])?;
        mutr.set_attribute(run, local_name!("style"), &format!("font-weight: {weight};"))?;
        let text = mutr.create_text_node(segment.text);
        mutr.append_children(run, &[text])?;
    }
    if !plain.is_empty() {
        let text = doc.create_text_node(&plain);
        doc.mutate().append_children(container, &[text])?;
    }
    Ok(())
}

/// Put every original text node back in place of its container, in order.
///
/// A record is skipped when its parent no longer holds the container directly. Restored
/// containers are freed.
pub fn restore(
    doc: &mut BaseDocument,
    records: impl IntoIterator<Item = SubstitutionRecord>,
) -> RestoreSummary {
    let mut summary = RestoreSummary::default();
    for record in records {
        if !doc.contains(record.parent, record.rendered) {
            summary.skipped += 1;
            continue;
        }
        match doc
            .mutate()
            .replace_child(record.parent, record.original, record.rendered)
        {
            Ok(()) => {
                doc.drop_node(record.rendered);
                summary.restored += 1;
            }
            Err(err) => {
                tracing::debug!(container = record.rendered, "leaving container in place: {err}");
                summary.skipped += 1;
            }
        }
    }
    summary
}
