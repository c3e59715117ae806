//! HTML parsing for bionic.
//!
//! Parses whole documents into a [`BaseDocument`] and implements `innerHTML`-style fragment
//! assignment on top of [html5ever](https://docs.rs/html5ever).

use std::ops::{Deref, DerefMut};

use bionic_dom::{BaseDocument, DomError, DomResult};

mod html_sink;

pub use html_sink::{DocumentHtmlParser, ParseOutcome};

/// A [`BaseDocument`] built from an HTML string
pub struct HtmlDocument {
    inner: BaseDocument,
}

impl Deref for HtmlDocument {
    type Target = BaseDocument;
    fn deref(&self) -> &BaseDocument {
        &self.inner
    }
}

impl DerefMut for HtmlDocument {
    fn deref_mut(&mut self) -> &mut BaseDocument {
        &mut self.inner
    }
}

impl From<HtmlDocument> for BaseDocument {
    fn from(doc: HtmlDocument) -> BaseDocument {
        doc.inner
    }
}

impl HtmlDocument {
    /// Parse HTML into an [`HtmlDocument`]
    pub fn from_html(html: &str) -> Self {
        let mut doc = BaseDocument::new();
        DocumentHtmlParser::parse_into_doc(&mut doc, html);
        HtmlDocument { inner: doc }
    }

    /// Convert the [`HtmlDocument`] into it's inner [`BaseDocument`]
    pub fn into_inner(self) -> BaseDocument {
        self.into()
    }
}

/// Replace the children of `node_id` with the nodes parsed from `html`.
///
/// The previous children are detached, not freed. Returns the ids of the new children.
pub fn set_inner_html(doc: &mut BaseDocument, node_id: usize, html: &str) -> DomResult<Vec<usize>> {
    if !doc.get_node(node_id).is_some_and(|node| node.is_element()) {
        return Err(match doc.get_node(node_id) {
            Some(_) => DomError::NotAnElement(node_id),
            None => DomError::NodeNotFound(node_id),
        });
    }

    let nodes = DocumentHtmlParser::parse_fragment(doc, html);
    let mut mutr = doc.mutate();
    mutr.remove_children(node_id)?;
    mutr.append_children(node_id, &nodes)?;
    Ok(nodes)
}
