//! An implementation for Html5ever's sink trait, allowing us to parse HTML into a DOM.

use std::borrow::Cow;
use std::cell::{Cell, Ref, RefCell, RefMut};

use bionic_dom::{BaseDocument, DocumentMutator, DomResult};
use html5ever::ParseOpts;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{
    tendril::{StrTendril, TendrilSink},
    tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink},
};
use markup5ever::{QualName, local_name, namespace_url, ns};

/// Convert an html5ever Attribute which uses tendril for its value to a bionic Attribute
/// which uses String.
fn html5ever_to_bionic_attr(attr: html5ever::Attribute) -> bionic_dom::Attribute {
    bionic_dom::Attribute {
        name: attr.name,
        value: attr.value.to_string(),
    }
}

fn parse_opts() -> ParseOpts {
    ParseOpts {
        tokenizer: TokenizerOpts::default(),
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false, // Enables parsing of <noscript> tags
            iframe_srcdoc: false,
            drop_doctype: true,
            quirks_mode: QuirksMode::NoQuirks,
            ..Default::default()
        },
    }
}

/// What the parser leaves behind once html5ever is done with it
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Errors that occurred during parsing.
    pub errors: Vec<Cow<'static, str>>,
    /// The throwaway context element created for fragment parsing
    pub context_element: Option<usize>,
}

pub struct DocumentHtmlParser<'doc> {
    document_mutator: RefCell<DocumentMutator<'doc>>,

    /// Node handed to html5ever as "the document": node 0 for whole documents, a detached
    /// fragment node when parsing `innerHTML`.
    root_id: usize,

    /// Errors that occurred during parsing.
    pub errors: RefCell<Vec<Cow<'static, str>>>,

    /// The document's quirks mode.
    pub quirks_mode: Cell<QuirksMode>,

    is_fragment: bool,
    context_element: Cell<Option<usize>>,
}

impl<'doc> DocumentHtmlParser<'doc> {
    #[track_caller]
    /// Get a mutable borrow of the DocumentMutator
    fn mutr(&self) -> RefMut<'_, DocumentMutator<'doc>> {
        self.document_mutator.borrow_mut()
    }

    /// Record a structural failure as a parse error rather than aborting the parse
    fn check(&self, result: DomResult<()>) {
        if let Err(err) = result {
            self.errors.borrow_mut().push(Cow::Owned(err.to_string()));
        }
    }
}

impl DocumentHtmlParser<'_> {
    pub fn new(doc: &mut BaseDocument) -> DocumentHtmlParser<'_> {
        DocumentHtmlParser {
            document_mutator: RefCell::new(doc.mutate()),
            root_id: 0,
            errors: RefCell::new(Vec::new()),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
            is_fragment: false,
            context_element: Cell::new(None),
        }
    }

    fn new_fragment(doc: &mut BaseDocument, fragment_id: usize) -> DocumentHtmlParser<'_> {
        DocumentHtmlParser {
            root_id: fragment_id,
            is_fragment: true,
            ..DocumentHtmlParser::new(doc)
        }
    }

    pub fn parse_into_doc<'d>(doc: &'d mut BaseDocument, html: &str) -> &'d mut BaseDocument {
        let sink = Self::new(doc);
        let outcome = html5ever::parse_document(sink, parse_opts()).one(html);
        log_errors(&outcome);
        doc
    }

    /// Parse `html` as the contents of a `<body>` element.
    ///
    /// Returns the top-level nodes, detached, in source order. The scaffolding html5ever
    /// builds around a fragment is freed before returning.
    pub fn parse_fragment(doc: &mut BaseDocument, html: &str) -> Vec<usize> {
        let fragment_id = doc.mutate().create_fragment();
        let sink = Self::new_fragment(doc, fragment_id);
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let outcome = html5ever::parse_fragment(sink, parse_opts(), context, Vec::new()).one(html);
        log_errors(&outcome);

        // html5ever puts the parsed nodes under a synthetic <html> root inside the fragment
        let wrapper = doc
            .get_node(fragment_id)
            .and_then(|fragment| fragment.children.first().copied());
        let nodes = match wrapper {
            Some(wrapper) => doc.mutate().remove_children(wrapper).unwrap_or_default(),
            None => Vec::new(),
        };

        doc.drop_node(fragment_id);
        if let Some(context_id) = outcome.context_element {
            doc.drop_node(context_id);
        }
        nodes
    }
}

fn log_errors(outcome: &ParseOutcome) {
    #[cfg(feature = "tracing")]
    for error in &outcome.errors {
        tracing::debug!("html parse error: {error}");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = outcome;
}

impl<'b> TreeSink for DocumentHtmlParser<'b> {
    type Output = ParseOutcome;

    // we use the ID of the nodes in the tree as the handle
    type Handle = usize;

    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        ParseOutcome {
            errors: self.errors.into_inner(),
            context_element: self.context_element.get(),
        }
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.errors.borrow_mut().push(msg);
    }

    fn get_document(&self) -> Self::Handle {
        self.root_id
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.document_mutator.borrow(), |mutr| {
            mutr.element_name(*target)
                .expect("TreeSink::elem_name called on a node which is not an element!")
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<html5ever::Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs.into_iter().map(html5ever_to_bionic_attr).collect();
        let id = self.mutr().create_element(name, attrs);

        // The first element of a fragment parse is the context element
        if self.is_fragment && self.context_element.get().is_none() {
            self.context_element.set(Some(id));
        }
        id
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.mutr().create_comment_node(&text)
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        self.mutr().create_comment_node("")
    }

    fn append(&self, parent_id: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(id) => {
                let result = self.mutr().append_children(*parent_id, &[id]);
                self.check(result);
            }
            // If content to append is text, first attempt to append it to the last child of parent.
            // Else create a new text node and append it to the parent
            NodeOrText::AppendText(text) => {
                let last_child_id = self.mutr().last_child_id(*parent_id);
                let has_appended = if let Some(id) = last_child_id {
                    self.mutr().append_text_to_node(id, &text).is_ok()
                } else {
                    false
                };
                if !has_appended {
                    let new_child_id = self.mutr().create_text_node(&text);
                    let result = self.mutr().append_children(*parent_id, &[new_child_id]);
                    self.check(result);
                }
            }
        }
    }

    // Note: The tree builder promises we won't have a text node after the insertion point.
    // https://github.com/servo/html5ever/blob/main/rcdom/lib.rs#L338
    fn append_before_sibling(&self, sibling_id: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        match new_node {
            NodeOrText::AppendNode(id) => {
                let result = self.mutr().insert_nodes_before(*sibling_id, &[id]);
                self.check(result);
            }
            // If content to append is text, first attempt to append it to the node before sibling_node
            // Else create a new text node and insert it before sibling_node
            NodeOrText::AppendText(text) => {
                let previous_sibling_id = self.mutr().previous_sibling_id(*sibling_id);
                let has_appended = if let Some(id) = previous_sibling_id {
                    self.mutr().append_text_to_node(id, &text).is_ok()
                } else {
                    false
                };
                if !has_appended {
                    let new_child_id = self.mutr().create_text_node(&text);
                    let result = self.mutr().insert_nodes_before(*sibling_id, &[new_child_id]);
                    self.check(result);
                }
            }
        };
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.mutr().node_has_parent(*element);
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Ignore. We don't care about the DOCTYPE for now.
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents are parsed as ordinary children.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<html5ever::Attribute>) {
        let attrs = attrs.into_iter().map(html5ever_to_bionic_attr).collect();
        let result = self.mutr().add_attrs_if_missing(*target, attrs);
        self.check(result);
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        let result = self.mutr().remove_node(*target);
        self.check(result);
    }

    fn reparent_children(&self, old_parent_id: &Self::Handle, new_parent_id: &Self::Handle) {
        let result = self.mutr().reparent_children(*old_parent_id, *new_parent_id);
        self.check(result);
    }
}

#[test]
fn parses_some_html() {
    let html = "<!DOCTYPE html><html><body><h1>hello world</h1></body></html>";
    let mut doc = BaseDocument::new();
    DocumentHtmlParser::parse_into_doc(&mut doc, html);

    let body = doc.body_id().unwrap();
    assert_eq!(doc.inner_html(body), "<h1>hello world</h1>");
}
