//! HTML serialization of (sub)trees.

use markup5ever::local_name;

use crate::node::{ElementData, NodeData};
use crate::BaseDocument;

/// Elements which never have children and are written without an end tag
fn is_void_element(el: &ElementData) -> bool {
    matches!(
        el.name.local,
        local_name!("area")
            | local_name!("base")
            | local_name!("br")
            | local_name!("col")
            | local_name!("embed")
            | local_name!("hr")
            | local_name!("img")
            | local_name!("input")
            | local_name!("link")
            | local_name!("meta")
            | local_name!("source")
            | local_name!("track")
            | local_name!("wbr")
    )
}

/// Elements whose text children are written without escaping
fn is_raw_text_element(el: &ElementData) -> bool {
    matches!(
        el.name.local,
        local_name!("script") | local_name!("style") | local_name!("noscript")
    )
}

impl BaseDocument {
    /// Serialize the node and its subtree
    pub fn outer_html(&self, node_id: usize) -> String {
        let mut out = String::new();
        self.write_node(node_id, false, &mut out);
        out
    }

    /// Serialize the node's children
    pub fn inner_html(&self, node_id: usize) -> String {
        let mut out = String::new();
        self.write_children(node_id, &mut out);
        out
    }

    fn write_children(&self, node_id: usize, out: &mut String) {
        let Some(node) = self.get_node(node_id) else {
            return;
        };
        let raw = node.element_data().is_some_and(is_raw_text_element);
        for &child in &node.children {
            self.write_node(child, raw, out);
        }
    }

    fn write_node(&self, node_id: usize, raw_text: bool, out: &mut String) {
        let Some(node) = self.get_node(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document | NodeData::DocumentFragment => self.write_children(node_id, out),
            NodeData::Text(text) if raw_text => out.push_str(&text.content),
            NodeData::Text(text) => {
                html_escape::encode_text_to_string(&text.content, out);
            }
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.name.local);
                for attr in el.attrs() {
                    out.push(' ');
                    if let Some(prefix) = &attr.name.prefix {
                        out.push_str(prefix);
                        out.push(':');
                    }
                    out.push_str(&attr.name.local);
                    out.push_str("=\"");
                    html_escape::encode_double_quoted_attribute_to_string(&attr.value, out);
                    out.push('"');
                }
                out.push('>');

                if is_void_element(el) {
                    return;
                }
                self.write_children(node_id, out);
                out.push_str("</");
                out.push_str(&el.name.local);
                out.push('>');
            }
        }
    }
}
