use std::fmt::Write;

use crate::BaseDocument;

impl BaseDocument {
    pub fn print_tree(&self) {
        print!("{}", self.debug_tree(0));
    }

    /// One line per node, indented by depth
    pub fn debug_tree(&self, node_id: usize) -> String {
        let mut out = String::new();
        self.walk_tree(0, node_id, &mut out);
        out
    }

    fn walk_tree(&self, indent: usize, node_id: usize, out: &mut String) {
        let Some(node) = self.get_node(node_id) else {
            return;
        };
        let _ = writeln!(out, "{}{}", " ".repeat(indent), node.node_debug_str());
        for &child in &node.children {
            self.walk_tree(indent + 2, child, out);
        }
    }
}
