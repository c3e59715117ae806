use super::ElementData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The `Document` itself - the root node of a HTML document.
    Document,

    /// A detached container used while parsing fragments
    DocumentFragment,

    /// An element with attributes.
    Element(ElementData),

    /// A text node.
    Text(TextNodeData),

    /// A comment, with its text.
    Comment(String),
}

impl NodeData {
    pub fn downcast_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn downcast_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn downcast_text(&self) -> Option<&TextNodeData> {
        match self {
            Self::Text(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNodeData {
    /// The textual content of the text node
    pub content: String,
}

impl TextNodeData {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Whether the text holds anything besides whitespace
    pub fn has_visible_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    /// Our Id
    pub id: usize,
    /// Our parent's ID
    pub parent: Option<usize>,
    // What are our children?
    pub children: Vec<usize>,

    /// Node type (Element, TextNode, etc) specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(id: usize, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        self.data.downcast_element()
    }

    pub fn element_data_mut(&mut self) -> Option<&mut ElementData> {
        self.data.downcast_element_mut()
    }

    pub fn text_data(&self) -> Option<&TextNodeData> {
        self.data.downcast_text()
    }

    pub fn index_of_child(&self, child_id: usize) -> Option<usize> {
        self.children.iter().position(|id| *id == child_id)
    }

    pub fn node_debug_str(&self) -> String {
        let mut s = String::new();

        match &self.data {
            NodeData::Document => s.push_str("DOCUMENT"),
            NodeData::DocumentFragment => s.push_str("FRAGMENT"),
            NodeData::Text(data) => {
                let content = data.content.trim();
                if content.len() > 10 {
                    s.push_str("TEXT ");
                    s.push_str(&format!("{:?}", &content.chars().take(10).collect::<String>()));
                    s.push_str("...");
                } else {
                    s.push_str("TEXT ");
                    s.push_str(&format!("{content:?}"));
                }
            }
            NodeData::Comment(_) => s.push_str("COMMENT"),
            NodeData::Element(data) => {
                let name = &data.name;
                let class = data.attr(markup5ever::local_name!("class")).unwrap_or("");
                if !class.is_empty() {
                    s.push_str(&format!("<{} class=\"{}\"> ({:?})", name.local, class, self.id));
                } else {
                    s.push_str(&format!("<{}> ({:?})", name.local, self.id));
                }
            }
        }
        s
    }
}
