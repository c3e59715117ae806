use thiserror::Error;

/// Structural violations reported by [`DocumentMutator`](crate::DocumentMutator)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    #[error("Node {0} does not exist")]
    NodeNotFound(usize),

    #[error("Node {child} is not a child of node {parent}")]
    NotAChild { parent: usize, child: usize },

    #[error("Inserting node {node} under node {parent} would make it its own ancestor")]
    HierarchyRequest { parent: usize, node: usize },

    #[error("Node {0} is not an element")]
    NotAnElement(usize),

    #[error("Node {0} is not a text node")]
    NotAText(usize),
}

pub type DomResult<T> = Result<T, DomError>;
