//! The headless DOM underneath bionic.
//!
//! This crate implements a small slab-backed DOM ([`BaseDocument`]) that is designed to be
//! driven by external code: an HTML parser fills it (see `bionic-html`), and the reader
//! rewrites its text nodes. All tree changes go through [`DocumentMutator`], which queues
//! child-list [`MutationRecord`]s for any registered observers.
//!
//! Node ids are slab keys. A node removed from the tree keeps its id until it is
//! explicitly dropped, which lets callers hold on to detached nodes and put them back later.

/// The DOM implementation.
///
/// This is the primary entry point for this crate.
mod document;

/// The nodes themselves, and their data.
pub mod node;

mod debug;
mod error;
mod mutator;
pub mod observer;
mod serialize;
pub mod traversal;

pub use document::BaseDocument;
pub use error::{DomError, DomResult};
pub use markup5ever::{LocalName, Namespace, QualName, local_name, namespace_url, ns};
pub use mutator::DocumentMutator;
pub use node::{Attribute, ElementData, Node, NodeData, TextNodeData};
pub use observer::{MutationRecord, ObserveOptions, ObserverId};
