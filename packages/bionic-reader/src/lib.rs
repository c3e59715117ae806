//! Bionic reading for [`bionic_dom`] documents.
//!
//! When enabled, the [`Reader`] replaces every eligible text node under the `<body>` with a
//! `<span>` whose inner markup emphasizes the leading part of each word. Text inside code,
//! headings, navigation chrome and the other [skipped tags](DEFAULT_SKIP_TAGS) is left alone.
//! Content added to the page later is picked up through a child-list observer, and disabling
//! the reader puts the original text nodes back.
//!
//! ```rust,ignore
//! let mut doc = HtmlDocument::from_html("<body><p>Hello world</p></body>").into_inner();
//! let mut reader = Reader::default();
//! reader.toggle(&mut doc);
//! // ... the page changes ...
//! reader.process_pending(&mut doc);
//! reader.toggle(&mut doc);
//! ```

mod config;
mod filter;
mod reader;
mod render;
mod styling;
mod walker;
mod watcher;

pub use config::{DEFAULT_MARKER_CLASS, DEFAULT_SKIP_TAGS, ReaderConfig};
pub use filter::AncestorFilter;
pub use reader::{Reader, ReaderState};
pub use render::{RestoreSummary, SubstitutionRecord, WordRenderer, restore};
pub use styling::{Run, Segment, StyledWord, Weight, WordStyler, substract_non_alpha};
pub use walker::TreeWalker;
pub use watcher::{MutationWatcher, WatcherState};
