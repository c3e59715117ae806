//! A bionic-reading content script over a headless DOM.
//!
//! ## Example
//! ```rust
//! use bionic::ContentScript;
//!
//! let mut page = ContentScript::from_html("<body><p>Reading faster</p></body>");
//! page.handle_message(r#"{"action":"toggleMustardReader"}"#).unwrap();
//! assert!(page.is_enabled());
//! ```

mod content_script;
mod message;

pub use content_script::{ContentScript, ContentScriptConfig, DEFAULT_TOGGLE_ACTION};
pub use message::{Message, MessageError};

pub use bionic_dom as dom;
pub use bionic_html as html;
pub use bionic_reader as reader;
pub use bionic_reader::{Reader, ReaderConfig, ReaderState};
