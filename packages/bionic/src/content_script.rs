use bionic_dom::BaseDocument;
use bionic_html::HtmlDocument;
use bionic_reader::{Reader, ReaderConfig, ReaderState};

use crate::{Message, MessageError};

/// Action name that toggles the reader
pub const DEFAULT_TOGGLE_ACTION: &str = "toggleMustardReader";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentScriptConfig {
    /// The `action` value recognised as a toggle request
    pub toggle_action: String,
    pub reader: ReaderConfig,
}

impl Default for ContentScriptConfig {
    fn default() -> Self {
        Self {
            toggle_action: DEFAULT_TOGGLE_ACTION.to_string(),
            reader: ReaderConfig::default(),
        }
    }
}

/// One page: the document and the reader attached to it.
///
/// The host forwards runtime messages to [`ContentScript::handle_message`] and calls
/// [`ContentScript::deliver_mutations`] after it has changed the page, which is when the
/// reader's observer callback runs.
pub struct ContentScript {
    document: BaseDocument,
    reader: Reader,
    toggle_action: String,
}

impl ContentScript {
    pub fn new(document: BaseDocument, config: ContentScriptConfig) -> Self {
        Self {
            document,
            reader: Reader::new(config.reader),
            toggle_action: config.toggle_action,
        }
    }

    /// Parse `html` and attach a reader with the default configuration
    pub fn from_html(html: &str) -> Self {
        Self::new(
            HtmlDocument::from_html(html).into_inner(),
            ContentScriptConfig::default(),
        )
    }

    /// Decode and dispatch one JSON message.
    ///
    /// Returns the reader state after a toggle, or `None` for actions that are not ours.
    pub fn handle_message(&mut self, payload: &str) -> Result<Option<ReaderState>, MessageError> {
        let message = Message::from_json(payload, &self.toggle_action)?;
        Ok(self.dispatch(message))
    }

    pub fn dispatch(&mut self, message: Message) -> Option<ReaderState> {
        match message {
            Message::Toggle => Some(self.reader.toggle(&mut self.document)),
            Message::Other(action) => {
                tracing::debug!(%action, "ignoring message");
                None
            }
        }
    }

    /// Hand every queued mutation record to the reader as one batch.
    ///
    /// Returns the number of text nodes rendered.
    pub fn deliver_mutations(&mut self) -> usize {
        self.reader.process_pending(&mut self.document)
    }

    pub fn is_enabled(&self) -> bool {
        self.reader.is_enabled()
    }

    pub fn document(&self) -> &BaseDocument {
        &self.document
    }

    /// Mutable access for the host's own page changes. Call
    /// [`ContentScript::deliver_mutations`] afterwards.
    pub fn document_mut(&mut self) -> &mut BaseDocument {
        &mut self.document
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    pub fn into_document(self) -> BaseDocument {
        self.document
    }
}
