use std::collections::HashSet;

/// Tags whose text is never reshaped: code, navigation chrome, headings, form controls and
/// the like.
pub const DEFAULT_SKIP_TAGS: &[&str] = &[
    "code", "noscript", "cite", "script", "nav", "header", "footer", "q", "strong", "style",
    "tfoot", "thead", "svg", "button", "h1", "h2", "input", "abbr", "address", "img",
];

/// Class put on every container the reader inserts
pub const DEFAULT_MARKER_CLASS: &str = "turbo-vue";

/// Options used when constructing a [`Reader`](crate::Reader)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Lower-case tag names whose descendants are left alone
    pub skip_tags: HashSet<String>,
    /// Class marking rendered output, so it is never rendered twice
    pub marker_class: String,
    /// `font-weight` of the emphasized parts of a word
    pub strong_weight: u16,
    /// `font-weight` of the remaining parts
    pub regular_weight: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_tags: DEFAULT_SKIP_TAGS.iter().map(|tag| tag.to_string()).collect(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            strong_weight: 600,
            regular_weight: 400,
        }
    }
}
