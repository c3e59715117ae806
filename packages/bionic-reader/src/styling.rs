//! Word styling: splitting a word into alternating heavy and light runs.
//!
//! A token is first split into a *prefix* of characters that are neither letters nor numbers
//! (`"("`, `"..."`, `"“"`) and the *core* that follows. Only the core is styled:
//!
//! | core length | output                                             |
//! |-------------|----------------------------------------------------|
//! | 0 or 1      | the token, unstyled                                |
//! | 2           | one strong run                                     |
//! | 3           | regular, strong, regular (one character each)      |
//! | n ≥ 4       | strong, regular, strong, regular, cut at ⌊n/4⌋, ⌈n/2⌉, ⌈3n/4⌉ |
//!
//! Lengths count Unicode scalar values.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\p{L}\p{N}]+").expect("prefix pattern is valid")
});

/// The leading run of characters that are neither Unicode letters nor Unicode numbers.
///
/// Returns an empty string when the token starts with a letter or number.
pub fn substract_non_alpha(token: &str) -> &str {
    NON_ALPHANUMERIC_PREFIX
        .find(token)
        .map_or("", |found| found.as_str())
}

/// Characters `from..to` of `text`, given its character boundaries
fn char_slice<'a>(text: &'a str, bounds: &[usize], from: usize, to: usize) -> &'a str {
    &text[bounds[from]..bounds[to]]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Strong,
    Regular,
}

/// A slice of a word rendered at one weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub weight: Weight,
}

/// A token split into its unstyled lead and its weighted runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledWord<'a> {
    /// Text emitted as-is before the runs
    pub plain: &'a str,
    pub runs: Vec<Run<'a>>,
}

impl<'a> StyledWord<'a> {
    pub fn new(token: &'a str) -> Self {
        let prefix = substract_non_alpha(token);
        let core = &token[prefix.len()..];

        // Byte offset of every character boundary in the core, including the end
        let bounds: Vec<usize> = core
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(core.len()))
            .collect();
        let n = bounds.len() - 1;
        let part = |from: usize, to: usize| char_slice(core, &bounds, from, to);

        let runs = match n {
            0 | 1 => {
                return StyledWord {
                    plain: token,
                    runs: Vec::new(),
                };
            }
            2 => vec![Run {
                text: core,
                weight: Weight::Strong,
            }],
            3 => vec![
                Run {
                    text: part(0, 1),
                    weight: Weight::Regular,
                },
                Run {
                    text: part(1, 2),
                    weight: Weight::Strong,
                },
                Run {
                    text: part(2, 3),
                    weight: Weight::Regular,
                },
            ],
            _ => {
                let first = n / 4;
                let second = n.div_ceil(2);
                let third = (3 * n).div_ceil(4);
                vec![
                    Run {
                        text: part(0, first),
                        weight: Weight::Strong,
                    },
                    Run {
                        text: part(first, second),
                        weight: Weight::Regular,
                    },
                    Run {
                        text: part(second, third),
                        weight: Weight::Strong,
                    },
                    Run {
                        text: part(third, n),
                        weight: Weight::Regular,
                    },
                ]
            }
        };

        StyledWord {
            plain: prefix,
            runs,
        }
    }
}

/// One piece of a rendered text node: plain text, or a run at a `font-weight`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub font_weight: Option<u16>,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            font_weight: None,
        }
    }

    /// Append the escaped markup for this segment to `out`
    pub fn write_markup(&self, out: &mut String) {
        match self.font_weight {
            Some(weight) => {
                out.push_str("<span style=\"font-weight: ");
                out.push_str(&weight.to_string());
                out.push_str(";\">");
                html_escape::encode_text_to_string(self.text, out);
                out.push_str("</span>");
            }
            None => {
                html_escape::encode_text_to_string(self.text, out);
            }
        }
    }
}

/// Turns text into weighted segments and inline-styled markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStyler {
    pub strong_weight: u16,
    pub regular_weight: u16,
}

impl Default for WordStyler {
    fn default() -> Self {
        Self {
            strong_weight: 600,
            regular_weight: 400,
        }
    }
}

impl WordStyler {
    pub fn new(strong_weight: u16, regular_weight: u16) -> Self {
        Self {
            strong_weight,
            regular_weight,
        }
    }

    fn font_weight(&self, weight: Weight) -> u16 {
        match weight {
            Weight::Strong => self.strong_weight,
            Weight::Regular => self.regular_weight,
        }
    }

    fn push_word<'a>(&self, token: &'a str, out: &mut Vec<Segment<'a>>) {
        let word = StyledWord::new(token);
        if !word.plain.is_empty() {
            out.push(Segment::plain(word.plain));
        }
        out.extend(word.runs.iter().map(|run| Segment {
            text: run.text,
            font_weight: Some(self.font_weight(run.weight)),
        }));
    }

    /// Segments for a whole text node.
    ///
    /// Tokens are separated by ASCII whitespace only, so a non-breaking space stays inside
    /// its token. Words are joined by single spaces. Leading or trailing whitespace collapses
    /// to one space so the text does not fuse with inline neighbours.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut out: Vec<Segment<'a>> = Vec::new();
        if text.starts_with(|c: char| c.is_ascii_whitespace()) {
            out.push(Segment::plain(" "));
        }
        let mut words = 0;
        for token in text.split_ascii_whitespace() {
            if words > 0 {
                out.push(Segment::plain(" "));
            }
            self.push_word(token, &mut out);
            words += 1;
        }
        if words > 0 && text.ends_with(|c: char| c.is_ascii_whitespace()) {
            out.push(Segment::plain(" "));
        }
        out
    }

    /// Append the markup for one token to `out`. Text is HTML-escaped.
    pub fn write_word(&self, token: &str, out: &mut String) {
        let mut segments = Vec::new();
        self.push_word(token, &mut segments);
        for segment in &segments {
            segment.write_markup(out);
        }
    }

    pub fn style_word(&self, token: &str) -> String {
        let mut out = String::new();
        self.write_word(token, &mut out);
        out
    }

    /// Markup for a whole text node, see [`WordStyler::segments`]
    pub fn style_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for segment in self.segments(text) {
            segment.write_markup(&mut out);
        }
        out
    }
}
