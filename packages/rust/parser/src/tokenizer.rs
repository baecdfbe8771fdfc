//! Streaming tokenizer adapter.
//!
//! Wraps `html5gum` with a custom [`Emitter`] that only materializes what the
//! document walker needs: tags with their raw attribute pairs, and text runs
//! coalesced up to the next tag, comment or doctype. Comments and doctypes
//! are dropped inside the emitter and never allocated as tokens.

use std::collections::VecDeque;
use std::io::Read;

use html5gum::{Emitter, Error, IoReader, State, Tokenizer};

/// Whether a tag opened, closed, or opened-and-closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Start,
    End,
    SelfClosing,
}

/// A tag with its attributes in source order. Duplicates are kept; the
/// attribute collector decides which occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    pub kind: TagKind,
    /// ASCII-lowercased tag name.
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

/// A lexical event handed to the document walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Tag(Tag),
    Text(String),
}

/// Tokenize `reader` lazily. The iterator ends at end of stream and yields
/// `Err` if the reader fails.
pub(crate) fn tokenize<R: Read>(reader: R) -> impl Iterator<Item = std::io::Result<Event>> {
    Tokenizer::new_with_emitter(IoReader::new(reader), HeadEmitter::default())
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub(crate) struct HeadEmitter {
    queue: VecDeque<Event>,
    text: Vec<u8>,
    tag_name: Vec<u8>,
    tag_is_closing: bool,
    tag_self_closing: bool,
    attributes: Vec<(Vec<u8>, Vec<u8>)>,
    last_start_tag: Vec<u8>,
}

impl HeadEmitter {
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.text).into_owned();
        self.text.clear();
        self.queue.push_back(Event::Text(text));
    }

    fn begin_tag(&mut self, closing: bool) {
        self.tag_name.clear();
        self.tag_is_closing = closing;
        self.tag_self_closing = false;
        self.attributes.clear();
    }
}

fn lossy_lower(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_lowercase()
}

impl Emitter for HeadEmitter {
    type Token = Event;

    fn set_last_start_tag(&mut self, last_start_tag: Option<&[u8]>) {
        self.last_start_tag.clear();
        self.last_start_tag
            .extend(last_start_tag.unwrap_or_default());
    }

    fn emit_eof(&mut self) {
        self.flush_text();
    }

    fn emit_error(&mut self, error: Error) {
        tracing::trace!(?error, "recoverable tokenizer error");
    }

    fn pop_token(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    fn emit_string(&mut self, s: &[u8]) {
        self.text.extend(s);
    }

    fn init_start_tag(&mut self) {
        self.begin_tag(false);
    }

    fn init_end_tag(&mut self) {
        self.begin_tag(true);
    }

    fn init_comment(&mut self) {}

    fn emit_current_tag(&mut self) -> Option<State> {
        self.flush_text();
        let kind = match (self.tag_is_closing, self.tag_self_closing) {
            (true, _) => TagKind::End,
            (false, true) => TagKind::SelfClosing,
            (false, false) => TagKind::Start,
        };
        let attributes = self
            .attributes
            .drain(..)
            .map(|(name, value)| {
                (
                    lossy_lower(&name),
                    String::from_utf8_lossy(&value).into_owned(),
                )
            })
            .collect();
        self.queue.push_back(Event::Tag(Tag {
            kind,
            name: lossy_lower(&self.tag_name),
            attributes,
        }));

        self.last_start_tag.clear();
        if kind == TagKind::Start {
            self.last_start_tag.extend(&self.tag_name);
        }
        self.tag_name.clear();
        html5gum::naive_next_state(&self.last_start_tag)
    }

    fn set_self_closing(&mut self) {
        self.tag_self_closing = true;
    }

    fn push_tag_name(&mut self, s: &[u8]) {
        self.tag_name.extend(s);
    }

    fn init_attribute(&mut self) {
        self.attributes.push((Vec::new(), Vec::new()));
    }

    fn push_attribute_name(&mut self, s: &[u8]) {
        if let Some((name, _)) = self.attributes.last_mut() {
            name.extend(s);
        }
    }

    fn push_attribute_value(&mut self, s: &[u8]) {
        if let Some((_, value)) = self.attributes.last_mut() {
            value.extend(s);
        }
    }

    fn current_is_appropriate_end_tag_token(&mut self) -> bool {
        self.tag_is_closing
            && !self.tag_name.is_empty()
            && self.tag_name == self.last_start_tag
    }

    fn emit_current_comment(&mut self) {
        self.flush_text();
    }

    fn emit_current_doctype(&mut self) {
        self.flush_text();
    }

    fn init_doctype(&mut self) {}
    fn push_comment(&mut self, _: &[u8]) {}
    fn push_doctype_name(&mut self, _: &[u8]) {}
    fn push_doctype_public_identifier(&mut self, _: &[u8]) {}
    fn push_doctype_system_identifier(&mut self, _: &[u8]) {}
    fn set_doctype_public_identifier(&mut self, _: &[u8]) {}
    fn set_doctype_system_identifier(&mut self, _: &[u8]) {}
    fn set_force_quirks(&mut self) {}
}
