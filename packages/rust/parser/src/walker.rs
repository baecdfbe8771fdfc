//! Document walker: the single pass over the token stream.

use std::io::Read;

use metaparser_shared::{Metadata, MetaparserError, Result};
use tracing::debug;

use crate::attributes::AttributeSet;
use crate::router;
use crate::tokenizer::{self, Event, Tag, TagKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Scanning,
    CapturingTitle,
}

/// Walks one document's head and accumulates its [`Metadata`].
///
/// A walker is consumed by [`DocumentWalker::walk`]; parse each document
/// with a fresh walker.
#[derive(Debug)]
pub struct DocumentWalker {
    metadata: Metadata,
    state: WalkState,
}

impl Default for DocumentWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWalker {
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            state: WalkState::Scanning,
        }
    }

    /// Scan `reader` until `<body>`, end of stream, or a read fault.
    ///
    /// The reader is dropped before this returns, on every path.
    pub fn walk<R: Read>(mut self, reader: R) -> Result<Metadata> {
        let mut tags_seen = 0usize;

        for event in tokenizer::tokenize(reader) {
            match event.map_err(MetaparserError::parse)? {
                Event::Text(text) => {
                    if self.state == WalkState::CapturingTitle {
                        self.metadata.document_title.push_str(&text);
                    }
                }
                Event::Tag(tag) => {
                    tags_seen += 1;
                    if tag.name == "body" {
                        debug!(tags_seen, "reached <body>, stopping");
                        break;
                    }
                    self.on_tag(tag);
                }
            }
        }

        debug!(
            tags_seen,
            images = self.metadata.images.len(),
            videos = self.metadata.videos.len(),
            favicons = self.metadata.favicons.len(),
            "document head scanned"
        );
        Ok(self.metadata)
    }

    fn on_tag(&mut self, tag: Tag) {
        match tag.name.as_str() {
            "title" => match tag.kind {
                TagKind::Start => {
                    self.metadata.document_title.clear();
                    self.state = WalkState::CapturingTitle;
                }
                TagKind::End => self.state = WalkState::Scanning,
                TagKind::SelfClosing => {}
            },
            "meta" if !tag.attributes.is_empty() => {
                let attrs = AttributeSet::collect(tag.attributes);
                router::route_meta(&attrs, &mut self.metadata);
            }
            "link" if !tag.attributes.is_empty() => {
                let attrs = AttributeSet::collect(tag.attributes);
                router::route_link(&attrs, &mut self.metadata);
            }
            _ => {}
        }
    }
}
