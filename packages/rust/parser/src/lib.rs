//! Streaming extraction of Open Graph, Twitter Card and favicon metadata.
//!
//! The parser makes one pass over the document with a streaming tokenizer,
//! never builds a DOM, and stops at the first `<body>` tag:
//!
//! ```text
//! bytes → tokenizer → walker → attribute collector → property router → namespace
//! ```
//!
//! Leniency is deliberate: unknown properties, malformed numbers and
//! duplicate attributes never fail a parse. The only parse error is a read
//! fault from the underlying byte stream.

mod attributes;
mod namespaces;
mod router;
mod tokenizer;
mod walker;

use std::io::Read;

use metaparser_shared::{Metadata, Result};

pub use attributes::AttributeSet;
pub use walker::DocumentWalker;

/// Parse the head of an HTML document read from `reader`.
///
/// Takes ownership of the reader and drops it before returning, whether the
/// scan stopped at `<body>`, at end of stream, or on a read error.
pub fn parse_html<R: Read>(reader: R) -> Result<Metadata> {
    DocumentWalker::new().walk(reader)
}

/// Parse an in-memory HTML document.
pub fn parse_str(html: &str) -> Result<Metadata> {
    parse_html(html.as_bytes())
}
