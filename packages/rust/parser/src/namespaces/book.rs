//! The `book:*` vocabulary.

use metaparser_shared::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookKey {
    Author,
    Isbn,
    ReleaseDate,
    Tag,
}

pub(crate) fn apply(key: BookKey, content: &str, book: &mut Book) {
    match key {
        BookKey::Author => book.authors.push(content.to_owned()),
        BookKey::Isbn => content.clone_into(&mut book.isbn),
        BookKey::ReleaseDate => content.clone_into(&mut book.release_date),
        BookKey::Tag => book.tags.push(content.to_owned()),
    }
}
