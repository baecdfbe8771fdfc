//! The `article:*` vocabulary.

use metaparser_shared::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArticleKey {
    PublishedTime,
    ModifiedTime,
    ExpirationTime,
    Author,
    Section,
    Tag,
}

pub(crate) fn apply(key: ArticleKey, content: &str, article: &mut Article) {
    match key {
        ArticleKey::PublishedTime => content.clone_into(&mut article.published_time),
        ArticleKey::ModifiedTime => content.clone_into(&mut article.modified_time),
        ArticleKey::ExpirationTime => content.clone_into(&mut article.expiration_time),
        ArticleKey::Author => article.authors.push(content.to_owned()),
        ArticleKey::Section => content.clone_into(&mut article.section),
        ArticleKey::Tag => article.tags.push(content.to_owned()),
    }
}
