//! Namespace sub-parsers, one per vocabulary.
//!
//! Each module defines the typed keys of its vocabulary and an `apply`
//! function that writes one `content` value into the slice of [`Metadata`]
//! it owns. Repeatable records share the open-item bookkeeping below: the
//! target of a sub-field key is always addressed by index, the last element
//! of the owning `Vec`.
//!
//! [`Metadata`]: metaparser_shared::Metadata

pub(crate) mod article;
pub(crate) mod audio;
pub(crate) mod basic;
pub(crate) mod book;
pub(crate) mod favicon;
pub(crate) mod image;
pub(crate) mod music;
pub(crate) mod profile;
pub(crate) mod twitter;
pub(crate) mod video;

use metaparser_shared::{Audio, Image, Song, Video, VideoActor};

// ---------------------------------------------------------------------------
// Open-item bookkeeping
// ---------------------------------------------------------------------------

/// A repeatable record identified by one string field.
pub(crate) trait Primary: Default {
    fn primary_mut(&mut self) -> &mut String;
}

/// Handle a bare primary key (`og:image`, `music:song`, ...).
///
/// Fills the last record when its identifying field is still empty,
/// otherwise opens a new record. Returns the index of the record written.
pub(crate) fn open_primary<T: Primary>(items: &mut Vec<T>, value: &str) -> usize {
    if let Some(last) = items.last_mut() {
        let primary = last.primary_mut();
        if primary.is_empty() {
            value.clone_into(primary);
            return items.len() - 1;
        }
    }

    let mut item = T::default();
    value.clone_into(item.primary_mut());
    items.push(item);
    items.len() - 1
}

/// Index of the open record, creating an empty one if the list is empty.
pub(crate) fn open_index<T: Default>(items: &mut Vec<T>) -> usize {
    if items.is_empty() {
        items.push(T::default());
    }
    items.len() - 1
}

/// The open record itself, created if the list is empty.
pub(crate) fn open_mut<T: Default>(items: &mut Vec<T>) -> &mut T {
    let index = open_index(items);
    &mut items[index]
}

/// Lenient base-10 parse; malformed numbers are ignored by callers.
pub(crate) fn parse_int(content: &str) -> Option<i64> {
    content.parse().ok()
}

impl Primary for Image {
    fn primary_mut(&mut self) -> &mut String {
        &mut self.url
    }
}

impl Primary for Video {
    fn primary_mut(&mut self) -> &mut String {
        &mut self.url
    }
}

impl Primary for Audio {
    fn primary_mut(&mut self) -> &mut String {
        &mut self.url
    }
}

impl Primary for Song {
    fn primary_mut(&mut self) -> &mut String {
        &mut self.url
    }
}

impl Primary for VideoActor {
    fn primary_mut(&mut self) -> &mut String {
        &mut self.url
    }
}
