//! Metadata extracted from an HTML document's head.
//!
//! Field names serialize as the snake_case keys consumers already rely on
//! (`title`, `type`, `locales_alternate`, `site_name`, ...). Every struct is
//! `#[serde(default)]` so partially populated documents deserialize cleanly.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Everything the parser found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// `og:title`.
    pub title: String,
    /// `og:type`.
    #[serde(rename = "type")]
    pub og_type: String,
    /// `og:description`.
    pub description: String,
    /// `og:determiner`.
    pub determiner: String,
    /// `og:url`.
    pub url: String,
    /// `og:locale`.
    pub locale: String,
    /// `og:locale:alternate`, in document order.
    pub locales_alternate: Vec<String>,
    /// `og:site_name`.
    pub site_name: String,

    pub images: Vec<Image>,
    pub videos: Vec<Video>,
    pub audios: Vec<Audio>,

    pub music: Music,
    pub article: Article,
    pub book: Book,
    pub profile: Profile,

    /// `<link rel="...icon...">` elements.
    pub favicons: Vec<Favicon>,

    pub twitter: Twitter,

    /// Text of the `<title>` element.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub document_title: String,
    /// `<meta name="description">`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub meta_description: String,
}

impl Metadata {
    /// The Open Graph title, falling back to the `<title>` text.
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            &self.document_title
        } else {
            &self.title
        }
    }

    /// The Open Graph description, falling back to `<meta name="description">`.
    pub fn description(&self) -> &str {
        if self.description.is_empty() {
            &self.meta_description
        } else {
            &self.description
        }
    }
}

// ---------------------------------------------------------------------------
// Repeatable media records
// ---------------------------------------------------------------------------

/// `og:image` and its `og:image:*` structured properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: i64,
    pub height: i64,
    pub alt: String,
}

/// `og:video`, its structured properties, and the `video:*` vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: i64,
    pub height: i64,
    pub actors: Vec<VideoActor>,
    pub director: String,
    pub writer: String,
    /// Length in seconds.
    pub duration: i64,
    pub release_date: String,
    pub tags: Vec<String>,
    pub series: String,
}

/// `video:actor` plus its `video:actor:role`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoActor {
    pub url: String,
    pub role: String,
}

/// `og:audio` and its structured properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audio {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

// ---------------------------------------------------------------------------
// Object types
// ---------------------------------------------------------------------------

/// The `music:*` vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Music {
    pub musicians: Vec<String>,
    pub album: Album,
    /// Length in seconds.
    pub duration: i64,
    pub release_date: String,
    pub creator: String,
    pub songs: Vec<Song>,
}

/// `music:album` with its disc and track numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub url: String,
    pub disc: i64,
    pub track: i64,
}

/// `music:song` with its disc and track numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    pub url: String,
    pub track: i64,
    pub disc: i64,
}

/// The `article:*` vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub published_time: String,
    pub modified_time: String,
    pub expiration_time: String,
    pub section: String,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

/// The `book:*` vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub release_date: String,
    #[serde(alias = "isbin")]
    pub isbn: String,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

/// The `profile:*` vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub gender: String,
}

// ---------------------------------------------------------------------------
// Twitter cards
// ---------------------------------------------------------------------------

/// The `twitter:*` card vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Twitter {
    pub card: String,
    pub site: String,
    pub site_id: String,
    pub creator: String,
    pub creator_id: String,
    pub description: String,
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub player: TwitterPlayer,
    /// One entry per app platform, in first-seen order.
    pub apps: Vec<TwitterApp>,
}

/// `twitter:player` and its dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterPlayer {
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub stream: String,
}

/// A `twitter:app:*:<platform>` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterApp {
    pub name: String,
    pub id: i64,
    pub url: String,
    /// Platform tag: `iphone`, `ipad` or `googleplay`.
    #[serde(rename = "type")]
    pub platform: String,
}

// ---------------------------------------------------------------------------
// Favicons
// ---------------------------------------------------------------------------

/// A favicon-like `<link>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favicon {
    /// The `rel` value, e.g. `shortcut icon`.
    pub name: String,
    /// The `href` value, unresolved.
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub sizes: String,
}
