//! Property router: maps a `meta`/`link` tag to the namespace that owns it.

use metaparser_shared::Metadata;
use tracing::trace;

use crate::attributes::AttributeSet;
use crate::namespaces::article::{self, ArticleKey};
use crate::namespaces::audio::{self, AudioKey};
use crate::namespaces::basic::{self, BasicKey};
use crate::namespaces::book::{self, BookKey};
use crate::namespaces::favicon;
use crate::namespaces::image::{self, ImageKey};
use crate::namespaces::music::{self, MusicKey};
use crate::namespaces::profile::{self, ProfileKey};
use crate::namespaces::twitter::{self, AppField, AppPlatform, TwitterKey};
use crate::namespaces::video::{self, VideoKey};

/// A recognized property key, tagged with its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Property {
    Basic(BasicKey),
    Image(ImageKey),
    Video(VideoKey),
    Audio(AudioKey),
    Music(MusicKey),
    Article(ArticleKey),
    Book(BookKey),
    Profile(ProfileKey),
    Twitter(TwitterKey),
}

impl Property {
    /// Look up a `property` attribute value. Keys are case-sensitive.
    pub(crate) fn lookup(key: &str) -> Option<Self> {
        use AppField::{Id, Name, Url};
        use AppPlatform::{GooglePlay, IPad, IPhone};

        let property = match key {
            // opengraph: basic
            "og:title" => Self::Basic(BasicKey::Title),
            "og:type" => Self::Basic(BasicKey::Type),
            "og:url" => Self::Basic(BasicKey::Url),
            "og:description" => Self::Basic(BasicKey::Description),
            "og:determiner" => Self::Basic(BasicKey::Determiner),
            "og:locale" => Self::Basic(BasicKey::Locale),
            "og:locale:alternate" => Self::Basic(BasicKey::LocaleAlternate),
            "og:site_name" => Self::Basic(BasicKey::SiteName),

            // opengraph: image
            "og:image" => Self::Image(ImageKey::Image),
            "og:image:url" => Self::Image(ImageKey::Url),
            "og:image:secure_url" => Self::Image(ImageKey::SecureUrl),
            "og:image:type" => Self::Image(ImageKey::Type),
            "og:image:width" => Self::Image(ImageKey::Width),
            "og:image:height" => Self::Image(ImageKey::Height),
            "og:image:alt" => Self::Image(ImageKey::Alt),

            // opengraph: video, plus the video object vocabulary
            "og:video" => Self::Video(VideoKey::Video),
            "og:video:url" => Self::Video(VideoKey::Url),
            "og:video:secure_url" => Self::Video(VideoKey::SecureUrl),
            "og:video:type" => Self::Video(VideoKey::Type),
            "og:video:width" => Self::Video(VideoKey::Width),
            "og:video:height" => Self::Video(VideoKey::Height),
            "video:actor" => Self::Video(VideoKey::Actor),
            "video:actor:role" => Self::Video(VideoKey::ActorRole),
            "video:director" => Self::Video(VideoKey::Director),
            "video:writer" => Self::Video(VideoKey::Writer),
            "video:duration" => Self::Video(VideoKey::Duration),
            "video:release_date" => Self::Video(VideoKey::ReleaseDate),
            "video:tag" => Self::Video(VideoKey::Tag),
            "video:series" => Self::Video(VideoKey::Series),

            // opengraph: audio
            "og:audio" => Self::Audio(AudioKey::Audio),
            "og:audio:url" => Self::Audio(AudioKey::Url),
            "og:audio:secure_url" => Self::Audio(AudioKey::SecureUrl),
            "og:audio:type" => Self::Audio(AudioKey::Type),

            // music
            "music:musician" => Self::Music(MusicKey::Musician),
            "music:album" => Self::Music(MusicKey::Album),
            "music:album:disc" => Self::Music(MusicKey::AlbumDisc),
            "music:album:track" => Self::Music(MusicKey::AlbumTrack),
            "music:song" => Self::Music(MusicKey::Song),
            "music:song:disc" => Self::Music(MusicKey::SongDisc),
            "music:song:track" => Self::Music(MusicKey::SongTrack),
            "music:release_date" => Self::Music(MusicKey::ReleaseDate),
            "music:creator" => Self::Music(MusicKey::Creator),
            "music:duration" => Self::Music(MusicKey::Duration),

            // article
            "article:published_time" => Self::Article(ArticleKey::PublishedTime),
            "article:modified_time" => Self::Article(ArticleKey::ModifiedTime),
            "article:expiration_time" => Self::Article(ArticleKey::ExpirationTime),
            "article:author" => Self::Article(ArticleKey::Author),
            "article:section" => Self::Article(ArticleKey::Section),
            "article:tag" => Self::Article(ArticleKey::Tag),

            // book
            "book:author" => Self::Book(BookKey::Author),
            "book:isbn" => Self::Book(BookKey::Isbn),
            "book:release_date" => Self::Book(BookKey::ReleaseDate),
            "book:tag" => Self::Book(BookKey::Tag),

            // profile
            "profile:first_name" => Self::Profile(ProfileKey::FirstName),
            "profile:last_name" => Self::Profile(ProfileKey::LastName),
            "profile:username" => Self::Profile(ProfileKey::Username),
            "profile:gender" => Self::Profile(ProfileKey::Gender),

            // twitter
            "twitter:card" => Self::Twitter(TwitterKey::Card),
            "twitter:site" => Self::Twitter(TwitterKey::Site),
            "twitter:site:id" => Self::Twitter(TwitterKey::SiteId),
            "twitter:creator" => Self::Twitter(TwitterKey::Creator),
            "twitter:creator:id" => Self::Twitter(TwitterKey::CreatorId),
            "twitter:description" => Self::Twitter(TwitterKey::Description),
            "twitter:title" => Self::Twitter(TwitterKey::Title),
            "twitter:image" => Self::Twitter(TwitterKey::Image),
            "twitter:image:alt" => Self::Twitter(TwitterKey::ImageAlt),
            "twitter:player" => Self::Twitter(TwitterKey::Player),
            "twitter:player:width" => Self::Twitter(TwitterKey::PlayerWidth),
            "twitter:player:height" => Self::Twitter(TwitterKey::PlayerHeight),
            "twitter:player:stream" => Self::Twitter(TwitterKey::PlayerStream),
            "twitter:app:name:iphone" => Self::Twitter(TwitterKey::App(Name, IPhone)),
            "twitter:app:url:iphone" => Self::Twitter(TwitterKey::App(Url, IPhone)),
            "twitter:app:id:iphone" => Self::Twitter(TwitterKey::App(Id, IPhone)),
            "twitter:app:name:ipad" => Self::Twitter(TwitterKey::App(Name, IPad)),
            "twitter:app:url:ipad" => Self::Twitter(TwitterKey::App(Url, IPad)),
            "twitter:app:id:ipad" => Self::Twitter(TwitterKey::App(Id, IPad)),
            "twitter:app:name:googleplay" => Self::Twitter(TwitterKey::App(Name, GooglePlay)),
            "twitter:app:url:googleplay" => Self::Twitter(TwitterKey::App(Url, GooglePlay)),
            "twitter:app:id:googleplay" => Self::Twitter(TwitterKey::App(Id, GooglePlay)),

            _ => return None,
        };
        Some(property)
    }

    /// Hand `content` to the owning namespace.
    pub(crate) fn apply(self, content: &str, meta: &mut Metadata) {
        match self {
            Self::Basic(key) => basic::apply(key, content, meta),
            Self::Image(key) => image::apply(key, content, &mut meta.images),
            Self::Video(key) => video::apply(key, content, &mut meta.videos),
            Self::Audio(key) => audio::apply(key, content, &mut meta.audios),
            Self::Music(key) => music::apply(key, content, &mut meta.music),
            Self::Article(key) => article::apply(key, content, &mut meta.article),
            Self::Book(key) => book::apply(key, content, &mut meta.book),
            Self::Profile(key) => profile::apply(key, content, &mut meta.profile),
            Self::Twitter(key) => twitter::apply(key, content, &mut meta.twitter),
        }
    }
}

/// Route a `meta` tag. `property` wins over `name`; the only `name` value
/// understood is `description`.
pub(crate) fn route_meta(attrs: &AttributeSet, meta: &mut Metadata) {
    if let Some(key) = attrs.get("property") {
        match Property::lookup(key) {
            Some(property) => property.apply(attrs.content(), meta),
            None => trace!(key, "ignoring unrecognized property"),
        }
        return;
    }

    if attrs
        .get("name")
        .is_some_and(|name| name.eq_ignore_ascii_case("description"))
    {
        attrs.content().clone_into(&mut meta.meta_description);
    }
}

/// Route a `link` tag; only favicon candidates are kept.
pub(crate) fn route_link(attrs: &AttributeSet, meta: &mut Metadata) {
    if attrs.get("rel").is_some_and(favicon::is_icon_rel) {
        favicon::apply(attrs, &mut meta.favicons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_tag(pairs: &[(&str, &str)]) -> AttributeSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn lookup_covers_every_namespace() {
        assert_eq!(Property::lookup("og:title"), Some(Property::Basic(BasicKey::Title)));
        assert_eq!(Property::lookup("og:image:width"), Some(Property::Image(ImageKey::Width)));
        assert_eq!(Property::lookup("video:actor:role"), Some(Property::Video(VideoKey::ActorRole)));
        assert_eq!(Property::lookup("og:audio:type"), Some(Property::Audio(AudioKey::Type)));
        assert_eq!(Property::lookup("music:song:disc"), Some(Property::Music(MusicKey::SongDisc)));
        assert_eq!(Property::lookup("article:tag"), Some(Property::Article(ArticleKey::Tag)));
        assert_eq!(Property::lookup("book:isbn"), Some(Property::Book(BookKey::Isbn)));
        assert_eq!(Property::lookup("profile:gender"), Some(Property::Profile(ProfileKey::Gender)));
        assert_eq!(
            Property::lookup("twitter:app:id:googleplay"),
            Some(Property::Twitter(TwitterKey::App(AppField::Id, AppPlatform::GooglePlay)))
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(Property::lookup("og:unknown"), None);
        assert_eq!(Property::lookup("OG:TITLE"), None);
        assert_eq!(Property::lookup("fb:app_id"), None);

        let mut meta = Metadata::default();
        route_meta(&meta_tag(&[("property", "fb:app_id"), ("content", "123")]), &mut meta);
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn property_takes_precedence_over_name() {
        let mut meta = Metadata::default();
        route_meta(
            &meta_tag(&[
                ("name", "description"),
                ("property", "og:description"),
                ("content", "og"),
            ]),
            &mut meta,
        );
        assert_eq!(meta.description, "og");
        assert_eq!(meta.meta_description, "");
    }

    #[test]
    fn name_description_fallback() {
        let mut meta = Metadata::default();
        route_meta(&meta_tag(&[("name", "description"), ("content", "plain")]), &mut meta);
        route_meta(&meta_tag(&[("name", "viewport"), ("content", "width=device-width")]), &mut meta);
        route_meta(&meta_tag(&[("name", "twitter:card"), ("content", "summary")]), &mut meta);

        assert_eq!(meta.meta_description, "plain");
        assert_eq!(meta.description, "");
        assert_eq!(meta.twitter.card, "");
    }

    #[test]
    fn link_routing_keeps_only_icons() {
        let mut meta = Metadata::default();
        route_link(&meta_tag(&[("rel", "stylesheet"), ("href", "main.css")]), &mut meta);
        route_link(&meta_tag(&[("rel", "APPLE-TOUCH-ICON"), ("href", "touch.png")]), &mut meta);
        route_link(&meta_tag(&[("href", "no-rel.png")]), &mut meta);

        assert_eq!(meta.favicons.len(), 1);
        assert_eq!(meta.favicons[0].name, "APPLE-TOUCH-ICON");
        assert_eq!(meta.favicons[0].url, "touch.png");
    }
}
