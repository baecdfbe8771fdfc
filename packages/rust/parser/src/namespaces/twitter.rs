//! The `twitter:*` card vocabulary.
//!
//! App records are not a stack: each `twitter:app:<field>:<platform>` key
//! finds the record for its platform, wherever it sits in the list, and only
//! creates one when the platform has not been seen yet.

use metaparser_shared::{Twitter, TwitterApp};

use super::parse_int;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppPlatform {
    IPhone,
    IPad,
    GooglePlay,
}

impl AppPlatform {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::IPhone => "iphone",
            Self::IPad => "ipad",
            Self::GooglePlay => "googleplay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppField {
    Name,
    Url,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TwitterKey {
    Card,
    Site,
    SiteId,
    Creator,
    CreatorId,
    Description,
    Title,
    Image,
    ImageAlt,
    Player,
    PlayerWidth,
    PlayerHeight,
    PlayerStream,
    App(AppField, AppPlatform),
}

/// Find the app record for `platform`, creating it at the end if missing.
pub(crate) fn ensure_app(apps: &mut Vec<TwitterApp>, platform: AppPlatform) -> usize {
    let tag = platform.as_str();
    if let Some(index) = apps.iter().position(|app| app.platform == tag) {
        return index;
    }
    apps.push(TwitterApp {
        platform: tag.to_owned(),
        ..Default::default()
    });
    apps.len() - 1
}

pub(crate) fn apply(key: TwitterKey, content: &str, twitter: &mut Twitter) {
    match key {
        TwitterKey::Card => content.clone_into(&mut twitter.card),
        TwitterKey::Site => content.clone_into(&mut twitter.site),
        TwitterKey::SiteId => content.clone_into(&mut twitter.site_id),
        TwitterKey::Creator => content.clone_into(&mut twitter.creator),
        TwitterKey::CreatorId => content.clone_into(&mut twitter.creator_id),
        TwitterKey::Description => content.clone_into(&mut twitter.description),
        TwitterKey::Title => content.clone_into(&mut twitter.title),
        TwitterKey::Image => content.clone_into(&mut twitter.image),
        TwitterKey::ImageAlt => content.clone_into(&mut twitter.image_alt),
        TwitterKey::Player => content.clone_into(&mut twitter.player.url),
        TwitterKey::PlayerWidth => {
            if let Some(width) = parse_int(content) {
                twitter.player.width = width;
            }
        }
        TwitterKey::PlayerHeight => {
            if let Some(height) = parse_int(content) {
                twitter.player.height = height;
            }
        }
        TwitterKey::PlayerStream => content.clone_into(&mut twitter.player.stream),
        TwitterKey::App(field, platform) => {
            let index = ensure_app(&mut twitter.apps, platform);
            let app = &mut twitter.apps[index];
            match field {
                AppField::Name => content.clone_into(&mut app.name),
                AppField::Url => content.clone_into(&mut app.url),
                AppField::Id => {
                    if let Some(id) = parse_int(content) {
                        app.id = id;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(field: AppField, platform: AppPlatform) -> TwitterKey {
        TwitterKey::App(field, platform)
    }

    #[test]
    fn apps_are_keyed_by_platform_not_position() {
        let mut twitter = Twitter::default();
        apply(app(AppField::Id, AppPlatform::IPhone), "1", &mut twitter);
        apply(TwitterKey::Card, "app", &mut twitter);
        apply(app(AppField::Id, AppPlatform::IPad), "2", &mut twitter);
        apply(app(AppField::Name, AppPlatform::IPhone), "Cannonball", &mut twitter);

        assert_eq!(twitter.apps.len(), 2);
        assert_eq!(twitter.apps[0].platform, "iphone");
        assert_eq!(twitter.apps[0].id, 1);
        assert_eq!(twitter.apps[0].name, "Cannonball");
        assert_eq!(twitter.apps[1].platform, "ipad");
        assert_eq!(twitter.apps[1].id, 2);
        assert_eq!(twitter.apps[1].name, "");
    }

    #[test]
    fn ensure_app_is_idempotent() {
        let mut apps = Vec::new();
        assert_eq!(ensure_app(&mut apps, AppPlatform::GooglePlay), 0);
        assert_eq!(ensure_app(&mut apps, AppPlatform::IPhone), 1);
        assert_eq!(ensure_app(&mut apps, AppPlatform::GooglePlay), 0);
        assert_eq!(apps.len(), 2);
    }

    #[test]
    fn malformed_app_id_still_registers_platform() {
        let mut twitter = Twitter::default();
        apply(app(AppField::Id, AppPlatform::IPad), "not-a-number", &mut twitter);

        assert_eq!(twitter.apps.len(), 1);
        assert_eq!(twitter.apps[0].platform, "ipad");
        assert_eq!(twitter.apps[0].id, 0);
    }

    #[test]
    fn player_dimensions() {
        let mut twitter = Twitter::default();
        apply(TwitterKey::Player, "https://example.com/embed", &mut twitter);
        apply(TwitterKey::PlayerWidth, "480", &mut twitter);
        apply(TwitterKey::PlayerHeight, "wide", &mut twitter);

        assert_eq!(twitter.player.url, "https://example.com/embed");
        assert_eq!(twitter.player.width, 480);
        assert_eq!(twitter.player.height, 0);
    }
}
