//! `og:video`, its structured properties, and the `video:*` vocabulary.
//!
//! `video:*` keys describe the video object as a whole and land on the last
//! video record. Actors are a nested repeatable list with their own open item.

use metaparser_shared::Video;

use super::{open_mut, open_primary, parse_int};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VideoKey {
    Video,
    Url,
    SecureUrl,
    Type,
    Width,
    Height,
    Actor,
    ActorRole,
    Director,
    Writer,
    Duration,
    ReleaseDate,
    Tag,
    Series,
}

pub(crate) fn apply(key: VideoKey, content: &str, videos: &mut Vec<Video>) {
    if key == VideoKey::Video {
        open_primary(videos, content);
        return;
    }

    let video = open_mut(videos);
    match key {
        VideoKey::Url => content.clone_into(&mut video.url),
        VideoKey::SecureUrl => content.clone_into(&mut video.secure_url),
        VideoKey::Type => content.clone_into(&mut video.mime_type),
        VideoKey::Width => {
            if let Some(width) = parse_int(content) {
                video.width = width;
            }
        }
        VideoKey::Height => {
            if let Some(height) = parse_int(content) {
                video.height = height;
            }
        }
        VideoKey::Actor => {
            open_primary(&mut video.actors, content);
        }
        VideoKey::ActorRole => content.clone_into(&mut open_mut(&mut video.actors).role),
        VideoKey::Director => content.clone_into(&mut video.director),
        VideoKey::Writer => content.clone_into(&mut video.writer),
        VideoKey::Duration => {
            if let Some(duration) = parse_int(content) {
                video.duration = duration;
            }
        }
        VideoKey::ReleaseDate => content.clone_into(&mut video.release_date),
        VideoKey::Tag => video.tags.push(content.to_owned()),
        VideoKey::Series => content.clone_into(&mut video.series),
        VideoKey::Video => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actors_pair_with_their_roles() {
        let mut videos = Vec::new();
        apply(VideoKey::Video, "movie.swf", &mut videos);
        apply(VideoKey::Actor, "actor-a", &mut videos);
        apply(VideoKey::ActorRole, "hero", &mut videos);
        apply(VideoKey::Actor, "actor-b", &mut videos);
        apply(VideoKey::ActorRole, "villain", &mut videos);

        let actors = &videos[0].actors;
        assert_eq!(actors.len(), 2);
        assert_eq!((actors[0].url.as_str(), actors[0].role.as_str()), ("actor-a", "hero"));
        assert_eq!((actors[1].url.as_str(), actors[1].role.as_str()), ("actor-b", "villain"));
    }

    #[test]
    fn role_before_actor_is_absorbed() {
        let mut videos = Vec::new();
        apply(VideoKey::ActorRole, "narrator", &mut videos);
        apply(VideoKey::Actor, "actor-a", &mut videos);

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].actors.len(), 1);
        assert_eq!(videos[0].actors[0].url, "actor-a");
        assert_eq!(videos[0].actors[0].role, "narrator");
    }

    #[test]
    fn video_vocabulary_targets_last_video() {
        let mut videos = Vec::new();
        apply(VideoKey::Video, "one.mp4", &mut videos);
        apply(VideoKey::Video, "two.mp4", &mut videos);
        apply(VideoKey::Duration, "1236", &mut videos);
        apply(VideoKey::Tag, "a", &mut videos);
        apply(VideoKey::Tag, "b", &mut videos);
        apply(VideoKey::Director, "director", &mut videos);

        assert_eq!(videos[0].duration, 0);
        assert_eq!(videos[1].duration, 1236);
        assert_eq!(videos[1].tags, vec!["a", "b"]);
        assert_eq!(videos[1].director, "director");
    }

    #[test]
    fn malformed_duration_is_ignored() {
        let mut videos = Vec::new();
        apply(VideoKey::Duration, "two hours", &mut videos);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].duration, 0);
    }
}
