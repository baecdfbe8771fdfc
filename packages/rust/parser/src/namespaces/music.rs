//! The `music:*` vocabulary.

use metaparser_shared::Music;

use super::{open_mut, open_primary, parse_int};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MusicKey {
    Musician,
    Album,
    AlbumDisc,
    AlbumTrack,
    Song,
    SongDisc,
    SongTrack,
    ReleaseDate,
    Creator,
    Duration,
}

pub(crate) fn apply(key: MusicKey, content: &str, music: &mut Music) {
    match key {
        MusicKey::Musician => music.musicians.push(content.to_owned()),
        MusicKey::Album => content.clone_into(&mut music.album.url),
        MusicKey::AlbumDisc => {
            if let Some(disc) = parse_int(content) {
                music.album.disc = disc;
            }
        }
        MusicKey::AlbumTrack => {
            if let Some(track) = parse_int(content) {
                music.album.track = track;
            }
        }
        MusicKey::Song => {
            open_primary(&mut music.songs, content);
        }
        MusicKey::SongDisc => {
            let song = open_mut(&mut music.songs);
            if let Some(disc) = parse_int(content) {
                song.disc = disc;
            }
        }
        MusicKey::SongTrack => {
            let song = open_mut(&mut music.songs);
            if let Some(track) = parse_int(content) {
                song.track = track;
            }
        }
        MusicKey::ReleaseDate => content.clone_into(&mut music.release_date),
        MusicKey::Creator => content.clone_into(&mut music.creator),
        MusicKey::Duration => {
            if let Some(duration) = parse_int(content) {
                music.duration = duration;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_and_track_land_on_the_same_song() {
        let mut music = Music::default();
        apply(MusicKey::Song, "song-1", &mut music);
        apply(MusicKey::SongDisc, "1", &mut music);
        apply(MusicKey::SongTrack, "2", &mut music);
        apply(MusicKey::Song, "song-2", &mut music);
        apply(MusicKey::SongTrack, "7", &mut music);

        assert_eq!(music.songs.len(), 2);
        assert_eq!((music.songs[0].disc, music.songs[0].track), (1, 2));
        assert_eq!((music.songs[1].disc, music.songs[1].track), (0, 7));
    }

    #[test]
    fn track_before_song_opens_first_record() {
        let mut music = Music::default();
        apply(MusicKey::SongTrack, "3", &mut music);
        apply(MusicKey::Song, "song-1", &mut music);

        assert_eq!(music.songs.len(), 1);
        assert_eq!(music.songs[0].url, "song-1");
        assert_eq!(music.songs[0].track, 3);
    }

    #[test]
    fn album_fields() {
        let mut music = Music::default();
        apply(MusicKey::Album, "album-url", &mut music);
        apply(MusicKey::AlbumDisc, "2", &mut music);
        apply(MusicKey::AlbumTrack, "x", &mut music);

        assert_eq!(music.album.url, "album-url");
        assert_eq!(music.album.disc, 2);
        assert_eq!(music.album.track, 0);
    }
}
