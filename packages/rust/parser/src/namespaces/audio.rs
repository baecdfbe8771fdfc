//! `og:audio` and its structured properties.

use metaparser_shared::Audio;

use super::{open_mut, open_primary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AudioKey {
    Audio,
    Url,
    SecureUrl,
    Type,
}

pub(crate) fn apply(key: AudioKey, content: &str, audios: &mut Vec<Audio>) {
    match key {
        AudioKey::Audio => {
            open_primary(audios, content);
        }
        AudioKey::Url => content.clone_into(&mut open_mut(audios).url),
        AudioKey::SecureUrl => content.clone_into(&mut open_mut(audios).secure_url),
        AudioKey::Type => content.clone_into(&mut open_mut(audios).mime_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bare_audios_stay_separate() {
        let mut audios = Vec::new();
        apply(AudioKey::Audio, "a.mp3", &mut audios);
        apply(AudioKey::Type, "audio/mpeg", &mut audios);
        apply(AudioKey::Audio, "b.ogg", &mut audios);

        assert_eq!(audios.len(), 2);
        assert_eq!(audios[0].mime_type, "audio/mpeg");
        assert_eq!(audios[1].url, "b.ogg");
        assert_eq!(audios[1].mime_type, "");
    }
}
