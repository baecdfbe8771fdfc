//! `og:image` and its structured properties.

use metaparser_shared::Image;

use super::{open_mut, open_primary, parse_int};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageKey {
    Image,
    Url,
    SecureUrl,
    Type,
    Width,
    Height,
    Alt,
}

pub(crate) fn apply(key: ImageKey, content: &str, images: &mut Vec<Image>) {
    if key == ImageKey::Image {
        open_primary(images, content);
        return;
    }

    let image = open_mut(images);
    match key {
        ImageKey::Url => content.clone_into(&mut image.url),
        ImageKey::SecureUrl => content.clone_into(&mut image.secure_url),
        ImageKey::Type => content.clone_into(&mut image.mime_type),
        ImageKey::Width => {
            if let Some(width) = parse_int(content) {
                image.width = width;
            }
        }
        ImageKey::Height => {
            if let Some(height) = parse_int(content) {
                image.height = height;
            }
        }
        ImageKey::Alt => content.clone_into(&mut image.alt),
        ImageKey::Image => {}
    }
}
