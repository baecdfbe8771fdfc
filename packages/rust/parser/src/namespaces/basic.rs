//! Basic Open Graph properties (`og:title`, `og:type`, ...).

use metaparser_shared::Metadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BasicKey {
    Title,
    Type,
    Url,
    Description,
    Determiner,
    Locale,
    LocaleAlternate,
    SiteName,
}

pub(crate) fn apply(key: BasicKey, content: &str, meta: &mut Metadata) {
    let content = content.to_owned();
    match key {
        BasicKey::Title => meta.title = content,
        BasicKey::Type => meta.og_type = content,
        BasicKey::Url => meta.url = content,
        BasicKey::Description => meta.description = content,
        BasicKey::Determiner => meta.determiner = content,
        BasicKey::Locale => meta.locale = content,
        BasicKey::LocaleAlternate => meta.locales_alternate.push(content),
        BasicKey::SiteName => meta.site_name = content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fields_overwrite() {
        let mut meta = Metadata::default();
        apply(BasicKey::Title, "first", &mut meta);
        apply(BasicKey::Title, "second", &mut meta);
        assert_eq!(meta.title, "second");
    }

    #[test]
    fn locale_alternates_append_in_order() {
        let mut meta = Metadata::default();
        apply(BasicKey::LocaleAlternate, "fr_FR", &mut meta);
        apply(BasicKey::LocaleAlternate, "es_ES", &mut meta);
        apply(BasicKey::LocaleAlternate, "fr_FR", &mut meta);
        assert_eq!(meta.locales_alternate, vec!["fr_FR", "es_ES", "fr_FR"]);
    }
}
