//! Favicon candidates from `<link rel="...icon...">`.

use metaparser_shared::Favicon;

use crate::attributes::AttributeSet;

/// True when `rel` names an icon in any ASCII case (`icon`, `shortcut icon`,
/// `apple-touch-icon`, `ICON`, ...).
pub(crate) fn is_icon_rel(rel: &str) -> bool {
    rel.to_ascii_lowercase().contains("icon")
}

/// Record one favicon link. Every candidate becomes its own record.
pub(crate) fn apply(attrs: &AttributeSet, favicons: &mut Vec<Favicon>) {
    let field = |name: &str| attrs.get(name).unwrap_or_default().to_owned();
    favicons.push(Favicon {
        name: field("rel"),
        url: field("href"),
        mime_type: field("type"),
        sizes: field("sizes"),
    });
}
