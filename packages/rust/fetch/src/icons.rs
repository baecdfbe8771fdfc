//! Icon discovery over a full DOM.
//!
//! Unlike the streaming parser, which records every `rel` containing "icon"
//! as written, this extractor only accepts the well-known icon relations and
//! resolves each `href` against the document's base URL.

use std::sync::LazyLock;

use metaparser_shared::Result;
use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{FetchOptions, fetch_page};

static BASE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head base[href]").expect("valid base selector"));

static ICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(concat!(
        r#"link[rel="icon"], link[rel="shortcut icon"], "#,
        r#"link[rel="apple-touch-icon"], link[rel="apple-touch-icon-precomposed"], "#,
        r#"link[rel="ICON"], link[rel="SHORTCUT ICON"], "#,
        r#"link[rel="APPLE-TOUCH-ICON"], link[rel="APPLE-TOUCH-ICON-PRECOMPOSED"]"#,
    ))
    .expect("valid icon selector")
});

/// Absolute icon URLs found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSet {
    /// URL relative hrefs were resolved against.
    pub base_url: Url,
    /// Icons in document order.
    pub icons: Vec<Url>,
}

/// Extract icon links from `html`, resolving them against the document base.
pub fn extract_icons(page_url: &Url, html: &str) -> IconSet {
    let doc = Html::parse_document(html);
    let base_url = base_url(page_url, &doc);

    let mut icons = Vec::new();
    for link in doc.select(&ICON_SELECTOR) {
        let Some(href) = link.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        match base_url.join(href) {
            Ok(icon) => icons.push(icon),
            Err(e) => warn!(href, error = %e, "skipping unresolvable icon href"),
        }
    }

    debug!(base = %base_url, count = icons.len(), "icons extracted");
    IconSet { base_url, icons }
}

/// Fetch `url` and extract its icons.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_icons(url: &Url, opts: &FetchOptions) -> Result<IconSet> {
    let page = fetch_page(url, opts).await?;
    let html = String::from_utf8_lossy(&page.body);
    Ok(extract_icons(&page.url, &html))
}

/// First `<base href>` in the head, resolved against the page URL.
fn base_url(page_url: &Url, doc: &Html) -> Url {
    doc.select(&BASE_SELECTOR)
        .next()
        .and_then(|base| base.value().attr("href"))
        .filter(|href| !href.is_empty())
        .and_then(|href| page_url.join(href).ok())
        .unwrap_or_else(|| page_url.clone())
}
