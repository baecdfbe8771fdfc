//! HTTP retrieval of documents for the metadata parser.
//!
//! The parser itself only reads bytes. This crate turns a user-supplied
//! target into a URL, fetches the page with bounded size and redirects,
//! and hands the body to [`metaparser_parser::parse_html`]. It also hosts
//! the DOM-based icon extractor, [`extract_icons`].

mod icons;

use std::time::Duration;

use metaparser_shared::{FetchConfig, FetchError, Metadata, MetaparserError, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument};
use url::Url;

pub use icons::{IconSet, extract_icons, fetch_icons};

// ---------------------------------------------------------------------------
// Fetch options
// ---------------------------------------------------------------------------

/// Request limits for a single fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Bodies of this many bytes or more are rejected.
    pub max_body_bytes: u64,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            timeout_secs: cfg.timeout_secs,
            max_body_bytes: cfg.max_body_bytes,
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// A fetched document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    /// `Content-Type` header, empty when absent.
    pub content_type: String,
    pub body: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Turn user input into an absolute URL.
///
/// Surrounding whitespace is trimmed and `http://` is assumed when the input
/// carries no `http:`/`https:` scheme.
pub fn normalize_url(raw: &str) -> std::result::Result<Url, FetchError> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http:") || lower.starts_with("https:") {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    };

    Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        message: e.to_string(),
    })
}

/// Fetch `url` and return its body, enforcing the configured limits.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_page(url: &Url, opts: &FetchOptions) -> Result<FetchedPage> {
    let client = build_client(opts)?;
    let target = url.as_str();

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| FetchError::transport(target, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: target.to_owned(),
            status: status.as_u16(),
        }
        .into());
    }

    let limit = opts.max_body_bytes;
    if let Some(len) = response.content_length() {
        if len >= limit {
            return Err(FetchError::BodyTooLarge {
                url: target.to_owned(),
                limit,
            }
            .into());
        }
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| FetchError::transport(target, e))?
    {
        body.extend_from_slice(&chunk);
        if body.len() as u64 >= limit {
            return Err(FetchError::BodyTooLarge {
                url: target.to_owned(),
                limit,
            }
            .into());
        }
    }

    if body.is_empty() {
        return Err(FetchError::EmptyBody {
            url: target.to_owned(),
        }
        .into());
    }

    debug!(
        final_url = %final_url,
        bytes = body.len(),
        content_type = %content_type,
        "page fetched"
    );

    Ok(FetchedPage {
        url: final_url,
        content_type,
        body,
    })
}

/// Fetch `url` and parse the metadata in its head.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_metadata(url: &Url, opts: &FetchOptions) -> Result<Metadata> {
    let page = fetch_page(url, opts).await?;
    let metadata = metaparser_parser::parse_html(page.body.as_slice())?;

    info!(
        title = %metadata.title(),
        images = metadata.images.len(),
        favicons = metadata.favicons.len(),
        "metadata extracted"
    );
    Ok(metadata)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_client(opts: &FetchOptions) -> Result<Client> {
    Client::builder()
        .user_agent(opts.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(opts.max_redirects))
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()
        .map_err(|e| {
            MetaparserError::from(FetchError::transport(
                "<client>",
                format!("failed to build HTTP client: {e}"),
            ))
        })
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn full_head() -> String {
        std::fs::read_to_string("../../../fixtures/html/full-head.html").expect("read fixture")
    }

    fn server_url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{p}", server.uri())).unwrap()
    }

    #[test]
    fn test_normalize_url_adds_scheme() {
        let url = normalize_url("  example.com/page ").unwrap();
        assert_eq!(url.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_normalize_url_keeps_https() {
        let url = normalize_url("https://example.com").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        let err = normalize_url("http://").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_options_from_config() {
        let cfg = FetchConfig {
            timeout_secs: 5,
            max_body_bytes: 1024,
            max_redirects: 2,
            user_agent: "metaparser-test/1".into(),
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.timeout_secs, 5);
        assert_eq!(opts.max_body_bytes, 1024);
        assert_eq!(opts.max_redirects, 2);
        assert_eq!(opts.user_agent, "metaparser-test/1");
    }

    #[tokio::test]
    async fn test_fetch_metadata_from_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(full_head())
                    .insert_header("content-type", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let meta = fetch_metadata(&server_url(&server, "/article"), &FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(meta.title, "sample title");
        assert_eq!(meta.twitter.apps.len(), 3);
        assert_eq!(meta.favicons.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_page_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "metaparser-test/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>ua</title>"))
            .mount(&server)
            .await;

        let opts = FetchOptions {
            user_agent: "metaparser-test/1".into(),
            ..FetchOptions::default()
        };
        let page = fetch_page(&server_url(&server, "/"), &opts).await.unwrap();
        assert_eq!(page.body, b"<title>ua</title>");
    }

    #[tokio::test]
    async fn test_fetch_page_reports_final_url_after_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>moved</title>"))
            .mount(&server)
            .await;

        let page = fetch_page(&server_url(&server, "/old"), &FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(page.url.path(), "/new");
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetch_page(&server_url(&server, "/missing"), &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_oversized_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
            .mount(&server)
            .await;

        let opts = FetchOptions {
            max_body_bytes: 16,
            ..FetchOptions::default()
        };
        let err = fetch_page(&server_url(&server, "/big"), &opts).await.unwrap_err();
        assert!(matches!(
            err,
            MetaparserError::Fetch(FetchError::BodyTooLarge { limit: 16, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = fetch_page(&server_url(&server, "/"), &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty response"));
    }
}
