//! Cache-URL assembly.

use tracing::debug;
use url::Url;

use crate::cache::classify::path_segment;
use crate::core::subdomain::create_curls_subdomain;
use crate::error::CacheUrlError;
use crate::types::ServingMode;

/// Rewrite `url` into its cache URL under `domain_suffix`.
///
/// The origin host becomes the encoded subdomain, the path is classified
/// into a serving segment, and an `/s/` marker records that the origin was
/// fetched over https. The cache URL itself is always `https`, independent
/// of the origin scheme.
///
/// # Arguments
///
/// * `domain_suffix` - Cache domain placed after the encoded subdomain,
///   e.g. `cdn.ampproject.org`
/// * `url` - Origin URL to rewrite
/// * `serving_mode` - Optional serving mode; `None` behaves like
///   [`ServingMode::Content`]
///
/// # Errors
///
/// Fails when the trimmed URL is empty, when it cannot be parsed, or when it
/// parses without a host. The subdomain encoding itself never fails.
///
/// # Examples
///
/// ```
/// use amp_cache_url::{generate, ServingMode};
///
/// let cache = generate("cdn.ampproject.org", "https://www.example.com", None)?;
/// assert_eq!(cache, "https://www-example-com.cdn.ampproject.org/c/s/www.example.com");
///
/// let viewer = generate("cdn.ampproject.org", "https://www.example.com", Some(ServingMode::Viewer))?;
/// assert_eq!(viewer, "https://www-example-com.cdn.ampproject.org/v/s/www.example.com");
/// # Ok::<(), amp_cache_url::CacheUrlError>(())
/// ```
pub fn generate(
    domain_suffix: &str,
    url: &str,
    serving_mode: Option<ServingMode>,
) -> Result<String, CacheUrlError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CacheUrlError::EmptyUrl);
    }

    let parsed = Url::parse(url)?;
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(CacheUrlError::MissingHost),
    };

    let segment = path_segment(parsed.path(), serving_mode);
    let scheme_marker = if parsed.scheme() == "https" { "/s/" } else { "/" };
    let path = parsed.path().trim_end_matches('/');

    let subdomain = create_curls_subdomain(host);
    debug!(host, subdomain = %subdomain, "encoded origin host");

    let mut cache_url = String::with_capacity(url.len() + domain_suffix.len() + 64);
    cache_url.push_str("https://");
    cache_url.push_str(&subdomain);
    cache_url.push('.');
    cache_url.push_str(domain_suffix);
    cache_url.push_str(segment);
    cache_url.push_str(scheme_marker);
    cache_url.push_str(host);
    cache_url.push_str(path);

    match parsed.query() {
        Some(query) if !query.is_empty() => {
            cache_url.push('?');
            cache_url.push_str(query);
        }
        _ => {}
    }

    Ok(cache_url)
}
