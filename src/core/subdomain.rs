//! Subdomain selection: readable curls encoding with a hash fallback.

use tracing::debug;

use crate::core::bidi;
use crate::core::curls::to_curls_encoding;
use crate::core::fallback::hash_subdomain;

/// Longest DNS label the cache frontend will accept.
const MAX_LABEL_LEN: usize = 63;

/// Produce the cache subdomain for `domain`.
///
/// Eligible domains get the human-readable curls encoding. Hosts without a
/// label separator, hosts over the DNS label limit, hosts carrying the
/// punycode-colliding hyphen pattern, and hosts mixing script directions
/// route to the deterministic hash fallback instead. A readable encoding
/// that itself acquires the colliding pattern is wrapped as `0-...-0`
/// rather than discarded.
///
/// Total function: every input yields a valid DNS label, and the same input
/// always yields the same label.
///
/// # Examples
///
/// ```
/// use amp_cache_url::create_curls_subdomain;
///
/// assert_eq!(create_curls_subdomain("hello-world.com"), "hello--world-com");
/// assert_eq!(create_curls_subdomain("en-us.example.com"), "0-en--us-example-com-0");
/// assert_eq!(create_curls_subdomain("localhost").len(), 52);
/// ```
pub fn create_curls_subdomain(domain: &str) -> String {
    if !is_eligible_for_readable_encoding(domain) {
        debug!(domain, "domain ineligible for readable encoding, hashing");
        return hash_subdomain(domain);
    }

    let curls = to_curls_encoding(domain);
    if curls.is_empty() || curls.len() > MAX_LABEL_LEN {
        debug!(domain, encoded = %curls, "curls encoding outgrew the label limit, hashing");
        return hash_subdomain(domain);
    }

    if has_invalid_hyphens(&curls) {
        debug!(domain, encoded = %curls, "wrapping punycode-colliding hyphens");
        return format!("0-{curls}-0");
    }

    curls
}

/// True when bytes 2-3 are `--` without the `xn` prefix that marks punycode.
///
/// Registrars reserve that shape for ASCII-compatible encodings, so a label
/// exhibiting it without the `xn` prefix would collide with them.
pub(crate) fn has_invalid_hyphens(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    bytes.len() >= 4
        && bytes[2] == b'-'
        && bytes[3] == b'-'
        && !(bytes[0] == b'x' && bytes[1] == b'n')
}

/// Gate for the readable encoding path.
///
/// The domain must not carry the colliding hyphen pattern, must fit a DNS
/// label as given, must contain a label separator, and its Unicode form must
/// not mix script directions. Purely-RTL domains pass the direction check.
fn is_eligible_for_readable_encoding(domain: &str) -> bool {
    if has_invalid_hyphens(domain) {
        return false;
    }

    let (unicode, _) = idna::domain_to_unicode(domain);

    domain.len() <= MAX_LABEL_LEN && !bidi::has_mixed_direction(&unicode) && domain.contains('.')
}
