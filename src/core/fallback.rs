//! Hash fallback for domains that cannot be encoded readably.

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::core::base32;

/// Digest framing: five `0xFF` bytes ahead of the digest, three `0x00` after.
/// Together with the 32-byte digest this makes 40 bytes, a whole number of
/// base32 groups, so the encoder never strips fill symbols here.
const FRAME_PREFIX: [u8; 5] = [0xff; 5];
const FRAME_SUFFIX: [u8; 3] = [0x00; 3];

/// Base32 symbols spanned by the frame prefix.
const PREFIX_SYMBOLS: usize = FRAME_PREFIX.len() * 8 / 5;

/// Build the fixed-length hash subdomain for `domain`.
///
/// SHA-256 of the raw domain bytes, framed, base32-encoded, then sliced to
/// the symbols covering exactly the digest: always 52 lowercase characters,
/// deterministic per input, and a valid DNS label.
///
/// # Examples
///
/// ```
/// use amp_cache_url::hash_subdomain;
///
/// let label = hash_subdomain("localhost");
/// assert_eq!(label, "jgla3zmib2ggq5buc4hwi5taloh6jlvzukddfr4zltz3vay5s5rq");
/// assert_eq!(label.len(), 52);
/// ```
pub fn hash_subdomain(domain: &str) -> String {
    let digest = Sha256::digest(domain.as_bytes());
    trace!(domain, digest = %hex::encode(&digest), "hash fallback digest");

    let mut framed = Vec::with_capacity(FRAME_PREFIX.len() + digest.len() + FRAME_SUFFIX.len());
    framed.extend_from_slice(&FRAME_PREFIX);
    framed.extend_from_slice(&digest);
    framed.extend_from_slice(&FRAME_SUFFIX);

    let encoded = base32::encode(&framed);
    let digest_symbols = (digest.len() * 8).div_ceil(5);

    encoded[PREFIX_SYMBOLS..PREFIX_SYMBOLS + digest_symbols].to_string()
}
