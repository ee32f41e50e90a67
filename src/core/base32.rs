//! Lowercase base32 encoding for subdomain construction.
//!
//! This is the RFC 4648 alphabet shifted to lowercase (`a-z2-7`), processed
//! in 5-byte groups with fixed shift/mask extraction. The tail group is
//! zero-padded before encoding and the fill symbols are stripped afterwards;
//! `=` padding is never emitted, so every output character is DNS-label-safe.

/// Encoding alphabet: RFC 4648 base32, lowercased.
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Trailing symbols produced purely by zero-padding, indexed by `len % 5`.
const FILL_SYMBOLS: [usize; 5] = [0, 6, 4, 3, 1];

/// Encode a byte sequence into lowercase base32 without padding.
///
/// Every 5-byte group expands to 8 symbols, MSB first. The final partial
/// group is zero-padded to 5 bytes, encoded, and the symbols covering only
/// the padding are removed from the end, so the result length is
/// `ceil(len * 8 / 5)`. Never fails.
///
/// # Examples
///
/// ```
/// use amp_cache_url::core::base32;
///
/// assert_eq!(base32::encode(b"foobar"), "mzxw6ytboi");
/// assert_eq!(base32::encode(&[]), "");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);

    let mut groups = data.chunks_exact(5);
    for group in groups.by_ref() {
        push_group(&mut out, group.try_into().unwrap());
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        let mut group = [0u8; 5];
        group[..tail.len()].copy_from_slice(tail);
        push_group(&mut out, group);
        out.truncate(out.len() - FILL_SYMBOLS[tail.len()]);
    }

    out
}

/// Expand one 5-byte group into eight 5-bit fields and map them through the
/// alphabet.
fn push_group(out: &mut String, group: [u8; 5]) {
    let fields = [
        group[0] >> 3,
        ((group[0] & 0x07) << 2) | (group[1] >> 6),
        (group[1] & 0x3f) >> 1,
        ((group[1] & 0x01) << 4) | (group[2] >> 4),
        ((group[2] & 0x0f) << 1) | (group[3] >> 7),
        (group[3] & 0x7f) >> 2,
        ((group[3] & 0x03) << 3) | (group[4] >> 5),
        group[4] & 0x1f,
    ];

    for field in fields {
        out.push(ALPHABET[field as usize] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc_vectors_lowercase_unpadded() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "my");
        assert_eq!(encode(b"fo"), "mzxq");
        assert_eq!(encode(b"foo"), "mzxw6");
        assert_eq!(encode(b"foob"), "mzxw6yq");
        assert_eq!(encode(b"fooba"), "mzxw6ytb");
        assert_eq!(encode(b"foobar"), "mzxw6ytboi");
    }

    #[test]
    fn test_full_group_boundaries() {
        assert_eq!(encode(&[0x00; 5]), "aaaaaaaa");
        assert_eq!(encode(&[0xff; 5]), "77777777");
        assert_eq!(encode(&[0xff; 10]).len(), 16);
    }

    #[test]
    fn test_tail_lengths_per_residue() {
        for len in 0..=12 {
            let data = vec![0xabu8; len];
            let expected = (len * 8).div_ceil(5);
            assert_eq!(encode(&data).len(), expected, "input length {}", len);
        }
    }

    #[test]
    fn test_output_stays_in_alphabet() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_single_byte_uses_high_bits() {
        // 0b10000000 -> fields 16, 0 -> "qa"
        assert_eq!(encode(&[0x80]), "qa");
    }
}
