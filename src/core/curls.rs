//! Human-readable ("curls") domain encoding.

/// Rewrite a domain into its curls form.
///
/// The domain is first brought to its Unicode form (reversing any punycode
/// already present; the input is kept when conversion is not applicable),
/// literal hyphens are doubled, label separators become hyphens, and the
/// whole thing is re-encoded to ASCII-compatible form where possible. The
/// escaped Unicode form is kept when re-encoding fails or returns nothing.
///
/// The transform is returned verbatim; whether it fits a DNS label is the
/// caller's decision.
///
/// # Examples
///
/// ```
/// use amp_cache_url::to_curls_encoding;
///
/// assert_eq!(to_curls_encoding("hello-world.com"), "hello--world-com");
/// assert_eq!(to_curls_encoding("xn--bcher-kva.ch"), "xn--bcher-ch-65a");
/// ```
pub fn to_curls_encoding(domain: &str) -> String {
    let (unicode, _) = idna::domain_to_unicode(domain);
    let unicode = if unicode.is_empty() && !domain.is_empty() {
        domain.to_string()
    } else {
        unicode
    };

    // Order matters: escape existing hyphens before the separators become
    // hyphens themselves.
    let escaped = unicode.replace('-', "--").replace('.', "-");

    let encoded = match idna::domain_to_ascii(&escaped) {
        Ok(ascii) if !ascii.is_empty() => ascii,
        _ => escaped,
    };

    encoded.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_become_hyphens() {
        assert_eq!(to_curls_encoding("something.com"), "something-com");
        assert_eq!(to_curls_encoding("www.example.com"), "www-example-com");
    }

    #[test]
    fn test_hyphens_are_doubled() {
        assert_eq!(to_curls_encoding("hello-world.com"), "hello--world-com");
        assert_eq!(to_curls_encoding("hello--world.com"), "hello----world-com");
        assert_eq!(to_curls_encoding("en-us.example.com"), "en--us-example-com");
    }

    #[test]
    fn test_result_is_lowercased() {
        assert_eq!(to_curls_encoding("SOMETHING.COM"), "something-com");
        assert_eq!(to_curls_encoding("WWW.Example.Com"), "www-example-com");
    }

    #[test]
    fn test_punycode_input_is_decoded_first() {
        // The punycode and Unicode spellings of a host converge on the same
        // curls form.
        assert_eq!(to_curls_encoding("xn--bcher-kva.ch"), "xn--bcher-ch-65a");
        assert_eq!(to_curls_encoding("bücher.ch"), "xn--bcher-ch-65a");
    }

    #[test]
    fn test_unicode_domain_reencodes_to_ascii() {
        assert_eq!(to_curls_encoding("點看.com"), "xn---com-k47jg78q");
        assert_eq!(to_curls_encoding("مثال.واحد"), "xn----ymcbnnm7lf5a");
    }

    #[test]
    fn test_dotless_domain_passes_through() {
        assert_eq!(to_curls_encoding("localhost"), "localhost");
    }
}
