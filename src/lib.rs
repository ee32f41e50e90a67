//! Cache-URL generation for AMP-style edge caches.
//!
//! This crate converts an arbitrary origin URL into its cache URL under a
//! content-delivery domain suffix, following the deterministic "curls"
//! encoding scheme used by edge-caching proxies: the origin host becomes a
//! single DNS-label-safe subdomain of the cache domain.
//!
//! # Features
//!
//! - **Human-readable subdomains**: eligible hosts are rewritten with
//!   hyphen doubling, dot-to-hyphen substitution, and punycode re-encoding
//!   (`www.example.com` → `www-example-com`)
//! - **Deterministic hash fallback**: hosts that cannot be encoded safely
//!   get a fixed 52-character base32 label derived from SHA-256
//! - **Total encoding path**: every non-empty URL yields *some* valid DNS
//!   label; malformed hosts route to the fallback instead of erroring
//! - **Path classification**: image, font, and viewer resources are served
//!   from their own cache path segments
//!
//! # Quick Start
//!
//! ```
//! use amp_cache_url::{generate, create_curls_subdomain};
//!
//! // Rewrite an origin URL into its cache URL
//! let cache = generate("cdn.ampproject.org", "https://www.example.com", None)?;
//! assert_eq!(cache, "https://www-example-com.cdn.ampproject.org/c/s/www.example.com");
//!
//! // Hyphens in the host are escaped by doubling
//! assert_eq!(create_curls_subdomain("hello-world.com"), "hello--world-com");
//!
//! // Hosts without a label separator fall back to a fixed-length hash
//! let label = create_curls_subdomain("localhost");
//! assert_eq!(label.len(), 52);
//! # Ok::<(), amp_cache_url::CacheUrlError>(())
//! ```
//!
//! # Cache-URL shape
//!
//! `https://<subdomain>.<suffix><segment><scheme-marker><host><path>[?<query>]`
//!
//! | Piece | Meaning |
//! |-------|---------|
//! | subdomain | curls encoding of the host, or its hash fallback |
//! | segment | `/i` images, `/r` fonts, `/v` viewer, `/c` content |
//! | scheme-marker | `/s/` when the origin is https, `/` otherwise |
//!
//! The cache URL scheme is always `https`; only the marker reflects the
//! origin scheme.
//!
//! # Error Handling
//!
//! Only [`generate`] can fail, and only at the URL-handling surface (empty
//! input, unparseable URL, missing host); see [`CacheUrlError`]. The
//! subdomain encoders are total functions.

// Re-export main functionality
pub use self::cache::{generate, is_font_path, is_image_path, path_segment};
pub use self::core::{create_curls_subdomain, hash_subdomain, to_curls_encoding};
pub use self::error::CacheUrlError;
pub use self::types::ServingMode;

// Module declarations
pub mod cache;
pub mod core;
pub mod error;
pub mod types;
