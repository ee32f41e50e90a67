//! Core subdomain-encoding primitives.
//!
//! This module contains the pure encoding pipeline:
//! - base32 codec for the hash fallback
//! - curls (human-readable) domain transcoding
//! - SHA-256 hash fallback
//! - script-direction classification
//! - subdomain selection tying the pieces together

pub mod base32;
pub mod bidi;
pub mod curls;
pub mod fallback;
pub mod subdomain;

// Re-export main functionality
pub use curls::to_curls_encoding;
pub use fallback::hash_subdomain;
pub use subdomain::create_curls_subdomain;
