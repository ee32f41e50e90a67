//! Core data types for cache-URL generation.

/// How the cached resource is served.
///
/// Selects the path-classification prefix of the cache URL. Only
/// [`ServingMode::Viewer`] changes the prefix directly; image and font paths
/// are classified from the path itself regardless of the requested mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServingMode {
    /// Plain cached documents (the default).
    #[default]
    Content,
    /// Documents framed by a viewer.
    Viewer,
    /// Signed-exchange packages.
    WebPackage,
    /// Certificates for signed exchanges.
    Certificate,
    /// Cached images.
    Image,
}

impl ServingMode {
    /// Canonical lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServingMode::Content => "content",
            ServingMode::Viewer => "viewer",
            ServingMode::WebPackage => "web_package",
            ServingMode::Certificate => "certificate",
            ServingMode::Image => "image",
        }
    }

    /// Parse a canonical mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "content" => Some(ServingMode::Content),
            "viewer" => Some(ServingMode::Viewer),
            "web_package" => Some(ServingMode::WebPackage),
            "certificate" => Some(ServingMode::Certificate),
            "image" => Some(ServingMode::Image),
            _ => None,
        }
    }
}
