//! Path classification for cache-URL segment selection.

use crate::types::ServingMode;

/// Extensions served from the image endpoint.
const IMAGE_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "svg", "svgz", "tif", "tiff",
];

/// Extensions served from the font endpoint.
const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

/// Extension of the final path segment, if it has one.
///
/// Whatever follows the last `.` of the last segment, so `/a/b.tar.gz`
/// yields `gz` and `/.png` yields `png`. A trailing dot yields the empty
/// extension, which matches nothing.
fn path_extension(path: &str) -> Option<&str> {
    let basename = path.rsplit('/').next().unwrap_or_default();
    basename.rsplit_once('.').map(|(_, ext)| ext)
}

/// True when the path names an image resource.
pub fn is_image_path(path: &str) -> bool {
    matches!(path_extension(path), Some(ext) if IMAGE_EXTENSIONS.contains(&ext))
}

/// True when the path names a font resource.
pub fn is_font_path(path: &str) -> bool {
    matches!(path_extension(path), Some(ext) if FONT_EXTENSIONS.contains(&ext))
}

/// Choose the serving segment for `path` under the given mode.
///
/// Image and font paths win over the requested mode; the Viewer mode only
/// applies to plain content, and everything else is served as content.
pub fn path_segment(path: &str, serving_mode: Option<ServingMode>) -> &'static str {
    if is_image_path(path) {
        "/i"
    } else if is_font_path(path) {
        "/r"
    } else if serving_mode == Some(ServingMode::Viewer) {
        "/v"
    } else {
        "/c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_extraction() {
        assert_eq!(path_extension("/image.png"), Some("png"));
        assert_eq!(path_extension("/a/b.tar.gz"), Some("gz"));
        assert_eq!(path_extension("/.png"), Some("png"));
        assert_eq!(path_extension("/trailing."), Some(""));
        assert_eq!(path_extension("/no-extension"), None);
        assert_eq!(path_extension(""), None);
    }

    #[test]
    fn test_image_paths() {
        assert!(is_image_path("/photo.jpg"));
        assert!(is_image_path("/deep/dir/icon.svgz"));
        assert!(!is_image_path("/photo.jpg.html"));
        // Extension matching is case-sensitive.
        assert!(!is_image_path("/photo.PNG"));
    }

    #[test]
    fn test_font_paths() {
        assert!(is_font_path("/font.woff2"));
        assert!(is_font_path("/fonts/face.ttf"));
        assert!(!is_font_path("/font.woff3"));
    }

    #[test]
    fn test_segment_priorities() {
        assert_eq!(path_segment("/image.png", None), "/i");
        assert_eq!(path_segment("/font.otf", None), "/r");
        assert_eq!(path_segment("/doc.html", Some(ServingMode::Viewer)), "/v");
        assert_eq!(path_segment("/doc.html", None), "/c");
        assert_eq!(path_segment("", None), "/c");

        // Resource classification beats the requested mode.
        assert_eq!(path_segment("/image.png", Some(ServingMode::Viewer)), "/i");
        assert_eq!(path_segment("/doc.html", Some(ServingMode::Image)), "/c");
    }
}
