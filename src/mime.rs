use std::path::Path;

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Guess the content type from the file extension.
pub fn content_type_for(path: &Path) -> String {
    let content_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    if content_type == FALLBACK_CONTENT_TYPE {
        tracing::debug!(
            "No content type known for {}, falling back to {}",
            path.display(),
            FALLBACK_CONTENT_TYPE
        );
    }

    content_type.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png() {
        assert_eq!(content_type_for(Path::new("photo.png")), "image/png");
    }

    #[test]
    fn test_jpeg() {
        assert_eq!(content_type_for(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("photo.jpeg")), "image/jpeg");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(content_type_for(Path::new("PHOTO.PNG")), "image/png");
    }

    #[test]
    fn test_uses_last_extension() {
        assert_eq!(
            content_type_for(Path::new("/tmp/archive.tar.gif")),
            "image/gif"
        );
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(
            content_type_for(Path::new("image.notarealextension")),
            FALLBACK_CONTENT_TYPE
        );
    }

    #[test]
    fn test_missing_extension_falls_back() {
        assert_eq!(content_type_for(Path::new("README")), FALLBACK_CONTENT_TYPE);
    }
}
