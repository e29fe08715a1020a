use std::path::Path;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Optional sidebar logo
// ---------------------------------------------------------------------------

/// Outcome of loading the optional branding image.
#[derive(Debug, Clone)]
pub enum LogoAsset {
    Loaded { uri: String, bytes: Arc<[u8]> },
    /// Shown in the sidebar instead of the image.
    Missing { warning: String },
}

/// Read and validate the logo. Never fails: a missing or undecodable file
/// degrades to a warning.
pub fn load_logo(path: &Path) -> LogoAsset {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Logo {} not loaded: {e}", path.display());
            return LogoAsset::Missing {
                warning: format!("Image '{name}' not found."),
            };
        }
    };

    if let Err(e) = image::load_from_memory(&bytes) {
        log::warn!("Logo {} is not a readable image: {e}", path.display());
        return LogoAsset::Missing {
            warning: format!("Image '{name}' could not be read."),
        };
    }

    LogoAsset::Loaded {
        uri: format!("bytes://{name}"),
        bytes: bytes.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_logo_becomes_warning() {
        let dir = tempfile::tempdir().unwrap();
        match load_logo(&dir.path().join("images.png")) {
            LogoAsset::Missing { warning } => assert_eq!(warning, "Image 'images.png' not found."),
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_logo_becomes_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_logo(&path), LogoAsset::Missing { .. }));
    }

    #[test]
    fn test_valid_png_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.png");
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([253, 183, 19, 255]));
        img.save(&path).unwrap();

        match load_logo(&path) {
            LogoAsset::Loaded { uri, bytes } => {
                assert_eq!(uri, "bytes://images.png");
                assert!(!bytes.is_empty());
            }
            other => panic!("expected logo, got {other:?}"),
        }
    }
}
