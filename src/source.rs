//! Filesystem image source.
//!
//! Fulfills load requests by decoding the image at the requested path,
//! yielding the natural pixel dimensions the engine needs for
//! fit-to-container and overlay sizing. A host embedding the viewer in
//! another environment (e.g. a browser frame) supplies its own source
//! and feeds completions the same way.

use std::path::PathBuf;

use image::GenericImageView;

use crate::loader::{LoadOutcome, LoadRequest};
use crate::message::LoadMessage;

/// Resolves load requests against the local filesystem.
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    /// Source rooted at the current working directory.
    pub fn new() -> Self {
        Self::with_root(".")
    }

    /// Source rooted at an explicit directory; request paths are
    /// resolved relative to it.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Fulfill a request, producing the completion message to feed
    /// back into the viewer. Never fails: decode errors become a
    /// failure outcome.
    pub fn resolve(&self, request: &LoadRequest) -> LoadMessage {
        let path = self.root.join(&request.path);
        let outcome = match image::open(&path) {
            Ok(img) => {
                let (width, height) = img.dimensions();
                log::trace!("Decoded {}: {}x{}", path.display(), width, height);
                LoadOutcome::Success { width, height }
            }
            Err(err) => LoadOutcome::Failure {
                reason: err.to_string(),
            },
        };
        LoadMessage::Completed {
            token: request.token,
            outcome,
        }
    }
}

impl Default for FsImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("boxview-test-{}", name));
        std::fs::create_dir_all(dir.join("images")).expect("create temp dir");
        dir
    }

    #[test]
    fn test_resolve_decodes_dimensions() {
        let dir = temp_dir("ok");
        let img = image::RgbaImage::new(7, 5);
        img.save(dir.join("images/tiny.png")).expect("write png");

        let source = FsImageSource::with_root(&dir);
        let request = LoadRequest {
            token: 3,
            path: "images/tiny.png".to_string(),
        };
        let LoadMessage::Completed { token, outcome } = source.resolve(&request);
        assert_eq!(token, 3);
        assert_eq!(outcome, LoadOutcome::Success { width: 7, height: 5 });
    }

    #[test]
    fn test_resolve_missing_file_is_failure() {
        let dir = temp_dir("missing");
        let source = FsImageSource::with_root(&dir);
        let request = LoadRequest {
            token: 1,
            path: "images/nope.png".to_string(),
        };
        let LoadMessage::Completed { token, outcome } = source.resolve(&request);
        assert_eq!(token, 1);
        assert!(matches!(outcome, LoadOutcome::Failure { .. }));
    }

    #[test]
    fn test_resolve_undecodable_file_is_failure() {
        let dir = temp_dir("garbage");
        std::fs::write(dir.join("images/bad.png"), b"not an image").expect("write file");

        let source = FsImageSource::with_root(&dir);
        let request = LoadRequest {
            token: 2,
            path: "images/bad.png".to_string(),
        };
        let LoadMessage::Completed { outcome, .. } = source.resolve(&request);
        assert!(matches!(outcome, LoadOutcome::Failure { .. }));
    }
}
