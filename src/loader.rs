//! Image load lifecycle.
//!
//! `load` is the only asynchronous boundary in the component: it
//! records a pending request and returns immediately; the decode
//! result arrives later as a completion message. Each request carries
//! a generation token, and only a completion bearing the current token
//! may transition the state: a newer `load` supersedes an in-flight
//! one, which is the only cancellation mechanism. There are no
//! timeouts, so a hung load leaves the viewer disabled in `Loading`.

use crate::constants::loader as defaults;
use crate::error::ViewerError;

/// Lifecycle state of the displayed image.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight; all interactive input is ignored
    Loading,
    /// The image is displayed and input is accepted
    Loaded,
    /// The most recent request failed
    Failed(ViewerError),
}

/// A pending load request for the host (or a bundled source) to
/// fulfill.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    /// Generation token to echo back in the completion message
    pub token: u64,
    /// Full path: base path joined with the image name
    pub path: String,
}

/// Result of fulfilling a load request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Decode succeeded; natural pixel dimensions of the image
    Success { width: u32, height: u32 },
    /// Fetch or decode failed
    Failure { reason: String },
}

/// Manages the asynchronous load/error lifecycle and gates the rest of
/// the component while not `Loaded`.
#[derive(Debug, Clone)]
pub struct ImageLoadController {
    base_path: String,
    current_name: Option<String>,
    state: LoadState,
    generation: u64,
    natural_size: Option<(u32, u32)>,
}

impl ImageLoadController {
    pub fn new() -> Self {
        Self {
            base_path: defaults::DEFAULT_BASE_PATH.to_string(),
            current_name: None,
            state: LoadState::Idle,
            generation: 0,
            natural_size: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether the image is loaded and input may be accepted.
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Natural (unscaled) pixel size, known only after a successful
    /// load.
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.natural_size
    }

    /// Name of the image currently displayed or being loaded.
    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// The path the current request resolves to.
    pub fn current_path(&self) -> Option<String> {
        self.current_name
            .as_deref()
            .map(|name| join_path(&self.base_path, name))
    }

    /// Start loading `name` under the current base path.
    ///
    /// Bumps the generation token so that any in-flight request is
    /// superseded, clears the previous natural size (it belongs to the
    /// old image), and enters `Loading`.
    pub fn load(&mut self, name: &str) -> LoadRequest {
        self.generation += 1;
        self.current_name = Some(name.to_string());
        self.natural_size = None;
        self.state = LoadState::Loading;
        let path = join_path(&self.base_path, name);
        log::debug!("Attempting to load image: {}", path);
        LoadRequest {
            token: self.generation,
            path,
        }
    }

    /// Apply a completion message.
    ///
    /// Returns false when the token is stale (a newer request
    /// superseded this one); the completion is discarded and the state
    /// is untouched.
    pub fn complete(&mut self, token: u64, outcome: LoadOutcome) -> bool {
        if token != self.generation {
            log::debug!(
                "Discarding stale load completion (token {}, current {})",
                token,
                self.generation
            );
            return false;
        }
        match outcome {
            LoadOutcome::Success { width, height } => {
                self.natural_size = Some((width, height));
                self.state = LoadState::Loaded;
                log::debug!("Image loaded: {}x{}", width, height);
            }
            LoadOutcome::Failure { reason } => {
                let path = self
                    .current_path()
                    .unwrap_or_else(|| self.base_path.clone());
                log::warn!("Failed to load image {}: {}", path, reason);
                self.state = LoadState::Failed(ViewerError::load_failure(path, Some(reason)));
            }
        }
        true
    }

    /// Change the base path and reload the current image under it.
    ///
    /// The path is normalized to end with exactly one separator at the
    /// join point; no other normalization is applied.
    pub fn set_base_path(&mut self, path: &str) -> Option<LoadRequest> {
        self.base_path = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };
        log::debug!("Base path set to {}", self.base_path);
        let name = self.current_name.clone()?;
        Some(self.load(&name))
    }
}

impl Default for ImageLoadController {
    fn default() -> Self {
        Self::new()
    }
}

/// Join the base path and image name with exactly one separator at the
/// join point.
fn join_path(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let controller = ImageLoadController::new();
        assert_eq!(*controller.state(), LoadState::Idle);
        assert!(!controller.is_loaded());
        assert_eq!(controller.natural_size(), None);
    }

    #[test]
    fn test_load_success_lifecycle() {
        let mut controller = ImageLoadController::new();
        let request = controller.load("cat.png");
        assert_eq!(request.path, "images/cat.png");
        assert_eq!(*controller.state(), LoadState::Loading);
        assert!(!controller.is_loaded());

        assert!(controller.complete(
            request.token,
            LoadOutcome::Success {
                width: 400,
                height: 300
            }
        ));
        assert!(controller.is_loaded());
        assert_eq!(controller.natural_size(), Some((400, 300)));
    }

    #[test]
    fn test_load_failure_records_path() {
        let mut controller = ImageLoadController::new();
        let request = controller.load("missing.png");
        controller.complete(
            request.token,
            LoadOutcome::Failure {
                reason: "404".to_string(),
            },
        );
        match controller.state() {
            LoadState::Failed(err) => {
                assert_eq!(err.to_string(), "Failed to load: images/missing.png");
                assert_eq!(err.details(), Some("404"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = ImageLoadController::new();
        let first = controller.load("a.jpg");
        let second = controller.load("b.jpg");

        // b completes first, then a's late callback arrives
        assert!(controller.complete(
            second.token,
            LoadOutcome::Success {
                width: 100,
                height: 100
            }
        ));
        assert!(!controller.complete(
            first.token,
            LoadOutcome::Success {
                width: 999,
                height: 999
            }
        ));

        assert!(controller.is_loaded());
        assert_eq!(controller.natural_size(), Some((100, 100)));
        assert_eq!(controller.current_name(), Some("b.jpg"));
    }

    #[test]
    fn test_stale_failure_cannot_clobber_newer_load() {
        let mut controller = ImageLoadController::new();
        let first = controller.load("a.jpg");
        let second = controller.load("b.jpg");

        assert!(!controller.complete(
            first.token,
            LoadOutcome::Failure {
                reason: "timeout".to_string(),
            }
        ));
        assert_eq!(*controller.state(), LoadState::Loading);

        assert!(controller.complete(
            second.token,
            LoadOutcome::Success {
                width: 10,
                height: 10
            }
        ));
        assert!(controller.is_loaded());
    }

    #[test]
    fn test_reload_clears_natural_size() {
        let mut controller = ImageLoadController::new();
        let request = controller.load("a.jpg");
        controller.complete(
            request.token,
            LoadOutcome::Success {
                width: 32,
                height: 32,
            },
        );
        assert_eq!(controller.natural_size(), Some((32, 32)));

        controller.load("b.jpg");
        assert_eq!(controller.natural_size(), None);
        assert_eq!(*controller.state(), LoadState::Loading);
    }

    #[test]
    fn test_join_inserts_exactly_one_separator() {
        assert_eq!(join_path("images/", "a.jpg"), "images/a.jpg");
        assert_eq!(join_path("images", "a.jpg"), "images/a.jpg");
    }

    #[test]
    fn test_set_base_path_normalizes_and_reloads() {
        let mut controller = ImageLoadController::new();
        let request = controller.load("cat.png");
        controller.complete(
            request.token,
            LoadOutcome::Success {
                width: 1,
                height: 1,
            },
        );

        let reload = controller.set_base_path("assets").expect("reload issued");
        assert_eq!(reload.path, "assets/cat.png");
        assert_eq!(*controller.state(), LoadState::Loading);

        // A trailing separator is kept as-is
        let mut controller = ImageLoadController::new();
        controller.load("cat.png");
        let reload = controller.set_base_path("assets/").expect("reload issued");
        assert_eq!(reload.path, "assets/cat.png");
    }

    #[test]
    fn test_set_base_path_without_current_image() {
        let mut controller = ImageLoadController::new();
        assert_eq!(controller.set_base_path("assets"), None);
        assert_eq!(*controller.state(), LoadState::Idle);
    }
}
