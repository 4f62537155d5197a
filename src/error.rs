//! Error types for the viewer component.
//!
//! Every error here is recovered locally: it replaces the current view
//! with an error surface and disables the toolbar until the next valid
//! input arrives. Nothing propagates past the component boundary.

use thiserror::Error;

/// Errors surfaced by the viewer.
///
/// The `Display` impl is the human-readable message shown on the error
/// surface; [`ViewerError::details`] carries the raw offending payload
/// or attempted path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Host payload had a missing, non-array, or empty `data` field
    #[error("Invalid data format received")]
    InvalidPayloadShape,

    /// Host payload carried more than one row or column
    #[error("Please select a single image to view")]
    UnsupportedCardinality {
        /// Raw JSON of the offending `data` value
        details: String,
    },

    /// The single cell of the payload was not a string
    #[error("Please provide a valid image name")]
    InvalidNameType {
        /// Raw JSON of the offending `data` value
        details: String,
    },

    /// The underlying image fetch or decode failed
    #[error("Failed to load: {path}")]
    ImageLoadFailure {
        /// The path that was attempted
        path: String,
        /// Decoder/fetch error text, when available
        details: Option<String>,
    },
}

impl ViewerError {
    /// Create a cardinality error echoing the offending data value.
    pub fn unsupported_cardinality(data: &serde_json::Value) -> Self {
        Self::UnsupportedCardinality {
            details: format!("Multiple values were provided: {}", data),
        }
    }

    /// Create a name-type error echoing the offending data value.
    pub fn invalid_name_type(data: &serde_json::Value) -> Self {
        Self::InvalidNameType {
            details: data.to_string(),
        }
    }

    /// Create a load-failure error for the attempted path.
    pub fn load_failure(path: impl Into<String>, details: Option<String>) -> Self {
        Self::ImageLoadFailure {
            path: path.into(),
            details,
        }
    }

    /// The details payload shown under the message, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidPayloadShape => None,
            Self::UnsupportedCardinality { details } | Self::InvalidNameType { details } => {
                Some(details)
            }
            Self::ImageLoadFailure { details, .. } => details.as_deref(),
        }
    }
}
