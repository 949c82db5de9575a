use std::path::PathBuf;

use image::RgbImage;
use thiserror::Error;

use crate::position::MatchResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub image_path: PathBuf,
    pub target_text: String,
}

impl MatchRequest {
    pub fn new(image_path: impl Into<PathBuf>, target_text: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            target_text: target_text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SpotterError {
    #[error("failed to load text spotting library {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("library does not export `{name}`: {source}")]
    MissingSymbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported operation")]
    Unsupported,
}

/// A text spotting capability: find `target_text` in an image and report
/// where it is.
pub trait TextSpotter {
    fn match_text_from_file(&self, request: &MatchRequest) -> Result<MatchResult, SpotterError>;

    /// Whether [`TextSpotter::match_text_in_image`] is available.
    fn supports_in_memory(&self) -> bool {
        false
    }

    /// Matches against an already decoded image instead of a file path.
    fn match_text_in_image(
        &self,
        _image: &RgbImage,
        _target_text: &str,
    ) -> Result<MatchResult, SpotterError> {
        Err(SpotterError::Unsupported)
    }
}

impl<T: TextSpotter + ?Sized> TextSpotter for &T {
    fn supports_in_memory(&self) -> bool {
        (**self).supports_in_memory()
    }

    fn match_text_from_file(&self, request: &MatchRequest) -> Result<MatchResult, SpotterError> {
        (**self).match_text_from_file(request)
    }

    fn match_text_in_image(
        &self,
        image: &RgbImage,
        target_text: &str,
    ) -> Result<MatchResult, SpotterError> {
        (**self).match_text_in_image(image, target_text)
    }
}

impl<T: TextSpotter + ?Sized> TextSpotter for Box<T> {
    fn supports_in_memory(&self) -> bool {
        (**self).supports_in_memory()
    }

    fn match_text_from_file(&self, request: &MatchRequest) -> Result<MatchResult, SpotterError> {
        (**self).match_text_from_file(request)
    }

    fn match_text_in_image(
        &self,
        image: &RgbImage,
        target_text: &str,
    ) -> Result<MatchResult, SpotterError> {
        (**self).match_text_in_image(image, target_text)
    }
}
