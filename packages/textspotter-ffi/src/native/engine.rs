use std::path::{Path, PathBuf};

use image::RgbImage;
use libloading::Library;
use tracing::{debug, info};

use crate::engine::{MatchRequest, SpotterError, TextSpotter};
use crate::position::MatchResult;

use super::ffi::{self, MatchTextFn, MatchTextFromFileFn};

/// Where the library is looked for when no path is configured:
/// `lib/textspotter.dll`, `lib/libtextspotter.so` or `lib/libtextspotter.dylib`.
pub fn default_library_path() -> PathBuf {
    PathBuf::from("lib").join(libloading::library_filename("textspotter"))
}

/// Text spotter backed by the native library, loaded once and held until drop.
pub struct NativeTextSpotter {
    match_from_file: MatchTextFromFileFn,
    match_in_memory: Option<MatchTextFn>,
    _library: Library,
}

impl NativeTextSpotter {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpotterError> {
        let path = path.as_ref().to_path_buf();
        debug!("loading text spotting library from {}", path.display());

        let library = unsafe { Library::new(&path) }.map_err(|source| SpotterError::Load {
            path: path.clone(),
            source,
        })?;

        let match_from_file = unsafe {
            library.get::<MatchTextFromFileFn>(ffi::MATCH_TEXT_FROM_FILE.as_bytes())
        }
        .map(|symbol| *symbol)
        .map_err(|source| SpotterError::MissingSymbol {
            name: ffi::MATCH_TEXT_FROM_FILE,
            source,
        })?;

        let match_in_memory =
            match unsafe { library.get::<MatchTextFn>(ffi::MATCH_TEXT.as_bytes()) } {
                Ok(symbol) => Some(*symbol),
                Err(e) => {
                    debug!("in-memory matching unavailable: {}", e);
                    None
                }
            };

        info!(
            "loaded {} (in-memory matching: {})",
            path.display(),
            match_in_memory.is_some()
        );

        Ok(Self {
            match_from_file,
            match_in_memory,
            _library: library,
        })
    }
}

impl TextSpotter for NativeTextSpotter {
    fn supports_in_memory(&self) -> bool {
        self.match_in_memory.is_some()
    }

    fn match_text_from_file(&self, request: &MatchRequest) -> Result<MatchResult, SpotterError> {
        debug!(
            "matching {:?} in {}",
            request.target_text,
            request.image_path.display()
        );
        unsafe { ffi::match_file(self.match_from_file, &request.image_path, &request.target_text) }
    }

    fn match_text_in_image(
        &self,
        image: &RgbImage,
        target_text: &str,
    ) -> Result<MatchResult, SpotterError> {
        let func = self.match_in_memory.ok_or(SpotterError::Unsupported)?;
        debug!(
            "matching {:?} in {}x{} image",
            target_text,
            image.width(),
            image.height()
        );
        unsafe { ffi::match_image(func, image, target_text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_library() {
        let path = PathBuf::from("does/not/exist").join(libloading::library_filename("textspotter"));
        let err = match NativeTextSpotter::load(&path) {
            Ok(_) => panic!("expected load to fail"),
            Err(e) => e,
        };
        assert!(matches!(err, SpotterError::Load { .. }));
        assert!(err.to_string().contains("does"));
    }

    #[test]
    fn test_default_library_path() {
        let path = default_library_path();
        assert!(path.starts_with("lib"));
        assert_eq!(
            path.file_name(),
            Some(libloading::library_filename("textspotter").as_os_str())
        );
    }
}
