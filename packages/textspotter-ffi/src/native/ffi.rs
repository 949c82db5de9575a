use std::ffi::{c_char, c_int, c_void, CString};
use std::path::Path;

use image::RgbImage;

use crate::engine::SpotterError;
use crate::position::MatchResult;

/// `bool match_text_from_file(const char *image_path, const char *target, int *x, int *y)`
pub type MatchTextFromFileFn =
    unsafe extern "C" fn(*const c_char, *const c_char, *mut c_int, *mut c_int) -> bool;

/// `bool match_text(const char *target, int height, int width, int type, void *data, int *x, int *y)`
pub type MatchTextFn = unsafe extern "C" fn(
    *const c_char,
    c_int,
    c_int,
    c_int,
    *mut c_void,
    *mut c_int,
    *mut c_int,
) -> bool;

pub const MATCH_TEXT_FROM_FILE: &str = "match_text_from_file";
pub const MATCH_TEXT: &str = "match_text";

/// OpenCV matrix type for 8-bit, 3-channel (BGR) data.
pub const CV_8UC3: c_int = 16;

/// Slot value the library leaves behind when nothing matched.
const UNSET: c_int = -1;

fn to_c_string(what: &str, value: &str) -> Result<CString, SpotterError> {
    CString::new(value).map_err(|_| SpotterError::InvalidInput(format!("null byte in {what}")))
}

fn dimension(what: &str, value: u32) -> Result<c_int, SpotterError> {
    c_int::try_from(value)
        .map_err(|_| SpotterError::InvalidInput(format!("image {what} {value} is too large")))
}

/// Packs an RGB image into the row-major BGR layout the library expects.
pub fn to_bgr(image: &RgbImage) -> Vec<u8> {
    image
        .pixels()
        .flat_map(|p| [p[2], p[1], p[0]])
        .collect()
}

/// Calls `match_text_from_file` with marshaled arguments.
///
/// # Safety
///
/// `func` must point to a live function with the `match_text_from_file`
/// signature, i.e. the library it came from must still be loaded.
pub unsafe fn match_file(
    func: MatchTextFromFileFn,
    image_path: &Path,
    target: &str,
) -> Result<MatchResult, SpotterError> {
    if target.is_empty() {
        return Ok(MatchResult::NotFound);
    }

    let path_str = image_path
        .to_str()
        .ok_or_else(|| SpotterError::InvalidInput("non-utf8 path".into()))?;
    let c_path = to_c_string("path", path_str)?;
    let c_target = to_c_string("target", target)?;

    let mut x: c_int = UNSET;
    let mut y: c_int = UNSET;
    let found = func(c_path.as_ptr(), c_target.as_ptr(), &mut x, &mut y);

    Ok(MatchResult::from_raw(found, x, y))
}

/// Calls `match_text` on an in-memory copy of `image`.
///
/// # Safety
///
/// `func` must point to a live function with the `match_text` signature.
pub unsafe fn match_image(
    func: MatchTextFn,
    image: &RgbImage,
    target: &str,
) -> Result<MatchResult, SpotterError> {
    if target.is_empty() {
        return Ok(MatchResult::NotFound);
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(SpotterError::InvalidInput("empty image".into()));
    }

    let height = dimension("height", image.height())?;
    let width = dimension("width", image.width())?;
    let c_target = to_c_string("target", target)?;
    let mut data = to_bgr(image);

    let mut x: c_int = UNSET;
    let mut y: c_int = UNSET;
    let found = func(
        c_target.as_ptr(),
        height,
        width,
        CV_8UC3,
        data.as_mut_ptr().cast::<c_void>(),
        &mut x,
        &mut y,
    );

    Ok(MatchResult::from_raw(found, x, y))
}
