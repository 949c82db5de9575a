//! Crosshair drawing on decoded images.
use anyhow::{bail, Result};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use textspotter_ffi::Position;

/// Colour and width of the crosshair lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairStyle {
  /// RGB colour
  pub color: [u8; 3],
  /// Line width in pixels
  pub thickness: u32,
}

impl Default for CrosshairStyle {
  fn default() -> Self {
    Self {
      color: [255, 0, 0],
      thickness: 2,
    }
  }
}

/// Pixel range covered by a line of `thickness` through `center`, clipped to `0..limit`.
fn band(center: u32, thickness: u32, limit: u32) -> Range<u32> {
  let thickness = thickness.max(1);
  let start = center.saturating_sub((thickness - 1) / 2);
  let end = center.saturating_add(thickness / 2).saturating_add(1).min(limit);
  start..end
}

/// Draws a vertical line through column `position.x` over the full height and a
/// horizontal line through row `position.y` over the full width.
pub fn draw_crosshair(image: &mut RgbImage, position: Position, style: &CrosshairStyle) -> Result<()> {
  let (width, height) = image.dimensions();
  if !position.within(width, height) {
    bail!(
      "match position ({}, {}) is outside the {}x{} image",
      position.x,
      position.y,
      width,
      height
    );
  }

  let color = Rgb(style.color);
  for x in band(position.x, style.thickness, width) {
    for y in 0..height {
      image.put_pixel(x, y, color);
    }
  }
  for y in band(position.y, style.thickness, height) {
    for x in 0..width {
      image.put_pixel(x, y, color);
    }
  }

  Ok(())
}
