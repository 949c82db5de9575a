//! Preview of annotated images.
//!
//! There is no windowing toolkit in this crate: the system viewer hands a
//! temporary PNG to the platform's default image viewer and blocks until the
//! operator presses Enter.

use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

pub trait Viewer {
  /// Shows `image` and returns once the operator has dismissed it.
  fn show(&self, title: &str, image: &RgbImage) -> Result<()>;
}

impl<V: Viewer + ?Sized> Viewer for &V {
  fn show(&self, title: &str, image: &RgbImage) -> Result<()> {
    (**self).show(title, image)
  }
}

pub struct SystemViewer {
  dir: PathBuf,
  opener: fn(&Path) -> Command,
}

impl SystemViewer {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self {
      dir: dir.into(),
      opener,
    }
  }

  fn preview_path(&self, title: &str) -> PathBuf {
    let stem: String = title
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
      .collect();
    self.dir.join(format!("{}-{}.png", stem, std::process::id()))
  }
}

impl Default for SystemViewer {
  fn default() -> Self {
    Self::new(std::env::temp_dir())
  }
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
  let mut cmd = Command::new("cmd");
  cmd.args(["/C", "start", ""]).arg(path);
  cmd
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
  let mut cmd = Command::new("open");
  cmd.arg(path);
  cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener(path: &Path) -> Command {
  let mut cmd = Command::new("xdg-open");
  cmd.arg(path);
  cmd
}

fn launch(mut cmd: Command) -> Result<()> {
  let status = cmd
    .status()
    .map_err(|e| anyhow!("Failed to launch image viewer: {}", e))?;
  if !status.success() {
    return Err(anyhow!("Image viewer exited with {}", status));
  }
  Ok(())
}

impl SystemViewer {
  /// Writes the preview, opens it and waits for a line on `input`.
  ///
  /// Returns the preview path when it was kept because no viewer could be
  /// launched; otherwise the file is removed once the operator is done.
  fn present<R: BufRead>(&self, title: &str, image: &RgbImage, input: &mut R) -> Result<Option<PathBuf>> {
    let path = self.preview_path(title);
    image
      .save(&path)
      .with_context(|| format!("failed to write preview {}", path.display()))?;
    debug!("preview written to {}", path.display());

    if let Err(e) = launch((self.opener)(&path)) {
      warn!("{:#}", e);
      eprintln!("Could not open a viewer; the annotated image is kept at {}", path.display());
      return Ok(Some(path));
    }

    eprint!("Press Enter to close {}...", title);
    io::stderr().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;

    if let Err(e) = fs::remove_file(&path) {
      warn!("could not remove preview {}: {}", path.display(), e);
    }
    Ok(None)
  }
}

impl Viewer for SystemViewer {
  fn show(&self, title: &str, image: &RgbImage) -> Result<()> {
    self.present(title, image, &mut io::stdin().lock())?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::driver::load_image;
  use std::io::Cursor;
  use std::process::Stdio;
  use tempfile::tempdir;

  #[test]
  fn test_preview_path_is_sanitized() {
    let viewer = SystemViewer::new("previews");
    let path = viewer.preview_path("Text Spotter/Image");
    assert!(path.starts_with("previews"));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("text-spotter-image-"));
    assert!(name.ends_with(".png"));
  }

  fn missing_viewer(path: &Path) -> Command {
    let mut cmd = Command::new("textspotter-test-no-such-viewer");
    cmd.arg(path);
    cmd
  }

  fn quiet_viewer(_: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.arg("--version").stdout(Stdio::null());
    cmd
  }

  #[test]
  fn test_preview_is_kept_when_no_viewer_starts() {
    let dir = tempdir().unwrap();
    let viewer = SystemViewer {
      dir: dir.path().to_path_buf(),
      opener: missing_viewer,
    };
    let image = RgbImage::new(4, 4);

    let kept = viewer.present("Image", &image, &mut Cursor::new("")).unwrap();

    let kept = kept.expect("preview should be kept");
    assert!(kept.exists());
    assert_eq!(load_image(&kept).unwrap().dimensions(), (4, 4));
  }

  #[test]
  fn test_preview_is_removed_after_dismissal() {
    let dir = tempdir().unwrap();
    let viewer = SystemViewer {
      dir: dir.path().to_path_buf(),
      opener: quiet_viewer,
    };
    let image = RgbImage::new(4, 4);

    let kept = viewer.present("Image", &image, &mut Cursor::new("\n")).unwrap();

    assert!(kept.is_none());
    assert!(!viewer.preview_path("Image").exists());
  }

  #[test]
  fn test_default_uses_temp_dir() {
    let viewer = SystemViewer::default();
    assert!(viewer.preview_path("Image").starts_with(std::env::temp_dir()));
  }
}
