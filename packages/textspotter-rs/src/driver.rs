//! One request/response cycle against a [`TextSpotter`].
//!
//! The driver issues exactly one match call, reports the result, and for a
//! found match in interactive mode draws a crosshair through the position and
//! shows it.

use anyhow::{bail, Context, Result};
use image::RgbImage;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use textspotter_ffi::{MatchRequest, MatchResult, TextSpotter};
use tracing::{debug, info};

use crate::annotate::{draw_crosshair, CrosshairStyle};
use crate::viewer::Viewer;

pub const WINDOW_TITLE: &str = "Image";

/// Where the target text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompted from the operator; found matches are displayed
    Interactive,
    /// Fixed constant; text report only
    Scripted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverOptions {
    pub mode: Mode,
    pub display: bool,
    pub output_path: Option<PathBuf>,
    pub in_memory: bool,
    pub json: bool,
    pub crosshair: CrosshairStyle,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            display: true,
            output_path: None,
            in_memory: false,
            json: false,
            crosshair: CrosshairStyle::default(),
        }
    }
}

/// What a run ended with
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub result: MatchResult,
    pub displayed: bool,
    pub saved_to: Option<PathBuf>,
}

/// `{found, x, y}` as printed with `--json`
#[derive(Debug, Serialize)]
struct MatchReport {
    found: bool,
    x: Option<u32>,
    y: Option<u32>,
}

impl From<&MatchResult> for MatchReport {
    fn from(result: &MatchResult) -> Self {
        Self {
            found: result.found(),
            x: result.x(),
            y: result.y(),
        }
    }
}

pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?;
    Ok(image.to_rgb8())
}

pub struct Driver<S, V> {
    spotter: S,
    viewer: V,
    options: DriverOptions,
}

impl<S: TextSpotter, V: Viewer> Driver<S, V> {
    pub fn new(spotter: S, viewer: V, options: DriverOptions) -> Self {
        Self {
            spotter,
            viewer,
            options,
        }
    }

    fn shows_preview(&self) -> bool {
        self.options.mode == Mode::Interactive && self.options.display
    }

    /// Fails when the options ask for something the spotter cannot do.
    /// Meant to run once at startup, before any request is assembled.
    pub fn check_capabilities(&self) -> Result<()> {
        if self.options.in_memory && !self.spotter.supports_in_memory() {
            bail!("in-memory matching requested but the library does not export `match_text`");
        }
        Ok(())
    }

    pub fn run<W: Write>(&self, request: &MatchRequest, out: &mut W) -> Result<Outcome> {
        debug!("request assembled: {:?}", request);

        // The preview needs the image whatever the result, so an unreadable
        // file is fatal before the library is asked anything.
        let decoded = if self.options.in_memory || self.shows_preview() {
            Some(load_image(&request.image_path)?)
        } else {
            None
        };

        let result = match &decoded {
            Some(image) if self.options.in_memory => self
                .spotter
                .match_text_in_image(image, &request.target_text),
            _ => self.spotter.match_text_from_file(request),
        }
        .context("text spotting failed")?;
        info!("match call returned {:?}", result);

        self.report(&result, out)?;

        let mut outcome = Outcome {
            result,
            displayed: false,
            saved_to: None,
        };

        let Some(position) = result.position() else {
            return Ok(outcome);
        };

        let show = self.shows_preview();
        if !show && self.options.output_path.is_none() {
            return Ok(outcome);
        }

        let mut image = match decoded {
            Some(image) => image,
            None => load_image(&request.image_path)?,
        };
        draw_crosshair(&mut image, position, &self.options.crosshair)?;

        if let Some(path) = &self.options.output_path {
            image
                .save(path)
                .with_context(|| format!("failed to save annotated image {}", path.display()))?;
            info!("annotated image saved to {}", path.display());
            outcome.saved_to = Some(path.clone());
        }

        if show {
            self.viewer.show(WINDOW_TITLE, &image)?;
            outcome.displayed = true;
        }

        Ok(outcome)
    }

    fn report<W: Write>(&self, result: &MatchResult, out: &mut W) -> Result<()> {
        if self.options.json {
            serde_json::to_writer(&mut *out, &MatchReport::from(result))?;
            writeln!(out)?;
        } else {
            match result.position() {
                Some(pos) => writeln!(out, "Match found at position: ({}, {})", pos.x, pos.y)?,
                None => writeln!(out, "No match found.")?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
