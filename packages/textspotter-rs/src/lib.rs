//! # textspotter-rs
//!
//! Finds a piece of text in an image through the native `textspotter` library
//! and marks the match with a crosshair.
//!
//! ## Quick Start
//!
//! ```ignore
//! use textspotter_rs::prelude::*;
//!
//! let spotter = NativeTextSpotter::load(default_library_path())?;
//! let driver = Driver::new(spotter, SystemViewer::default(), DriverOptions::default());
//! let request = MatchRequest::new("home.png", "EXIT");
//! let outcome = driver.run(&request, &mut std::io::stdout())?;
//! if let Some(pos) = outcome.result.position() {
//!     println!("{}, {}", pos.x, pos.y);
//! }
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod driver;
pub mod prompt;
pub mod viewer;

pub use annotate::{draw_crosshair, CrosshairStyle};
pub use config::Config;
pub use driver::{load_image, Driver, DriverOptions, Mode, Outcome};
pub use prompt::read_target;
pub use viewer::{SystemViewer, Viewer};

pub use textspotter_ffi::{
    default_library_path, MatchRequest, MatchResult, NativeTextSpotter, Position, SpotterError, TextSpotter,
};

/// Prelude module for convenient imports
///
/// ```ignore
/// use textspotter_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        default_library_path, draw_crosshair, load_image, read_target, Config, CrosshairStyle, Driver,
        DriverOptions, MatchRequest, MatchResult, Mode, NativeTextSpotter, Outcome, Position, SpotterError,
        SystemViewer, TextSpotter, Viewer,
    };
}
