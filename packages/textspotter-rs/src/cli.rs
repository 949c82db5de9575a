//! Command line arguments backing the `textspotter` binary.
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::driver::Mode;

#[derive(Parser, Debug)]
#[command(
  name = "textspotter",
  about = "Find a piece of text in an image with the native textspotter library and mark where it is",
  version
)]
pub struct Args {
  /// Image to search
  #[arg(long, short = 'i')]
  pub image: Option<PathBuf>,

  /// Path to the native textspotter library
  #[arg(long, short = 'l')]
  pub library: Option<PathBuf>,

  /// Text to look for; skips the prompt and the preview (scripted mode)
  #[arg(long, short = 't')]
  pub target: Option<String>,

  /// TOML configuration file
  #[arg(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Do not show the annotated image
  #[arg(long)]
  pub no_display: bool,

  /// Save the annotated image to this PNG file
  #[arg(long, short = 'o')]
  pub output: Option<PathBuf>,

  /// Decode the image first and pass the pixels to the library
  #[arg(long)]
  pub in_memory: bool,

  /// Print the result as JSON
  #[arg(long)]
  pub json: bool,

  /// Enable verbose logging
  #[arg(long, short = 'v')]
  pub verbose: bool,
}

impl Args {
  pub fn mode(&self) -> Mode {
    if self.target.is_some() {
      Mode::Scripted
    } else {
      Mode::Interactive
    }
  }

  /// Overrides `config` with whatever was given on the command line.
  pub fn apply(&self, mut config: Config) -> Config {
    if let Some(image) = &self.image {
      config.image_path = Some(image.clone());
    }
    if let Some(library) = &self.library {
      config.library_path = library.clone();
    }
    if let Some(output) = &self.output {
      config.output_path = Some(output.clone());
    }
    if self.no_display {
      config.display = false;
    }
    if self.in_memory {
      config.in_memory = true;
    }
    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_target_selects_scripted_mode() {
    let args = Args::try_parse_from(["textspotter", "-i", "home.png", "-t", "EXIT"]).unwrap();
    assert_eq!(args.mode(), Mode::Scripted);

    let args = Args::try_parse_from(["textspotter", "-i", "home.png"]).unwrap();
    assert_eq!(args.mode(), Mode::Interactive);
  }

  #[test]
  fn test_flags_override_config() {
    let args = Args::try_parse_from([
      "textspotter",
      "--image",
      "cli.png",
      "--library",
      "cli/textspotter.dll",
      "--no-display",
      "--in-memory",
      "--output",
      "out.png",
    ])
    .unwrap();
    let file = Config {
      image_path: Some(PathBuf::from("file.png")),
      library_path: PathBuf::from("file/textspotter.dll"),
      ..Default::default()
    };

    let config = args.apply(file);
    assert_eq!(config.image_path, Some(PathBuf::from("cli.png")));
    assert_eq!(config.library_path, PathBuf::from("cli/textspotter.dll"));
    assert_eq!(config.output_path, Some(PathBuf::from("out.png")));
    assert!(!config.display);
    assert!(config.in_memory);
  }

  #[test]
  fn test_absent_flags_keep_config() {
    let args = Args::try_parse_from(["textspotter"]).unwrap();
    let file = Config {
      image_path: Some(PathBuf::from("file.png")),
      ..Default::default()
    };
    assert_eq!(args.apply(file.clone()), file);
  }
}
