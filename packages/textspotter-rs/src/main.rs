use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use textspotter_rs::cli::Args;
use textspotter_rs::prelude::*;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
  let args = Args::parse();

  let default_level = if args.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  FmtSubscriber::builder()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .compact()
    .init();

  if let Err(e) = run(args) {
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
  }
}

fn run(args: Args) -> Result<()> {
  let config = args.apply(Config::load(args.config.as_deref())?);
  let image_path = config
    .image_path
    .clone()
    .context("no image given; pass --image or set image_path in the config file")?;

  let spotter = NativeTextSpotter::load(&config.library_path).context("text spotter failed to start")?;

  let mode = args.mode();
  let driver = Driver::new(spotter, SystemViewer::default(), config.driver_options(mode, args.json));
  driver.check_capabilities().context("text spotter failed to start")?;

  let target = match &args.target {
    Some(target) => target.clone(),
    None => read_target(&mut io::stdin().lock(), &mut io::stdout())?,
  };

  let request = MatchRequest::new(image_path, target);
  let outcome = driver.run(&request, &mut io::stdout())?;
  debug!("finished: {:?}", outcome);

  Ok(())
}
