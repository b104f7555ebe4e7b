use std::error::Error;

use clap::Parser;
use log::{error, info};

use photon::render::{render_depth, render_shaded};
use photon::Scene;

use crate::cli::{Args, RenderMode};
use crate::logger::init_logger;

mod cli;
mod logger;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let scene = Scene::load(&args.scene).map_err(|err| {
        error!("{}", err);
        err
    })?;

    match args.mode {
        RenderMode::Depth => render_depth(&scene, args.width, args.height).save(&args.output)?,
        RenderMode::Shaded => render_shaded(&scene, args.width, args.height).save(&args.output)?,
    }

    info!("image written to {}", args.output.display());
    Ok(())
}
