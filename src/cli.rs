use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RenderMode {
    /// Grey ramp of the nearest hit distance.
    Depth,
    /// Material colour with a head-light.
    Shaded,
}

#[derive(Debug, Parser)]
#[command(name = "photon", about = "Renders triangle meshes and planes from a JSON scene")]
pub struct Args {
    /// Scene description.
    #[arg(default_value = "scene.json")]
    pub scene: PathBuf,

    /// Output image, the format follows the extension.
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 800)]
    pub height: u32,

    #[arg(short, long, value_enum, default_value_t = RenderMode::Depth)]
    pub mode: RenderMode,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
