use std::path::PathBuf;
use anyhow::{ensure, Context, Result};
use clap::Parser;
use crate::carousel::parse_slide_index;
use crate::constants::*;

#[derive(Parser, Debug)]
#[command(name = "slide-carousel", version, about = "Browse a directory of images as a carousel")]
pub struct Args {
    /// Directory holding the images
    pub directory: PathBuf,

    /// Slide shown first (0-based)
    #[arg(long, default_value = "0")]
    pub start_slide: String,

    /// Opacity of the other controls while one is hovered
    #[arg(long, default_value_t = DEFAULT_HOVER_OPACITY)]
    pub hover_opacity: f32,

    /// How far beyond the window edges images start loading, as a share of the width
    #[arg(long, default_value_t = DEFAULT_LAZY_MARGIN)]
    pub lazy_margin: f32,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Shuffle slide order instead of sorting by file name
    #[arg(long)]
    pub shuffle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub directory: PathBuf,
    pub start_slide: usize,
    pub hover_opacity: f32,
    pub lazy_margin: f32,
    pub width: i32,
    pub height: i32,
    pub shuffle: bool,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let start_slide = parse_slide_index(&args.start_slide).context("Invalid --start-slide")?;
        ensure!(
            (0.0..=1.0).contains(&args.hover_opacity),
            "--hover-opacity must be between 0 and 1, got {}",
            args.hover_opacity
        );
        ensure!(args.lazy_margin >= 0.0, "--lazy-margin must not be negative, got {}", args.lazy_margin);
        ensure!(args.width > 0 && args.height > 0, "Window size must be positive, got {}x{}", args.width, args.height);

        Ok(Self {
            directory: args.directory,
            start_slide,
            hover_opacity: args.hover_opacity,
            lazy_margin: args.lazy_margin,
            width: args.width,
            height: args.height,
            shuffle: args.shuffle,
        })
    }
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Args::parse().try_into()
    }
}
