//! Command line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::*;

const DEFAULT_FONT: &str = "fonts/Inter-Regular.ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackgroundKind {
    /// Drifting glow particles, count scaled to the window width
    Canvas,
    /// A few looping bubbles near the bottom edge
    Bubbles,
    /// No animated background
    None,
}

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Product showcase with an animated particle background")]
pub struct Config {
    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Upper bound on the number of background particles (at most 80)
    #[arg(
        long,
        default_value_t = MAX_PARTICLES as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_PARTICLES as i64),
    )]
    pub max_particles: u16,

    /// Background animation
    #[arg(long, value_enum, default_value_t = BackgroundKind::Canvas)]
    pub background: BackgroundKind,

    /// JSON product catalog (defaults to the built-in product line)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory product image paths are relative to
    #[arg(long, default_value = "public")]
    pub assets: PathBuf,

    /// TTF font with Latin-1 glyphs (defaults to <assets>/fonts/Inter-Regular.ttf)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Advance animations by 1/fps per frame instead of the measured frame time
    #[arg(long)]
    pub fixed_step: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Config {
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        match (self.quiet, self.verbose) {
            (true, _) => Some(log::LevelFilter::Error),
            (false, 0) => None,
            (false, 1) => Some(log::LevelFilter::Info),
            (false, 2) => Some(log::LevelFilter::Debug),
            (false, _) => Some(log::LevelFilter::Trace),
        }
    }

    pub fn particle_cap(&self) -> usize {
        usize::from(self.max_particles)
    }

    pub fn font_path(&self) -> PathBuf {
        self.font.clone().unwrap_or_else(|| self.assets.join(DEFAULT_FONT))
    }

    pub fn frame_step(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::particles::ParticleField;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["showcase"]).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.particle_cap(), MAX_PARTICLES);
        assert_eq!(config.font_path(), PathBuf::from("public/fonts/Inter-Regular.ttf"));
        assert_eq!(config.background, BackgroundKind::Canvas);
        assert_eq!(config.assets, PathBuf::from("public"));
        assert!(config.catalog.is_none());
        assert_eq!(config.log_level(), None);
        assert_eq!(config.frame_step(), FRAME_TIME);
    }

    #[test]
    fn parses_overrides() {
        let config = Config::try_parse_from([
            "showcase",
            "--background",
            "bubbles",
            "--max-particles",
            "40",
            "--catalog",
            "products.json",
            "--fixed-step",
            "--font",
            "/usr/share/fonts/DejaVuSans.ttf",
            "-vv",
        ])
        .unwrap();

        assert_eq!(config.background, BackgroundKind::Bubbles);
        assert_eq!(config.particle_cap(), 40);
        assert_eq!(config.font_path(), PathBuf::from("/usr/share/fonts/DejaVuSans.ttf"));
        assert_eq!(config.catalog, Some(PathBuf::from("products.json")));
        assert!(config.fixed_step);
        assert_eq!(config.log_level(), Some(log::LevelFilter::Debug));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Config::try_parse_from(["showcase", "-q", "-v"]).is_err());
        let config = Config::try_parse_from(["showcase", "-q"]).unwrap();
        assert_eq!(config.log_level(), Some(log::LevelFilter::Error));
    }

    #[test]
    fn particle_cap_cannot_exceed_the_field_limit() {
        assert!(Config::try_parse_from(["showcase", "--max-particles", "500"]).is_err());
        assert!(Config::try_parse_from(["showcase", "--max-particles", "81"]).is_err());

        let config = Config::try_parse_from(["showcase", "--max-particles", "80"]).unwrap();
        let mut field = ParticleField::new(config.particle_cap());
        field.resize(3840.0, 2160.0);
        assert_eq!(field.len(), MAX_PARTICLES);
    }
}
