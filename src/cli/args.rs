//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

/// Parse a strictly positive, finite number
fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("must be greater than 0, got {}", value));
    }
    Ok(value)
}

/// Draws a spinning 3D donut in ASCII
#[derive(Parser, Debug)]
#[command(name = "donut-term")]
#[command(version, about = "Spinning ASCII torus for the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    donut-term                     # Defaults: r1=1, r2=2, k2=5, ratio=2, ~30 FPS
    donut-term --r1 0.5 --k2 8     # Thinner tube, farther away
    donut-term --frame-ms 16.7     # ~60 FPS
    donut-term --debug             # Show frame timing in the bottom rows

Ctrl+C stops the animation (exit code 1).")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Tube (minor) radius [default: 1.0]
    #[arg(long, value_parser = parse_positive)]
    pub r1: Option<f64>,

    /// Distance from the torus centre to the tube centre (major radius) [default: 2.0]
    #[arg(long, value_parser = parse_positive)]
    pub r2: Option<f64>,

    /// Distance from the viewer [default: 5.0]
    #[arg(long, value_parser = parse_positive)]
    pub k2: Option<f64>,

    /// Width/height correction for terminal cells [default: 2.0]
    #[arg(long, value_parser = parse_positive)]
    pub ratio: Option<f64>,

    /// Target frame duration in milliseconds [default: 33.3]
    #[arg(long, value_parser = parse_positive)]
    pub frame_ms: Option<f64>,

    /// Show frame timing statistics in the bottom rows
    #[arg(long)]
    pub debug: bool,

    /// Let the torus drift around the screen as it spins
    #[arg(long)]
    pub wander: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Command-line values that take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            r1: self.r1,
            r2: self.r2,
            k2: self.k2,
            ratio: self.ratio,
            frame_ms: self.frame_ms,
            wander: self.wander,
            debug: self.debug,
        }
    }
}
