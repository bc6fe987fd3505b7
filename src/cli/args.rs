//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::application::parse_iterations;
use crate::domain::{Point, PointFormat};

/// Two-dimensional lattice random walk simulator
#[derive(Parser, Debug)]
#[command(name = "rwalk")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Display this help menu and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Display program version information and exit
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Number of iterations in the simulation [default: 10]
    #[arg(short, long, value_name = "N", conflicts_with = "count", value_parser = parse_iterations)]
    pub iterations: Option<u64>,

    /// Number of iterations, same as --iterations
    #[arg(value_name = "N", value_parser = parse_iterations)]
    pub count: Option<u64>,

    /// Coordinate rendering [default: bare]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Seed for a reproducible walk
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Starting point as X,Y [default: 0,0]
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub start: Option<Point>,

    /// Settings file (default: $XDG_CONFIG_HOME/rwalk/rwalk.toml)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Iteration count from either `-i N` or the positional `N`.
    pub fn requested_iterations(&self) -> Option<u64> {
        self.iterations.or(self.count)
    }

    /// True when the invocation prints something other than a walk.
    pub fn exits_early(&self) -> bool {
        self.help || self.version || self.completions.is_some()
    }
}

/// Rendering choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// (x,y)
    Canonical,
    /// x y
    Bare,
}

impl From<FormatArg> for PointFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Canonical => PointFormat::Canonical,
            FormatArg::Bare => PointFormat::Bare,
        }
    }
}
