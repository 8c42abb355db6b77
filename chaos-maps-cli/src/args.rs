use std::path::PathBuf;

use chaos_maps::{range_from_slice, ChaosError, MapKind};
use clap::{ArgAction, Args, ValueEnum};

/// Map selectable from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MapChoice {
    #[default]
    Logistic,
    Cubic,
    Sine,
}

impl From<MapChoice> for MapKind {
    fn from(choice: MapChoice) -> Self {
        match choice {
            MapChoice::Logistic => MapKind::Logistic,
            MapChoice::Cubic => MapKind::Cubic,
            MapChoice::Sine => MapKind::Sine,
        }
    }
}

/// Map selector: `--map NAME` or one of the single-letter flags.
#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    /// Map to iterate
    #[arg(short = 'm', long = "map", value_enum, default_value_t = MapChoice::Logistic)]
    pub map: MapChoice,

    /// Use the logistic map r·x·(1-x) (default)
    #[arg(short = 'l', long = "logistic", action = ArgAction::SetTrue, conflicts_with_all = ["cubic", "sine"])]
    pub logistic: bool,

    /// Use the cubic map r·x²·(1-x)
    #[arg(short = 'c', long = "cubic", action = ArgAction::SetTrue, conflicts_with = "sine")]
    pub cubic: bool,

    /// Use the sine map r·sin(πx/2)
    #[arg(short = 't', long = "sine", action = ArgAction::SetTrue)]
    pub sine: bool,
}

impl MapArgs {
    /// The selected map. Single-letter flags take precedence over `--map`.
    pub fn kind(&self) -> MapKind {
        if self.logistic {
            MapKind::Logistic
        } else if self.cubic {
            MapKind::Cubic
        } else if self.sine {
            MapKind::Sine
        } else {
            self.map.into()
        }
    }
}

/// Output and verbosity flags shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// SVG file to write the plot to
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the computed data as CSV on stdout instead of plotting
    #[arg(long = "csv", action = ArgAction::SetTrue)]
    pub csv: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl OutputArgs {
    /// The output path, or `default` when none was given.
    pub fn output_or(&self, default: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}

/// Parse a `lo:hi` range such as `2.5:4`.
pub fn parse_range(s: &str) -> Result<(f64, f64), ChaosError> {
    let values = s
        .split(':')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                ChaosError::InvalidRange(format!("'{part}' is not a number in range '{s}'"))
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    range_from_slice(&values, "given")
}

/// clap value parser for `lo:hi` ranges.
pub fn range_value(s: &str) -> Result<(f64, f64), String> {
    parse_range(s).map_err(|e| e.to_string())
}
