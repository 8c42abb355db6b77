//! Time series of a logistic, cubic or sine map from one or two initial conditions.

use std::io;

use anyhow::{Context, Result};
use chaos_maps::Orbit;
use chaos_maps_cli::args::{MapArgs, OutputArgs};
use chaos_maps_cli::{output, render, runtime, BANNER};
use clap::{ArgAction, Parser};
use log::debug;

const EXAMPLES: &str = "\
Examples:
  # time series with a stable fixed point
  legraph -0 0.4 -r 3.2 -n 50
  legraph -0 0.4 -1 0.45 -r 3.2 -n 50

  # chaotic results (random output)
  legraph --x0 0.2 --x1 0.2000001 -r 4.0 -n 50
  legraph -0 0.2 -r 3.6 -n 5000 --dots-only
  legraph -0 0.2 -r 3.7 -n 50 -s 10 --map cubic";

#[derive(Debug, Parser)]
#[command(
    name = "legraph",
    about = "Plot the time series of a Logistic, Cubic or Sine map",
    version,
    before_help = BANNER,
    after_help = EXAMPLES
)]
struct Cli {
    /// 1st initial condition
    #[arg(short = '0', long = "x0", value_name = "FLOAT")]
    x0: f64,

    /// 2nd initial condition (optional)
    #[arg(short = '1', long = "x1", value_name = "FLOAT")]
    x1: Option<f64>,

    /// Growth rate parameter
    #[arg(short = 'r', long = "rate", value_name = "FLOAT")]
    rate: f64,

    /// Number of iterations
    #[arg(short = 'n', long = "steps", value_name = "INT")]
    steps: usize,

    /// Skip plotting the first 's' iterations
    #[arg(short = 's', long = "skip", value_name = "INT", default_value_t = 0)]
    skip: usize,

    /// Do not connect the dots with lines
    #[arg(short = 'd', long = "dots-only", action = ArgAction::SetTrue)]
    dots_only: bool,

    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn run(cli: Cli) -> Result<()> {
    runtime::exit_on_interrupt("legraph")?;
    let map = cli.map.kind();
    debug!("legraph: map={map}, r={}, n={}, s={}", cli.rate, cli.steps, cli.skip);

    let mut orbit = Orbit::new(map, cli.rate, cli.steps, cli.skip, cli.x0, cli.x1)
        .context("cannot build the orbit")?;
    let diff = match cli.x1 {
        Some(_) => Some(orbit.difference()?),
        None => None,
    };
    let slice = orbit.visible_slice()?;

    if cli.output.csv {
        let mut stdout = io::stdout().lock();
        output::write_time_series(&mut stdout, &slice, diff.as_deref())
            .context("failed to write CSV")?;
    } else {
        let path = cli.output.output_or("legraph.svg");
        render::time_series(&path, map, &slice, diff.as_deref(), cli.dots_only)
            .with_context(|| format!("failed to render {}", path.display()))?;
        println!("{}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    runtime::init_logging(cli.output.verbose);
    if let Err(err) = run(cli) {
        runtime::die("legraph", &err);
    }
}
