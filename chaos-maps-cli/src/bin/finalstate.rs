//! Final-state diagram of a logistic, cubic or sine map at one growth rate.

use std::io;

use anyhow::{Context, Result};
use chaos_maps::{FinalStateConfig, FinalStateSampler, DEFAULT_MARKER};
use chaos_maps_cli::args::{MapArgs, OutputArgs};
use chaos_maps_cli::{output, render, runtime, BANNER};
use clap::Parser;
use log::{debug, info};

const EXAMPLES: &str = "\
Examples:
  # a stable fixed point
  finalstate -r 2.5
  # a period 4 cycle
  finalstate -r 3.5 -s 5000
  # chaotic final states
  finalstate -r 3.9 -n 5000 --sine";

#[derive(Debug, Parser)]
#[command(
    name = "finalstate",
    about = "Plot the final states of a Logistic, Cubic or Sine map",
    version,
    before_help = BANNER,
    after_help = EXAMPLES
)]
struct Cli {
    /// Growth rate parameter
    #[arg(short = 'r', long = "rate", value_name = "FLOAT")]
    rate: f64,

    /// Initial condition
    #[arg(short = '0', long = "x0", value_name = "FLOAT", default_value_t = 0.5)]
    x0: f64,

    /// Number of iterations to keep
    #[arg(short = 'n', long = "steps", value_name = "INT", default_value_t = 1000)]
    steps: usize,

    /// Number of transient iterations to discard
    #[arg(short = 's', long = "skip", value_name = "INT", default_value_t = 2000)]
    skip: usize,

    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn run(cli: Cli) -> Result<()> {
    runtime::exit_on_interrupt("finalstate")?;
    let map = cli.map.kind();
    let config = FinalStateConfig {
        steps: cli.steps,
        skip: cli.skip,
        x0: cli.x0,
        marker: DEFAULT_MARKER,
    };
    debug!("finalstate: map={map}, r={}, config={config:?}", cli.rate);

    let state = FinalStateSampler::new(map, cli.rate, &config)
        .context("cannot sample final states")?
        .sample()?;
    info!("computed {} final states at r={}", state.values.len(), state.r);

    if cli.output.csv {
        let mut stdout = io::stdout().lock();
        output::write_final_state(&mut stdout, &state).context("failed to write CSV")?;
    } else {
        let path = cli.output.output_or("finalstate.svg");
        render::final_state(&path, map, &state)
            .with_context(|| format!("failed to render {}", path.display()))?;
        println!("{}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    runtime::init_logging(cli.output.verbose);
    if let Err(err) = run(cli) {
        runtime::die("finalstate", &err);
    }
}
