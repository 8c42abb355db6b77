//! Command-line front end for `chaos-maps`.
//!
//! Three tools share the pieces in this crate:
//!
//! - `legraph`: time series of one orbit, or of two orbits with their difference
//! - `finalstate`: final-state diagram at a single growth rate
//! - `bifurcations`: bifurcation diagram over a growth rate range
//!
//! Each tool renders an SVG with plotters, or prints CSV with `--csv`.
//! Exit codes: 0 on success, 2 on invalid arguments, 3 on Ctrl-C.

pub mod args;
pub mod output;
pub mod render;
pub mod runtime;

/// Banner printed above `--help`.
pub const BANNER: &str = concat!(
    "chaos-maps v",
    env!("CARGO_PKG_VERSION"),
    "\nLicense: Apache-2.0"
);
