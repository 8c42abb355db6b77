//! # chaos-maps
//!
//! Iteration of classical one-dimensional discrete maps x' = f(r, x) and the
//! diagrams derived from them:
//!
//! - **Maps** ([`MapKind`]): logistic r·x·(1-x), cubic r·x²·(1-x), and
//!   sine r·sin(πx/2), each with its growth rate domain and state range
//! - **Orbits** ([`Orbit`]): time series from one or two initial conditions,
//!   with transient skipping and the pointwise difference of the two orbits
//! - **Final states** ([`FinalStateSampler`]): post-transient values at a
//!   fixed growth rate
//! - **Bifurcation diagrams** ([`BifurcationSampler`]): final states over an
//!   evenly spaced sweep of the growth rate, parallelized with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use chaos_maps::{MapKind, Orbit};
//!
//! let map = MapKind::from_name("logistic").unwrap();
//!
//! // Two nearby initial conditions in the chaotic regime
//! let mut orbit = Orbit::new(map, 4.0, 50, 0, 0.2, Some(0.2000001)).unwrap();
//! let diff = orbit.difference().unwrap();
//! assert_eq!(diff.len(), 51);
//! ```
//!
//! All outputs are plain numeric sequences; drawing them is left to the
//! caller.

pub mod types;

pub mod bifurcation;
pub mod final_state;
pub mod maps;
pub mod orbit;
pub mod utils;

pub use bifurcation::{BifurcationDiagram, BifurcationPoint, BifurcationSampler};
pub use final_state::{FinalState, FinalStateSampler};
pub use maps::{iterate, MapBounds, MapKind};
pub use orbit::{Orbit, OrbitSeries, VisibleSlice};
pub use types::{
    BifurcationConfig, ChaosError, FinalStateConfig, DEFAULT_MARKER, DEFAULT_SAMPLES, DEFAULT_X0,
};
pub use utils::{linspace, range_from_slice};
