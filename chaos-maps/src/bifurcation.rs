use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};
use rayon::prelude::*;

use crate::final_state::FinalStateSampler;
use crate::maps::MapKind;
use crate::types::{BifurcationConfig, ChaosError, FinalStateConfig, DEFAULT_X0};
use crate::utils::{linspace, sequence_len, validate_range};

/// One point of a bifurcation diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BifurcationPoint {
    /// Growth rate.
    pub r: f64,
    /// Post-transient state at that growth rate.
    pub value: f64,
}

/// Point cloud of a bifurcation diagram. Point order carries no meaning.
#[derive(Debug, Clone)]
pub struct BifurcationDiagram {
    pub map: MapKind,
    pub points: Vec<BifurcationPoint>,
    /// Growth rate range that was swept.
    pub r_range: (f64, f64),
    /// State range for display.
    pub y_range: (f64, f64),
}

/// Sweeps the growth rate and collects final states at each sample.
///
/// For `samples` evenly spaced rates r_i in `[r0, r1]`, endpoints included,
/// runs a [`FinalStateSampler`] from x0 = 0.5 and keeps every
/// post-transient value, giving up to `samples·(steps+1)` points.
///
/// The rates are independent, so the sweep runs in parallel over them with
/// rayon. Each rate fills its own chunk of points.
#[derive(Debug, Clone)]
pub struct BifurcationSampler {
    map: MapKind,
    r_range: (f64, f64),
    y_range: (f64, f64),
    steps: usize,
    skip: usize,
    samples: usize,
}

impl BifurcationSampler {
    pub fn new(map: MapKind, config: &BifurcationConfig) -> Result<Self, ChaosError> {
        let bounds = map.bounds();
        let r_range = config.r_range.unwrap_or((bounds.r_min, bounds.r_max));
        let y_range = config.y_range.unwrap_or((bounds.y_min, bounds.y_max));
        validate_range(r_range, bounds.r_min, bounds.r_max, "growth rate")?;
        validate_range(y_range, bounds.y_min, bounds.y_max, "population")?;

        if config.steps == 0 {
            return Err(ChaosError::InvalidParameter(
                "the number of iterations must be greater than zero".into(),
            ));
        }
        sequence_len(config.steps, config.skip)?;
        if config.samples < 2 {
            return Err(ChaosError::InvalidParameter(
                "a sweep needs at least 2 growth rate samples".into(),
            ));
        }

        Ok(Self {
            map,
            r_range,
            y_range,
            steps: config.steps,
            skip: config.skip,
            samples: config.samples,
        })
    }

    pub fn map(&self) -> MapKind {
        self.map
    }

    pub fn r_range(&self) -> (f64, f64) {
        self.r_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// The growth rates visited by the sweep.
    pub fn rates(&self) -> Vec<f64> {
        linspace(self.r_range.0, self.r_range.1, self.samples)
    }

    /// Run the full sweep.
    pub fn sample(&self) -> Result<BifurcationDiagram, ChaosError> {
        self.sweep(None)
    }

    /// Run the sweep, stopping with [`ChaosError::Cancelled`] once `cancel` is set.
    ///
    /// The flag is checked before each growth rate, so at most one final-state
    /// computation per worker runs after cancellation.
    pub fn sample_cancellable(
        &self,
        cancel: &AtomicBool,
    ) -> Result<BifurcationDiagram, ChaosError> {
        self.sweep(Some(cancel))
    }

    fn sweep(&self, cancel: Option<&AtomicBool>) -> Result<BifurcationDiagram, ChaosError> {
        let config = FinalStateConfig {
            steps: self.steps,
            skip: self.skip,
            x0: DEFAULT_X0,
            ..Default::default()
        };
        let rates = self.rates();
        debug!(
            "bifurcation sweep of {} map: r in [{}, {}], {} samples, steps={}, skip={}",
            self.map,
            self.r_range.0,
            self.r_range.1,
            rates.len(),
            self.steps,
            self.skip
        );

        let chunks: Vec<Vec<BifurcationPoint>> = rates
            .par_iter()
            .map(|&r| {
                if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                    return Err(ChaosError::Cancelled);
                }
                let state = FinalStateSampler::new(self.map, r, &config)?.sample()?;
                trace!("r={r}: {} final states", state.values.len());
                Ok(state
                    .values
                    .into_iter()
                    .map(|value| BifurcationPoint { r, value })
                    .collect::<Vec<_>>())
            })
            .collect::<Result<_, ChaosError>>()?;

        let points: Vec<BifurcationPoint> = chunks.into_iter().flatten().collect();
        debug!("bifurcation sweep produced {} points", points.len());

        Ok(BifurcationDiagram {
            map: self.map,
            points,
            r_range: self.r_range,
            y_range: self.y_range,
        })
    }
}
