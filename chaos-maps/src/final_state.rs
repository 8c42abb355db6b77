use crate::maps::{iterate, MapKind};
use crate::types::{ChaosError, FinalStateConfig};
use crate::utils::{sequence_len, validate_state};

/// Asymptotic values of an orbit at a single growth rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalState {
    /// Growth rate.
    pub r: f64,
    /// Iterates after the transient, `steps + 1` values.
    pub values: Vec<f64>,
    /// Constant companion sequence of the same length, for drawing the
    /// values against a reference line.
    pub marker: Vec<f64>,
}

impl FinalState {
    /// `(value, marker)` pairs, values first.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.marker.iter().copied())
    }
}

/// Samples the attractor of a map at a fixed growth rate.
///
/// Starts from a canonical initial state and skips a transient long
/// enough (2000 iterations by default) that only the long-run behaviour
/// is reported.
#[derive(Debug, Clone)]
pub struct FinalStateSampler {
    map: MapKind,
    r: f64,
    config: FinalStateConfig,
}

impl FinalStateSampler {
    pub fn new(map: MapKind, r: f64, config: &FinalStateConfig) -> Result<Self, ChaosError> {
        if config.steps == 0 {
            return Err(ChaosError::InvalidParameter(
                "the number of iterations must be greater than zero".into(),
            ));
        }
        sequence_len(config.steps, config.skip)?;
        map.check_rate(r)?;
        let bounds = map.bounds();
        validate_state(config.x0, bounds.y_min, bounds.y_max, "x0")?;

        Ok(Self {
            map,
            r,
            config: *config,
        })
    }

    /// Sampler with `steps = 1000`, `skip = 2000`, `x0 = 0.5`, marker `0.5`.
    pub fn with_defaults(map: MapKind, r: f64) -> Result<Self, ChaosError> {
        Self::new(map, r, &FinalStateConfig::default())
    }

    pub fn map(&self) -> MapKind {
        self.map
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn config(&self) -> &FinalStateConfig {
        &self.config
    }

    /// Iterate `steps + skip` times and return the post-transient tail.
    pub fn sample(&self) -> Result<FinalState, ChaosError> {
        let FinalStateConfig {
            steps,
            skip,
            x0,
            marker,
        } = self.config;

        let mut values = iterate(self.map, self.r, x0, sequence_len(steps, skip)?)?;
        values.drain(..skip);
        let marker = vec![marker; values.len()];

        Ok(FinalState {
            r: self.r,
            values,
            marker,
        })
    }
}
