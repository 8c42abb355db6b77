use log::debug;

use crate::maps::{iterate, MapKind};
use crate::types::ChaosError;
use crate::utils::{sequence_len, validate_state};

/// Time series of one or two orbits sharing a map and growth rate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSeries {
    /// Iteration indices 0..=n+skip.
    pub time: Vec<usize>,
    /// Orbit started from x0.
    pub y1: Vec<f64>,
    /// Orbit started from x1, if one was given.
    pub y2: Option<Vec<f64>>,
}

/// Post-transient view of an [`OrbitSeries`], for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleSlice<'a> {
    pub time: &'a [usize],
    pub y1: &'a [f64],
    pub y2: Option<&'a [f64]>,
}

#[derive(Debug, Clone)]
enum OrbitState {
    Uninitialized,
    Materialized(OrbitSeries),
}

/// Orbit(s) of a map from one or two initial conditions.
///
/// Parameters are validated at construction. The sequences have
/// `steps + skip + 1` entries, are computed on the first request, and are
/// never recomputed afterwards.
#[derive(Debug, Clone)]
pub struct Orbit {
    map: MapKind,
    r: f64,
    steps: usize,
    skip: usize,
    x0: f64,
    x1: Option<f64>,
    state: OrbitState,
}

impl Orbit {
    /// Create an orbit.
    ///
    /// # Arguments
    /// * `map` - Map to iterate.
    /// * `r` - Growth rate, inside the map's domain.
    /// * `steps` - Number of iterations after the transient (> 0).
    /// * `skip` - Number of transient iterations hidden from [`Orbit::visible_slice`].
    /// * `x0` - First initial condition, inside the map's state range.
    /// * `x1` - Optional second initial condition, inside the map's state range.
    pub fn new(
        map: MapKind,
        r: f64,
        steps: usize,
        skip: usize,
        x0: f64,
        x1: Option<f64>,
    ) -> Result<Self, ChaosError> {
        if steps == 0 {
            return Err(ChaosError::InvalidParameter(
                "the number of iterations must be greater than zero".into(),
            ));
        }
        sequence_len(steps, skip)?;
        map.check_rate(r)?;
        let bounds = map.bounds();
        validate_state(x0, bounds.y_min, bounds.y_max, "x0")?;
        if let Some(x1) = x1 {
            validate_state(x1, bounds.y_min, bounds.y_max, "x1")?;
        }

        Ok(Self {
            map,
            r,
            steps,
            skip,
            x0,
            x1,
            state: OrbitState::Uninitialized,
        })
    }

    pub fn map(&self) -> MapKind {
        self.map
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x1(&self) -> Option<f64> {
        self.x1
    }

    /// Total sequence length, `steps + skip + 1`.
    pub fn sequence_len(&self) -> usize {
        self.steps + self.skip + 1
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.state, OrbitState::Materialized(_))
    }

    /// Compute the sequences on first call; later calls return the cache.
    pub fn materialize(&mut self) -> Result<&OrbitSeries, ChaosError> {
        if let OrbitState::Uninitialized = self.state {
            let series = self.compute()?;
            debug!(
                "materialized {} orbit: r={}, len={}, two_orbits={}",
                self.map,
                self.r,
                series.time.len(),
                series.y2.is_some()
            );
            self.state = OrbitState::Materialized(series);
        }

        match &self.state {
            OrbitState::Materialized(series) => Ok(series),
            OrbitState::Uninitialized => Err(ChaosError::Precondition(
                "orbit sequences were not materialized".into(),
            )),
        }
    }

    fn compute(&self) -> Result<OrbitSeries, ChaosError> {
        let len = self.sequence_len();
        let time: Vec<usize> = (0..len).collect();
        let y1 = iterate(self.map, self.r, self.x0, len)?;
        let y2 = match self.x1 {
            Some(x1) => Some(iterate(self.map, self.r, x1, len)?),
            None => None,
        };
        Ok(OrbitSeries { time, y1, y2 })
    }

    /// Pointwise difference `y2[t] - y1[t]` over the whole sequence.
    ///
    /// Fails with [`ChaosError::Precondition`] when no second initial
    /// condition was given.
    pub fn difference(&mut self) -> Result<Vec<f64>, ChaosError> {
        if self.x1.is_none() {
            return Err(ChaosError::Precondition(
                "the difference needs a second initial condition x1".into(),
            ));
        }
        let series = self.materialize()?;
        let y2 = series.y2.as_deref().unwrap_or_default();
        Ok(y2.iter().zip(&series.y1).map(|(b, a)| b - a).collect())
    }

    /// The sequences with the first `skip` entries removed.
    pub fn visible_slice(&mut self) -> Result<VisibleSlice<'_>, ChaosError> {
        let skip = self.skip;
        let series = self.materialize()?;
        Ok(VisibleSlice {
            time: &series.time[skip..],
            y1: &series.y1[skip..],
            y2: series.y2.as_deref().map(|y2| &y2[skip..]),
        })
    }
}
