/// Error types for map iteration and diagram sampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChaosError {
    #[error("unknown map: '{0}'. Use 'logistic', 'cubic', or 'sine'")]
    UnknownMap(String),

    #[error("the growth parameter r must be between {min} and {max} (got {r})")]
    Domain { r: f64, min: f64, max: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("sampling cancelled")]
    Cancelled,
}

/// Default initial state for final-state sampling.
pub const DEFAULT_X0: f64 = 0.5;

/// Default height of the constant companion sequence returned with final states.
pub const DEFAULT_MARKER: f64 = 0.5;

/// Number of evenly spaced growth rates in a bifurcation sweep.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Configuration for final-state sampling at a single growth rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalStateConfig {
    /// Number of iterations reported after the transient.
    pub steps: usize,
    /// Number of leading iterations discarded as transient.
    pub skip: usize,
    /// Initial state.
    pub x0: f64,
    /// Value of the constant companion sequence.
    pub marker: f64,
}

impl Default for FinalStateConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            skip: 2000,
            x0: DEFAULT_X0,
            marker: DEFAULT_MARKER,
        }
    }
}

/// Configuration for a bifurcation sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BifurcationConfig {
    /// Growth rate range (r0, r1). None for the map's full domain.
    pub r_range: Option<(f64, f64)>,
    /// State range (y0, y1) handed to the renderer. None for the map's range hint.
    pub y_range: Option<(f64, f64)>,
    /// Iterations reported per growth rate after the transient.
    pub steps: usize,
    /// Transient iterations discarded per growth rate.
    pub skip: usize,
    /// Number of growth rates sampled, endpoints included.
    pub samples: usize,
}

impl Default for BifurcationConfig {
    fn default() -> Self {
        Self {
            r_range: None,
            y_range: None,
            steps: 100,
            skip: 200,
            samples: DEFAULT_SAMPLES,
        }
    }
}
