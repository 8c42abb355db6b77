use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::types::ChaosError;

/// Bounds of a map: valid growth rates and the state range hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub r_min: f64,
    pub r_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl MapBounds {
    /// Whether `r` lies in `[r_min, r_max]`. NaN is never contained.
    pub fn contains_rate(&self, r: f64) -> bool {
        r >= self.r_min && r <= self.r_max
    }

    /// Whether `x` lies in `[y_min, y_max]`. NaN is never contained.
    pub fn contains_state(&self, x: f64) -> bool {
        x >= self.y_min && x <= self.y_max
    }
}

struct MapDef {
    name: &'static str,
    long_name: &'static str,
    bounds: MapBounds,
    f: fn(f64, f64) -> f64,
}

fn logistic(r: f64, x: f64) -> f64 {
    r * x * (1.0 - x)
}

fn cubic(r: f64, x: f64) -> f64 {
    r * x.powi(2) * (1.0 - x)
}

fn sine(r: f64, x: f64) -> f64 {
    r * (PI * x / 2.0).sin()
}

const LOGISTIC: MapDef = MapDef {
    name: "logistic",
    long_name: "Logistic Equation",
    bounds: MapBounds {
        r_min: 0.0,
        r_max: 4.0,
        y_min: 0.0,
        y_max: 1.0,
    },
    f: logistic,
};

const CUBIC: MapDef = MapDef {
    name: "cubic",
    long_name: "Cubic Equation",
    bounds: MapBounds {
        r_min: 0.0,
        r_max: 6.5,
        y_min: 0.0,
        y_max: 1.0,
    },
    f: cubic,
};

const SINE: MapDef = MapDef {
    name: "sine",
    long_name: "Sine Equation",
    bounds: MapBounds {
        r_min: 0.0,
        r_max: 2.0,
        y_min: 0.0,
        y_max: 2.0,
    },
    f: sine,
};

/// One-dimensional discrete maps x' = f(r, x).
///
/// - logistic: r·x·(1-x), r ∈ \[0, 4\], x ∈ \[0, 1\]
/// - cubic: r·x²·(1-x), r ∈ \[0, 6.5\], x ∈ \[0, 1\]
/// - sine: r·sin(πx/2), r ∈ \[0, 2\], x ∈ \[0, 2\]
///
/// The state range is only a hint: iterates are never clamped, so a caller
/// sees divergent values as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapKind {
    #[default]
    Logistic,
    Cubic,
    Sine,
}

impl MapKind {
    /// Every supported map.
    pub const ALL: [MapKind; 3] = [MapKind::Logistic, MapKind::Cubic, MapKind::Sine];

    fn def(self) -> &'static MapDef {
        match self {
            MapKind::Logistic => &LOGISTIC,
            MapKind::Cubic => &CUBIC,
            MapKind::Sine => &SINE,
        }
    }

    /// Select a map by name.
    pub fn from_name(name: &str) -> Result<Self, ChaosError> {
        let key = name.trim().to_ascii_lowercase();
        MapKind::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| ChaosError::UnknownMap(name.to_string()))
    }

    /// Short name, e.g. "logistic".
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Display name, e.g. "Logistic Equation".
    pub fn long_name(self) -> &'static str {
        self.def().long_name
    }

    pub fn bounds(self) -> MapBounds {
        self.def().bounds
    }

    pub fn r_min(self) -> f64 {
        self.def().bounds.r_min
    }

    pub fn r_max(self) -> f64 {
        self.def().bounds.r_max
    }

    pub fn y_min(self) -> f64 {
        self.def().bounds.y_min
    }

    pub fn y_max(self) -> f64 {
        self.def().bounds.y_max
    }

    /// Fail with [`ChaosError::Domain`] unless `r` is a valid growth rate.
    pub fn check_rate(self, r: f64) -> Result<(), ChaosError> {
        let bounds = self.bounds();
        if bounds.contains_rate(r) {
            Ok(())
        } else {
            Err(ChaosError::Domain {
                r,
                min: bounds.r_min,
                max: bounds.r_max,
            })
        }
    }

    /// Apply one iteration of the map.
    pub fn apply(self, r: f64, x: f64) -> Result<f64, ChaosError> {
        self.check_rate(r)?;
        Ok((self.def().f)(r, x))
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapKind {
    type Err = ChaosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapKind::from_name(s)
    }
}

/// Iterate a map from `x0`, returning `len` values where index 0 is `x0`.
///
/// Every step goes through [`MapKind::apply`], so two calls with the same
/// `map` and `r` apply the identical recurrence.
pub fn iterate(map: MapKind, r: f64, x0: f64, len: usize) -> Result<Vec<f64>, ChaosError> {
    let mut values = Vec::with_capacity(len);
    if len == 0 {
        return Ok(values);
    }
    values.push(x0);

    let mut x = x0;
    for _ in 1..len {
        x = map.apply(r, x)?;
        values.push(x);
    }

    Ok(values)
}
