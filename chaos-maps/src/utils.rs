use crate::types::ChaosError;

/// `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// The last value is set to `end` exactly so that a sweep up to a domain
/// bound never steps past it through rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let mut values: Vec<f64> = (0..n)
                .map(|i| start + (end - start) * i as f64 / (n - 1) as f64)
                .collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Build a `(lo, hi)` pair from a slice, failing unless it has exactly two elements.
pub fn range_from_slice(values: &[f64], what: &str) -> Result<(f64, f64), ChaosError> {
    match values {
        [lo, hi] => Ok((*lo, *hi)),
        _ => Err(ChaosError::InvalidRange(format!(
            "the {what} range should contain two elements, got {}",
            values.len()
        ))),
    }
}

/// Validate that `range` is strictly ascending and inside `[min, max]`.
pub fn validate_range(
    range: (f64, f64),
    min: f64,
    max: f64,
    what: &str,
) -> Result<(), ChaosError> {
    let (lo, hi) = range;
    if lo >= min && lo < hi && hi <= max {
        Ok(())
    } else {
        Err(ChaosError::InvalidRange(format!(
            "the {what} range [{lo}, {hi}] must be between {min} and {max}, and in ascending order"
        )))
    }
}

/// Length of an iterated sequence, `steps + skip + 1`, rejecting overflow.
pub fn sequence_len(steps: usize, skip: usize) -> Result<usize, ChaosError> {
    steps
        .checked_add(skip)
        .and_then(|len| len.checked_add(1))
        .ok_or_else(|| {
            ChaosError::InvalidParameter(format!(
                "{steps} iterations plus {skip} skipped ones is too long a sequence"
            ))
        })
}

/// Validate that an initial condition lies in `[min, max]`.
pub fn validate_state(x: f64, min: f64, max: f64, what: &str) -> Result<(), ChaosError> {
    if x >= min && x <= max {
        Ok(())
    } else {
        Err(ChaosError::InvalidParameter(format!(
            "the initial condition {what} should be in [{min}, {max}] (got {x})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, eps: f64) {
        assert!(
            (a - b).abs() < eps,
            "expected {a} ≈ {b} (diff = {})",
            (a - b).abs()
        );
    }

    #[test]
    fn test_linspace() {
        let v = linspace(0.0, 1.0, 11);
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[10], 1.0);
        assert_near(v[3], 0.3, 1e-12);
    }

    #[test]
    fn test_linspace_endpoint_exact() {
        let v = linspace(0.0, 6.5, 1000);
        assert_eq!(v[999], 6.5);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn test_range_from_slice() {
        assert_eq!(range_from_slice(&[1.0, 4.0], "r").unwrap(), (1.0, 4.0));
        assert!(matches!(
            range_from_slice(&[1.0], "r"),
            Err(ChaosError::InvalidRange(_))
        ));
        assert!(range_from_slice(&[1.0, 2.0, 3.0], "r").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range((1.0, 4.0), 0.0, 4.0, "r").is_ok());
        assert!(validate_range((4.0, 1.0), 0.0, 4.0, "r").is_err());
        assert!(validate_range((2.0, 2.0), 0.0, 4.0, "r").is_err());
        assert!(validate_range((-1.0, 2.0), 0.0, 4.0, "r").is_err());
        assert!(validate_range((1.0, 4.5), 0.0, 4.0, "r").is_err());
        assert!(validate_range((f64::NAN, 2.0), 0.0, 4.0, "r").is_err());
    }

    #[test]
    fn test_validate_state() {
        assert!(validate_state(0.0, 0.0, 1.0, "x0").is_ok());
        assert!(validate_state(1.0, 0.0, 1.0, "x0").is_ok());
        assert!(validate_state(1.5, 0.0, 1.0, "x0").is_err());
        assert!(validate_state(f64::NAN, 0.0, 1.0, "x0").is_err());
    }

    #[test]
    fn test_sequence_len() {
        assert_eq!(sequence_len(100, 0).unwrap(), 101);
        assert_eq!(sequence_len(1000, 2000).unwrap(), 3001);
        assert!(matches!(
            sequence_len(1, usize::MAX),
            Err(ChaosError::InvalidParameter(_))
        ));
        assert!(matches!(
            sequence_len(usize::MAX, 0),
            Err(ChaosError::InvalidParameter(_))
        ));
    }
}
