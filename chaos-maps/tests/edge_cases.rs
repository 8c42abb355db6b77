//! Edge case and cross-module behaviour tests.

use std::sync::atomic::AtomicBool;

use approx::assert_abs_diff_eq;
use chaos_maps::*;

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn reference_map_values() {
    assert_eq!(MapKind::Logistic.apply(4.0, 0.25).unwrap(), 0.75);
    assert_eq!(MapKind::Cubic.apply(2.0, 0.5).unwrap(), 0.25);
    assert_abs_diff_eq!(MapKind::Sine.apply(0.5, 1.0).unwrap(), 0.5, epsilon = 1e-15);
}

#[test]
fn logistic_rejects_rate_five() {
    let err = MapKind::Logistic.apply(5.0, 0.5).unwrap_err();
    assert!(matches!(err, ChaosError::Domain { .. }));
    assert!(err.to_string().contains("between 0 and 4"));
}

#[test]
fn unknown_map_name() {
    let err = MapKind::from_name("henon").unwrap_err();
    assert_eq!(err, ChaosError::UnknownMap("henon".into()));
}

// ============================================================================
// Orbits
// ============================================================================

#[test]
fn logistic_period_two_orbit() {
    let (n, x0) = (100, 0.4);
    let mut orbit = Orbit::new(MapKind::Logistic, 3.2, n, 0, x0, None).unwrap();
    let series = orbit.materialize().unwrap();

    assert_eq!(series.time.len(), n + 1);
    assert_eq!(series.time[0], 0);
    assert_eq!(series.time[n], n);
    assert_eq!(series.time.iter().sum::<usize>(), n * (n + 1) / 2);
    assert_eq!(series.y1.len(), n + 1);
    assert_eq!(series.y1[0], x0);
    assert_eq!(series.y1[n], series.y1[n - 2]);
    assert_eq!(series.y1[n - 1], series.y1[n - 3]);
}

#[test]
fn butterfly_effect_stays_bounded() {
    let (n, x0, x1) = (50, 0.2, 0.2000001);
    let mut orbit = Orbit::new(MapKind::Logistic, 4.0, n, 0, x0, Some(x1)).unwrap();
    let diff = orbit.difference().unwrap();

    assert_eq!(diff.len(), n + 1);
    assert!(diff.iter().all(|&d| d > -1000.0 && d < 1000.0));
    assert_abs_diff_eq!(diff[0], x1 - x0, epsilon = 1e-15);
    // the orbits separate well beyond the initial offset
    assert!(diff.iter().any(|d| d.abs() > 0.1));
}

#[test]
fn materialize_twice_is_byte_identical() {
    let mut orbit = Orbit::new(MapKind::Cubic, 6.2, 300, 20, 0.55, Some(0.56)).unwrap();
    let first = orbit.materialize().unwrap().clone();
    let second = orbit.materialize().unwrap();

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(first.time, second.time);
    assert_eq!(bits(first.y1.as_slice()), bits(second.y1.as_slice()));
    assert_eq!(
        bits(first.y2.as_deref().unwrap()),
        bits(second.y2.as_deref().unwrap())
    );
}

#[test]
fn visible_slice_excludes_transient() {
    let mut orbit = Orbit::new(MapKind::Logistic, 3.7, 30, 100, 0.5, Some(0.6)).unwrap();
    let full = orbit.materialize().unwrap().clone();
    let visible = orbit.visible_slice().unwrap();

    assert_eq!(visible.time.first(), Some(&100));
    assert_eq!(visible.time.last(), Some(&130));
    assert_eq!(visible.y1, &full.y1[100..]);
    assert_eq!(visible.y2, full.y2.as_deref().map(|y| &y[100..]));
}

#[test]
fn orbit_validation() {
    assert!(matches!(
        Orbit::new(MapKind::Logistic, 3.0, 0, 0, 0.5, None),
        Err(ChaosError::InvalidParameter(_))
    ));
    assert!(matches!(
        Orbit::new(MapKind::Logistic, 5.0, 10, 0, 0.5, None),
        Err(ChaosError::Domain { .. })
    ));
    assert!(matches!(
        Orbit::new(MapKind::Cubic, 3.0, 10, 0, 0.5, Some(1.01)),
        Err(ChaosError::InvalidParameter(_))
    ));
}

// ============================================================================
// Final states and bifurcation diagrams
// ============================================================================

#[test]
fn final_state_in_chaotic_regime_stays_in_range() {
    let state = FinalStateSampler::with_defaults(MapKind::Logistic, 3.9)
        .unwrap()
        .sample()
        .unwrap();
    assert_eq!(state.values.len(), 1001);
    assert!(state.values.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert!(state.marker.iter().all(|&m| m == DEFAULT_MARKER));
}

#[test]
fn bifurcation_rejects_bad_ranges() {
    let descending = BifurcationConfig {
        r_range: Some((4.0, 1.0)),
        ..Default::default()
    };
    assert!(matches!(
        BifurcationSampler::new(MapKind::Logistic, &descending),
        Err(ChaosError::InvalidRange(_))
    ));

    let out_of_bounds = BifurcationConfig {
        r_range: Some((0.0, 7.0)),
        ..Default::default()
    };
    assert!(matches!(
        BifurcationSampler::new(MapKind::Cubic, &out_of_bounds),
        Err(ChaosError::InvalidRange(_))
    ));

    assert!(matches!(
        range_from_slice(&[1.0, 2.0, 3.0], "growth rate"),
        Err(ChaosError::InvalidRange(_))
    ));
}

#[test]
fn bifurcation_default_sweep_size() {
    let config = BifurcationConfig {
        r_range: Some((2.5, 4.0)),
        steps: 5,
        skip: 100,
        ..Default::default()
    };
    let diagram = BifurcationSampler::new(MapKind::Logistic, &config)
        .unwrap()
        .sample()
        .unwrap();
    assert_eq!(diagram.points.len(), DEFAULT_SAMPLES * 6);
    assert_eq!(diagram.r_range, (2.5, 4.0));
    assert_eq!(diagram.y_range, (0.0, 1.0));

    let r_min = diagram.points.iter().map(|p| p.r).fold(f64::INFINITY, f64::min);
    let r_max = diagram.points.iter().map(|p| p.r).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(r_min, 2.5);
    assert_eq!(r_max, 4.0);
}

#[test]
fn bifurcation_period_doubling_cascade() {
    // number of distinct final states grows 1 -> 2 -> 4 along the sweep
    let distinct = |r: f64| {
        let config = BifurcationConfig {
            r_range: Some((r, r + 1e-9)),
            steps: 64,
            skip: 4000,
            samples: 2,
            ..Default::default()
        };
        let diagram = BifurcationSampler::new(MapKind::Logistic, &config)
            .unwrap()
            .sample()
            .unwrap();
        let mut values: Vec<f64> = diagram
            .points
            .iter()
            .filter(|p| p.r == r)
            .map(|p| (p.value * 1e6).round())
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values.len()
    };

    assert_eq!(distinct(2.9), 1);
    assert_eq!(distinct(3.2), 2);
    assert_eq!(distinct(3.5), 4);
}

#[test]
fn bifurcation_sweep_is_parallel_deterministic() {
    let config = BifurcationConfig {
        steps: 8,
        skip: 30,
        samples: 64,
        ..Default::default()
    };
    let sampler = BifurcationSampler::new(MapKind::Sine, &config).unwrap();
    let a = sampler.sample().unwrap();
    let b = sampler.sample_cancellable(&AtomicBool::new(false)).unwrap();
    assert_eq!(a.points, b.points);
}

#[test]
fn bifurcation_cancellation() {
    let sampler =
        BifurcationSampler::new(MapKind::Logistic, &BifurcationConfig::default()).unwrap();
    let result = sampler.sample_cancellable(&AtomicBool::new(true));
    assert_eq!(result.unwrap_err(), ChaosError::Cancelled);
}
