//! Property checks for fuel calculation and trip comparison
//!
//! Sweeps a grid of realistic inputs rather than single examples.

use fuelcalc_domain::service::{compare, compare_inputs, compute};
use fuelcalc_domain::{TripComparison, TripInputs};
use fuelcalc_types::Error;

const DISTANCES: [f64; 5] = [0.5, 12.0, 100.0, 437.25, 2500.0];
const EFFICIENCIES: [f64; 4] = [3.9, 6.0, 8.0, 14.7];
const PRICES: [f64; 4] = [0.89, 1.5, 1.999, 102.85];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn all_inputs() -> Vec<TripInputs> {
    let mut inputs = Vec::new();
    for &d in &DISTANCES {
        for &e in &EFFICIENCIES {
            for &p in &PRICES {
                inputs.push(TripInputs::new(d, e, p));
            }
        }
    }
    inputs
}

#[test]
fn derived_fields_follow_formulas() {
    for inputs in all_inputs() {
        let calc = compute(inputs.distance, inputs.fuel_efficiency, inputs.fuel_price).unwrap();
        assert!(close(calc.fuel_needed(), inputs.distance * inputs.fuel_efficiency / 100.0));
        assert!(close(calc.total_cost(), calc.fuel_needed() * calc.fuel_price()));
        assert!(close(calc.cost_per_km(), calc.total_cost() / calc.distance()));
        assert_eq!(calc.inputs(), inputs);
    }
}

#[test]
fn compute_is_deterministic() {
    for inputs in all_inputs() {
        let first = compute(inputs.distance, inputs.fuel_efficiency, inputs.fuel_price).unwrap();
        let second = compute(inputs.distance, inputs.fuel_efficiency, inputs.fuel_price).unwrap();
        assert_eq!(first.fuel_needed().to_bits(), second.fuel_needed().to_bits());
        assert_eq!(first.total_cost().to_bits(), second.total_cost().to_bits());
        assert_eq!(first.cost_per_km().to_bits(), second.cost_per_km().to_bits());
    }
}

#[test]
fn scaling_distance_scales_volume_and_cost_only() {
    for inputs in all_inputs() {
        let base = compute(inputs.distance, inputs.fuel_efficiency, inputs.fuel_price).unwrap();
        for k in [0.25, 3.0, 10.0] {
            let scaled =
                compute(inputs.distance * k, inputs.fuel_efficiency, inputs.fuel_price).unwrap();
            assert!(close(scaled.fuel_needed(), base.fuel_needed() * k));
            assert!(close(scaled.total_cost(), base.total_cost() * k));
            assert!(close(scaled.cost_per_km(), base.cost_per_km()));
        }
    }
}

#[test]
fn savings_are_antisymmetric() {
    let inputs = all_inputs();
    for (a, b) in inputs.iter().zip(inputs.iter().rev()) {
        let forward = compare_inputs(*a, *b).unwrap();
        let backward = compare_inputs(*b, *a).unwrap();
        assert_eq!(forward.savings(), -backward.savings());
        assert!(close(
            forward.savings(),
            forward.vehicle1().total_cost() - forward.vehicle2().total_cost()
        ));
    }
}

#[test]
fn zero_distance_is_invalid_input() {
    for &e in &EFFICIENCIES {
        for &p in &PRICES {
            match compute(0.0, e, p) {
                Err(Error::InvalidInput { field, value, .. }) => {
                    assert_eq!(field, "distance");
                    assert_eq!(value, 0.0);
                }
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }
}

#[test]
fn reference_comparison() {
    let comparison = compare(
        compute(100.0, 8.0, 1.5).unwrap(),
        compute(100.0, 6.0, 1.5).unwrap(),
    );
    assert!(close(comparison.vehicle1().total_cost(), 12.0));
    assert!(close(comparison.vehicle2().total_cost(), 9.0));
    assert!(close(comparison.savings(), 3.0));

    let json = serde_json::to_string(&comparison).unwrap();
    assert_eq!(TripComparison::from_json(&json).unwrap(), comparison);
}

#[test]
fn extreme_magnitudes_error_instead_of_infinity() {
    let cases = [
        (1e300, 1e10, 1e10, "totalCost"),
        (f64::MAX, 200.0, 1.5, "fuelNeeded"),
        (1e-300, 1e-300, 1.5, "fuelNeeded"),
    ];
    for (d, e, p, expected) in cases {
        match compute(d, e, p) {
            Err(Error::InvalidInput { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidInput for {:?}, got {:?}", (d, e, p), other),
        }
    }
}

#[test]
fn largest_valid_results_serialize_and_parse_back() {
    let huge = compute(1e300, 1e10, 1.0).unwrap();
    let comparison = compare(huge, compute(1.0, 1.0, 1.0).unwrap());

    let json = serde_json::to_string(&comparison).unwrap();
    assert!(!json.contains("null"));
    let parsed: TripComparison = serde_json::from_str(&json).unwrap();
    assert!(close(parsed.vehicle1().total_cost(), comparison.vehicle1().total_cost()));
    assert!(close(parsed.savings(), comparison.savings()));
}
