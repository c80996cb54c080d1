//! SMILES-driven end-to-end tests for forward lookup and the reverse
//! estimator: truncation-fallback monotonicity and estimator sort order.

mod common;

use nmrhose::estimator::{estimate, EstimateParams};
use nmrhose::lookup::predict_shifts;
use nmrhose::molecule::from_smiles;

#[test]
fn property_5_exact_hits_are_preferred_over_truncated_ones() {
    let mol = from_smiles("CCC").unwrap();
    use nmrhose::molecule::MoleculeGraph;
    mol.ensure_derived_tables();
    let exact_key = nmrhose::hose::hose_default(&mol, 0);

    let store = common::mock_store(&[(&exact_key, "CCC", 14.1)]);
    let results = predict_shifts(&store, "CCC", "13C", 4).unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.hose == exact_key));
}

#[test]
fn property_5_a_truncated_key_is_a_prefix_of_the_generated_one() {
    let mol = from_smiles("CCC").unwrap();
    use nmrhose::molecule::MoleculeGraph;
    mol.ensure_derived_tables();
    let generated = nmrhose::hose::hose_default(&mol, 0);
    let truncated = generated[..generated.rfind('(').unwrap()].to_string();

    let store = common::mock_store(&[(&truncated, "CCC", 14.1)]);
    let results = predict_shifts(&store, "CCC", "13C", 4).unwrap();

    assert!(!results.is_empty());
    for result in &results {
        assert!(generated.starts_with(&result.hose));
    }
}

#[test]
fn forward_lookup_over_ethanol_finds_each_carbon() {
    let mol = from_smiles("CCO").unwrap();
    use nmrhose::molecule::MoleculeGraph;
    mol.ensure_derived_tables();
    let key0 = nmrhose::hose::hose_default(&mol, 0);
    let key1 = nmrhose::hose::hose_default(&mol, 1);

    let store = common::mock_store(&[(&key0, "CCO", 18.0), (&key1, "CCO", 58.0)]);
    let results = predict_shifts(&store, "CCO", "13C", 4).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().any(|r| r.shift == 18.0));
    assert!(results.iter().any(|r| r.shift == 58.0));
}

#[test]
fn s7_estimator_scores_a_perfect_two_peak_match() {
    let mol = from_smiles("CC").unwrap();
    use nmrhose::molecule::MoleculeGraph;
    mol.ensure_derived_tables();
    let key = nmrhose::hose::hose_default(&mol, 0);

    // Two HOSE keys both belonging to "CC", each hitting a distinct peak
    // with zero error.
    let store = common::mock_store(&[(&key, "CC", 14.0), ("some-other-key", "CC", 23.0)]);

    let params = EstimateParams {
        peaks: vec![14.0, 23.0],
        tolerance: 2.0,
        min_matches: 2,
        nucleus: "13C".to_string(),
        result_cap: 50,
    };
    let results = estimate(&store, &params).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].smiles, "CC");
    assert_eq!(results[0].matched, 2);
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn property_6_estimator_results_are_sorted_by_score_then_matched_count() {
    let store = common::mock_store(&[
        ("keyA1", "CCO", 14.0),
        ("keyA2", "CCO", 23.0),
        ("keyB1", "CCC", 14.0),
        ("keyC1", "CCN", 14.2),
        ("keyC2", "CCN", 22.8),
    ]);
    let params = EstimateParams {
        peaks: vec![14.0, 23.0],
        tolerance: 2.0,
        min_matches: 1,
        nucleus: "13C".to_string(),
        result_cap: 50,
    };
    let results = estimate(&store, &params).unwrap();

    assert!(results.len() >= 2);
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.matched >= b.matched),
            "results not sorted: {a:?} before {b:?}"
        );
    }
}
