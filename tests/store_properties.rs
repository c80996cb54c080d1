//! Shift-store properties: chunk-hash round-tripping and weighted-average
//! identity.

mod common;

use nmrhose::store::{chunk_index_of, ShiftEntry};
use std::collections::HashMap;

#[test]
fn s5_chunk_index_is_deterministic() {
    let a = chunk_index_of("HHHC(HHC/HHH/)");
    let b = chunk_index_of("HHHC(HHC/HHH/)");
    assert_eq!(a, b);
    assert!(a < 256);
}

#[test]
fn property_3_hash_round_trip_every_key_lands_in_its_own_chunk() {
    let keys = [
        "H*C*C(H,H,*C,*C/H,H,*C,*&/H*&)",
        "HHHC(HHC/HHH/)",
        "HHCC(HHH,HHH//)",
        "HHHC(=OC/,HHH/)",
        "=OCC(,HHH,HHH//)",
        "HHCC(HH,HH,C,C/HH,HH,C,&/HH&)",
    ];
    let store = common::mock_store(
        &keys.iter().map(|&k| (k, "C", 10.0)).collect::<Vec<_>>(),
    );
    for &key in &keys {
        let idx = chunk_index_of(key);
        assert!(store.load_chunk(idx).unwrap().contains_key(key), "key {key} missing from chunk {idx}");
    }
}

#[test]
fn s6_weighted_avg_matches_reference_scenario() {
    let mut solvents = HashMap::new();
    solvents.insert("A".to_string(), nmrhose::store::SolventStats { min: 9.0, max: 11.0, avg: 10.0, count: 3 });
    solvents.insert("B".to_string(), nmrhose::store::SolventStats { min: 19.0, max: 21.0, avg: 20.0, count: 7 });
    let entry = ShiftEntry { nucleus: "C".to_string(), smiles: "CC".to_string(), solvents };
    assert_eq!(entry.weighted_avg(), 17.0);
}

#[test]
fn property_4_weighted_avg_of_all_zero_counts_is_zero() {
    let mut solvents = HashMap::new();
    solvents.insert("A".to_string(), nmrhose::store::SolventStats { min: 0.0, max: 0.0, avg: 10.0, count: 0 });
    let entry = ShiftEntry { nucleus: "C".to_string(), smiles: "CC".to_string(), solvents };
    assert_eq!(entry.weighted_avg(), 0.0);
}
