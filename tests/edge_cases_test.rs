//! Edge case and property tests for the split engine library.
//!
//! Covers the allocation contract: idempotence, conservation, toggle
//! symmetry, bulk toggles, derived select-all state, and NaN contamination.

use split_engine::SplitEngine;
use std::io::Cursor;

const EPSILON: f64 = 1e-9;

fn load(csv: &str) -> SplitEngine {
    let mut engine = SplitEngine::new();
    engine.load_csv(Cursor::new(csv)).unwrap();
    engine
}

fn totals(engine: &SplitEngine) -> Vec<f64> {
    engine
        .participants()
        .iter()
        .map(|p| p.total.value())
        .collect()
}

// ==================== IDEMPOTENCE ====================

#[test]
fn test_recompute_twice_yields_identical_totals() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");
    engine.toggle(0, 0).unwrap();
    engine.toggle(1, 0).unwrap();
    engine.toggle(1, 1).unwrap();

    let first = totals(&engine);
    engine.recompute();
    let second = totals(&engine);

    assert_eq!(first, second);
}

#[test]
fn test_totals_depend_only_on_current_flags() {
    // Two different toggle histories ending in the same flag state.
    let mut direct = load("Description,Amount\nDinner,30.00\n");
    direct.toggle(0, 0).unwrap();

    let mut roundabout = load("Description,Amount\nDinner,30.00\n");
    roundabout.toggle(0, 0).unwrap();
    roundabout.toggle(0, 1).unwrap();
    roundabout.toggle(0, 2).unwrap();
    roundabout.toggle(0, 1).unwrap();
    roundabout.toggle(0, 2).unwrap();

    assert_eq!(totals(&direct), totals(&roundabout));
}

// ==================== CONSERVATION ====================

#[test]
fn test_included_shares_sum_to_the_amount() {
    let mut engine = load("Description,Amount\nGroceries,73.41\n");
    engine.toggle(0, 0).unwrap();
    engine.toggle(0, 2).unwrap();

    let sum: f64 = totals(&engine).iter().sum();
    assert!((sum - 73.41).abs() < EPSILON);
}

#[test]
fn test_three_way_split_conserves_amount() {
    let mut engine = load("Description,Amount\nRent,1000.00\n");
    for p in 0..3 {
        engine.set_all_for_participant(p, true).unwrap();
    }

    let sum: f64 = totals(&engine).iter().sum();
    assert!((sum - 1000.0).abs() < EPSILON);
}

#[test]
fn test_unsplit_transaction_contributes_exactly_zero() {
    let engine = load("Description,Amount\nCoffee,10.00\n");
    assert_eq!(totals(&engine), vec![0.0, 0.0, 0.0]);
}

// ==================== TOGGLE SYMMETRY ====================

#[test]
fn test_double_toggle_restores_totals_exactly() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\nTaxi,7.35\n");
    engine.toggle(0, 0).unwrap();
    engine.toggle(1, 0).unwrap();
    engine.toggle(1, 2).unwrap();
    let before = totals(&engine);

    engine.toggle(2, 1).unwrap();
    engine.toggle(2, 1).unwrap();

    // Exact equality: totals are re-derived, not accumulated.
    assert_eq!(totals(&engine), before);
}

// ==================== BULK TOGGLE ====================

#[test]
fn test_bulk_toggle_sets_every_flag_and_total() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");
    engine.toggle(0, 0).unwrap(); // Coffee already shared with X
    engine.set_all_for_participant(1, true).unwrap();

    for tx in engine.transactions() {
        assert!(tx.included[1]);
    }

    // Coffee splits two ways, Rent is Y's alone.
    let expected_y = 10.0 / 2.0 + 1000.0 / 1.0;
    assert!((totals(&engine)[1] - expected_y).abs() < EPSILON);
}

#[test]
fn test_bulk_untoggle_clears_only_that_participant() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");
    engine.set_all_for_participant(0, true).unwrap();
    engine.set_all_for_participant(1, true).unwrap();

    engine.set_all_for_participant(0, false).unwrap();

    for tx in engine.transactions() {
        assert!(!tx.included[0]);
        assert!(tx.included[1]);
    }
    assert_eq!(totals(&engine)[0], 0.0);
    assert!((totals(&engine)[1] - 1010.0).abs() < EPSILON);
}

// ==================== DERIVED SELECT-ALL STATE ====================

#[test]
fn test_select_all_unchecked_with_no_transactions() {
    let engine = SplitEngine::new();
    for p in 0..3 {
        assert!(!engine.all_included(p));
    }
}

#[test]
fn test_select_all_checked_only_for_fully_included_participant() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");
    engine.set_all_for_participant(1, true).unwrap();

    assert!(!engine.all_included(0));
    assert!(engine.all_included(1));
    assert!(!engine.all_included(2));
}

#[test]
fn test_select_all_unchecks_after_single_toggle_off() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");
    engine.set_all_for_participant(0, true).unwrap();
    assert!(engine.all_included(0));

    engine.toggle(1, 0).unwrap();
    assert!(!engine.all_included(0));
}

// ==================== REFERENCE SCENARIOS ====================

#[test]
fn test_coffee_and_rent_scenario() {
    let mut engine = load("Description,Amount\nCoffee,10.00\nRent,1000.00\n");

    // Coffee shared by X and Y; Rent shared by all three.
    engine.toggle(0, 0).unwrap();
    engine.toggle(0, 1).unwrap();
    for p in 0..3 {
        engine.toggle(1, p).unwrap();
    }

    let t = totals(&engine);
    assert!((t[0] - (5.0 + 1000.0 / 3.0)).abs() < EPSILON);
    assert!((t[1] - (5.0 + 1000.0 / 3.0)).abs() < EPSILON);
    assert!((t[2] - 1000.0 / 3.0).abs() < EPSILON);

    // Display rounds to two places; internals stay unrounded.
    assert_eq!(engine.participants()[2].total.to_string(), "333.33");
}

#[test]
fn test_malformed_amount_yields_non_finite_total() {
    let mut engine = load("Description,Amount\nMystery,abc\n");
    engine.toggle(0, 1).unwrap();

    assert!(!engine.participants()[1].total.is_finite());
    assert!(engine.participants()[0].total.is_finite());
}

#[test]
fn test_lowercase_headers_do_not_match() {
    // Column matching is case-sensitive: without a `Description` column
    // every row is description-less and gets filtered out.
    let engine = load("description,amount\nCoffee,10.00\nRent,1000.00\n");
    assert!(engine.transactions().is_empty());
}

#[test]
fn test_empty_upload_yields_all_zero_totals() {
    let engine = load("Description,Amount\n");
    assert!(engine.transactions().is_empty());
    assert_eq!(totals(&engine), vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_negative_amounts_split_like_any_other() {
    let mut engine = load("Description,Amount\nRefund,-30.00\n");
    engine.toggle(0, 0).unwrap();
    engine.toggle(0, 1).unwrap();

    assert_eq!(totals(&engine), vec![-15.0, -15.0, 0.0]);
}
