//! The pure pricing engine.

use karat::models::{Material, PriceSet, WageEntry};
use karat::services::pricing::compute_total;
use karat::KaratError;

fn prices() -> PriceSet {
    PriceSet {
        gold_without_tax: 5500.0,
        gold_with_tax: 6000.0,
        silver_without_tax: 70.0,
        silver_with_tax: 75.0,
    }
}

fn wage(rate: f64) -> WageEntry {
    WageEntry {
        id: 1,
        sequence_number: 1,
        label: "Default".to_string(),
        rate,
    }
}

// ---------------------------------------------------------------------------
// Price selection
// ---------------------------------------------------------------------------

#[test]
fn picks_the_matching_price_for_every_combination() {
    let table = [
        (Material::Gold, true, 6000.0),
        (Material::Gold, false, 5500.0),
        (Material::Silver, true, 75.0),
        (Material::Silver, false, 70.0),
    ];
    for (material, tax_included, expected) in table {
        let result = compute_total("1", material, tax_included, &prices(), &wage(500.0)).unwrap();
        assert_eq!(result.price_per_gram, expected);
        assert_eq!(result.material, material);
        assert_eq!(result.tax_included, tax_included);
    }
}

// ---------------------------------------------------------------------------
// The total formula
// ---------------------------------------------------------------------------

#[test]
fn total_is_weight_times_price_plus_wage() {
    let result = compute_total("10", Material::Gold, true, &prices(), &wage(500.0)).unwrap();
    assert_eq!(result.total, 60_500.0);
    assert_eq!(result.weight, 10.0);
    assert_eq!(result.wage_amount, 500.0);
}

#[test]
fn zero_weight_charges_only_the_making_charge() {
    let result = compute_total("0", Material::Silver, false, &prices(), &wage(350.0)).unwrap();
    assert_eq!(result.total, 350.0);
}

#[test]
fn the_wage_does_not_scale_with_weight() {
    let light = compute_total("1", Material::Gold, true, &prices(), &wage(500.0)).unwrap();
    let heavy = compute_total("100", Material::Gold, true, &prices(), &wage(500.0)).unwrap();
    assert_eq!(light.total - light.weight * light.price_per_gram, 500.0);
    assert_eq!(heavy.total - heavy.weight * heavy.price_per_gram, 500.0);
}

// ---------------------------------------------------------------------------
// Weight parsing
// ---------------------------------------------------------------------------

#[test]
fn empty_weight_is_rejected() {
    for text in ["", "   "] {
        let err = compute_total(text, Material::Gold, true, &prices(), &wage(500.0)).unwrap_err();
        assert!(matches!(err, KaratError::InvalidInput(_)));
    }
}

#[test]
fn non_numeric_weight_is_rejected() {
    for text in ["abc", "12,5", "1.2.3"] {
        let err = compute_total(text, Material::Gold, true, &prices(), &wage(500.0)).unwrap_err();
        assert!(matches!(err, KaratError::InvalidInput(_)));
    }
}

#[test]
fn negative_and_non_finite_weights_are_rejected() {
    for text in ["-2", "nan", "inf"] {
        let err = compute_total(text, Material::Gold, true, &prices(), &wage(500.0)).unwrap_err();
        assert!(matches!(err, KaratError::InvalidInput(_)));
    }
}

#[test]
fn intermediate_decimal_entry_still_computes() {
    // The number pad leaves a trailing "." while the user is mid-entry.
    let result = compute_total("12.", Material::Gold, false, &prices(), &wage(500.0)).unwrap();
    assert_eq!(result.weight, 12.0);
}
