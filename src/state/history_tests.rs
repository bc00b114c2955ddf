//! Tests for the history ledger.

use super::*;

fn entry(value: f64, from: &str, result: f64, to: &str) -> HistoryEntry {
    HistoryEntry::new(value, from, result, to)
}

// ===== Formatting =====

#[test]
fn entry_renders_four_decimal_result() {
    let e = entry(42.195, "kilometers", 26.218749, "miles");
    assert_eq!(e.to_string(), "42.195 kilometers → 26.2187 miles");
}

#[test]
fn extreme_values_use_bare_exponent() {
    let small = entry(0.00001, "meters", 0.00000001, "kilometers");
    assert_eq!(small.to_string(), "1e-5 meters → 0.0000 kilometers");

    let large = entry(1e16, "nanometers", 1e7, "meters");
    assert_eq!(large.to_string(), "1e16 nanometers → 10000000.0000 meters");
}

#[test]
fn integral_value_keeps_fractional_part() {
    let e = entry(100.0, "Celsius", 212.0, "Fahrenheit");
    assert_eq!(e.to_string(), "100.0 Celsius → 212.0000 Fahrenheit");
}

// ===== Append / recent =====

#[test]
fn recent_returns_last_n_newest_last() {
    let mut ledger = HistoryLedger::default();
    for i in 0..15 {
        ledger.append(entry(i as f64, "meters", i as f64, "meters"));
    }

    let recent = ledger.recent(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].value, 5.0);
    assert_eq!(recent[9].value, 14.0);
}

#[test]
fn recent_with_fewer_entries_returns_all() {
    let mut ledger = HistoryLedger::default();
    ledger.append(entry(1.0, "grams", 0.001, "kilograms"));
    assert_eq!(ledger.recent(10).len(), 1);
    assert!(HistoryLedger::default().recent(10).is_empty());
}

#[test]
fn capacity_drops_oldest_entry() {
    let mut ledger = HistoryLedger::new(2);
    ledger.append(entry(1.0, "m/s", 3.6, "km/h"));
    ledger.append(entry(2.0, "m/s", 7.2, "km/h"));
    ledger.append(entry(3.0, "m/s", 10.8, "km/h"));

    let values: Vec<f64> = ledger.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![2.0, 3.0]);
}

#[test]
fn zero_capacity_retains_nothing() {
    let mut ledger = HistoryLedger::new(0);
    ledger.append(entry(1.0, "m/s", 3.6, "km/h"));
    assert!(ledger.is_empty());
}

#[test]
fn clear_empties_ledger() {
    let mut ledger = HistoryLedger::default();
    ledger.append(entry(1.0, "liters", 1000.0, "milliliters"));
    ledger.clear();
    assert!(ledger.is_empty());
    assert_eq!(ledger.export_text(10), "");
}

// ===== Deduplication =====

#[test]
fn appending_same_entry_twice_yields_one_deduplicated() {
    let mut ledger = HistoryLedger::default();
    let e = entry(70.0, "kilograms", 154.3234, "pounds");
    ledger.append(e.clone());
    ledger.append(e);

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.deduplicated().len(), 1);
}

#[test]
fn deduplicated_keeps_first_occurrence_order() {
    let mut ledger = HistoryLedger::default();
    let a = entry(1.0, "meters", 100.0, "centimeters");
    let b = entry(1.0, "meters", 3.28084, "feet");
    ledger.append(a.clone());
    ledger.append(b.clone());
    ledger.append(a.clone());

    assert_eq!(ledger.deduplicated(), vec![&a, &b]);
}

#[test]
fn entries_rendering_identically_are_duplicates() {
    let mut ledger = HistoryLedger::default();
    ledger.append(entry(1.0, "meters", 3.280840001, "feet"));
    ledger.append(entry(1.0, "meters", 3.280840002, "feet"));
    assert_eq!(ledger.deduplicated().len(), 1);
}

#[test]
fn compact_is_idempotent() {
    let mut ledger = HistoryLedger::default();
    let a = entry(1.0, "meters", 100.0, "centimeters");
    let b = entry(2.0, "meters", 200.0, "centimeters");
    for e in [&a, &b, &a, &b, &a] {
        ledger.append(e.clone());
    }

    ledger.compact();
    let once = ledger.clone();
    ledger.compact();

    assert_eq!(ledger, once);
    assert_eq!(ledger.len(), 2);
}

// ===== Export =====

#[test]
fn export_text_joins_last_entries_with_newlines() {
    let mut ledger = HistoryLedger::default();
    ledger.append(entry(2500.0, "cubic meters", 2_500_000.0, "liters"));
    ledger.append(entry(2500.0, "cubic meters", 660_430.0, "gallons"));

    insta::assert_snapshot!(ledger.export_text(10), @r"
    2500.0 cubic meters → 2500000.0000 liters
    2500.0 cubic meters → 660430.0000 gallons
    ");
}

#[test]
fn export_text_is_bounded() {
    let mut ledger = HistoryLedger::default();
    for i in 0..12 {
        ledger.append(entry(i as f64, "feet", i as f64 * 12.0, "inches"));
    }
    let text = ledger.export_text(10);
    assert_eq!(text.lines().count(), 10);
    assert!(text.starts_with("2.0 feet"));
    assert!(text.ends_with("132.0000 inches"));
}
