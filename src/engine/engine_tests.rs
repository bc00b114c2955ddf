//! Tests for the conversion engine.

use super::*;

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

// ===== Temperature =====

#[test]
fn temperature_fixed_points() {
    assert_eq!(convert(Category::Temperature, 0.0, "Celsius", "Fahrenheit"), Ok(32.0));
    assert_eq!(convert(Category::Temperature, 100.0, "Celsius", "Kelvin"), Ok(373.15));
    assert_eq!(convert(Category::Temperature, 32.0, "Fahrenheit", "Celsius"), Ok(0.0));
}

#[test]
fn temperature_identity_is_unchanged() {
    for unit in ["Celsius", "Fahrenheit", "Kelvin"] {
        assert_eq!(convert(Category::Temperature, 12.345, unit, unit), Ok(12.345));
    }
}

#[test]
fn common_temperature_preset_converts_to_212() {
    let results = convert_many(Category::Temperature, 100.0, "Celsius", &["Fahrenheit"]).unwrap();
    assert_eq!(
        results,
        vec![ConversionResult {
            to_unit: "Fahrenheit".to_string(),
            value: 212.0
        }]
    );
}

// ===== Linear =====

#[test]
fn linear_conversion_uses_factor_ratio() {
    let v = convert(Category::Length, 42.195, "kilometers", "miles").unwrap();
    assert_eq!(v, 42.195 * 0.000621371 / 0.001);
    assert!(approx(v, 26.2188, 1e-5), "got {v}");
}

#[test]
fn olympic_pool_volume_matches_reference() {
    let results = convert_many(
        Category::Volume,
        2500.0,
        "cubic meters",
        &["liters", "gallons"],
    )
    .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].to_unit, "liters");
    assert!(approx(results[0].value, 2_500_000.0, 1e-9));
    assert_eq!(results[1].to_unit, "gallons");
    assert!(approx(results[1].value, 660_430.0, 1e-9));
    assert_eq!(format!("{:.4}", results[1].value), "660430.0000");
}

#[test]
fn sound_speed_converts_to_kmh_and_mph() {
    let results = convert_many(Category::Speed, 343.0, "m/s", &["km/h", "mph"]).unwrap();
    assert_eq!(format!("{:.4}", results[0].value), "1234.8000");
    assert_eq!(format!("{:.4}", results[1].value), "767.2704");
}

#[test]
fn human_body_weight_in_pounds() {
    let pounds = convert(Category::Weight, 70.0, "kilograms", "pounds").unwrap();
    assert_eq!(format!("{pounds:.4}"), "154.3234");
}

#[test]
fn area_hectares_to_acres() {
    let acres = convert(Category::Area, 1.0, "hectares", "acres").unwrap();
    assert!(approx(acres, 2.47105, 1e-9), "got {acres}");
}

// ===== Ordering and dedup =====

#[test]
fn results_follow_request_order() {
    let targets = ["inches", "meters", "feet"];
    let results = convert_many(Category::Length, 1.0, "yards", &targets).unwrap();
    let units: Vec<&str> = results.iter().map(|r| r.to_unit.as_str()).collect();
    assert_eq!(units, targets);
}

#[test]
fn duplicate_targets_collapse_to_first_occurrence() {
    let results =
        convert_many(Category::Length, 1.0, "meters", &["feet", "inches", "feet"]).unwrap();
    let units: Vec<&str> = results.iter().map(|r| r.to_unit.as_str()).collect();
    assert_eq!(units, ["feet", "inches"]);
}

#[test]
fn request_constructor_deduplicates() {
    let request = ConversionRequest::new(Category::Speed, 1.0, "m/s", ["mph", "knots", "mph"]);
    assert_eq!(request.to_units(), ["mph", "knots"]);
}

// ===== Errors =====

#[test]
fn empty_targets_is_empty_selection() {
    let targets: [&str; 0] = [];
    assert_eq!(
        convert_many(Category::Length, 1.0, "meters", &targets),
        Err(ConversionError::EmptySelection)
    );
}

#[test]
fn unknown_target_unit_is_rejected() {
    assert_eq!(
        convert_many(Category::Length, 1.0, "meters", &["pounds"]),
        Err(ConversionError::UnknownUnit {
            category: Category::Length,
            unit: "pounds".to_string()
        })
    );
}

#[test]
fn unknown_source_unit_is_rejected() {
    assert_eq!(
        convert(Category::Volume, 1.0, "barrels", "liters"),
        Err(ConversionError::UnknownUnit {
            category: Category::Volume,
            unit: "barrels".to_string()
        })
    );
}

#[test]
fn cross_category_temperature_unit_is_rejected() {
    let err = convert(Category::Length, 1.0, "Celsius", "meters").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit { .. }));
}

#[test]
fn convert_named_rejects_unknown_category() {
    assert_eq!(
        convert_named("Currency", 1.0, "USD", &["EUR"]),
        Err(ConversionError::InvalidCategory("Currency".to_string()))
    );
}

#[test]
fn convert_named_accepts_lowercase_category() {
    let results = convert_named("length", 1.0, "meters", &["centimeters"]).unwrap();
    assert_eq!(results[0].value, 100.0);
}
