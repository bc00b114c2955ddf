//! Unit table registry.
//!
//! Static, process-wide tables mapping each unit name to a factor relative
//! to its category's base unit. A factor `f(u)` means "1 base unit equals
//! `f(u)` units of `u`", so converting `v` from `a` to `b` is
//! `v * f(b) / f(a)` for any pair in the table. Adding a unit is one entry.

use super::category::Category;
use super::error::ConversionError;
use super::temperature::TemperatureUnit;

/// Ordered unit-name → factor table for one linear category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTable {
    category: Category,
    entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    const fn new(category: Category, entries: &'static [(&'static str, f64)]) -> Self {
        Self { category, entries }
    }

    /// Category this table belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Factor for `unit`, or `UnknownUnit` if the unit is not in this table.
    pub fn factor(&self, unit: &str) -> Result<f64, ConversionError> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: self.category,
                unit: unit.to_string(),
            })
    }

    /// Whether `unit` is part of this table.
    pub fn contains(&self, unit: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == unit)
    }

    /// The unit whose factor is exactly 1.0.
    pub fn base_unit(&self) -> &'static str {
        self.entries
            .iter()
            .find(|(_, factor)| *factor == 1.0)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Unit names in listing order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `(unit, factor)` pairs in listing order.
    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }
}

static LENGTH: UnitTable = UnitTable::new(
    Category::Length,
    &[
        ("meters", 1.0),
        ("kilometers", 0.001),
        ("centimeters", 100.0),
        ("millimeters", 1000.0),
        ("miles", 0.000621371),
        ("yards", 1.09361),
        ("feet", 3.28084),
        ("inches", 39.3701),
        ("nautical miles", 0.000539957),
        ("micrometers", 1e6),
        ("nanometers", 1e9),
    ],
);

static WEIGHT: UnitTable = UnitTable::new(
    Category::Weight,
    &[
        ("grams", 1.0),
        ("kilograms", 0.001),
        ("milligrams", 1000.0),
        ("pounds", 0.00220462),
        ("ounces", 0.035274),
        ("tons", 1e-6),
        ("carats", 5.0),
        ("stone", 0.000157473),
    ],
);

static AREA: UnitTable = UnitTable::new(
    Category::Area,
    &[
        ("square meters", 1.0),
        ("square kilometers", 1e-6),
        ("square miles", 3.861e-7),
        ("acres", 0.000247105),
        ("hectares", 0.0001),
        ("square feet", 10.7639),
        ("square inches", 1550.0),
        ("square yards", 1.19599),
    ],
);

static SPEED: UnitTable = UnitTable::new(
    Category::Speed,
    &[
        ("m/s", 1.0),
        ("km/h", 3.6),
        ("mph", 2.23694),
        ("knots", 1.94384),
        ("ft/s", 3.28084),
        ("mach", 0.00293858),
    ],
);

static VOLUME: UnitTable = UnitTable::new(
    Category::Volume,
    &[
        ("liters", 1.0),
        ("milliliters", 1000.0),
        ("cubic meters", 0.001),
        ("cubic feet", 0.0353147),
        ("cubic inches", 61.0237),
        ("gallons", 0.264172),
        ("quarts", 1.05669),
        ("pints", 2.11338),
    ],
);

static TEMPERATURE_UNITS: [&str; 3] = [
    TemperatureUnit::Celsius.as_str(),
    TemperatureUnit::Fahrenheit.as_str(),
    TemperatureUnit::Kelvin.as_str(),
];

/// Factor table for a linear category.
///
/// Returns `None` for [`Category::Temperature`], which converts through
/// explicit formulas instead of factors.
pub fn factors_for(category: Category) -> Option<&'static UnitTable> {
    match category {
        Category::Length => Some(&LENGTH),
        Category::Weight => Some(&WEIGHT),
        Category::Area => Some(&AREA),
        Category::Speed => Some(&SPEED),
        Category::Volume => Some(&VOLUME),
        Category::Temperature => None,
    }
}

/// Unit names of `category` in listing order (for selection controls).
pub fn units_for(category: Category) -> Vec<&'static str> {
    match factors_for(category) {
        Some(table) => table.units().collect(),
        None => TEMPERATURE_UNITS.to_vec(),
    }
}

/// Alias of [`units_for`] matching the external interface name.
pub fn list_units(category: Category) -> Vec<&'static str> {
    units_for(category)
}

/// Unit names for a category given by name.
///
/// # Errors
///
/// `InvalidCategory` when `category` is not a known category name.
pub fn units_for_name(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    Ok(units_for(category.parse()?))
}

/// Whether `unit` belongs to the unit set of `category`.
pub fn is_unit_of(category: Category, unit: &str) -> bool {
    match factors_for(category) {
        Some(table) => table.contains(unit),
        None => TemperatureUnit::parse(unit).is_some(),
    }
}

/// Validate that `unit` belongs to `category`.
///
/// # Errors
///
/// `UnknownUnit` when the unit is not part of the category's unit set.
pub fn ensure_unit(category: Category, unit: &str) -> Result<(), ConversionError> {
    if is_unit_of(category, unit) {
        Ok(())
    } else {
        Err(ConversionError::UnknownUnit {
            category,
            unit: unit.to_string(),
        })
    }
}

/// Common units per category for the unit reference panel.
pub fn reference_units(category: Category) -> &'static [&'static str] {
    match category {
        Category::Area => &["square meters", "square kilometers", "acres", "hectares"],
        Category::Length => &["meters", "kilometers", "miles", "feet"],
        Category::Weight => &["grams", "kilograms", "pounds", "ounces"],
        Category::Temperature => &["Celsius", "Fahrenheit", "Kelvin"],
        Category::Speed => &["m/s", "km/h", "mph"],
        Category::Volume => &["liters", "gallons", "cubic meters"],
    }
}
