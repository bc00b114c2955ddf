//! Temperature rule: explicit formulas over the six directed unit pairs.

use super::category::Category;
use super::error::ConversionError;

/// The three temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureUnit {
    /// Unit name as listed in the UI.
    pub const fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Exact-name lookup. Names are case-sensitive, as in the unit lists.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Celsius" => Some(TemperatureUnit::Celsius),
            "Fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "Kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    fn lookup(name: &str) -> Result<Self, ConversionError> {
        Self::parse(name).ok_or_else(|| ConversionError::UnknownUnit {
            category: Category::Temperature,
            unit: name.to_string(),
        })
    }
}

/// Apply the formula for one directed pair. `from == to` returns `x` unchanged.
pub fn apply(x: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Fahrenheit) => x * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => x + 273.15,
        (Fahrenheit, Celsius) => (x - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (x - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => x - 273.15,
        (Kelvin, Fahrenheit) => (x - 273.15) * 9.0 / 5.0 + 32.0,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => x,
    }
}

/// Convert `value` between two temperature units given by name.
///
/// # Errors
///
/// `UnknownUnit` if either name is not Celsius, Fahrenheit or Kelvin.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from = TemperatureUnit::lookup(from_unit)?;
    let to = TemperatureUnit::lookup(to_unit)?;
    Ok(apply(value, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    #[test]
    fn reference_points_are_exact() {
        assert_eq!(apply(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(apply(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(apply(100.0, Celsius, Kelvin), 373.15);
        assert_eq!(apply(32.0, Fahrenheit, Celsius), 0.0);
        assert_eq!(apply(273.15, Kelvin, Celsius), 0.0);
        assert_eq!(apply(273.15, Kelvin, Fahrenheit), 32.0);
    }

    #[test]
    fn fahrenheit_to_kelvin_goes_through_celsius() {
        assert_eq!(apply(32.0, Fahrenheit, Kelvin), 273.15);
        assert!((apply(212.0, Fahrenheit, Kelvin) - 373.15).abs() < 1e-9);
    }

    #[test]
    fn identity_returns_input_bit_for_bit() {
        for unit in [Celsius, Fahrenheit, Kelvin] {
            assert_eq!(apply(-40.123, unit, unit), -40.123);
        }
    }

    #[test]
    fn minus_forty_is_shared_by_celsius_and_fahrenheit() {
        assert_eq!(apply(-40.0, Celsius, Fahrenheit), -40.0);
        assert_eq!(apply(-40.0, Fahrenheit, Celsius), -40.0);
    }

    #[test]
    fn convert_rejects_lowercase_and_foreign_names() {
        assert!(convert(1.0, "celsius", "Kelvin").is_err());
        let err = convert(1.0, "Celsius", "meters").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: Category::Temperature,
                unit: "meters".to_string()
            }
        );
    }
}
