//! Named presets that populate a session in one action.

use super::category::Category;
use super::error::PresetError;

/// A named, fixed `(category, value, from_unit, to_units)` tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Button label and lookup key.
    pub name: &'static str,
    /// Category to switch to.
    pub category: Category,
    /// Input value.
    pub value: f64,
    /// Source unit.
    pub from_unit: &'static str,
    /// Target units, in order.
    pub to_units: &'static [&'static str],
}

/// Built-in presets, in button order.
pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "Common Temperature",
        category: Category::Temperature,
        value: 100.0,
        from_unit: "Celsius",
        to_units: &["Fahrenheit"],
    },
    Preset {
        name: "Marathon Distance",
        category: Category::Length,
        value: 42.195,
        from_unit: "kilometers",
        to_units: &["miles"],
    },
    Preset {
        name: "Human Body Weight",
        category: Category::Weight,
        value: 70.0,
        from_unit: "kilograms",
        to_units: &["pounds"],
    },
    Preset {
        name: "Olympic Pool Volume",
        category: Category::Volume,
        value: 2500.0,
        from_unit: "cubic meters",
        to_units: &["liters", "gallons"],
    },
    Preset {
        name: "Sound Speed",
        category: Category::Speed,
        value: 343.0,
        from_unit: "m/s",
        to_units: &["km/h", "mph"],
    },
];

impl Preset {
    /// Look up a preset by its exact name.
    pub fn by_name(name: &str) -> Result<&'static Preset, PresetError> {
        PRESETS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
    }

    /// Preset at 1-based button position `n` (as bound to keys 1-5).
    pub fn by_number(n: usize) -> Option<&'static Preset> {
        n.checked_sub(1).and_then(|i| PRESETS.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::units::is_unit_of;

    #[test]
    fn every_preset_references_units_of_its_category() {
        for preset in &PRESETS {
            assert!(is_unit_of(preset.category, preset.from_unit), "{}", preset.name);
            for unit in preset.to_units {
                assert!(is_unit_of(preset.category, unit), "{}: {unit}", preset.name);
            }
        }
    }

    #[test]
    fn by_name_is_exact() {
        assert_eq!(Preset::by_name("Sound Speed").unwrap().value, 343.0);
        assert_eq!(
            Preset::by_name("sound speed"),
            Err(PresetError::UnknownPreset("sound speed".to_string()))
        );
    }

    #[test]
    fn by_number_is_one_based() {
        assert_eq!(Preset::by_number(1).unwrap().name, "Common Temperature");
        assert_eq!(Preset::by_number(5).unwrap().name, "Sound Speed");
        assert!(Preset::by_number(0).is_none());
        assert!(Preset::by_number(6).is_none());
    }
}
