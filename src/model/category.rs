//! Measurement categories.

use super::error::ConversionError;
use std::fmt;
use std::str::FromStr;

/// A measurement domain with its own unit set and conversion rule.
///
/// Temperature is the only affine category; all others convert through
/// a factor table relative to a base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Base unit: meters.
    Length,
    /// Base unit: grams.
    Weight,
    /// Celsius, Fahrenheit, Kelvin with explicit pairwise formulas.
    Temperature,
    /// Base unit: square meters.
    Area,
    /// Base unit: meters per second.
    Speed,
    /// Base unit: liters.
    Volume,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Area,
        Category::Speed,
        Category::Volume,
    ];

    /// Display name ("Length", "Weight", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Volume => "Volume",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Category at `index` in [`Category::ALL`], wrapping around.
    pub fn from_index(index: usize) -> Category {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Case-insensitive parse of a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConversionError::InvalidCategory(s.to_string()))
    }
}

/// All categories in display order.
pub fn list_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}
