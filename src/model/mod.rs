//! Domain model types (pure).
//!
//! Categories, unit tables, the temperature rule, presets and errors.
//! Nothing in here performs I/O.

pub mod category;
pub mod error;
pub mod key_action;
pub mod preset;
pub mod temperature;
pub mod units;

// Re-export for convenience
pub use category::{list_categories, Category};
pub use error::{AppError, ConversionError, PresetError};
pub use key_action::KeyAction;
pub use preset::{Preset, PRESETS};
pub use temperature::TemperatureUnit;
pub use units::{factors_for, list_units, reference_units, units_for, UnitTable};
