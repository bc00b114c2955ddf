//! Unit Converter (unitconv)
//!
//! Terminal calculator converting a value between units of length, weight,
//! temperature, area, speed and volume, with presets and a conversion
//! history.
//!
//! Follows a Pure Core / Impure Shell layout: `model`, `engine` and `state`
//! are pure; `config`, `logging`, `export` and `view` do the I/O.

pub mod config;
pub mod engine;
pub mod export;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use engine::{convert, convert_many, convert_named, ConversionRequest, ConversionResult};
pub use model::{list_categories, list_units, AppError, Category, ConversionError, Preset, PRESETS};
pub use state::{apply_preset, swap, HistoryEntry, HistoryLedger, SessionState};
