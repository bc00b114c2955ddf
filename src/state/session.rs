//! Session state: current selection, history and trigger policy.
//!
//! A `SessionState` is an owned value. Callers that serve several sessions
//! keep one instance per session; nothing here is global or shared.

use crate::engine::{self, ConversionRequest, ConversionResult};
use crate::model::{units, Category, ConversionError, Preset, PresetError};
use crate::state::history::{HistoryEntry, HistoryLedger, DEFAULT_HISTORY_CAPACITY};
use tracing::debug;

/// Current selection plus the in-memory conversion history.
///
/// # Invariants
///
/// `from_unit` and every element of `to_units` belong to the unit set of
/// `category`. Setters validate; `set_category` resets the units so the
/// invariant holds by construction. `to_units` never holds duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    category: Category,
    value: f64,
    from_unit: String,
    to_units: Vec<String>,
    history: HistoryLedger,
    realtime: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Category::Length, 1.0, DEFAULT_HISTORY_CAPACITY)
    }
}

impl SessionState {
    /// Fresh session: first unit of `category` as source, no targets,
    /// empty history, realtime on.
    pub fn new(category: Category, value: f64, history_capacity: usize) -> Self {
        Self {
            category,
            value,
            from_unit: first_unit(category),
            to_units: Vec::new(),
            history: HistoryLedger::new(history_capacity),
            realtime: true,
        }
    }

    /// Selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Input value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Source unit.
    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    /// Target units, in selection order.
    pub fn to_units(&self) -> &[String] {
        &self.to_units
    }

    /// Conversion history.
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Whether conversion reruns on every input change.
    pub fn realtime(&self) -> bool {
        self.realtime
    }

    /// Switch category. Changing it resets the source to the category's
    /// first unit and clears the targets.
    pub fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        self.category = category;
        self.from_unit = first_unit(category);
        self.to_units.clear();
    }

    /// Set the input value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Set the source unit.
    ///
    /// # Errors
    ///
    /// `UnknownUnit` if the unit is not part of the current category.
    pub fn set_from_unit(&mut self, unit: &str) -> Result<(), ConversionError> {
        units::ensure_unit(self.category, unit)?;
        self.from_unit = unit.to_string();
        Ok(())
    }

    /// Replace the target units (deduplicated, order kept).
    ///
    /// # Errors
    ///
    /// `UnknownUnit` if any unit is not part of the current category; the
    /// selection is left untouched in that case.
    pub fn set_to_units<S: AsRef<str>>(&mut self, to_units: &[S]) -> Result<(), ConversionError> {
        for unit in to_units {
            units::ensure_unit(self.category, unit.as_ref())?;
        }
        let request = ConversionRequest::new(
            self.category,
            self.value,
            self.from_unit.clone(),
            to_units.iter().map(|u| u.as_ref().to_string()),
        );
        self.to_units = request.to_units().to_vec();
        Ok(())
    }

    /// Add `unit` to the targets, or remove it if already selected.
    ///
    /// Returns whether the unit is selected afterwards.
    ///
    /// # Errors
    ///
    /// `UnknownUnit` if the unit is not part of the current category.
    pub fn toggle_target(&mut self, unit: &str) -> Result<bool, ConversionError> {
        units::ensure_unit(self.category, unit)?;
        if let Some(pos) = self.to_units.iter().position(|u| u == unit) {
            self.to_units.remove(pos);
            Ok(false)
        } else {
            self.to_units.push(unit.to_string());
            Ok(true)
        }
    }

    /// Overwrite category, value, source and targets from a preset.
    ///
    /// History and the realtime flag are left alone.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.category = preset.category;
        self.value = preset.value;
        self.from_unit = preset.from_unit.to_string();
        self.to_units = preset.to_units.iter().map(|u| u.to_string()).collect();
        debug!(preset = preset.name, "Applied preset");
    }

    /// Exchange the source with the first target; the targets collapse to
    /// the previous source alone.
    ///
    /// With no targets this is a no-op. Returns whether anything changed.
    pub fn swap(&mut self) -> bool {
        let Some(first) = self.to_units.first().cloned() else {
            return false;
        };
        let previous_from = std::mem::replace(&mut self.from_unit, first);
        self.to_units = vec![previous_from];
        true
    }

    /// Set the realtime flag.
    pub fn set_realtime(&mut self, realtime: bool) {
        self.realtime = realtime;
    }

    /// Flip the realtime flag and return the new value.
    pub fn toggle_realtime(&mut self) -> bool {
        self.realtime = !self.realtime;
        self.realtime
    }

    /// The current selection as a request.
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(
            self.category,
            self.value,
            self.from_unit.clone(),
            self.to_units.iter().cloned(),
        )
    }

    /// Convert the current selection without touching the history.
    ///
    /// # Errors
    ///
    /// Same as [`SessionState::convert`].
    pub fn preview(&self) -> Result<Vec<ConversionResult>, ConversionError> {
        engine::convert_request(&self.request())
    }

    /// Convert the current selection and record it.
    ///
    /// Appends one history entry per target in request order, then
    /// collapses duplicates.
    ///
    /// # Errors
    ///
    /// `EmptySelection` with no targets (nothing is recorded), or
    /// `UnknownUnit` for a unit outside the category.
    pub fn convert(&mut self) -> Result<Vec<ConversionResult>, ConversionError> {
        let results = engine::convert_request(&self.request())?;
        for result in &results {
            self.history.append(HistoryEntry::new(
                self.value,
                self.from_unit.clone(),
                result.value,
                result.to_unit.clone(),
            ));
        }
        self.history.compact();
        Ok(results)
    }

    /// Remove every history entry.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Apply the preset called `name` to `state`.
///
/// # Errors
///
/// `UnknownPreset` if no preset has exactly this name.
pub fn apply_preset(mut state: SessionState, name: &str) -> Result<SessionState, PresetError> {
    let preset = Preset::by_name(name)?;
    state.apply_preset(preset);
    Ok(state)
}

/// Swap source and first target of `state` (no-op without targets).
pub fn swap(mut state: SessionState) -> SessionState {
    state.swap();
    state
}

fn first_unit(category: Category) -> String {
    units::units_for(category)
        .first()
        .map(|u| u.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
