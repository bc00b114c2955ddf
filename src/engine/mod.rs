//! Conversion engine (pure).
//!
//! Dispatches on [`Category`] to either the linear factor rule or the
//! temperature formulas. `convert_many` is the entry point the UI calls;
//! single conversions are the one-target case.

use crate::model::{temperature, units, Category, ConversionError, UnitTable};
use tracing::debug;

/// How a category converts between its units.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// `v * f(to) / f(from)` over a factor table.
    Linear(&'static UnitTable),
    /// Explicit pairwise formulas.
    Temperature,
}

/// Category → rule dispatch. `factors_for` matches exhaustively on
/// `Category` and only Temperature has no factor table.
fn rule_for(category: Category) -> Rule {
    match units::factors_for(category) {
        Some(table) => Rule::Linear(table),
        None => Rule::Temperature,
    }
}

// ===== Request / Result =====

/// A validated-shape conversion request.
///
/// Target units are deduplicated on construction, keeping the first
/// occurrence and the relative order of the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Category all units must belong to.
    pub category: Category,
    /// Input value.
    pub value: f64,
    /// Source unit.
    pub from_unit: String,
    to_units: Vec<String>,
}

impl ConversionRequest {
    /// Build a request, deduplicating `to_units`.
    pub fn new<I, S>(category: Category, value: f64, from_unit: impl Into<String>, to_units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for unit in to_units {
            let unit = unit.into();
            if !deduped.contains(&unit) {
                deduped.push(unit);
            }
        }

        Self {
            category,
            value,
            from_unit: from_unit.into(),
            to_units: deduped,
        }
    }

    /// Target units in request order, without duplicates.
    pub fn to_units(&self) -> &[String] {
        &self.to_units
    }
}

/// One converted value, paired with its target unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Target unit.
    pub to_unit: String,
    /// Converted value.
    pub value: f64,
}

// ===== Conversion =====

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// # Errors
///
/// `UnknownUnit` if either unit is not part of the category's unit set.
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    match rule_for(category) {
        Rule::Linear(table) => {
            let from = table.factor(from_unit)?;
            let to = table.factor(to_unit)?;
            Ok(value * to / from)
        }
        Rule::Temperature => temperature::convert(value, from_unit, to_unit),
    }
}

/// Convert one value into every requested target unit.
///
/// Results follow the request order (after deduplication).
///
/// # Errors
///
/// - `EmptySelection` when there are no target units.
/// - `UnknownUnit` when the source or any target is not in the category.
pub fn convert_request(
    request: &ConversionRequest,
) -> Result<Vec<ConversionResult>, ConversionError> {
    if request.to_units.is_empty() {
        return Err(ConversionError::EmptySelection);
    }

    // Reject a bad source unit even when every target would short-circuit.
    units::ensure_unit(request.category, &request.from_unit)?;

    let results = request
        .to_units
        .iter()
        .map(|to_unit| {
            convert(request.category, request.value, &request.from_unit, to_unit).map(|value| {
                ConversionResult {
                    to_unit: to_unit.clone(),
                    value,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        category = %request.category,
        value = request.value,
        from = %request.from_unit,
        targets = results.len(),
        "Converted"
    );

    Ok(results)
}

/// Convert one value into several target units.
///
/// See [`convert_request`] for errors.
pub fn convert_many<S: AsRef<str>>(
    category: Category,
    value: f64,
    from_unit: &str,
    to_units: &[S],
) -> Result<Vec<ConversionResult>, ConversionError> {
    let request = ConversionRequest::new(
        category,
        value,
        from_unit,
        to_units.iter().map(|u| u.as_ref().to_string()),
    );
    convert_request(&request)
}

/// [`convert_many`] for callers holding the category as a string.
///
/// # Errors
///
/// `InvalidCategory` for an unknown category name, otherwise as
/// [`convert_request`].
pub fn convert_named<S: AsRef<str>>(
    category: &str,
    value: f64,
    from_unit: &str,
    to_units: &[S],
) -> Result<Vec<ConversionResult>, ConversionError> {
    convert_many(category.parse()?, value, from_unit, to_units)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
