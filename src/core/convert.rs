//! Conversion engine: pure functions mapping (category, value, source unit,
//! target unit) to a numeric result.
//!
//! Every category except Temperature converts multiplicatively through a
//! category base unit (`value * factor(from) / factor(to)`); Temperature is
//! a small piecewise map pivoting through Celsius. No state, no I/O.

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use once_cell::sync::Lazy;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Category;

/// Category display order, fixed at process start.
pub const ALL_CATEGORIES: [Category; 6] = [
    Category::Length,
    Category::Weight,
    Category::Temperature,
    Category::Speed,
    Category::Time,
    Category::DataStorage,
];

/// Ordered unit table for one scale-factor category.
///
/// Declaration order is display order; the first entry is what unit
/// selections reset to on a category switch. Invariant: the base unit maps
/// to exactly 1.0 and every factor is strictly positive.
pub struct UnitTable {
    entries: Vec<(&'static str, f64)>,
}

impl UnitTable {
    fn new(entries: &[(&'static str, f64)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    fn factor(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn first(&self) -> &'static str {
        self.entries[0].0
    }
}

/// Scale-factor unit registry, initialized once at startup.
///
/// Temperature is absent on purpose: it has no linear table and converts
/// through `TemperatureConverter` instead.
static UNIT_TABLES: Lazy<HashMap<Category, UnitTable>> = Lazy::new(|| {
    let mut tables = HashMap::new();

    // Length (base: meters)
    tables.insert(
        Category::Length,
        UnitTable::new(&[
            ("meters", 1.0),
            ("kilometers", 1000.0),
            ("centimeters", 0.01),
            ("millimeters", 0.001),
            ("inches", 0.0254),
            ("feet", 0.3048),
            ("yards", 0.9144),
            ("miles", 1609.34),
        ]),
    );

    // Weight (base: grams)
    tables.insert(
        Category::Weight,
        UnitTable::new(&[
            ("grams", 1.0),
            ("kilograms", 1000.0),
            ("milligrams", 0.001),
            ("pounds", 453.592),
            ("ounces", 28.3495),
        ]),
    );

    // Speed (base: m/s)
    tables.insert(
        Category::Speed,
        UnitTable::new(&[
            ("m/s", 1.0),
            ("km/h", 0.277778),
            ("mph", 0.44704),
            ("knots", 0.514444),
        ]),
    );

    // Time (base: seconds)
    tables.insert(
        Category::Time,
        UnitTable::new(&[
            ("seconds", 1.0),
            ("minutes", 60.0),
            ("hours", 3600.0),
            ("days", 86400.0),
        ]),
    );

    // Data Storage (base: bytes, 1024 steps)
    tables.insert(
        Category::DataStorage,
        UnitTable::new(&[
            ("bytes", 1.0),
            ("kilobytes", 1024.0),
            ("megabytes", 1048576.0),
            ("gigabytes", 1073741824.0),
            ("terabytes", 1099511627776.0),
        ]),
    );

    tables
});

const TEMPERATURE_UNITS: [&str; 3] = ["celsius", "fahrenheit", "kelvin"];

impl Category {
    /// Valid unit names for this category, in display order.
    pub fn units(&self) -> Vec<&'static str> {
        match UNIT_TABLES.get(self) {
            Some(table) => table.names(),
            None => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// The first declared unit; both sides of a selection reset to this
    /// when the user switches into the category.
    pub fn first_unit(&self) -> &'static str {
        match UNIT_TABLES.get(self) {
            Some(table) => table.first(),
            None => TEMPERATURE_UNITS[0],
        }
    }

    fn converter(&self) -> Converter {
        match self {
            Category::Temperature => Converter::Temperature(TemperatureConverter),
            _ => Converter::ScaleFactor(ScaleFactorConverter { category: *self }),
        }
    }
}

/// One conversion strategy, selected once per request by category.
#[enum_dispatch]
trait ConvertValue {
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64>;
}

#[enum_dispatch(ConvertValue)]
enum Converter {
    ScaleFactor(ScaleFactorConverter),
    Temperature(TemperatureConverter),
}

struct ScaleFactorConverter {
    category: Category,
}

impl ConvertValue for ScaleFactorConverter {
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let table = UNIT_TABLES
            .get(&self.category)
            .ok_or_else(|| unknown_unit(self.category, from_unit))?;
        let from = table
            .factor(from_unit)
            .ok_or_else(|| unknown_unit(self.category, from_unit))?;
        let to = table
            .factor(to_unit)
            .ok_or_else(|| unknown_unit(self.category, to_unit))?;
        // Same unit, no conversion needed; skipping the factor round trip
        // keeps the identity exact under IEEE rounding
        if from_unit == to_unit {
            return Ok(value);
        }
        Ok(value * from / to)
    }
}

struct TemperatureConverter;

impl ConvertValue for TemperatureConverter {
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        if !TEMPERATURE_UNITS.contains(&from_unit) {
            return Err(unknown_unit(Category::Temperature, from_unit));
        }
        if !TEMPERATURE_UNITS.contains(&to_unit) {
            return Err(unknown_unit(Category::Temperature, to_unit));
        }

        let result = match (from_unit, to_unit) {
            ("celsius", "fahrenheit") => value * 9.0 / 5.0 + 32.0,
            ("celsius", "kelvin") => value + 273.15,
            ("fahrenheit", "celsius") => (value - 32.0) * 5.0 / 9.0,
            ("fahrenheit", "kelvin") => (value - 32.0) * 5.0 / 9.0 + 273.15,
            ("kelvin", "celsius") => value - 273.15,
            ("kelvin", "fahrenheit") => (value - 273.15) * 9.0 / 5.0 + 32.0,
            // Equal units: no from/to branch exists, return unchanged
            _ => value,
        };
        Ok(result)
    }
}

fn unknown_unit(category: Category, unit: &str) -> AppError {
    AppError::UnknownUnit {
        category,
        unit: unit.to_string(),
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Deterministic and side-effect free; fails with
/// [`AppError::UnknownUnit`] when either unit is not a member of the
/// category's valid set.
pub fn convert(category: Category, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
    category.converter().convert(value, from_unit, to_unit)
}
