use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Measurement categories, defined at process start.
///
/// Each category owns a fixed, ordered set of valid unit names (see
/// `core::convert`) and determines which conversion strategy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Speed,
    Time,
    DataStorage,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::DataStorage => "Data Storage",
        };
        write!(f, "{}", label)
    }
}

/// The current input snapshot: what the user has selected right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct Selection {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// An immutable snapshot of one completed conversion.
///
/// Created exactly once per successful conversion, appended to the session
/// history, never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct ConversionRecord {
    pub id: String,
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(
        category: Category,
        value: f64,
        from_unit: &str,
        result: f64,
        to_unit: &str,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            value,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// A user-named bookmark of a category + unit pair for quick recall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct Favorite {
    pub name: String,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct CategoryInfo {
    pub id: Category,
    pub label: String,
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct ConvertUnitsRequest {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct SubmitSelectionResponse {
    /// False when the submitted fields matched the stored snapshot exactly;
    /// no conversion runs and nothing is appended to history in that case.
    pub changed: bool,
    pub selection: Selection,
    pub record: Option<ConversionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct AddFavoriteRequest {
    pub name: String,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "ui/types/bindings.ts")]
pub struct ExportHistoryResponse {
    pub path: String,
    pub rows: usize,
}
