//! Tauri command surface: glue between the webview controls and the
//! conversion engine / session state.

use std::path::Path;

use tauri::State;

use crate::core::convert::{self, ALL_CATEGORIES};
use crate::core::export;
use crate::core::session::Session;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    AddFavoriteRequest, CategoryInfo, ConversionRecord, ConvertUnitsRequest,
    ConvertUnitsResponse, ExportHistoryResponse, Favorite, Selection, SubmitSelectionResponse,
};

#[tauri::command]
pub async fn get_categories() -> Vec<CategoryInfo> {
    ALL_CATEGORIES
        .iter()
        .map(|category| CategoryInfo {
            id: *category,
            label: category.to_string(),
            units: category.units().iter().map(|u| u.to_string()).collect(),
        })
        .collect()
}

/// Stateless engine call; used by the frontend for live previews without
/// touching the session.
#[tauri::command]
pub async fn convert_units(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let result = convert::convert(
        request.category,
        request.value,
        &request.from_unit,
        &request.to_unit,
    )?;

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: format!(
            "{:.2} {} = {:.4} {}",
            request.value, request.from_unit, result, request.to_unit
        ),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

#[tauri::command]
pub async fn get_selection(session: State<'_, Session>) -> AppResult<Selection> {
    Ok(session.selection())
}

/// The change-triggered conversion flow: store the selection, convert it,
/// and append the result to history. A submission identical to the stored
/// snapshot converts nothing and appends nothing, so redundant refresh
/// cycles leave history alone.
#[tauri::command]
pub async fn submit_selection(
    request: ConvertUnitsRequest,
    session: State<'_, Session>,
) -> AppResult<SubmitSelectionResponse> {
    let Some(selection) = session.set_selection(
        request.category,
        request.value,
        &request.from_unit,
        &request.to_unit,
    ) else {
        return Ok(SubmitSelectionResponse {
            changed: false,
            selection: session.selection(),
            record: None,
        });
    };

    let result = convert::convert(
        selection.category,
        selection.value,
        &selection.from_unit,
        &selection.to_unit,
    )?;
    let record = ConversionRecord::new(
        selection.category,
        selection.value,
        &selection.from_unit,
        result,
        &selection.to_unit,
    );
    session.record_conversion(record.clone());

    Ok(SubmitSelectionResponse {
        changed: true,
        selection,
        record: Some(record),
    })
}

/// History in display order, newest first.
#[tauri::command]
pub async fn get_history(session: State<'_, Session>) -> AppResult<Vec<ConversionRecord>> {
    Ok(session.history())
}

#[tauri::command]
pub async fn clear_history(session: State<'_, Session>) -> AppResult<()> {
    session.clear_history();
    Ok(())
}

#[tauri::command]
pub async fn add_favorite(
    request: AddFavoriteRequest,
    session: State<'_, Session>,
) -> AppResult<()> {
    session.add_favorite(
        &request.name,
        request.category,
        &request.from_unit,
        &request.to_unit,
    )
}

#[tauri::command]
pub async fn remove_favorite(name: String, session: State<'_, Session>) -> AppResult<()> {
    session.remove_favorite(&name);
    Ok(())
}

#[tauri::command]
pub async fn get_favorites(session: State<'_, Session>) -> AppResult<Vec<Favorite>> {
    Ok(session.favorites())
}

/// Write the history to a single-column CSV. `path` defaults to
/// `conversion_history.csv` in the working directory.
#[tauri::command]
pub async fn export_history(
    path: Option<String>,
    session: State<'_, Session>,
) -> AppResult<ExportHistoryResponse> {
    let records = session.history();
    if records.is_empty() {
        return Err(AppError::Validation(
            "No conversion history to export".to_string(),
        ));
    }

    let path = path.unwrap_or_else(|| export::DEFAULT_EXPORT_FILE.to_string());
    let rows = export::write_history_csv(Path::new(&path), &records)?;
    println!("[ExportHistory] Wrote {} rows to {}", rows, path);

    Ok(ExportHistoryResponse { path, rows })
}
