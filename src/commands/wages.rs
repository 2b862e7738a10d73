use serde::Deserialize;

use crate::models::WageEntry;
use crate::services::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateWagePayload {
    pub id: u64,
    pub label: Option<String>,
    pub rate: Option<f64>,
}

pub fn list_wages(state: &AppState) -> Result<Vec<WageEntry>, String> {
    let wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    Ok(wages.list().to_vec())
}

pub fn add_wage(state: &AppState) -> Result<WageEntry, String> {
    let mut wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    Ok(wages.add(&state.store))
}

pub fn update_wage(state: &AppState, payload: UpdateWagePayload) -> Result<WageEntry, String> {
    let mut wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    wages
        .update(
            &state.store,
            payload.id,
            payload.label.as_deref(),
            payload.rate,
        )
        .map_err(|e| e.to_string())
}

pub fn remove_wage(state: &AppState, id: u64) -> Result<(), String> {
    let mut wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    wages.remove(&state.store, id).map_err(|e| e.to_string())
}

pub fn select_wage(state: &AppState, id: u64) -> Result<WageEntry, String> {
    let mut wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    wages.select(id).map_err(|e| e.to_string())
}

pub fn selected_wage(state: &AppState) -> Result<WageEntry, String> {
    let wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
    Ok(wages.selected().clone())
}
