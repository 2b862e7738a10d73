use crate::models::HistoryRecord;
use crate::services::state::AppState;

pub fn list_history(state: &AppState) -> Result<Vec<HistoryRecord>, String> {
    let history = state.history.lock().map_err(|_| "state lock".to_string())?;
    Ok(history.list().to_vec())
}

pub fn clear_history(state: &AppState) -> Result<(), String> {
    let mut history = state.history.lock().map_err(|_| "state lock".to_string())?;
    history.clear(&state.store);
    Ok(())
}
