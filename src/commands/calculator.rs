use crate::models::{CalculationResult, HistoryRecord, Material, Session};
use crate::services::pricing::compute_total;
use crate::services::state::AppState;
use crate::utils::now_local;

/// Run the pricing engine over the current price and wage snapshots, record
/// the inputs and the result in the session, and return the result. On a
/// rejected weight the session is left untouched.
pub fn compute(
    state: &AppState,
    weight_text: &str,
    material: Material,
    tax_included: bool,
) -> Result<CalculationResult, String> {
    let result = {
        let prices = state.prices.lock().map_err(|_| "state lock".to_string())?;
        let wages = state.wages.lock().map_err(|_| "state lock".to_string())?;
        compute_total(
            weight_text,
            material,
            tax_included,
            prices.active(),
            wages.selected(),
        )
        .map_err(|e| e.to_string())?
    };

    let mut session = state.session.lock().map_err(|_| "state lock".to_string())?;
    session.weight_text = weight_text.to_string();
    session.material = material;
    session.tax_included = tax_included;
    session.result = Some(result.clone());
    Ok(result)
}

/// Reset the weight entry and the displayed result for the next customer.
pub fn clear_entry(state: &AppState) -> Result<Session, String> {
    let mut session = state.session.lock().map_err(|_| "state lock".to_string())?;
    session.weight_text.clear();
    session.result = None;
    Ok(session.clone())
}

/// Commit a computed result to the history ledger, then clear the entry.
pub fn commit_to_history(
    state: &AppState,
    result: CalculationResult,
) -> Result<HistoryRecord, String> {
    let record = {
        let mut history = state.history.lock().map_err(|_| "state lock".to_string())?;
        history.append(&state.store, &result, &now_local())
    };
    let mut session = state.session.lock().map_err(|_| "state lock".to_string())?;
    session.weight_text.clear();
    session.result = None;
    Ok(record)
}

/// Cloned session snapshot for the presentation layer to render from.
pub fn get_session(state: &AppState) -> Result<Session, String> {
    let session = state.session.lock().map_err(|_| "state lock".to_string())?;
    Ok(session.clone())
}
