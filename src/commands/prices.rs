use chrono::NaiveDateTime;

use crate::models::PriceSet;
use crate::services::state::AppState;
use crate::utils::now_local;

pub fn get_active_prices(state: &AppState) -> Result<PriceSet, String> {
    let prices = state.prices.lock().map_err(|_| "state lock".to_string())?;
    Ok(*prices.active())
}

/// Submit the daily price entry form. The commit is rejected, and the gate
/// stays up, unless all four prices are strictly positive.
pub fn commit_prices(state: &AppState, new_prices: PriceSet) -> Result<(), String> {
    if !new_prices.all_positive() {
        return Err("all four prices must be entered and greater than zero".to_string());
    }
    {
        let mut prices = state.prices.lock().map_err(|_| "state lock".to_string())?;
        prices.commit(&state.store, new_prices, &now_local());
    }
    let mut session = state.session.lock().map_err(|_| "state lock".to_string())?;
    session.gate_forced = false;
    Ok(())
}

/// Force the gate back up on the next check, leaving the date stamp
/// untouched.
pub fn reset_daily_gate(state: &AppState) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|_| "state lock".to_string())?;
    session.gate_forced = true;
    Ok(())
}

pub fn is_daily_gate_active(state: &AppState, now: &NaiveDateTime) -> Result<bool, String> {
    let forced = {
        let session = state.session.lock().map_err(|_| "state lock".to_string())?;
        session.gate_forced
    };
    if forced {
        return Ok(true);
    }
    let prices = state.prices.lock().map_err(|_| "state lock".to_string())?;
    Ok(prices.needs_refresh(now))
}
