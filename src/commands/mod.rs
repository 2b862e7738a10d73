//! Presentation boundary. The form UI calls these functions against the
//! shared [`AppState`](crate::services::state::AppState) and re-renders from
//! the snapshots they return; errors come back as display-ready strings.

pub mod calculator;
pub mod history;
pub mod prices;
pub mod wages;
