//! Pricing model for a single-user jewelry retail calculator.
//!
//! Holds the four daily per-gram metal prices behind a once-a-day entry gate,
//! a catalog of making-charge rates with one selected entry, a pure
//! sale-price computation, and an append-only history of committed
//! calculations. All state is persisted as flat per-key JSON documents and
//! mirrored in an in-memory session.
//!
//! The form UI lives in a separate shell. It owns one [`AppState`] for the
//! lifetime of the process, drives it exclusively through the functions in
//! [`commands`], and re-renders from the snapshots they return.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use error::{KaratError, Result};
pub use models::{CalculationResult, HistoryRecord, Material, PriceSet, Session, WageEntry};
pub use services::state::AppState;
pub use store::JsonStore;
