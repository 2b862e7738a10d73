use std::sync::Mutex;

use crate::error::Result;
use crate::models::Session;
use crate::services::history::HistoryLedger;
use crate::services::prices::PriceRegistry;
use crate::services::wages::WageCatalog;
use crate::store::JsonStore;
use crate::utils::now_local;

/// Process-wide state: the persistence store plus the mutable model parts.
///
/// The UI shell owns one instance for the lifetime of the process and calls
/// into it through [`crate::commands`]. Parts are individually locked
/// because the shell may dispatch commands from its own event thread.
pub struct AppState {
    pub store: JsonStore,
    pub prices: Mutex<PriceRegistry>,
    pub wages: Mutex<WageCatalog>,
    pub history: Mutex<HistoryLedger>,
    pub session: Mutex<Session>,
}

impl AppState {
    /// Reconstruct the model from the persisted documents, falling back to
    /// built-in defaults where a document is missing or unreadable, and arm
    /// the daily gate from the refresh policy.
    pub fn new(store: JsonStore) -> Self {
        let prices = PriceRegistry::load(&store);
        let wages = WageCatalog::load(&store);
        let history = HistoryLedger::load(&store);
        let session = Session {
            gate_forced: prices.needs_refresh(&now_local()),
            ..Session::default()
        };
        AppState {
            store,
            prices: Mutex::new(prices),
            wages: Mutex::new(wages),
            history: Mutex::new(history),
            session: Mutex::new(session),
        }
    }

    /// Open the store in the platform data directory and load from it.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(JsonStore::open_default()?))
    }
}
