use chrono::{NaiveDateTime, Timelike};
use tracing::info;

use crate::models::PriceSet;
use crate::store::{JsonStore, DAILY_PRICES, LAST_INPUT_DATE};
use crate::utils::date_stamp;

/// The active per-gram prices plus the calendar stamp of their last entry,
/// which drives the once-daily re-entry gate.
pub struct PriceRegistry {
    prices: PriceSet,
    last_input_date: String,
}

impl PriceRegistry {
    pub fn load(store: &JsonStore) -> Self {
        PriceRegistry {
            prices: store.load(DAILY_PRICES, PriceSet::default()),
            last_input_date: store.load(LAST_INPUT_DATE, String::new()),
        }
    }

    pub fn active(&self) -> &PriceSet {
        &self.prices
    }

    pub fn last_input_date(&self) -> &str {
        &self.last_input_date
    }

    pub fn needs_refresh(&self, now: &NaiveDateTime) -> bool {
        needs_daily_refresh(&self.last_input_date, now)
    }

    /// Replace the active set and stamp today as the last entry date.
    /// Positivity of the four prices is checked at the gate, not here.
    pub fn commit(&mut self, store: &JsonStore, prices: PriceSet, now: &NaiveDateTime) {
        self.prices = prices;
        self.last_input_date = date_stamp(now);
        store.save(DAILY_PRICES, &self.prices);
        store.save(LAST_INPUT_DATE, &self.last_input_date);
        info!("daily prices committed for {}", self.last_input_date);
    }
}

/// Once-per-day re-entry policy: the gate opens when no prices were ever
/// entered, when the stamp names another calendar day, or from 08:00 while
/// the stamp is still stale. The hour clause only bites before today's
/// stamp is written; once today is stamped the date check keeps the gate
/// closed for the rest of the day.
pub fn needs_daily_refresh(last_input_date: &str, now: &NaiveDateTime) -> bool {
    let today = date_stamp(now);
    last_input_date.is_empty()
        || last_input_date != today
        || (now.hour() >= 8 && last_input_date != today)
}
