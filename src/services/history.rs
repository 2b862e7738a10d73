use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{CalculationResult, HistoryRecord};
use crate::store::{JsonStore, HISTORY};
use crate::utils::time_stamp;

/// Append-only log of committed calculations, newest first. No edit and no
/// single-record delete; the only removal is [`clear`](HistoryLedger::clear).
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    pub fn load(store: &JsonStore) -> Self {
        HistoryLedger {
            records: store.load(HISTORY, Vec::new()),
        }
    }

    /// Most recent first.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Stamp the result with a fresh time-based id and a local timestamp and
    /// insert it at the head.
    pub fn append(
        &mut self,
        store: &JsonStore,
        result: &CalculationResult,
        now: &NaiveDateTime,
    ) -> HistoryRecord {
        let mut id = now.and_utc().timestamp_millis();
        // Two commits inside the same millisecond still get distinct ids.
        if let Some(head) = self.records.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }
        let record = HistoryRecord {
            id,
            timestamp: time_stamp(now),
            weight: result.weight,
            material: result.material,
            price_per_gram: result.price_per_gram,
            wage_amount: result.wage_amount,
            total: result.total,
            tax_included: result.tax_included,
        };
        self.records.insert(0, record.clone());
        store.save(HISTORY, &self.records);
        debug!("history record {} appended, {} total", record.id, self.records.len());
        record
    }

    /// Drop every record and persist the empty sequence.
    pub fn clear(&mut self, store: &JsonStore) {
        self.records.clear();
        store.save(HISTORY, &self.records);
    }
}
