use tracing::debug;

use crate::error::{KaratError, Result};
use crate::models::WageEntry;
use crate::store::{JsonStore, WAGES_LIST};

/// Rate applied to freshly created entries until the user edits them.
pub const DEFAULT_RATE: f64 = 1000.0;

fn default_entries() -> Vec<WageEntry> {
    vec![WageEntry {
        id: 1,
        sequence_number: 1,
        label: "Default".to_string(),
        rate: DEFAULT_RATE,
    }]
}

/// Ordered list of making-charge entries plus the current selection.
///
/// The selection is a value snapshot, not an index into the list: edits to a
/// non-selected entry never leak into it, and an edit to the selected id is
/// re-synced explicitly. The list is never empty.
pub struct WageCatalog {
    entries: Vec<WageEntry>,
    selected: WageEntry,
}

impl WageCatalog {
    /// Load the persisted list, falling back to the built-in single default
    /// entry. The selection starts on the first entry.
    pub fn load(store: &JsonStore) -> Self {
        let mut entries: Vec<WageEntry> = store.load(WAGES_LIST, default_entries());
        if entries.is_empty() {
            entries = default_entries();
        }
        let selected = entries[0].clone();
        WageCatalog { entries, selected }
    }

    pub fn list(&self) -> &[WageEntry] {
        &self.entries
    }

    pub fn selected(&self) -> &WageEntry {
        &self.selected
    }

    /// Append a new entry with a fresh id and default label and rate.
    pub fn add(&mut self, store: &JsonStore) -> WageEntry {
        // max + 1 keeps ids unique across deletions, unlike len + 1.
        let id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let sequence_number = self.entries.len() as u32 + 1;
        let entry = WageEntry {
            id,
            sequence_number,
            label: format!("Item {}", sequence_number),
            rate: DEFAULT_RATE,
        };
        self.entries.push(entry.clone());
        store.save(WAGES_LIST, &self.entries);
        entry
    }

    /// Edit label and/or rate in place. An edit to the selected id updates
    /// the selected snapshot as well.
    pub fn update(
        &mut self,
        store: &JsonStore,
        id: u64,
        label: Option<&str>,
        rate: Option<f64>,
    ) -> Result<WageEntry> {
        if let Some(label) = label {
            if label.trim().is_empty() {
                return Err(KaratError::InvalidInput(
                    "wage label must not be empty".to_string(),
                ));
            }
        }
        if let Some(rate) = rate {
            if !rate.is_finite() || rate < 1.0 {
                return Err(KaratError::InvalidInput(format!(
                    "wage rate must be at least 1, got {}",
                    rate
                )));
            }
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| KaratError::NotFound(format!("wage entry {}", id)))?;
        if let Some(label) = label {
            entry.label = label.trim().to_string();
        }
        if let Some(rate) = rate {
            entry.rate = rate;
        }
        let updated = entry.clone();

        if self.selected.id == id {
            self.selected = updated.clone();
        }
        store.save(WAGES_LIST, &self.entries);
        Ok(updated)
    }

    /// Remove an entry and renumber the remainder 1..N in place. The last
    /// remaining entry cannot be removed; a removed selection falls back to
    /// the new first entry.
    pub fn remove(&mut self, store: &JsonStore, id: u64) -> Result<()> {
        if self.entries.len() == 1 {
            return Err(KaratError::InvalidOperation(
                "the last wage entry cannot be removed".to_string(),
            ));
        }
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| KaratError::NotFound(format!("wage entry {}", id)))?;
        self.entries.remove(index);

        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.sequence_number = i as u32 + 1;
        }
        if self.selected.id == id {
            if let Some(first) = self.entries.first() {
                self.selected = first.clone();
            }
        }
        store.save(WAGES_LIST, &self.entries);
        debug!("removed wage entry {}, {} remaining", id, self.entries.len());
        Ok(())
    }

    /// Record `id` as the current selection and return an independent copy.
    pub fn select(&mut self, id: u64) -> Result<WageEntry> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| KaratError::NotFound(format!("wage entry {}", id)))?;
        self.selected = entry.clone();
        Ok(self.selected.clone())
    }
}
