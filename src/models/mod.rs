use serde::{Deserialize, Serialize};

/// The four active per-gram prices. All zero until the daily gate has been
/// passed at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSet {
    pub gold_without_tax: f64,
    pub gold_with_tax: f64,
    pub silver_without_tax: f64,
    pub silver_with_tax: f64,
}

impl PriceSet {
    /// Four-way lookup of the per-gram price for a material and tax flag.
    pub fn per_gram(&self, material: Material, tax_included: bool) -> f64 {
        match (material, tax_included) {
            (Material::Gold, true) => self.gold_with_tax,
            (Material::Gold, false) => self.gold_without_tax,
            (Material::Silver, true) => self.silver_with_tax,
            (Material::Silver, false) => self.silver_without_tax,
        }
    }

    /// Gate predicate: the daily entry form is accepted only when every
    /// price is strictly positive.
    pub fn all_positive(&self) -> bool {
        self.gold_without_tax > 0.0
            && self.gold_with_tax > 0.0
            && self.silver_without_tax > 0.0
            && self.silver_with_tax > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Gold,
    Silver,
}

/// A making-charge entry. `id` is stable for the lifetime of the entry;
/// `sequence_number` is the 1-based display rank and is recomputed whenever
/// the list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageEntry {
    pub id: u64,
    pub sequence_number: u32,
    pub label: String,
    pub rate: f64,
}

/// One computed sale price. The per-gram price and wage amount are copied in
/// at calculation time, so later edits never change a displayed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub weight: f64,
    pub material: Material,
    pub price_per_gram: f64,
    pub wage_amount: f64,
    pub total: f64,
    pub tax_included: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub timestamp: String,
    pub weight: f64,
    pub material: Material,
    pub price_per_gram: f64,
    pub wage_amount: f64,
    pub total: f64,
    pub tax_included: bool,
}

/// UI-facing session snapshot. `weight_text` is kept as raw text so
/// intermediate entries like a trailing "." survive a re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub weight_text: String,
    pub material: Material,
    pub tax_included: bool,
    pub result: Option<CalculationResult>,
    pub gate_forced: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            weight_text: String::new(),
            material: Material::Gold,
            tax_included: true,
            result: None,
            gate_forced: false,
        }
    }
}
