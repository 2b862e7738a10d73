use crate::error::{KaratError, Result};
use crate::models::{CalculationResult, Material, PriceSet, WageEntry};

/// Compute a sale total from the raw weight text and the active price and
/// wage snapshots. Pure: the caller decides whether the result is displayed,
/// committed to history, or dropped.
///
/// `total = weight * price_per_gram + wage.rate` — the making charge is a
/// flat amount, independent of weight.
pub fn compute_total(
    weight_text: &str,
    material: Material,
    tax_included: bool,
    prices: &PriceSet,
    wage: &WageEntry,
) -> Result<CalculationResult> {
    let trimmed = weight_text.trim();
    if trimmed.is_empty() {
        return Err(KaratError::InvalidInput("weight is empty".to_string()));
    }
    let weight: f64 = trimmed
        .parse()
        .map_err(|_| KaratError::InvalidInput(format!("weight '{}' is not a number", trimmed)))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(KaratError::InvalidInput(format!(
            "weight must be a non-negative number, got '{}'",
            trimmed
        )));
    }

    let price_per_gram = prices.per_gram(material, tax_included);
    let total = weight * price_per_gram + wage.rate;

    Ok(CalculationResult {
        weight,
        material,
        price_per_gram,
        wage_amount: wage.rate,
        total,
        tax_included,
    })
}
