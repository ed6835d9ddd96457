use crate::addon::{AddonLookup, Cadence};
use crate::catalog::PricingCatalog;
use crate::selection::Selection;
use std::sync::Arc;

/// Number of months a quarterly add-on is spread over
const MONTHS_PER_QUARTER: i64 = 3;

/// Derives the running total investment from a selection
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Arc<PricingCatalog>,
}

impl PricingEngine {
    pub fn new(catalog: Arc<PricingCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Package price plus the monthly-equivalent contribution of each add-on.
    ///
    /// Unresolvable package or add-on ids contribute nothing. The sum saturates instead of overflowing.
    pub fn compute_total(&self, selection: &Selection, addons: &dyn AddonLookup) -> i64 {
        let mut total: i64 = 0;

        if let Some(package) = selection.package().and_then(|id| self.catalog.lookup(id)) {
            total = package.price;
        }

        for id in selection.addons() {
            match addons.terms(id) {
                Some(terms) => total = total.saturating_add(prorate(terms.price, terms.cadence)),
                None => tracing::warn!("Skipping unresolvable add-on {}", id),
            }
        }

        total
    }
}

/// Monthly-equivalent contribution of an add-on price
pub fn prorate(price: i64, cadence: Cadence) -> i64 {
    match cadence {
        Cadence::Monthly => price,
        Cadence::Quarterly => div_round_half_away(price, MONTHS_PER_QUARTER),
    }
}

/// Integer division by a positive denominator, rounded to nearest with ties away from zero
fn div_round_half_away(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let remainder = (numerator % denominator).abs();
    // remainder < denominator, so neither side can overflow
    if remainder >= denominator - remainder {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// `$` plus the amount with thousands separators; non-positive amounts render as `$0`
pub fn format_currency(amount: i64) -> String {
    if amount <= 0 {
        return "$0".to_string();
    }

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}", grouped)
}
