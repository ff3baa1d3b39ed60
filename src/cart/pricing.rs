use crate::cart::models::CartLineItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Promo codes and their percentage discount. Codes are stored and
/// matched uppercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct PromoTable {
    codes: BTreeMap<String, u8>,
}

impl Default for PromoTable {
    fn default() -> Self {
        Self::from_codes([("SAVE20".to_string(), 20)])
    }
}

impl From<BTreeMap<String, u8>> for PromoTable {
    fn from(codes: BTreeMap<String, u8>) -> Self {
        Self::from_codes(codes)
    }
}

impl From<PromoTable> for BTreeMap<String, u8> {
    fn from(table: PromoTable) -> Self {
        table.codes
    }
}

impl PromoTable {
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = (String, u8)>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|(code, percent)| (code.trim().to_uppercase(), percent))
                .collect(),
        }
    }

    /// Case-insensitive, ignoring surrounding whitespace.
    pub fn percent_for(&self, code: &str) -> Option<u8> {
        self.codes.get(&code.trim().to_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// What happened to the promo code the student entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum PromoStatus {
    None,
    Applied { code: String, percent: u8 },
    Unrecognized { code: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    pub item_count: u64,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub total_savings: f64,
    pub promo: PromoStatus,
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Price a cart.
///
/// An unrecognized promo code leaves the totals exactly as if no code had
/// been given; `CartTotals::promo` records it so a caller can tell the
/// student. Prices and quantities are taken as given; the total is floored
/// at zero.
pub fn price_cart(items: &[CartLineItem], promo_code: Option<&str>, promos: &PromoTable) -> CartTotals {
    let subtotal: f64 = items.iter().map(CartLineItem::line_total).sum();

    let promo = match promo_code.map(str::trim).filter(|c| !c.is_empty()) {
        None => PromoStatus::None,
        Some(code) => match promos.percent_for(code) {
            Some(percent) => PromoStatus::Applied {
                code: code.to_string(),
                percent,
            },
            None => {
                tracing::warn!(code, "ignoring unrecognized promo code");
                PromoStatus::Unrecognized {
                    code: code.to_string(),
                }
            }
        },
    };

    let discount = match &promo {
        PromoStatus::Applied { percent, .. } => subtotal.max(0.0) * f64::from(*percent) / 100.0,
        _ => 0.0,
    };
    let total = (subtotal - discount).max(0.0);

    let list_savings: f64 = items
        .iter()
        .map(|item| match item.course.original_price {
            Some(original) => (original - item.course.price).max(0.0) * f64::from(item.quantity),
            None => 0.0,
        })
        .sum();

    CartTotals {
        item_count: items.iter().map(|i| u64::from(i.quantity)).sum(),
        subtotal: round_cents(subtotal),
        discount: round_cents(discount),
        total: round_cents(total),
        total_savings: round_cents(discount + list_savings),
        promo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promo_lookup_trims() {
        let table = PromoTable::default();
        assert_eq!(table.percent_for("SAVE20"), Some(20));
        assert_eq!(table.percent_for("  SAVE20 "), Some(20));
        assert_eq!(table.percent_for("save20"), Some(20));
        assert_eq!(table.percent_for("SAVE30"), None);
    }

    #[test]
    fn test_blank_code_is_no_code() {
        let items = vec![CartLineItem::new("c-1", "Rust", 10.0, 1)];
        let totals = price_cart(&items, Some("   "), &PromoTable::default());
        assert_eq!(totals.promo, PromoStatus::None);
        assert_eq!(totals.total, 10.0);
    }

    #[test]
    fn test_cents_rounding() {
        let items = vec![CartLineItem::new("c-1", "Rust", 19.99, 3)];
        let totals = price_cart(&items, Some("SAVE20"), &PromoTable::default());
        assert_eq!(totals.subtotal, 59.97);
        assert_eq!(totals.discount, 11.99);
        assert_eq!(totals.total, 47.98);
    }
}
