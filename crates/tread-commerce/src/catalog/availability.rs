//! Availability buckets for stock-level filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Units above which a product counts as comfortably in stock.
pub const IN_STOCK_THRESHOLD: u32 = 50;

/// Coarse stock-level classification used for filtering.
///
/// The buckets are deliberately NOT a strict partition. Each bucket is
/// an independent rule, and a product satisfies a requested bucket
/// whenever that bucket's rule holds: a shoe named "Custom Runner"
/// with 60 units in stock answers to both `MadeToOrder` and `InStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    /// More than 50 units across all sizes.
    InStock,
    /// Between 1 and 50 units inclusive.
    LowStock,
    /// Zero units; orderable for the next production run.
    PreOrder,
    /// Name contains "custom" (legacy heuristic, stock-independent).
    MadeToOrder,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::LowStock => "low-stock",
            Availability::PreOrder => "pre-order",
            Availability::MadeToOrder => "made-to-order",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in-stock" => Some(Availability::InStock),
            "low-stock" => Some(Availability::LowStock),
            "pre-order" => Some(Availability::PreOrder),
            "made-to-order" => Some(Availability::MadeToOrder),
            _ => None,
        }
    }

    /// Human-readable name for facet and chip labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Availability::InStock => "In stock",
            Availability::LowStock => "Low stock",
            Availability::PreOrder => "Pre-order",
            Availability::MadeToOrder => "Made to order",
        }
    }

    /// Evaluate this bucket's rule against a product.
    pub fn matches(&self, product: &Product) -> bool {
        let stock = product.total_stock();
        match self {
            Availability::InStock => stock > IN_STOCK_THRESHOLD,
            Availability::LowStock => stock > 0 && stock <= IN_STOCK_THRESHOLD,
            Availability::PreOrder => stock == 0,
            Availability::MadeToOrder => product.name.to_lowercase().contains("custom"),
        }
    }

    /// All buckets, in display order.
    pub fn all() -> [Availability; 4] {
        [
            Availability::InStock,
            Availability::LowStock,
            Availability::PreOrder,
            Availability::MadeToOrder,
        ]
    }

    /// Every bucket whose rule a product satisfies.
    pub fn buckets_for(product: &Product) -> Vec<Availability> {
        Self::all()
            .into_iter()
            .filter(|b| b.matches(product))
            .collect()
    }
}
