//! Product types for the wholesale footwear catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category assumed when a product document carries none.
pub const DEFAULT_CATEGORY: &str = "sneakers";

/// A single size run: one EU size with its unit price and stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRun {
    /// EU size (e.g., 42.0, 42.5).
    pub size: f64,
    /// Wholesale unit price for this size.
    pub price: Money,
    /// Units in stock for this size.
    pub quantity: u32,
}

impl SizeRun {
    /// Create a new size run.
    pub fn new(size: f64, price: Money, quantity: u32) -> Self {
        Self {
            size,
            price,
            quantity,
        }
    }
}

/// A shoe model in the catalog.
///
/// The first whitespace-delimited token of `name` doubles as the
/// brand. This is a legacy limitation carried over from the source
/// data: multi-word brands are not representable ("New Balance 574"
/// has brand "New").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Display name; first token encodes the brand.
    pub name: String,
    /// Category slug; `None` means [`DEFAULT_CATEGORY`].
    pub category: Option<String>,
    /// Whether the product is visible on the storefront.
    pub visible: bool,
    /// Size runs. Absent in a malformed document deserializes to empty.
    #[serde(default)]
    pub sizes: Vec<SizeRun>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new visible product with no size runs.
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            category: None,
            visible: true,
            sizes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a size run.
    pub fn with_size(mut self, size: f64, price: Money, quantity: u32) -> Self {
        self.sizes.push(SizeRun::new(size, price, quantity));
        self
    }

    /// Mark the product as hidden from the storefront.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The brand, i.e. the first whitespace-delimited token of the name.
    ///
    /// Empty for an empty name. Multi-word brands are not supported;
    /// see the type-level docs.
    pub fn brand(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Lowercased brand, used as the comparison key everywhere brands
    /// are matched or counted.
    pub fn brand_key(&self) -> String {
        self.brand().to_lowercase()
    }

    /// The category, falling back to [`DEFAULT_CATEGORY`] when unset.
    pub fn effective_category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Total units in stock across all size runs.
    pub fn total_stock(&self) -> u32 {
        self.sizes.iter().map(|s| s.quantity).sum()
    }

    /// Minimum unit price across all size runs.
    ///
    /// `None` for a product with no size runs; the price sort orders
    /// such products as if they were infinitely expensive.
    pub fn min_price(&self) -> Option<Money> {
        self.sizes.iter().map(|s| s.price).min()
    }
}

/// Sizing system used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SizeSystem {
    /// European sizing, the catalog's native system.
    #[default]
    Eu,
    /// US men's sizing.
    Us,
}

impl SizeSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeSystem::Eu => "eu",
            SizeSystem::Us => "us",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "eu" => Some(SizeSystem::Eu),
            "us" => Some(SizeSystem::Us),
            _ => None,
        }
    }

    /// Format an EU size for display in this system.
    ///
    /// US men's sizes run roughly 33 below EU (EU 42 is US 9).
    pub fn label(&self, size_eu: f64) -> String {
        let value = match self {
            SizeSystem::Eu => size_eu,
            SizeSystem::Us => size_eu - 33.0,
        };
        if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{:.1}", value)
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(p.sku, "NIK-001");
        assert!(p.visible);
        assert!(p.sizes.is_empty());
    }

    #[test]
    fn test_brand_is_first_token() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(p.brand(), "Nike");
        assert_eq!(p.brand_key(), "nike");

        // Documented limitation: the first token wins, even when it
        // is not actually the brand.
        let p = Product::new("REP-001", "Classic Nike Replica");
        assert_eq!(p.brand(), "Classic");
    }

    #[test]
    fn test_brand_of_empty_name() {
        let p = Product::new("X-001", "");
        assert_eq!(p.brand(), "");
    }

    #[test]
    fn test_effective_category_default() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(p.effective_category(), "sneakers");

        let p = p.with_category("boots");
        assert_eq!(p.effective_category(), "boots");
    }

    #[test]
    fn test_total_stock() {
        let p = Product::new("NIK-001", "Nike Air Max")
            .with_size(42.0, Money::eur(5000), 60)
            .with_size(43.0, Money::eur(5200), 15);
        assert_eq!(p.total_stock(), 75);
    }

    #[test]
    fn test_total_stock_empty_sizes() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(p.total_stock(), 0);
    }

    #[test]
    fn test_min_price() {
        let p = Product::new("NIK-001", "Nike Air Max")
            .with_size(42.0, Money::eur(5200), 10)
            .with_size(40.0, Money::eur(5000), 10);
        assert_eq!(p.min_price(), Some(Money::eur(5000)));
    }

    #[test]
    fn test_min_price_empty_sizes() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(p.min_price(), None);
    }

    #[test]
    fn test_sizes_deserialize_default() {
        // A document without a sizes field is treated as sizes = [].
        let json = r#"{
            "id": "p1", "sku": "NIK-001", "name": "Nike Air Max",
            "category": null, "visible": true,
            "created_at": 0, "updated_at": 0
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.sizes.is_empty());
        assert_eq!(p.total_stock(), 0);
    }

    #[test]
    fn test_size_system_labels() {
        assert_eq!(SizeSystem::Eu.label(42.0), "42");
        assert_eq!(SizeSystem::Eu.label(42.5), "42.5");
        assert_eq!(SizeSystem::Us.label(42.0), "9");
        assert_eq!(SizeSystem::from_str("US"), Some(SizeSystem::Us));
        assert_eq!(SizeSystem::from_str("uk"), None);
    }
}
