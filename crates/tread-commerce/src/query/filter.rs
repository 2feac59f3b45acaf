//! Filter specification and the predicate pipeline.

use crate::catalog::{Availability, Product, SizeSystem};
use crate::query::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The complete set of user-chosen query parameters.
///
/// An empty set on a dimension means "no constraint on this
/// dimension", never "match nothing". The spec is an immutable value
/// as far as the engine is concerned; the owning layer mutates it
/// through the methods below and recomputes the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterSpec {
    /// Free-text search over name and SKU.
    #[serde(default)]
    pub search: String,
    /// Selected brand keys (lowercased).
    #[serde(default)]
    pub brands: BTreeSet<String>,
    /// Selected category slugs.
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// Selected availability buckets.
    #[serde(default)]
    pub availability: BTreeSet<Availability>,
    /// Sort key for the result list.
    #[serde(default)]
    pub sort: SortKey,
    /// Sizing system for display.
    #[serde(default)]
    pub size_system: SizeSystem,
}

impl FilterSpec {
    /// Create an all-dimensions-empty spec with the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term wholesale.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Replace the selected brand set wholesale. Keys are lowercased.
    pub fn set_brands(&mut self, brands: impl IntoIterator<Item = String>) {
        self.brands = brands.into_iter().map(|b| b.to_lowercase()).collect();
    }

    /// Replace the selected category set wholesale.
    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = String>) {
        self.categories = categories.into_iter().collect();
    }

    /// Replace the selected availability set wholesale.
    pub fn set_availability(&mut self, buckets: impl IntoIterator<Item = Availability>) {
        self.availability = buckets.into_iter().collect();
    }

    /// Replace the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Replace the sizing system.
    pub fn set_size_system(&mut self, system: SizeSystem) {
        self.size_system = system;
    }

    /// Toggle one brand in or out of the selection.
    pub fn toggle_brand(&mut self, brand: &str) {
        let key = brand.to_lowercase();
        if !self.brands.remove(&key) {
            self.brands.insert(key);
        }
    }

    /// Toggle one category in or out of the selection.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Toggle one availability bucket in or out of the selection.
    pub fn toggle_availability(&mut self, bucket: Availability) {
        if !self.availability.remove(&bucket) {
            self.availability.insert(bucket);
        }
    }

    /// Clear the search term.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Remove one brand from the selection.
    pub fn remove_brand(&mut self, brand: &str) {
        self.brands.remove(&brand.to_lowercase());
    }

    /// Remove one category from the selection.
    pub fn remove_category(&mut self, category: &str) {
        self.categories.remove(category);
    }

    /// Remove one availability bucket from the selection.
    pub fn remove_availability(&mut self, bucket: Availability) {
        self.availability.remove(&bucket);
    }

    /// Reset every dimension to the all-empty default.
    pub fn clear_all(&mut self) {
        *self = FilterSpec::default();
    }

    /// Whether no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.trimmed_search().is_empty()
            && self.brands.is_empty()
            && self.categories.is_empty()
            && self.availability.is_empty()
    }

    /// The search term after trimming; empty means no search constraint.
    pub fn trimmed_search(&self) -> &str {
        self.search.trim()
    }

    /// The combined predicate: AND across dimensions, OR within each
    /// dimension's selected set. Pure; never panics, even for
    /// products with no size runs.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_brand(product)
            && self.matches_category(product)
            && self.matches_availability(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let term = self.trimmed_search().to_lowercase();
        if term.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&term) || product.sku.to_lowercase().contains(&term)
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand_key())
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(product.effective_category())
    }

    fn matches_availability(&self, product: &Product) -> bool {
        self.availability.is_empty() || self.availability.iter().any(|b| b.matches(product))
    }
}
