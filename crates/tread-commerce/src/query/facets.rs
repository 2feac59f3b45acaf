//! Facet derivation and active filter chips.

use crate::catalog::Product;
use crate::query::FilterSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A facet for populating filter UI options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values with counts.
    pub values: Vec<FacetValue>,
}

/// A single facet value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    /// Display label (e.g., "Nike").
    pub label: String,
    /// Filter value key (lowercased).
    pub value: String,
    /// Number of products with this value.
    pub count: u32,
    /// Whether currently selected.
    pub selected: bool,
}

/// Derive the brand facet from the full (unfiltered) collection.
///
/// Brands come from the first-token rule on the product name. Values
/// are keyed case-insensitively, labelled with the casing of the first
/// product that carries the brand, and sorted lexicographically by
/// key. Facets never depend on the active filters; only `selected`
/// mirrors the supplied spec.
pub fn brand_facet<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    spec: Option<&FilterSpec>,
) -> Facet {
    let mut counts: HashMap<String, (String, u32)> = HashMap::new();
    for product in products {
        let key = product.brand_key();
        if key.is_empty() {
            continue;
        }
        let entry = counts
            .entry(key)
            .or_insert_with(|| (product.brand().to_string(), 0));
        entry.1 += 1;
    }

    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, (label, count))| FacetValue {
            selected: spec.map_or(false, |s| s.brands.contains(&value)),
            label,
            value,
            count,
        })
        .collect();
    values.sort_by(|a, b| a.value.cmp(&b.value));

    Facet {
        name: "Brand".to_string(),
        field: "brand".to_string(),
        values,
    }
}

/// The dimension an active filter chip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChipKind {
    Search,
    Brand,
    Category,
}

/// A removable "active filter" chip shown above the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChip {
    /// Which dimension the chip projects.
    pub kind: ChipKind,
    /// Display label (e.g., `Search: "air"`).
    pub label: String,
    /// The raw filter value, used to clear the chip.
    pub value: String,
}

/// Project the active filters into display chips: one for a non-empty
/// search term, one per selected brand, one per selected category.
/// Pure projection of the spec; carries no other logic.
pub fn active_chips(spec: &FilterSpec) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    let term = spec.trimmed_search();
    if !term.is_empty() {
        chips.push(FilterChip {
            kind: ChipKind::Search,
            label: format!("Search: \"{}\"", term),
            value: term.to_string(),
        });
    }

    for brand in &spec.brands {
        chips.push(FilterChip {
            kind: ChipKind::Brand,
            label: format!("Brand: {}", brand),
            value: brand.clone(),
        });
    }

    for category in &spec.categories {
        chips.push(FilterChip {
            kind: ChipKind::Category,
            label: format!("Category: {}", category),
            value: category.clone(),
        });
    }

    chips
}

impl FilterSpec {
    /// Remove the filter value a chip stands for.
    pub fn clear_chip(&mut self, chip: &FilterChip) {
        match chip.kind {
            ChipKind::Search => self.clear_search(),
            ChipKind::Brand => self.remove_brand(&chip.value),
            ChipKind::Category => self.remove_category(&chip.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("A1", "Nike Air Max").with_size(40.0, Money::eur(5000), 60),
            Product::new("A2", "Nike Blazer").with_size(41.0, Money::eur(4500), 10),
            Product::new("A3", "Adidas Ultra").with_size(41.0, Money::eur(8000), 5),
            Product::new("A4", "vans Old Skool").with_size(42.0, Money::eur(4000), 30),
        ]
    }

    #[test]
    fn test_brand_counts() {
        let facet = brand_facet(&catalog(), None);
        assert_eq!(facet.field, "brand");
        let nike = facet.values.iter().find(|v| v.value == "nike").unwrap();
        assert_eq!(nike.count, 2);
        assert_eq!(nike.label, "Nike");
    }

    #[test]
    fn test_brands_sorted_lexicographically() {
        let facet = brand_facet(&catalog(), None);
        let keys: Vec<&str> = facet.values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(keys, vec!["adidas", "nike", "vans"]);
    }

    #[test]
    fn test_empty_collection_yields_empty_facet() {
        let empty: Vec<Product> = Vec::new();
        let facet = brand_facet(&empty, None);
        assert!(facet.values.is_empty());
    }

    #[test]
    fn test_selected_mirrors_spec() {
        let mut spec = FilterSpec::new();
        spec.toggle_brand("Nike");
        let facet = brand_facet(&catalog(), Some(&spec));
        assert!(facet.values.iter().find(|v| v.value == "nike").unwrap().selected);
        assert!(!facet.values.iter().find(|v| v.value == "adidas").unwrap().selected);
    }

    #[test]
    fn test_facet_ignores_filters() {
        let mut spec = FilterSpec::new();
        spec.set_search("air");
        let filtered = brand_facet(&catalog(), Some(&spec));
        let unfiltered = brand_facet(&catalog(), None);
        let counts = |f: &Facet| f.values.iter().map(|v| v.count).collect::<Vec<_>>();
        assert_eq!(counts(&filtered), counts(&unfiltered));
    }

    #[test]
    fn test_chips_project_spec() {
        let mut spec = FilterSpec::new();
        spec.set_search("  air  ");
        spec.toggle_brand("Nike");
        spec.toggle_category("boots");

        let chips = active_chips(&spec);
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].kind, ChipKind::Search);
        assert_eq!(chips[0].value, "air");
        assert_eq!(chips[1].kind, ChipKind::Brand);
        assert_eq!(chips[2].kind, ChipKind::Category);
    }

    #[test]
    fn test_no_chips_for_empty_spec() {
        assert!(active_chips(&FilterSpec::new()).is_empty());
    }

    #[test]
    fn test_clear_chip_removes_value() {
        let mut spec = FilterSpec::new();
        spec.set_search("air");
        spec.toggle_brand("Nike");

        let chips = active_chips(&spec);
        for chip in &chips {
            spec.clear_chip(chip);
        }
        assert!(spec.is_empty());
    }
}
