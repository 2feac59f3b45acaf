//! Sort strategy for filtered catalog views.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The field a catalog view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortField {
    /// Product display name.
    #[default]
    Name,
    /// Minimum unit price across size runs.
    Price,
    /// Total units in stock.
    Stock,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Stock => "stock",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A sort key in `"<field>-<direction>"` wire form (e.g. "price-desc").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Wire form, e.g. "name-asc".
    pub fn as_string(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.direction.as_str())
    }

    /// Human-readable name for sort menus.
    pub fn display_name(&self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::Name, Direction::Asc) => "Name: A-Z",
            (SortField::Name, Direction::Desc) => "Name: Z-A",
            (SortField::Price, Direction::Asc) => "Price: Low to High",
            (SortField::Price, Direction::Desc) => "Price: High to Low",
            (SortField::Stock, Direction::Asc) => "Stock: Low to High",
            (SortField::Stock, Direction::Desc) => "Stock: High to Low",
        }
    }

    /// Compare two products under this key.
    ///
    /// Descending inverts the ascending comparator rather than
    /// reversing the sorted list, so a stable sort preserves insertion
    /// order among ties in both directions. Products with no size runs
    /// have no minimum price and order as infinitely expensive.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let asc = match self.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Price => match (a.min_price(), b.min_price()) {
                (Some(pa), Some(pb)) => pa.cmp(&pb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortField::Stock => a.total_stock().cmp(&b.total_stock()),
        };
        match self.direction {
            Direction::Asc => asc,
            Direction::Desc => asc.reverse(),
        }
    }

    /// Stable-sort a product list in place under this key.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CatalogError::InvalidSortKey(s.to_string());
        let (field, direction) = s.rsplit_once('-').ok_or_else(err)?;
        let field = match field.to_lowercase().as_str() {
            "name" => SortField::Name,
            "price" => SortField::Price,
            "stock" => SortField::Stock,
            _ => return Err(err()),
        };
        let direction = match direction.to_lowercase().as_str() {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            _ => return Err(err()),
        };
        Ok(SortKey::new(field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn shoe(sku: &str, name: &str, price_cents: i64, quantity: u32) -> Product {
        Product::new(sku, name).with_size(42.0, Money::eur(price_cents), quantity)
    }

    #[test]
    fn test_parse_wire_form() {
        let key: SortKey = "price-desc".parse().unwrap();
        assert_eq!(key.field, SortField::Price);
        assert_eq!(key.direction, Direction::Desc);
        assert_eq!(key.as_string(), "price-desc");

        assert!("rating-asc".parse::<SortKey>().is_err());
        assert!("name".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_is_name_asc() {
        assert_eq!(SortKey::default(), SortKey::new(SortField::Name, Direction::Asc));
    }

    #[test]
    fn test_price_desc_order() {
        let mut shoes = vec![
            shoe("A1", "Nike Air Max", 5000, 10),
            shoe("A2", "Adidas Ultra", 8000, 10),
        ];
        "price-desc".parse::<SortKey>().unwrap().sort(&mut shoes);
        assert_eq!(shoes[0].sku, "A2");
        assert_eq!(shoes[1].sku, "A1");
    }

    #[test]
    fn test_name_sort_case_insensitive() {
        let mut shoes = vec![
            shoe("A1", "vans Old Skool", 4000, 1),
            shoe("A2", "Adidas Ultra", 8000, 1),
            shoe("A3", "Nike Air Max", 5000, 1),
        ];
        SortKey::default().sort(&mut shoes);
        let names: Vec<&str> = shoes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Adidas Ultra", "Nike Air Max", "vans Old Skool"]);
    }

    #[test]
    fn test_stock_sort() {
        let mut shoes = vec![
            shoe("A1", "Nike Air Max", 5000, 60),
            shoe("A2", "Adidas Ultra", 8000, 5),
        ];
        "stock-asc".parse::<SortKey>().unwrap().sort(&mut shoes);
        assert_eq!(shoes[0].sku, "A2");
    }

    #[test]
    fn test_empty_sizes_sort_last_ascending() {
        let mut shoes = vec![
            Product::new("B1", "Reebok Club"),
            shoe("A1", "Nike Air Max", 5000, 10),
        ];
        "price-asc".parse::<SortKey>().unwrap().sort(&mut shoes);
        assert_eq!(shoes[1].sku, "B1");

        // Inverted comparator puts the priceless product first descending.
        "price-desc".parse::<SortKey>().unwrap().sort(&mut shoes);
        assert_eq!(shoes[0].sku, "B1");
    }

    #[test]
    fn test_ties_keep_insertion_order_both_directions() {
        let mut asc = vec![
            shoe("A1", "Nike Air Max", 5000, 10),
            shoe("A2", "Adidas Ultra", 5000, 10),
            shoe("A3", "Puma Suede", 5000, 10),
        ];
        let mut desc = asc.clone();
        "price-asc".parse::<SortKey>().unwrap().sort(&mut asc);
        "price-desc".parse::<SortKey>().unwrap().sort(&mut desc);

        // All tied on price: stable sort keeps insertion order for
        // both directions, since only the comparator is inverted.
        let order = |v: &[Product]| v.iter().map(|p| p.sku.clone()).collect::<Vec<_>>();
        assert_eq!(order(&asc), vec!["A1", "A2", "A3"]);
        assert_eq!(order(&desc), order(&asc));
    }
}
