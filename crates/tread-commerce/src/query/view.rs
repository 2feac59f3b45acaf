//! View computation: filter, sort, facets and chips in one pass.

use crate::catalog::Product;
use crate::query::{active_chips, brand_facet, Facet, FilterChip, FilterSpec};
use serde::{Deserialize, Serialize};

/// Which app surface is asking for the view.
///
/// The admin panel and the storefront share this engine; the only
/// behavioral difference is that the storefront never sees hidden
/// products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    /// Client shop; `visible == false` products are excluded.
    #[default]
    Storefront,
    /// Admin panel; sees every product.
    Admin,
}

/// An ordered, filtered view of the catalog with its derived facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Filtered products in stable sort order.
    pub items: Vec<Product>,
    /// Facets derived from the full (unfiltered) collection.
    pub facets: Vec<Facet>,
    /// Active filter chips projected from the spec.
    pub chips: Vec<FilterChip>,
    /// Number of items after filtering.
    pub total: usize,
}

impl CatalogView {
    /// Slice one page out of the items.
    pub fn page(&self, page: i64, per_page: i64) -> (&[Product], Pagination) {
        let pagination = Pagination::new(page.max(1), per_page.max(1), self.total as i64);
        let start = (pagination.offset() as usize).min(self.items.len());
        let end = (start + pagination.per_page as usize).min(self.items.len());
        (&self.items[start..end], pagination)
    }
}

/// Compute the catalog view for a collection and filter spec.
///
/// Pure and idempotent: identical inputs always produce identical
/// output, so callers may recompute on every change without
/// memoization. Facets are computed from the audience-scoped
/// collection before filtering, so changing filters never changes
/// facet counts.
pub fn compute_view(products: &[Product], spec: &FilterSpec, audience: Audience) -> CatalogView {
    let scoped: Vec<&Product> = products
        .iter()
        .filter(|p| audience == Audience::Admin || p.visible)
        .collect();

    let facets = vec![brand_facet(scoped.iter().copied(), Some(spec))];

    let mut items: Vec<Product> = scoped
        .into_iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect();
    spec.sort.sort(&mut items);

    let total = items.len();
    CatalogView {
        items,
        facets,
        chips: active_chips(spec),
        total,
    }
}

/// Pagination info for a paged catalog view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `per_page` is clamped to at least 1.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}
