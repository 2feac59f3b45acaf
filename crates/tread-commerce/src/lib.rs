//! Wholesale footwear catalog domain and query engine for TreadLine.
//!
//! This crate provides the types shared by the admin panel and the
//! client shop:
//!
//! - **Catalog**: products, size runs, availability buckets
//! - **Query**: filter spec, predicate pipeline, sort strategy, facets
//!
//! The query engine is entirely pure: given a product collection and a
//! [`query::FilterSpec`], [`query::compute_view`] produces the ordered,
//! filtered view plus derived facets and active-filter chips. Both app
//! surfaces consume the same engine through [`query::Audience`].
//!
//! # Example
//!
//! ```rust
//! use tread_commerce::prelude::*;
//!
//! let catalog = vec![
//!     Product::new("NIK-001", "Nike Air Max").with_size(42.0, Money::eur(5000), 60),
//!     Product::new("ADI-001", "Adidas Ultra").with_size(41.0, Money::eur(8000), 5),
//! ];
//!
//! let mut spec = FilterSpec::new();
//! spec.set_availability([Availability::InStock]);
//!
//! let view = compute_view(&catalog, &spec, Audience::Storefront);
//! assert_eq!(view.items.len(), 1);
//! assert_eq!(view.items[0].sku, "NIK-001");
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod query;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Availability, Product, SizeRun, SizeSystem, DEFAULT_CATEGORY};

    pub use crate::query::{
        active_chips, brand_facet, compute_view, Audience, CatalogView, ChipKind, Direction,
        Facet, FacetValue, FilterChip, FilterSpec, Pagination, SortField, SortKey,
    };
}
