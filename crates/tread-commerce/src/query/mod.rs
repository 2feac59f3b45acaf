//! Catalog query engine: filter spec, sort strategy, facets, views.

mod facets;
mod filter;
mod sort;
mod view;

pub use facets::{active_chips, brand_facet, ChipKind, Facet, FacetValue, FilterChip};
pub use filter::FilterSpec;
pub use sort::{Direction, SortField, SortKey};
pub use view::{compute_view, Audience, CatalogView, Pagination};
