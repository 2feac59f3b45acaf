//! Catalog store and load lifecycle for TreadLine.
//!
//! [`CatalogStore`] owns the raw product collection and its load
//! bookkeeping; [`CatalogSource`] is the seam to whatever supplies the
//! data (a fixed set, a JSON file, eventually an API client). The pure
//! query engine lives in `tread-commerce`; this crate only manages
//! state.
//!
//! Load semantics follow the one concurrency rule the system has: a
//! newer load supersedes an older outstanding one, and a superseded
//! result is discarded, never merged. A failed load keeps the last
//! good collection.

mod source;
mod store;

pub use source::{CatalogSource, JsonFileSource, SourceError, StaticSource};
pub use store::{CatalogStore, LoadOutcome, LoadState, LoadTicket};
