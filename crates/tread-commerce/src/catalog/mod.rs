//! Catalog domain: products, size runs, availability buckets.

mod availability;
mod product;

pub use availability::{Availability, IN_STOCK_THRESHOLD};
pub use product::{Product, SizeRun, SizeSystem, DEFAULT_CATEGORY};
