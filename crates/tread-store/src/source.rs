//! Catalog sources: the collaborator that supplies the raw collection.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tread_commerce::catalog::Product;

/// Errors that can occur while loading a catalog.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read the underlying data.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The data was not a valid product collection.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source rejected the request.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the raw product collection.
///
/// The engine treats this as an opaque collaborator: it may be a
/// remote API client, a file reader or a fixed in-memory set. A failed
/// load surfaces the error and leaves any previously loaded collection
/// untouched (see [`crate::CatalogStore`]).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full product collection.
    async fn load_products(&self) -> Result<Vec<Product>, SourceError>;
}

/// A fixed in-memory catalog source.
///
/// Stands in for backend endpoints in demos and tests, the same role
/// the mock data services played in the original system.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    /// Create a source serving a fixed collection.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn load_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

/// Reads a JSON array of products from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load_products(&self) -> Result<Vec<Product>, SourceError> {
        let content = std::fs::read_to_string(&self.path)?;
        let products = serde_json::from_str(&content)?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tread_commerce::money::Money;

    #[tokio::test]
    async fn test_static_source_serves_collection() {
        let source = StaticSource::new(vec![
            Product::new("A1", "Nike Air Max").with_size(42.0, Money::eur(5000), 10),
        ]);
        let products = source.load_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, "A1");
    }

    #[tokio::test]
    async fn test_json_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/catalog.json");
        assert!(matches!(
            source.load_products().await,
            Err(SourceError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_json_source_roundtrip() {
        let dir = std::env::temp_dir().join("tread-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");

        let products = vec![Product::new("A1", "Nike Air Max")];
        std::fs::write(&path, serde_json::to_string(&products).unwrap()).unwrap();

        let loaded = JsonFileSource::new(&path).load_products().await.unwrap();
        assert_eq!(loaded, products);
    }

    #[tokio::test]
    async fn test_json_source_rejects_garbage() {
        let dir = std::env::temp_dir().join("tread-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileSource::new(&path).load_products().await,
            Err(SourceError::Parse(_))
        ));
    }
}
