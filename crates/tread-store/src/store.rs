//! The catalog store: raw collection plus load bookkeeping.

use crate::source::{CatalogSource, SourceError};
use tread_commerce::catalog::Product;

/// How the store's collection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// A load is outstanding.
    Loading,
    /// The collection reflects the most recent successful load.
    Loaded,
    /// The most recent load failed; the previous collection, if any,
    /// is retained.
    Failed,
}

/// Ticket identifying one load attempt.
///
/// Tickets are handed out by [`CatalogStore::begin_load`] in
/// monotonically increasing order; completing with a stale ticket
/// discards the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Outcome of completing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was swapped in.
    Applied,
    /// The load failed; the previous collection was retained.
    Failed,
    /// A newer load superseded this one; the result was discarded.
    Superseded,
}

/// Owns the raw product collection for one app surface.
///
/// Single-threaded cooperative model: no internal locking, callers
/// that share a store across tasks wrap it themselves. Derived views
/// are computed by the pure engine in `tread-commerce`; the store only
/// manages the collection and its load lifecycle.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    state: LoadState,
    last_error: Option<String>,
    // Generation counters for stale-load detection.
    begun: u64,
    completed: u64,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last good collection (empty before the first load).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Whether a load is outstanding. Callers that want to avoid
    /// duplicate in-flight loads check this before `begin_load`.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Message of the most recent failed load, cleared by the next
    /// successful swap-in.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Begin a load attempt. A newer ticket supersedes every
    /// outstanding one: their results will be discarded on completion.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.begun += 1;
        self.state = LoadState::Loading;
        tracing::debug!(generation = self.begun, "catalog load started");
        LoadTicket(self.begun)
    }

    /// Complete a load attempt.
    ///
    /// Stale results, success or failure, are discarded whole. A
    /// current failure records the error and retains the previous
    /// collection untouched.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, SourceError>,
    ) -> LoadOutcome {
        if ticket.0 != self.begun || ticket.0 <= self.completed {
            tracing::warn!(
                generation = ticket.0,
                current = self.begun,
                "stale catalog load discarded"
            );
            return LoadOutcome::Superseded;
        }
        self.completed = ticket.0;

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.products = products;
                self.state = LoadState::Loaded;
                self.last_error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed, keeping previous collection");
                self.state = LoadState::Failed;
                self.last_error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Run one begin/await/complete cycle against a source.
    pub async fn load_from(&mut self, source: &dyn CatalogSource) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = source.load_products().await;
        self.complete_load(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use tread_commerce::money::Money;

    fn shoes(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| {
                Product::new(format!("SKU-{i}"), format!("Brand{i} Model"))
                    .with_size(42.0, Money::eur(5000), 10)
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let store = CatalogStore::new();
        assert_eq!(store.state(), LoadState::Idle);
        assert!(store.products().is_empty());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_successful_load_swaps_collection() {
        let mut store = CatalogStore::new();
        let ticket = store.begin_load();
        assert!(store.is_loading());

        let outcome = store.complete_load(ticket, Ok(shoes(3)));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.state(), LoadState::Loaded);
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_failed_load_retains_previous_collection() {
        let mut store = CatalogStore::new();
        let t1 = store.begin_load();
        store.complete_load(t1, Ok(shoes(3)));

        let t2 = store.begin_load();
        let outcome = store.complete_load(
            t2,
            Err(SourceError::Unavailable("backend down".to_string())),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(store.state(), LoadState::Failed);
        // Last-good collection untouched.
        assert_eq!(store.products().len(), 3);
        assert!(store.last_error().unwrap().contains("backend down"));
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut store = CatalogStore::new();
        let old = store.begin_load();
        let new = store.begin_load(); // supersedes `old`

        // The stale success must not be merged in.
        assert_eq!(store.complete_load(old, Ok(shoes(5))), LoadOutcome::Superseded);
        assert!(store.products().is_empty());

        assert_eq!(store.complete_load(new, Ok(shoes(2))), LoadOutcome::Applied);
        assert_eq!(store.products().len(), 2);

        // Completing the same ticket twice is also stale.
        assert_eq!(store.complete_load(new, Ok(shoes(9))), LoadOutcome::Superseded);
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_state() {
        let mut store = CatalogStore::new();
        let old = store.begin_load();
        let new = store.begin_load();
        store.complete_load(new, Ok(shoes(2)));

        let outcome = store.complete_load(
            old,
            Err(SourceError::Unavailable("timeout".to_string())),
        );
        assert_eq!(outcome, LoadOutcome::Superseded);
        assert_eq!(store.state(), LoadState::Loaded);
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_success_clears_last_error() {
        let mut store = CatalogStore::new();
        let t1 = store.begin_load();
        store.complete_load(t1, Err(SourceError::Unavailable("down".to_string())));
        assert!(store.last_error().is_some());

        let t2 = store.begin_load();
        store.complete_load(t2, Ok(shoes(1)));
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let mut store = CatalogStore::new();
        let source = StaticSource::new(shoes(4));
        let outcome = store.load_from(&source).await;
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.products().len(), 4);
    }
}
