//! Stale-while-fresh cache in front of another airport source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use wayfare_core::domain::Airport;
use wayfare_core::ports::{AirportError, AirportSource};

struct CacheEntry {
    airports: Vec<Airport>,
    fetched_at: Instant,
}

/// Serves the last fetched list until it is older than `stale_after`.
///
/// Failed fetches are not cached.
pub struct CachedAirportSource {
    inner: Arc<dyn AirportSource>,
    stale_after: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl CachedAirportSource {
    pub fn new(inner: Arc<dyn AirportSource>, stale_after: Duration) -> Self {
        Self {
            inner,
            stale_after,
            entry: RwLock::new(None),
        }
    }

    /// Wrap `inner` with the stale time from `AIRPORTS_STALE_SECS` (default 5 minutes).
    pub fn from_env(inner: Arc<dyn AirportSource>) -> Self {
        let secs = std::env::var("AIRPORTS_STALE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(300);
        Self::new(inner, Duration::from_secs(secs))
    }

    /// Drop the cached list so the next call refetches.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.fetched_at.elapsed() < self.stale_after
    }
}

#[async_trait]
impl AirportSource for CachedAirportSource {
    async fn airports(&self) -> Result<Vec<Airport>, AirportError> {
        if let Some(entry) = self.entry.read().await.as_ref() {
            if self.is_fresh(entry) {
                return Ok(entry.airports.clone());
            }
        }

        let mut slot = self.entry.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(entry) = slot.as_ref() {
            if self.is_fresh(entry) {
                return Ok(entry.airports.clone());
            }
        }

        let airports = self.inner.airports().await?;
        tracing::debug!(count = airports.len(), "Airport list refreshed");
        *slot = Some(CacheEntry {
            airports: airports.clone(),
            fetched_at: Instant::now(),
        });

        Ok(airports)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AirportSource for CountingSource {
        async fn airports(&self) -> Result<Vec<Airport>, AirportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AirportError::Lookup("offline".to_string()));
            }
            Ok(vec![Airport::new(
                "SIN",
                "Singapore Changi Airport",
                "Singapore",
                "Singapore",
            )])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_serves_cached_list_while_fresh() {
        let inner = Arc::new(CountingSource::default());
        let cached = CachedAirportSource::new(inner.clone(), Duration::from_secs(300));

        cached.airports().await.unwrap();
        tokio::time::advance(Duration::from_secs(299)).await;
        let airports = cached.airports().await.unwrap();

        assert_eq!(airports[0].code, "SIN");
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetches_when_stale() {
        let inner = Arc::new(CountingSource::default());
        let cached = CachedAirportSource::new(inner.clone(), Duration::from_secs(300));

        cached.airports().await.unwrap();
        tokio::time::advance(Duration::from_secs(301)).await;
        cached.airports().await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_forces_refetch() {
        let inner = Arc::new(CountingSource::default());
        let cached = CachedAirportSource::new(inner.clone(), Duration::from_secs(300));

        cached.airports().await.unwrap();
        cached.invalidate().await;
        cached.airports().await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let inner = Arc::new(CountingSource {
            fail: true,
            ..Default::default()
        });
        let cached = CachedAirportSource::new(inner.clone(), Duration::from_secs(300));

        assert!(cached.airports().await.is_err());
        assert!(cached.airports().await.is_err());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
