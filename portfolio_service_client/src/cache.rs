//! Generic cached collection with optimistic mutations.
//!
//! One instance caches one collection's list. Reads go through [`query`],
//! which dedups concurrent fetches; writes go through [`mutate`], which
//! applies the expected effect to the cached list immediately, restores the
//! pre-mutation snapshot exactly if the operation fails, and marks the cache
//! stale either way so the next read reconciles with server state.
//!
//! Concurrent mutations are deliberately not serialized against each other:
//! each one snapshots whatever the cache held when it started, so two
//! overlapping patches can race. The stale-flag refetch after settle is the
//! consistency backstop.
//!
//! [`query`]: CollectionCache::query
//! [`mutate`]: CollectionCache::mutate

use std::sync::{Arc, Mutex};

struct State<T> {
    entries: Option<Vec<T>>,
    stale: bool,
}

pub struct CollectionCache<T> {
    state: Arc<Mutex<State<T>>>,
    /// Serializes fetches so concurrent cold reads hit the network once.
    fetch_lock: Arc<tokio::sync::Mutex<()>>,
}

impl<T> Clone for CollectionCache<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            fetch_lock: self.fetch_lock.clone(),
        }
    }
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionCache<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                entries: None,
                stale: false,
            })),
            fetch_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Force the next read to refetch.
    pub fn invalidate(&self) {
        self.state.lock().expect("cache lock poisoned").stale = true;
    }
}

impl<T: Clone> CollectionCache<T> {
    /// Read through the cache. A fresh cached list is answered as-is;
    /// otherwise `fetch` runs and fills the cache. Concurrent callers queue
    /// on the fetch lock and find the cache filled when their turn comes.
    pub async fn query<F, Fut, E>(&self, fetch: F) -> Result<Vec<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(entries) = self.fresh_entries() {
            return Ok(entries);
        }

        let _guard = self.fetch_lock.lock().await;
        if let Some(entries) = self.fresh_entries() {
            return Ok(entries);
        }

        let entries = fetch().await?;
        let mut state = self.state.lock().expect("cache lock poisoned");
        state.entries = Some(entries.clone());
        state.stale = false;
        Ok(entries)
    }

    /// Run a mutation optimistically: `patch` rewrites the cached list to its
    /// expected post-mutation shape before `op` goes to the network. On
    /// failure the pre-mutation snapshot is restored exactly, content and
    /// order. On settle (either way) the cache is marked stale so the next
    /// [`query`] refetches.
    ///
    /// [`query`]: CollectionCache::query
    pub async fn mutate<P, F, Fut, R, E>(&self, patch: P, op: F) -> Result<R, E>
    where
        P: FnOnce(&mut Vec<T>),
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let snapshot = {
            let mut state = self.state.lock().expect("cache lock poisoned");
            let snapshot = state.entries.clone();
            if let Some(entries) = state.entries.as_mut() {
                patch(entries);
            }
            snapshot
        };

        let result = op().await;

        let mut state = self.state.lock().expect("cache lock poisoned");
        if result.is_err() {
            state.entries = snapshot;
        }
        state.stale = true;
        result
    }

    /// The currently cached list, fresh or not. `None` before the first
    /// successful fetch.
    pub fn cached(&self) -> Option<Vec<T>> {
        self.state
            .lock()
            .expect("cache lock poisoned")
            .entries
            .clone()
    }

    fn fresh_entries(&self) -> Option<Vec<T>> {
        let state = self.state.lock().expect("cache lock poisoned");
        if state.stale {
            return None;
        }
        state.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn fill(cache: &CollectionCache<i32>, values: Vec<i32>) {
        cache
            .query(|| async move { Ok::<_, ()>(values) })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn query_caches_until_invalidated() {
        let cache = CollectionCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let got = cache
                .query(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(got, vec![1, 2, 3]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate();
        cache
            .query(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ()>(vec![4])
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_cache_empty() {
        let cache: CollectionCache<i32> = CollectionCache::new();
        let result = cache.query(|| async { Err::<Vec<i32>, _>("boom") }).await;
        assert!(result.is_err());
        assert_eq!(cache.cached(), None);
    }

    #[tokio::test]
    async fn successful_mutation_keeps_patch_and_goes_stale() {
        let cache = CollectionCache::new();
        fill(&cache, vec![1, 2, 3]).await;

        let result = cache
            .mutate(
                |entries| entries.retain(|v| *v != 2),
                || async { Ok::<_, ()>(()) },
            )
            .await;
        assert!(result.is_ok());
        assert_eq!(cache.cached(), Some(vec![1, 3]));

        // Settle marked the cache stale: the next query refetches
        let refetched = AtomicUsize::new(0);
        cache
            .query(|| async {
                refetched.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ()>(vec![1, 3])
            })
            .await
            .unwrap();
        assert_eq!(refetched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_mutation_restores_the_snapshot_exactly() {
        let cache = CollectionCache::new();
        fill(&cache, vec![10, 20, 30]).await;

        let result = cache
            .mutate(
                |entries| entries.retain(|v| *v != 20),
                || async { Err::<(), _>("network down") },
            )
            .await;
        assert!(result.is_err());

        // Content and order both come back
        assert_eq!(cache.cached(), Some(vec![10, 20, 30]));
    }

    #[tokio::test]
    async fn mutation_against_a_cold_cache_still_runs_the_op() {
        let cache: CollectionCache<i32> = CollectionCache::new();
        let result = cache
            .mutate(|entries| entries.push(1), || async { Ok::<_, ()>(42) })
            .await;
        assert_eq!(result, Ok(42));
        assert_eq!(cache.cached(), None);
    }

    #[tokio::test]
    async fn concurrent_cold_reads_fetch_once() {
        let cache: CollectionCache<i32> = CollectionCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .query(|| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        // Hold the fetch long enough for the others to pile up
                        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                        Ok::<_, ()>(vec![7])
                    })
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), vec![7]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
