//! Time-based memoization for outbound API calls.
//!
//! Each endpoint of the Riot client owns one [`TtlCache`] configured with its
//! own expiry and capacity. Entries are evicted in insertion order once the
//! capacity is exceeded, so a hot key inserted early still goes first.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::trace;

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

struct Inner<K, V> {
    entries: HashMap<K, Entry<V>>,
    order: VecDeque<K>,
}

pub struct TtlCache<K, V> {
    name: &'static str,
    /// `None` keeps entries fresh forever.
    ttl: Option<Duration>,
    max_size: usize,
    inner: Mutex<Inner<K, V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(name: &'static str, ttl: Option<Duration>, max_size: usize) -> Self {
        Self {
            name,
            ttl,
            max_size,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Return the cached value for `key`, or run `compute` and store its
    /// result. Failed computations are returned as-is and never stored.
    ///
    /// The lock is released while `compute` runs, so two concurrent misses on
    /// the same key both invoke it and the last write wins.
    pub async fn get_or_compute<F, Fut, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        {
            let inner = self.inner.lock().await;
            if let Some(entry) = inner.entries.get(&key) {
                if self.is_fresh(entry) {
                    trace!(cache = self.name, ?key, "cache hit");
                    return Ok(entry.value.clone());
                }
            }
        }

        let value = compute().await?;

        let mut inner = self.inner.lock().await;
        trace!(cache = self.name, ?key, "caching result");
        let entry = Entry {
            value: value.clone(),
            stored_at: Instant::now(),
        };
        // Overwriting a stale entry keeps its original insertion position.
        if inner.entries.insert(key.clone(), entry).is_none() {
            inner.order.push_back(key);
        }
        if inner.entries.len() > self.max_size {
            if let Some(oldest) = inner.order.pop_front() {
                trace!(cache = self.name, key = ?oldest, "capacity exceeded, evicting oldest entry");
                inner.entries.remove(&oldest);
            }
        }
        Ok(value)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    fn is_fresh(&self, entry: &Entry<V>) -> bool {
        match self.ttl {
            None => true,
            Some(ttl) => entry.stored_at.elapsed() < ttl,
        }
    }
}
