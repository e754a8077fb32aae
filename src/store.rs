//! The store module
//! Authoritative holder of all vectors, enforcing the dimension contract

use crate::engine::{Metric, SearchHit, SimilarityEngine};
use crate::error::StoreError;
use std::sync::RwLock;

/// Record storage behind the lock: parallel key list plus a flat
/// contiguous value array, `dimension` floats per key:
/// `[k0_d0, k0_d1, ..., k1_d0, k1_d1, ...]`
struct Records {
    keys: Vec<String>,
    values: Vec<f32>,
}

/// In-memory vector store with a fixed dimension and similarity metric.
///
/// All vectors live for the lifetime of the store instance; there is no
/// disk persistence. Methods take `&self` and synchronize internally, so a
/// store can be shared across threads behind an `Arc` (or `web::Data`)
/// without extra locking: mutations take the write lock, searches the read
/// lock, and a search always observes a consistent snapshot.
pub struct VectorStore {
    dimension: usize,
    engine: SimilarityEngine,
    records: RwLock<Records>,
}

impl VectorStore {
    /// Creates an empty store accepting vectors of exactly `dimension`
    /// components, ranked under `metric`.
    ///
    /// Both are fixed for the lifetime of the instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use simstore::{Metric, VectorStore};
    ///
    /// let store = VectorStore::new(128, Metric::Cosine);
    /// assert_eq!(store.size(), 0);
    /// assert_eq!(store.dimension(), 128);
    /// ```
    pub fn new(dimension: usize, metric: Metric) -> VectorStore {
        VectorStore {
            dimension,
            engine: SimilarityEngine::new(metric),
            records: RwLock::new(Records {
                keys: Vec::new(),
                values: Vec::new(),
            }),
        }
    }

    /// The fixed vector dimension of this store.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The similarity metric this store ranks with.
    pub fn metric(&self) -> Metric {
        self.engine.metric()
    }

    /// Inserts or replaces the vector stored under `key`.
    ///
    /// Re-inserting an existing key overwrites its values (last write
    /// wins); there is no versioning. Validation happens before any
    /// mutation, so a rejected insert leaves the store untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::DimensionMismatch`] if `values.len()` differs from the
    /// store dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use simstore::{Metric, VectorStore};
    ///
    /// let store = VectorStore::new(3, Metric::Cosine);
    ///
    /// store.insert("vec1".to_string(), vec![1.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(store.size(), 1);
    ///
    /// // Same key again: overwrite, not a second record
    /// store.insert("vec1".to_string(), vec![0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(store.size(), 1);
    ///
    /// // Wrong length is rejected before anything changes
    /// assert!(store.insert("vec2".to_string(), vec![1.0, 2.0]).is_err());
    /// assert_eq!(store.size(), 1);
    /// ```
    pub fn insert(&self, key: String, values: Vec<f32>) -> Result<(), StoreError> {
        if values.len() != self.dimension {
            return Err(StoreError::DimensionMismatch {
                expected: self.dimension,
                actual: values.len(),
            });
        }

        let mut records = self.records.write().expect("store lock poisoned");

        if let Some(index) = records.keys.iter().position(|k| k == &key) {
            let start = index * self.dimension;
            records.values[start..start + self.dimension].copy_from_slice(&values);
            tracing::debug!(%key, "replaced vector");
        } else {
            records.keys.push(key.clone());
            records.values.extend(values);
            tracing::debug!(%key, "inserted vector");
        }

        Ok(())
    }

    /// Empties the store unconditionally.
    ///
    /// Idempotent and infallible; the store is immediately usable again,
    /// and no record from before the clear can appear in a later search.
    pub fn remove_all(&self) {
        let mut records = self.records.write().expect("store lock poisoned");
        records.keys.clear();
        records.values.clear();
        tracing::debug!("cleared store");
    }

    /// Number of records currently stored.
    pub fn size(&self) -> usize {
        self.records.read().expect("store lock poisoned").keys.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Searches for the `k` records most similar to `query`.
    ///
    /// Ranking is delegated to the [`SimilarityEngine`]: descending score,
    /// ties broken by ascending key. An empty store yields an empty result,
    /// and `k` larger than the record count yields every record ranked;
    /// neither is an error.
    ///
    /// # Errors
    ///
    /// [`StoreError::DimensionMismatch`] if `query.len()` differs from the
    /// store dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use simstore::{Metric, VectorStore};
    ///
    /// let store = VectorStore::new(3, Metric::Cosine);
    /// store.insert("vec1".to_string(), vec![1.0, 0.0, 0.0]).unwrap();
    /// store.insert("vec2".to_string(), vec![0.0, 1.0, 0.0]).unwrap();
    /// store.insert("vec3".to_string(), vec![0.7, 0.7, 0.0]).unwrap();
    ///
    /// let hits = store.search(&[1.0, 0.0, 0.0], 2).unwrap();
    /// assert_eq!(hits.len(), 2);
    /// assert_eq!(hits[0].key, "vec1");
    /// assert!((hits[0].score - 1.0).abs() < 1e-5);
    /// ```
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, StoreError> {
        if query.len() != self.dimension {
            return Err(StoreError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let records = self.records.read().expect("store lock poisoned");
        let snapshot = records.keys.iter().enumerate().map(|(i, key)| {
            let start = i * self.dimension;
            (key.as_str(), &records.values[start..start + self.dimension])
        });

        let hits = self.engine.search(snapshot, query, k);
        tracing::debug!(k, hits = hits.len(), "search completed");

        Ok(hits)
    }
}
