//! # simstore - An In-Memory Vector Similarity Store
//!
//! simstore holds fixed-dimension f32 vectors keyed by caller-supplied
//! strings and answers k-nearest-neighbor queries. The dimension and the
//! similarity metric are fixed per store instance at construction; vectors
//! are stored raw and scored at query time, so zero-norm vectors are valid
//! input (they score 0 under cosine). Results are ranked best-first with a
//! deterministic ascending-key tie-break.
//!
//! ## Example
//!
//! ```
//! use simstore::{Metric, VectorStore};
//!
//! let store = VectorStore::new(3, Metric::Cosine);
//!
//! // Insert vectors
//! store.insert("vec1".to_string(), vec![1.0, 0.0, 0.0]).unwrap();
//! store.insert("vec2".to_string(), vec![0.0, 1.0, 0.0]).unwrap();
//! store.insert("vec3".to_string(), vec![0.7, 0.7, 0.0]).unwrap();
//!
//! // Search for similar vectors
//! let hits = store.search(&[1.0, 0.0, 0.0], 2).unwrap();
//! assert_eq!(hits[0].key, "vec1"); // Most similar vector
//! ```

pub mod engine;
pub mod error;
pub mod server;
pub mod vector;
mod store;

pub use engine::{Metric, SearchHit, SimilarityEngine};
pub use error::StoreError;
pub use store::VectorStore;
