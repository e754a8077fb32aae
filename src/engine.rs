//! The similarity engine
//! Scores and ranks stored vectors against a query, best first

use crate::vector::{cosine_similarity, dot, euclidean_distance};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Similarity metric, fixed per store instance at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Cosine similarity in [-1, 1]; zero-norm operands score 0.
    #[default]
    Cosine,
    /// Inner product, unbounded.
    Dot,
    /// Euclidean distance, negated so that higher score = more similar.
    Euclidean,
}

impl Metric {
    /// Score of `candidate` against `query` under this metric.
    /// Higher is always more similar.
    pub fn score(&self, query: &[f32], candidate: &[f32]) -> f32 {
        match self {
            Metric::Cosine => cosine_similarity(query, candidate),
            Metric::Dot => dot(query, candidate),
            Metric::Euclidean => -euclidean_distance(query, candidate),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "dot" | "ip" => Ok(Metric::Dot),
            "l2" | "euclidean" => Ok(Metric::Euclidean),
            other => Err(format!("Unknown metric: {}. Available: cosine, dot, l2", other)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Dot => write!(f, "dot"),
            Metric::Euclidean => write!(f, "l2"),
        }
    }
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub key: String,
    pub score: f32,
}

/// Stateless ranking component. A search is a pure function of
/// (store snapshot, query, k); the engine holds only its configured metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine {
    metric: Metric,
}

impl SimilarityEngine {
    pub fn new(metric: Metric) -> SimilarityEngine {
        SimilarityEngine { metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Ranks every record against the query and keeps the best `k`.
    ///
    /// Results are ordered by descending score; records with identical
    /// scores are ordered by ascending key so output is deterministic.
    /// Fewer than `k` records means all of them come back ranked.
    pub fn search<'a, I>(&self, records: I, query: &[f32], k: usize) -> Vec<SearchHit>
    where
        I: Iterator<Item = (&'a str, &'a [f32])>,
    {
        let mut hits: Vec<SearchHit> = records
            .map(|(key, values)| SearchHit {
                key: key.to_string(),
                score: self.metric.score(query, values),
            })
            .collect();

        hits.sort_unstable_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key))
        });
        hits.truncate(k);

        hits
    }
}
