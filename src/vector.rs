//! This is the vector math module
//! Provide dot product, L2 norm and the similarity/distance kernels

/// Dot Product
/// dot = sum(a[i] * b[i]) for i = 0..a.len()
/// Callers guarantee both slices have the same length
pub fn dot(left: &[f32], right: &[f32]) -> f32 {
    debug_assert_eq!(left.len(), right.len());

    left.iter()
        .zip(right.iter())
        .map(|(x, y)| x * y)
        .sum()
}

/// L2 Norm
/// norm = sqrt(sum(v[i]^2))
pub fn norm(vector: &[f32]) -> f32 {
    vector.iter()
        .map(|x| x * x)
        .sum::<f32>()
        .sqrt()
}

/// Cosine similarity
/// cos = dot(a, b) / (||a|| * ||b||), in [-1, 1]
/// A zero-norm operand yields 0.0 so the operation stays total
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> f32 {
    let denom = norm(left) * norm(right);
    if denom == 0.0 {
        return 0.0;
    }

    dot(left, right) / denom
}

/// Euclidean (L2) distance
/// dist = sqrt(sum((a[i] - b[i])^2))
pub fn euclidean_distance(left: &[f32], right: &[f32]) -> f32 {
    debug_assert_eq!(left.len(), right.len());

    left.iter()
        .zip(right.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod vector_test {
    use super::*;

    // ========== Dot Product Tests ==========

    #[test]
    fn test_dot_basic() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        // Expected: 1*4 + 2*5 + 3*6 = 4 + 10 + 18 = 32
        assert!((dot(&a, &b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_dot_orthogonal() {
        // Orthogonal vectors should have dot product = 0
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((dot(&a, &b) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_dot_zero_vector() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!((dot(&a, &b) - 0.0).abs() < 1e-6);
    }

    // ========== Norm Tests ==========

    #[test]
    fn test_norm_basic() {
        // ||[3,4]|| = sqrt(9+16) = 5
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_norm_zero_vector() {
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_norm_single_element() {
        assert!((norm(&[-5.0]) - 5.0).abs() < 1e-6);
    }

    // ========== Cosine Similarity Tests ==========

    #[test]
    fn test_cosine_identical_direction() {
        // Same direction, different magnitude: similarity = 1
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((cosine_similarity(&a, &b) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_direction() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_norm_is_total() {
        // Zero vector against anything scores 0 instead of dividing by zero
        let zero = vec![0.0, 0.0, 0.0];
        let other = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&other, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_partial_overlap() {
        // [1,0,0] vs [0.7,0.7,0]: cos = 0.7 / (1 * sqrt(0.98)) ~= 0.707
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.7, 0.7, 0.0];
        assert!((cosine_similarity(&a, &b) - 0.707).abs() < 0.001);
    }

    // ========== Euclidean Distance Tests ==========

    #[test]
    fn test_euclidean_basic() {
        // dist([0,0], [3,4]) = 5
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_self_is_zero() {
        let a = vec![1.5, -2.5, 3.0];
        assert!((euclidean_distance(&a, &a) - 0.0).abs() < 1e-6);
    }
}
