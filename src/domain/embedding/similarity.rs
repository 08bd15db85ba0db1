//! Vector similarity

use crate::domain::DomainError;

/// Cosine similarity between two vectors of equal length.
///
/// Returns `0.0` when either vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::dimension_mismatch(a.len(), b.len()));
    }

    let (dot, squares_a, squares_b) = a
        .iter()
        .zip(b)
        .fold((0.0_f64, 0.0_f64, 0.0_f64), |(dot, sa, sb), (x, y)| {
            (dot + x * y, sa + x * x, sb + y * y)
        });

    let denominator = squares_a.sqrt() * squares_b.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = [1.0, 2.0, 3.0];

        let similarity = cosine_similarity(&v, &v).unwrap();

        assert!((similarity - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();

        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let similarity = cosine_similarity(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]).unwrap();

        assert!((similarity + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_similar() {
        let similarity = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, 0.9, 0.1]).unwrap();

        assert!(similarity > 0.9 && similarity < 1.0);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_similarity_empty() {
        assert_eq!(cosine_similarity(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_similarity_different_lengths() {
        let err = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();

        assert!(matches!(
            err,
            DomainError::DimensionMismatch { left: 2, right: 3 }
        ));
    }
}
