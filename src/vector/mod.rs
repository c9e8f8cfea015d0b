//! Similarity and combination over dense `f64` vectors.
//!
//! Every function here is pure. Summation is sequential in index order so the
//! same inputs produce bit-identical results on every IEEE-754 platform.

mod error;


pub use error::{VectorError, VectorResult};

/// Fails with [`VectorError::DimensionMismatch`] unless `actual == expected`.
#[inline]
pub fn ensure_same_dim(expected: usize, actual: usize) -> VectorResult<()> {
    if expected != actual {
        return Err(VectorError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Cosine similarity in `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero norm (this includes two empty
/// vectors), so a degenerate embedding never yields `NaN`.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> VectorResult<f64> {
    ensure_same_dim(a.len(), b.len())?;

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return Ok(0.0);
    }

    let similarity = dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt());
    Ok(similarity.clamp(-1.0, 1.0))
}

/// Element-wise arithmetic mean of two vectors.
pub fn average_vectors(a: &[f64], b: &[f64]) -> VectorResult<Vec<f64>> {
    ensure_same_dim(a.len(), b.len())?;

    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x + y) / 2.0).collect())
}

/// Element-wise arithmetic mean of one or more vectors.
///
/// A single vector is returned unchanged; two vectors go through
/// [`average_vectors`] so the pairwise result is exactly `(x + y) / 2`.
pub fn mean_of(vectors: &[Vec<f64>]) -> VectorResult<Vec<f64>> {
    match vectors {
        [] => Err(VectorError::Empty),
        [only] => Ok(only.clone()),
        [a, b] => average_vectors(a, b),
        [first, rest @ ..] => {
            let dim = first.len();
            let mut sum = first.clone();
            for v in rest {
                ensure_same_dim(dim, v.len())?;
                for (acc, x) in sum.iter_mut().zip(v.iter()) {
                    *acc += x;
                }
            }
            let n = vectors.len() as f64;
            Ok(sum.into_iter().map(|x| x / n).collect())
        }
    }
}

/// Euclidean norm.
#[inline]
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
