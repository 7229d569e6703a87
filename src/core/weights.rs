//! AHP criterion weights.
//!
//! The weights come from a fixed pairwise comparison matrix over
//! (Interest, Grade, Career), reduced with the column-normalize and
//! row-average approximation of the principal eigenvector.

use crate::domain::model::CriterionWeights;
use std::sync::OnceLock;

pub type PairwiseMatrix = [[f64; 3]; 3];

/// Row `i`, column `j`: how much more important criterion `i` is than `j`.
pub const COMPARISON_MATRIX: PairwiseMatrix = [
    [1.0, 6.0, 5.0],
    [1.0 / 6.0, 1.0, 4.0],
    [1.0 / 5.0, 1.0 / 4.0, 1.0],
];

/// Saaty's random consistency index for n = 3.
const RANDOM_INDEX_3: f64 = 0.58;

pub fn derive_weights() -> CriterionWeights {
    derive_from_matrix(&COMPARISON_MATRIX)
}

/// Weights for the fixed matrix, computed on first use.
pub fn ahp_weights() -> &'static CriterionWeights {
    static WEIGHTS: OnceLock<CriterionWeights> = OnceLock::new();
    WEIGHTS.get_or_init(|| {
        let weights = derive_weights();
        tracing::debug!(
            "AHP weights - interest: {:.4}, grade: {:.4}, career: {:.4} (CR {:.3})",
            weights.interest,
            weights.grade,
            weights.career,
            consistency_ratio(&COMPARISON_MATRIX, &weights)
        );
        weights
    })
}

pub fn derive_from_matrix(matrix: &PairwiseMatrix) -> CriterionWeights {
    let mut column_sums = [0.0; 3];
    for row in matrix {
        for (sum, value) in column_sums.iter_mut().zip(row) {
            *sum += value;
        }
    }

    let mut row_means = [0.0; 3];
    for (mean, row) in row_means.iter_mut().zip(matrix) {
        let normalized: f64 = row
            .iter()
            .zip(&column_sums)
            .map(|(value, sum)| value / sum)
            .sum();
        *mean = normalized / 3.0;
    }

    CriterionWeights {
        interest: row_means[0],
        grade: row_means[1],
        career: row_means[2],
    }
}

/// Saaty consistency ratio of `matrix` against the weights derived from it.
/// Below 0.1 is conventionally considered consistent.
pub fn consistency_ratio(matrix: &PairwiseMatrix, weights: &CriterionWeights) -> f64 {
    let w = [weights.interest, weights.grade, weights.career];
    let lambda_max = matrix
        .iter()
        .zip(&w)
        .map(|(row, wi)| {
            let weighted: f64 = row.iter().zip(&w).map(|(a, wj)| a * wj).sum();
            weighted / wi
        })
        .sum::<f64>()
        / 3.0;

    let consistency_index = (lambda_max - 3.0) / 2.0;
    consistency_index / RANDOM_INDEX_3
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_matrix_weights() {
        let weights = derive_weights();
        assert!((weights.interest - 0.686431).abs() < 1e-5);
        assert!((weights.grade - 0.219961).abs() < 1e-5);
        assert!((weights.career - 0.093608).abs() < 1e-5);
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cached_weights_match_derivation() {
        assert_eq!(*ahp_weights(), derive_weights());
    }

    #[test]
    fn test_consistent_matrix_has_zero_ratio() {
        // Built from weights (0.6, 0.3, 0.1): a_ij = w_i / w_j.
        let matrix = [
            [1.0, 2.0, 6.0],
            [0.5, 1.0, 3.0],
            [1.0 / 6.0, 1.0 / 3.0, 1.0],
        ];
        let weights = derive_from_matrix(&matrix);
        assert!((weights.interest - 0.6).abs() < 1e-9);
        assert!((weights.grade - 0.3).abs() < 1e-9);
        assert!((weights.career - 0.1).abs() < 1e-9);
        assert!(consistency_ratio(&matrix, &weights).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_matrix_consistency_ratio() {
        let cr = consistency_ratio(&COMPARISON_MATRIX, &derive_weights());
        assert!(cr.is_finite());
        assert!(cr > 0.1 && cr < 0.4, "unexpected CR {}", cr);
    }

    proptest! {
        #[test]
        fn prop_scaled_matrix_weights_sum_to_one(scale in 0.01f64..100.0) {
            let mut matrix = COMPARISON_MATRIX;
            for row in matrix.iter_mut() {
                for value in row.iter_mut() {
                    *value *= scale;
                }
            }
            let weights = derive_from_matrix(&matrix);
            prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
            prop_assert!(weights.interest > 0.0);
            prop_assert!(weights.grade > 0.0);
            prop_assert!(weights.career > 0.0);

            let reference = derive_weights();
            prop_assert!((weights.interest - reference.interest).abs() < 1e-9);
            prop_assert!((weights.grade - reference.grade).abs() < 1e-9);
            prop_assert!((weights.career - reference.career).abs() < 1e-9);
        }
    }
}
