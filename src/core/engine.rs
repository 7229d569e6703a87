use crate::core::courses;
use crate::core::weights;
use crate::domain::model::{
    CriterionWeights, FieldInputs, NormalizedInputs, RawInputs, Recommendation, ScoredField,
};
use std::cmp::Ordering;

/// Lower bound (inclusive) of each grade band and its membership value.
const GRADE_BANDS: [(u8, f64); 4] = [(80, 1.0), (69, 0.8), (57, 0.6), (45, 0.4)];
const GRADE_FLOOR: f64 = 0.2;

/// Scores are compared, flagged and exported at this many decimal places.
pub const SCORE_DECIMALS: i32 = 4;

pub fn normalize_rating(raw: u8) -> f64 {
    f64::from(raw) / 10.0
}

/// Grade bands follow letter-grade semantics rather than a linear scale.
pub fn grade_score(grade: u8) -> f64 {
    GRADE_BANDS
        .iter()
        .find(|(lower, _)| grade >= *lower)
        .map(|(_, score)| *score)
        .unwrap_or(GRADE_FLOOR)
}

pub fn normalize(inputs: &RawInputs) -> NormalizedInputs {
    NormalizedInputs {
        interest: normalize_rating(inputs.interest),
        grade: grade_score(inputs.grade),
        career_fit: normalize_rating(inputs.career_fit),
    }
}

pub fn score(normalized: &NormalizedInputs, weights: &CriterionWeights) -> f64 {
    weights.interest * normalized.interest
        + weights.grade * normalized.grade
        + weights.career * normalized.career_fit
}

pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}

fn score_ticks(score: f64) -> i64 {
    (score * 10f64.powi(SCORE_DECIMALS)).round() as i64
}

/// Composite tie-break key: rounded score, raw grade, normalized career fit,
/// raw interest, then display name.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    score_ticks: i64,
    grade: u8,
    career_fit: f64,
    interest: u8,
    name: &'static str,
}

impl RankKey {
    fn of(scored: &ScoredField) -> Self {
        Self {
            score_ticks: score_ticks(scored.score),
            grade: scored.inputs.grade,
            career_fit: scored.normalized.career_fit,
            interest: scored.inputs.interest,
            name: scored.field.display_name(),
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score_ticks
            .cmp(&other.score_ticks)
            .then_with(|| self.grade.cmp(&other.grade))
            .then_with(|| self.career_fit.total_cmp(&other.career_fit))
            .then_with(|| self.interest.cmp(&other.interest))
            .then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

/// Sorts strongest first. The display name makes the order strict.
pub fn rank(mut scored: Vec<ScoredField>) -> Vec<ScoredField> {
    scored.sort_by(|a, b| RankKey::of(b).cmp(&RankKey::of(a)));
    scored
}

/// True only when rounded score and every raw input agree across all fields.
pub fn is_degenerate_tie(scored: &[ScoredField]) -> bool {
    let Some(first) = scored.first() else {
        return false;
    };
    scored.iter().all(|other| {
        score_ticks(other.score) == score_ticks(first.score)
            && other.inputs.grade == first.inputs.grade
            && other.inputs.career_fit == first.inputs.career_fit
            && other.inputs.interest == first.inputs.interest
    })
}

pub fn recommend(inputs: &FieldInputs, weights: &CriterionWeights) -> Recommendation {
    let scored = inputs
        .iter()
        .map(|(field, raw)| {
            let normalized = normalize(raw);
            ScoredField {
                field,
                inputs: *raw,
                normalized,
                score: score(&normalized, weights),
            }
        })
        .collect::<Vec<_>>();

    let all_tied = is_degenerate_tie(&scored);
    let ranking = rank(scored);

    let major = ranking[0].field;
    let minor = ranking[1].field;
    let minor_course = courses::minor_course(major, minor);

    Recommendation {
        ranking,
        major,
        minor,
        minor_course,
        all_tied,
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: CriterionWeights,
}

impl RecommendationEngine {
    pub fn new(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CriterionWeights {
        &self.weights
    }

    pub fn recommend(&self, inputs: &FieldInputs) -> Recommendation {
        let recommendation = recommend(inputs, &self.weights);
        for entry in &recommendation.ranking {
            tracing::debug!(
                "{}: score {:.4} (interest {}, grade {}, career {})",
                entry.field,
                entry.score,
                entry.inputs.interest,
                entry.inputs.grade,
                entry.inputs.career_fit
            );
        }
        recommendation
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(*weights::ahp_weights())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Course, Field};
    use proptest::prelude::*;

    fn rank_position(recommendation: &Recommendation, field: Field) -> usize {
        recommendation
            .ranking
            .iter()
            .position(|entry| entry.field == field)
            .expect("every field is ranked")
    }

    fn order(recommendation: &Recommendation) -> Vec<Field> {
        recommendation.ranking.iter().map(|s| s.field).collect()
    }

    fn sample_inputs() -> FieldInputs {
        FieldInputs::new(
            RawInputs::new(9, 90, 8),
            RawInputs::new(3, 60, 4),
            RawInputs::new(5, 70, 5),
        )
    }

    #[test]
    fn test_grade_band_boundaries() {
        assert_eq!(grade_score(100), 1.0);
        assert_eq!(grade_score(80), 1.0);
        assert_eq!(grade_score(79), 0.8);
        assert_eq!(grade_score(69), 0.8);
        assert_eq!(grade_score(68), 0.6);
        assert_eq!(grade_score(57), 0.6);
        assert_eq!(grade_score(56), 0.4);
        assert_eq!(grade_score(45), 0.4);
        assert_eq!(grade_score(44), 0.2);
        assert_eq!(grade_score(0), 0.2);
    }

    #[test]
    fn test_normalize_rating() {
        assert_eq!(normalize_rating(0), 0.0);
        assert_eq!(normalize_rating(5), 0.5);
        assert_eq!(normalize_rating(10), 1.0);
    }

    #[test]
    fn test_sample_scenario() {
        let recommendation = recommend(&sample_inputs(), &weights::derive_weights());

        let order: Vec<Field> = recommendation.ranking.iter().map(|s| s.field).collect();
        assert_eq!(
            order,
            vec![
                Field::ArtificialIntelligence,
                Field::NetworkComputing,
                Field::InformationSystems
            ]
        );
        assert_eq!(recommendation.major, Field::ArtificialIntelligence);
        assert_eq!(recommendation.minor, Field::NetworkComputing);
        assert_eq!(recommendation.minor_course, Course::NetworkSecurity);
        assert!(!recommendation.all_tied);

        assert_eq!(round_score(recommendation.ranking[0].score), 0.9126);
        assert_eq!(round_score(recommendation.ranking[1].score), 0.5660);
        assert_eq!(round_score(recommendation.ranking[2].score), 0.3753);
    }

    #[test]
    fn test_full_tie_falls_back_to_display_names() {
        let inputs = FieldInputs::uniform(RawInputs::new(5, 80, 5));
        let recommendation = recommend(&inputs, &weights::derive_weights());

        assert!(recommendation.all_tied);
        let order: Vec<Field> = recommendation.ranking.iter().map(|s| s.field).collect();
        assert_eq!(
            order,
            vec![
                Field::InformationSystems,
                Field::NetworkComputing,
                Field::ArtificialIntelligence
            ]
        );
        assert_eq!(recommendation.minor_course, Course::DistributedSystems);
    }

    #[test]
    fn test_grade_breaks_score_tie() {
        // 85 and 95 share a band, so scores tie and the raw grade decides.
        let inputs = FieldInputs::new(
            RawInputs::new(5, 85, 5),
            RawInputs::new(5, 95, 5),
            RawInputs::new(5, 90, 5),
        );
        let recommendation = recommend(&inputs, &weights::derive_weights());

        assert!(!recommendation.all_tied);
        assert_eq!(recommendation.major, Field::InformationSystems);
        assert_eq!(recommendation.minor, Field::NetworkComputing);
        assert_eq!(recommendation.minor_course, Course::DistributedSystems);
    }

    #[test]
    fn test_score_tie_with_differing_inputs_is_not_degenerate() {
        let w = CriterionWeights {
            interest: 0.5,
            grade: 0.0,
            career: 0.5,
        };
        // Interest and career swap, giving identical scores.
        let inputs = FieldInputs::new(
            RawInputs::new(6, 80, 4),
            RawInputs::new(4, 80, 6),
            RawInputs::new(5, 80, 5),
        );
        let recommendation = recommend(&inputs, &w);

        assert!(!recommendation.all_tied);
        let order: Vec<Field> = recommendation.ranking.iter().map(|s| s.field).collect();
        assert_eq!(
            order,
            vec![
                Field::InformationSystems,
                Field::NetworkComputing,
                Field::ArtificialIntelligence
            ]
        );
    }

    #[test]
    fn test_grade_outranks_career_fit_in_tie_break() {
        let w = CriterionWeights {
            interest: 0.0,
            grade: 0.0,
            career: 0.0,
        };
        // Career fit runs opposite to grade, so only grade-before-career gives this order.
        let inputs = FieldInputs::new(
            RawInputs::new(5, 90, 2),
            RawInputs::new(5, 80, 9),
            RawInputs::new(5, 70, 10),
        );
        let recommendation = recommend(&inputs, &w);

        assert!(!recommendation.all_tied);
        assert_eq!(
            order(&recommendation),
            vec![
                Field::ArtificialIntelligence,
                Field::InformationSystems,
                Field::NetworkComputing
            ]
        );
        assert_eq!(recommendation.minor_course, Course::DecisionSupportSystems);
    }

    #[test]
    fn test_scores_equal_at_four_decimals_fall_through_to_grade() {
        let w = CriterionWeights {
            interest: 0.500001,
            grade: 0.0,
            career: 0.499999,
        };
        // Raw scores 0.500001 and 0.499999 both round to 0.5000.
        let inputs = FieldInputs::new(
            RawInputs::new(10, 50, 0),
            RawInputs::new(0, 90, 10),
            RawInputs::new(0, 0, 0),
        );
        let recommendation = recommend(&inputs, &w);

        assert!(recommendation.ranking[1].score > recommendation.ranking[0].score);
        assert_eq!(
            order(&recommendation),
            vec![
                Field::InformationSystems,
                Field::ArtificialIntelligence,
                Field::NetworkComputing
            ]
        );
        assert_eq!(recommendation.minor_course, Course::GraphicsComputing);
    }

    #[test]
    fn test_interest_breaks_tie_after_career() {
        let w = CriterionWeights {
            interest: 0.0,
            grade: 1.0,
            career: 0.0,
        };
        let inputs = FieldInputs::new(
            RawInputs::new(7, 80, 3),
            RawInputs::new(2, 80, 3),
            RawInputs::new(9, 80, 3),
        );
        let recommendation = recommend(&inputs, &w);
        assert_eq!(recommendation.major, Field::NetworkComputing);
        assert_eq!(recommendation.minor, Field::ArtificialIntelligence);
        assert_eq!(recommendation.minor_course, Course::Robotics);
    }

    #[test]
    fn test_recommend_is_pure() {
        let engine = RecommendationEngine::default();
        let first = engine.recommend(&sample_inputs());
        let second = engine.recommend(&sample_inputs());
        assert_eq!(first, second);
    }

    fn raw_inputs() -> impl Strategy<Value = RawInputs> {
        (0u8..=10, 0u8..=100, 0u8..=10).prop_map(|(i, g, c)| RawInputs::new(i, g, c))
    }

    fn field() -> impl Strategy<Value = Field> {
        prop_oneof![
            Just(Field::ArtificialIntelligence),
            Just(Field::InformationSystems),
            Just(Field::NetworkComputing),
        ]
    }

    proptest! {
        #[test]
        fn prop_scores_stay_in_unit_interval(inputs in raw_inputs()) {
            let s = score(&normalize(&inputs), &weights::derive_weights());
            prop_assert!((0.0..=1.0 + 1e-12).contains(&s));
        }

        #[test]
        fn prop_raising_an_input_never_hurts(
            ai in raw_inputs(),
            si in raw_inputs(),
            jaringan in raw_inputs(),
            target in field(),
            criterion in 0usize..3,
        ) {
            let weights = weights::derive_weights();
            let before = FieldInputs::new(ai, si, jaringan);
            let mut raised = *before.get(target);
            match criterion {
                0 => raised.interest = (raised.interest + 1).min(10),
                1 => raised.grade = (raised.grade + 1).min(100),
                _ => raised.career_fit = (raised.career_fit + 1).min(10),
            }
            let mut after = before;
            after.set(target, raised);

            let old = recommend(&before, &weights);
            let new = recommend(&after, &weights);
            let old_score = old.ranking.iter().find(|s| s.field == target).map(|s| s.score);
            let new_score = new.ranking.iter().find(|s| s.field == target).map(|s| s.score);

            prop_assert!(new_score >= old_score);
            prop_assert!(rank_position(&new, target) <= rank_position(&old, target));
        }

        #[test]
        fn prop_ranking_is_a_permutation(ai in raw_inputs(), si in raw_inputs(), jaringan in raw_inputs()) {
            let recommendation = recommend(&FieldInputs::new(ai, si, jaringan), &weights::derive_weights());
            let mut fields: Vec<Field> = recommendation.ranking.iter().map(|s| s.field).collect();
            prop_assert_ne!(recommendation.major, recommendation.minor);
            fields.sort();
            prop_assert_eq!(fields, Field::ALL.to_vec());
        }
    }
}
