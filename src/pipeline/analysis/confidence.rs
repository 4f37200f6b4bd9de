//! Confidence aggregation across analyzer outputs.

use crate::models::{ConfidenceProfile, InstructionalProfile, StandardsAlignment, Topic};

/// Mean assigned to a dimension with no entries to average.
const EMPTY_DIMENSION_MEAN: f64 = 0.2;

/// Combine component confidences into the per-record summary. The overall
/// score is the rounded mean of the three (already rounded) dimension
/// means — it is never assigned independently.
pub fn compute_confidence_profile(
    topics: &[Topic],
    standards: &[StandardsAlignment],
    instructional: &InstructionalProfile,
) -> ConfidenceProfile {
    let topics_mean = round2(if topics.is_empty() {
        EMPTY_DIMENSION_MEAN
    } else {
        average(topics.iter().map(|t| t.confidence))
    });
    let standards_mean = round2(if standards.is_empty() {
        EMPTY_DIMENSION_MEAN
    } else {
        average(standards.iter().map(|s| s.alignment_confidence))
    });
    let instructional_mean = round2(average(
        [
            instructional.age_range.confidence,
            instructional.pedagogy_type.confidence,
            instructional.bloom_level.confidence,
            instructional.primary_skill.confidence,
        ]
        .into_iter(),
    ));

    ConfidenceProfile {
        overall: round2(average(
            [topics_mean, standards_mean, instructional_mean].into_iter(),
        )),
        topics_mean,
        standards_mean,
        instructional_mean,
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::super::instructional::infer_instructional_profile;
    use super::super::standards::map_standards;
    use super::super::tokenizer::tokenize;
    use super::super::topics::extract_topics;
    use super::*;

    fn profile_for(text: &str) -> ConfidenceProfile {
        let topics = extract_topics(&tokenize(text));
        let standards = map_standards(&topics);
        let instructional = infer_instructional_profile(text, &topics);
        compute_confidence_profile(&topics, &standards, &instructional)
    }

    #[test]
    fn overall_is_mean_of_dimension_means() {
        for text in [
            "",
            "Solve the equation for x. Practice problems below.",
            "Fractions and democracy, discussed in groups.",
        ] {
            let p = profile_for(text);
            let expected =
                round2((p.topics_mean + p.standards_mean + p.instructional_mean) / 3.0);
            assert!(
                (p.overall - expected).abs() < 1e-9,
                "overall {} != {} for {text:?}",
                p.overall,
                expected
            );
        }
    }

    #[test]
    fn empty_standards_use_floor_mean() {
        let p = profile_for("Plain prose without mapped topics.");
        assert!((p.standards_mean - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_page_profile_is_low_but_in_range() {
        let p = profile_for("");
        assert!((p.topics_mean - 0.3).abs() < f64::EPSILON);
        assert!((p.standards_mean - 0.2).abs() < f64::EPSILON);
        assert!((p.instructional_mean - 0.35).abs() < f64::EPSILON);
        assert!((p.overall - 0.28).abs() < f64::EPSILON);
    }

    #[test]
    fn all_values_within_unit_interval() {
        for text in ["", "quiz quiz quiz", "equation fractions biology chemistry"] {
            let p = profile_for(text);
            for v in [p.overall, p.topics_mean, p.standards_mean, p.instructional_mean] {
                assert!((0.0..=1.0).contains(&v), "{v} out of range for {text:?}");
            }
        }
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(0.85 / 3.0), 0.28);
        assert_eq!(round2(0.666), 0.67);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
