use super::*;
use std::sync::Arc;

use crate::corpus::CandidateRecord;
use crate::ranking::ScoredCandidate;

fn scored(id: u64, score: f64, confidence: u8, record: CandidateRecord) -> ScoredCandidate {
    let mut record = record;
    record.id = id;
    ScoredCandidate {
        candidate: Arc::new(record),
        score,
        confidence,
    }
}

#[test]
fn test_parse_declared_range() {
    assert_eq!(
        ExperienceSpan::parse_declared("4-6 years"),
        Some(ExperienceSpan::new(4, 6))
    );
    assert_eq!(
        ExperienceSpan::parse_declared("around 3 - 5 Yrs in retail"),
        Some(ExperienceSpan::new(3, 5))
    );
}

#[test]
fn test_parse_declared_single() {
    assert_eq!(
        ExperienceSpan::parse_declared("I have worked 2 years at a bank"),
        Some(ExperienceSpan::exact(2))
    );
    assert_eq!(
        ExperienceSpan::parse_declared("1yr"),
        Some(ExperienceSpan::exact(1))
    );
}

#[test]
fn test_parse_declared_first_figure_wins() {
    assert_eq!(
        ExperienceSpan::parse_declared("3 years in sales, 10 years total"),
        Some(ExperienceSpan::exact(3))
    );
}

#[test]
fn test_parse_declared_none() {
    assert_eq!(ExperienceSpan::parse_declared("fresher"), None);
    assert_eq!(ExperienceSpan::parse_declared("six years"), None);
    assert_eq!(ExperienceSpan::parse_declared(""), None);
}

#[test]
fn test_four_to_six_against_constraints() {
    let span = ExperienceSpan::new(4, 6);

    assert!(ExperienceConstraint::Range { min: 2, max: 5 }.admits(span));
    assert!(ExperienceConstraint::Minimum(3).admits(span));
    assert!(!ExperienceConstraint::Exact(7).admits(span));
}

#[test]
fn test_boundaries_are_inclusive() {
    assert!(ExperienceConstraint::Minimum(4).admits(ExperienceSpan::new(4, 6)));
    assert!(!ExperienceConstraint::Minimum(5).admits(ExperienceSpan::new(4, 6)));

    assert!(ExperienceConstraint::Exact(6).admits(ExperienceSpan::new(4, 6)));
    assert!(ExperienceConstraint::Exact(4).admits(ExperienceSpan::new(4, 6)));
    assert!(ExperienceConstraint::Exact(5).admits(ExperienceSpan::new(4, 6)));
    assert!(ExperienceConstraint::Exact(3).admits(ExperienceSpan::exact(3)));

    assert!(ExperienceConstraint::Range { min: 6, max: 9 }.admits(ExperienceSpan::new(4, 6)));
    assert!(ExperienceConstraint::Range { min: 1, max: 4 }.admits(ExperienceSpan::new(4, 6)));
    assert!(!ExperienceConstraint::Range { min: 7, max: 9 }.admits(ExperienceSpan::new(4, 6)));
    assert!(!ExperienceConstraint::Range { min: 1, max: 3 }.admits(ExperienceSpan::new(4, 6)));
}

#[test]
fn test_minimum_uses_lower_bound() {
    assert!(!ExperienceConstraint::Minimum(5).admits(ExperienceSpan::new(2, 8)));
}

#[test]
fn test_none_admits_everything() {
    assert!(ExperienceConstraint::None.admits(ExperienceSpan::exact(0)));
    assert!(!ExperienceConstraint::None.is_present());
}

#[test]
fn test_judge_verdicts() {
    let filter = ExperienceFilter::new();
    let constraint = ExperienceConstraint::Minimum(3);

    assert_eq!(
        filter.judge(&CandidateRecord::new(1, 1), constraint),
        ExperienceVerdict::NoSource
    );
    assert_eq!(
        filter.judge(
            &CandidateRecord::new(1, 1).with_transcript("I love marketing"),
            constraint
        ),
        ExperienceVerdict::Unparsable
    );
    assert_eq!(
        filter.judge(
            &CandidateRecord::new(1, 1).with_declared_experience("2 years"),
            constraint
        ),
        ExperienceVerdict::OutsideConstraint(ExperienceSpan::exact(2))
    );
    assert_eq!(
        filter.judge(
            &CandidateRecord::new(1, 1).with_declared_experience("4-6 years"),
            constraint
        ),
        ExperienceVerdict::Admitted(ExperienceSpan::new(4, 6))
    );
}

#[test]
fn test_structured_field_wins_over_transcript() {
    let filter = ExperienceFilter::new();
    let record = CandidateRecord::new(1, 1)
        .with_declared_experience("1 year")
        .with_transcript("I have 8 years of experience");

    assert!(!filter.judge(&record, ExperienceConstraint::Minimum(5)).is_admitted());
}

#[test]
fn test_structured_field_without_figure_does_not_fall_back() {
    let filter = ExperienceFilter::new();
    let record = CandidateRecord::new(1, 1)
        .with_declared_experience("experienced")
        .with_transcript("I have 8 years of experience");

    assert_eq!(
        filter.judge(&record, ExperienceConstraint::Minimum(5)),
        ExperienceVerdict::Unparsable
    );
}

#[test]
fn test_apply_keeps_order_scores_and_confidence() {
    let filter = ExperienceFilter::new();
    let ranked = vec![
        scored(1, 0.95, 100, CandidateRecord::default().with_declared_experience("5 years")),
        scored(2, 0.90, 95, CandidateRecord::default().with_declared_experience("1 year")),
        scored(3, 0.85, 89, CandidateRecord::default().with_transcript("3-4 yrs in sales")),
        scored(4, 0.80, 84, CandidateRecord::default()),
    ];

    let kept = filter.apply(ranked, ExperienceConstraint::Range { min: 2, max: 5 });

    let ids: Vec<u64> = kept.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(kept[0].score, 0.95);
    assert_eq!(kept[0].confidence, 100);
    assert_eq!(kept[1].score, 0.85);
    assert_eq!(kept[1].confidence, 89);
}

#[test]
fn test_apply_without_constraint_is_identity() {
    let filter = ExperienceFilter::new();
    let ranked = vec![
        scored(1, 0.9, 100, CandidateRecord::default()),
        scored(2, 0.8, 89, CandidateRecord::default()),
    ];

    let kept = filter.apply(ranked, ExperienceConstraint::None);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_constraint_display() {
    assert_eq!(
        ExperienceConstraint::Range { min: 2, max: 5 }.to_string(),
        "2-5 years"
    );
    assert_eq!(ExperienceConstraint::Minimum(3).to_string(), "3+ years");
    assert_eq!(ExperienceConstraint::Exact(5).to_string(), "exactly 5 years");
}

#[test]
fn test_constraint_serializes_tagged() {
    let json = serde_json::to_value(ExperienceConstraint::Range { min: 2, max: 5 }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "range", "years": {"min": 2, "max": 5}})
    );

    let json = serde_json::to_value(ExperienceConstraint::Minimum(3)).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "minimum", "years": 3}));
}
