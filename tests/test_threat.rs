//! Integration tests for threat classification and its presentation lookup.
//!
//! Tests cover:
//! - The ordered verdict rules and the inclusive 0.70 boundary
//! - Full-precision aggregation over the detection sequence
//! - Totality of the level-to-style mapping

mod common;

use common::*;

use bagscreen::Detection;
use bagscreen::detection::normalize::normalize;
use bagscreen::detection::threat::classify;

fn detections_with(confidences: &[f32]) -> Vec<Detection> {
    let labels = LabelTable::french();
    let raw: Vec<RawDetection> = confidences.iter().map(|&c| make_raw("gun", c)).collect();
    normalize(&raw, &labels)
}

#[test]
fn test_empty_sequence_is_none() {
    let verdict = classify(&[]);

    assert_eq!(verdict.level, ThreatLevel::None);
    assert_eq!(verdict.object_count, 0);
    assert_eq!(verdict.max_confidence, 0.0);
}

#[test]
fn test_boundary_confidence_is_high() {
    let verdict = classify(&detections_with(&[HIGH_THREAT_CONF]));

    assert_eq!(verdict.level, ThreatLevel::High);
}

#[test]
fn test_just_below_boundary_is_moderate() {
    let verdict = classify(&detections_with(&[0.6999]));

    assert_eq!(verdict.level, ThreatLevel::Moderate);
}

#[test]
fn test_any_detection_rules_out_none() {
    // Even a zero-confidence record leaves the no-threat verdict unreachable.
    let verdict = classify(&detections_with(&[0.0]));

    assert_eq!(verdict.level, ThreatLevel::Moderate);
    assert_eq!(verdict.object_count, 1);
}

#[test]
fn test_max_confidence_drives_the_verdict() {
    let verdict = classify(&detections_with(&[0.10, 0.42, 0.88, 0.05]));

    assert_eq!(verdict.level, ThreatLevel::High);
    assert_eq!(verdict.object_count, 4);
    assert!(approx_eq(verdict.max_confidence, 0.88));
}

#[test]
fn test_every_level_has_a_style() {
    let levels = [ThreatLevel::None, ThreatLevel::Moderate, ThreatLevel::High];

    for level in levels {
        let style = level.style();
        assert!(!style.title.is_empty());
        assert!(style.accent.starts_with('#'));
        assert!(style.background.starts_with('#'));
    }

    // Titles are distinct banners.
    assert_ne!(ThreatLevel::None.style().title, ThreatLevel::High.style().title);
    assert_ne!(
        ThreatLevel::Moderate.style().title,
        ThreatLevel::High.style().title
    );
}

#[test]
fn test_summary_carries_style_and_aggregates() {
    let verdict = classify(&detections_with(&[0.95]));
    let summary = verdict.summary();

    assert_eq!(summary.level, ThreatLevel::High);
    assert_eq!(summary.title, "🔴 MENACE DÉTECTÉE");
    assert_eq!(summary.accent_color, "#c62828");
    assert_eq!(summary.background_color, "#ffebee");
    assert_eq!(summary.count, 1);
    assert!(approx_eq(summary.max_confidence, 0.95));
}
