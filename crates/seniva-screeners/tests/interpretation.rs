//! Threshold band behavior across all six screeners.

use seniva_core::models::interpretation::Severity;
use seniva_screeners::Screener;
use seniva_screeners::error::ScreenerError;
use seniva_screeners::scoring::Band;
use seniva_screeners::screeners::{gad7, gds15, phq9, psqi, pss4, who5};

#[test]
fn phq9_bands_follow_the_documented_thresholds() {
    let cases = [
        (0, "minimal", Severity::None),
        (4, "minimal", Severity::None),
        (5, "mild", Severity::Mild),
        (9, "mild", Severity::Mild),
        (10, "moderate", Severity::Moderate),
        (14, "moderate", Severity::Moderate),
        (15, "moderately-severe", Severity::Severe),
        (19, "moderately-severe", Severity::Severe),
        (20, "severe", Severity::Critical),
        (27, "severe", Severity::Critical),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Phq9.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

#[test]
fn gad7_bands_follow_the_documented_thresholds() {
    let cases = [
        (4, "minimal", Severity::None),
        (5, "mild", Severity::Mild),
        (14, "moderate", Severity::Moderate),
        (15, "severe", Severity::Severe),
        (21, "severe", Severity::Severe),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Gad7.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

#[test]
fn gds15_bands_follow_the_documented_thresholds() {
    let cases = [
        (0, "normal", Severity::None),
        (4, "normal", Severity::None),
        (5, "mild", Severity::Mild),
        (9, "mild", Severity::Mild),
        (10, "moderate-severe", Severity::Severe),
        (15, "moderate-severe", Severity::Severe),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Gds15.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

#[test]
fn pss4_bands_follow_the_documented_thresholds() {
    let cases = [
        (5, "low", Severity::None),
        (6, "moderate", Severity::Mild),
        (10, "moderate", Severity::Mild),
        (11, "high", Severity::Moderate),
        (16, "high", Severity::Moderate),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Pss4.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

#[test]
fn psqi_bands_follow_the_documented_thresholds() {
    let cases = [
        (5, "good", Severity::None),
        (6, "poor", Severity::Mild),
        (11, "severe", Severity::Severe),
        (21, "severe", Severity::Severe),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Psqi.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

/// WHO-5 runs the other way: high scores are healthy, low scores are the
/// concerning ones.
#[test]
fn who5_band_edges_sit_at_the_documented_cutoffs() {
    let cases = [
        (100, "good", Severity::None),
        (50, "good", Severity::None),
        (49, "low", Severity::Mild),
        (28, "low", Severity::Mild),
        (27, "poor", Severity::Severe),
        (0, "poor", Severity::Severe),
    ];
    for (score, level, severity) in cases {
        let interpretation = Screener::Who5.interpret(score).expect("in range");
        assert_eq!(interpretation.level, level, "score {score}");
        assert_eq!(interpretation.severity, severity, "score {score}");
    }
}

#[test]
fn band_tables_tile_each_scale_exactly_once() {
    let tables: [(&str, &[Band], i64); 6] = [
        ("WHO-5", who5::BANDS, who5::MAX_SCORE),
        ("GDS-15", gds15::BANDS, gds15::MAX_SCORE),
        ("PHQ-9", phq9::BANDS, phq9::MAX_SCORE),
        ("GAD-7", gad7::BANDS, gad7::MAX_SCORE),
        ("PSS-4", pss4::BANDS, pss4::MAX_SCORE),
        ("PSQI", psqi::BANDS, psqi::MAX_SCORE),
    ];
    for (name, bands, max_score) in tables {
        for score in 0..=max_score {
            let hits = bands.iter().filter(|band| band.contains(score)).count();
            assert_eq!(hits, 1, "{name} score {score}");
        }
    }
}

#[test]
fn out_of_range_scores_are_rejected() {
    for screener in Screener::ALL {
        assert!(screener.interpret(-1).is_err(), "{}", screener.name());
        assert!(
            screener.interpret(screener.max_score() + 1).is_err(),
            "{}",
            screener.name()
        );
        assert!(screener.interpret(0).is_ok(), "{}", screener.name());
        assert!(
            screener.interpret(screener.max_score()).is_ok(),
            "{}",
            screener.name()
        );
    }
}

#[test]
fn invalid_score_error_reports_scale_and_bounds() {
    let err = Screener::Gad7.interpret(99).expect_err("out of range");
    match err {
        ScreenerError::InvalidScore {
            name,
            score,
            max_score,
        } => {
            assert_eq!(name, "Generalized Anxiety Disorder Scale (GAD-7)");
            assert_eq!(score, 99);
            assert_eq!(max_score, 21);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn interpretations_carry_display_content() {
    let interpretation = Screener::Psqi.interpret(3).expect("in range");
    assert_eq!(interpretation.level, "good");
    assert_eq!(interpretation.color, "#4caf50");
    assert!(!interpretation.emoji.is_empty());
    assert!(!interpretation.message.is_empty());
    assert!(!interpretation.recommendation.is_empty());
}
