//! Item catalog consistency: the fixed questions and answer options each
//! screener presents must line up with its scoring formula and maximum.

use seniva_core::models::response::ResponseValue;
use seniva_screeners::Screener;

#[test]
fn item_counts_match_the_published_forms() {
    assert_eq!(Screener::Who5.questions().len(), 5);
    assert_eq!(Screener::Gds15.questions().len(), 15);
    assert_eq!(Screener::Phq9.questions().len(), 9);
    assert_eq!(Screener::Gad7.questions().len(), 7);
    assert_eq!(Screener::Pss4.questions().len(), 4);
    assert_eq!(Screener::Psqi.questions().len(), 7);
}

#[test]
fn answering_every_item_at_the_top_option_scores_the_maximum() {
    for screener in Screener::ALL {
        let responses: Vec<ResponseValue> = screener
            .questions()
            .iter()
            .map(|question| {
                let top = question
                    .options
                    .iter()
                    .map(|option| option.value)
                    .max()
                    .expect("item has options");
                ResponseValue::Int(top)
            })
            .collect();
        assert_eq!(
            screener.score(&responses),
            screener.max_score(),
            "{}",
            screener.name()
        );
    }
}

#[test]
fn answering_every_item_at_the_bottom_option_scores_zero() {
    for screener in Screener::ALL {
        let responses: Vec<ResponseValue> = screener
            .questions()
            .iter()
            .map(|question| {
                let bottom = question
                    .options
                    .iter()
                    .map(|option| option.value)
                    .min()
                    .expect("item has options");
                ResponseValue::Int(bottom)
            })
            .collect();
        assert_eq!(screener.score(&responses), 0, "{}", screener.name());
    }
}

#[test]
fn every_item_offers_labelled_scoreable_options() {
    for screener in Screener::ALL {
        for (index, question) in screener.questions().iter().enumerate() {
            assert!(!question.text.is_empty(), "{} item {}", screener.name(), index + 1);
            assert!(
                question.options.len() >= 2,
                "{} item {}",
                screener.name(),
                index + 1
            );
            for option in question.options {
                assert!(!option.label.is_empty());
                assert!(option.value >= 0);
            }
        }
    }
}

#[test]
fn gds15_items_are_yes_no_keyed_zero_or_one() {
    for question in Screener::Gds15.questions() {
        let labels: Vec<&str> = question.options.iter().map(|option| option.label).collect();
        assert_eq!(labels, ["Yes", "No"]);

        let mut values: Vec<i64> = question.options.iter().map(|option| option.value).collect();
        values.sort_unstable();
        assert_eq!(values, [0, 1]);
    }
}

#[test]
fn complete_clean_response_sets_pass_the_check() {
    let responses = vec![ResponseValue::Int(1); 9];
    assert!(Screener::Phq9.check_responses(&responses).is_empty());
}

/// The yes/no form posts literal strings; they are valid answers, and the
/// affirmative ones are exactly what the scorer counts.
#[test]
fn gds15_yes_no_text_answers_score_and_pass_the_check() {
    let all_yes = vec![ResponseValue::from("yes"); 15];
    assert_eq!(Screener::Gds15.score(&all_yes), 15);
    assert!(Screener::Gds15.check_responses(&all_yes).is_empty());

    let mut mixed = vec![ResponseValue::from("yes"); 15];
    for index in [1, 4, 6, 10, 12] {
        mixed[index] = ResponseValue::from("no");
    }
    assert_eq!(Screener::Gds15.score(&mixed), 10);
    assert!(Screener::Gds15.check_responses(&mixed).is_empty());
}

#[test]
fn gds15_accepts_every_documented_answer_form() {
    let mut responses = vec![ResponseValue::Int(0); 15];
    responses[0] = ResponseValue::Int(1);
    responses[1] = ResponseValue::Float(1.0);
    responses[2] = ResponseValue::from("1");
    responses[3] = ResponseValue::from("0");
    responses[4] = ResponseValue::from("yes");
    responses[5] = ResponseValue::from("no");

    assert!(Screener::Gds15.check_responses(&responses).is_empty());
    assert_eq!(Screener::Gds15.score(&responses), 4);
}

#[test]
fn gds15_unrecognized_answers_are_flagged_as_not_counted() {
    let mut responses = vec![ResponseValue::Int(1); 15];
    responses[7] = ResponseValue::from("maybe");
    responses[11] = ResponseValue::Int(2);

    let warnings = Screener::Gds15.check_responses(&responses);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].index, Some(7));
    assert!(warnings[0].message.contains("does not count"));
    assert_eq!(warnings[1].index, Some(11));
    assert_eq!(Screener::Gds15.score(&responses), 13);
}

#[test]
fn short_response_sets_are_flagged() {
    let warnings = Screener::Gad7.check_responses(&[ResponseValue::Int(1)]);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].index.is_none());
    assert!(warnings[0].message.contains("expected 7 responses"));
}

#[test]
fn off_catalog_values_are_flagged_with_their_position() {
    let mut responses = vec![ResponseValue::Int(1); 7];
    responses[3] = ResponseValue::Int(9);

    let warnings = Screener::Gad7.check_responses(&responses);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].index, Some(3));
    assert!(warnings[0].message.contains('9'));
}

#[test]
fn non_numeric_answers_are_flagged_but_do_not_block_scoring() {
    let mut responses = vec![ResponseValue::Int(2); 4];
    responses[1] = ResponseValue::from("rarely");

    let warnings = Screener::Pss4.check_responses(&responses);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].index, Some(1));
    assert_eq!(Screener::Pss4.score(&responses), 6);
}
