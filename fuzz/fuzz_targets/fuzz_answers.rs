#![no_main]
use dpdp_assess::{AnswerSet, classify_risk, rank_recommendations, score_assessment};
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz answer-set deserialization and the scoring components behind it.
///
/// Any JSON object must score without panicking; the input is also tried as
/// the value of a single answer to reach the lenient literal handling.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(answers) = serde_json::from_str::<AnswerSet>(s) {
            score(&answers);
        }

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"q1":{s},"q2":"Partial"}}"#);
            if let Ok(answers) = serde_json::from_str::<AnswerSet>(&wrapped) {
                score(&answers);
            }
        }
    }
});

fn score(answers: &AnswerSet) {
    let result = score_assessment(answers);
    assert!((0.0..=100.0).contains(&result.percentage));
    let _ = classify_risk(result.percentage);
    assert!(rank_recommendations(answers).len() <= 10);
}
