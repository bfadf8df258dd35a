#![no_main]
use dpdp_assess::{AnswerSet, QuestionCatalog};
use dpdp_assess::scoring::ComplianceScorer;
use libfuzzer_sys::fuzz_target;

/// Fuzz catalog loading from JSON and YAML.
///
/// A catalog that passes validation must be scorable with an empty answer
/// set.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for catalog in [QuestionCatalog::from_json_str(s), QuestionCatalog::from_yaml_str(s)]
            .into_iter()
            .flatten()
        {
            let result = ComplianceScorer::new(&catalog).score(&AnswerSet::new());
            assert!(result.percentage.abs() < f64::EPSILON);
        }
    }
});
