//! Built-in DPDP questionnaire.

use super::{QuestionCatalog, QuestionDefinition};

/// (id, category, weight, recommendation) in questionnaire order.
const QUESTIONS: [(&str, &str, f64, &str); 25] = [
    (
        "q1",
        "Consent Management",
        5.0,
        "Implement explicit consent mechanism before collecting personal data",
    ),
    (
        "q2",
        "Consent Management",
        4.0,
        "Create clear, accessible privacy notice explaining data usage",
    ),
    (
        "q3",
        "Consent Management",
        4.0,
        "Implement consent withdrawal mechanism",
    ),
    (
        "q4",
        "Data Principal Rights",
        5.0,
        "Create data access request fulfillment process",
    ),
    (
        "q5",
        "Data Principal Rights",
        5.0,
        "Implement data correction and updation process",
    ),
    (
        "q6",
        "Data Principal Rights",
        5.0,
        "Establish data deletion (Right to be Forgotten) process",
    ),
    (
        "q7",
        "Data Principal Rights",
        4.0,
        "Create data portability mechanism",
    ),
    (
        "q8",
        "Data Security",
        5.0,
        "Implement encryption for sensitive data storage",
    ),
    (
        "q9",
        "Data Security",
        5.0,
        "Establish access control and authentication systems",
    ),
    (
        "q10",
        "Data Security",
        4.0,
        "Conduct regular security audits and vulnerability assessments",
    ),
    (
        "q11",
        "Data Retention",
        4.0,
        "Define and document data retention policies",
    ),
    (
        "q12",
        "Data Retention",
        4.0,
        "Implement automated data deletion after retention period",
    ),
    (
        "q13",
        "Data Processing",
        4.0,
        "Establish Data Processing Agreements with all processors",
    ),
    (
        "q14",
        "Data Processing",
        3.0,
        "Implement processor audit and compliance verification",
    ),
    (
        "q15",
        "Children Data",
        5.0,
        "Implement parental consent mechanism for children's data",
    ),
    (
        "q16",
        "Breach Management",
        5.0,
        "Create data breach notification process and templates",
    ),
    (
        "q17",
        "Breach Management",
        5.0,
        "Establish incident response plan and team",
    ),
    (
        "q18",
        "Governance",
        5.0,
        "Appoint Data Protection Officer (mandatory for SDF)",
    ),
    (
        "q19",
        "Governance",
        4.0,
        "Maintain comprehensive data processing records",
    ),
    (
        "q20",
        "Governance",
        4.0,
        "Conduct Data Protection Impact Assessments for high-risk processing",
    ),
    (
        "q21",
        "Cross-border Transfer",
        4.0,
        "Ensure adequate safeguards for international data transfers",
    ),
    (
        "q22",
        "Transparency",
        3.0,
        "Publish and regularly update privacy policy",
    ),
    (
        "q23",
        "Accountability",
        4.0,
        "Implement data protection compliance monitoring system",
    ),
    (
        "q24",
        "Training",
        3.0,
        "Conduct regular employee training on DPDP compliance",
    ),
    (
        "q25",
        "Compliance",
        4.0,
        "Establish grievance redressal mechanism for data principals",
    ),
];

pub(super) fn build() -> QuestionCatalog {
    // The table is fixed and covered by tests, so it bypasses validation.
    QuestionCatalog {
        questions: QUESTIONS
            .iter()
            .map(|&(id, category, weight, recommendation)| {
                QuestionDefinition::new(id, category, weight, recommendation)
            })
            .collect(),
    }
}
