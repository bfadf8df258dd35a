//! Data model for DPDP self-assessments.
//!
//! Organizations describe themselves once through [`ProfileAttributes`],
//! answer the questionnaire as an [`AnswerSet`], and receive an immutable
//! [`AssessmentRecord`] plus a [`ComplianceReport`] per submission.
//!
//! Every type here deserializes leniently: unknown profile codes, missing
//! answers and unrecognized answer values are accepted and scored as the
//! worst case rather than rejected.

mod answers;
mod organization;
mod profile;
mod report;

pub use answers::{Answer, AnswerSet};
pub use organization::{Organization, OrganizationRole, RegistrationViolation};
pub use profile::{
    CHILDREN_DATA_TAG, DataVolume, EmployeeBand, ProfileAttributes, ProfileRecord,
};
pub use report::{AssessmentRecord, ComplianceReport, OrganizationRef};
