//! Persistence seam for assessments.
//!
//! The scoring core never touches storage. The pipeline reads profiles and
//! writes assessment outputs through the [`AssessmentStore`] trait, and the
//! host decides what backs it. [`MemoryStore`] is the bundled
//! implementation, used by the CLI and by tests.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{AssessmentRecord, ComplianceReport, OrganizationRef, ProfileRecord};

/// Storage collaborator for profiles, assessments and reports.
///
/// Implementations must serialize concurrent upserts for the same
/// organization so that at most one live profile exists per organization.
///
/// # Example
///
/// ```ignore
/// use dpdp_assess::store::{AssessmentStore, MemoryStore};
///
/// let store: Box<dyn AssessmentStore> = Box::new(MemoryStore::new());
/// let profile = store.profile("org-42")?;
/// ```
pub trait AssessmentStore: Send + Sync {
    /// Short backend name for logging (e.g. "memory").
    fn name(&self) -> &'static str;

    /// Record an organization so it appears in portfolio listings.
    fn register_organization(&self, organization: OrganizationRef) -> Result<()>;

    /// All registered organizations in registration order.
    fn organizations(&self) -> Result<Vec<OrganizationRef>>;

    /// The live profile for an organization, if one was submitted.
    fn profile(&self, org_id: &str) -> Result<Option<ProfileRecord>>;

    /// Insert or replace an organization's profile.
    ///
    /// When a profile already exists its `created_at` is kept and the
    /// stored record is returned with that timestamp.
    fn upsert_profile(&self, record: ProfileRecord) -> Result<ProfileRecord>;

    fn save_assessment(&self, record: AssessmentRecord) -> Result<()>;

    fn save_report(&self, report: ComplianceReport) -> Result<()>;

    /// Assessments for one organization, oldest first.
    fn assessments(&self, org_id: &str) -> Result<Vec<AssessmentRecord>>;

    /// Reports for one organization, oldest first.
    fn reports(&self, org_id: &str) -> Result<Vec<ComplianceReport>>;

    /// Every stored report, oldest first.
    fn all_reports(&self) -> Result<Vec<ComplianceReport>>;
}
