//! In-memory store.

use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::AssessmentStore;
use crate::error::{AssessError, Result, StoreErrorKind};
use crate::model::{AssessmentRecord, ComplianceReport, OrganizationRef, ProfileRecord};

#[derive(Debug, Default)]
struct Tables {
    organizations: IndexMap<String, OrganizationRef>,
    profiles: IndexMap<String, ProfileRecord>,
    assessments: Vec<AssessmentRecord>,
    reports: Vec<ComplianceReport>,
}

/// Thread-safe store backed by in-process maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing reports, registering their organizations.
    pub fn with_reports(reports: impl IntoIterator<Item = ComplianceReport>) -> Result<Self> {
        let store = Self::new();
        for report in reports {
            store.register_organization(report.organization())?;
            store.save_report(report)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AssessError::store("reading memory store", StoreErrorKind::Poisoned))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AssessError::store("writing memory store", StoreErrorKind::Poisoned))
    }
}

impl AssessmentStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn register_organization(&self, organization: OrganizationRef) -> Result<()> {
        let mut tables = self.write()?;
        tables
            .organizations
            .entry(organization.org_id.clone())
            .or_insert(organization);
        Ok(())
    }

    fn organizations(&self) -> Result<Vec<OrganizationRef>> {
        Ok(self.read()?.organizations.values().cloned().collect())
    }

    fn profile(&self, org_id: &str) -> Result<Option<ProfileRecord>> {
        Ok(self.read()?.profiles.get(org_id).cloned())
    }

    fn upsert_profile(&self, mut record: ProfileRecord) -> Result<ProfileRecord> {
        let mut tables = self.write()?;
        if let Some(existing) = tables.profiles.get(&record.org_id) {
            record.created_at = existing.created_at;
        }
        tables
            .profiles
            .insert(record.org_id.clone(), record.clone());
        Ok(record)
    }

    fn save_assessment(&self, record: AssessmentRecord) -> Result<()> {
        self.write()?.assessments.push(record);
        Ok(())
    }

    fn save_report(&self, report: ComplianceReport) -> Result<()> {
        self.write()?.reports.push(report);
        Ok(())
    }

    fn assessments(&self, org_id: &str) -> Result<Vec<AssessmentRecord>> {
        Ok(self
            .read()?
            .assessments
            .iter()
            .filter(|a| a.org_id == org_id)
            .cloned()
            .collect())
    }

    fn reports(&self, org_id: &str) -> Result<Vec<ComplianceReport>> {
        Ok(self
            .read()?
            .reports
            .iter()
            .filter(|r| r.org_id == org_id)
            .cloned()
            .collect())
    }

    fn all_reports(&self) -> Result<Vec<ComplianceReport>> {
        Ok(self.read()?.reports.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileAttributes;
    use chrono::{TimeZone, Utc};

    fn profile(org_id: &str, day: u32, sdf_score: u32) -> ProfileRecord {
        let ts = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        ProfileRecord {
            org_id: org_id.to_string(),
            attributes: ProfileAttributes::default(),
            sdf_score,
            is_sdf: false,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_upsert_keeps_created_at() {
        let store = MemoryStore::new();
        store.upsert_profile(profile("org-1", 1, 0)).unwrap();
        let stored = store.upsert_profile(profile("org-1", 5, 4)).unwrap();

        assert_eq!(stored.created_at, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(stored.updated_at, Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap());

        let fetched = store.profile("org-1").unwrap().unwrap();
        assert_eq!(fetched.sdf_score, 4);
        assert_eq!(fetched.created_at, stored.created_at);
    }

    #[test]
    fn test_missing_profile_is_none() {
        assert!(MemoryStore::new().profile("nobody").unwrap().is_none());
    }

    #[test]
    fn test_register_organization_first_wins() {
        let store = MemoryStore::new();
        store
            .register_organization(OrganizationRef::new("a", "Alpha"))
            .unwrap();
        store
            .register_organization(OrganizationRef::new("b", "Beta"))
            .unwrap();
        store
            .register_organization(OrganizationRef::new("a", "Renamed"))
            .unwrap();

        let orgs = store.organizations().unwrap();
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0].organization_name, "Alpha");
    }

    #[test]
    fn test_concurrent_upserts_single_profile() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (1..=8)
            .map(|day| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || store.upsert_profile(profile("org-x", day, day)).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(store.profile("org-x").unwrap().is_some());
        assert_eq!(store.read().unwrap().profiles.len(), 1);
    }
}
