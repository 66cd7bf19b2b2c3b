//! Cached access to the attendance repository.
//!
//! Writes follow a fixed sequence: validate, upsert, invalidate. Validation
//! failures never reach the repository and repository failures never touch
//! the cache.

use crate::core::cache::{InvalidationPolicy, SnapshotCache};
use crate::db::repository::{AttendanceRepository, UpsertOutcome};
use crate::errors::AppResult;
use crate::models::{PrayerRecord, RecordKind, ServiceRecord};
use std::sync::Arc;

pub struct AttendanceStore<'c, R> {
    repo: R,
    cache: &'c SnapshotCache,
    policy: InvalidationPolicy,
}

impl<'c, R: AttendanceRepository> AttendanceStore<'c, R> {
    pub fn new(repo: R, cache: &'c SnapshotCache, policy: InvalidationPolicy) -> Self {
        Self {
            repo,
            cache,
            policy,
        }
    }

    /// All service records, ascending by date.
    pub fn service_records(&self) -> AppResult<Arc<Vec<ServiceRecord>>> {
        self.cache
            .services_or_load(|| self.repo.list_service_records())
    }

    /// All prayer records, ascending by date.
    pub fn prayer_records(&self) -> AppResult<Arc<Vec<PrayerRecord>>> {
        self.cache.prayers_or_load(|| self.repo.list_prayer_records())
    }

    pub fn save_service(&self, record: &ServiceRecord) -> AppResult<UpsertOutcome> {
        record.validate()?;
        let outcome = self.repo.upsert_service_record(record)?;
        self.cache.invalidate(RecordKind::Service, self.policy);
        Ok(outcome)
    }

    pub fn save_prayer(&self, record: &PrayerRecord) -> AppResult<UpsertOutcome> {
        record.validate()?;
        let outcome = self.repo.upsert_prayer_record(record)?;
        self.cache.invalidate(RecordKind::Prayer, self.policy);
        Ok(outcome)
    }
}
