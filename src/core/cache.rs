//! Process-wide snapshot cache for the two attendance tables.
//!
//! # Lifecycle
//! - A slot starts empty and is filled on the first read that misses.
//! - A successful write empties the affected slot(s) before the write call
//!   returns; failed writes leave every slot untouched.
//! - Loading runs while holding the slot lock, so an invalidation can never be
//!   overtaken by a concurrent load of pre-write data.
//!
//! The cache is bound to one database per process. Callers that work with
//! several databases in one process must use separate `SnapshotCache` values.

use crate::errors::AppResult;
use crate::models::{PrayerRecord, RecordKind, ServiceRecord};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL_CACHE: Lazy<SnapshotCache> = Lazy::new(SnapshotCache::new);

/// The cache shared by every store in this process.
pub fn global() -> &'static SnapshotCache {
    &GLOBAL_CACHE
}

/// Which snapshots a successful write drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidationPolicy {
    /// Only the snapshot of the record type that was written.
    #[default]
    PerType,
    /// Every snapshot, whatever was written.
    All,
}

impl InvalidationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerType => "per-type",
            Self::All => "all",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-type" | "per_type" | "pertype" => Some(Self::PerType),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

type Slot<T> = Mutex<Option<Arc<Vec<T>>>>;

#[derive(Debug, Default)]
pub struct SnapshotCache {
    services: Slot<ServiceRecord>,
    prayers: Slot<PrayerRecord>,
}

fn lock<T>(slot: &Slot<T>) -> MutexGuard<'_, Option<Arc<Vec<T>>>> {
    // A poisoned slot still holds either a full snapshot or nothing.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn get_or_load<T, F>(slot: &Slot<T>, kind: RecordKind, load: F) -> AppResult<Arc<Vec<T>>>
where
    F: FnOnce() -> AppResult<Vec<T>>,
{
    let mut guard = lock(slot);

    if let Some(snapshot) = guard.as_ref() {
        log::trace!("event=cache_hit module=cache kind={}", kind.as_str());
        return Ok(Arc::clone(snapshot));
    }

    log::debug!("event=cache_miss module=cache kind={}", kind.as_str());
    let snapshot = Arc::new(load()?);
    *guard = Some(Arc::clone(&snapshot));
    Ok(snapshot)
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached service snapshot, loading it with `load` on a miss.
    /// A failing `load` leaves the slot empty.
    pub fn services_or_load<F>(&self, load: F) -> AppResult<Arc<Vec<ServiceRecord>>>
    where
        F: FnOnce() -> AppResult<Vec<ServiceRecord>>,
    {
        get_or_load(&self.services, RecordKind::Service, load)
    }

    /// Cached prayer snapshot, loading it with `load` on a miss.
    pub fn prayers_or_load<F>(&self, load: F) -> AppResult<Arc<Vec<PrayerRecord>>>
    where
        F: FnOnce() -> AppResult<Vec<PrayerRecord>>,
    {
        get_or_load(&self.prayers, RecordKind::Prayer, load)
    }

    pub fn is_cached(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Service => lock(&self.services).is_some(),
            RecordKind::Prayer => lock(&self.prayers).is_some(),
        }
    }

    /// Drops the snapshot(s) a write of `written` affects under `policy`.
    pub fn invalidate(&self, written: RecordKind, policy: InvalidationPolicy) {
        match policy {
            InvalidationPolicy::All => self.clear(),
            InvalidationPolicy::PerType => {
                match written {
                    RecordKind::Service => *lock(&self.services) = None,
                    RecordKind::Prayer => *lock(&self.prayers) = None,
                }
                log::debug!(
                    "event=cache_invalidate module=cache scope={}",
                    written.as_str()
                );
            }
        }
    }

    pub fn clear(&self) {
        *lock(&self.services) = None;
        *lock(&self.prayers) = None;
        log::debug!("event=cache_invalidate module=cache scope=all");
    }
}
