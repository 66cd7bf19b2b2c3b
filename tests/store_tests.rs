use chrono::NaiveDate;
use ejp_analytics::core::summary::{ServiceSummary, filter_services};
use ejp_analytics::db::pool::DbPool;
use ejp_analytics::errors::{AppError, AppResult};
use ejp_analytics::models::RecordKind;
use ejp_analytics::models::validation::ValidationError;
use ejp_analytics::{
    AttendanceRepository, AttendanceStore, InvalidationPolicy, PrayerMode, PrayerRecord,
    ServiceRecord, SnapshotCache, SqliteAttendanceRepository, UpsertOutcome,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn service(date: NaiveDate, total: u32, male: u32, female: u32) -> ServiceRecord {
    ServiceRecord {
        event_date: date,
        site_attendance: total + 5,
        total_attendance: total,
        male_count: male,
        female_count: female,
        salvation_calls: 0,
        new_people: 3,
    }
}

fn prayer(date: NaiveDate, mode: PrayerMode, total: u32, male: u32, female: u32) -> PrayerRecord {
    PrayerRecord {
        event_date: date,
        mode,
        total_attendance: total,
        male_count: male,
        female_count: female,
    }
}

#[test]
fn upsert_then_read_back() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::PerType,
    );

    let rec = service(d(2026, 1, 4), 50, 20, 30);
    assert_eq!(store.save_service(&rec).unwrap(), UpsertOutcome::Inserted);

    let all = store.service_records().unwrap();
    assert_eq!(all.as_slice(), &[rec]);
}

#[test]
fn second_write_replaces_every_field() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::PerType,
    );

    store.save_service(&service(d(2026, 1, 4), 50, 20, 30)).unwrap();

    let corrected = ServiceRecord {
        event_date: d(2026, 1, 4),
        site_attendance: 0,
        total_attendance: 52,
        male_count: 22,
        female_count: 30,
        salvation_calls: 1,
        new_people: 0,
    };
    assert_eq!(store.save_service(&corrected).unwrap(), UpsertOutcome::Replaced);

    let all = store.service_records().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], corrected);
}

#[test]
fn bad_gender_sum_is_rejected_and_nothing_is_stored() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::PerType,
    );

    let err = store
        .save_service(&service(d(2026, 1, 4), 50, 20, 29))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::GenderSumMismatch {
            male: 20,
            female: 29,
            total: 50
        })
    ));
    assert!(store.service_records().unwrap().is_empty());

    let err = store
        .save_prayer(&prayer(d(2026, 1, 5), PrayerMode::Remote, 10, 3, 3))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.prayer_records().unwrap().is_empty());
}

#[test]
fn repository_rejects_bad_sum_on_its_own() {
    let pool = DbPool::open_in_memory().unwrap();
    let repo = SqliteAttendanceRepository::new(&pool.conn);

    let err = repo
        .upsert_service_record(&service(d(2026, 1, 4), 50, 20, 29))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(repo.list_service_records().unwrap().is_empty());

    let err = repo
        .upsert_prayer_record(&prayer(d(2026, 1, 5), PrayerMode::OnSite, 12, 5, 8))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(repo.list_prayer_records().unwrap().is_empty());
}

#[test]
fn prayer_modes_on_the_same_date_coexist() {
    let pool = DbPool::open_in_memory().unwrap();
    let repo = SqliteAttendanceRepository::new(&pool.conn);

    let on_site = prayer(d(2026, 1, 5), PrayerMode::OnSite, 12, 5, 7);
    let remote = prayer(d(2026, 1, 5), PrayerMode::Remote, 30, 10, 20);
    repo.upsert_prayer_record(&on_site).unwrap();
    repo.upsert_prayer_record(&remote).unwrap();

    let remote_fix = prayer(d(2026, 1, 5), PrayerMode::Remote, 31, 11, 20);
    assert_eq!(
        repo.upsert_prayer_record(&remote_fix).unwrap(),
        UpsertOutcome::Replaced
    );

    let all = repo.list_prayer_records().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&on_site));
    assert!(all.contains(&remote_fix));
}

#[test]
fn records_come_back_sorted_by_date() {
    let pool = DbPool::open_in_memory().unwrap();
    let repo = SqliteAttendanceRepository::new(&pool.conn);

    for day in [18, 4, 11] {
        repo.upsert_service_record(&service(d(2026, 1, day), 10, 5, 5))
            .unwrap();
    }

    let dates: Vec<NaiveDate> = repo
        .list_service_records()
        .unwrap()
        .iter()
        .map(|r| r.event_date)
        .collect();
    assert_eq!(dates, vec![d(2026, 1, 4), d(2026, 1, 11), d(2026, 1, 18)]);
}

#[test]
fn reads_after_a_write_see_the_write() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::PerType,
    );

    store.save_service(&service(d(2026, 1, 4), 50, 20, 30)).unwrap();
    assert_eq!(store.service_records().unwrap().len(), 1);
    assert!(cache.is_cached(RecordKind::Service));

    store.save_service(&service(d(2026, 1, 11), 60, 25, 35)).unwrap();
    assert!(!cache.is_cached(RecordKind::Service));

    let window = filter_services(&store.service_records().unwrap(), None);
    let summary = ServiceSummary::from_records(&window);
    assert_eq!(summary.events, 2);
    assert_eq!(summary.total_attendance, 110);
}

#[test]
fn per_type_policy_keeps_the_other_snapshot() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::PerType,
    );

    store.service_records().unwrap();
    store.prayer_records().unwrap();

    store
        .save_prayer(&prayer(d(2026, 1, 5), PrayerMode::OnSite, 12, 5, 7))
        .unwrap();

    assert!(cache.is_cached(RecordKind::Service));
    assert!(!cache.is_cached(RecordKind::Prayer));
    assert_eq!(store.prayer_records().unwrap().len(), 1);
}

#[test]
fn all_policy_drops_every_snapshot() {
    let pool = DbPool::open_in_memory().unwrap();
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        &cache,
        InvalidationPolicy::All,
    );

    store.service_records().unwrap();
    store.prayer_records().unwrap();

    store
        .save_prayer(&prayer(d(2026, 1, 5), PrayerMode::OnSite, 12, 5, 7))
        .unwrap();

    assert!(!cache.is_cached(RecordKind::Service));
    assert!(!cache.is_cached(RecordKind::Prayer));
}

/// Repository whose writes always fail at the storage level.
struct BrokenRepo;

impl AttendanceRepository for BrokenRepo {
    fn list_service_records(&self) -> AppResult<Vec<ServiceRecord>> {
        Ok(vec![service(d(2026, 1, 4), 50, 20, 30)])
    }
    fn list_prayer_records(&self) -> AppResult<Vec<PrayerRecord>> {
        Ok(Vec::new())
    }
    fn upsert_service_record(&self, _: &ServiceRecord) -> AppResult<UpsertOutcome> {
        Err(AppError::Db(rusqlite::Error::InvalidQuery))
    }
    fn upsert_prayer_record(&self, _: &PrayerRecord) -> AppResult<UpsertOutcome> {
        Err(AppError::Db(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn failed_write_leaves_the_cache_alone() {
    let cache = SnapshotCache::new();
    let store = AttendanceStore::new(BrokenRepo, &cache, InvalidationPolicy::All);

    store.service_records().unwrap();
    assert!(cache.is_cached(RecordKind::Service));

    let err = store
        .save_service(&service(d(2026, 1, 11), 60, 25, 35))
        .unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    assert!(cache.is_cached(RecordKind::Service));
}
