pub mod prayer_mode;
pub mod prayer_record;
pub mod record_kind;
pub mod service_record;
pub mod validation;

pub use prayer_mode::PrayerMode;
pub use prayer_record::PrayerRecord;
pub use record_kind::RecordKind;
pub use service_record::ServiceRecord;
pub use validation::ValidationError;
