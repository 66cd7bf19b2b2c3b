use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a prayer meeting was attended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrayerMode {
    /// Gathered in person (PRESENTIEL)
    #[value(alias = "onsite", alias = "presentiel")]
    OnSite,
    /// Joined remotely (ZOOM)
    #[value(alias = "zoom")]
    Remote,
}

impl PrayerMode {
    pub const ALL: [PrayerMode; 2] = [PrayerMode::OnSite, PrayerMode::Remote];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PrayerMode::OnSite => "ON_SITE",
            PrayerMode::Remote => "REMOTE",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ON_SITE" => Some(PrayerMode::OnSite),
            "REMOTE" => Some(PrayerMode::Remote),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrayerMode::OnSite => "On site",
            PrayerMode::Remote => "Remote",
        }
    }
}

impl std::fmt::Display for PrayerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_db_str())
    }
}
