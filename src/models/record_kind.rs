use clap::ValueEnum;

/// The two independent attendance streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RecordKind {
    #[value(alias = "culte")]
    Service,
    #[value(alias = "priere")]
    Prayer,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Service => "service",
            RecordKind::Prayer => "prayer",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::Service => "service_records",
            RecordKind::Prayer => "prayer_records",
        }
    }
}
