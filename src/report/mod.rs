mod types;

pub use types::{
    ANALYZER_VERSION, DEFAULT_REPORT_PATH, Metadata, RunInfo, ScanReport, Structure,
};
