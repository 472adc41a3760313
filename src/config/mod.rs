mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_MAX_DEPTH, KeyFileTables, ProjectTables, ScannerConfig,
};
