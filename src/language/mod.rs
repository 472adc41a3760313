mod registry;

pub use registry::{Language, LanguageRegistry};
