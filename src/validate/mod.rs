mod checklist;

pub use checklist::{
    CheckId, CheckOutcome, MIN_DOCUMENT_BYTES, ValidationResult, validate_content, validate_path,
};
