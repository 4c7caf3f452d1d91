//! Type definitions module
//!
//! Core record types shared by extraction, querying and persistence.

pub mod record;

// Re-export commonly used types
pub use record::{Medal, MedalRecord, MedalTally, LABEL_SEPARATOR};
