//! medaltally - Olympic medal table extraction and exploration
//!
//! Turns a raw, one-token-per-line listing of medal results into a CSV medal
//! table and answers ranking, per-country and per-sport questions over it.
//!
//! # Architecture
//!
//! - **extract**: line classifier + parser state machine producing records
//! - **query**: group/sort/filter over a loaded table
//! - **table**: presentable views, CSV persistence and export
//! - **repl**: interactive menu viewer
//! - **cli**: arguments and TOML configuration

pub mod errors;
pub mod types;
pub mod reference;
pub mod extract;
pub mod query;
pub mod table;

// Re-export commonly used types
pub use errors::{MedalError, Result};
pub use extract::{extract, ExtractionReport, Extractor, ParserState};
pub use query::QueryEngine;
pub use reference::ReferenceSets;
pub use table::Table;
pub use types::{Medal, MedalRecord, MedalTally};

// Terminal interface
pub mod cli;
pub mod repl;
