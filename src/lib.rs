//! # jar-finder
//!
//! Answers "which jar on this machine provides class X".
//!
//! ## Architecture
//!
//! - **query**: Turns a dotted class name into the `.class`/`.java` entry paths to look for
//! - **scan**: Depth-first walk of a search root that hands every `.jar` to the probe
//! - **probe**: Opens one jar and matches its entry names, exactly or across all packages
//! - **session**: Lazily evaluated, refreshable search of one query over one root
//! - **report**: Text and JSON rendering of per-root results
//! - **error**: Path-level errors that abort a root and archive-level ones that are absorbed

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod query;
pub mod report;
pub mod scan;
pub mod session;

pub use error::{FinderError, Result};
pub use probe::{Match, MatchKind};
pub use query::Query;
pub use session::{SearchSession, SearchState};
