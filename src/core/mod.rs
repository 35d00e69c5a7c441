//! Core types for ffgraph.
//!
//! This module contains the foundational types shared by the rest of the crate:
//! - Option values (text or number) and option sets
//! - The one-or-many container used for labels and filters
//! - Error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{FilterOptionValue, FilterOptions, OneOrMany};
pub use error::{FilterGraphError, FilterGraphResult};
