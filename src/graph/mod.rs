//! Graph module for describing filter graphs.
//!
//! A filter graph is an ordered list of chains. Each chain reads labelled
//! streams, applies filters left to right and may label its outputs for use by
//! later chains.

pub mod structure;
pub mod serialization;

// Re-export commonly used types
pub use structure::{Filter, FilterChain, FilterGraph};
pub use serialization::{DocumentFormat, GraphDocument, GraphMetadata};
