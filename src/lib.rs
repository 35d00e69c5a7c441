//! # ffgraph - ffmpeg filter graph serialization
//!
//! ffgraph turns typed descriptions of filters, their options and their stream
//! labels into the textual filter-graph syntax ffmpeg accepts for
//! `-filter_complex`, plus a pretty-printed variant for display.
//!
//! ## Features
//!
//! - **Typed descriptions**: filters, chains and graphs are plain Rust values
//! - **Ordered options**: named options render in insertion order
//! - **Automatic escaping**: commas in function-call option values such as
//!   `between(t, 10, 20)` are escaped for you
//! - **Documents**: descriptions can be loaded from JSON or TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use ffgraph::prelude::*;
//!
//! let graph = FilterGraph::new()
//!     .chain(
//!         FilterChain::new("0:v", Filter::new("scale").with_option("w", 1280).with_option("h", 720))
//!             .with_output("scaled"),
//!     )
//!     .chain(
//!         FilterChain::new("scaled", Filter::new("select").with_positional("between(t, 10, 20)"))
//!             .with_output("out"),
//!     );
//!
//! assert_eq!(
//!     graph.render(),
//!     r"[0:v]scale=w=1280:h=720[scaled];[scaled]select=between(t\, 10\, 20)[out]"
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: option values, the one-or-many container and error types
//! - [`graph`]: filter, chain and graph descriptions and their documents
//! - [`format`]: escaping and rendering to filter-graph text
//!
//! Rendering is pure and never fails. Nothing is checked against ffmpeg's
//! actual filter list; an invalid graph is reported by ffmpeg when it runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod format;
pub mod graph;

pub use format::writer::{create_filter_graph, pretty_print};

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use ffgraph::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{FilterOptionValue, FilterOptions, OneOrMany};

    // Errors
    pub use crate::core::error::{FilterGraphError, FilterGraphResult};

    // Graph
    pub use crate::graph::structure::{Filter, FilterChain, FilterGraph};
    pub use crate::graph::serialization::{DocumentFormat, GraphDocument, GraphMetadata};

    // Formatting
    pub use crate::format::escape::format_option_value;
    pub use crate::format::options::RenderOptions;
    pub use crate::format::writer::{
        create_filter_graph, format_chain, format_filter, format_options, format_stream,
        pretty_print,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
