//! Filter-graph text generation.
//!
//! Turns filter, chain and graph descriptions into the textual syntax ffmpeg
//! accepts for `-filter_complex`, escaping option values where needed.

pub mod escape;
pub mod options;
pub mod writer;

// Re-export commonly used functions
pub use escape::format_option_value;
pub use options::RenderOptions;
pub use writer::{
    create_filter_graph, format_chain, format_filter, format_options, format_stream,
    pretty_print, render,
};
