//! Rendering of descriptions into filter-graph text.
//!
//! ```text
//! graph   := chain (";" chain)*
//! chain   := ("[" label "]")+ filter ("," filter)* ("[" label "]")*
//! filter  := name ("=" value | "=" key "=" value (":" key "=" value)*)?
//! ```

use crate::core::types::FilterOptions;
use crate::format::escape::format_option_value;
use crate::format::options::RenderOptions;
use crate::graph::structure::{Filter, FilterChain};

/// Separator between chains.
pub const CHAIN_SEPARATOR: &str = ";";
/// Separator between filters within a chain.
pub const FILTER_SEPARATOR: &str = ",";
/// Separator between named options of one filter.
pub const OPTION_SEPARATOR: &str = ":";

/// Wrap a stream label in brackets. The label itself is not escaped.
pub fn format_stream(label: &str) -> String {
    format!("[{}]", label)
}

/// Format the options of one filter.
pub fn format_options(options: &FilterOptions) -> String {
    match options {
        FilterOptions::Positional(value) => format_option_value(value),
        FilterOptions::Named(map) => map
            .iter()
            .map(|(key, value)| format!("{}={}", key, format_option_value(value)))
            .collect::<Vec<_>>()
            .join(OPTION_SEPARATOR),
    }
}

/// Format a filter as `name` or `name=options`.
///
/// Falsy parts are left out: a falsy name (`""`, `0`, `NaN`), a falsy
/// positional option, and options that format to nothing.
pub fn format_filter(filter: &Filter) -> String {
    let name = Some(&filter.name)
        .filter(|name| !name.is_falsy())
        .map(ToString::to_string);
    let options = filter
        .options
        .as_ref()
        .filter(|options| !options.is_falsy())
        .map(format_options)
        .filter(|options| !options.is_empty());

    [name, options]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("=")
}

fn format_streams<'a>(labels: impl IntoIterator<Item = &'a String>) -> String {
    labels.into_iter().map(|label| format_stream(label)).collect()
}

/// Format one chain: input labels, filters, then output labels.
pub fn format_chain(chain: &FilterChain) -> String {
    let inputs = format_streams(&chain.inputs);
    let filters = chain
        .filters
        .iter()
        .map(format_filter)
        .collect::<Vec<_>>()
        .join(FILTER_SEPARATOR);
    let outputs = chain
        .outputs
        .as_ref()
        .map(|outputs| format_streams(outputs))
        .unwrap_or_default();

    let mut out = String::with_capacity(inputs.len() + filters.len() + outputs.len());
    out.push_str(&inputs);
    out.push_str(&filters);
    out.push_str(&outputs);
    out
}

/// Render chains into one filter-graph expression.
///
/// Chains that render to nothing are skipped; no chains yields `""`.
pub fn create_filter_graph(chains: &[FilterChain]) -> String {
    let graph = chains
        .iter()
        .map(format_chain)
        .filter(|chain| !chain.is_empty())
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR);

    log::debug!(
        "Rendered filter graph: {} chain(s), {} bytes",
        chains.len(),
        graph.len()
    );
    graph
}

/// Put each chain on its own line by adding a newline after every `;`.
///
/// Works on any text, not only output of [`create_filter_graph`].
pub fn pretty_print(graph: &str) -> String {
    graph.replace(CHAIN_SEPARATOR, ";\n")
}

/// Render chains according to `options`.
pub fn render(chains: &[FilterChain], options: &RenderOptions) -> String {
    let graph = create_filter_graph(chains);
    if options.pretty {
        pretty_print(&graph)
    } else {
        graph
    }
}
