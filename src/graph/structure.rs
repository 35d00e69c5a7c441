//! Filter, chain and graph descriptions.
//!
//! These are plain owned values built by the caller right before rendering.
//! Rendering only borrows them, so a description can be rendered any number of
//! times. Every type implements `Display` with exactly the filter-graph text.

use crate::core::types::{FilterOptionValue, FilterOptions, OneOrMany};
use crate::format::options::RenderOptions;
use crate::format::writer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named filter invocation, e.g. `scale=w=1280:h=720`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FilterRepr")]
pub struct Filter {
    /// Filter name (usually text)
    pub name: FilterOptionValue,
    /// Optional positional or named options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FilterOptions>,
}

/// Accepts both `"hstack"` and `{"name": "hstack", ...}` in documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum FilterRepr {
    Bare(FilterOptionValue),
    Full {
        name: FilterOptionValue,
        #[serde(default)]
        options: Option<FilterOptions>,
    },
}

impl From<FilterRepr> for Filter {
    fn from(repr: FilterRepr) -> Self {
        match repr {
            FilterRepr::Bare(name) => Filter { name, options: None },
            FilterRepr::Full { name, options } => Filter { name, options },
        }
    }
}

impl Filter {
    /// Create a filter with no options.
    pub fn new(name: impl Into<FilterOptionValue>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    /// Add a named option.
    ///
    /// Keys keep insertion order. A positional option set earlier is dropped.
    pub fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<FilterOptionValue>,
    ) -> Self {
        match &mut self.options {
            Some(FilterOptions::Named(map)) => {
                map.insert(key.into(), value.into());
            }
            _ => {
                let mut map = IndexMap::new();
                map.insert(key.into(), value.into());
                self.options = Some(FilterOptions::Named(map));
            }
        }
        self
    }

    /// Set a single unnamed option.
    pub fn with_positional(mut self, value: impl Into<FilterOptionValue>) -> Self {
        self.options = Some(FilterOptions::Positional(value.into()));
        self
    }

    /// Replace the options wholesale.
    pub fn with_options(mut self, options: impl Into<FilterOptions>) -> Self {
        self.options = Some(options.into());
        self
    }
}

impl From<&str> for Filter {
    fn from(name: &str) -> Self {
        Filter::new(name)
    }
}

impl From<String> for Filter {
    fn from(name: String) -> Self {
        Filter::new(name)
    }
}

impl From<Filter> for OneOrMany<Filter> {
    fn from(filter: Filter) -> Self {
        OneOrMany::One(filter)
    }
}

impl From<&str> for OneOrMany<Filter> {
    fn from(name: &str) -> Self {
        OneOrMany::One(Filter::new(name))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::format_filter(self))
    }
}

/// One segment of the graph: input labels, filters, optional output labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    /// Input stream labels, e.g. `0:v`
    pub inputs: OneOrMany<String>,
    /// Filters applied left to right
    pub filters: OneOrMany<Filter>,
    /// Output stream labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<OneOrMany<String>>,
}

impl FilterChain {
    /// Create a chain with no outputs.
    pub fn new(inputs: impl Into<OneOrMany<String>>, filters: impl Into<OneOrMany<Filter>>) -> Self {
        Self {
            inputs: inputs.into(),
            filters: filters.into(),
            outputs: None,
        }
    }

    /// Add one output label.
    pub fn with_output(mut self, label: impl Into<String>) -> Self {
        match &mut self.outputs {
            Some(outputs) => outputs.push(label.into()),
            None => self.outputs = Some(OneOrMany::One(label.into())),
        }
        self
    }

    /// Replace the output labels.
    pub fn with_outputs(mut self, labels: impl Into<OneOrMany<String>>) -> Self {
        self.outputs = Some(labels.into());
        self
    }

    /// Append a filter to the end of the chain.
    pub fn then(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::format_chain(self))
    }
}

/// An ordered list of chains, rendered as one `;`-separated expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterGraph {
    chains: Vec<FilterChain>,
}

impl FilterGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Add a chain (builder style).
    pub fn chain(mut self, chain: FilterChain) -> Self {
        self.chains.push(chain);
        self
    }

    /// Add a chain.
    pub fn push(&mut self, chain: FilterChain) {
        self.chains.push(chain);
    }

    /// All chains in declaration order.
    pub fn chains(&self) -> &[FilterChain] {
        &self.chains
    }

    /// Number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the graph has no chains.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Render to a single-line filter-graph expression.
    pub fn render(&self) -> String {
        writer::create_filter_graph(&self.chains)
    }

    /// Render with a newline after every chain separator.
    pub fn render_pretty(&self) -> String {
        writer::pretty_print(&self.render())
    }

    /// Render according to `options`.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        writer::render(&self.chains, options)
    }
}

impl From<Vec<FilterChain>> for FilterGraph {
    fn from(chains: Vec<FilterChain>) -> Self {
        Self { chains }
    }
}

impl FromIterator<FilterChain> for FilterGraph {
    fn from_iter<I: IntoIterator<Item = FilterChain>>(iter: I) -> Self {
        Self {
            chains: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
