//! ffgraph CLI - render filter graph documents
//!
//! Reads a JSON or TOML graph document and prints the ffmpeg filter-graph
//! expression it describes. Set `RUST_LOG=debug` for diagnostics.

use anyhow::{bail, Context};
use ffgraph::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ffgraph");

    if args.len() < 2 {
        print_usage(program);
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "render" => render(&args[2..]),
        "pretty" => match args.get(2) {
            Some(text) => {
                println!("{}", pretty_print(text));
                Ok(())
            }
            None => Err(anyhow::anyhow!("Please specify a filter graph string")),
        },
        "example" => print_example(),
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(fix) = e.downcast_ref::<FilterGraphError>().and_then(|e| e.suggested_fix()) {
                eprintln!("  Suggestion: {}", fix);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!("ffgraph v{}", ffgraph::VERSION);
    println!();
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  render <file> [--pretty]  Render a .json or .toml graph document");
    println!("  pretty <graph>            Put each chain of a graph string on its own line");
    println!("  example                   Print an example document and its rendering");
    println!("  help                      Show this help message");
}

/// Arguments of the `render` command.
#[derive(Debug, PartialEq)]
struct RenderArgs {
    path: PathBuf,
    options: RenderOptions,
}

fn parse_render_args(args: &[String]) -> anyhow::Result<RenderArgs> {
    let mut path = None;
    let mut options = RenderOptions::new();

    for arg in args {
        match arg.as_str() {
            "--pretty" | "-p" => options = options.pretty(true),
            flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
            value if path.is_none() => path = Some(PathBuf::from(value)),
            extra => bail!("Unexpected argument: {}", extra),
        }
    }

    let path = path.context("Please specify a graph document (.json or .toml)")?;
    Ok(RenderArgs { path, options })
}

fn render(args: &[String]) -> anyhow::Result<()> {
    let RenderArgs { path, options } = parse_render_args(args)?;
    let document = GraphDocument::load(&path)
        .and_then(GraphDocument::require_chains)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    println!("{}", document.into_graph().render_with(&options));
    Ok(())
}

fn example_document() -> GraphDocument {
    let graph = FilterGraph::new()
        .chain(
            FilterChain::new("0:v", Filter::new("select").with_positional("between(t, 10, 20)"))
                .then(Filter::new("setpts").with_positional("PTS-STARTPTS"))
                .then(Filter::new("scale").with_option("w", 1280).with_option("h", 720))
                .with_output("clip"),
        )
        .chain(FilterChain::new(["clip", "1:v"], "hstack").with_output("out"));

    let mut document = GraphDocument::from_graph(&graph);
    document.metadata.name = Some("Example".to_string());
    document
}

fn print_example() -> anyhow::Result<()> {
    let document = example_document();
    println!("{}", document.to_json()?);
    println!();
    println!("{}", document.into_graph().render_pretty());
    Ok(())
}
