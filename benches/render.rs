use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ffgraph::prelude::*;

fn build_graph(clips: usize) -> FilterGraph {
    let mut graph = FilterGraph::new();
    for i in 0..clips {
        graph.push(
            FilterChain::new(format!("{}:v", i), Filter::new("select").with_positional("between(t, 10, 20)"))
                .then(Filter::new("setpts").with_positional("PTS-STARTPTS"))
                .then(Filter::new("scale").with_option("w", 1280).with_option("h", 720))
                .with_output(format!("v{}", i)),
        );
    }
    let labels: Vec<String> = (0..clips).map(|i| format!("v{}", i)).collect();
    graph.push(
        FilterChain::new(labels, Filter::new("concat").with_option("n", clips as i64).with_option("v", 1))
            .with_output("out"),
    );
    graph
}

fn bench_render(c: &mut Criterion) {
    let graph = build_graph(64);

    c.bench_function("render_64_clips", |b| b.iter(|| black_box(&graph).render()));
    c.bench_function("render_pretty_64_clips", |b| {
        b.iter(|| black_box(&graph).render_pretty())
    });
    c.bench_function("format_option_value_call", |b| {
        let value = FilterOptionValue::from("between(t, 10, 20)");
        b.iter(|| format_option_value(black_box(&value)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
