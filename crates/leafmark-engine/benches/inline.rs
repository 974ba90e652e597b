use criterion::{Criterion, criterion_group, criterion_main};
use leafmark_engine::{ParentNode, text_to_nodes, text_to_spans};

fn generate_inline_content(size: usize) -> String {
    let base = "Plain words with **bold text**, some *italic*, a `code span`, \
                an ![image](/img.png) and a [link](https://example.com). ";
    base.repeat(size)
}

fn bench_inline_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let content = generate_inline_content(100);
    group.bench_function("text_to_spans", |b| {
        b.iter(|| {
            let spans = text_to_spans(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(spans);
        });
    });

    group.bench_function("render_paragraph", |b| {
        b.iter(|| {
            let children = text_to_nodes(std::hint::black_box(&content)).unwrap();
            let html = ParentNode::new("p", children).unwrap().to_html();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inline_pipeline);
criterion_main!(benches);
