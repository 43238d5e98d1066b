use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use pyp_engine::{Config, translate_str};

/// A document mixing nested blocks, embedded expressions and every quoting style.
fn document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("!for row in table_{i} {{\n"));
        doc.push_str("!if row.visible {\n");
        doc.push_str("| `row.name` | `row.count:` | plain cell |\n");
        doc.push_str("she said \"hello\"\n");
        doc.push_str("it's \"both\" kinds\n");
        doc.push_str("C:\\windows\\path\\\n");
        doc.push_str("!}\n!}\n\n");
    }
    doc
}

fn bench_translate(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("translate");
    for sections in [10, 1000] {
        let doc = document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("{sections}_sections"), |b| {
            b.iter(|| translate_str(black_box(&doc), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
