use criterion::{Criterion, criterion_group, criterion_main};
use site_linker::{ContentLinker, PageRecord};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let pages: Vec<PageRecord> = (0..200)
        .map(|i| PageRecord {
            title: format!("Striping Service {}", i),
            url: format!("/striping/{}", i),
            content: format!(
                "<p>Striping and sealcoating for lot{i}.</p><p>Road repair and drainage work.</p>"
            ),
        })
        .collect();
    let linker = ContentLinker::default();
    let index = linker.build_index(&pages);
    let content = pages[0].content.clone();

    c.bench_function("inject_links", |b| {
        b.iter(|| linker.inject_links(black_box(&content), "/home", &index))
    });
    c.bench_function("process_pages", |b| {
        b.iter(|| linker.process_pages(black_box(pages.clone())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
