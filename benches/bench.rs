// Criterion benchmarks for the sentence engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sentence_site::client::layout::{scale_banner, Dimensions, Viewport};
use sentence_site::core::{SentenceClassifier, SentenceGenerator};

const SUBJECTS: [&str; 6] = ["I", "My cat", "The intern", "Our CTO", "The linter", "A rubber duck"];
const VERBS: [&str; 5] = ["deployed", "rewrote", "refactored", "reviewed", "migrated"];
const OBJECTS: [&str; 6] = [
    "a tuple in firebase.",
    "the build in bash.",
    "the database to a spreadsheet.",
    "a monolith to the blockchain.",
    "the pull request twice.",
    "my grocery list compiler.",
];

fn phrases(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "{} {} {}",
                SUBJECTS[i % SUBJECTS.len()],
                VERBS[(i / SUBJECTS.len()) % VERBS.len()],
                OBJECTS[(i * 7) % OBJECTS.len()]
            )
        })
        .collect()
}

fn trained_classifier() -> SentenceClassifier {
    let mut classifier = SentenceClassifier::new();
    for (i, phrase) in phrases(200).iter().enumerate() {
        classifier.train(phrase, i % 3 != 0);
    }
    classifier
}

fn bench_train_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_generator");

    for size in [100, 1000, 10000] {
        let corpus = phrases(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut generator = SentenceGenerator::default();
                generator.train_all(black_box(corpus));
                generator
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut generator = SentenceGenerator::new(trained_classifier());
    generator.train_all(phrases(1000));
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("generate_sentence", |b| {
        b.iter(|| generator.generate(black_box(None), &mut rng));
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = trained_classifier();

    c.bench_function("classify_sentence", |b| {
        b.iter(|| classifier.classify(black_box("My cat deployed a tuple in firebase.")));
    });
}

fn bench_scale_banner(c: &mut Criterion) {
    let natural = Dimensions { width: 1920.0, height: 1080.0 };

    c.bench_function("scale_banner", |b| {
        b.iter(|| {
            scale_banner(
                black_box(natural),
                black_box(Viewport { width: 414.0, height: 896.0 }),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_train_generator,
    bench_generate,
    bench_classify,
    bench_scale_banner
);
criterion_main!(benches);
