use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;
use std::fs;
use std::sync::Arc;
use vitext::dict::{Dictionary, loader};
use vitext::segment::{Segmenter, TokenizeOption};

const SYLLABLES: &[&str] = &[
    "việt", "nam", "hà", "nội", "xã", "hội", "chủ", "nghĩa", "công", "nghệ", "thông", "tin",
    "phát", "triển", "kinh", "tế", "giáo", "dục", "văn", "hóa",
];

/// Bigram dictionary over the syllable pool
fn build_dictionary() -> Arc<Dictionary> {
    let mut terms = Vec::new();
    for pair in SYLLABLES.chunks(2) {
        if let [a, b] = pair {
            terms.push(format!("{} {}", a, b));
        }
    }
    Arc::new(Dictionary::from_terms(terms, "bench").unwrap())
}

/// Random syllable soup of roughly `words` syllables
fn generate_text(words: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..words)
        .map(|_| SYLLABLES[rng.gen_range(0..SYLLABLES.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_segment(c: &mut Criterion) {
    let segmenter = Segmenter::new(build_dictionary());
    let mut group = c.benchmark_group("segment");

    for words in [10usize, 100, 1000].iter() {
        let text = generate_text(*words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| {
                let tokens = segmenter.segment(black_box(text), TokenizeOption::Normal, false);
                black_box(tokens)
            });
        });
    }
    group.finish();
}

fn bench_segment_with_urls(c: &mut Criterion) {
    let segmenter = Segmenter::new(build_dictionary());
    let text = format!(
        "{} https://vnexpress.net/thoi-su lien he test@example.com {}",
        generate_text(50),
        generate_text(50)
    );

    c.bench_function("segment_mixed_content", |b| {
        b.iter(|| {
            let tokens = segmenter.segment(black_box(&text), TokenizeOption::Url, true);
            black_box(tokens)
        });
    });
}

fn bench_dictionary_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = rand::thread_rng();
    let terms: Vec<String> = (0..10_000)
        .map(|_| {
            format!(
                "{} {}",
                SYLLABLES[rng.gen_range(0..SYLLABLES.len())],
                rng.gen_range(0..100_000)
            )
        })
        .collect();
    fs::write(dir.path().join("words.txt"), terms.join("\n")).unwrap();

    c.bench_function("dictionary_load_10k_terms", |b| {
        b.iter(|| {
            let dict = loader::load(dir.path()).unwrap();
            black_box(dict)
        });
    });
}

criterion_group!(
    benches,
    bench_segment,
    bench_segment_with_urls,
    bench_dictionary_load
);
criterion_main!(benches);
