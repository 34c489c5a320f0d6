use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::path::Path;

use flashforge_core::parser::{parse_deck_str, validate_deck};

fn deck_toml(cards: usize) -> String {
    let mut toml = String::from("[deck]\nid = \"bench\"\nname = \"Bench\"\n");
    for i in 0..cards {
        toml.push_str(&format!(
            "\n[[cards]]\nid = \"c{i}\"\ncategory = \"Cat{}\"\nprompt = \"Question {i}?\"\nanswer = \"Answer {i}.\"\n",
            i % 7
        ));
    }
    toml
}

fn bench_parse_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_deck");
    let path = Path::new("bench.toml");

    for size in [12, 100, 1000] {
        let content = deck_toml(size);
        group.bench_function(format!("{size}_cards"), |b| {
            b.iter(|| parse_deck_str(black_box(&content), path))
        });
    }

    group.finish();
}

fn bench_validate_deck(c: &mut Criterion) {
    let content = deck_toml(1000);
    let deck = parse_deck_str(&content, Path::new("bench.toml")).expect("bench deck parses");

    c.bench_function("validate_1000_cards", |b| {
        b.iter(|| validate_deck(black_box(&deck)))
    });
}

criterion_group!(benches, bench_parse_deck, bench_validate_deck);
criterion_main!(benches);
