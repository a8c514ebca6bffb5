//! Benchmarks for infobox extraction and record building

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dm_catalog_rs::catalog::RecordBuilder;
use dm_catalog_rs::wikitext::{AbilityDetector, FieldExtractor};

const SAMPLE_PAGE: &str = "\
{{CardInfobox
| image = Bolshack_Dragon.jpg
| civilization = [[Fire]]
| type = Creature
| cost = 6
| race = [[Armored Dragon]]
| power = 6000
| text = ■ Double breaker (this creature breaks 2 shields)
■ While attacking, this creature gets +1000 power for each card in your graveyard.
| flavor = Its roar splits the earth.
| set = DM-01
}}
'''Bolshack Dragon''' is a creature in the [[DM-01 Base Set]].

[[Category:Creatures]]
[[Category:Armored Dragons]]
";

fn bench_field_extraction(c: &mut Criterion) {
    let extractor = FieldExtractor::new();
    let mut group = c.benchmark_group("field_extraction");
    group.throughput(Throughput::Bytes(SAMPLE_PAGE.len() as u64));

    group.bench_function("first_key_hits", |b| {
        b.iter(|| extractor.field(black_box(SAMPLE_PAGE), &["cost", "mana cost"]))
    });
    group.bench_function("fallback_key_hits", |b| {
        b.iter(|| extractor.field(black_box(SAMPLE_PAGE), &["tribe", "race", "subtype"]))
    });
    group.bench_function("no_key_hits", |b| {
        b.iter(|| extractor.field(black_box(SAMPLE_PAGE), &["rarity", "artist"]))
    });

    group.finish();
}

fn bench_ability_detection(c: &mut Criterion) {
    let detector = AbilityDetector::new();
    let mut group = c.benchmark_group("ability_detection");
    group.throughput(Throughput::Bytes(SAMPLE_PAGE.len() as u64));

    group.bench_function("full_vocabulary_scan", |b| {
        b.iter(|| detector.detect(black_box(SAMPLE_PAGE)))
    });

    group.finish();
}

fn bench_record_build(c: &mut Criterion) {
    let builder = RecordBuilder::new();

    c.bench_function("build_record", |b| {
        b.iter(|| builder.build(black_box("Bolshack_Dragon.jpg"), black_box(SAMPLE_PAGE)))
    });
}

criterion_group!(
    benches,
    bench_field_extraction,
    bench_ability_detection,
    bench_record_build
);
criterion_main!(benches);
