//! Benchmarks for chatnorm conversion.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- whatsapp`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatnorm::parsers::{
    DiscordParser, GenericParser, InstagramParser, MessageParser, TelegramParser, WhatsAppParser,
};
use chatnorm::{Platform, convert_chat_export, detect};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_whatsapp_old(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "15.01.24, {:02}:{:02} - {}: Message number {}",
            i % 24,
            i % 60,
            sender,
            i
        ));
    }
    lines.join("\n")
}

fn generate_whatsapp_new_multiline(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "[15.01.2024, {:02}:{:02}:00] {}: Message number {}",
            i % 24,
            i % 60,
            sender,
            i
        ));
        // Every third message carries a continuation line.
        if i % 3 == 0 {
            lines.push(format!("continuation for message {i}"));
        }
    }
    lines.join("\n")
}

fn generate_telegram(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "[15.01.2024 {:02}:{:02}:00] {}: Message number {}",
            i % 24,
            i % 60,
            sender,
            i
        ));
    }
    lines.join("\n")
}

fn generate_discord(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "[15-Jan-24 {:02}:{:02}:00] {}: Message number {}",
            i % 24,
            i % 60,
            sender,
            i
        ));
    }
    lines.join("\n")
}

fn generate_instagram(count: usize) -> String {
    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "alice_user" } else { "bob_user" };
        let timestamp = 1_705_314_600_000_i64 + (i as i64 * 60_000);
        records.push(format!(
            r#"{{"sender_name": "{}", "timestamp_ms": {}, "content": "Message number {}", "type": "Generic"}}"#,
            sender, timestamp, i
        ));
    }
    format!("[{}]", records.join(","))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsers");

    for &count in &[1_000usize, 10_000] {
        let whatsapp_old = generate_whatsapp_old(count);
        group.throughput(Throughput::Bytes(whatsapp_old.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("whatsapp_old", count),
            &whatsapp_old,
            |b, raw| b.iter(|| WhatsAppParser::new().parse_messages(black_box(raw)).unwrap()),
        );

        let whatsapp_new = generate_whatsapp_new_multiline(count);
        group.throughput(Throughput::Bytes(whatsapp_new.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("whatsapp_new_multiline", count),
            &whatsapp_new,
            |b, raw| b.iter(|| WhatsAppParser::new().parse_messages(black_box(raw)).unwrap()),
        );

        let telegram = generate_telegram(count);
        group.throughput(Throughput::Bytes(telegram.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("telegram", count),
            &telegram,
            |b, raw| b.iter(|| TelegramParser::new().parse_messages(black_box(raw)).unwrap()),
        );

        let discord = generate_discord(count);
        group.throughput(Throughput::Bytes(discord.len() as u64));
        group.bench_with_input(BenchmarkId::new("discord", count), &discord, |b, raw| {
            b.iter(|| DiscordParser::new().parse_messages(black_box(raw)).unwrap());
        });

        let instagram = generate_instagram(count);
        group.throughput(Throughput::Bytes(instagram.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("instagram", count),
            &instagram,
            |b, raw| b.iter(|| InstagramParser::new().parse_messages(black_box(raw)).unwrap()),
        );

        let generic = generate_whatsapp_old(count);
        group.bench_with_input(BenchmarkId::new("generic", count), &generic, |b, raw| {
            b.iter(|| GenericParser::new().parse_messages(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    let samples = [
        ("whatsapp_old", generate_whatsapp_old(1_000)),
        ("telegram", generate_telegram(1_000)),
        ("discord", generate_discord(1_000)),
        ("instagram", generate_instagram(1_000)),
    ];

    for (name, raw) in &samples {
        group.bench_with_input(BenchmarkId::new("detect", name), raw, |b, raw| {
            b.iter(|| detect(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

fn bench_full_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let export = generate_whatsapp_new_multiline(10_000);
    group.throughput(Throughput::Bytes(export.len() as u64));
    group.bench_function("end_to_end_whatsapp_10k", |b| {
        b.iter(|| convert_chat_export(black_box(&export), None).unwrap());
    });
    group.bench_function("end_to_end_whatsapp_10k_hinted", |b| {
        b.iter(|| convert_chat_export(black_box(&export), Some(Platform::WhatsApp)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_parsers, bench_detection, bench_full_conversion);
criterion_main!(benches);
