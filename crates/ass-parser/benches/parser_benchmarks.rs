//! Benchmarks for decoding and validating ASS scripts
//!
//! Generates synthetic scripts programmatically so no external files are
//! needed, then measures decoding, parsing and the owned report path.

use ass_parser::{check_bytes, DecodedScript, StrictSettings};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";
const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Synthetic script generator for benchmarking
struct ScriptGenerator {
    /// Number of styles to generate
    styles_count: usize,
    /// Number of events to generate
    events_count: usize,
    /// Line terminator to join lines with
    line_ending: &'static str,
}

impl ScriptGenerator {
    fn new(styles_count: usize, events_count: usize) -> Self {
        Self {
            styles_count,
            events_count,
            line_ending: "\r\n",
        }
    }

    /// Build the script with a UTF-8 byte order mark
    fn generate(&self) -> Vec<u8> {
        let nl = self.line_ending;
        let mut script = String::from("\u{FEFF}");
        let _ = write!(
            script,
            "[Script Info]{nl}Title: Benchmark{nl}ScriptType: v4.00+{nl}PlayResX: 1920{nl}PlayResY: 1080{nl}{nl}[V4+ Styles]{nl}{STYLE_FORMAT}{nl}"
        );

        for index in 0..self.styles_count {
            let _ = write!(
                script,
                "Style: Style{index},Arial,{},&H00FFFFFF,&H000000FF,&H00000000,&H80000000,{},0,0,0,100,100,0,0,1,2,0,2,10,10,10,1{nl}",
                20 + index % 40,
                if index % 2 == 0 { "0" } else { "-1" }
            );
        }

        let _ = write!(script, "{nl}[Events]{nl}{EVENT_FORMAT}{nl}");
        for index in 0..self.events_count {
            let start = index % 3600;
            let end = start + 3;
            let _ = write!(
                script,
                "Dialogue: 0,0:{:02}:{:02}.00,0:{:02}:{:02}.50,Style{},,0000,0000,0000,,{{\\pos(960,540)}}Line {index}, with a comma{nl}",
                start / 60,
                start % 60,
                (end / 60) % 60,
                end % 60,
                index % self.styles_count.max(1)
            );
        }

        script.into_bytes()
    }
}

fn bench_parsing(c: &mut Criterion) {
    let settings = StrictSettings::strict();
    let mut group = c.benchmark_group("parse");

    for events in [10, 1_000, 10_000] {
        let bytes = ScriptGenerator::new(10, events).generate();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode", events), &bytes, |b, bytes| {
            b.iter(|| DecodedScript::decode(black_box(bytes), &settings));
        });

        let decoded = DecodedScript::decode(&bytes, &settings)
            .result
            .expect("generated script should decode");
        group.bench_with_input(BenchmarkId::new("parse", events), &decoded, |b, decoded| {
            b.iter(|| {
                let outcome = decoded.parse(black_box(&settings));
                black_box(outcome.result.map(|document| document.events.len()))
            });
        });

        group.bench_with_input(BenchmarkId::new("check_bytes", events), &bytes, |b, bytes| {
            b.iter(|| check_bytes(black_box(bytes), &settings));
        });
    }

    group.finish();
}

fn bench_utf16_decoding(c: &mut Criterion) {
    let settings = StrictSettings::strict();
    let text = String::from_utf8(ScriptGenerator::new(10, 1_000).generate())
        .expect("generated script is UTF-8");
    let bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();

    c.bench_function("decode_utf16le_1000_events", |b| {
        b.iter(|| DecodedScript::decode(black_box(&bytes), &settings));
    });
}

criterion_group!(benches, bench_parsing, bench_utf16_decoding);
criterion_main!(benches);
