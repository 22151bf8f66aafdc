//! Performance benchmarks for the analysis pipeline

use cadence_dsp::{analyze_audio, AnalysisConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// 30 seconds of 120 BPM clicks at 44.1 kHz
fn click_track() -> Vec<f32> {
    let sample_rate = 44100usize;
    let num_samples = sample_rate * 30;
    let interval = sample_rate / 2;
    let click_len = sample_rate * 5 / 1000;

    let mut samples = vec![0.0f32; num_samples];
    let mut pos = 0;
    while pos < num_samples {
        for i in 0..click_len.min(num_samples - pos) {
            let t = i as f32 / click_len as f32;
            samples[pos + i] = (1.0 - t) * 0.9;
        }
        pos += interval;
    }

    samples
}

fn bench_analyze_audio(c: &mut Criterion) {
    let samples = click_track();
    let config = AnalysisConfig::default();

    c.bench_function("analyze_audio_30s", |b| {
        b.iter(|| {
            let _ = analyze_audio(black_box(&samples), black_box(44100), black_box(&config));
        });
    });
}

criterion_group!(benches, bench_analyze_audio);
criterion_main!(benches);
