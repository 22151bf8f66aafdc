//! Example: analyze multiple WAV files in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--json] <file1.wav> <file2.wav> ...
//!
//! Parallelism is across files; each analysis is single-threaded.

use cadence_dsp::io::wav::read_wav;
use cadence_dsp::{analyze_batch, AnalysisConfig, AudioSignal};
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
struct FileSummary<'a> {
    file: &'a str,
    bpm: f32,
    onsets: usize,
    duration_seconds: f32,
    processing_time_ms: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut json = false;
    let mut paths: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("Usage: analyze_batch [--json] <file1.wav> <file2.wav> ...");
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one WAV file path. Use --help for usage.");
        std::process::exit(2);
    }

    let t0 = Instant::now();
    let config = AnalysisConfig::default();

    // Decode up front so batch parallelism covers the pure analyses only
    let mut signals: Vec<(String, AudioSignal)> = Vec::new();
    for path in &paths {
        match read_wav(path) {
            Ok(signal) => signals.push((path.clone(), signal)),
            Err(e) => eprintln!("{}: SKIPPED ({})", path, e),
        }
    }

    let decoded: Vec<AudioSignal> = signals.iter().map(|(_, s)| s.clone()).collect();
    let results = analyze_batch(&decoded, &config);

    let mut ok = 0;
    for ((path, _), result) in signals.iter().zip(&results) {
        match result {
            Ok(res) => {
                ok += 1;
                if json {
                    let summary = FileSummary {
                        file: path,
                        bpm: res.tempo.bpm,
                        onsets: res.onsets.len(),
                        duration_seconds: res.metadata.duration_seconds,
                        processing_time_ms: res.metadata.processing_time_ms,
                    };
                    println!("{}", serde_json::to_string(&summary)?);
                } else {
                    println!(
                        "{}: BPM={:.2} onsets={} duration={:.2}s time={:.2}ms",
                        path,
                        res.tempo.bpm,
                        res.onsets.len(),
                        res.metadata.duration_seconds,
                        res.metadata.processing_time_ms
                    );
                }
            }
            Err(e) => {
                println!("{}: ERROR: {}", path, e);
            }
        }
    }

    let wall_ms = t0.elapsed().as_secs_f64() * 1000.0;
    eprintln!("Done: ok={}/{} wall={:.0}ms", ok, results.len(), wall_ms);

    Ok(())
}
