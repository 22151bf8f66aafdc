//! Example: analyze a single WAV file
//!
//! Usage:
//!   cargo run --release --example analyze_wav -- <file.wav>

use cadence_dsp::io::wav::read_wav;
use cadence_dsp::{analyze_signal, AnalysisConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: analyze_wav <file.wav>")?;

    let signal = read_wav(&path)?;
    let config = AnalysisConfig::default();

    let result = analyze_signal(&signal, &config)?;

    println!("Analysis Results for {}:", path);
    println!("  Duration: {:.2} s", result.metadata.duration_seconds);
    println!(
        "  Tempo: {:.2} BPM (period {:.3} s)",
        result.tempo.bpm, result.tempo.period_seconds
    );
    println!("  Onsets: {}", result.onsets.len());
    for time in result.onset_times_seconds() {
        println!("    {:.3} s", time);
    }
    println!(
        "  Processing time: {:.2} ms",
        result.metadata.processing_time_ms
    );

    Ok(())
}
