//! Audio I/O boundary
//!
//! WAV decoding into the [`AudioSignal`](crate::signal::AudioSignal)
//! ingestion contract. The DSP core never touches files; this adapter runs
//! before it.

pub mod wav;
