use std::f32::consts::TAU;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use crate::models::AlertSignal;

pub const ALERT_SAMPLE_RATE: u32 = 22_050;
pub const ALERT_DURATION_S: f32 = 2.0;
pub const ALERT_FREQ_HZ: f32 = 880.0;
/// Peak amplitude of the tone.
const ALERT_AMPLITUDE: f32 = 0.2;

/// Phase offset derived from the wall clock.
///
/// The fractional second maps onto [0, τ), so back-to-back alerts differ.
/// Pass a fixed phase to `alert_tone` where determinism matters.
pub fn live_phase() -> f32 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    since_epoch.subsec_nanos() as f32 / 1_000_000_000.0 * TAU
}

/// Synthesize the high-threat beep at the given phase offset.
///
/// Sample count is exactly `ALERT_SAMPLE_RATE * ALERT_DURATION_S`; every
/// sample stays within the peak amplitude.
pub fn alert_tone(phase: f32) -> AlertSignal {
    let sample_count = (ALERT_SAMPLE_RATE as f32 * ALERT_DURATION_S) as usize;
    let samples = (0..sample_count)
        .map(|i| {
            let t = i as f32 / ALERT_SAMPLE_RATE as f32;
            ALERT_AMPLITUDE * (TAU * ALERT_FREQ_HZ * t + phase).sin()
        })
        .collect();

    AlertSignal {
        sample_rate: ALERT_SAMPLE_RATE,
        duration_s: ALERT_DURATION_S,
        samples,
    }
}

/// Write the signal as a mono 32-bit float WAV file.
pub fn write_wav(signal: &AlertSignal, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &signal.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
