//! Integration tests for alert tone synthesis and WAV export.
//!
//! Tests cover:
//! - Waveform shape: sample count, rate, and amplitude bounds
//! - Phase injection and determinism
//! - WAV round-trip through hound

mod common;

use common::*;

use std::f32::consts::TAU;

use bagscreen::detection::alert::{alert_tone, live_phase, write_wav};
use bagscreen::{ALERT_DURATION_S, ALERT_FREQ_HZ, ALERT_SAMPLE_RATE};

#[test]
fn test_tone_shape() {
    let signal = alert_tone(0.0);

    assert_eq!(signal.sample_rate, ALERT_SAMPLE_RATE);
    assert_eq!(signal.duration_s, ALERT_DURATION_S);
    assert_eq!(
        signal.samples.len(),
        (ALERT_SAMPLE_RATE as f32 * ALERT_DURATION_S) as usize
    );
    assert_eq!(signal.samples.len(), 44_100);
    assert!(signal.samples.iter().all(|s| (-0.2..=0.2).contains(s)));
}

#[test]
fn test_tone_follows_the_sine_formula() {
    let phase = 0.75;
    let signal = alert_tone(phase);

    for i in [0usize, 1, 100, 22_050, 44_099] {
        let t = i as f32 / ALERT_SAMPLE_RATE as f32;
        let expected = 0.2 * (TAU * ALERT_FREQ_HZ * t + phase).sin();
        assert!(
            approx_eq(signal.samples[i], expected),
            "sample {} was {}, expected {}",
            i,
            signal.samples[i],
            expected
        );
    }
}

#[test]
fn test_zero_phase_starts_at_zero() {
    let signal = alert_tone(0.0);

    assert!(approx_eq(signal.samples[0], 0.0));
}

#[test]
fn test_phase_pins_the_waveform() {
    let a = alert_tone(1.25);
    let b = alert_tone(1.25);
    let c = alert_tone(2.5);

    assert_eq!(a.samples, b.samples);
    assert_ne!(a.samples, c.samples);
}

#[test]
fn test_live_phase_stays_in_range() {
    for _ in 0..10 {
        let phase = live_phase();
        assert!((0.0..TAU + 1e-3).contains(&phase));
    }
}

#[test]
fn test_wav_roundtrip() -> anyhow::Result<()> {
    // 1. Synthesize and export
    let signal = alert_tone(0.5);
    let file = tempfile::Builder::new().suffix(".wav").tempfile()?;
    write_wav(&signal, file.path())?;

    // 2. Read back and compare format and content
    let mut reader = hound::WavReader::open(file.path())?;
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, ALERT_SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);

    let samples: Vec<f32> = reader.samples::<f32>().collect::<Result<_, _>>()?;
    assert_eq!(samples.len(), signal.samples.len());
    assert_eq!(samples, signal.samples);

    Ok(())
}
