//! Demo: synthesize two physiological-looking recordings and view them.
//!
//! Recordings can also be loaded at runtime from CSV files (File menu);
//! this demo just makes the window do something out of the box.

use std::f64::consts::TAU;

use vitalscope::{channel_signals, run_monitor, PanelId, DEFAULT_SAMPLE_RATE};

/// Crude ECG-like waveform: a sharp spike per beat over a small baseline
/// wobble. Not physiologically accurate, just plausible to look at.
fn synth_ecg(n: usize, rate: f64) -> Vec<f64> {
    let beat_period = 0.8; // seconds per beat
    (0..n)
        .map(|i| {
            let t = i as f64 / rate;
            let phase = (t % beat_period) / beat_period;
            let spike = (-(phase - 0.3).powi(2) / 0.0008).exp();
            let t_wave = 0.25 * (-(phase - 0.55).powi(2) / 0.004).exp();
            let baseline = 0.05 * (TAU * 0.3 * t).sin();
            spike + t_wave + baseline
        })
        .collect()
}

/// Slow sinusoidal respiration trace with a little second harmonic.
fn synth_resp(n: usize, rate: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / rate;
            (TAU * 0.25 * t).sin() + 0.2 * (TAU * 0.5 * t).sin()
        })
        .collect()
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = channel_signals();
    let n = 5_000;
    let _ = sink.load_channel(PanelId::Left, "ECG", synth_ecg(n, DEFAULT_SAMPLE_RATE), DEFAULT_SAMPLE_RATE);
    let _ = sink.load_channel(
        PanelId::Right,
        "Respiration",
        synth_resp(n, DEFAULT_SAMPLE_RATE),
        DEFAULT_SAMPLE_RATE,
    );

    run_monitor(rx, "VitalScope — Multi-Channel Signal Viewer")
}
