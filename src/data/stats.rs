//! Per-channel summary statistics for the report export.

use crate::data::channel::Channel;

/// Summary of one channel's recording, as shown in the report table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub mean: f64,
    pub std: f64,
    /// Recording length in seconds at the panel's sampling rate.
    pub duration_s: f64,
    pub min: f64,
    pub max: f64,
}

impl ChannelStats {
    /// Compute statistics over the channel's full sample buffer.
    /// Channels in a set are never empty, so `n >= 1` holds here.
    pub fn compute(channel: &Channel, sample_rate: f64) -> ChannelStats {
        let samples = &channel.samples;
        let n = samples.len().max(1) as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in samples {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        if !min.is_finite() {
            min = 0.0;
            max = 0.0;
        }
        ChannelStats {
            mean,
            std: var.sqrt(),
            duration_s: samples.len() as f64 / sample_rate,
            min,
            max,
        }
    }
}
