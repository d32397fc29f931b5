//! Channels and the per-panel channel collection.
//!
//! A panel owns one [`ChannelSet`]: an ordered collection of [`Channel`]
//! records (samples, label, color, visibility). Keeping everything in one
//! record type means the per-channel attributes cannot drift out of
//! correspondence across structural mutations; indices stay dense 0..n-1.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// The curve colors offered by the UI combo box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelColor {
    Red,
    Green,
    Blue,
    Black,
    Yellow,
    Brown,
}

impl Default for ChannelColor {
    fn default() -> Self {
        ChannelColor::Red
    }
}

impl ChannelColor {
    /// All colors, in the order they appear in the UI combo.
    pub const ALL: [ChannelColor; 6] = [
        ChannelColor::Red,
        ChannelColor::Green,
        ChannelColor::Blue,
        ChannelColor::Black,
        ChannelColor::Yellow,
        ChannelColor::Brown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChannelColor::Red => "Red",
            ChannelColor::Green => "Green",
            ChannelColor::Blue => "Blue",
            ChannelColor::Black => "Black",
            ChannelColor::Yellow => "Yellow",
            ChannelColor::Brown => "Brown",
        }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            ChannelColor::Red => Color32::from_rgb(220, 50, 47),
            ChannelColor::Green => Color32::from_rgb(40, 160, 40),
            ChannelColor::Blue => Color32::from_rgb(38, 110, 220),
            ChannelColor::Black => Color32::from_rgb(20, 20, 20),
            ChannelColor::Yellow => Color32::from_rgb(200, 180, 20),
            ChannelColor::Brown => Color32::from_rgb(140, 86, 75),
        }
    }
}

/// One loaded signal: an ordered sample buffer at a fixed sampling rate,
/// plus its UI-facing presentation.
#[derive(Debug, Clone)]
pub struct Channel {
    pub samples: Vec<f64>,
    pub label: String,
    pub color: ChannelColor,
    pub visible: bool,
}

impl Channel {
    pub fn new<S: Into<String>>(samples: Vec<f64>, label: S) -> Self {
        Self {
            samples,
            label: label.into(),
            color: ChannelColor::default(),
            visible: true,
        }
    }
}

/// Ordered collection of the channels attached to one panel.
#[derive(Debug, Default)]
pub struct ChannelSet {
    channels: Vec<Channel>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Channel> {
        let len = self.channels.len();
        self.channels
            .get_mut(index)
            .ok_or(MonitorError::IndexOutOfRange { index, len })
    }

    /// Append a channel and return its index. Empty sample buffers are
    /// rejected; they would make window slicing and extent folding
    /// meaningless.
    pub fn add(&mut self, channel: Channel) -> Result<usize> {
        if channel.samples.is_empty() {
            return Err(MonitorError::InvalidInput(format!(
                "channel '{}' has no samples",
                channel.label
            )));
        }
        self.channels.push(channel);
        Ok(self.channels.len() - 1)
    }

    /// Remove a channel and return it whole, so the caller can migrate it
    /// to the other panel.
    pub fn remove(&mut self, index: usize) -> Result<Channel> {
        if index >= self.channels.len() {
            return Err(MonitorError::IndexOutOfRange {
                index,
                len: self.channels.len(),
            });
        }
        Ok(self.channels.remove(index))
    }

    pub fn rename<S: Into<String>>(&mut self, index: usize, label: S) -> Result<()> {
        self.get_mut(index)?.label = label.into();
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: ChannelColor) -> Result<()> {
        self.get_mut(index)?.color = color;
        Ok(())
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        self.get_mut(index)?.visible = visible;
        Ok(())
    }

    /// The slice `samples[start..start+length]`, clamped to the available
    /// sample count. Channels within one set are assumed equal-length, but
    /// this is not enforced; a shorter channel yields a truncated (possibly
    /// empty) slice rather than an error.
    pub fn window(&self, index: usize, start: usize, length: usize) -> Result<&[f64]> {
        let len = self.channels.len();
        let samples = &self
            .channels
            .get(index)
            .ok_or(MonitorError::IndexOutOfRange { index, len })?
            .samples;
        let begin = start.min(samples.len());
        let end = start.saturating_add(length).min(samples.len());
        Ok(&samples[begin..end])
    }

    /// Labels in index order, for rebuilding the UI combo after any
    /// structural mutation.
    pub fn labels(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.label.clone()).collect()
    }

    /// Sample count of the first channel; its length drives the panel's
    /// playback boundary and slider mapping.
    pub fn first_len(&self) -> Option<usize> {
        self.channels.first().map(|c| c.samples.len())
    }

    /// (min, max) over *all* samples of *all* channels, or `None` when the
    /// set is empty. Recomputed by the panel whenever the set changes.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for ch in &self.channels {
            for &v in &ch.samples {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}
