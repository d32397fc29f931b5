//! One viewing panel: channel set + view transform + playback clock.
//!
//! The panel is where the playback state machine meets the data: on every
//! tick or seek it computes the exact sample window and axis ranges to
//! present. It never draws anything itself; the UI layer consumes
//! [`PanelFrame`]s.

use crate::data::channel::{Channel, ChannelColor, ChannelSet};
use crate::data::clock::PlaybackClock;
use crate::data::view::{PanDirection, ViewTransform};
use crate::error::Result;

/// Width of the visible window, in samples.
pub const WINDOW_SIZE: usize = 200;

/// Sampling rate assumed for CSV recordings, in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 125.0;

/// The visible slice of one channel, ready for the rendering layer.
#[derive(Debug, Clone)]
pub struct ChannelSlice {
    /// `[time_seconds, value]` points of the visible window.
    pub points: Vec<[f64; 2]>,
    pub color: ChannelColor,
    pub visible: bool,
    pub label: String,
}

/// Everything the rendering layer needs to draw one panel at one position.
#[derive(Debug, Clone)]
pub struct PanelFrame {
    /// Sample index of the window's left edge.
    pub position: usize,
    /// Time axis range in seconds.
    pub x_range: (f64, f64),
    /// Value axis range after zoom/pan.
    pub y_range: (f64, f64),
    pub channels: Vec<ChannelSlice>,
}

/// One of the two signal-viewing contexts.
#[derive(Debug)]
pub struct Panel {
    pub channels: ChannelSet,
    pub view: ViewTransform,
    pub clock: PlaybackClock,
    sample_rate: f64,
    /// (min, max) over all loaded channels; feeds the axis range.
    data_extent: Option<(f64, f64)>,
    /// (min, max) over the last rendered window; feeds the pan clamps.
    window_extent: Option<(f64, f64)>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            channels: ChannelSet::new(),
            view: ViewTransform::new(),
            clock: PlaybackClock::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            data_extent: None,
            window_extent: None,
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn data_extent(&self) -> Option<(f64, f64)> {
        self.data_extent
    }

    pub fn window_extent(&self) -> Option<(f64, f64)> {
        self.window_extent
    }

    /// Total sample count driving playback boundary and slider mapping
    /// (the first channel is authoritative).
    pub fn total_samples(&self) -> Option<usize> {
        self.channels.first_len()
    }

    /// Load a new recording into this panel. The first recording fixes the
    /// panel's sampling rate; the clock starts if the panel was empty.
    pub fn load<S: Into<String>>(
        &mut self,
        samples: Vec<f64>,
        label: S,
        sample_rate: f64,
    ) -> Result<usize> {
        self.attach(Channel::new(samples, label.into()), sample_rate)
    }

    /// Append an existing channel (freshly loaded or migrated from the
    /// other panel). Starts the clock when the set was empty; the clock and
    /// view transform are otherwise untouched.
    pub fn attach(&mut self, channel: Channel, sample_rate: f64) -> Result<usize> {
        let was_empty = self.channels.is_empty();
        let index = self.channels.add(channel)?;
        if was_empty {
            self.sample_rate = sample_rate;
            self.clock.start();
        }
        self.data_extent = self.channels.value_extent();
        Ok(index)
    }

    /// Remove a channel and return it for migration. When the panel becomes
    /// empty its clock is stopped and rewound to 0.
    pub fn detach(&mut self, index: usize) -> Result<Channel> {
        let channel = self.channels.remove(index)?;
        if self.channels.is_empty() {
            self.clock.stop();
            self.clock.set_position(0);
            self.window_extent = None;
        }
        self.data_extent = self.channels.value_extent();
        Ok(channel)
    }

    pub fn rename<S: Into<String>>(&mut self, index: usize, label: S) -> Result<()> {
        self.channels.rename(index, label)
    }

    pub fn set_color(&mut self, index: usize, color: ChannelColor) -> Result<()> {
        self.channels.set_color(index, color)
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        self.channels.set_visible(index, visible)
    }

    /// Compute the frame for a given window position.
    ///
    /// Returns `None` when the panel has no channels, or when `position`
    /// lies past the last full window: the display freezes at the previous
    /// frame while the clock keeps ticking internally.
    pub fn frame_at(&mut self, position: usize) -> Option<PanelFrame> {
        let total = self.total_samples()?;
        if position + WINDOW_SIZE > total {
            return None;
        }

        let mut window_min = f64::INFINITY;
        let mut window_max = f64::NEG_INFINITY;
        let mut slices = Vec::with_capacity(self.channels.len());
        for (index, channel) in self.channels.iter().enumerate() {
            // Equal channel lengths are assumed, not enforced: a shorter
            // channel yields a truncated slice here (see ChannelSet::window).
            let window = self
                .channels
                .window(index, position, WINDOW_SIZE)
                .unwrap_or(&[]);
            let mut points = Vec::with_capacity(window.len());
            for (k, &v) in window.iter().enumerate() {
                if v < window_min {
                    window_min = v;
                }
                if v > window_max {
                    window_max = v;
                }
                points.push([(position + k) as f64 / self.sample_rate, v]);
            }
            slices.push(ChannelSlice {
                points,
                color: channel.color,
                visible: channel.visible,
                label: channel.label.clone(),
            });
        }
        if window_min.is_finite() && window_max.is_finite() {
            self.window_extent = Some((window_min, window_max));
        }

        let y_range = self
            .view
            .axis_range(self.data_extent.unwrap_or((0.0, 1.0)));
        self.clock.note_position(position);
        Some(PanelFrame {
            position,
            x_range: (
                position as f64 / self.sample_rate,
                (position + WINDOW_SIZE) as f64 / self.sample_rate,
            ),
            y_range,
            channels: slices,
        })
    }

    /// Advance one tick if the clock is running and compute the new frame.
    /// The position advances even when the frame is frozen (`None`).
    pub fn tick(&mut self) -> Option<PanelFrame> {
        if !self.clock.running() {
            return None;
        }
        let position = self.clock.tick();
        self.frame_at(position)
    }

    /// Re-render the current position without advancing (used after zoom,
    /// pan, recolor or seek while paused).
    pub fn refresh(&mut self) -> Option<PanelFrame> {
        self.frame_at(self.clock.position())
    }

    /// Pan the view, clamped against the last rendered window's extent.
    pub fn pan(&mut self, direction: PanDirection) {
        if let Some(extent) = self.window_extent {
            self.view.pan(direction, extent);
        }
    }

    /// Scrub-control value for the current position.
    pub fn slider_value(&self, slider_max: u32) -> u32 {
        match self.total_samples() {
            Some(total) if total > 0 => {
                let v = self.clock.position() as u64 * slider_max as u64 / total as u64;
                v.min(slider_max as u64) as u32
            }
            _ => 0,
        }
    }

    /// Map a scrub-control value back to a sample position and seek there.
    /// Seeks are bounded by the high-water mark: positions that have never
    /// been played are unreachable. Returns the new position if accepted.
    pub fn seek_from_slider(&mut self, value: u32, slider_max: u32) -> Option<usize> {
        let total = self.total_samples()?;
        if slider_max == 0 {
            return None;
        }
        let target = (value as u64 * total as u64 / slider_max as u64) as usize;
        if target < self.clock.high_water() {
            self.clock.set_position(target);
            Some(target)
        } else {
            None
        }
    }

    /// Reset the position to the start of the recording. Does not resume a
    /// stopped clock and does not touch the view transform.
    pub fn rewind(&mut self) {
        self.clock.set_position(0);
    }
}
