//! Playback clock: the per-panel position cursor driven by a periodic tick.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Playback speed as offered by the UI combo. Each speed maps to the tick
/// interval the panel is advanced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    Half,
    Normal,
    OneAndHalf,
    Double,
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        PlaybackSpeed::Normal
    }
}

impl PlaybackSpeed {
    /// Combo order: 0.5x, 1x, 1.5x, 2x.
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndHalf,
        PlaybackSpeed::Double,
    ];

    pub fn interval_ms(self) -> u64 {
        match self {
            PlaybackSpeed::Half => 300,
            PlaybackSpeed::Normal => 200,
            PlaybackSpeed::OneAndHalf => 100,
            PlaybackSpeed::Double => 50,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Half => "0.5x",
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::OneAndHalf => "1.5x",
            PlaybackSpeed::Double => "2x",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(1)
    }
}

/// Position cursor for one panel.
///
/// While running, each tick emits the current position (the left edge of the
/// visible sample window) and then increments it by one. The clock itself has
/// no notion of sample-buffer length; the panel decides whether an emitted
/// position still yields a renderable window. `high_water` is the furthest
/// position ever rendered and bounds manual slider seeks.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    position: usize,
    speed: PlaybackSpeed,
    running: bool,
    high_water: usize,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            position: 0,
            speed: PlaybackSpeed::default(),
            running: false,
            high_water: 0,
        }
    }
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// (Re)enable tick delivery. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disable tick delivery; the position is retained. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Seek to a position. Valid whether running or stopped; never resumes
    /// a stopped clock by itself.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Change the tick cadence; takes effect on the next scheduled tick.
    /// Never resumes a stopped clock.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// One tick: emit the current position, then advance by one sample.
    pub fn tick(&mut self) -> usize {
        let emitted = self.position;
        self.position += 1;
        self.note_position(emitted);
        emitted
    }

    /// Raise the high-water mark to `position` if it lies beyond it.
    pub fn note_position(&mut self, position: usize) {
        if position > self.high_water {
            self.high_water = position;
        }
    }
}
