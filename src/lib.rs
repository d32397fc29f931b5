//! VitalScope: a dual-panel viewer for multi-channel time-series recordings.
//!
//! The crate is split into a playback/view-state core and a thin egui UI:
//! - `data`: channels, playback clock, view transform, panels and the
//!   dual-panel monitor with link coordination — everything that decides
//!   *what* window and range to show.
//! - `sink`: a channel to feed recordings into the running viewer.
//! - `persistence`: session state save/load.
//! - `app`: the eframe application and native run helper.

pub mod app;
pub mod data;
pub mod error;
pub mod persistence;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_monitor, MonitorApp};
pub use data::channel::{Channel, ChannelColor, ChannelSet};
pub use data::clock::{PlaybackClock, PlaybackSpeed};
pub use data::monitor::{Monitor, PanelId};
pub use data::panel::{Panel, PanelFrame, DEFAULT_SAMPLE_RATE, WINDOW_SIZE};
pub use data::view::{PanDirection, ViewTransform};
pub use error::MonitorError;
pub use sink::{channel_signals, SignalCommand, SignalSink};
