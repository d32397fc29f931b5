//! Session persistence: save and load viewer state to/from JSON files.
//!
//! Only the presentation state is persisted (labels, colors, visibility,
//! speed, zoom/pan, link flag); sample data is re-loaded from its source.
//! Mirror types keep the core free of serialization concerns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::channel::ChannelColor;
use crate::data::clock::PlaybackSpeed;
use crate::data::monitor::{Monitor, PanelId};
use crate::data::panel::Panel;

/// Serializable look of one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelLookSerde {
    pub label: String,
    pub color: ChannelColor,
    pub visible: bool,
}

/// Serializable state of one panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelStateSerde {
    pub speed: PlaybackSpeed,
    pub scale: f64,
    pub pan_offset: f64,
    pub channels: Vec<ChannelLookSerde>,
}

impl From<&Panel> for PanelStateSerde {
    fn from(panel: &Panel) -> Self {
        Self {
            speed: panel.clock.speed(),
            scale: panel.view.scale,
            pan_offset: panel.view.pan_offset,
            channels: panel
                .channels
                .iter()
                .map(|c| ChannelLookSerde {
                    label: c.label.clone(),
                    color: c.color,
                    visible: c.visible,
                })
                .collect(),
        }
    }
}

impl PanelStateSerde {
    /// Apply stored presentation state to a panel. Channel looks are applied
    /// positionally to however many channels are currently loaded.
    pub fn apply_to(&self, panel: &mut Panel) {
        panel.clock.set_speed(self.speed);
        panel.view.scale = self.scale;
        panel.view.pan_offset = self.pan_offset;
        for (index, look) in self.channels.iter().enumerate() {
            if index >= panel.channels.len() {
                break;
            }
            let _ = panel.rename(index, look.label.clone());
            let _ = panel.set_color(index, look.color);
            let _ = panel.set_visible(index, look.visible);
        }
    }
}

/// Serializable state of the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSerde {
    pub left: PanelStateSerde,
    pub right: PanelStateSerde,
    pub linked: bool,
}

impl From<&Monitor> for SessionSerde {
    fn from(monitor: &Monitor) -> Self {
        Self {
            left: monitor.panel(PanelId::Left).into(),
            right: monitor.panel(PanelId::Right).into(),
            linked: monitor.linked(),
        }
    }
}

impl SessionSerde {
    pub fn apply_to(&self, monitor: &mut Monitor) {
        self.left.apply_to(monitor.panel_mut(PanelId::Left));
        self.right.apply_to(monitor.panel_mut(PanelId::Right));
        monitor.restore_linked(self.linked);
    }
}

/// Save session state as pretty-printed JSON.
pub fn save_session<P: AsRef<Path>>(path: P, monitor: &Monitor) -> std::io::Result<()> {
    let state = SessionSerde::from(monitor);
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &state).map_err(std::io::Error::from)
}

/// Load session state from a JSON file.
pub fn load_session<P: AsRef<Path>>(path: P) -> std::io::Result<SessionSerde> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file).map_err(std::io::Error::from)
}
