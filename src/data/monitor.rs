//! The dual-panel monitor: command dispatch and panel linking.
//!
//! All UI commands flow through [`Monitor`]. When the two panels are linked,
//! the transport commands (pause/resume, zoom, rewind, speed, seek) issued
//! against either panel are re-applied to both; channel mutations and pan
//! gestures stay per-panel. Each panel keeps its own sample-array length,
//! so a linked seek maps the shared slider value through each panel's own
//! recording length.

use crate::data::channel::ChannelColor;
use crate::data::clock::PlaybackSpeed;
use crate::data::panel::Panel;
use crate::data::view::PanDirection;
use crate::error::Result;

/// Identifies one of the two viewing panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Left,
    Right,
}

impl PanelId {
    pub fn other(self) -> PanelId {
        match self {
            PanelId::Left => PanelId::Right,
            PanelId::Right => PanelId::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PanelId::Left => 0,
            PanelId::Right => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelId::Left => "Graph 1",
            PanelId::Right => "Graph 2",
        }
    }

    pub const BOTH: [PanelId; 2] = [PanelId::Left, PanelId::Right];
}

/// Two panels plus the link coordinator.
#[derive(Debug, Default)]
pub struct Monitor {
    panels: [Panel; 2],
    linked: bool,
}

impl Monitor {
    pub fn new() -> Self {
        Self {
            panels: [Panel::new(), Panel::new()],
            linked: false,
        }
    }

    pub fn panel(&self, id: PanelId) -> &Panel {
        &self.panels[id.index()]
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut Panel {
        &mut self.panels[id.index()]
    }

    pub fn linked(&self) -> bool {
        self.linked
    }

    /// Pause playback. Mirrored to both panels while linked.
    pub fn pause(&mut self, id: PanelId) {
        for p in self.affected(id) {
            self.panels[p].clock.stop();
        }
    }

    /// Resume playback. Mirrored while linked; an empty panel stays
    /// stopped (no channels means nothing to play).
    pub fn resume(&mut self, id: PanelId) {
        for p in self.affected(id) {
            if !self.panels[p].channels.is_empty() {
                self.panels[p].clock.start();
            }
        }
    }

    pub fn zoom_in(&mut self, id: PanelId) {
        for p in self.affected(id) {
            self.panels[p].view.zoom_in();
        }
    }

    pub fn zoom_out(&mut self, id: PanelId) {
        for p in self.affected(id) {
            self.panels[p].view.zoom_out();
        }
    }

    /// Reset the playback position to 0. Mirrored while linked. A paused
    /// panel stays paused; the UI simply re-renders it at position 0.
    pub fn rewind(&mut self, id: PanelId) {
        for p in self.affected(id) {
            self.panels[p].rewind();
        }
    }

    pub fn set_speed(&mut self, id: PanelId, speed: PlaybackSpeed) {
        for p in self.affected(id) {
            self.panels[p].clock.set_speed(speed);
        }
    }

    /// Pan gestures are always per-panel, linked or not.
    pub fn pan(&mut self, id: PanelId, direction: PanDirection) {
        self.panel_mut(id).pan(direction);
    }

    /// Seek from a scrub-control value. The seek is accepted only if the
    /// issuing panel's mapped target lies below its high-water mark; while
    /// linked, the accepted value is then mapped through each panel's own
    /// recording length.
    pub fn seek(&mut self, id: PanelId, value: u32, slider_max: u32) -> Option<usize> {
        let target = self.panel_mut(id).seek_from_slider(value, slider_max)?;
        if self.linked {
            self.panel_mut(id.other()).seek_from_slider(value, slider_max);
        }
        Some(target)
    }

    /// Engage or disengage the link.
    ///
    /// Engaging forces the right panel's zoom scale, pan offset and speed to
    /// mirror the left panel's, and transfers the left panel's transport
    /// state: if the left panel is paused, both end up paused; otherwise the
    /// right panel starts running. Disengaging leaves both panels with their
    /// last-known state, fully independent again.
    pub fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
        if !linked {
            return;
        }
        let view = self.panel(PanelId::Left).view;
        let speed = self.panel(PanelId::Left).clock.speed();
        let left_running = self.panel(PanelId::Left).clock.running();
        let right = self.panel_mut(PanelId::Right);
        right.view = view;
        right.clock.set_speed(speed);
        if left_running {
            if !right.channels.is_empty() {
                right.clock.start();
            }
        } else {
            right.clock.stop();
            self.panel_mut(PanelId::Left).clock.stop();
        }
    }

    /// Set the link flag without the engage-time mirroring; used when
    /// restoring a saved session, where both panels already carry their
    /// last-known state.
    pub fn restore_linked(&mut self, linked: bool) {
        self.linked = linked;
    }

    /// Migrate a channel to the other panel: detach from the source
    /// (stopping its clock if it empties), attach to the destination
    /// (starting its clock if it was empty). Fails without side effects if
    /// the index is invalid.
    pub fn move_channel(&mut self, from: PanelId, index: usize) -> Result<()> {
        let sample_rate = self.panel(from).sample_rate();
        let channel = self.panel_mut(from).detach(index)?;
        // A channel coming out of a set is never empty, so attach cannot
        // fail; keep the ? anyway to surface future invariant changes.
        self.panel_mut(from.other()).attach(channel, sample_rate)?;
        Ok(())
    }

    pub fn rename_channel<S: Into<String>>(
        &mut self,
        id: PanelId,
        index: usize,
        label: S,
    ) -> Result<()> {
        self.panel_mut(id).rename(index, label)
    }

    pub fn set_channel_color(
        &mut self,
        id: PanelId,
        index: usize,
        color: ChannelColor,
    ) -> Result<()> {
        self.panel_mut(id).set_color(index, color)
    }

    pub fn set_channel_visible(&mut self, id: PanelId, index: usize, visible: bool) -> Result<()> {
        self.panel_mut(id).set_visible(index, visible)
    }

    fn affected(&self, id: PanelId) -> Vec<usize> {
        if self.linked {
            vec![PanelId::Left.index(), PanelId::Right.index()]
        } else {
            vec![id.index()]
        }
    }
}
