//! Channel for feeding loaded recordings into the running UI.
//!
//! File parsing happens wherever the data comes from (the CSV loader, a
//! converter, a test); the resulting sample buffer is handed over as a
//! [`SignalCommand`] and ingested by the app on its next update.

use std::sync::mpsc::{Receiver, Sender};

use crate::data::monitor::PanelId;

/// Messages sent over the channel to drive the viewer.
pub enum SignalCommand {
    /// Attach a new recording to the given panel.
    Load {
        panel: PanelId,
        label: String,
        samples: Vec<f64>,
        sample_rate: f64,
    },
}

/// Convenience sender for feeding recordings into the viewer.
#[derive(Clone)]
pub struct SignalSink {
    tx: Sender<SignalCommand>,
}

impl SignalSink {
    /// Send a recording to one of the two panels.
    pub fn load_channel<S: Into<String>>(
        &self,
        panel: PanelId,
        label: S,
        samples: Vec<f64>,
        sample_rate: f64,
    ) -> Result<(), std::sync::mpsc::SendError<SignalCommand>> {
        self.tx.send(SignalCommand::Load {
            panel,
            label: label.into(),
            samples,
            sample_rate,
        })
    }
}

/// Create a new channel pair for the viewer: `(SignalSink, Receiver<SignalCommand>)`.
pub fn channel_signals() -> (SignalSink, Receiver<SignalCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (SignalSink { tx }, rx)
}
