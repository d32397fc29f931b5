//! Error taxonomy for the playback/view-state core.
//!
//! Structural errors are recovered at the command-handler boundary and shown
//! as a non-fatal notice; they never corrupt channel-set state. Operations on
//! an empty channel set are handled by policy (the panel stops its clock and
//! freezes the display) rather than raised as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// The supplied sample data cannot form a channel (e.g. empty buffer).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation referenced a channel index that does not exist.
    #[error("channel index {index} out of range (panel holds {len} channels)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
