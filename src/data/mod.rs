pub mod channel;
pub mod clock;
pub mod export;
pub mod monitor;
pub mod panel;
pub mod stats;
pub mod view;
