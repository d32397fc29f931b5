//! Native entry point for the viewer window.

use eframe::egui;

use crate::sink::SignalCommand;

use super::MonitorApp;

/// Launch the viewer in a native window. Recordings sent through the
/// [`crate::sink::SignalSink`] paired with `rx` appear in their target
/// panel as soon as the UI picks them up. Blocks until the window closes.
pub fn run_monitor(
    rx: std::sync::mpsc::Receiver<SignalCommand>,
    title: &str,
) -> eframe::Result<()> {
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1280.0, 640.0)),
        ..Default::default()
    };
    eframe::run_native(
        title,
        opts,
        Box::new(move |_cc| Ok(Box::new(MonitorApp::new(Some(rx))))),
    )
}
