//! The egui application: two plot columns over one [`Monitor`].
//!
//! Everything the UI decides to draw comes out of the core as a
//! [`PanelFrame`]; this layer only schedules ticks off the wall clock,
//! forwards widget interactions as monitor commands, and harvests
//! screenshot events into PNG files.

mod panel_ui;
mod run;

pub use run::run_monitor;

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use chrono::Local;
use eframe::egui;
use image::{Rgba, RgbaImage};

use crate::data::export::{report_rows, write_report_csv};
use crate::data::monitor::{Monitor, PanelId};
use crate::data::panel::PanelFrame;
use crate::persistence;
use crate::sink::SignalCommand;

/// Resolution of the scrub slider.
pub(crate) const SLIDER_MAX: u32 = 1000;

/// Per-panel widget state that is not part of the core: the combo
/// selection is explicit UI state and is passed into every command.
#[derive(Default)]
pub(crate) struct PanelUi {
    pub selected: Option<usize>,
    pub renaming: bool,
    pub rename_buf: String,
    pub slider: u32,
    pub slider_dragging: bool,
    pub slider_was_running: bool,
}

pub struct MonitorApp {
    pub(crate) monitor: Monitor,
    rx: Option<Receiver<SignalCommand>>,
    pub(crate) panel_ui: [PanelUi; 2],
    pub(crate) last_frame: [Option<PanelFrame>; 2],
    next_tick: [Instant; 2],
    pub(crate) snapshots: Vec<PathBuf>,
    snapshot_dir: PathBuf,
    pub(crate) notice: Option<String>,
}

impl MonitorApp {
    pub fn new(rx: Option<Receiver<SignalCommand>>) -> Self {
        let snapshot_dir = PathBuf::from("snapshots");
        if let Err(e) = std::fs::create_dir_all(&snapshot_dir) {
            log::warn!("could not create snapshot directory: {e}");
        }
        Self {
            monitor: Monitor::new(),
            rx,
            panel_ui: [PanelUi::default(), PanelUi::default()],
            last_frame: [None, None],
            next_tick: [Instant::now(), Instant::now()],
            snapshots: Vec::new(),
            snapshot_dir,
            notice: None,
        }
    }

    /// Surface a rejected command as a non-fatal notice.
    pub(crate) fn report_error(&mut self, err: impl std::fmt::Display) {
        log::warn!("{err}");
        self.notice = Some(err.to_string());
    }

    fn drain_sink(&mut self) {
        let Some(rx) = &self.rx else { return };
        let mut loaded = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            loaded.push(cmd);
        }
        for cmd in loaded {
            match cmd {
                SignalCommand::Load {
                    panel,
                    label,
                    samples,
                    sample_rate,
                } => {
                    if let Err(e) = self
                        .monitor
                        .panel_mut(panel)
                        .load(samples, label, sample_rate)
                    {
                        self.report_error(e);
                    }
                }
            }
        }
    }

    /// Advance running clocks that are due and refresh paused panels, so
    /// zoom/pan/seek/recolor changes show up without a tick.
    fn advance_panels(&mut self) {
        let now = Instant::now();
        for id in PanelId::BOTH {
            let i = id.index();
            let panel = self.monitor.panel_mut(id);
            if panel.clock.running() {
                if now >= self.next_tick[i] {
                    if let Some(frame) = panel.tick() {
                        self.last_frame[i] = Some(frame);
                    }
                    self.next_tick[i] = now + panel.clock.speed().interval();
                }
            } else if let Some(frame) = panel.refresh() {
                self.last_frame[i] = Some(frame);
            }
            if !self.panel_ui[i].slider_dragging {
                self.panel_ui[i].slider = self.monitor.panel(id).slider_value(SLIDER_MAX);
            }
        }
    }

    fn load_csv_into(&mut self, id: PanelId) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        match crate::data::export::load_voltage_csv(&path) {
            Ok(samples) => {
                let label = format!("plot{}", self.monitor.panel(id).channels.len());
                if let Err(e) = self.monitor.panel_mut(id).load(
                    samples,
                    label,
                    crate::data::panel::DEFAULT_SAMPLE_RATE,
                ) {
                    self.report_error(e);
                } else {
                    log::info!("loaded {} into {}", path.display(), id.label());
                }
            }
            Err(e) => self.report_error(format!("failed to read {}: {e}", path.display())),
        }
    }

    pub(crate) fn make_report(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("report.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        let rows = report_rows(&self.monitor);
        let result = std::fs::File::create(&path)
            .and_then(|f| write_report_csv(f, Local::now(), &rows, &self.snapshots));
        match result {
            Ok(()) => {
                log::info!("report written to {}", path.display());
                // Snapshots are bundled once; the next report starts fresh.
                self.snapshots.clear();
            }
            Err(e) => self.report_error(format!("failed to write report: {e}")),
        }
    }

    fn save_session(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("session.json")
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        if let Err(e) = persistence::save_session(&path, &self.monitor) {
            self.report_error(format!("failed to save session: {e}"));
        } else {
            log::info!("session saved to {}", path.display());
        }
    }

    fn load_session(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match persistence::load_session(&path) {
            Ok(session) => session.apply_to(&mut self.monitor),
            Err(e) => self.report_error(format!("failed to load session: {e}")),
        }
    }

    /// Save a pending viewport capture delivered by the backend.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };
        let name = format!("snapshot_{}.png", Local::now().format("%Y%m%d%H%M%S%3f"));
        let path = self.snapshot_dir.join(name);
        let egui::ColorImage {
            size: [w, h],
            pixels,
            ..
        } = &*image_arc;
        let mut out = RgbaImage::new(*w as u32, *h as u32);
        for y in 0..*h {
            for x in 0..*w {
                let p = pixels[y * *w + x];
                out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }
        if let Err(e) = out.save(&path) {
            self.report_error(format!("failed to save snapshot: {e}"));
        } else {
            log::info!("saved snapshot to {}", path.display());
            self.snapshots.push(path);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open in Graph 1…").clicked() {
                        self.load_csv_into(PanelId::Left);
                        ui.close();
                    }
                    if ui.button("Open in Graph 2…").clicked() {
                        self.load_csv_into(PanelId::Right);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Save session…").clicked() {
                        self.save_session();
                        ui.close();
                    }
                    if ui.button("Load session…").clicked() {
                        self.load_session();
                        ui.close();
                    }
                });
                ui.menu_button("Report", |ui| {
                    if ui.button("Make a report…").clicked() {
                        self.make_report();
                        ui.close();
                    }
                });

                if self.notice.is_some() {
                    ui.separator();
                    let text = self.notice.clone().unwrap_or_default();
                    ui.colored_label(egui::Color32::LIGHT_RED, text);
                    if ui.small_button("✕").clicked() {
                        self.notice = None;
                    }
                }
            });
        });
    }
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_sink();
        self.advance_panels();
        self.menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.panel_column(&mut cols[0], PanelId::Left);
                self.panel_column(&mut cols[1], PanelId::Right);
            });
        });

        self.handle_screenshot_result(ctx);
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
