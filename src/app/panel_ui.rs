//! One panel column: plot area, scrub slider and the two control rows.

use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use crate::data::channel::ChannelColor;
use crate::data::clock::PlaybackSpeed;
use crate::data::monitor::PanelId;
use crate::data::view::PanDirection;

use super::{MonitorApp, SLIDER_MAX};

impl MonitorApp {
    pub(crate) fn panel_column(&mut self, ui: &mut egui::Ui, id: PanelId) {
        let i = id.index();

        // ── Plot area ────────────────────────────────────────────────
        let frame = self.last_frame[i].clone();
        let mut pan_request: Option<PanDirection> = None;
        let plot = Plot::new(format!("signal_plot_{i}"))
            .legend(Legend::default())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude")
            .height(ui.available_height() * 0.55);
        plot.show(ui, |plot_ui| {
            // Vertical drag pans the view; screen y grows downward, so a
            // downward drag moves the visible range up.
            let resp = plot_ui.response();
            if resp.dragged_by(egui::PointerButton::Primary) {
                let dy = resp.drag_delta().y;
                if dy > 0.5 {
                    pan_request = Some(PanDirection::Up);
                } else if dy < -0.5 {
                    pan_request = Some(PanDirection::Down);
                }
            }

            if let Some(frame) = &frame {
                plot_ui.set_plot_bounds_x(frame.x_range.0..=frame.x_range.1);
                if frame.y_range.0 < frame.y_range.1 {
                    plot_ui.set_plot_bounds_y(frame.y_range.0..=frame.y_range.1);
                }
                for slice in &frame.channels {
                    if !slice.visible {
                        continue;
                    }
                    plot_ui.line(
                        Line::new(&slice.label, slice.points.clone())
                            .color(slice.color.to_color32()),
                    );
                }
            }
        });

        if let Some(direction) = pan_request {
            self.monitor.pan(id, direction);
        }

        // ── Scrub slider ─────────────────────────────────────────────
        let mut value = self.panel_ui[i].slider;
        let resp = ui.add(
            egui::Slider::new(&mut value, 0..=SLIDER_MAX)
                .show_value(false)
                .trailing_fill(true),
        );
        self.panel_ui[i].slider = value;
        if resp.drag_started() {
            self.panel_ui[i].slider_dragging = true;
            self.panel_ui[i].slider_was_running = self.monitor.panel(id).clock.running();
            self.monitor.panel_mut(id).clock.stop();
        }
        if resp.drag_stopped() {
            self.panel_ui[i].slider_dragging = false;
            self.monitor.seek(id, value, SLIDER_MAX);
            if self.panel_ui[i].slider_was_running {
                self.monitor.resume(id);
            }
        }

        // ── Transport row ────────────────────────────────────────────
        ui.horizontal(|ui| {
            let running = self.monitor.panel(id).clock.running();
            let label = if running { "Pause" } else { "Resume" };
            if ui.button(label).clicked() {
                if running {
                    self.monitor.pause(id);
                } else {
                    self.monitor.resume(id);
                }
            }
            if ui.button("Zoom In").clicked() {
                self.monitor.zoom_in(id);
            }
            if ui.button("Zoom Out").clicked() {
                self.monitor.zoom_out(id);
            }
            if ui.button("Rewind").clicked() {
                self.monitor.rewind(id);
            }
            ui.label("Speed");
            let mut speed = self.monitor.panel(id).clock.speed();
            let before = speed;
            egui::ComboBox::from_id_salt(format!("speed_{i}"))
                .selected_text(speed.label())
                .show_ui(ui, |ui| {
                    for s in PlaybackSpeed::ALL {
                        ui.selectable_value(&mut speed, s, s.label());
                    }
                });
            if speed != before {
                self.monitor.set_speed(id, speed);
            }
            if ui.button("Save Photo").clicked() {
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }
        });

        // ── Channel row ──────────────────────────────────────────────
        let labels = self.monitor.panel(id).channels.labels();
        let mut error: Option<String> = None;
        ui.horizontal(|ui| {
            ui.label("Signal");
            let mut selected = self.panel_ui[i].selected;
            if selected.is_some_and(|s| s >= labels.len()) {
                selected = None;
            }
            let selected_text = selected
                .and_then(|s| labels.get(s).cloned())
                .unwrap_or_else(|| "—".to_string());
            egui::ComboBox::from_id_salt(format!("signal_{i}"))
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, label) in labels.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(index), label);
                    }
                });
            self.panel_ui[i].selected = selected;

            ui.label("Color");
            if let Some(sel) = selected {
                let current = self
                    .monitor
                    .panel(id)
                    .channels
                    .get(sel)
                    .map(|c| c.color)
                    .unwrap_or_default();
                let mut color = current;
                egui::ComboBox::from_id_salt(format!("color_{i}"))
                    .selected_text(color.name())
                    .show_ui(ui, |ui| {
                        for c in ChannelColor::ALL {
                            ui.selectable_value(&mut color, c, c.name());
                        }
                    });
                if color != current {
                    if let Err(e) = self.monitor.set_channel_color(id, sel, color) {
                        error = Some(e.to_string());
                    }
                }

                let mut visible = self
                    .monitor
                    .panel(id)
                    .channels
                    .get(sel)
                    .map(|c| c.visible)
                    .unwrap_or(true);
                if ui.checkbox(&mut visible, "Show").changed() {
                    if let Err(e) = self.monitor.set_channel_visible(id, sel, visible) {
                        error = Some(e.to_string());
                    }
                }

                if ui.button("Add a Label").clicked() {
                    self.panel_ui[i].renaming = true;
                    self.panel_ui[i].rename_buf = labels.get(sel).cloned().unwrap_or_default();
                }
                if ui.button(id.other().label()).on_hover_text("Move signal").clicked() {
                    self.panel_ui[i].selected = None;
                    if let Err(e) = self.monitor.move_channel(id, sel) {
                        error = Some(e.to_string());
                    }
                }
            } else {
                ui.weak("(select a signal)");
            }
        });

        // ── Rename editor ────────────────────────────────────────────
        if self.panel_ui[i].renaming {
            let mut apply = false;
            let mut cancel = false;
            ui.horizontal(|ui| {
                let resp = ui.text_edit_singleline(&mut self.panel_ui[i].rename_buf);
                apply = ui.button("OK").clicked()
                    || (resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)));
                cancel = ui.button("Cancel").clicked();
            });
            if apply {
                if let Some(sel) = self.panel_ui[i].selected {
                    let label = self.panel_ui[i].rename_buf.clone();
                    if let Err(e) = self.monitor.rename_channel(id, sel, label) {
                        error = Some(e.to_string());
                    }
                }
                self.panel_ui[i].renaming = false;
            }
            if cancel {
                self.panel_ui[i].renaming = false;
            }
        }

        // ── Footer ───────────────────────────────────────────────────
        match id {
            PanelId::Left => {
                let mut linked = self.monitor.linked();
                if ui.checkbox(&mut linked, "Link the two graphs").changed() {
                    self.monitor.set_linked(linked);
                }
            }
            PanelId::Right => {
                if ui.button("Make a Report").clicked() {
                    self.make_report();
                }
            }
        }

        if let Some(e) = error {
            self.report_error(e);
        }
    }
}
