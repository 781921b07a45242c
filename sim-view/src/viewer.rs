//! Interactive 3D chaotic attractor viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation engine
//! and implements [`eframe::App`] to render and control the
//! simulation through an egui UI. The viewer is the external
//! collaborator of the engine's tick model: it calls
//! [`SimulationEngine::tick`] once per frame while running and reads
//! trail/history snapshots at frame boundaries only.

use eframe::App;
use glam::{DVec3, Vec2};
use sim_core::{config::SimConfig, engine::SimulationEngine};

/// Chart line colors for the x, y and z histories.
const CHART_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(0x00, 0xb8, 0x94),
    egui::Color32::from_rgb(0x74, 0xb9, 0xff),
    egui::Color32::from_rgb(0xe1, 0x70, 0x55),
];

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: one [`SimulationEngine`] owning all state.
/// - UI configuration (pan/zoom/turntable angle, run state).
/// - Pending textual parameter edits for the active attractor.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Advance the wall-clock driver for the elapsed-time display.
/// 2. Handle UI interactions / input.
/// 3. If `running`, call [`SimulationEngine::tick`] once.
/// 4. Render the projected trail, the coordinate charts and readouts.
pub struct Viewer {
    engine: SimulationEngine,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,
    /// Turntable angle around the vertical axis, in radians.
    yaw: f32,

    /// Pending textual parameter edits, in the active attractor's
    /// parameter order. Applied as a batch on "Update parameters".
    param_edits: Vec<(String, String)>,
    /// Parameter names whose edits failed to parse on the last apply.
    dropped_edits: Vec<String>,

    /// egui time stamp up to which wall-clock seconds were counted.
    last_clock_time: f64,
}

impl Viewer {
    /// Creates a viewer around a default-configured engine.
    ///
    /// The simulation starts running immediately, with the Lorenz
    /// system active, a moderate zoom and a slight turntable angle so
    /// that depth along z is visible.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let engine = SimulationEngine::new(SimConfig::default());

        let mut viewer = Self {
            engine,
            running: true,
            zoom: 8.0,
            pan: egui::vec2(0.0, 0.0),
            yaw: 0.6,
            param_edits: Vec::new(),
            dropped_edits: Vec::new(),
            last_clock_time: 0.0,
        };
        viewer.refresh_param_edits();
        viewer
    }

    /// Reloads the textual parameter edits from the engine.
    ///
    /// Called after construction, after an attractor switch and after
    /// an apply, so dropped or stale edits revert to the values
    /// actually in effect.
    fn refresh_param_edits(&mut self) {
        let id = self.engine.active_attractor().id;
        self.param_edits = self
            .engine
            .parameters(id)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name.to_string(), format!("{value}")))
            .collect();
    }

    /// Switches the active attractor and refreshes the edit fields.
    fn select_attractor(&mut self, id: &str) {
        if self.engine.set_active_attractor(id).is_ok() {
            self.dropped_edits.clear();
            self.refresh_param_edits();
        }
    }

    /// Parses the pending edits and applies the numeric ones.
    ///
    /// Non-numeric edits are dropped (the prior value stays in
    /// effect) and reported via `dropped_edits`. Applying resets the
    /// simulation run, collapsing the trail onto the initial point.
    fn apply_param_edits(&mut self) {
        self.dropped_edits.clear();

        let mut updates = Vec::with_capacity(self.param_edits.len());
        for (name, raw) in &self.param_edits {
            match SimulationEngine::parse_parameter(name, raw) {
                Ok(value) => updates.push((name.clone(), value)),
                Err(_) => self.dropped_edits.push(name.clone()),
            }
        }

        let id = self.engine.active_attractor().id;
        let pairs: Vec<(&str, f64)> = updates.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        if self.engine.apply_parameters(id, pairs).is_ok() {
            self.refresh_param_edits();
        }
    }

    /// Projects a 3D point onto the drawing plane using a simple
    /// turntable rotation around the vertical axis.
    ///
    /// At `yaw = 0` this maps `(x, y, z)` to `(x, y)`; rotating the
    /// turntable mixes z into the horizontal screen direction.
    fn project(&self, p: DVec3) -> Vec2 {
        let (sin, cos) = self.yaw.sin_cos();
        let x = p.x as f32;
        let z = p.z as f32;
        Vec2::new(x * cos + z * sin, p.y as f32)
    }

    /// Converts a projected world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and
    /// then centered inside the given `rect`. The y-axis is flipped so
    /// that positive y goes up in world space.
    ///
    /// ### Parameters
    /// - `p` - Projected world-space position.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to projected world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to
    /// floating point rounding), using the same `zoom`, `pan`, and
    /// `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Counts whole wall-clock seconds into the engine's clock.
    ///
    /// Runs regardless of whether the simulation is paused, like the
    /// elapsed-time display it feeds; it never touches any buffer.
    fn drive_clock(&mut self, now: f64) {
        if self.last_clock_time == 0.0 {
            self.last_clock_time = now;
        }
        while now - self.last_clock_time >= 1.0 {
            self.engine.clock_tick();
            self.last_clock_time += 1.0;
        }
    }

    /// Builds the top panel UI (run controls, turntable, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.engine.tick();
                }

                if ui.button("Reset").clicked() {
                    self.engine.reset();
                }

                ui.separator();
                ui.add(
                    egui::Slider::new(&mut self.yaw, 0.0..=std::f32::consts::TAU).text("Yaw"),
                );
                ui.add(egui::Slider::new(&mut self.zoom, 0.5..=40.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (elapsed time, coordinates, state).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {}", self.engine.elapsed_formatted()));
                ui.separator();

                let p = self.engine.current_position();
                ui.label(format!("x = {:.4}  y = {:.4}  z = {:.4}", p.x, p.y, p.z));
                ui.separator();

                ui.label(self.engine.active_attractor().name);
                ui.label(if self.running { "ACTIVE" } else { "PAUSED" });
            });
        });
    }

    /// Builds the right-hand panel: attractor selection, description
    /// and parameter editing.
    fn ui_attractor_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("attractor_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Attractors");

                let active_id = self.engine.active_attractor().id;
                let mut clicked: Option<&'static str> = None;
                for info in self.engine.attractor_list() {
                    if ui
                        .selectable_label(info.id == active_id, info.name)
                        .clicked()
                    {
                        clicked = Some(info.id);
                    }
                }
                if let Some(id) = clicked {
                    self.select_attractor(id);
                }

                ui.separator();
                ui.label(self.engine.active_attractor().description);

                ui.separator();
                ui.heading("Parameters");

                let specs = self.engine.active_attractor().kind.param_specs();
                for (i, (_, raw)) in self.param_edits.iter_mut().enumerate() {
                    let spec = &specs[i];
                    ui.horizontal(|ui| {
                        ui.label(format!("{}:", spec.symbol));
                        ui.add(egui::TextEdit::singleline(raw).desired_width(90.0))
                            .on_hover_text(format!(
                                "{} – {} (step {})",
                                spec.min, spec.max, spec.step
                            ));
                    });
                }

                if ui.button("Update parameters").clicked() {
                    self.apply_param_edits();
                }

                if !self.dropped_edits.is_empty() {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        format!("dropped: {}", self.dropped_edits.join(", ")),
                    );
                }
            });
    }

    /// Builds the bottom strip with one time-series chart per axis.
    fn ui_charts_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("charts_panel")
            .exact_height(110.0)
            .show(ctx, |ui| {
                let histories = self.engine.coordinate_histories();
                let ranges = self.engine.active_attractor().graph_ranges;
                let series = [&histories.x, &histories.y, &histories.z];
                let labels = ["x", "y", "z"];

                ui.columns(3, |cols| {
                    for (i, col) in cols.iter_mut().enumerate() {
                        col.label(labels[i]);
                        let (rect, _) = col.allocate_exact_size(
                            col.available_size(),
                            egui::Sense::hover(),
                        );
                        let painter = col.painter_at(rect);
                        Self::draw_history(
                            &painter,
                            rect,
                            series[i],
                            ranges[i].min,
                            ranges[i].max,
                            CHART_COLORS[i],
                        );
                    }
                });
            });
    }

    /// Draws one axis history as a polyline inside `rect`.
    ///
    /// The y mapping uses the attractor's fixed chart range rather
    /// than auto-fitting, so the curve's drift is visible against a
    /// stable scale. Values outside the range simply draw outside the
    /// strip.
    fn draw_history(
        painter: &egui::Painter,
        rect: egui::Rect,
        values: &[f64],
        min: f64,
        max: f64,
        color: egui::Color32,
    ) {
        if values.len() < 2 {
            return;
        }

        let span = (max - min) as f32;
        let points: Vec<egui::Pos2> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let t = i as f32 / (values.len() - 1) as f32;
                let x = rect.left() + t * rect.width();
                let norm = ((v as f32) - min as f32) / span;
                let y = rect.bottom() - norm * rect.height();
                egui::pos2(x, y)
            })
            .collect();

        painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, color)));
    }

    /// Builds the central panel where the projected trail is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.5, 40.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Draw the trail, oldest points dimmest.
            let field = self.engine.active_attractor();
            let [r, g, b] = field.color;
            let color = egui::Color32::from_rgb(r, g, b);
            let trail = self.engine.trail_snapshot();
            let n = trail.len();

            for (i, &p) in trail.iter().enumerate() {
                let screen = self.world_to_screen(self.project(p), rect);
                let fade = (i + 1) as f32 / n as f32;
                let alpha = (40.0 + 215.0 * fade) as u8;
                painter.circle_filled(
                    screen,
                    1.0,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
                );
            }

            // Current position marker, drawn in display space.
            let head = self.engine.current_position() * field.scale;
            let head_screen = self.world_to_screen(self.project(head), rect);
            painter.circle_filled(head_screen, 3.0, egui::Color32::WHITE);
            painter.circle_stroke(head_screen, 5.0, egui::Stroke::new(1.0, color));

            // Auto-run: one simulation tick per frame.
            if self.running {
                self.engine.tick();
                ctx.request_repaint();
            } else {
                // Keep the elapsed-time display moving while paused.
                ctx.request_repaint_after(std::time::Duration::from_millis(250));
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Advances the wall-clock driver for the elapsed-time display.
    /// - Renders the top control bar, status bar and chart strip.
    /// - Renders the attractor side panel.
    /// - Draws the central trail view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.drive_clock(now);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_charts_panel(ctx);
        self.ui_attractor_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn projection_at_zero_yaw_drops_the_z_axis() {
        let mut viewer = Viewer::new();
        viewer.yaw = 0.0;

        let p = viewer.project(DVec3::new(1.5, -2.0, 7.0));
        assert!((p.x - 1.5).abs() < 1e-6);
        assert!((p.y - -2.0).abs() < 1e-6);
    }

    #[test]
    fn projection_at_quarter_turn_shows_the_z_axis() {
        let mut viewer = Viewer::new();
        viewer.yaw = std::f32::consts::FRAC_PI_2;

        let p = viewer.project(DVec3::new(1.5, -2.0, 7.0));
        // At 90° the horizontal direction is dominated by z.
        assert!((p.x - 7.0).abs() < 1e-4);
        assert!((p.y - -2.0).abs() < 1e-6);
    }

    #[test]
    fn new_viewer_starts_running_with_lorenz_edits() {
        let viewer = Viewer::new();

        assert!(viewer.running);
        assert_eq!(viewer.engine.active_attractor().id, "lorenz");

        let names: Vec<&str> = viewer.param_edits.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["sigma", "rho", "beta"]);
        assert_eq!(viewer.param_edits[0].1, "10");
    }

    #[test]
    fn selecting_an_attractor_refreshes_the_edit_fields() {
        let mut viewer = Viewer::new();

        viewer.select_attractor("rossler");

        assert_eq!(viewer.engine.active_attractor().id, "rossler");
        let names: Vec<&str> = viewer.param_edits.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(viewer.param_edits[2].1, "5.7");
    }

    #[test]
    fn apply_updates_numeric_edits_and_resets_the_run() {
        let mut viewer = Viewer::new();
        for _ in 0..10 {
            viewer.engine.tick();
        }

        viewer.param_edits[0].1 = "12.5".to_string();
        viewer.apply_param_edits();

        assert!(viewer.dropped_edits.is_empty());
        let params = viewer.engine.parameters("lorenz").unwrap();
        assert_eq!(params[0], ("sigma", 12.5));
        // Applying restarts the run from the initial point.
        assert_eq!(
            viewer.engine.current_position(),
            DVec3::new(0.1, 0.0, 0.0)
        );
    }

    #[test]
    fn apply_drops_non_numeric_edits_and_keeps_prior_values() {
        let mut viewer = Viewer::new();

        viewer.param_edits[1].1 = "plenty".to_string();
        viewer.apply_param_edits();

        assert_eq!(viewer.dropped_edits, vec!["rho".to_string()]);

        // The prior value is retained and the edit field reverts.
        let params = viewer.engine.parameters("lorenz").unwrap();
        assert_eq!(params[1], ("rho", 28.0));
        assert_eq!(viewer.param_edits[1].1, "28");
    }

    #[test]
    fn drive_clock_counts_whole_seconds_only() {
        let mut viewer = Viewer::new();

        viewer.drive_clock(5.0);
        assert_eq!(viewer.engine.elapsed_seconds(), 0);

        viewer.drive_clock(5.4);
        assert_eq!(viewer.engine.elapsed_seconds(), 0);

        viewer.drive_clock(8.2);
        assert_eq!(viewer.engine.elapsed_seconds(), 3);
        assert_eq!(viewer.engine.elapsed_formatted(), "00:00:03");
    }
}
