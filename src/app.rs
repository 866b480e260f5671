use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::actions::{Action, MENU_BAR, POTENTIAL_TOOLBAR, RUN_TOOLBAR};
use crate::canvas::AxesLimits;
use crate::navigation::{ViewBounds, ViewHistory};
use crate::shell::{ActionOutcome, Shell};

pub struct PotentialFractalsApp {
    shell: Shell,
    texture: Option<TextureHandle>,
    last_uploaded_generation: u64,
    history: ViewHistory,
    pending_view: Option<ViewBounds>,
    cursor: Option<PlotPoint>,
    status: Option<String>,
    last_error: Option<String>,
}

impl PotentialFractalsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let shell = Shell::new();
        let home = home_view(shell.canvas().limits());
        Self {
            shell,
            texture: None,
            last_uploaded_generation: 0,
            history: ViewHistory::new(home),
            pending_view: Some(home),
            cursor: None,
            status: None,
            last_error: None,
        }
    }

    fn handle(&mut self, ctx: &egui::Context, action: Action) {
        match self.shell.trigger(action) {
            Ok(ActionOutcome::Drawn { size }) => {
                let home = home_view(self.shell.canvas().limits());
                self.history.reset(home);
                self.pending_view = Some(home);
                self.last_error = None;
                self.status = Some(format!("Canvas {size} x {size}"));
                ctx.request_repaint();
            }
            Ok(ActionOutcome::Saved(path)) => {
                self.last_error = None;
                self.status = Some(format!("Saved {}", path.display()));
            }
            Ok(ActionOutcome::CloseRequested) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Ok(ActionOutcome::Ignored) => {}
            Err(err) => {
                log::warn!("{} failed: {err}", action.label());
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Re-uploads the canvas texture when the canvas was redrawn.
    fn update_texture(&mut self, ctx: &egui::Context) {
        let canvas = self.shell.canvas();
        if canvas.generation() == self.last_uploaded_generation {
            return;
        }

        match canvas.image() {
            Some(heat_map) => {
                let image = ColorImage::from_rgba_unmultiplied(
                    heat_map.dimensions(),
                    &heat_map.to_rgba8(),
                );
                if let Some(texture) = &mut self.texture {
                    texture.set(image, TextureOptions::NEAREST);
                } else {
                    self.texture =
                        Some(ctx.load_texture("heat-map", image, TextureOptions::NEAREST));
                }
            }
            None => self.texture = None,
        }
        self.last_uploaded_generation = canvas.generation();
    }

    fn draw_menu_bar(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Action>) {
        egui::menu::bar(ui, |ui| {
            for menu in &MENU_BAR {
                ui.menu_button(menu.title, |ui| {
                    for &action in menu.actions {
                        if action_button(ui, action) {
                            pending.push(action);
                            ui.close_menu();
                        }
                    }
                });
            }
        });
    }

    fn draw_run_toolbar(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Action>) {
        ui.horizontal_wrapped(|ui| {
            for action in RUN_TOOLBAR {
                if action_button(ui, action) {
                    pending.push(action);
                }
            }

            ui.separator();
            let fields = &mut self.shell.fields;
            ui.label("Time to simulate : ");
            ui.add(egui::TextEdit::singleline(&mut fields.sim_end_time).desired_width(50.0));
            ui.label(" Time between simulation steps : ");
            ui.add(egui::TextEdit::singleline(&mut fields.sim_delta_time).desired_width(30.0));
            ui.label(" Sidelength of Canvas : ");
            ui.add(egui::TextEdit::singleline(&mut fields.canvas_size).desired_width(30.0));
            ui.label(" ratio of distance to pixelsize");
            ui.add(egui::TextEdit::singleline(&mut fields.canvas_scale).desired_width(20.0));
        });
    }

    fn draw_potential_toolbar(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Action>) {
        ui.vertical(|ui| {
            for action in POTENTIAL_TOOLBAR {
                if action_button(ui, action) {
                    pending.push(action);
                }
            }
        });
    }

    /// Home, back and forward through the view history, plus the cursor
    /// readout.
    fn draw_navigation_toolbar(&mut self, ui: &mut egui::Ui) {
        let readout = self.cursor.map(|point| {
            let mut text = format!("x={:.2} y={:.2}", point.x, point.y);
            if let Some(value) = self.value_under(point) {
                text.push_str(&format!(" [{value:.3}]"));
            }
            text
        });

        ui.horizontal(|ui| {
            if ui
                .button("🏠 Home")
                .on_hover_text("Reset original view")
                .clicked()
            {
                self.pending_view = Some(self.history.home());
            }
            if ui
                .add_enabled(self.history.can_go_back(), egui::Button::new("⬅ Back"))
                .on_hover_text("Back to previous view")
                .clicked()
            {
                self.pending_view = self.history.back();
            }
            if ui
                .add_enabled(self.history.can_go_forward(), egui::Button::new("Forward ➡"))
                .on_hover_text("Forward to next view")
                .clicked()
            {
                self.pending_view = self.history.forward();
            }
            ui.separator();
            ui.label("drag to pan, scroll to zoom");
            if let Some(readout) = readout {
                ui.separator();
                ui.monospace(readout);
            }
        });
    }

    fn value_under(&self, point: PlotPoint) -> Option<f32> {
        let heat_map = self.shell.canvas().image()?;
        let side = heat_map.size() as f64;
        if point.x < 0.0 || point.y < 0.0 || point.x >= side || point.y >= side {
            return None;
        }
        Some(heat_map.value(point.x as usize, point.y as usize))
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let side = self.shell.canvas().image().map(|heat_map| heat_map.size());
        let requested = self.pending_view.take();
        let texture = self.texture.as_ref();

        let response = Plot::new("canvas")
            .data_aspect(1.0)
            .show(ui, |plot_ui| {
                if let Some(view) = requested {
                    plot_ui.set_plot_bounds(view.to_plot_bounds());
                }
                if let (Some(texture), Some(side)) = (texture, side) {
                    let half = side as f64 * 0.5;
                    plot_ui.image(PlotImage::new(
                        texture.id(),
                        PlotPoint::new(half, half),
                        egui::vec2(side as f32, side as f32),
                    ));
                }
                plot_ui.pointer_coordinate()
            });

        self.cursor = response.inner;

        let shown = ViewBounds::from(response.transform.bounds());
        if requested.is_some() {
            self.history.replace_current(shown);
        } else {
            let settled = ui.input(|i| {
                !i.pointer.any_down() && i.smooth_scroll_delta == egui::Vec2::ZERO
            });
            if settled {
                self.history.push(shown);
            }
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::from_rgb(230, 100, 100), err);
        } else if let Some(status) = &self.status {
            ui.label(status);
        } else {
            ui.label("Ready");
        }
    }
}

fn home_view(limits: AxesLimits) -> ViewBounds {
    ViewBounds::new([limits.x.0, limits.y.0], [limits.x.1, limits.y.1])
}

/// Placeholder actions render dimmed but stay clickable.
fn action_button(ui: &mut egui::Ui, action: Action) -> bool {
    if action.is_connected() {
        ui.button(action.label()).clicked()
    } else {
        ui.button(egui::RichText::new(action.label()).weak())
            .on_hover_text("Not implemented yet")
            .clicked()
    }
}

impl eframe::App for PotentialFractalsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_texture(ctx);
        let mut pending = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.draw_menu_bar(ui, &mut pending);
        });

        egui::TopBottomPanel::top("run_toolbar").show(ctx, |ui| {
            self.draw_run_toolbar(ui, &mut pending);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.draw_status(ui);
        });

        egui::SidePanel::left("potential_toolbar")
            .resizable(false)
            .show(ctx, |ui| {
                self.draw_potential_toolbar(ui, &mut pending);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_navigation_toolbar(ui);
            ui.separator();
            self.draw_canvas(ui);
        });

        for action in pending {
            self.handle(ctx, action);
        }
    }
}
