use colorsys::Rgb;
use egui::{pos2, Color32, Painter, Pos2, Sense, Slider, Stroke, Ui};
use log::{debug, error};
use multitouch_strokes::{
    palette::parse_hex_colour,
    render::{Canvas, LineStyle},
    Point2D,
};

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::SidePanel::left("settings").show(ctx, |ui| {
        ui.add_space(SPACING_AMOUNT);
        render_info(model, ui);
        ui.separator();
        render_stroke_settings(model, ui);
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let origin = response.rect.min;

            let events = ctx.input(|i| i.events.clone());
            let touches = model.surface_input.collect(&events, response.rect);
            if !touches.is_empty() {
                model.apply_touches(&touches, ctx);
            }

            let mut canvas = PainterCanvas {
                painter: &painter,
                origin,
            };
            model.renderer.render(model.tracker.snapshot(), &mut canvas);
        });
}

fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.heading("Strokes");
    ui.label(format!("Active: {}", model.tracker.active_count()));
    ui.label(format!("Ended: {}", model.tracker.ended_count()));
    if model.rejected_events > 0 {
        ui.colored_label(
            Color32::RED,
            format!("Rejected events: {}", model.rejected_events),
        );
    }
    if ui.button("Clear").clicked() {
        model.tracker.clear();
    }
    if let Some(recorder) = &model.recorder {
        ui.label(format!("Recorded events: {}", recorder.events().len()));
        if ui.button("Save recording").clicked() {
            model.save_recording();
        }
    }
}

fn render_stroke_settings(model: &mut Model, ui: &mut Ui) {
    ui.heading("Stroke Settings");
    let mut changed = false;
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("Active width");
            changed |= ui
                .add(Slider::new(&mut model.config.active_stroke_width, 1.0..=60.0))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label("Ended width");
            changed |= ui
                .add(Slider::new(&mut model.config.ended_stroke_width, 1.0..=60.0))
                .changed();
        });
    });

    ui.label("Palette");
    ui.horizontal_wrapped(|ui| {
        for colour in model.config.palette.iter_mut() {
            let Ok(mut rgb) = parse_hex_colour(colour) else {
                continue;
            };
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                debug!("Change palette colour to {:?}", rgb);
                *colour = Rgb::from(rgb).to_hex_string();
                changed = true;
            }
        }
    });

    if changed {
        model.update_renderer();
    }

    if ui.button("Save config").clicked() {
        if let Err(e) = model.config.write_config_to_file(&model.config_path) {
            error!("{}", e);
        }
    }
}

struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn draw_line(&mut self, from: Point2D, to: Point2D, style: &LineStyle) {
        let [r, g, b] = style.colour;
        let Pos2 { x, y } = self.origin;
        self.painter.line_segment(
            [pos2(from.0 + x, from.1 + y), pos2(to.0 + x, to.1 + y)],
            Stroke::new(style.width, Color32::from_rgb(r, g, b)),
        );
    }
}
