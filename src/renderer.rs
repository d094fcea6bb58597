/*
 * Renderer Module
 *
 * This module handles the rendering of the particle swarm.
 * It clears the frame, draws every particle as a glowing disc, and
 * renders the attraction counter overlay in the top-left corner.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::OVERLAY_FONT_SIZE;

// Offsets used to fake a text glow by layering translucent copies
const TEXT_HALO_OFFSETS: [(f32, f32); 4] = [(-1.5, 0.0), (1.5, 0.0), (0.0, -1.5), (0.0, 1.5)];

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Draw each particle
    for particle in &model.particles {
        particle.draw(&draw, &model.surface);
    }

    // Draw the attraction counter overlay
    let window_rect = app.window_rect();
    draw_overlay(&draw, window_rect, model.attracted);

    // Draw debug info if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.particles.len(),
            model.attracted,
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Draw the two-part overlay: a cyan label and a white count, both with
// a layered halo standing in for a blur-based glow
fn draw_overlay(draw: &Draw, window_rect: Rect, attracted: usize) {
    let label_x = window_rect.left() + 130.0;
    let label_y = window_rect.top() - 40.0;
    let count_x = window_rect.left() + 270.0;

    glow_text(
        draw,
        "Particles attracted:",
        label_x,
        label_y,
        srgb(0.0, 1.0, 1.0),
    );
    glow_text(draw, &attracted.to_string(), count_x, label_y, srgb(1.0, 1.0, 1.0));
}

fn glow_text(draw: &Draw, text: &str, x: f32, y: f32, color: Srgb<f32>) {
    let halo = srgba(color.red, color.green, color.blue, 0.25);

    for (dx, dy) in TEXT_HALO_OFFSETS {
        draw.text(text)
            .x_y(x + dx, y + dy)
            .color(halo)
            .font_size(OVERLAY_FONT_SIZE)
            .no_line_wrap();
    }

    draw.text(text)
        .x_y(x, y)
        .color(color)
        .font_size(OVERLAY_FONT_SIZE)
        .no_line_wrap();
}
