/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting
 * simulation parameters. Parameter change detection is handled by the
 * SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the swarm should be reset, the
// particle count changed, and if any UI changes occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_swarm = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Swarm Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Swarm", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Number of Particles"),
                );

                if ui.button("Reset Swarm").clicked() {
                    should_reset_swarm = true;
                }

                ui.add(
                    egui::Slider::new(
                        &mut params.speed_factor,
                        SimulationParams::get_speed_factor_range(),
                    )
                    .text("Speed Factor"),
                );
            });

            ui.collapsing("Forces", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.neighbor_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Neighbor Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.pointer_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Pointer Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.pointer_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Pointer Strength"),
                );
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Total Particles: {}", params.num_particles));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_particles_changed, ui_changed) = params.detect_changes();

    (should_reset_swarm, num_particles_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
    attracted: usize,
) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 4.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Particles: {}", particle_count),
        format!("Attracted: {}", attracted),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the panel's left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
