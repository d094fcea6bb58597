/*
 * Input Module
 *
 * This module handles user input events for the particle swarm.
 * Pointer moves update the tracked cursor position, leaving the window
 * clears it, and resizing the window rebuilds the swarm against the
 * new surface bounds.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::physics;
use crate::surface::Surface;

// Mouse moved event handler, stores the pointer in surface coordinates
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.pointer.set(model.surface.from_screen(pos));
}

// Mouse exited event handler, the pointer becomes absent
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer.clear();
}

// Window resized event handler. The swarm is discarded and rebuilt
// against the new bounds; the pointer state is left untouched.
pub fn resized(_app: &App, model: &mut Model, new_size: Vec2) {
    model.surface = Surface::new(new_size.x, new_size.y);

    physics::reset_swarm(
        &mut model.particles,
        model.params.num_particles,
        &model.surface,
        &mut rand::thread_rng(),
    );
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
