/*
 * Application Module
 *
 * This module defines the main application model and logic for the
 * particle swarm. It owns the swarm, the pointer tracker, and the
 * surface bounds, and runs exactly one physics tick per frame.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::physics;
use crate::pointer::PointerTracker;
use crate::renderer;
use crate::surface::Surface;

// Main model for the application
pub struct Model {
    pub particles: Vec<Particle>,
    pub pointer: PointerTracker,
    pub surface: Surface,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub attracted: usize,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Particle Swarm")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the surface bounds and the initial swarm
    let surface = Surface::new(window_width, window_height);
    let particles = physics::spawn_swarm(params.num_particles, &surface, &mut rand::thread_rng());

    Model {
        particles,
        pointer: PointerTracker::default(),
        surface,
        params,
        egui,
        debug_info: DebugInfo::default(),
        attracted: 0,
    }
}

// Update the model, one simulation tick per frame
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the swarm needs to be rebuilt
    let (should_reset_swarm, num_particles_changed, _ui_changed) =
        crate::ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if should_reset_swarm || num_particles_changed {
        physics::reset_swarm(
            &mut model.particles,
            model.params.num_particles,
            &model.surface,
            &mut rand::thread_rng(),
        );
    }

    // Only advance the swarm if the simulation is not paused
    if !model.params.pause_simulation {
        physics::step(
            &mut model.particles,
            model.pointer.position(),
            &model.surface,
            &model.params,
        );
    }

    // Refresh the overlay counter every frame, paused or not
    model.attracted =
        physics::count_attracted(&model.particles, model.pointer.position(), &model.params);
}
