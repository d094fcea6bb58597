/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle swarm. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

use crate::DEFAULT_PARTICLE_COUNT;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub speed_factor: f32,
    pub bounce_damping: f32,
    pub damping: f32,
    pub neighbor_radius: f32,
    pub attraction_strength: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    speed_factor: f32,
    bounce_damping: f32,
    damping: f32,
    neighbor_radius: f32,
    attraction_strength: f32,
    pointer_radius: f32,
    pointer_strength: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: DEFAULT_PARTICLE_COUNT,
            speed_factor: 0.5,
            bounce_damping: 0.8,
            damping: 0.999,
            neighbor_radius: 100.0,
            attraction_strength: 0.001,
            pointer_radius: 150.0,
            pointer_strength: 0.1,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            speed_factor: self.speed_factor,
            bounce_damping: self.bounce_damping,
            damping: self.damping,
            neighbor_radius: self.neighbor_radius,
            attraction_strength: self.attraction_strength,
            pointer_radius: self.pointer_radius,
            pointer_strength: self.pointer_strength,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (num_particles_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_particles_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_particles != prev.num_particles {
                num_particles_changed = true;
                ui_changed = true;
            }

            if self.speed_factor != prev.speed_factor
                || self.bounce_damping != prev.bounce_damping
                || self.damping != prev.damping
                || self.neighbor_radius != prev.neighbor_radius
                || self.attraction_strength != prev.attraction_strength
                || self.pointer_radius != prev.pointer_radius
                || self.pointer_strength != prev.pointer_strength
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (num_particles_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        10..=500
    }

    pub fn get_speed_factor_range() -> std::ops::RangeInclusive<f32> {
        0.1..=2.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=300.0
    }

    pub fn get_strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameter_values() {
        let params = SimulationParams::default();
        assert_eq!(params.num_particles, 200);
        assert_eq!(params.speed_factor, 0.5);
        assert_eq!(params.bounce_damping, 0.8);
        assert_eq!(params.damping, 0.999);
        assert_eq!(params.neighbor_radius, 100.0);
        assert_eq!(params.attraction_strength, 0.001);
        assert_eq!(params.pointer_radius, 150.0);
        assert_eq!(params.pointer_strength, 0.1);
    }

    #[test]
    fn change_detection_flags_particle_count() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.num_particles = 50;
        let (count_changed, ui_changed) = params.detect_changes();
        assert!(count_changed);
        assert!(ui_changed);
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let params = SimulationParams::default();
        assert_eq!(params.detect_changes(), (false, false));
    }
}
