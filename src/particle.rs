/*
 * Particle Module
 *
 * This module defines the Particle struct and its motion.
 * A particle owns its position, velocity, visual radius, and hue.
 * Radius and hue are fixed at creation; position and velocity are
 * integrated every tick by the physics step.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::surface::Surface;

// Halo layers drawn under the core disc, (radius multiplier, alpha)
const GLOW_LAYERS: [(f32, f32); 3] = [(2.6, 0.06), (1.9, 0.12), (1.4, 0.22)];

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
    pub hue: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        // Barely moving at birth; interaction forces dominate from tick one
        let vx = rng.gen_range(-1.0..1.0) * 0.001;
        let vy = rng.gen_range(-1.0..1.0) * 0.001;

        Self {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            radius: rng.gen_range(2.0..17.0),
            hue: rng.gen_range(0.0..360.0),
        }
    }

    // Integrate the particle's position and bounce it off the walls.
    // The wall test uses the post-move position and does not clamp back
    // inside the bounds, so a particle can sit slightly outside for one
    // tick while its velocity direction flips.
    pub fn update(&mut self, surface: &Surface, params: &SimulationParams) {
        self.position += self.velocity * params.speed_factor;

        if self.position.x <= 0.0 || self.position.x >= surface.width {
            self.velocity.x *= -params.bounce_damping;
        }

        if self.position.y <= 0.0 || self.position.y >= surface.height {
            self.velocity.y *= -params.bounce_damping;
        }
    }

    // Draw the particle as a glowing disc
    pub fn draw(&self, draw: &Draw, surface: &Surface) {
        let screen_pos = surface.to_screen(self.position);
        let hue = self.hue / 360.0;

        // Layered translucent halos stand in for a blur-based glow
        for (scale, alpha) in GLOW_LAYERS {
            draw.ellipse()
                .xy(screen_pos)
                .radius(self.radius * scale)
                .color(hsla(hue, 1.0, 0.5, alpha));
        }

        draw.ellipse()
            .xy(screen_pos)
            .radius(self.radius)
            .color(hsla(hue, 1.0, 0.5, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_params() -> SimulationParams {
        SimulationParams::default()
    }

    #[test]
    fn new_particles_use_the_fixed_attribute_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Particle::new(10.0, 20.0, &mut rng);
            assert!(p.radius >= 2.0 && p.radius < 17.0);
            assert!(p.hue >= 0.0 && p.hue < 360.0);
            assert!(p.velocity.x.abs() <= 0.001);
            assert!(p.velocity.y.abs() <= 0.001);
        }
    }

    #[test]
    fn update_integrates_with_the_speed_factor() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(100.0, 100.0, &mut rng);
        p.velocity = vec2(2.0, -4.0);

        p.update(&Surface::new(800.0, 600.0), &test_params());

        assert_eq!(p.position, pt2(101.0, 98.0));
    }

    #[test]
    fn crossing_the_right_wall_flips_and_damps_x_velocity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(799.5, 300.0, &mut rng);
        p.velocity = vec2(2.0, 0.0);

        p.update(&Surface::new(800.0, 600.0), &test_params());

        // Moved past the wall, not clamped back inside
        assert!(p.position.x >= 800.0);
        assert!((p.velocity.x - -1.6).abs() < 1e-6);
    }

    #[test]
    fn crossing_the_top_wall_flips_and_damps_y_velocity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(300.0, 0.5, &mut rng);
        p.velocity = vec2(0.0, -2.0);

        p.update(&Surface::new(800.0, 600.0), &test_params());

        assert!(p.position.y <= 0.0);
        assert!((p.velocity.y - 1.6).abs() < 1e-6);
    }

    #[test]
    fn axes_bounce_independently() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(799.5, 300.0, &mut rng);
        p.velocity = vec2(2.0, 3.0);

        p.update(&Surface::new(800.0, 600.0), &test_params());

        // x reflected, y untouched
        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.y, 3.0);
    }

    #[test]
    fn update_away_from_walls_leaves_velocity_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(400.0, 300.0, &mut rng);
        p.velocity = vec2(1.0, 1.0);

        p.update(&Surface::new(800.0, 600.0), &test_params());

        assert_eq!(p.velocity, vec2(1.0, 1.0));
    }
}
