/*
 * Physics Module
 *
 * This module drives the per-tick simulation for the particle swarm:
 * pairwise neighbor attraction, global velocity damping, the pointer
 * pull, and wall bouncing.
 *
 * Interaction is a pure function over the current swarm and pointer
 * state so it can be unit tested without a window or drawing context.
 * The tick itself processes particles sequentially in insertion order,
 * so each particle sees the already-updated positions of the particles
 * before it in the same tick.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::surface::Surface;

// Compute the next velocity for the particle at `index` without
// mutating anything. Neighbors within `neighbor_radius` each pull the
// particle toward themselves by a fixed fraction of the offset, the
// result is damped, and a present pointer within `pointer_radius` adds
// a pull toward the cursor with linear falloff (full strength at the
// cursor, zero at the radius).
pub fn interacted_velocity(
    index: usize,
    particles: &[Particle],
    pointer: Option<Point2>,
    params: &SimulationParams,
) -> Vec2 {
    let particle = &particles[index];
    let mut velocity = particle.velocity;

    for (i, other) in particles.iter().enumerate() {
        if i == index {
            continue;
        }

        let distance = particle.position.distance(other.position);
        if distance < params.neighbor_radius {
            velocity += (other.position - particle.position) * params.attraction_strength;
        }
    }

    // Damping applies every tick, neighbors or not
    velocity *= params.damping;

    if let Some(pointer_pos) = pointer {
        let distance = particle.position.distance(pointer_pos);
        if distance < params.pointer_radius {
            let falloff = (params.pointer_radius - distance) / params.pointer_radius;
            velocity += (pointer_pos - particle.position) * falloff * params.pointer_strength;
        }
    }

    velocity
}

// Advance the swarm by one tick: for each particle in insertion order,
// interact then integrate and bounce.
pub fn step(
    particles: &mut [Particle],
    pointer: Option<Point2>,
    surface: &Surface,
    params: &SimulationParams,
) {
    for i in 0..particles.len() {
        let velocity = interacted_velocity(i, particles, pointer, params);
        let particle = &mut particles[i];
        particle.velocity = velocity;
        particle.update(surface, params);
    }
}

// Count the particles strictly within the pointer radius, or zero when
// the pointer is absent
pub fn count_attracted(
    particles: &[Particle],
    pointer: Option<Point2>,
    params: &SimulationParams,
) -> usize {
    match pointer {
        Some(pointer_pos) => particles
            .iter()
            .filter(|p| p.position.distance(pointer_pos) < params.pointer_radius)
            .count(),
        None => 0,
    }
}

// Create a fresh swarm of `count` particles at random positions inside
// the surface
pub fn spawn_swarm(count: usize, surface: &Surface, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..surface.width);
            let y = rng.gen_range(0.0..surface.height);
            Particle::new(x, y, rng)
        })
        .collect()
}

// Discard the current swarm and rebuild it wholesale, used at startup,
// on window resize, and when the particle count changes
pub fn reset_swarm(
    particles: &mut Vec<Particle>,
    count: usize,
    surface: &Surface,
    rng: &mut impl Rng,
) {
    *particles = spawn_swarm(count, surface, rng);
}
