/*
 * Particle Swarm
 *
 * An interactive animation of glowing particles on a dark canvas.
 * Nearby particles drift toward each other, the swarm is drawn toward
 * the cursor with a linear falloff, and an overlay counts how many
 * particles are currently within reach of the pointer.
 */

use swarm::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
