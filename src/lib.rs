/*
 * Particle Swarm - Module Definitions
 *
 * This file defines the module structure for the particle swarm application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use params::SimulationParams;
pub use particle::Particle;
pub use pointer::PointerTracker;
pub use surface::Surface;

// Define modules
pub mod app;
pub mod debug;
pub mod input;
pub mod params;
pub mod particle;
pub mod physics;
pub mod pointer;
pub mod renderer;
pub mod surface;
pub mod ui;

// Constants
pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const OVERLAY_FONT_SIZE: u32 = 24;
