//! Astro Rocks - a wrapped-field asteroids arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, polygon collision, game state)
//! - `render`: Render port trait + frame drawing from a state snapshot
//! - `input`: Key-event port producing per-tick input
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use input::{InputState, Key};
pub use sim::{GamePhase, GameState, TickInput, tick};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Intended cadence - one update + one draw every 20 ms (50 Hz), driven
    /// by a fixed-delay timer rather than frame sync. Velocities are pixels
    /// per tick, so the sim itself takes no dt.
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Default field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Heading change per tick while a rotate key is held (degrees)
    pub const SHIP_ROTATION_RATE: f32 = 5.0;
    /// Velocity gained per tick of thrust (pixels/tick along heading)
    pub const SHIP_THRUST_ACCEL: f32 = 0.3;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_TTL: u32 = 40;
    pub const MAX_BULLETS: usize = 10;

    /// Saucer defaults
    pub const SAUCER_RADIUS: f32 = 15.0;
    pub const SAUCER_SPEED: f32 = 2.0;
    /// Heading jitter per tick (degrees, uniform in +/- this)
    pub const SAUCER_WANDER: f32 = 10.0;

    /// Level/lives defaults
    pub const GAME_START_LEVEL: u32 = 3;
    pub const GAME_LIVES: u32 = 3;
    pub const DEMO_LEVEL: u32 = 10;
}

/// Point at `distance` from `origin` along `angle_deg`.
///
/// Screen coordinates (y grows downward), so the y component is negated to
/// make increasing angles rotate counter-clockwise on screen. Every heading
/// in the game (ship, thrust, firing, silhouettes) goes through this one
/// convention.
#[inline]
pub fn rotate_point(origin: Vec2, distance: f32, angle_deg: f32) -> Vec2 {
    let angle = angle_deg.to_radians();
    Vec2::new(
        origin.x + distance * angle.cos(),
        origin.y - distance * angle.sin(),
    )
}

/// Toroidal wrap of a position into `[0, bounds)` on each axis.
///
/// Pure translation by the bound size, not a clamp - an object exiting one
/// edge re-enters the opposite edge with its offset preserved. Assumes the
/// per-tick displacement is smaller than the field.
#[inline]
pub fn wrap_position(mut pos: Vec2, bounds: Vec2) -> Vec2 {
    if pos.x < 0.0 {
        pos.x += bounds.x;
    } else if pos.x >= bounds.x {
        pos.x -= bounds.x;
    }
    if pos.y < 0.0 {
        pos.y += bounds.y;
    } else if pos.y >= bounds.y {
        pos.y -= bounds.y;
    }
    pos
}
