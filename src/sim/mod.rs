//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one 20 ms step)
//! - Seeded RNG only (`Pcg32` owned by `GameState`)
//! - Stable iteration order (collection order, bullets by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{BulletSweep, ship_overlaps, sweep_bullets};
pub use entity::{Asteroid, Body, Bullet, FireRequest, Hull, Saucer, Ship, Shootable};
pub use geometry::{point_in_polygon, polygons_intersect, segments_intersect};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
