//! Per-tick collision sweeps
//!
//! Runs after every entity has moved for the tick. Ship-vs-shootable uses
//! the full polygon-polygon test; bullets are small enough that their
//! position point against the target hull is the whole check.

use super::entity::{Bullet, Ship, Shootable};
use super::geometry::{point_in_polygon, polygons_intersect};

/// True if the ship's hull overlaps the target's hull
pub fn ship_overlaps(ship: &Ship, target: &Shootable) -> bool {
    polygons_intersect(
        target.points(),
        target.body().pos,
        target.body().radius,
        &ship.hull.points,
        ship.body.pos,
        ship.body.radius,
    )
}

/// Outcome of one bullet sweep
#[derive(Debug, Default)]
pub struct BulletSweep {
    /// Some bullet ended the tick inside the ship's hull
    pub ship_hit: bool,
    /// Indices into the shootables collection that were struck. May contain
    /// a duplicate when two bullets land in the same target on the same
    /// tick; destruction is idempotent so the extra entry scores nothing.
    pub targets_hit: Vec<usize>,
}

/// Check every active bullet against the ship and the shootables.
///
/// A bullet is consumed by its first target hit in iteration order and
/// checked against no further targets (single-kill). Hitting the ship does
/// not consume the bullet - saucer shots stay dangerous, and a wrapped shot
/// can come back around onto its own ship.
pub fn sweep_bullets(
    bullets: &mut [Bullet],
    ship: Option<&Ship>,
    shootables: &[Shootable],
) -> BulletSweep {
    let mut outcome = BulletSweep::default();
    for bullet in bullets.iter_mut().filter(|b| b.is_active()) {
        let p = bullet.body.pos;
        if let Some(ship) = ship {
            if point_in_polygon(p, &ship.hull.points) {
                outcome.ship_hit = true;
            }
        }
        for (idx, target) in shootables.iter().enumerate() {
            if point_in_polygon(p, target.points()) {
                bullet.remaining_life = 0;
                outcome.targets_hit.push(idx);
                break;
            }
        }
    }
    outcome
}
