//! Fixed timestep simulation tick
//!
//! One call = one 20 ms step: apply input, move everything, run the
//! collision sweeps, apply destructions, spawn what the tick produced,
//! then settle lives/levels. The render pass reads the result afterwards.

use rand::Rng;

use super::collision::{ship_overlaps, sweep_bullets};
use super::entity::{FireRequest, Saucer, Ship, Shootable};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: rotate counter-clockwise
    pub rotate_left: bool,
    /// Held: rotate clockwise
    pub rotate_right: bool,
    /// Held: thrust along the current heading
    pub thrust: bool,
    /// Edge-triggered: fire one bullet from the ship
    pub fire: bool,
    /// Edge-triggered: start a new game (honored only at game over / demo)
    pub start: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Coin-in: only from the resting/demo state
    if input.start && state.lives == 0 {
        state.new_game();
    }

    // Held keys drive the ship, then it moves
    if let Some(ship) = state.ship.as_mut() {
        ship.rotation_rate = match (input.rotate_left, input.rotate_right) {
            (true, false) => state.tuning.ship.rotation_rate,
            (false, true) => -state.tuning.ship.rotation_rate,
            _ => 0.0,
        };
        ship.thrust = input.thrust;
        ship.advance(state.bounds, state.tuning.ship.thrust_accel);
    }
    if input.fire {
        if let Some(req) = state.ship.as_ref().map(|s| s.muzzle(state.tuning.bullet.speed)) {
            state.fire_bullet(req);
        }
    }

    // Move every shootable; saucers may take a shot; any hull overlapping
    // the ship blows it up
    let bounds = state.bounds;
    let mut saucer_shots: Vec<FireRequest> = Vec::new();
    {
        let GameState { ship, shootables, tuning, rng, .. } = state;
        for target in shootables.iter_mut() {
            match target {
                Shootable::Asteroid(a) => a.advance(bounds),
                Shootable::Saucer(s) => {
                    if let Some(req) = s.advance(bounds, tuning, rng) {
                        saucer_shots.push(req);
                    }
                }
            }
            if let Some(ship) = ship.as_mut() {
                if !ship.hull.points.is_empty() && ship_overlaps(ship, target) {
                    ship.destroyed = true;
                }
            }
        }
    }
    for req in saucer_shots {
        state.fire_bullet(req);
    }

    // Bullets move, then the sweep
    for bullet in state.bullets.iter_mut() {
        bullet.advance(bounds);
    }
    let sweep = sweep_bullets(&mut state.bullets, state.ship.as_ref(), &state.shootables);
    if sweep.ship_hit {
        if let Some(ship) = state.ship.as_mut() {
            ship.destroyed = true;
        }
    }

    // Apply destructions; fragments land in the spawn list, scores add up
    let mut spawned: Vec<Shootable> = Vec::new();
    let mut points = 0u64;
    {
        let GameState { shootables, tuning, rng, .. } = state;
        for idx in sweep.targets_hit {
            points += shootables[idx].destroy(&mut spawned, bounds, tuning, rng);
        }
    }
    state.add_score(points);

    // Rare saucer visit, capped so they cannot pile up
    if state.rng.random::<f64>() < state.tuning.saucer.spawn_chance
        && state.saucer_count() < state.tuning.saucer.max_concurrent
    {
        let mut saucer = Saucer::new(bounds, &state.tuning, &mut state.rng);
        // Step once so its hull is populated before it joins the field
        let shot = saucer.advance(bounds, &state.tuning, &mut state.rng);
        log::debug!("saucer spawned at {}", saucer.body.pos);
        spawned.push(Shootable::Saucer(saucer));
        if let Some(req) = shot {
            state.fire_bullet(req);
        }
    }

    // Sweep out the wreckage once per tick, then append the newcomers
    state.shootables.retain(|s| !s.is_destroyed());
    state.shootables.append(&mut spawned);

    // Ship death: burn a life and respawn at center immediately (no grace
    // period), or drop to demo when the lives run out
    if state.ship.as_ref().is_some_and(|s| s.destroyed) {
        state.lives = state.lives.saturating_sub(1);
        if state.lives > 0 {
            log::info!("ship destroyed, {} lives left", state.lives);
            state.ship = Some(Ship::new(bounds, &state.tuning));
        } else {
            state.demo_mode();
        }
    }

    // Field cleared: the next one is a rock bigger
    if state.shootables.is_empty() {
        state.next_level();
    }
}
