//! Game state and session transitions
//!
//! Owns every entity collection plus level/lives/score and the session RNG.
//! All mutation happens inside `tick`; the render pass only reads.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Asteroid, Bullet, FireRequest, Ship, Shootable};
use crate::tuning::Tuning;

/// Observable phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship present, lives tracked, score accumulates
    Active,
    /// Attract mode: no ship, fixed-size field, score frozen. Doubles as
    /// the game-over resting state until a new-game command arrives.
    Demo,
}

/// Complete session state (deterministic for a given seed + input stream)
#[derive(Debug)]
pub struct GameState {
    pub phase: GamePhase,
    /// None = no active ship (demo / game over)
    pub ship: Option<Ship>,
    pub shootables: Vec<Shootable>,
    /// Fixed-size pool; firing claims the first free slot, a full pool
    /// drops the request
    pub bullets: Vec<Bullet>,
    /// Asteroid count of the next field; bumped by `next_level`
    pub level: u32,
    pub score: u64,
    pub lives: u32,
    /// Field dimensions for toroidal wrapping
    pub bounds: Vec2,
    /// Session seed, kept for reproduction
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh session in attract mode, like the cabinet between coins
    pub fn new(seed: u64, bounds: Vec2, tuning: Tuning) -> Self {
        let mut state = Self {
            phase: GamePhase::Demo,
            ship: None,
            shootables: Vec::new(),
            bullets: Vec::new(),
            level: 1,
            score: 0,
            lives: 0,
            bounds,
            seed,
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.demo_mode();
        state
    }

    fn fresh_pool(&self) -> Vec<Bullet> {
        vec![Bullet::new(); self.tuning.bullet.pool_size]
    }

    /// Start play: fresh ship at center, fresh pool, reset score/lives
    pub fn new_game(&mut self) {
        self.phase = GamePhase::Active;
        self.ship = Some(Ship::new(self.bounds, &self.tuning));
        self.bullets = self.fresh_pool();
        self.level = self.tuning.game.start_level;
        self.lives = self.tuning.game.lives;
        self.score = 0;
        log::info!("new game (seed {})", self.seed);
        self.next_level();
    }

    /// Drop to attract mode: no ship, fixed demo field. Terminal until the
    /// player starts a new game.
    pub fn demo_mode(&mut self) {
        self.phase = GamePhase::Demo;
        self.ship = None;
        self.bullets = self.fresh_pool();
        self.level = self.tuning.game.demo_level;
        log::info!("demo mode (final score {})", self.score);
        self.next_level();
    }

    /// Clear the field, spawn `level` big rocks at random spots, bump the
    /// counter - each cleared field comes back one rock bigger
    pub fn next_level(&mut self) {
        self.shootables.clear();
        for _ in 0..self.level {
            let pos = Vec2::new(
                self.bounds.x * self.rng.random::<f32>(),
                self.bounds.y * self.rng.random::<f32>(),
            );
            let rock = Asteroid::new(1, pos, Vec2::ZERO, &self.tuning, &mut self.rng);
            self.shootables.push(Shootable::Asteroid(rock));
        }
        log::info!("field of {} rocks", self.level);
        self.level += 1;
    }

    /// Score only counts while a ship is in play; demo kills score nothing
    pub fn add_score(&mut self, points: u64) {
        if self.ship.is_some() {
            self.score += points;
        }
    }

    /// Claim the first free bullet slot. Returns false when the pool is
    /// full - the shot is dropped, never queued, never overwrites a live
    /// bullet.
    pub fn fire_bullet(&mut self, req: FireRequest) -> bool {
        let ttl = self.tuning.bullet.ttl;
        match self.bullets.iter_mut().find(|b| !b.is_active()) {
            Some(slot) => {
                slot.fire(req, ttl);
                true
            }
            None => false,
        }
    }

    pub fn active_bullets(&self) -> usize {
        self.bullets.iter().filter(|b| b.is_active()).count()
    }

    pub fn saucer_count(&self) -> usize {
        self.shootables
            .iter()
            .filter(|s| matches!(s, Shootable::Saucer(_)))
            .count()
    }
}
