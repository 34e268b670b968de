//! Data-driven game balance
//!
//! All gameplay numbers live here so balance passes never touch sim code.
//! `Tuning::default()` is the shipped balance; a JSON blob can override any
//! subset of fields (missing fields keep their defaults).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-category asteroid parameters, category 1 = largest
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidClass {
    /// Bounding-circle radius, also the outline's maximum vertex distance
    pub radius: f32,
    /// Vertex count of the generated outline (more = smoother rock)
    pub vertices: usize,
    /// Points awarded on destruction
    pub score: u64,
    /// Outward kick added to the inherited velocity on spawn (pixels/tick)
    pub kick_speed: f32,
    /// Fragments of category+1 spawned on destruction
    pub children: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub radius: f32,
    /// Degrees per tick while a rotate key is held
    pub rotation_rate: f32,
    /// Pixels/tick of velocity gained per tick of thrust
    pub thrust_accel: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            radius: SHIP_RADIUS,
            rotation_rate: SHIP_ROTATION_RATE,
            thrust_accel: SHIP_THRUST_ACCEL,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Muzzle speed added to the shooter's velocity (pixels/tick)
    pub speed: f32,
    /// Lifetime in ticks
    pub ttl: u32,
    /// Pool capacity = max simultaneous shots, shared by ship and saucers
    pub pool_size: usize,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: BULLET_SPEED,
            ttl: BULLET_TTL,
            pool_size: MAX_BULLETS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SaucerTuning {
    pub radius: f32,
    pub speed: f32,
    /// Heading jitter per tick (degrees, uniform in +/- this)
    pub wander: f32,
    /// Per-tick probability of firing at a random angle
    pub fire_chance: f64,
    /// Per-tick probability of a new saucer appearing
    pub spawn_chance: f64,
    /// Concurrent saucer cap (the original let them pile up unbounded)
    pub max_concurrent: usize,
    pub score: u64,
}

impl Default for SaucerTuning {
    fn default() -> Self {
        Self {
            radius: SAUCER_RADIUS,
            speed: SAUCER_SPEED,
            wander: SAUCER_WANDER,
            fire_chance: 0.005,
            spawn_chance: 0.001,
            max_concurrent: 2,
            score: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    /// Asteroid count of the first level of a new game
    pub start_level: u32,
    pub lives: u32,
    /// Fixed level used for the attract-mode field
    pub demo_level: u32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            start_level: GAME_START_LEVEL,
            lives: GAME_LIVES,
            demo_level: DEMO_LEVEL,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub bullet: BulletTuning,
    pub saucer: SaucerTuning,
    pub game: GameTuning,
    /// Indexed by category - 1
    pub asteroids: [AsteroidClass; 3],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship: ShipTuning::default(),
            bullet: BulletTuning::default(),
            saucer: SaucerTuning::default(),
            game: GameTuning::default(),
            asteroids: [
                AsteroidClass { radius: 50.0, vertices: 15, score: 100, kick_speed: 1.0, children: 3 },
                AsteroidClass { radius: 25.0, vertices: 10, score: 150, kick_speed: 2.0, children: 2 },
                AsteroidClass { radius: 15.0, vertices: 6, score: 250, kick_speed: 3.0, children: 0 },
            ],
        }
    }
}

impl Tuning {
    /// Class table lookup; categories past 3 clamp to the smallest rock
    pub fn asteroid_class(&self, category: u8) -> &AsteroidClass {
        let idx = (category.clamp(1, 3) - 1) as usize;
        &self.asteroids[idx]
    }

    /// Parse a (possibly partial) JSON override of the default balance
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_table() {
        let tuning = Tuning::default();
        assert_eq!(tuning.asteroid_class(1).children, 3);
        assert_eq!(tuning.asteroid_class(2).score, 150);
        assert_eq!(tuning.asteroid_class(3).children, 0);
        // Past the table end clamps to the smallest class
        assert_eq!(tuning.asteroid_class(4).radius, 15.0);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{"game": {"lives": 5}}"#).unwrap();
        assert_eq!(tuning.game.lives, 5);
        // Untouched sections keep their defaults
        assert_eq!(tuning.game.start_level, GAME_START_LEVEL);
        assert_eq!(tuning.bullet.pool_size, MAX_BULLETS);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.saucer.score, tuning.saucer.score);
        assert_eq!(back.asteroids[0].vertices, tuning.asteroids[0].vertices);
    }
}
