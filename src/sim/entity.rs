//! Flat entity model
//!
//! No inheritance chain: `Body` (position/velocity/bounding circle) and
//! `Hull` (silhouette + world points) are plain components, the concrete
//! entities compose them, and `Shootable` is the tagged union the state
//! machine stores. Anything random (rock shapes, spins, kicks, saucer
//! wander) draws from the caller-provided `Pcg32`, never a global source.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;
use crate::{rotate_point, wrap_position};

/// A simulated moving object with a bounding circle
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Integrate one tick and wrap toroidally
    pub fn step(&mut self, bounds: Vec2) {
        self.pos = wrap_position(self.pos + self.vel, bounds);
    }
}

/// Rotation-relative polygon silhouette and its world-space projection
///
/// The outline is a list of (angle offset deg, distance) pairs; `points`
/// is recomputed from position + orientation + scale after every move and
/// always has one entry per outline pair.
#[derive(Debug, Clone)]
pub struct Hull {
    pub outline: Vec<(f32, f32)>,
    pub orientation_deg: f32,
    pub scale: f32,
    pub points: Vec<Vec2>,
}

impl Hull {
    pub fn new(outline: Vec<(f32, f32)>) -> Self {
        let points = Vec::with_capacity(outline.len());
        Self {
            outline,
            orientation_deg: 90.0,
            scale: 1.0,
            points,
        }
    }

    /// Recompute world points for the hull centered at `pos`
    pub fn refresh(&mut self, pos: Vec2) {
        self.points.clear();
        for &(offset, dist) in &self.outline {
            self.points
                .push(rotate_point(pos, dist * self.scale, self.orientation_deg + offset));
        }
    }
}

/// A claim on a bullet pool slot, produced by whoever pulls the trigger
#[derive(Debug, Clone, Copy)]
pub struct FireRequest {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Player ship silhouette: nose at 0 deg, notched tail
pub const SHIP_OUTLINE: [(f32, f32); 4] = [(0.0, 15.0), (150.0, 15.0), (180.0, 5.0), (210.0, 15.0)];
/// Flame drawn behind the ship while thrusting
const THRUST_OUTLINE: [(f32, f32); 3] = [(170.0, 20.0), (180.0, 30.0), (190.0, 20.0)];

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    pub hull: Hull,
    /// Degrees added to the heading each tick (set from held rotate keys)
    pub rotation_rate: f32,
    pub thrust: bool,
    pub destroyed: bool,
}

impl Ship {
    /// Fresh ship at the field center, heading up, at rest
    pub fn new(bounds: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(bounds / 2.0, Vec2::ZERO, tuning.ship.radius),
            hull: Hull::new(SHIP_OUTLINE.to_vec()),
            rotation_rate: 0.0,
            thrust: false,
            destroyed: false,
        }
    }

    /// One tick: rotate, apply thrust along the heading, move, wrap, refresh
    pub fn advance(&mut self, bounds: Vec2, thrust_accel: f32) {
        self.hull.orientation_deg += self.rotation_rate;
        if self.thrust {
            self.body.vel = rotate_point(self.body.vel, thrust_accel, self.hull.orientation_deg);
        }
        self.body.step(bounds);
        self.hull.refresh(self.body.pos);
    }

    /// Bullet spawn at the nose, inheriting ship velocity plus muzzle speed
    pub fn muzzle(&self, bullet_speed: f32) -> FireRequest {
        FireRequest {
            pos: rotate_point(self.body.pos, self.body.radius, self.hull.orientation_deg),
            vel: rotate_point(self.body.vel, bullet_speed, self.hull.orientation_deg),
        }
    }

    /// World points of the thrust flame at the current pose
    pub fn thrust_flame(&self) -> Vec<Vec2> {
        THRUST_OUTLINE
            .iter()
            .map(|&(offset, dist)| {
                rotate_point(self.body.pos, dist, self.hull.orientation_deg + offset)
            })
            .collect()
    }
}

/// A fragmenting rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub hull: Hull,
    /// 1 = largest; fragments are category + 1
    pub category: u8,
    /// Degrees per tick, fixed per instance
    pub spin: f32,
    /// Render-side palette selector, fixed per instance
    pub shade: u32,
    pub destroyed: bool,
}

impl Asteroid {
    /// New rock at `pos` inheriting `base_vel` plus a random outward kick of
    /// its class's speed. The outline is `vertices` evenly spaced angles
    /// with radial jitter in [0.6R, R].
    pub fn new(category: u8, pos: Vec2, base_vel: Vec2, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let class = *tuning.asteroid_class(category);
        let mut outline = Vec::with_capacity(class.vertices);
        for i in 0..class.vertices {
            let angle = 360.0 * i as f32 / class.vertices as f32;
            let dist = class.radius - rng.random::<f32>() * class.radius * 0.4;
            outline.push((angle, dist));
        }

        let kick_angle = rng.random::<f32>() * 360.0;
        let vel = rotate_point(base_vel, class.kick_speed, kick_angle);

        let mut hull = Hull::new(outline);
        hull.orientation_deg = rng.random::<f32>() * 360.0;

        Self {
            body: Body::new(pos, vel, class.radius),
            hull,
            category,
            spin: rng.random::<f32>() * 10.0 - 5.0,
            shade: rng.random(),
            destroyed: false,
        }
    }

    /// One tick: spin, move, wrap, refresh
    pub fn advance(&mut self, bounds: Vec2) {
        self.hull.orientation_deg += self.spin;
        self.body.step(bounds);
        self.hull.refresh(self.body.pos);
    }
}

/// Enemy saucer silhouette
const SAUCER_OUTLINE: [(f32, f32); 10] = [
    (90.0, 15.0),
    (270.0, 15.0),
    (225.0, 10.0),
    (135.0, 10.0),
    (90.0, 15.0),
    (45.0, 8.0),
    (15.0, 12.0),
    (345.0, 12.0),
    (315.0, 8.0),
    (270.0, 15.0),
];

/// Enemy saucer: wanders on a jittered heading, takes potshots
#[derive(Debug, Clone)]
pub struct Saucer {
    pub body: Body,
    pub hull: Hull,
    /// Current travel heading (degrees), perturbed every tick
    pub heading_deg: f32,
    pub destroyed: bool,
}

impl Saucer {
    /// Spawn near a random field corner at a random size
    pub fn new(bounds: Vec2, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let x = if rng.random_bool(0.5) { 20.0 } else { bounds.x - 20.0 };
        let y = if rng.random_bool(0.5) { 20.0 } else { bounds.y - 20.0 };
        let mut hull = Hull::new(SAUCER_OUTLINE.to_vec());
        hull.scale = 0.75 + rng.random::<f32>() * 1.25;
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::ZERO, tuning.saucer.radius),
            hull,
            heading_deg: 0.0,
            destroyed: false,
        }
    }

    /// One tick of wandering; occasionally returns a shot at a random angle
    pub fn advance(&mut self, bounds: Vec2, tuning: &Tuning, rng: &mut Pcg32) -> Option<FireRequest> {
        let wander = tuning.saucer.wander;
        self.heading_deg += rng.random::<f32>() * wander * 2.0 - wander;
        self.body.vel = rotate_point(Vec2::ZERO, tuning.saucer.speed, self.heading_deg);
        self.body.step(bounds);
        self.hull.refresh(self.body.pos);

        if rng.random::<f64>() < tuning.saucer.fire_chance {
            let angle = rng.random::<f32>() * 360.0;
            return Some(FireRequest {
                pos: rotate_point(self.body.pos, self.body.radius, angle),
                vel: rotate_point(self.body.vel, tuning.bullet.speed, angle),
            });
        }
        None
    }
}

/// A slot in the fixed-size bullet pool
///
/// `remaining_life == 0` means the slot is free; firing claims the first
/// free slot and resets the countdown.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub body: Body,
    pub remaining_life: u32,
}

impl Bullet {
    pub fn new() -> Self {
        Self {
            body: Body::new(Vec2::ZERO, Vec2::ZERO, 1.0),
            remaining_life: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_life > 0
    }

    /// Claim this slot for a new shot
    pub fn fire(&mut self, req: FireRequest, ttl: u32) {
        self.body.pos = req.pos;
        self.body.vel = req.vel;
        self.remaining_life = ttl;
    }

    /// Count down and move; a bullet whose life just ran out stays put
    pub fn advance(&mut self, bounds: Vec2) {
        if self.remaining_life == 0 {
            return;
        }
        self.remaining_life -= 1;
        if self.remaining_life > 0 {
            self.body.step(bounds);
        }
    }
}

impl Default for Bullet {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything a bullet can destroy
#[derive(Debug, Clone)]
pub enum Shootable {
    Asteroid(Asteroid),
    Saucer(Saucer),
}

impl Shootable {
    pub fn body(&self) -> &Body {
        match self {
            Shootable::Asteroid(a) => &a.body,
            Shootable::Saucer(s) => &s.body,
        }
    }

    /// Current world-space hull vertices
    pub fn points(&self) -> &[Vec2] {
        match self {
            Shootable::Asteroid(a) => &a.hull.points,
            Shootable::Saucer(s) => &s.hull.points,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        match self {
            Shootable::Asteroid(a) => a.destroyed,
            Shootable::Saucer(s) => s.destroyed,
        }
    }

    /// Destruction hook: marks the entity destroyed, appends any fragments
    /// to `spawned`, and returns the score value. Idempotent - a second call
    /// on the same entity scores nothing and spawns nothing.
    pub fn destroy(
        &mut self,
        spawned: &mut Vec<Shootable>,
        bounds: Vec2,
        tuning: &Tuning,
        rng: &mut Pcg32,
    ) -> u64 {
        match self {
            Shootable::Asteroid(a) => {
                if a.destroyed {
                    return 0;
                }
                a.destroyed = true;
                let class = *tuning.asteroid_class(a.category);
                for _ in 0..class.children {
                    let mut frag = Asteroid::new(a.category + 1, a.body.pos, a.body.vel, tuning, rng);
                    // One immediate step so the fragment's hull is populated
                    // the same tick it joins the field
                    frag.advance(bounds);
                    spawned.push(Shootable::Asteroid(frag));
                }
                class.score
            }
            Shootable::Saucer(s) => {
                if s.destroyed {
                    return 0;
                }
                s.destroyed = true;
                tuning.saucer.score
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn bounds() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_hull_points_match_outline() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let mut rock = Asteroid::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, &tuning, &mut rng);
        assert!(rock.hull.points.is_empty());
        rock.advance(bounds());
        assert_eq!(rock.hull.points.len(), rock.hull.outline.len());
        assert_eq!(rock.hull.points.len(), tuning.asteroids[0].vertices);
    }

    #[test]
    fn test_ship_thrust_accelerates_along_heading() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(bounds(), &tuning);
        ship.thrust = true;
        ship.advance(bounds(), tuning.ship.thrust_accel);
        // Heading starts at 90 deg (up = -y on screen)
        assert!(ship.body.vel.x.abs() < 1e-4);
        assert!(ship.body.vel.y < 0.0);

        // Coasting keeps the velocity (no drag)
        ship.thrust = false;
        let coast_vel = ship.body.vel;
        ship.advance(bounds(), tuning.ship.thrust_accel);
        assert_eq!(ship.body.vel, coast_vel);
    }

    #[test]
    fn test_ship_rotation_rate_applies_each_tick() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(bounds(), &tuning);
        ship.rotation_rate = 5.0;
        ship.advance(bounds(), tuning.ship.thrust_accel);
        ship.advance(bounds(), tuning.ship.thrust_accel);
        assert!((ship.hull.orientation_deg - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_countdown_and_reuse() {
        let mut bullet = Bullet::new();
        assert!(!bullet.is_active());

        bullet.fire(
            FireRequest { pos: Vec2::new(10.0, 10.0), vel: Vec2::new(10.0, 0.0) },
            3,
        );
        assert!(bullet.is_active());
        bullet.advance(bounds()); // 3 -> 2, moves
        assert_eq!(bullet.body.pos, Vec2::new(20.0, 10.0));
        bullet.advance(bounds()); // 2 -> 1, moves
        bullet.advance(bounds()); // 1 -> 0, stays put
        assert!(!bullet.is_active());
        assert_eq!(bullet.body.pos, Vec2::new(30.0, 10.0));
        bullet.advance(bounds()); // inactive slots do nothing
        assert_eq!(bullet.body.pos, Vec2::new(30.0, 10.0));
    }

    #[test]
    fn test_asteroid_fragmentation_counts() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let parent_pos = Vec2::new(300.0, 200.0);
        let parent = Asteroid::new(1, parent_pos, Vec2::ZERO, &tuning, &mut rng);
        let parent_speed = parent.body.vel.length();
        let mut rock = Shootable::Asteroid(parent);

        let mut spawned = Vec::new();
        let score = rock.destroy(&mut spawned, bounds(), &tuning, &mut rng);
        assert_eq!(score, 100);
        assert_eq!(spawned.len(), 3);
        for frag in &spawned {
            let Shootable::Asteroid(a) = frag else { panic!("expected asteroid fragment") };
            assert_eq!(a.category, 2);
            // Fragments start at the parent and drift one step out: at most
            // the inherited speed plus the category-2 kick
            let max_drift = parent_speed + tuning.asteroids[1].kick_speed + 1e-3;
            assert!(a.body.pos.distance(parent_pos) <= max_drift);
            assert_eq!(a.hull.points.len(), a.hull.outline.len());
        }

        // Destroying again is a no-op
        let again = rock.destroy(&mut spawned, bounds(), &tuning, &mut rng);
        assert_eq!(again, 0);
        assert_eq!(spawned.len(), 3);
    }

    #[test]
    fn test_smallest_asteroid_spawns_nothing() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let mut rock =
            Shootable::Asteroid(Asteroid::new(3, Vec2::new(50.0, 50.0), Vec2::ZERO, &tuning, &mut rng));
        let mut spawned = Vec::new();
        let score = rock.destroy(&mut spawned, bounds(), &tuning, &mut rng);
        assert_eq!(score, 250);
        assert!(spawned.is_empty());
    }

    #[test]
    fn test_saucer_speed_is_constant() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let mut saucer = Saucer::new(bounds(), &tuning, &mut rng);
        for _ in 0..20 {
            saucer.advance(bounds(), &tuning, &mut rng);
            assert!((saucer.body.vel.length() - tuning.saucer.speed).abs() < 1e-4);
        }
    }
}
