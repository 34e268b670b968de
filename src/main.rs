//! Astro Rocks entry point
//!
//! The native binary runs the simulation headless at the fixed tick rate
//! and drives the render port with a draw-call-counting canvas. A real
//! frontend supplies its own `Canvas` and `InputState` wiring and calls
//! `tick` / `draw_frame` the same way this loop does.

use std::env;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use astro_rocks::consts::{FIELD_HEIGHT, FIELD_WIDTH, TICK_INTERVAL_MS};
use astro_rocks::render::{Canvas, Style, TextAlign, draw_frame};
use astro_rocks::{GamePhase, GameState, InputState, Key, Tuning, tick};

/// Headless canvas that only counts primitives per frame
#[derive(Default)]
struct HeadlessCanvas {
    draw_calls: usize,
}

impl Canvas for HeadlessCanvas {
    fn width(&self) -> f32 {
        FIELD_WIDTH
    }
    fn height(&self) -> f32 {
        FIELD_HEIGHT
    }
    fn clear(&mut self) {
        self.draw_calls = 0;
    }
    fn polyline(&mut self, _style: &Style, _points: &[Vec2]) {
        self.draw_calls += 1;
    }
    fn polygon(&mut self, _style: &Style, _points: &[Vec2]) {
        self.draw_calls += 1;
    }
    fn arc(&mut self, _style: &Style, _center: Vec2, _radius: f32) {
        self.draw_calls += 1;
    }
    fn text(&mut self, _style: &Style, _align: TextAlign, _text: &str, _pos: Vec2) {
        self.draw_calls += 1;
    }
    fn paint(&mut self) {}
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(500);

    log::info!("Astro Rocks (headless) starting, seed {seed}");

    let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    let mut state = GameState::new(seed, bounds, Tuning::default());
    let mut input = InputState::new();
    let mut canvas = HeadlessCanvas::default();

    // Start a game a second in, then let it run unattended
    let start_at = 1000 / TICK_INTERVAL_MS;
    let mut last_phase = state.phase;

    for n in 0..ticks {
        if n == start_at {
            input.key_down(Key::NewGame);
        }

        tick(&mut state, &input.take_tick_input());
        draw_frame(&state, &mut canvas);

        if state.phase != last_phase {
            match state.phase {
                GamePhase::Active => log::info!("game started at tick {n}"),
                GamePhase::Demo => log::info!("game over at tick {n}, score {}", state.score),
            }
            last_phase = state.phase;
        }

        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    log::info!(
        "stopped after {ticks} ticks: score {}, level {}, {} draw calls in last frame",
        state.score,
        state.level,
        canvas.draw_calls
    );
}
