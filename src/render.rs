//! Render port and frame drawing
//!
//! The core never talks to a real canvas: backends implement `Canvas` and
//! `draw_frame` turns a state snapshot into primitive calls on it. The
//! frame is draw-order sensitive (bullets under rocks under the ship,
//! HUD on top) but otherwise the backend decides how to realize each call.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, Shootable};

/// Paint-style descriptor handed along with each primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub stroke: Option<&'static str>,
    pub fill: Option<&'static str>,
    pub line_width: u32,
    /// Percent opacity (100 = opaque) - integral so styles stay const-able
    pub alpha: u32,
}

/// Horizontal anchoring for text primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing capabilities the core requires from a backend
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Wipe the frame
    fn clear(&mut self);
    /// Stroked outline through the point list, closing edge included
    fn polyline(&mut self, style: &Style, points: &[Vec2]);
    /// Filled polygon
    fn polygon(&mut self, style: &Style, points: &[Vec2]);
    /// Filled circle of the given radius
    fn arc(&mut self, style: &Style, center: Vec2, radius: f32);
    fn text(&mut self, style: &Style, align: TextAlign, text: &str, pos: Vec2);
    /// Flush the finished frame
    fn paint(&mut self);
}

pub const SHIP_STYLE: Style = Style {
    stroke: Some("white"),
    fill: Some("teal"),
    line_width: 1,
    alpha: 50,
};

pub const SAUCER_STYLE: Style = Style {
    stroke: Some("#0FF9FB"),
    fill: Some("#356070"),
    line_width: 1,
    alpha: 80,
};

pub const BULLET_STYLE: Style = Style {
    stroke: Some("red"),
    fill: Some("yellow"),
    line_width: 2,
    alpha: 100,
};

const ASTEROID_STYLE: Style = Style {
    stroke: Some("#808080"),
    fill: Some("#505050"),
    line_width: 1,
    alpha: 50,
};

/// Per-rock fill variations, selected by the rock's fixed shade value
const ASTEROID_PALETTE: [&str; 7] = [
    "#800000", "#008000", "#000080", "#008080", "#804000", "#808000", "#808080",
];

/// Flame colors cycled while thrusting
const THRUST_COLORS: [&str; 4] = ["teal", "lightblue", "green", "blue"];

const HUD_STYLE: Style = Style {
    stroke: None,
    fill: Some("yellow"),
    line_width: 1,
    alpha: 100,
};

const PROMPT_STYLE: Style = Style {
    stroke: None,
    fill: Some("green"),
    line_width: 1,
    alpha: 100,
};

/// Draw one frame of the current state. Read-only on the state; the flame
/// color cycles off the tick counter so no RNG is touched here.
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas) {
    canvas.clear();

    for bullet in state.bullets.iter().filter(|b| b.is_active()) {
        canvas.arc(&BULLET_STYLE, bullet.body.pos, 2.0);
    }

    for target in &state.shootables {
        match target {
            Shootable::Asteroid(a) => {
                let fill = ASTEROID_PALETTE[a.shade as usize % ASTEROID_PALETTE.len()];
                let style = Style { fill: Some(fill), ..ASTEROID_STYLE };
                canvas.polygon(&style, &a.hull.points);
            }
            Shootable::Saucer(s) => canvas.polygon(&SAUCER_STYLE, &s.hull.points),
        }
    }

    if let Some(ship) = &state.ship {
        canvas.polygon(&SHIP_STYLE, &ship.hull.points);
        if ship.thrust && !ship.destroyed {
            let color = THRUST_COLORS[state.time_ticks as usize % THRUST_COLORS.len()];
            let flame = Style {
                stroke: Some(color),
                fill: None,
                line_width: 2,
                alpha: 100,
            };
            canvas.polyline(&flame, &ship.thrust_flame());
        }
    }

    let w = canvas.width();
    let h = canvas.height();
    canvas.text(&HUD_STYLE, TextAlign::Left, &format!("Score: {}", state.score), Vec2::new(20.0, 40.0));
    canvas.text(&HUD_STYLE, TextAlign::Right, &format!("Lives: {}", state.lives), Vec2::new(w - 20.0, 40.0));

    if state.phase == GamePhase::Demo {
        let center = Vec2::new(w / 2.0, h / 2.0);
        canvas.text(&PROMPT_STYLE, TextAlign::Center, "Game Over", center);
        canvas.text(&PROMPT_STYLE, TextAlign::Center, "Press 'S' to Play", center + Vec2::new(0.0, 50.0));
    }

    canvas.paint();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    /// Counts primitive calls instead of drawing
    #[derive(Default)]
    struct RecordingCanvas {
        clears: usize,
        polygons: usize,
        polylines: usize,
        arcs: usize,
        texts: Vec<String>,
        paints: usize,
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> f32 {
            FIELD_WIDTH
        }
        fn height(&self) -> f32 {
            FIELD_HEIGHT
        }
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn polyline(&mut self, _style: &Style, _points: &[Vec2]) {
            self.polylines += 1;
        }
        fn polygon(&mut self, _style: &Style, _points: &[Vec2]) {
            self.polygons += 1;
        }
        fn arc(&mut self, _style: &Style, _center: Vec2, _radius: f32) {
            self.arcs += 1;
        }
        fn text(&mut self, _style: &Style, _align: TextAlign, text: &str, _pos: Vec2) {
            self.texts.push(text.to_string());
        }
        fn paint(&mut self) {
            self.paints += 1;
        }
    }

    fn new_state() -> GameState {
        GameState::new(5, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT), Tuning::default())
    }

    #[test]
    fn test_demo_frame_shows_prompt() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default());

        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.paints, 1);
        // One polygon per rock, no ship
        assert_eq!(canvas.polygons, state.shootables.len());
        assert_eq!(canvas.arcs, 0);
        assert!(canvas.texts.iter().any(|t| t == "Game Over"));
    }

    #[test]
    fn test_active_frame_draws_ship_and_hud() {
        let mut state = new_state();
        tick(&mut state, &TickInput { start: true, ..Default::default() });

        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        // Rocks plus the ship hull
        assert_eq!(canvas.polygons, state.shootables.len() + 1);
        assert!(canvas.texts.iter().any(|t| t.starts_with("Score:")));
        assert!(canvas.texts.iter().any(|t| t.starts_with("Lives:")));
        assert!(!canvas.texts.iter().any(|t| t == "Game Over"));
    }

    #[test]
    fn test_thrust_flame_only_while_thrusting() {
        let mut state = new_state();
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        state.shootables.clear(); // keep the ship alive

        tick(&mut state, &TickInput { thrust: true, ..Default::default() });
        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert_eq!(canvas.polylines, 1);

        tick(&mut state, &TickInput::default());
        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert_eq!(canvas.polylines, 0);
    }

    #[test]
    fn test_active_bullets_drawn_as_arcs() {
        let mut state = new_state();
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        state.shootables.clear();
        tick(&mut state, &TickInput { fire: true, ..Default::default() });

        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert_eq!(canvas.arcs, 1);
    }
}
