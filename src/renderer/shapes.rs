//! Scene description for one frame
//!
//! Turns the simulation state into flat draw commands so the backend only
//! has to fill rectangles and print text.

use crate::sim::{GamePhase, GameState};

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0,
            self.1,
            self.2,
            self.3 as f32 / 255.0
        )
    }
}

pub const SKY: Color = Color(0x87, 0xce, 0xeb, 0xff);
pub const PIPE: Color = Color(0x2e, 0xc4, 0x41, 0xff);
pub const PIPE_LIP: Color = Color(0x1c, 0x8a, 0x2b, 0xff);
pub const BIRD: Color = Color(0xff, 0xd0, 0x2a, 0xff);
pub const BIRD_CRASHED: Color = Color(0xe6, 0x22, 0x2f, 0xff);
pub const OVERLAY: Color = Color(0, 0, 0, 0x80);
pub const TEXT: Color = Color(0xff, 0xff, 0xff, 0xff);

/// Height of the darker band at a pipe's open end
const LIP_HEIGHT: f32 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    /// Centered text
    Text {
        x: f32,
        y: f32,
        size: f32,
        text: String,
        color: Color,
    },
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> Shape {
    Shape::Rect { x, y, w, h, color }
}

fn text(x: f32, y: f32, size: f32, text: &str) -> Shape {
    Shape::Text {
        x,
        y,
        size,
        text: text.to_string(),
        color: TEXT,
    }
}

/// Build the draw list: background, pipes, bird, score, phase overlay.
pub fn scene(state: &GameState) -> Vec<Shape> {
    let config = &state.config;
    let (width, height) = (config.game.width, config.game.height);
    let mut shapes = Vec::with_capacity(4 + state.pipes.len() * 4);

    shapes.push(rect(0.0, 0.0, width, height, SKY));

    let pipe_w = config.pipe.width;
    for pipe in &state.pipes {
        let bottom_y = pipe.gap_bottom(config);
        shapes.push(rect(pipe.x, 0.0, pipe_w, pipe.top_height, PIPE));
        shapes.push(rect(pipe.x, bottom_y, pipe_w, pipe.bottom_height, PIPE));

        let top_lip = LIP_HEIGHT.min(pipe.top_height);
        if top_lip > 0.0 {
            shapes.push(rect(pipe.x, pipe.top_height - top_lip, pipe_w, top_lip, PIPE_LIP));
        }
        let bottom_lip = LIP_HEIGHT.min(pipe.bottom_height);
        if bottom_lip > 0.0 {
            shapes.push(rect(pipe.x, bottom_y, pipe_w, bottom_lip, PIPE_LIP));
        }
    }

    let bird_color = if state.phase == GamePhase::GameOver {
        BIRD_CRASHED
    } else {
        BIRD
    };
    shapes.push(rect(
        config.bird.position.x,
        state.bird.y,
        config.bird.width,
        config.bird.height,
        bird_color,
    ));

    shapes.push(text(width / 2.0, 60.0, 48.0, &state.score.to_string()));

    match state.phase {
        GamePhase::Idle => {
            shapes.push(text(width / 2.0, height / 2.0 - 60.0, 28.0, "Click or press Space"));
        }
        GamePhase::Running => {}
        GamePhase::GameOver => {
            shapes.push(rect(0.0, 0.0, width, height, OVERLAY));
            shapes.push(text(width / 2.0, height / 2.0, 48.0, "Game Over"));
        }
    }

    shapes
}
