//! Canvas 2D backend

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Shape, scene};
use crate::config::GameConfig;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size the canvas to the world and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, config: &GameConfig) -> Result<Self, JsValue> {
        canvas.set_width(config.game.width as u32);
        canvas.set_height(config.game.height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        Ok(Self { ctx })
    }

    pub fn render(&self, state: &GameState) {
        for shape in scene(state) {
            match shape {
                Shape::Rect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
                }
                Shape::Text {
                    x,
                    y,
                    size,
                    text,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.set_font(&format!("bold {}px sans-serif", size));
                    if let Err(e) = self.ctx.fill_text(&text, x as f64, y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }
}
