//! Canvas 2D backend

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::DrawCmd;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint a draw list in order
    pub fn draw(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for cmd in cmds {
            match cmd {
                DrawCmd::Rect { x, y, w, h, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::Circle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, PI * 2.0)?;
                    ctx.fill();
                }
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => {
                    ctx.set_font(font);
                    ctx.set_fill_style_str(color);
                    ctx.fill_text(text, *x as f64, *y as f64)?;
                }
            }
        }
        Ok(())
    }
}
