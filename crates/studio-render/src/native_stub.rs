use studio_geom::LineBatch;
use thiserror::Error;

/// Placeholder type for non-wasm targets.
pub struct Canvas;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("studio-render only draws into a browser canvas (wasm32)")]
    Unsupported,
}

pub struct Renderer;

impl Renderer {
    pub async fn new(_canvas: Canvas) -> Result<Self, RenderError> {
        Err(RenderError::Unsupported)
    }

    pub fn attach_resize_handler(&mut self, _canvas: &Canvas) {}

    pub fn resize(&mut self, _width: u32, _height: u32) {}

    pub fn set_lines(&mut self, _lines: &LineBatch) {}

    pub fn render(&mut self) {}
}
