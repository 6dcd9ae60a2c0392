//! Rendering surface for the backdrop: a transparent canvas drawing the
//! shapes as alpha-blended line lists.

mod camera;

pub use camera::view_projection;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Canvas, RenderError, Renderer};

#[cfg(not(target_arch = "wasm32"))]
mod native_stub;

#[cfg(not(target_arch = "wasm32"))]
pub use native_stub::{Canvas, RenderError, Renderer};
