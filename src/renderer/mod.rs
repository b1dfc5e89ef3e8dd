//! Rendering module
//!
//! `shapes` turns a simulation snapshot into a flat list of 2D draw commands;
//! `canvas` plays that list onto a browser Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{DrawCmd, frame};
