//! Canvas 2D rendering module (wasm only)
//!
//! Reads the simulation state; never mutates it.

pub mod canvas;

pub use canvas::CanvasRenderer;
