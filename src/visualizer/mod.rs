//! Live spectrum: a passive analyser tap on the media element and a
//! frame-aligned bar renderer.

mod engine;
mod frame_loop;
mod graph;
mod spectrum;
#[cfg(target_arch = "wasm32")]
mod web;

pub use engine::*;
pub use frame_loop::*;
pub use graph::*;
pub use spectrum::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;
