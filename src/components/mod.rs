//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod gemini_badge;
mod hero;
mod icons;
mod landing;
mod lyrics_panel;
mod player;
mod player_controller;
mod top_bar;
mod visualizer;
mod visualizer_panel;

pub use app::*;
pub use audio_manager::*;
pub use gemini_badge::*;
pub use hero::*;
pub use icons::*;
pub use landing::*;
pub use lyrics_panel::*;
pub use player::*;
pub use player_controller::*;
pub use top_bar::*;
pub use visualizer::*;
pub use visualizer_panel::*;
