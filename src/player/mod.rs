//! Playback state and its synchronization with the media element.

mod state;
mod transport;

pub use state::*;
pub use transport::*;
