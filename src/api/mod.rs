pub mod catalogue;
pub mod gemini;
pub mod models;

pub use catalogue::*;
pub use gemini::*;
pub use models::*;
