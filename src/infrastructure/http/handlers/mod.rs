//! HTTP Handlers

mod fallback;
mod menu;
mod ping;

pub use fallback::*;
pub use menu::*;
pub use ping::*;
