pub mod app;
pub mod assets;
pub mod background;
pub mod config;
pub mod entity;
pub mod formation;
pub mod game_over;
pub mod render;
pub mod screen;
pub mod session;
pub mod start_screen;

pub use app::InvasionApp;
pub use config::GameConfig;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 800;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 600;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
