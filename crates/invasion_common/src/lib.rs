pub mod app;
pub mod bitmap;
pub mod color;
pub mod font;
pub mod frame;
pub mod key;

pub use bitmap::Bitmap;
pub use color::Color;
pub use frame::Frame;
