pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod scene;

pub use canvas::{Canvas, Viewport};
pub use color::Color;
pub use error::RenderError;
pub use scene::{Bounds, Point, Scene, Shape};
