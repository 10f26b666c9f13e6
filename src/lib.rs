#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod frame_cache;
pub mod history;
pub mod input;
pub mod render;
pub mod segment;
pub mod session;
pub mod transform;

pub use app::RedactApp;
pub use editor::Editor;
pub use error::LoadError;
pub use history::History;
pub use input::InputEvent;
pub use segment::Segment;
pub use session::{ControlIntent, DrawingSession};
pub use transform::{ScaledSegment, scale_for_render, to_original_space};
