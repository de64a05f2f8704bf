#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
mod id_generator;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{Command, CommandHistory, CommandId, Drawable};
pub use config::SketchConfig;
pub use error::{ConfigError, SketchError};
pub use input::{InputEvent, InputHandler};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use sketchpad::{SketchEvent, Sketchpad};
pub use surface::{PainterSurface, RecordingSurface, Surface};
pub use tools::{ToolKind, ToolState};
