//! Utility functions and helpers

pub mod display;
pub mod render;

pub use display::{format_frame, format_grid_with_coords, ColorOutput, Tone};
pub use render::{BufferSink, NullSink, RenderSink, TerminalSink};
