pub mod config;
pub mod consts;
pub mod error;
pub mod interaction;
pub mod io;
pub mod render;
pub mod view;
pub mod widget;

pub use widget::{ImageResizerWidget, WidgetEvent, WidgetOutputs};
