mod controller;
mod events;
mod host;

pub use controller::ImageResizerWidget;
pub use events::{DecodeRequest, Effect, WidgetEvent};
pub use host::{OutputNotifier, WidgetOutputs};
