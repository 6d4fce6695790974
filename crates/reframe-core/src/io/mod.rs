pub mod encode;
pub mod source;

pub use encode::ExportResult;
pub use source::{SelectedFile, SourceImage};
