use crate::error::Result;
use crate::interaction::PointerEvent;
use crate::io::source::{SelectedFile, SourceImage};
use crate::view::SizePreset;

/// Every input the widget reacts to.
#[derive(Clone, Debug)]
pub enum WidgetEvent {
    /// The file input changed. `None` when the picker was dismissed.
    FileSelected(Option<SelectedFile>),
    /// A decode started by [`DecodeRequest`] finished.
    ImageDecoded { generation: u64, image: SourceImage },
    /// Pointer or wheel input over the preview surface.
    Pointer(PointerEvent),
    PresetSelected(SizePreset),
    CustomWidthChanged(String),
    CustomHeightChanged(String),
    ExportRequested,
}

impl WidgetEvent {
    /// Whether the host must cancel the input's default action (page scroll).
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Pointer(PointerEvent::Wheel { .. }))
    }
}

/// Result of dispatching one event.
#[derive(Debug)]
pub enum Effect {
    /// Nothing changed.
    Ignored,
    /// State changed without affecting the preview.
    Updated,
    /// The preview surface was redrawn.
    Rendered,
    /// The host must run the decode (possibly off-thread) and feed the
    /// resulting event back.
    DecodeRequested(DecodeRequest),
    /// New outputs are available and the notifier was called.
    Exported,
}

/// Pending decode of a selected file.
#[derive(Debug)]
pub struct DecodeRequest {
    generation: u64,
    file: SelectedFile,
}

impl DecodeRequest {
    pub(crate) fn new(generation: u64, file: SelectedFile) -> Self {
        Self { generation, file }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    /// Decode the file into an [`WidgetEvent::ImageDecoded`] event.
    pub fn decode(self) -> Result<WidgetEvent> {
        let image = SourceImage::decode(&self.file.bytes)?;
        Ok(WidgetEvent::ImageDecoded {
            generation: self.generation,
            image,
        })
    }
}
