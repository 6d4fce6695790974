use chrono::Utc;
use tracing::{debug, info, trace, warn};

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::interaction::{handle_pointer, DragState, InputOutcome, PointerEvent};
use crate::io::encode::ExportResult;
use crate::io::source::{SelectedFile, SourceImage};
use crate::render::{render_export, render_preview, Surface};
use crate::view::{SizePreset, TargetSelection, TargetSize, ViewState};
use crate::widget::events::{DecodeRequest, Effect, WidgetEvent};
use crate::widget::host::{OutputNotifier, WidgetOutputs};

/// Interactive image resizer: owns the view state, target selection, source
/// bitmap, preview surface and last export for its whole lifetime.
pub struct ImageResizerWidget {
    config: WidgetConfig,
    view: ViewState,
    target: TargetSelection,
    drag: DragState,
    source: Option<SourceImage>,
    preview: Surface,
    last_export: Option<ExportResult>,
    /// Generation of the most recent file selection; older decodes are stale.
    generation: u64,
    notifier: Box<dyn OutputNotifier>,
}

impl ImageResizerWidget {
    /// Allocate the preview surface and reset all state.
    ///
    /// Fails if the configuration is invalid or the preview surface cannot
    /// be allocated; the widget is unusable without it.
    pub fn init(config: WidgetConfig, notifier: impl OutputNotifier + 'static) -> Result<Self> {
        config.validate()?;
        let preview = Surface::new(config.preview.width, config.preview.height)?;

        let mut widget = Self {
            config,
            view: ViewState::default(),
            target: TargetSelection::default(),
            drag: DragState::default(),
            source: None,
            preview,
            last_export: None,
            generation: 0,
            notifier: Box::new(notifier),
        };
        widget.redraw();

        info!(
            preview_w = widget.config.preview.width,
            preview_h = widget.config.preview.height,
            target = %widget.target.size(),
            "Widget initialized"
        );
        Ok(widget)
    }

    /// Host-driven refresh. The widget has no bound inputs, so nothing changes.
    pub fn update_view(&mut self) {
        trace!("update_view: no bound inputs");
    }

    /// Current output values. Empty until the first successful export.
    pub fn get_outputs(&self) -> WidgetOutputs {
        self.last_export
            .as_ref()
            .map(WidgetOutputs::from)
            .unwrap_or_default()
    }

    /// Release the widget and everything it owns.
    pub fn destroy(self) {
        debug!(had_image = self.source.is_some(), "Widget destroyed");
    }

    /// Route one event through the state machine.
    pub fn dispatch(&mut self, event: WidgetEvent) -> Result<Effect> {
        match event {
            WidgetEvent::FileSelected(file) => Ok(self.select_file(file)),
            WidgetEvent::ImageDecoded { generation, image } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "Stale decode result dropped"
                    );
                    return Ok(Effect::Ignored);
                }
                self.load_image(image);
                Ok(Effect::Rendered)
            }
            WidgetEvent::Pointer(pointer) => Ok(self.handle_pointer(pointer)),
            WidgetEvent::PresetSelected(preset) => {
                self.target.select_preset(preset);
                self.redraw();
                Ok(Effect::Rendered)
            }
            WidgetEvent::CustomWidthChanged(text) => {
                let changed = self.target.set_custom_width(text);
                Ok(self.redraw_if(changed))
            }
            WidgetEvent::CustomHeightChanged(text) => {
                let changed = self.target.set_custom_height(text);
                Ok(self.redraw_if(changed))
            }
            WidgetEvent::ExportRequested => self.export(),
        }
    }

    /// Select a file and decode it on the calling thread.
    pub fn load_file(&mut self, file: SelectedFile) -> Result<Effect> {
        match self.dispatch(WidgetEvent::FileSelected(Some(file)))? {
            Effect::DecodeRequested(request) => {
                let decoded = request.decode()?;
                self.dispatch(decoded)
            }
            other => Ok(other),
        }
    }

    /// Replace the source image, fit it to the preview and redraw.
    pub fn load_image(&mut self, image: SourceImage) {
        self.view.fit_image(
            self.config.preview.width,
            self.config.preview.height,
            image.width(),
            image.height(),
        );
        info!(
            width = image.width(),
            height = image.height(),
            scale = self.view.scale,
            "Image loaded"
        );
        self.source = Some(image);
        self.redraw();
    }

    /// Render at the target size, encode, store and notify the host.
    /// Does nothing when no image is loaded.
    pub fn export(&mut self) -> Result<Effect> {
        let Some(source) = self.source.as_ref().filter(|_| self.view.image_loaded) else {
            debug!("Export requested without an image; ignored");
            return Ok(Effect::Ignored);
        };

        let target = self.target.size();
        let surface = render_export(
            &self.view,
            source,
            target,
            self.config.preview.width,
            self.config.preview.height,
            self.config.export.scale_mode,
        )?;
        let result = ExportResult::encode(&surface, target, &self.config.export, Utc::now())?;

        self.last_export = Some(result);
        self.notifier.output_changed();
        Ok(Effect::Exported)
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn target_size(&self) -> TargetSize {
        self.target.size()
    }

    pub fn target_selection(&self) -> &TargetSelection {
        &self.target
    }

    pub fn preset(&self) -> SizePreset {
        self.target.preset()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn preview(&self) -> &Surface {
        &self.preview
    }

    pub fn last_export(&self) -> Option<&ExportResult> {
        self.last_export.as_ref()
    }

    fn select_file(&mut self, file: Option<SelectedFile>) -> Effect {
        let Some(file) = file else {
            debug!("File input changed without a file; ignored");
            return Effect::Ignored;
        };
        if !file.is_image() {
            warn!(name = %file.name, mime = %file.mime_type, "Rejected non-image file");
            return Effect::Ignored;
        }

        self.generation += 1;
        debug!(name = %file.name, generation = self.generation, "Decode requested");
        Effect::DecodeRequested(DecodeRequest::new(self.generation, file))
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> Effect {
        let outcome = handle_pointer(
            &mut self.drag,
            &mut self.view,
            pointer,
            self.config.preview.width,
            self.config.preview.height,
            &self.config.zoom,
        );
        match outcome {
            InputOutcome::Ignored => Effect::Ignored,
            InputOutcome::Updated => Effect::Updated,
            InputOutcome::Redraw => {
                self.redraw();
                Effect::Rendered
            }
        }
    }

    fn redraw_if(&mut self, changed: bool) -> Effect {
        if changed {
            self.redraw();
            Effect::Rendered
        } else {
            Effect::Updated
        }
    }

    fn redraw(&mut self) {
        render_preview(
            &mut self.preview,
            &self.view,
            self.source.as_ref(),
            self.target.size(),
            &self.config.guide,
        );
    }
}
