//! The single mutable state owner for an editing session.
//!
//! UI callbacks never touch history, session or image state directly;
//! they go through the `Editor` entry points, which keep the aggregate
//! consistent and bump a revision counter so the frame cache knows when
//! the visible canvas must be rebuilt.

use egui::{Color32, Pos2};
use image::RgbaImage;

use crate::history::History;
use crate::input::InputEvent;
use crate::render;
use crate::segment::{MAX_LINE_WIDTH, MIN_LINE_WIDTH, Segment};
use crate::session::{ControlIntent, DEFAULT_ZOOM, DrawingSession, MAX_ZOOM, MIN_ZOOM, step_zoom};

pub struct Editor {
    /// The originally loaded raster, immutable for the session.
    base_image: Option<RgbaImage>,
    history: History,
    session: DrawingSession,
    zoom: u32,
    line_width: f32,
    line_color: Color32,
    /// Incremented on every state change that affects the visible
    /// frame. The frame cache re-renders only when this moves.
    revision: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_settings(10.0, Color32::BLACK, DEFAULT_ZOOM)
    }

    /// Create an editor with restored tool settings.
    pub fn with_settings(line_width: f32, line_color: Color32, zoom: u32) -> Self {
        Self {
            base_image: None,
            history: History::new(),
            session: DrawingSession::new(),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            line_width: line_width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            line_color,
            revision: 0,
        }
    }

    /// Replace the session image. Atomically discards the previous
    /// image, all history, and any in-progress segment. The zoom level
    /// and tool settings are kept.
    pub fn load_image(&mut self, image: RgbaImage) {
        log::info!("loaded image {}x{}", image.width(), image.height());
        self.base_image = Some(image);
        self.history.reset();
        self.session.reset();
        self.touch();
    }

    pub fn has_image(&self) -> bool {
        self.base_image.is_some()
    }

    /// Dispatch one normalized input event to the matching entry point.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click(p) => self.on_click(p),
            InputEvent::PointerMove(p) => self.on_pointer_move(p),
            InputEvent::ControlDelta(delta) => self.on_control_delta(delta),
        }
    }

    /// A click on the canvas, in current-canvas pixel space. The first
    /// click arms the session; the second confirms and commits the
    /// segment. Ignored until an image is loaded.
    pub fn on_click(&mut self, p: Pos2) {
        if !self.has_image() {
            return;
        }
        if self.session.is_armed() {
            if let Some(segment) = self.session.confirm(p, self.zoom) {
                self.history.commit(segment);
            }
        } else {
            self.session.arm(p, self.line_width, self.line_color);
        }
        self.touch();
    }

    /// Pointer movement only matters while a segment is in progress.
    pub fn on_pointer_move(&mut self, p: Pos2) {
        if self.session.is_armed() {
            self.session.update_endpoint(p);
            self.touch();
        }
    }

    /// The modal wheel control: zoom when idle, pending line width
    /// while armed. Ignored until an image is loaded.
    pub fn on_control_delta(&mut self, delta: i32) {
        if !self.has_image() || delta == 0 {
            return;
        }
        match self.session.control_intent() {
            ControlIntent::Zoom => {
                self.zoom = step_zoom(self.zoom, delta);
            }
            ControlIntent::Width => {
                self.session.adjust_width(delta.signum());
                // Keep the tool setting in sync so the width slider
                // reflects the wheel adjustment.
                if let Some(width) = self.session.pending_width() {
                    self.line_width = width;
                }
            }
        }
        self.touch();
    }

    pub fn on_color_change(&mut self, color: Color32) {
        self.line_color = color;
        self.session.set_color(color);
        self.touch();
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Slider input; clamped, never rejected.
    pub fn set_zoom(&mut self, zoom: u32) {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom != self.zoom {
            self.zoom = zoom;
            self.touch();
        }
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Slider input; also resizes the pending segment if one is armed.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        self.session.set_width(self.line_width);
        self.touch();
    }

    pub fn line_color(&self) -> Color32 {
        self.line_color
    }

    pub fn is_armed(&self) -> bool {
        self.session.is_armed()
    }

    /// What the wheel would do right now, for the mode indicator.
    pub fn control_intent(&self) -> ControlIntent {
        self.session.control_intent()
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.touch();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.touch();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The committed segments, oldest first.
    pub fn committed(&self) -> &[Segment] {
        self.history.committed()
    }

    /// Rebuild the visible frame from scratch. None until an image is
    /// loaded.
    pub fn render_frame(&self) -> Option<RgbaImage> {
        let base = self.base_image.as_ref()?;
        let live = self.session.live_segment(self.zoom);
        render::render(base, self.zoom, self.history.committed(), live.as_ref())
    }

    /// Flatten the committed segments onto the base image at native
    /// resolution, independent of the current zoom and session state.
    pub fn flatten(&self) -> Option<RgbaImage> {
        let base = self.base_image.as_ref()?;
        let flattened = render::flatten(base, self.history.committed());
        if flattened.is_some() {
            log::info!(
                "flattened {} segment(s) at {}x{}",
                self.history.committed().len(),
                base.width(),
                base.height()
            );
        }
        flattened
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
