use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::editor::Editor;

/// Caches the rendered frame as an egui texture, re-rendering only
/// when the editor revision moves. The frame is shown 1:1 (scaling
/// already happened in the render pipeline), so no filtering is
/// needed when sampling.
pub struct FrameCache {
    texture: Option<TextureHandle>,
    rendered_revision: Option<u64>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self {
            texture: None,
            rendered_revision: None,
        }
    }

    /// Get the texture for the editor's current frame, rendering and
    /// uploading it if the editor changed since the last call. None
    /// until an image is loaded.
    pub fn texture(&mut self, editor: &Editor, ctx: &Context) -> Option<&TextureHandle> {
        if self.rendered_revision != Some(editor.revision()) {
            let frame = editor.render_frame()?;
            let size = [frame.width() as usize, frame.height() as usize];
            let color_image = ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
            self.texture = Some(ctx.load_texture("canvas_frame", color_image, TextureOptions::NEAREST));
            self.rendered_revision = Some(editor.revision());
        }
        self.texture.as_ref()
    }

    /// Drop the cached texture, forcing a re-render on the next frame.
    pub fn invalidate(&mut self) {
        self.texture = None;
        self.rendered_revision = None;
    }
}

impl Default for FrameCache {
    fn default() -> Self {
        Self::new()
    }
}
