//! Rasterization of the visible frame and the exported image.
//!
//! Every redraw is a full reconstruction from (base image, zoom,
//! committed segments, optional live segment). There is no incremental
//! patching: identical inputs always produce identical pixels, and no
//! stale state can leak between frames.

use image::RgbaImage;
use tiny_skia::{
    FilterQuality, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::segment::Segment;
use crate::transform::{ScaledSegment, scale_for_render, to_original_space};

/// Surface dimensions for a base image displayed at `zoom` percent.
/// Rounded to the nearest pixel with a floor of 1.
pub fn scaled_dimensions(width: u32, height: u32, zoom: u32) -> (u32, u32) {
    let factor = zoom as f32 / 100.0;
    let w = (width as f32 * factor).round().max(1.0) as u32;
    let h = (height as f32 * factor).round().max(1.0) as u32;
    (w, h)
}

/// Produce the full visible frame: the base image scaled to `zoom`,
/// all committed segments re-scaled from their recorded zoom, and the
/// live preview segment on top if one is in progress.
///
/// Returns None only if the surface cannot be allocated (degenerate
/// dimensions).
pub fn render(
    base: &RgbaImage,
    zoom: u32,
    committed: &[Segment],
    live: Option<&Segment>,
) -> Option<RgbaImage> {
    let (w, h) = scaled_dimensions(base.width(), base.height(), zoom);
    let mut pixmap = Pixmap::new(w, h)?;

    draw_base_image(&mut pixmap, base, zoom as f32 / 100.0)?;

    for segment in committed {
        draw_segment(&mut pixmap, &scale_for_render(segment, zoom), segment);
    }
    if let Some(segment) = live {
        draw_segment(&mut pixmap, &scale_for_render(segment, zoom), segment);
    }

    RgbaImage::from_raw(w, h, pixmap.take())
}

/// Flatten the committed segments onto the base image at its native
/// resolution. Endpoints are mapped back to original-image space;
/// stroke widths are used as stored, unscaled.
pub fn flatten(base: &RgbaImage, committed: &[Segment]) -> Option<RgbaImage> {
    let (w, h) = (base.width(), base.height());
    let mut pixmap = Pixmap::from_vec(base.as_raw().clone(), IntSize::from_wh(w, h)?)?;

    for segment in committed {
        draw_segment(&mut pixmap, &to_original_space(segment), segment);
    }

    RgbaImage::from_raw(w, h, pixmap.take())
}

/// Draw the base image scaled to fill the surface.
fn draw_base_image(pixmap: &mut Pixmap, base: &RgbaImage, factor: f32) -> Option<()> {
    let size = IntSize::from_wh(base.width(), base.height())?;
    let source = Pixmap::from_vec(base.as_raw().clone(), size)?;

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    pixmap.draw_pixmap(
        0,
        0,
        source.as_ref(),
        &paint,
        Transform::from_scale(factor, factor),
        None,
    );
    Some(())
}

/// Stroke one resolved segment. Butt caps, matching how the original
/// is censored: the bar ends exactly at the clicked endpoints.
fn draw_segment(pixmap: &mut Pixmap, scaled: &ScaledSegment, segment: &Segment) {
    let mut pb = PathBuilder::new();
    pb.move_to(scaled.start.x, scaled.start.y);
    pb.line_to(scaled.end.x, scaled.end.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let [r, g, b, a] = segment.color().to_array();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: scaled.width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
