//! Pure zoom re-scaling for segments.
//!
//! Endpoints were captured in the display space of `recorded_zoom`, so
//! they scale by `target_zoom / recorded_zoom`. Width is interpreted in
//! original-image units and scales by `target_zoom / 100` regardless of
//! the zoom the user happened to be viewing at when the segment was
//! committed. The asymmetry is intentional; see `to_original_space`.

use egui::Pos2;

use crate::segment::Segment;

/// A segment's endpoints and stroke width resolved for one zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSegment {
    pub start: Pos2,
    pub end: Pos2,
    pub width: f32,
}

/// Map a segment into the display space of `target_zoom`.
pub fn scale_for_render(segment: &Segment, target_zoom: u32) -> ScaledSegment {
    let ratio = target_zoom as f32 / segment.recorded_zoom() as f32;
    ScaledSegment {
        start: scale_point(segment.start(), ratio),
        end: scale_point(segment.end(), ratio),
        width: segment.width() * (target_zoom as f32 / 100.0),
    }
}

/// Map a segment's endpoints into original-image space (zoom 100%).
///
/// The returned width is the raw stored width, unscaled: export renders
/// at native resolution where the stored width already is the intended
/// stroke width.
pub fn to_original_space(segment: &Segment) -> ScaledSegment {
    ScaledSegment {
        width: segment.width(),
        ..scale_for_render(segment, 100)
    }
}

fn scale_point(p: Pos2, ratio: f32) -> Pos2 {
    Pos2::new(p.x * ratio, p.y * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn seg(zoom: u32) -> Segment {
        Segment::new(
            Pos2::new(40.0, 80.0),
            Pos2::new(120.0, 80.0),
            10.0,
            Color32::BLACK,
            zoom,
        )
    }

    #[test]
    fn endpoints_scale_relative_to_recorded_zoom() {
        let scaled = scale_for_render(&seg(200), 100);
        assert_eq!(scaled.start, Pos2::new(20.0, 40.0));
        assert_eq!(scaled.end, Pos2::new(60.0, 40.0));
    }

    #[test]
    fn width_scales_relative_to_canonical_baseline() {
        // Committed at 400% with width 10: at 100% the stroke is still
        // 10 wide, not 2.5.
        let s = Segment::new(Pos2::ZERO, Pos2::ZERO, 10.0, Color32::BLACK, 400);
        assert_eq!(scale_for_render(&s, 100).width, 10.0);
        assert_eq!(scale_for_render(&s, 200).width, 20.0);
    }

    #[test]
    fn original_space_is_identity_at_zoom_100() {
        let s = seg(100);
        let orig = to_original_space(&s);
        assert_eq!(orig.start, s.start());
        assert_eq!(orig.end, s.end());
        assert_eq!(orig.width, s.width());
    }
}
