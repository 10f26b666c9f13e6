use egui::{Color32, Pos2};

/// Bounds for the line width setting, in display units.
pub const MIN_LINE_WIDTH: f32 = 1.0;
pub const MAX_LINE_WIDTH: f32 = 100.0;

// Immutable committed censoring line. The zoom level active at commit
// time is baked in so the segment can be re-rendered at any later zoom
// without rewriting history.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Pos2,
    end: Pos2,
    width: f32,
    color: Color32,
    recorded_zoom: u32,
}

impl Segment {
    /// Create a new segment. Width is clamped to the valid range and
    /// `recorded_zoom` is clamped to at least 1 so the scaling ratio
    /// is always defined.
    pub fn new(start: Pos2, end: Pos2, width: f32, color: Color32, recorded_zoom: u32) -> Self {
        Self {
            start,
            end,
            width: width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            color,
            recorded_zoom: recorded_zoom.max(1),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    /// Line width in display units, interpreted against the 100% zoom
    /// baseline (not against `recorded_zoom`).
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// The zoom percentage in effect when the endpoints were captured.
    pub fn recorded_zoom(&self) -> u32 {
        self.recorded_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped_on_construction() {
        let s = Segment::new(Pos2::ZERO, Pos2::new(1.0, 1.0), 500.0, Color32::BLACK, 100);
        assert_eq!(s.width(), MAX_LINE_WIDTH);

        let s = Segment::new(Pos2::ZERO, Pos2::new(1.0, 1.0), 0.0, Color32::BLACK, 100);
        assert_eq!(s.width(), MIN_LINE_WIDTH);
    }

    #[test]
    fn recorded_zoom_never_zero() {
        let s = Segment::new(Pos2::ZERO, Pos2::ZERO, 4.0, Color32::BLACK, 0);
        assert_eq!(s.recorded_zoom(), 1);
    }
}
