//! The drawing session state machine.
//!
//! A segment is drawn with two clicks: the first arms the session with
//! an anchor point, pointer movement updates the live preview endpoint,
//! and the second click confirms the segment. While armed, the wheel
//! control is reinterpreted: it adjusts the pending line width instead
//! of the zoom level.

use egui::{Color32, Pos2};

use crate::segment::{MAX_LINE_WIDTH, MIN_LINE_WIDTH, Segment};

/// Zoom percentage bounds and default for a session.
pub const MIN_ZOOM: u32 = 1;
pub const MAX_ZOOM: u32 = 5000;
pub const DEFAULT_ZOOM: u32 = 100;

/// What a wheel gesture means, resolved once from the session state
/// instead of re-derived at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Idle: the wheel adjusts the zoom level.
    Zoom,
    /// Armed: the wheel adjusts the pending line width.
    Width,
}

/// The possible states of a drawing session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Not drawing; waiting for the first click.
    Idle,
    /// Anchor placed, awaiting the confirming click.
    Armed {
        anchor: Pos2,
        /// Follows the pointer for the live preview.
        live_endpoint: Pos2,
        /// Pending stroke settings. These track the current tool
        /// settings while armed so the preview and the confirmed
        /// segment always agree.
        width: f32,
        color: Color32,
    },
}

pub struct DrawingSession {
    state: SessionState,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, SessionState::Armed { .. })
    }

    /// How the wheel control should be interpreted right now.
    pub fn control_intent(&self) -> ControlIntent {
        if self.is_armed() {
            ControlIntent::Width
        } else {
            ControlIntent::Zoom
        }
    }

    /// The uncommitted preview segment, if the session is armed.
    pub fn live_segment(&self, current_zoom: u32) -> Option<Segment> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Armed {
                anchor,
                live_endpoint,
                width,
                color,
            } => Some(Segment::new(anchor, live_endpoint, width, color, current_zoom)),
        }
    }

    /// First click: place the anchor and arm the session.
    pub fn arm(&mut self, anchor: Pos2, width: f32, color: Color32) {
        self.state = SessionState::Armed {
            anchor,
            live_endpoint: anchor,
            width,
            color,
        };
    }

    /// Pointer movement while armed updates the preview endpoint.
    /// Ignored when idle.
    pub fn update_endpoint(&mut self, p: Pos2) {
        if let SessionState::Armed { live_endpoint, .. } = &mut self.state {
            *live_endpoint = p;
        }
    }

    /// Adjust the pending line width by `delta` steps, clamped to the
    /// valid range. Ignored when idle.
    pub fn adjust_width(&mut self, delta: i32) {
        if let SessionState::Armed { width, .. } = &mut self.state {
            *width = (*width + delta as f32).clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }
    }

    /// Replace the pending line width (slider input). Ignored when idle.
    pub fn set_width(&mut self, new_width: f32) {
        if let SessionState::Armed { width, .. } = &mut self.state {
            *width = new_width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }
    }

    /// Update the pending stroke color. Ignored when idle.
    pub fn set_color(&mut self, color: Color32) {
        if let SessionState::Armed { color: c, .. } = &mut self.state {
            *c = color;
        }
    }

    /// The pending line width, if armed.
    pub fn pending_width(&self) -> Option<f32> {
        match self.state {
            SessionState::Armed { width, .. } => Some(width),
            SessionState::Idle => None,
        }
    }

    /// Second click: disarm and produce the confirmed segment with the
    /// endpoint at `p`. Returns None if the session was not armed.
    pub fn confirm(&mut self, p: Pos2, current_zoom: u32) -> Option<Segment> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Armed { anchor, width, color, .. } => {
                self.state = SessionState::Idle;
                Some(Segment::new(anchor, p, width, color, current_zoom))
            }
        }
    }

    /// Discard any in-progress segment. Invoked on image load.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// One zoom step from `zoom`, in the direction of `delta`'s sign,
/// clamped to the valid range.
///
/// The step grows with the current zoom so wheel zooming feels uniform:
/// 5 below 100%, 10 below 200%, 25 below 500%, 50 below 1000%, then 10%
/// of the current zoom (at least 100). These thresholds are interaction
/// policy, not derived values.
pub fn step_zoom(zoom: u32, delta: i32) -> u32 {
    let step = if zoom < 100 {
        5
    } else if zoom < 200 {
        10
    } else if zoom < 500 {
        25
    } else if zoom < 1000 {
        50
    } else {
        ((zoom as f32 * 0.1).round() as u32).max(100)
    };

    if delta > 0 {
        zoom.saturating_add(step).min(MAX_ZOOM)
    } else {
        zoom.saturating_sub(step).max(MIN_ZOOM)
    }
}
