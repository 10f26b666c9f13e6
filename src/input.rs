use egui::{Context, PointerButton, Pos2, Rect};

/// Normalized input events delivered to the editor. Positions are in
/// current-canvas pixel space, relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button click on the canvas.
    Click(Pos2),
    /// Pointer moved over the canvas.
    PointerMove(Pos2),
    /// One step of the modal wheel control (Ctrl+wheel). Positive is
    /// "up": zoom in when idle, widen the pending line while armed.
    ControlDelta(i32),
}

/// Converts raw egui input into canvas-space `InputEvent`s.
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: None,
            last_pointer_pos: None,
        }
    }

    /// Update where the canvas lives in screen coordinates. Must be
    /// called each frame before `process_input`.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// The pointer position over the canvas, if any, in canvas space.
    /// Used for the status bar coordinate readout.
    pub fn hover_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Process raw egui input and generate canvas-space events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(rect) = self.canvas_rect else {
            return events;
        };

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if rect.contains(pos) {
                    let canvas_pos = (pos - rect.min).to_pos2();
                    if Some(canvas_pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove(canvas_pos));
                    }
                    self.last_pointer_pos = Some(canvas_pos);

                    if input.pointer.button_clicked(PointerButton::Primary) {
                        events.push(InputEvent::Click(canvas_pos));
                    }
                } else {
                    self.last_pointer_pos = None;
                }
            } else {
                self.last_pointer_pos = None;
            }

            // Ctrl+wheel is the modal control; plain scrolling is left
            // to the surrounding scroll area.
            if input.modifiers.ctrl {
                let scroll = input.raw_scroll_delta.y;
                if scroll != 0.0 {
                    events.push(InputEvent::ControlDelta(scroll.signum() as i32));
                }
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
