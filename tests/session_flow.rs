use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};
use redact_paint::editor::Editor;
use redact_paint::input::InputEvent;
use redact_paint::session::ControlIntent;
use redact_paint::transform::to_original_space;

fn white_image(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
}

#[test]
fn click_move_click_commits_at_current_zoom() {
    let mut editor = Editor::new();
    editor.load_image(white_image(200, 100));
    editor.set_zoom(200);

    editor.on_click(Pos2::new(20.0, 20.0));
    assert!(editor.is_armed());
    editor.on_pointer_move(Pos2::new(40.0, 20.0));
    editor.on_click(Pos2::new(40.0, 20.0));
    assert!(!editor.is_armed());

    let committed = editor.committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].recorded_zoom(), 200);

    let orig = to_original_space(&committed[0]);
    assert_eq!(orig.start, Pos2::new(10.0, 10.0));
    assert_eq!(orig.end, Pos2::new(20.0, 10.0));
}

#[test]
fn events_are_ignored_until_an_image_is_loaded() {
    let mut editor = Editor::new();
    let zoom_before = editor.zoom();

    editor.on_click(Pos2::new(10.0, 10.0));
    editor.on_control_delta(1);
    editor.on_pointer_move(Pos2::new(20.0, 20.0));

    assert!(!editor.is_armed());
    assert!(editor.committed().is_empty());
    assert_eq!(editor.zoom(), zoom_before);
}

#[test]
fn wheel_is_zoom_when_idle_and_width_when_armed() {
    let mut editor = Editor::new();
    editor.load_image(white_image(100, 100));
    editor.set_zoom(90);
    editor.set_line_width(10.0);

    assert_eq!(editor.control_intent(), ControlIntent::Zoom);
    editor.on_control_delta(1);
    assert_eq!(editor.zoom(), 95);

    editor.on_click(Pos2::new(10.0, 10.0));
    assert_eq!(editor.control_intent(), ControlIntent::Width);
    editor.on_control_delta(1);
    editor.on_control_delta(1);
    assert_eq!(editor.zoom(), 95); // unchanged while armed
    assert_eq!(editor.line_width(), 12.0);

    // The confirmed segment carries the adjusted width.
    editor.on_click(Pos2::new(50.0, 10.0));
    assert_eq!(editor.committed()[0].width(), 12.0);
}

#[test]
fn zoom_step_schedule_through_the_editor() {
    let mut editor = Editor::new();
    editor.load_image(white_image(10, 10));

    for (start, expected) in [(90, 95), (150, 160), (300, 325), (800, 850), (2000, 2200)] {
        editor.set_zoom(start);
        editor.on_control_delta(1);
        assert_eq!(editor.zoom(), expected, "one step up from {start}%");
    }
}

#[test]
fn loading_a_new_image_resets_history_and_session() {
    let mut editor = Editor::new();
    editor.load_image(white_image(50, 50));

    editor.on_click(Pos2::new(5.0, 5.0));
    editor.on_click(Pos2::new(25.0, 5.0));
    editor.undo();
    assert!(editor.can_redo());

    // Arm a new segment, then replace the image mid-draw.
    editor.on_click(Pos2::new(10.0, 10.0));
    assert!(editor.is_armed());

    editor.load_image(white_image(60, 60));
    assert!(!editor.is_armed());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert!(editor.committed().is_empty());
}

#[test]
fn color_changes_apply_to_the_pending_segment() {
    let mut editor = Editor::new();
    editor.load_image(white_image(50, 50));

    editor.on_click(Pos2::new(5.0, 5.0));
    editor.on_color_change(Color32::RED);
    editor.on_click(Pos2::new(25.0, 5.0));

    assert_eq!(editor.committed()[0].color(), Color32::RED);
    assert_eq!(editor.line_color(), Color32::RED);
}

#[test]
fn events_dispatch_to_the_same_entry_points() {
    let mut editor = Editor::new();
    editor.load_image(white_image(50, 50));

    editor.handle_event(InputEvent::Click(Pos2::new(5.0, 5.0)));
    editor.handle_event(InputEvent::PointerMove(Pos2::new(30.0, 5.0)));
    editor.handle_event(InputEvent::Click(Pos2::new(30.0, 5.0)));
    editor.handle_event(InputEvent::ControlDelta(1));

    assert_eq!(editor.committed().len(), 1);
    assert_eq!(editor.zoom(), 110); // one step up from 100
}

#[test]
fn slider_zoom_is_clamped_not_rejected() {
    let mut editor = Editor::new();
    editor.load_image(white_image(10, 10));

    editor.set_zoom(0);
    assert_eq!(editor.zoom(), 1);
    editor.set_zoom(999_999);
    assert_eq!(editor.zoom(), 5000);

    editor.set_line_width(1000.0);
    assert_eq!(editor.line_width(), 100.0);
    editor.set_line_width(0.0);
    assert_eq!(editor.line_width(), 1.0);
}
