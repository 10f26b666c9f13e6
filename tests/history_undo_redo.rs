use egui::{Color32, Pos2};
use redact_paint::history::History;
use redact_paint::segment::Segment;

fn seg(x: f32) -> Segment {
    Segment::new(
        Pos2::new(x, 0.0),
        Pos2::new(x, 50.0),
        4.0,
        Color32::BLACK,
        100,
    )
}

#[test]
fn undo_redo_round_trip_restores_exact_sequence() {
    let mut history = History::new();
    for x in [1.0, 2.0, 3.0] {
        history.commit(seg(x));
    }
    let before: Vec<Segment> = history.committed().to_vec();

    history.undo();
    history.undo();
    history.redo();
    history.redo();

    assert_eq!(history.committed(), before.as_slice());
    assert!(!history.can_redo());
}

#[test]
fn commit_supersedes_undone_segments() {
    let mut history = History::new();
    history.commit(seg(1.0));
    history.commit(seg(2.0));
    history.undo();
    assert!(history.can_redo());

    history.commit(seg(3.0));

    // The undone segment is gone for good until another undo happens.
    assert!(!history.can_redo());
    assert!(!history.redo());
    let xs: Vec<f32> = history.committed().iter().map(|s| s.start().x).collect();
    assert_eq!(xs, vec![1.0, 3.0]);
}

#[test]
fn undo_beyond_empty_is_a_noop() {
    let mut history = History::new();
    history.commit(seg(1.0));
    assert!(history.undo());
    assert!(!history.undo());
    assert_eq!(history.committed().len(), 0);

    assert!(history.redo());
    assert_eq!(history.committed().len(), 1);
}

#[test]
fn reset_clears_both_stacks() {
    let mut history = History::new();
    history.commit(seg(1.0));
    history.commit(seg(2.0));
    history.undo();

    history.reset();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.committed().is_empty());
}
