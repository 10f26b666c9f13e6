use egui::{Color32, Pos2};
use redact_paint::segment::Segment;
use redact_paint::transform::{scale_for_render, to_original_space};

const EPSILON: f32 = 1e-3;

fn assert_pos_eq(a: Pos2, b: Pos2) {
    assert!(
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
        "{a:?} != {b:?}"
    );
}

#[test]
fn scaling_is_zoom_order_independent() {
    // Re-capturing a segment's endpoints at one zoom and scaling from
    // there must agree with scaling directly from the recorded zoom.
    let segment = Segment::new(
        Pos2::new(34.0, 71.0),
        Pos2::new(210.0, 9.0),
        12.0,
        Color32::BLACK,
        170,
    );

    for z1 in [37u32, 100, 250, 1333] {
        for z2 in [50u32, 100, 400, 5000] {
            let at_z1 = scale_for_render(&segment, z1);
            let recaptured = Segment::new(at_z1.start, at_z1.end, segment.width(), segment.color(), z1);

            let direct = scale_for_render(&segment, z2);
            let via_z1 = scale_for_render(&recaptured, z2);

            assert_pos_eq(via_z1.start, direct.start);
            assert_pos_eq(via_z1.end, direct.end);
            assert!((via_z1.width - direct.width).abs() < EPSILON);
        }
    }
}

#[test]
fn original_space_matches_scale_to_100() {
    let segment = Segment::new(
        Pos2::new(20.0, 20.0),
        Pos2::new(40.0, 20.0),
        10.0,
        Color32::RED,
        200,
    );

    let orig = to_original_space(&segment);
    let at_100 = scale_for_render(&segment, 100);
    assert_pos_eq(orig.start, at_100.start);
    assert_pos_eq(orig.end, at_100.end);

    assert_pos_eq(orig.start, Pos2::new(10.0, 10.0));
    assert_pos_eq(orig.end, Pos2::new(20.0, 10.0));
}

#[test]
fn original_space_is_identity_for_segments_recorded_at_100() {
    let segment = Segment::new(
        Pos2::new(13.0, 17.0),
        Pos2::new(99.0, 1.0),
        7.0,
        Color32::BLACK,
        100,
    );

    let orig = to_original_space(&segment);
    assert_pos_eq(orig.start, segment.start());
    assert_pos_eq(orig.end, segment.end());
    assert_eq!(orig.width, segment.width());
}

#[test]
fn width_scales_from_the_100_percent_baseline() {
    // A segment committed at zoom 400 with width 10 renders at width
    // 10 at zoom 100, not 2.5. Export uses the raw width entirely.
    let segment = Segment::new(Pos2::ZERO, Pos2::new(10.0, 0.0), 10.0, Color32::BLACK, 400);

    assert!((scale_for_render(&segment, 100).width - 10.0).abs() < EPSILON);
    assert!((scale_for_render(&segment, 50).width - 5.0).abs() < EPSILON);
    assert!((scale_for_render(&segment, 400).width - 40.0).abs() < EPSILON);
    assert_eq!(to_original_space(&segment).width, 10.0);
}
