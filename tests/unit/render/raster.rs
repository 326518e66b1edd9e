use super::*;
use crate::model::pyramid::PYRAMID_FACES;

const RED: Rgb8 = Rgb8::new(200, 0, 0);
const GREEN: Rgb8 = Rgb8::new(0, 200, 0);
const BLUE: Rgb8 = Rgb8::new(0, 0, 200);
const YELLOW: Rgb8 = Rgb8::new(200, 200, 0);
const MAGENTA: Rgb8 = Rgb8::new(200, 0, 200);

fn rasterizer() -> Rasterizer {
    Rasterizer::new(RasterSettings::default()).unwrap()
}

#[test]
fn settings_reject_zero_and_oversized_frames() {
    let zero = RasterSettings {
        size: 0,
        ..RasterSettings::default()
    };
    assert!(matches!(zero.validate(), Err(TumbleError::Validation(_))));

    let huge = RasterSettings {
        size: MAX_FRAME_SIZE + 1,
        ..RasterSettings::default()
    };
    assert!(Rasterizer::new(huge).is_err());

    let bad_stroke = RasterSettings {
        outline_width: -1.0,
        ..RasterSettings::default()
    };
    assert!(bad_stroke.validate().is_err());
}

#[test]
fn pairing_stops_at_shorter_list() {
    let four = [RED, GREEN, BLUE, YELLOW];
    let pairs: Vec<_> = paired_faces(&PYRAMID_FACES, &four).collect();
    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[3].0, PYRAMID_FACES[3]);

    let six = [RED, GREEN, BLUE, YELLOW, MAGENTA, RED];
    assert_eq!(paired_faces(&PYRAMID_FACES, &six).count(), 5);
}

#[test]
fn frame_has_exact_rgb_length_and_background_corners() {
    let frame = rasterizer()
        .draw_frame(0.0, &[RED, GREEN, BLUE, YELLOW])
        .unwrap();
    assert_eq!(frame.width, 500);
    assert_eq!(frame.height, 500);
    assert_eq!(frame.data.len(), 500 * 500 * 3);
    for (x, y) in [(0, 0), (499, 0), (0, 499), (499, 499)] {
        assert_eq!(frame.pixel(x, y), Some(Rgb8::BLACK));
    }
}

#[test]
fn later_faces_paint_over_earlier_ones_at_center() {
    // The center is covered by the front side (face 1) and the back side (face 3); without a
    // depth test the later declaration wins.
    let frame = rasterizer()
        .draw_frame(0.0, &[RED, GREEN, BLUE, YELLOW])
        .unwrap();
    assert_eq!(frame.pixel(250, 250), Some(YELLOW));
}

#[test]
fn fifth_face_is_skipped_without_a_fifth_color() {
    // (224, 262) lies inside the left side (face 4) and the front side (face 1) only.
    let mut r = rasterizer();
    let with_five = r
        .draw_frame(0.0, &[RED, GREEN, BLUE, YELLOW, MAGENTA])
        .unwrap();
    assert_eq!(with_five.pixel(224, 262), Some(MAGENTA));

    let with_four = r.draw_frame(0.0, &[RED, GREEN, BLUE, YELLOW]).unwrap();
    assert_eq!(with_four.pixel(224, 262), Some(GREEN));
    assert_eq!(with_four.count_color(MAGENTA), 0);
}

#[test]
fn no_colors_leaves_only_background() {
    let frame = rasterizer().draw_frame(1.0, &[]).unwrap();
    assert_eq!(frame.count_color(Rgb8::BLACK), 500 * 500);
}

#[test]
fn rasterizer_reuse_does_not_leak_between_frames() {
    let colors = [RED, GREEN, BLUE, YELLOW];
    let mut r = rasterizer();
    let first = r.draw_frame(0.0, &colors).unwrap();
    let _other = r.draw_frame(2.0, &colors).unwrap();
    let again = r.draw_frame(0.0, &colors).unwrap();
    assert_eq!(first, again);
    assert_eq!(first, draw_frame(0.0, &colors, RasterSettings::default()).unwrap());
}

#[test]
fn single_pixel_frame_is_three_bytes() {
    let settings = RasterSettings {
        size: 1,
        ..RasterSettings::default()
    };
    let frame = draw_frame(0.0, &[RED, GREEN, BLUE, YELLOW], settings).unwrap();
    assert_eq!(frame.data.len(), 3);
}

#[test]
fn face_path_is_closed_and_pixel_centered() {
    let pts = [
        ProjectedPoint { x: 0, y: 0 },
        ProjectedPoint { x: 10, y: 0 },
        ProjectedPoint { x: 0, y: 10 },
    ];
    let path = face_path(PYRAMID_FACES[1], &[pts[0], pts[1], pts[2], pts[2], pts[2]]).unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 4);
    assert_eq!(els[0], kurbo::PathEl::MoveTo(kurbo::Point::new(0.5, 0.5)));
    assert_eq!(els[3], kurbo::PathEl::ClosePath);
}

#[test]
fn face_path_rejects_missing_vertices() {
    let err = face_path(PYRAMID_FACES[0], &[ProjectedPoint { x: 0, y: 0 }]).unwrap_err();
    assert!(matches!(err, TumbleError::Render(_)));
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let mut dst = vec![0u8; 3];
    flatten_premul_to_rgb8(&mut dst, &[0, 0, 0, 0], Rgb8::new(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30]);
}

#[test]
fn flatten_premul_alpha_255_drops_alpha() {
    let mut dst = vec![0u8; 6];
    flatten_premul_to_rgb8(&mut dst, &[1, 2, 3, 255, 4, 5, 6, 255], Rgb8::BLACK).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn flatten_rejects_length_mismatch() {
    let mut dst = vec![0u8; 3];
    assert!(flatten_premul_to_rgb8(&mut dst, &[0; 8], Rgb8::BLACK).is_err());
}
