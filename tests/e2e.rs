mod common;

use common::synthetic_image::{fill_rect, solid_rgba, stroke, BLACK, WHITE};
use digit_normalizer::centroid::compute_centroid;
use digit_normalizer::image::ImageF32;
use digit_normalizer::normalize::normalize_min_max;
use digit_normalizer::{
    preprocess_rgba, preprocess_with_report, PreprocessError, PreprocessOptions, Roi,
    CANVAS_PIXELS, CANVAS_SIZE,
};

const PAD: usize = 280;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_option_sets() -> [PreprocessOptions; 4] {
    [
        PreprocessOptions::new(false, false),
        PreprocessOptions::new(false, true),
        PreprocessOptions::new(true, false),
        PreprocessOptions::new(true, true),
    ]
}

/// A "7" drawn with a pad brush: top bar plus a diagonal.
fn seven(rgb_bg: [u8; 3], rgb_ink: [u8; 3]) -> Vec<u8> {
    let mut img = solid_rgba(PAD, PAD, rgb_bg);
    stroke(&mut img, PAD, PAD, (70, 60), (200, 60), 14, rgb_ink);
    stroke(&mut img, PAD, PAD, (200, 60), (110, 230), 14, rgb_ink);
    img
}

fn as_canvas(values: &[f32]) -> ImageF32 {
    ImageF32::from_vec(CANVAS_SIZE, CANVAS_SIZE, values.to_vec())
}

#[test]
fn output_always_has_784_values_in_unit_range() {
    init_logger();
    // deterministic pseudo-random noise
    let mut state = 0x2545_f491u32;
    let noise: Vec<u8> = (0..97 * 61 * 4)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    let inputs: Vec<(Vec<u8>, usize, usize)> = vec![
        (seven(WHITE, BLACK), PAD, PAD),
        (seven(BLACK, WHITE), PAD, PAD),
        (noise, 97, 61),
        (solid_rgba(1, 1, [128, 64, 32]), 1, 1),
        (solid_rgba(300, 2, WHITE), 300, 2),
    ];
    for (rgba, w, h) in &inputs {
        for opts in all_option_sets() {
            let out = preprocess_rgba(rgba, *w, *h, opts).expect("well-formed input");
            let values = out.image.as_slice();
            assert_eq!(values.len(), CANVAS_PIXELS);
            assert!(
                values.iter().all(|v| (0.0..=1.0).contains(v)),
                "value outside [0,1] for {w}x{h} {opts:?}"
            );
        }
    }
}

#[test]
fn all_black_input_falls_back_to_full_image() {
    init_logger();
    let rgba = solid_rgba(PAD, PAD, BLACK);
    let (out, report) =
        preprocess_with_report(&rgba, PAD, PAD, PreprocessOptions::default()).unwrap();
    assert!(!out.trace.invert);
    assert_eq!(report.threshold.mean, 0.0);
    assert_eq!(report.foreground_pixels, 0);
    assert_eq!(report.selected_component, None);
    assert_eq!(out.trace.roi, Roi::full(PAD, PAD));
    assert_eq!(report.centroid_shift, None);
    assert!(out.image.as_slice().iter().all(|&v| v == 0.0));
    assert_eq!(
        out.trace.to_string(),
        "th=0.000 invert=false roi=[0,0..279,279] w×h=280×280 scale=0.071"
    );
}

#[test]
fn all_white_input_falls_back_to_full_image() {
    init_logger();
    let rgba = solid_rgba(PAD, PAD, WHITE);
    let (out, report) =
        preprocess_with_report(&rgba, PAD, PAD, PreprocessOptions::new(true, true)).unwrap();
    assert!(out.trace.invert);
    assert!(report.threshold.mean > 0.999);
    assert_eq!(report.foreground_pixels, 0);
    assert_eq!(out.trace.roi, Roi::full(PAD, PAD));
    assert!(out.image.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn largest_blob_selected_regardless_of_position() {
    init_logger();
    // 5-pixel blob before the 50-pixel blob in scan order, then the reverse
    let layouts = [((3, 3), (40, 50)), ((60, 70), (5, 8))];
    for ((sx, sy), (bx, by)) in layouts {
        let mut rgba = solid_rgba(80, 80, BLACK);
        fill_rect(&mut rgba, 80, sx, sy, 5, 1, WHITE);
        fill_rect(&mut rgba, 80, bx, by, 10, 5, WHITE);
        let (out, report) =
            preprocess_with_report(&rgba, 80, 80, PreprocessOptions::default()).unwrap();
        assert_eq!(report.component_count, 2);
        assert_eq!(report.foreground_pixels, 55);
        assert_eq!(
            out.trace.roi,
            Roi {
                x0: bx,
                y0: by,
                x1: bx + 9,
                y1: by + 4,
            }
        );
        assert_eq!((out.trace.region_width, out.trace.region_height), (10, 5));
    }
}

#[test]
fn small_black_square_on_white_pad_round_trip() {
    init_logger();
    let mut rgba = solid_rgba(PAD, PAD, WHITE);
    fill_rect(&mut rgba, PAD, 10, 10, 4, 4, BLACK);
    let out = preprocess_rgba(&rgba, PAD, PAD, PreprocessOptions::default()).unwrap();

    assert!(out.trace.invert);
    assert_eq!(out.trace.roi, Roi { x0: 10, y0: 10, x1: 13, y1: 13 });
    assert_eq!(out.trace.scale, 5.0);
    assert_eq!(
        out.trace.to_string(),
        "th=0.000 invert=true roi=[10,10..13,13] w×h=4×4 scale=5.000"
    );

    let values = out.image.as_slice();
    assert!(values.iter().any(|&v| v > 0.0));
    let c = compute_centroid(&as_canvas(values)).unwrap();
    assert!((c.position.x - 14.0).abs() <= 0.5, "cx={}", c.position.x);
    assert!((c.position.y - 14.0).abs() <= 0.5, "cy={}", c.position.y);
    // a 20×20 block of ink
    assert_eq!(values.iter().filter(|&&v| v == 1.0).count(), 400);
}

#[test]
fn gray_level_threshold_is_reported_exactly() {
    init_logger();
    let mut rgba = solid_rgba(2, 1, [37, 37, 37]);
    fill_rect(&mut rgba, 2, 1, 0, 1, 1, [200, 200, 200]);
    let out = preprocess_rgba(&rgba, 2, 1, PreprocessOptions::default()).unwrap();
    assert_eq!(
        out.trace.to_string(),
        "th=0.145 invert=false roi=[1,0..1,0] w×h=1×1 scale=20.000"
    );
}

#[test]
fn half_black_half_white_does_not_invert() {
    init_logger();
    let mut rgba = solid_rgba(40, 40, BLACK);
    fill_rect(&mut rgba, 40, 20, 0, 20, 40, WHITE);
    let (out, report) =
        preprocess_with_report(&rgba, 40, 40, PreprocessOptions::default()).unwrap();
    assert!(report.threshold.mean <= 0.5);
    assert!(!out.trace.invert);
    // the white half is read as ink
    assert_eq!(out.trace.roi, Roi { x0: 20, y0: 0, x1: 39, y1: 39 });
}

#[test]
fn polarity_does_not_change_the_result() {
    init_logger();
    for opts in all_option_sets() {
        let dark_ink = preprocess_rgba(&seven(WHITE, BLACK), PAD, PAD, opts).unwrap();
        let light_ink = preprocess_rgba(&seven(BLACK, WHITE), PAD, PAD, opts).unwrap();
        assert!(dark_ink.trace.invert);
        assert!(!light_ink.trace.invert);
        assert_eq!(dark_ink.trace.roi, light_ink.trace.roi);
        for (a, b) in dark_ink.image.as_slice().iter().zip(light_ink.image.as_slice()) {
            assert!((a - b).abs() < 1e-4, "{a} vs {b} with {opts:?}");
        }
    }
}

#[test]
fn translated_drawing_gives_identical_output() {
    init_logger();
    let mut a = solid_rgba(PAD, PAD, WHITE);
    stroke(&mut a, PAD, PAD, (40, 30), (40, 120), 9, BLACK);
    stroke(&mut a, PAD, PAD, (40, 120), (90, 120), 9, BLACK);
    let mut b = solid_rgba(PAD, PAD, WHITE);
    stroke(&mut b, PAD, PAD, (170, 130), (170, 220), 9, BLACK);
    stroke(&mut b, PAD, PAD, (170, 220), (220, 220), 9, BLACK);

    let opts = PreprocessOptions::new(true, true);
    let out_a = preprocess_rgba(&a, PAD, PAD, opts).unwrap();
    let out_b = preprocess_rgba(&b, PAD, PAD, opts).unwrap();
    assert_ne!(out_a.trace.roi, out_b.trace.roi);
    assert_eq!(out_a.trace.scale, out_b.trace.scale);
    assert_eq!(out_a.image, out_b.image);
}

#[test]
fn centered_output_has_centroid_near_canvas_center() {
    init_logger();
    let out = preprocess_rgba(
        &seven(WHITE, BLACK),
        PAD,
        PAD,
        PreprocessOptions::new(false, true),
    )
    .unwrap();
    let c = compute_centroid(&as_canvas(out.image.as_slice())).unwrap();
    assert!((c.position.x - 14.0).abs() <= 0.5 + 1e-6, "cx={}", c.position.x);
    assert!((c.position.y - 14.0).abs() <= 0.5 + 1e-6, "cy={}", c.position.y);
}

#[test]
fn normalizing_the_output_again_changes_nothing() {
    init_logger();
    let out = preprocess_rgba(
        &seven(WHITE, BLACK),
        PAD,
        PAD,
        PreprocessOptions::new(true, true),
    )
    .unwrap();
    let mut again = out.image.as_slice().to_vec();
    normalize_min_max(&mut again);
    assert_eq!(again.as_slice(), out.image.as_slice());
}

#[test]
fn wrong_buffer_length_fails_fast() {
    let rgba = vec![0u8; PAD * PAD * 3];
    let err = preprocess_rgba(&rgba, PAD, PAD, PreprocessOptions::default()).unwrap_err();
    assert_eq!(
        err,
        PreprocessError::BufferSize {
            width: PAD,
            height: PAD,
            expected: PAD * PAD * 4,
            actual: PAD * PAD * 3,
        }
    );
}
