//! Integration tests for buffer-wide correction.
//!
//! Exercises chromashift-core frame validation together with the
//! chromashift-color converters and driver.

use chromashift_color::{
    apply_correction, compute_delta, correct_image, hsl_to_rgb, lab_to_rgb, rgb_to_hsl,
    rgb_to_lab, ColorSpace,
};
use chromashift_core::{ChromaShiftError, FrameBuffer, InvalidInput, Rgb, Rgba8};

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

const SELECTED: Rgb = Rgb::new(30, 99, 151);
const TARGET: Rgb = Rgb::new(168, 6, 64);

fn frame_of(pixels: &[Rgba8]) -> FrameBuffer {
    let mut frame = FrameBuffer::solid(pixels.len() as u32, 1, Rgba8::default());
    frame.as_frame_mut().pixels_mut().copy_from_slice(pixels);
    frame
}

// ── Known values ───────────────────────────────────────────────

#[test]
fn red_hsl_known_values() {
    let hsl = rgb_to_hsl(Rgb::RED);
    assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
    let back = hsl_to_rgb(hsl);
    assert_eq!(back.to_array().map(f64::round), [255.0, 0.0, 0.0]);
}

#[test]
fn lab_white_and_black() {
    let white = rgb_to_lab(Rgb::WHITE);
    assert!((white.l - 100.0).abs() < 0.01);
    assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);

    let black = rgb_to_lab(Rgb::BLACK);
    assert!(black.l.abs() < 1e-9 && black.a.abs() < 1e-9 && black.b.abs() < 1e-9);
    assert_eq!(lab_to_rgb(black), Rgb::BLACK);
}

// ── End-to-end ─────────────────────────────────────────────────

#[test]
fn single_pixel_maps_selected_onto_target() {
    init_tracing();
    for space in [ColorSpace::Hsl, ColorSpace::CieLab] {
        let mut data = vec![30, 99, 151, 255];
        let stats = correct_image(&mut data, 1, 1, SELECTED, TARGET, space).unwrap();
        assert_eq!(stats.corrected, 1);
        for (got, want) in data[..3].iter().zip(TARGET.to_array()) {
            assert!(got.abs_diff(want) <= 1, "{space}: {got} vs {want}");
        }
        assert_eq!(data[3], 255);
    }
}

#[test]
fn background_pixels_survive_every_space() {
    init_tracing();
    let pixels = [
        Rgba8::new(0, 0, 0, 255),
        Rgba8::new(6, 6, 7, 255),
        Rgba8::new(249, 249, 248, 255),
        Rgba8::new(255, 255, 255, 255),
    ];
    for space in [ColorSpace::Hsl, ColorSpace::CieLab] {
        let mut frame = frame_of(&pixels);
        let before = frame.clone();
        let stats = correct_image(frame.as_bytes_mut(), 4, 1, SELECTED, TARGET, space).unwrap();
        assert_eq!(stats.skipped, 4);
        assert_eq!(frame, before, "{space}");
    }
}

#[test]
fn test_pattern_bars_shift_consistently() {
    init_tracing();
    let mut frame = FrameBuffer::test_pattern(64, 8);
    let delta = compute_delta(SELECTED, TARGET, ColorSpace::CieLab);
    let expected_red = apply_correction(Rgb::RED, delta, ColorSpace::CieLab);

    correct_image(frame.as_bytes_mut(), 64, 8, SELECTED, TARGET, ColorSpace::CieLab).unwrap();

    // Bar 5 of 8 is red in the source pattern
    let x = 5 * 64 / 8;
    for y in 0..8 {
        assert_eq!(frame.pixel(x, y).rgb(), expected_red);
        assert_eq!(frame.pixel(x, y).a, 255);
    }
    // White and black bars are background
    assert_eq!(frame.pixel(0, 0), Rgba8::new(255, 255, 255, 255));
    assert_eq!(frame.pixel(63, 7), Rgba8::new(0, 0, 0, 255));
}

#[test]
fn identity_correction_changes_nothing() {
    for space in [ColorSpace::Hsl, ColorSpace::CieLab] {
        let mut frame = FrameBuffer::test_pattern(40, 3);
        for (i, px) in frame.as_frame_mut().pixels_mut().iter_mut().enumerate() {
            px.g = (i * 7 % 256) as u8;
        }
        let before = frame.clone();
        correct_image(frame.as_bytes_mut(), 40, 3, SELECTED, SELECTED, space).unwrap();
        assert_eq!(frame, before, "{space}");
    }
}

// ── Boundary validation ────────────────────────────────────────

#[test]
fn malformed_buffers_are_rejected_before_mutation() {
    let mut data = vec![30, 99, 151, 255, 1, 2];
    let err = correct_image(&mut data, 1, 1, SELECTED, TARGET, ColorSpace::Hsl).unwrap_err();
    assert!(matches!(
        err,
        ChromaShiftError::InvalidInput(InvalidInput::BufferLength { len: 6 })
    ));
    assert_eq!(data, [30, 99, 151, 255, 1, 2]);
}

#[test]
fn out_of_range_channels_rejected_at_construction() {
    assert!(Rgb::try_new(168, 6, 64).is_ok());
    let err = Rgb::try_new(300, 6, 64).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: red channel out of range [0, 255]: 300"
    );
}

#[test]
fn unknown_space_selector_is_an_error() {
    assert_eq!("cielab".parse::<ColorSpace>().unwrap(), ColorSpace::CieLab);
    assert!(matches!(
        "rgb".parse::<ColorSpace>(),
        Err(ChromaShiftError::UnknownColorSpace(_))
    ));
}
