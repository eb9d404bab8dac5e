//! Integration tests for configured, reusable correction sessions.

use chromashift_color::{ColorSpace, CorrectionConfig, CorrectionSession, HslRange};
use chromashift_core::{FrameBuffer, Rgb, Rgba8};

use crate::init_tracing;

fn noisy_frame(width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::solid(width, height, Rgba8::new(0, 0, 0, 200));
    for (i, px) in frame.as_frame_mut().pixels_mut().iter_mut().enumerate() {
        px.r = (i * 13 % 256) as u8;
        px.g = (i * 29 % 256) as u8;
        px.b = (i * 53 % 256) as u8;
    }
    frame
}

#[test]
fn config_from_json_drives_session() {
    init_tracing();
    let config = CorrectionConfig::from_json(
        r#"{ "space": "cielab", "hsl_range": "clamped", "parallel_threshold": 0 }"#,
    )
    .unwrap();
    assert_eq!(config.space, ColorSpace::CieLab);

    let session = CorrectionSession::new(Rgb::new(30, 99, 151), Rgb::new(168, 6, 64), config);
    let mut data = vec![30, 99, 151, 17];
    session.correct_buffer(&mut data, 1, 1).unwrap();
    assert_eq!(data, [168, 6, 64, 17]);
}

#[test]
fn parallel_and_sequential_agree_on_large_frame() {
    init_tracing();
    let source = noisy_frame(300, 300);

    for space in [ColorSpace::Hsl, ColorSpace::CieLab] {
        for hsl_range in [HslRange::Unbounded, HslRange::Clamped] {
            let config = CorrectionConfig {
                space,
                hsl_range,
                parallel_threshold: usize::MAX,
            };
            let selected = Rgb::new(90, 140, 60);
            let target = Rgb::new(20, 60, 220);

            let mut sequential = source.clone();
            let seq_stats =
                CorrectionSession::new(selected, target, config).correct(&mut sequential.as_frame_mut());

            let mut parallel = source.clone();
            let par_stats = CorrectionSession::new(
                selected,
                target,
                CorrectionConfig {
                    parallel_threshold: 0,
                    ..config
                },
            )
            .correct(&mut parallel.as_frame_mut());

            assert_eq!(seq_stats, par_stats);
            assert_eq!(seq_stats.corrected + seq_stats.skipped, 300 * 300);
            assert_eq!(sequential, parallel, "{space} {hsl_range:?}");
        }
    }
}

#[test]
fn alpha_channel_preserved_across_frame() {
    let mut frame = noisy_frame(50, 20);
    let session = CorrectionSession::new(
        Rgb::new(200, 50, 50),
        Rgb::new(50, 200, 50),
        CorrectionConfig::default(),
    );
    session.correct(&mut frame.as_frame_mut());
    assert!(frame.as_frame_mut().pixels().iter().all(|px| px.a == 200));
}

#[test]
fn config_json_roundtrip_preserves_behavior() {
    let config = CorrectionConfig::with_space(ColorSpace::CieLab);
    let restored = CorrectionConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(config, restored);
}
