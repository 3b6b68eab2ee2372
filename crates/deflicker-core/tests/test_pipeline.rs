mod common;

use std::fs;
use std::path::Path;

use deflicker_core::error::DeflickerError;
use deflicker_core::io::discover::discover_pictures;
use deflicker_core::pipeline::config::{DeflickerConfig, FailurePolicy};
use deflicker_core::pipeline::orchestrator::run;
use image::RgbaImage;

use common::{temp_dir, uniform_image, write_png};

fn config_for(source: &Path, destination: &Path) -> DeflickerConfig {
    let mut config = DeflickerConfig::new(source.to_path_buf(), destination.to_path_buf());
    config.rolling_average = 0;
    config.threads = 2;
    config
}

fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("decode output").to_rgba8()
}

#[test]
fn test_uniform_sequence_round_trips_to_identity() {
    let source = temp_dir();
    let destination = temp_dir();
    let image = uniform_image(8, 8, [120, 120, 120, 255]);
    for name in ["a.png", "b.png", "c.png"] {
        write_png(source.path(), name, &image);
    }

    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let config = config_for(source.path(), destination.path());
    let summary = run(pictures, &config).unwrap();
    assert_eq!(summary.completed, 3);
    assert!(summary.skipped.is_empty());

    // Every frame already matches the global mean, so the remap is the
    // identity and pixels come back unchanged.
    for name in ["a.png", "b.png", "c.png"] {
        let output = load_rgba(&destination.path().join(name));
        assert_eq!(output, image);
    }
}

#[test]
fn test_outputs_are_invariant_under_thread_count() {
    let source = temp_dir();
    // Three frames at different brightness so the pipeline actually
    // remaps something.
    for (name, value) in [("a.png", 60u8), ("b.png", 120), ("c.png", 180)] {
        write_png(
            source.path(),
            name,
            &uniform_image(16, 16, [value, value, value, 255]),
        );
    }

    let single = temp_dir();
    let mut config = config_for(source.path(), single.path());
    config.threads = 1;
    let pictures = discover_pictures(source.path(), single.path()).unwrap();
    run(pictures, &config).unwrap();

    let multi = temp_dir();
    let mut config = config_for(source.path(), multi.path());
    config.threads = 8;
    let pictures = discover_pictures(source.path(), multi.path()).unwrap();
    run(pictures, &config).unwrap();

    for name in ["a.png", "b.png", "c.png"] {
        let first = fs::read(single.path().join(name)).unwrap();
        let second = fs::read(multi.path().join(name)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_fully_transparent_image_passes_through() {
    let source = temp_dir();
    let destination = temp_dir();
    let transparent = uniform_image(8, 8, [90, 30, 200, 0]);
    write_png(source.path(), "ghost.png", &transparent);
    write_png(
        source.path(),
        "solid.png",
        &uniform_image(8, 8, [100, 100, 100, 255]),
    );

    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let config = config_for(source.path(), destination.path());
    let summary = run(pictures, &config).unwrap();
    assert_eq!(summary.completed, 2);

    // Zero-sum histogram takes the degenerate identity path.
    let output = load_rgba(&destination.path().join("ghost.png"));
    assert_eq!(output, transparent);
}

#[test]
fn test_empty_sequence_completes_without_work() {
    let source = temp_dir();
    let destination = temp_dir();
    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let config = config_for(source.path(), destination.path());
    let summary = run(pictures, &config).unwrap();
    assert_eq!(summary.completed, 0);
    assert!(summary.skipped.is_empty());
}

#[test]
fn test_unreadable_picture_aborts_by_default() {
    let source = temp_dir();
    let destination = temp_dir();
    write_png(
        source.path(),
        "good.png",
        &uniform_image(4, 4, [50, 50, 50, 255]),
    );
    fs::write(source.path().join("broken.jpg"), b"not a jpeg").unwrap();

    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let config = config_for(source.path(), destination.path());
    let error = run(pictures, &config).unwrap_err();
    assert!(matches!(error, DeflickerError::Decode { .. }));
}

#[test]
fn test_skip_policy_drops_the_broken_picture_and_continues() {
    let source = temp_dir();
    let destination = temp_dir();
    write_png(
        source.path(),
        "good_a.png",
        &uniform_image(4, 4, [60, 60, 60, 255]),
    );
    fs::write(source.path().join("broken.jpg"), b"not a jpeg").unwrap();
    write_png(
        source.path(),
        "good_b.png",
        &uniform_image(4, 4, [70, 70, 70, 255]),
    );

    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let mut config = config_for(source.path(), destination.path());
    config.on_error = FailurePolicy::Skip;
    let summary = run(pictures, &config).unwrap();

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].0.ends_with("broken.jpg"));
    assert!(destination.path().join("good_a.png").is_file());
    assert!(destination.path().join("good_b.png").is_file());
    assert!(!destination.path().join("broken.jpg").exists());
}

#[test]
fn test_rolling_mode_end_to_end() {
    let source = temp_dir();
    let destination = temp_dir();
    for (name, value) in [("a.png", 40u8), ("b.png", 130), ("c.png", 220)] {
        write_png(
            source.path(),
            name,
            &uniform_image(8, 8, [value, value, value, 255]),
        );
    }

    let pictures = discover_pictures(source.path(), destination.path()).unwrap();
    let mut config = config_for(source.path(), destination.path());
    config.rolling_average = 1;
    let summary = run(pictures, &config).unwrap();
    assert_eq!(summary.completed, 3);

    // The middle frame is matched toward the mean of all three; its gray
    // level must move toward the neighbors without overshooting them.
    let output = load_rgba(&destination.path().join("b.png"));
    let value = output.get_pixel(0, 0).0[0];
    assert!(value >= 40 && value <= 220);
}
