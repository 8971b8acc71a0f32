//! In-memory pipeline runs checked against the sequential reference.

mod common;

use common::{assert_all_pixels, assert_same_image, fixtures, fixtures::colors, sequential_sepia};
use sepia_tone::{EdgePolicy, Rgb};
use sepiaconv::{ConvertError, Pipeline, PipelineOptions};

#[test]
fn test_white_single_tile() {
    let source = fixtures::solid(4, 4, Rgb::WHITE);

    let conversion = Pipeline::new(fixtures::options(1, 0)).run(&source).unwrap();

    assert_eq!(conversion.stats.tiles, 1);
    assert_all_pixels(&conversion.image, colors::SEPIA_WHITE);
}

#[test]
fn test_black_stays_black() {
    let source = fixtures::solid(2, 2, Rgb::BLACK);

    let conversion = Pipeline::new(fixtures::options(2, 1)).run(&source).unwrap();

    assert_all_pixels(&conversion.image, Rgb::BLACK);
}

#[test]
fn test_midtone_value() {
    let source = fixtures::solid(6, 6, colors::MIDTONE);

    let conversion = Pipeline::new(fixtures::options(3, 2)).run(&source).unwrap();

    assert_all_pixels(&conversion.image, colors::SEPIA_MIDTONE);
}

#[test]
fn test_matches_sequential_reference() {
    let source = fixtures::noise(64, 48, 0x5EB1A);
    let expected = sequential_sepia(&source);

    let conversion = Pipeline::new(fixtures::options(4, 3)).run(&source).unwrap();

    assert_same_image(&conversion.image, &expected);
}

#[test]
fn test_runs_are_idempotent() {
    let source = fixtures::gradient(40, 40);
    let pipeline = Pipeline::new(fixtures::options(4, 4));

    let first = pipeline.run(&source).unwrap();
    let second = pipeline.run(&source).unwrap();

    assert_same_image(&first.image, &second.image);
}

#[test]
fn test_worker_count_does_not_change_output() {
    let source = fixtures::noise(32, 32, 7);
    let expected = Pipeline::new(fixtures::options(1, 3))
        .run(&source)
        .unwrap()
        .image;

    for threads in [2, 8] {
        let conversion = Pipeline::new(fixtures::options(threads, 3))
            .run(&source)
            .unwrap();
        assert_same_image(&conversion.image, &expected);
        assert_eq!(conversion.stats.workers.len(), threads);
        assert_eq!(conversion.stats.jobs_processed(), 16);
    }
}

#[test]
fn test_tile_granularity_does_not_change_output() {
    let source = fixtures::gradient(8, 8);

    let coarse = Pipeline::new(fixtures::options(2, 1)).run(&source).unwrap();
    let fine = Pipeline::new(fixtures::options(2, 3)).run(&source).unwrap();

    assert_eq!(coarse.stats.tiles, 4);
    assert_eq!(fine.stats.tiles, 16);
    assert_same_image(&coarse.image, &fine.image);
}

#[test]
fn test_single_tile_equals_sequential() {
    let source = fixtures::noise(13, 7, 99);

    let conversion = Pipeline::new(fixtures::options(4, 0)).run(&source).unwrap();

    assert_eq!(conversion.stats.uncovered_pixels, 0);
    assert_same_image(&conversion.image, &sequential_sepia(&source));
}

#[test]
fn test_leave_policy_keeps_remainder_as_background() {
    // 10 / 3 = 3, so column 9 and row 9 are outside every tile
    let source = fixtures::solid(10, 10, Rgb::WHITE);

    let conversion = Pipeline::new(fixtures::options(3, 2)).run(&source).unwrap();

    assert_eq!(conversion.stats.uncovered_pixels, 19);
    for i in 0..10 {
        assert_eq!(conversion.image.get(9, i), Some(Rgb::BLACK));
        assert_eq!(conversion.image.get(i, 9), Some(Rgb::BLACK));
    }
    assert_eq!(conversion.image.get(8, 8), Some(colors::SEPIA_WHITE));
}

#[test]
fn test_extend_policy_covers_every_pixel() {
    let source = fixtures::noise(10, 11, 3);
    let options = PipelineOptions {
        edges: EdgePolicy::Extend,
        ..fixtures::options(3, 2)
    };

    let conversion = Pipeline::new(options).run(&source).unwrap();

    assert_eq!(conversion.stats.uncovered_pixels, 0);
    assert_same_image(&conversion.image, &sequential_sepia(&source));
}

#[test]
fn test_more_subdivisions_than_pixels_rejected() {
    let source = fixtures::solid(2, 8, Rgb::WHITE);

    let result = Pipeline::new(fixtures::options(2, 2)).run(&source);

    assert!(matches!(result, Err(ConvertError::InvalidConfiguration(_))));
}
