use std::{env, fs, process};

use super::*;

#[test]
fn when_parsing_full_document_should_read_all_fields() {
    let document = r#"
        max_acceleration = 8.0
        max_velocity = 10.0
        sample_interval = 0.01
        track_width = 1.5
    "#;

    let params = from_toml_str(document).unwrap();

    assert_eq!(
        GeneratorParams {
            max_acceleration: 8.0,
            max_velocity: 10.0,
            sample_interval: 0.01,
            track_width: 1.5,
        },
        params
    );
}

#[test]
fn when_parsing_partial_document_should_use_defaults() {
    let params = from_toml_str("max_velocity = 6.0").unwrap();

    assert_eq!(6.0, params.max_velocity);
    assert_eq!(12.0, params.max_acceleration);
    assert_eq!(0.005, params.sample_interval);
    assert_eq!(2.4, params.track_width);
}

#[test]
fn when_parsing_invalid_document_should_fail() {
    let result = from_toml_str("max_velocity = \"fast\"");

    assert!(matches!(
        result,
        Err(Error::FailedToParseParameters { .. })
    ));
}

#[test]
fn when_loading_missing_file_should_fail() {
    let path = env::temp_dir().join("diff_drive_motion_missing_params.toml");

    let result = load(&path);

    match result {
        Err(Error::FailedToReadParameters { path: reported, .. }) => {
            assert_eq!(path.display().to_string(), reported)
        }
        _ => panic!("Expected a read failure, got {:?}", result),
    }
}

#[test]
fn when_loading_file_should_parse_contents() {
    let path = env::temp_dir().join(format!("diff_drive_motion_params_{}.toml", process::id()));
    fs::write(&path, "max_acceleration = 4.0\ntrack_width = 3.0\n").unwrap();

    let result = load(&path);
    fs::remove_file(&path).unwrap();

    let params = result.unwrap();
    assert_eq!(4.0, params.max_acceleration);
    assert_eq!(3.0, params.track_width);
}

#[test]
fn when_creating_generators_from_defaults_should_use_values() {
    let params = GeneratorParams::default();

    let curve_generator = params.curve_generator().unwrap();

    assert_eq!(2.4, curve_generator.track_width());
    assert_eq!(12.0, curve_generator.generator().max_acceleration());
    assert_eq!(12.0, curve_generator.generator().max_velocity());
    assert_eq!(0.005, curve_generator.generator().sample_interval());
}

#[test]
fn when_creating_generators_from_invalid_values_should_fail() {
    let params = GeneratorParams {
        track_width: -1.0,
        ..GeneratorParams::default()
    };

    assert_eq!(
        Err(Error::InvalidTrackWidth { value: -1.0 }),
        params.curve_generator()
    );

    let params = GeneratorParams {
        sample_interval: 0.0,
        ..GeneratorParams::default()
    };

    assert_eq!(
        Err(Error::InvalidSampleInterval { value: 0.0 }),
        params.trajectory_generator()
    );
}
