//! Loading model configuration from files on disk.

use std::io::Write;

use caom2::config::ModelConfig;
use caom2::core::Target;
use caom2::Caom2Error;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn load_config_from_file() {
    let file = write_config(
        r#"
[target]
redshift_min = 0.0
redshift_max = 7.5
"#,
    );

    let config = ModelConfig::from_file(file.path()).unwrap();
    assert_eq!(config.target.redshift_min, 0.0);
    assert_eq!(config.target.redshift_max, 7.5);

    let mut target = Target::new("quasar");
    assert!(target
        .set_redshift_within(Some(-0.1), &config.target)
        .is_err());
    target.set_redshift_within(Some(7.5), &config.target).unwrap();
    assert_eq!(target.redshift(), Some(7.5));
}

#[test]
fn missing_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    match err {
        Caom2Error::Configuration(msg) => assert!(msg.contains("absent.toml"), "{}", msg),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_file_is_a_configuration_error() {
    let file = write_config("[target\nredshift_min = 1");
    assert!(matches!(
        ModelConfig::from_file(file.path()),
        Err(Caom2Error::Configuration(_))
    ));
}
