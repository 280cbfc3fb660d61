use super::validation::validate_config;
use super::*;
use crate::common::constants::test_constants::*;
use crate::common::constants::*;
use crate::common::logger::Log;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn create_test_config(
    latitude: Option<f64>,
    longitude: Option<f64>,
    default_sunrise: Option<f64>,
    default_sunset: Option<f64>,
    update_interval: Option<u64>,
) -> Config {
    Config {
        latitude,
        longitude,
        utc_offset_hours: None,
        default_sunrise,
        default_sunset,
        update_interval,
    }
}

#[test]
fn test_config_validation_basic() {
    let config = create_test_config(
        Some(TEST_PARIS_LATITUDE),
        Some(TEST_PARIS_LONGITUDE),
        Some(6.0),
        Some(20.0),
        Some(60),
    );
    assert!(validate_config(&config).is_ok());
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn test_config_validation_coordinates() {
    let config = create_test_config(Some(91.0), Some(0.0), None, None, None);
    assert!(validate_config(&config).is_err());

    let config = create_test_config(Some(0.0), Some(-180.5), None, None, None);
    assert!(validate_config(&config).is_err());

    let config = create_test_config(Some(f64::NAN), Some(0.0), None, None, None);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_validation_requires_coordinate_pairs() {
    let config = create_test_config(Some(48.0), None, None, None, None);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("longitude is missing"));

    let config = create_test_config(None, Some(2.0), None, None, None);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_validation_fallback_hours() {
    let config = create_test_config(None, None, Some(24.0), None, None);
    assert!(validate_config(&config).is_err());

    let config = create_test_config(None, None, Some(-1.0), None, None);
    assert!(validate_config(&config).is_err());

    // sunrise after sunset
    let config = create_test_config(None, None, Some(21.0), Some(20.0), None);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("earlier than default_sunset"));

    // only sunset given, compared against the default sunrise
    let config = create_test_config(None, None, None, Some(5.0), None);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_validation_update_interval() {
    for interval in [MINIMUM_UPDATE_INTERVAL, MAXIMUM_UPDATE_INTERVAL] {
        let config = create_test_config(None, None, None, None, Some(interval));
        assert!(validate_config(&config).is_ok());
    }
    for interval in [MINIMUM_UPDATE_INTERVAL - 1, MAXIMUM_UPDATE_INTERVAL + 1] {
        let config = create_test_config(None, None, None, None, Some(interval));
        assert!(validate_config(&config).is_err());
    }
}

#[test]
fn test_config_validation_utc_offset() {
    let mut config = Config::default();
    for hours in [-12.0, 0.0, 5.5, 14.0] {
        config.utc_offset_hours = Some(hours);
        assert!(validate_config(&config).is_ok(), "offset {hours}");
    }
    for hours in [-12.5, 14.5, f64::INFINITY] {
        config.utc_offset_hours = Some(hours);
        assert!(validate_config(&config).is_err(), "offset {hours}");
    }
}

#[test]
fn test_config_accessors() {
    let config = Config {
        latitude: Some(-33.8688),
        longitude: Some(151.2093),
        utc_offset_hours: Some(5.75),
        default_sunrise: Some(7.0),
        default_sunset: Some(19.0),
        update_interval: Some(120),
    };

    let coordinate = config.coordinate().unwrap().unwrap();
    assert_eq!(coordinate.latitude(), -33.8688);
    assert_eq!(
        config.utc_offset().unwrap().unwrap().local_minus_utc(),
        5 * 3600 + 45 * 60
    );
    assert_eq!(config.sun_fallback().unwrap().sunrise(), 7.0);
    assert_eq!(config.update_interval().as_secs(), 120);

    let empty = Config::default();
    assert_eq!(empty.coordinate().unwrap(), None);
    assert_eq!(empty.utc_offset().unwrap(), None);
    assert_eq!(empty.sun_fallback().unwrap(), crate::sky::SunHours::default());
    assert_eq!(empty.update_interval().as_secs(), DEFAULT_UPDATE_INTERVAL);
}

#[test]
fn test_config_toml_parsing() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    let config_content = r#"
latitude = 40.7128
longitude = -74.0060
utc_offset_hours = -4
default_sunrise = 6.5
update_interval = 30
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = load_from_path(&config_path).unwrap();
    assert_eq!(config.latitude, Some(40.7128));
    assert_eq!(config.longitude, Some(-74.0060));
    assert_eq!(config.utc_offset_hours, Some(-4.0));
    assert_eq!(config.default_sunrise, Some(6.5));
    // defaults filled in
    assert_eq!(config.default_sunset, Some(DEFAULT_SUNSET_HOUR));
    assert_eq!(config.update_interval, Some(30));
}

#[test]
fn test_config_malformed_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "latitude = \"north\"").unwrap();

    let err = load_from_path(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_config_invalid_values_are_reported_with_path() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "update_interval = 1").unwrap();

    let err = load_from_path(&config_path).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
    assert!(format!("{err:#}").contains("update_interval"));
}

#[test]
fn test_missing_config_uses_defaults_without_creating_file() {
    let temp_dir = tempdir().unwrap();

    let config = load(Some(temp_dir.path())).unwrap();

    assert_eq!(config.latitude, None);
    assert_eq!(config.default_sunrise, Some(DEFAULT_SUNRISE_HOUR));
    assert_eq!(config.default_sunset, Some(DEFAULT_SUNSET_HOUR));
    assert_eq!(config.update_interval, Some(DEFAULT_UPDATE_INTERVAL));
    assert!(!temp_dir.path().join(CONFIG_FILE_NAME).exists());
}

#[test]
fn test_geo_toml_overrides_main_config() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    let geo_path = temp_dir.path().join(GEO_FILE_NAME);

    fs::write(&config_path, "latitude = 40.0\nlongitude = -74.0\n").unwrap();
    fs::write(&geo_path, "latitude = 35.6762\nlongitude = 139.6503\n").unwrap();

    let config = load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(35.6762));
    assert_eq!(config.longitude, Some(139.6503));
}

#[test]
fn test_geo_toml_without_main_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join(GEO_FILE_NAME),
        "latitude = 64.1466\nlongitude = -21.9426\n",
    )
    .unwrap();

    let config = load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(64.1466));
    assert_eq!(config.longitude, Some(-21.9426));
}

#[test]
fn test_geo_toml_values_are_validated() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join(GEO_FILE_NAME),
        "latitude = 123.0\nlongitude = 0.0\n",
    )
    .unwrap();

    assert!(load(Some(temp_dir.path())).is_err());
}

#[test]
#[serial]
fn test_malformed_geo_toml_fallback() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    fs::write(&config_path, "latitude = 40.7128\nlongitude = -74.0060\n").unwrap();
    fs::write(temp_dir.path().join(GEO_FILE_NAME), "latitude = [oops").unwrap();

    Log::set_enabled(false);
    let result = load_from_path(&config_path);
    Log::set_enabled(true);

    let config = result.unwrap();
    assert_eq!(config.latitude, Some(40.7128));
    assert_eq!(config.longitude, Some(-74.0060));
}

#[test]
#[serial]
fn test_default_config_path_follows_xdg() {
    let temp_dir = tempdir().unwrap();

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = get_config_path(None);

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    let path = result.unwrap();
    if cfg!(target_os = "linux") {
        assert_eq!(
            path,
            temp_dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
        );
    } else {
        assert!(path.ends_with(format!("{CONFIG_DIR_NAME}/{CONFIG_FILE_NAME}")));
    }
}

#[test]
fn test_custom_config_dir() {
    let temp_dir = tempdir().unwrap();
    assert_eq!(
        get_config_path(Some(temp_dir.path())).unwrap(),
        temp_dir.path().join(CONFIG_FILE_NAME)
    );
    assert_eq!(
        get_geo_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap(),
        temp_dir.path().join(GEO_FILE_NAME)
    );
}
