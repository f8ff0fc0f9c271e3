use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host, eq(crate::DEFAULT_HOST));
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(config.auth.user_header, eq("X-User-Id"));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let _guard = EnvGuard::set("UT_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000

              [database]
              path = "activity.db"
              max_connections = 3

              [auth]
              user_header = "X-Admin-Id"

              [logging]
              level = "debug"
              file = "tracker.log"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.database.path, eq("activity.db"));
    assert_that!(config.database.max_connections, eq(3));
    assert_that!(config.auth.user_header, eq("X-Admin-Id"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.file, some(eq("tracker.log")));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("UT_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_unparseable_env_var_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _port_guard = EnvGuard::set("UT_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_bool_env_vars_when_load_then_only_true_or_one_enable() {
    // Given
    let _temp = setup_config_dir();

    // When / Then
    {
        let _colored = EnvGuard::set("UT_LOG_COLORED", "0");
        assert_that!(Config::load().unwrap().logging.colored, eq(false));
    }
    {
        let _colored = EnvGuard::set("UT_LOG_COLORED", "1");
        assert_that!(Config::load().unwrap().logging.colored, eq(true));
    }
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME)));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("UT_LOG_FILE", "server.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(
        path,
        some(eq(&temp.path().join(crate::DEFAULT_LOG_DIRECTORY).join("server.log")))
    );
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_formatted() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("UT_SERVER_HOST", "0.0.0.0");
    let _port = EnvGuard::set("UT_SERVER_PORT", "9100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("0.0.0.0:9100"));
}
