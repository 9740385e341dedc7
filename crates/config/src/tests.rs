use std::time::Duration;

use figment::Jail;

use crate::{AppConfig, ConfigError, ServerConfig};

const DEFAULT_TOML: &str = r#"
app_name = "product-service"
app_version = "0.1.0"

[server]
host = "0.0.0.0"
port = 5001
"#;

fn server(host: &str, port: u16) -> ServerConfig {
    ServerConfig {
        host: host.to_string(),
        port,
        health_port: None,
        drain_timeout_secs: None,
    }
}

#[test]
fn test_load_default_file() {
    Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;

        let config = AppConfig::load("config").expect("config should load");
        assert_eq!(config.app_name, "product-service");
        assert_eq!(config.app_version, "0.1.0");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.is_production());
        assert_eq!(config.app_env, "development");
        assert!(config.server.drain_timeout().is_none());
        Ok(())
    });
}

#[test]
fn test_env_file_and_variables_override_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;
        jail.create_file(
            "config/production.toml",
            r#"
app_env = "production"

[telemetry]
log_level = "warn"
"#,
        )?;
        jail.set_env("APP_ENV", "production");
        jail.set_env("APP_SERVER__PORT", "7001");
        jail.set_env("APP_SERVER__DRAIN_TIMEOUT_SECS", "15");

        let config = AppConfig::load("config").expect("config should load");
        assert!(config.is_production());
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server.drain_timeout(), Some(Duration::from_secs(15)));
        Ok(())
    });
}

#[test]
fn test_missing_required_field_fails() {
    Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", "app_name = \"product-service\"")?;

        let result = AppConfig::load("config");
        assert!(matches!(result, Err(ConfigError::Load(_))));
        Ok(())
    });
}

#[test]
fn test_socket_addr() {
    let addr = server("0.0.0.0", 5001).socket_addr().unwrap();
    assert_eq!(addr.to_string(), "0.0.0.0:5001");

    let addr = server("::1", 5001).socket_addr().unwrap();
    assert_eq!(addr.to_string(), "[::1]:5001");

    assert!(matches!(
        server("not-an-ip", 5001).socket_addr(),
        Err(ConfigError::InvalidAddress(_))
    ));
}

#[test]
fn test_health_addr_defaults_to_port_plus_1000() {
    let addr = server("127.0.0.1", 5001).health_addr().unwrap();
    assert_eq!(addr.port(), 6001);

    let mut explicit = server("127.0.0.1", 5001);
    explicit.health_port = Some(8080);
    assert_eq!(explicit.health_addr().unwrap().port(), 8080);

    assert!(server("127.0.0.1", 65000).health_addr().is_err());
}
