//! Configuration validation integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use storefront_monitor::config::{Config, RedisConfig, ServerConfig, Validate};
    use storefront_monitor::{MonitorError, MonitoringConfig};
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_full_config_file() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9300
  workers: 2
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
  redis:
    enabled: false
monitoring:
  service_name: "catalog"
  error_rate_threshold: 2.5
  response_time_threshold_ms: 1500
  alert_key_prefix: "catalog:alert:"
logging:
  level: "debug"
  json: true
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.workers, Some(2));
        assert!(!config.storage.redis.enabled);
        assert_eq!(config.monitoring.error_rate_threshold, 2.5);
        assert_eq!(config.monitoring.alert_key_prefix, "catalog:alert:");
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server: [not, a, map").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(MonitorError::Yaml(_))));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = MonitoringConfig {
            error_rate_threshold: 150.0,
            ..MonitoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("port"));
    }

    #[test]
    fn test_disabled_redis_skips_url_check() {
        let config = RedisConfig {
            url: "not-a-url".to_string(),
            enabled: false,
            ..RedisConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
