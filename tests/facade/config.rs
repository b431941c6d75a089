//! Client construction tests

use std::time::Duration;

use keyfront::{ClientConfig, Error, PoolConfig, CONFIG_FILE_NAME};

#[test]
fn test_connect_uses_configured_prefix() {
    let config = ClientConfig::new("127.0.0.1", 1).with_prefix("svc:");
    let client = keyfront::connect(&config).unwrap();

    assert_eq!(client.prefix(), "svc:");
    assert_eq!(client.executor().address(), "127.0.0.1:1");
}

#[test]
fn test_connect_rejects_empty_pool() {
    let config = ClientConfig::default().with_pool(PoolConfig {
        max_size: 0,
        ..PoolConfig::default()
    });
    assert!(matches!(
        keyfront::connect(&config),
        Err(Error::InvalidConfig { .. })
    ));
}

#[test]
fn test_unreachable_server_fails_first_command() {
    let config = ClientConfig::new("127.0.0.1", 1).with_timeout(Duration::from_secs(1));
    let client = keyfront::connect(&config).unwrap();

    let err = client.ping().unwrap_err();
    assert!(err.is_connectivity(), "unexpected error: {:?}", err);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    ClientConfig::new("cache.internal", 6380)
        .with_prefix("jobs:")
        .with_database(2)
        .write_to_file(&path)
        .unwrap();

    let loaded = ClientConfig::from_file(&path).unwrap();
    assert_eq!(loaded.address(), "cache.internal:6380");
    assert_eq!(loaded.prefix, "jobs:");
    assert_eq!(loaded.database, 2);
}
