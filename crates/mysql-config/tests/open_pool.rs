//! Integration tests for opening MySQL pools from a configuration
//!
//! Pools are lazy, so everything except `test_ping_live_server` runs without a
//! MySQL server. The live test is ignored by default; run it with
//! `cargo test -- --ignored` after exporting MYSQL_USERNAME, MYSQL_PASSWORD and
//! optionally MYSQL_TEST_HOST / MYSQL_TEST_PORT.

use std::collections::HashMap;
use std::time::Duration;

use mysql_config::{ConfigError, MySQLConfig, PoolPolicy, PASSWORD_VAR, USERNAME_VAR};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for tests
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn test_config() -> MySQLConfig {
    let env: HashMap<String, String> = [
        (USERNAME_VAR.to_string(), "alice".to_string()),
        (PASSWORD_VAR.to_string(), "secret".to_string()),
    ]
    .into_iter()
    .collect();
    MySQLConfig::from_env(&env).unwrap()
}

#[tokio::test]
async fn test_open_applies_fixed_policy() {
    init_logging();

    for database in ["", "shop"] {
        let pool = test_config().open(database).unwrap();
        let policy = pool.policy();

        assert_eq!(policy.max_lifetime, Duration::from_secs(180));
        assert_eq!(policy.max_open, 10);
        assert_eq!(policy.max_idle, 10);
        assert_eq!(policy, PoolPolicy::FIXED);
    }
}

#[tokio::test]
async fn test_open_passes_connection_fields_to_driver() {
    init_logging();

    let pool = test_config().open("shop").unwrap();
    let opts = pool.opts();

    assert_eq!(opts.user(), Some("alice"));
    assert_eq!(opts.pass(), Some("secret"));
    assert_eq!(opts.ip_or_hostname(), "localhost");
    assert_eq!(opts.tcp_port(), 33060);
    assert_eq!(opts.db_name(), Some("shop"));

    let server = test_config().open("").unwrap();
    assert_eq!(server.opts().db_name(), None);
}

#[tokio::test]
async fn test_open_surfaces_driver_error() {
    init_logging();

    let config = test_config().with_port("not-a-port");
    let err = config.open("shop").unwrap_err();

    info!("Driver rejected descriptor: {err}");
    assert!(matches!(err, ConfigError::Driver(mysql_async::Error::Url(_))));
}

#[tokio::test]
async fn test_pool_clones_share_handle() {
    let pool = test_config().open("shop").unwrap();
    let clone = pool.clone();
    assert_eq!(clone.policy(), pool.policy());
    assert_eq!(clone.opts(), pool.opts());
}

#[tokio::test]
#[ignore = "requires a running MySQL server"]
async fn test_ping_live_server() -> anyhow::Result<()> {
    init_logging();

    let mut config = MySQLConfig::new()?;
    if let Ok(host) = std::env::var("MYSQL_TEST_HOST") {
        config = config.with_host(host);
    }
    if let Ok(port) = std::env::var("MYSQL_TEST_PORT") {
        config = config.with_port(port);
    }

    let pool = config.open("")?;
    pool.ping().await?;
    info!("Pinged {}:{}", config.host(), config.port());
    pool.disconnect().await?;
    Ok(())
}
