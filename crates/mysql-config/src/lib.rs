//! MySQL connection configuration
//!
//! Reads credentials from the environment, renders the connection descriptor
//! and opens a pooled `mysql_async` handle with a fixed pool policy.
//!
//! ```no_run
//! # async fn demo() -> Result<(), mysql_config::ConfigError> {
//! let config = mysql_config::MySQLConfig::new()?;
//! let pool = config.open("shop")?;
//! pool.ping().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod env;
mod error;
mod persistence;
mod pool;

pub use config::{MySQLConfig, DEFAULT_HOST, DEFAULT_PORT, PASSWORD_VAR, USERNAME_VAR};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use persistence::ConfigPersistence;
pub use pool::{ConnectionPool, PoolPolicy};
