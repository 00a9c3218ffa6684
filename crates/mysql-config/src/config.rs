//! MySQL connection configuration.

use std::fmt;

use mysql_async::Opts;

use crate::env::{EnvSource, ProcessEnv};
use crate::error::ConfigError;
use crate::pool::{ConnectionPool, PoolPolicy};

/// Environment variable holding the MySQL username.
pub const USERNAME_VAR: &str = "MYSQL_USERNAME";
/// Environment variable holding the MySQL password.
pub const PASSWORD_VAR: &str = "MYSQL_PASSWORD";

/// Host used unless overridden. Loopback is the safest default.
pub const DEFAULT_HOST: &str = "localhost";
/// Port used unless overridden. Depending on the server this may need to be 3306.
pub const DEFAULT_PORT: &str = "33060";

/// Credentials and network location of a MySQL server.
///
/// Username and password are fixed at construction. Host, port and the
/// logging flag start from their defaults and can be replaced with the
/// `with_*` methods.
#[derive(Clone, PartialEq, Eq)]
pub struct MySQLConfig {
    username: String,
    password: String,
    host: String,
    port: String,
    logging: bool,
}

impl MySQLConfig {
    /// Build a configuration from the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(&ProcessEnv)
    }

    /// Build a configuration from `env`.
    ///
    /// Fails with [`ConfigError::MissingCredential`] naming the variable when
    /// the username or password is unset or empty. The username is checked
    /// first.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let username = required_var(env, USERNAME_VAR)?;
        let password = required_var(env, PASSWORD_VAR)?;

        let config = Self {
            username,
            password,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            logging: false,
        };
        tracing::debug!(
            "Loaded MySQL configuration for user {} at {}:{}",
            config.username,
            config.host,
            config.port
        );
        Ok(config)
    }

    /// Replace the host. An empty value falls back to [`DEFAULT_HOST`].
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = non_empty_or(host.into(), DEFAULT_HOST);
        self
    }

    /// Replace the port. An empty value falls back to [`DEFAULT_PORT`].
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = non_empty_or(port.into(), DEFAULT_PORT);
        self
    }

    /// Turn debug logging on or off for tools built on this config.
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// The MySQL username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The MySQL password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The server host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The server port, as given.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Whether debug logging was requested.
    pub fn logging(&self) -> bool {
        self.logging
    }

    /// The `user:password` credential part of the descriptor.
    pub fn auth(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }

    /// Returns the full descriptor including a database name.
    ///
    /// Using "" for the database name gives a server-level connection that
    /// can list and choose databases. Values are not escaped.
    pub fn dsn(&self, database: &str) -> String {
        format!(
            "{}@tcp({}:{}/{})",
            self.auth(),
            self.host,
            self.port,
            database
        )
    }

    /// The same fields as [`dsn`](Self::dsn) in the URL form `mysql_async` parses.
    pub fn connection_url(&self, database: &str) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.auth(),
            self.host,
            self.port,
            database
        )
    }

    /// Open a pooled handle to `database`.
    ///
    /// The driver validates the connection parameters but does not connect;
    /// use [`ConnectionPool::ping`] to check reachability. The returned pool
    /// is meant to be created once per database and shared.
    pub fn open(&self, database: &str) -> Result<ConnectionPool, ConfigError> {
        let opts =
            Opts::from_url(&self.connection_url(database)).map_err(mysql_async::Error::from)?;
        let pool = ConnectionPool::new(opts, PoolPolicy::FIXED)?;
        tracing::debug!(
            "Opened MySQL pool for {}:{}/{}",
            self.host,
            self.port,
            database
        );
        Ok(pool)
    }
}

impl fmt::Debug for MySQLConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySQLConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("logging", &self.logging)
            .finish()
    }
}

fn required_var<E: EnvSource + ?Sized>(
    env: &E,
    var: &'static str,
) -> Result<String, ConfigError> {
    match env.var(var) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential { var }),
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
