//! MySQL connection pool handle.

use std::time::Duration;

use mysql_async::prelude::Queryable;
use mysql_async::{Opts, OptsBuilder, Pool, PoolConstraints, PoolOpts};

use crate::error::ConfigError;

/// Lifetime and size limits applied to every pool opened from a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolPolicy {
    /// Connections older than this are closed instead of reused.
    /// `Duration::ZERO` means no limit.
    pub max_lifetime: Duration,
    /// Upper bound on open connections.
    pub max_open: usize,
    /// Idle connections retained by the pool.
    pub max_idle: usize,
}

impl PoolPolicy {
    /// 3 minute lifetime, 10 open, 10 idle.
    pub const FIXED: PoolPolicy = PoolPolicy {
        max_lifetime: Duration::from_secs(180),
        max_open: 10,
        max_idle: 10,
    };

    /// Driver pool options for this policy.
    ///
    /// `max_idle` maps to the driver's lower pool constraint, which is the
    /// number of idle connections it keeps. It is capped at `max_open`.
    /// A policy with `max_open == 0` could never hand out a connection and is
    /// rejected.
    pub fn to_pool_opts(&self) -> Result<PoolOpts, ConfigError> {
        let invalid = ConfigError::InvalidPoolPolicy {
            max_open: self.max_open,
            max_idle: self.max_idle,
        };
        if self.max_open == 0 {
            return Err(invalid);
        }
        let constraints = PoolConstraints::new(self.max_idle.min(self.max_open), self.max_open)
            .ok_or(invalid)?;
        let ttl = (!self.max_lifetime.is_zero()).then_some(self.max_lifetime);

        Ok(PoolOpts::default()
            .with_constraints(constraints)
            .with_abs_conn_ttl(ttl))
    }

    /// Read the policy back from driver pool options.
    pub fn from_pool_opts(pool_opts: &PoolOpts) -> Self {
        let constraints = pool_opts.constraints();
        Self {
            max_lifetime: pool_opts.abs_conn_ttl().unwrap_or(Duration::ZERO),
            max_open: constraints.max(),
            max_idle: constraints.min(),
        }
    }
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self::FIXED
    }
}

/// A shared, lazily connecting MySQL pool.
///
/// Cloning is cheap and every clone uses the same underlying connections,
/// so one handle per database is enough for the whole process.
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    pool: Pool,
    opts: Opts,
}

impl ConnectionPool {
    /// Create a pool from parsed driver options with `policy` applied.
    ///
    /// Fails with [`ConfigError::InvalidPoolPolicy`] when `policy` allows no
    /// open connections.
    pub fn new(opts: Opts, policy: PoolPolicy) -> Result<Self, ConfigError> {
        let opts: Opts = OptsBuilder::from_opts(opts)
            .pool_opts(policy.to_pool_opts()?)
            .into();
        let pool = Pool::new(opts.clone());
        Ok(Self { pool, opts })
    }

    /// The policy as configured on the driver.
    pub fn policy(&self) -> PoolPolicy {
        PoolPolicy::from_pool_opts(self.opts.pool_opts())
    }

    /// The driver options the pool was built from.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// The underlying `mysql_async` pool.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Check that the server is reachable with the configured credentials.
    pub async fn ping(&self) -> Result<(), mysql_async::Error> {
        let mut conn = self.pool.get_conn().await?;
        conn.ping().await?;
        tracing::debug!(
            "Pinged MySQL server at {}:{}",
            self.opts.ip_or_hostname(),
            self.opts.tcp_port()
        );
        Ok(())
    }

    /// Close all connections. Other clones of this handle stop working.
    pub async fn disconnect(self) -> Result<(), mysql_async::Error> {
        self.pool.disconnect().await
    }
}
