//! Error types for MySQL configuration.

use thiserror::Error;

/// Errors that can occur while building a configuration or opening a pool.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required credential variable is unset or empty.
    #[error("environment variable {var} for MySQL {} not found", credential_kind(.var))]
    MissingCredential { var: &'static str },

    /// A pool policy the driver cannot honour.
    #[error(
        "invalid pool policy: max_open must be at least 1 (max_open {max_open}, max_idle {max_idle})"
    )]
    InvalidPoolPolicy { max_open: usize, max_idle: usize },

    /// File-based configuration is not available.
    #[error("not implemented")]
    NotImplemented,

    /// Error returned by the MySQL driver, passed through as-is.
    #[error(transparent)]
    Driver(#[from] mysql_async::Error),
}

impl ConfigError {
    /// Name of the missing variable, if this is a credential error.
    pub fn missing_var(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingCredential { var } => Some(*var),
            _ => None,
        }
    }
}

fn credential_kind(var: &str) -> &'static str {
    if var == crate::PASSWORD_VAR {
        "password"
    } else {
        "username"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = ConfigError::MissingCredential {
            var: crate::USERNAME_VAR,
        };
        assert_eq!(
            err.to_string(),
            "environment variable MYSQL_USERNAME for MySQL username not found"
        );
        assert_eq!(err.missing_var(), Some("MYSQL_USERNAME"));

        let err = ConfigError::MissingCredential {
            var: crate::PASSWORD_VAR,
        };
        assert_eq!(
            err.to_string(),
            "environment variable MYSQL_PASSWORD for MySQL password not found"
        );
    }

    #[test]
    fn test_not_implemented_message() {
        assert_eq!(ConfigError::NotImplemented.to_string(), "not implemented");
        assert_eq!(ConfigError::NotImplemented.missing_var(), None);
    }
}
