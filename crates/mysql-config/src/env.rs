//! Sources for environment-style configuration values.

use std::collections::HashMap;

/// Key-value lookup used to read credentials.
///
/// `ProcessEnv` reads the real process environment; a `HashMap` can be
/// passed instead to inject values in tests.
pub trait EnvSource {
    /// Look up `key`. Returns `None` when the key is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
