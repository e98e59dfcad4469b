//! Shared helpers for integration tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with environment variables temporarily modified.
///
/// `changes` is a list of `(key, value)` pairs: `Some(v)` sets the variable,
/// `None` removes it. Previous values are restored afterwards, including on
/// panic, and access is serialized so parallel tests cannot observe each
/// other's variables.
pub fn with_env<R>(changes: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    struct Restore<'a> {
        saved: Vec<(String, Option<String>)>,
        _lock: MutexGuard<'a, ()>,
    }

    impl Drop for Restore<'_> {
        fn drop(&mut self) {
            // Reverse order so duplicate keys restore the oldest snapshot last
            for (key, value) in self.saved.drain(..).rev() {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }

    let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _restore = Restore {
        saved: changes
            .iter()
            .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
            .collect(),
        _lock: lock,
    };

    for (key, value) in changes {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    f()
}
