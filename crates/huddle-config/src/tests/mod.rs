
use std::env;

use tempfile::TempDir;

/// Scoped env var override: the previous value comes back on drop.
///
/// Tests touching the environment run under `#[serial]`; the guard only
/// keeps a test from leaking its overrides into the next one.
pub(crate) struct EnvGuard {
    name: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(name: &'static str, value: &str) -> Self {
        let previous = env::var(name).ok();
        unsafe {
            env::set_var(name, value);
        }
        Self { name, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            if let Some(value) = &self.previous {
                env::set_var(self.name, value);
            } else {
                env::remove_var(self.name);
            }
        }
    }
}

/// Create a temp config directory and point HUDDLE_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("HUDDLE_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
