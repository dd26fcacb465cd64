// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! An explicit directory wins, then `--config-dir`, then
//! `FILTER_LENS_CONFIG_DIR`, then the platform config directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
const APP_NAME: &str = "FilterLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FILTER_LENS_CONFIG_DIR";

/// `--config-dir`, set once at startup.
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call has an effect and later
/// calls return `false`.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    let applied = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !applied {
        tracing::debug!("config dir override already initialized");
    }
    applied
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Settings directory, e.g. `~/.config/FilterLens/` on Linux. `None` when
/// no platform config directory exists.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with `dir` taking precedence when given.
pub fn get_app_config_dir_with_override(dir: Option<PathBuf>) -> Option<PathBuf> {
    dir.or_else(get_cli_config_dir)
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the environment run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
