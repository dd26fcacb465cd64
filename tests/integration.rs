// SPDX-License-Identifier: MPL-2.0
use filter_lens::config::{self, Config, GeneralConfig};
use filter_lens::i18n::fluent::I18n;
use filter_lens::notifications::Notification;
use filter_lens::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_every_english_key_exists_in_french() {
    let config = Config::default();
    let en = I18n::new(Some("en-US".to_string()), &config);
    let fr = I18n::new(Some("fr".to_string()), &config);

    for key in [
        "notification-image-loaded",
        "notification-load-error",
        "notification-filter-applied",
        "notification-filter-error",
        "notification-no-image",
        "notification-undo-step",
        "notification-redo-step",
        "notification-nothing-to-undo",
        "notification-nothing-to-redo",
        "notification-image-reset",
        "notification-theme-changed",
        "notification-image-saved",
        "notification-save-error",
        "notification-preview-saved",
        "notification-config-load-error",
        "notification-settings-saved",
        "notification-settings-save-error",
        "error-io",
        "error-load-image",
        "error-save-image",
        "error-filter",
        "error-config",
        "error-unsupported-format",
        "filter-negative",
        "filter-smooth",
        "filter-edge-enhance",
        "filter-brightness",
        "filter-contrast",
        "theme-light",
        "theme-dark",
        "theme-system",
        "cli-unknown-operation",
        "cli-invalid-value",
        "cli-missing-input",
        "cli-invalid-arguments",
    ] {
        assert!(!en.tr(key).starts_with("MISSING"), "en-US lacks {key}");
        assert!(!fr.tr(key).starts_with("MISSING"), "fr lacks {key}");
    }
}

#[test]
fn test_notifications_render_in_french() {
    let i18n = I18n::new(Some("fr".to_string()), &Config::default());
    let note = Notification::info("notification-redo-step")
        .with_arg("step", "3")
        .with_arg("total", "5");
    assert_eq!(note.render(&i18n), "Rétablir : étape 3 sur 5");
}

#[test]
fn test_corrupted_settings_fall_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[editor\nblur_sigma = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING));
}
