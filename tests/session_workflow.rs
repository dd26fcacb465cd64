// SPDX-License-Identifier: MPL-2.0
//! End-to-end runs through the application layer with real files.

use filter_lens::app::{App, Flags, Op};
use filter_lens::config::{self, Config, GeneralConfig};
use filter_lens::domain::editing::{EnhanceFactor, MAX_HISTORY};
use filter_lens::media::{codec, ExportFormat};
use filter_lens::theming::ThemeMode;
use image_rs::{DynamicImage, GenericImageView, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_input(dir: &Path, color: [u8; 3]) -> PathBuf {
    let path = dir.join("input.png");
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 4, Rgb(color)));
    codec::save_image(&image, &path, None, 90).expect("write input");
    path
}

fn english_app(input: PathBuf) -> App {
    let flags = Flags {
        lang: Some("en-US".to_string()),
        input,
        ..Flags::default()
    };
    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Light,
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    App::with_config(&flags, config)
}

fn corner(path: &Path) -> [u8; 3] {
    codec::load_image(path)
        .expect("load output")
        .to_rgb8()
        .get_pixel(0, 0)
        .0
}

#[test]
fn ops_run_in_order_and_export_png() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [100, 50, 0]);
    let output = dir.path().join("out.png");

    let mut app = english_app(input.clone());
    app.open(&input).expect("open");
    app.apply_ops(&[
        Op::Negative,
        Op::Brightness(EnhanceFactor::new(0.5)),
        Op::Undo,
    ]);
    app.export_to(&output, None).expect("export");

    // negative only; the brightness step was undone
    assert_eq!(corner(&output), [155, 205, 255]);
    assert!(app.editor().can_redo());
}

#[test]
fn jpeg_export_follows_explicit_format() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [120, 120, 120]);
    let output = dir.path().join("result.bin");

    let mut app = english_app(input.clone());
    app.open(&input).expect("open");
    app.export_to(&output, Some(ExportFormat::Jpeg)).expect("export");

    let bytes = std::fs::read(&output).expect("read output");
    assert!(bytes.starts_with(&[0xFF, 0xD8]));
    for channel in corner(&output) {
        assert!(channel.abs_diff(120) <= 8);
    }
}

#[test]
fn missing_input_fails_without_session() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("absent.png");

    let mut app = english_app(input.clone());
    assert!(app.open(&input).is_err());
    assert!(!app.editor().has_image());
}

#[test]
fn undecodable_input_is_reported_as_error() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"this is not a png").expect("write");

    let mut app = english_app(input.clone());
    assert!(app.open(&input).is_err());
    assert!(!app.editor().has_image());
}

#[test]
fn failed_write_keeps_processed_image() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [10, 10, 10]);
    let output = dir.path().join("missing-dir").join("out.png");

    let mut app = english_app(input.clone());
    app.open(&input).expect("open");
    app.apply_ops(&[Op::Negative]);

    assert!(app.export_to(&output, None).is_err());
    let processed = app.editor().processed().expect("processed");
    assert_eq!(processed.to_rgb8().get_pixel(0, 0).0, [245, 245, 245]);
}

#[test]
fn history_is_bounded_across_many_ops() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [0, 0, 0]);

    let mut app = english_app(input.clone());
    app.open(&input).expect("open");
    app.apply_ops(&[Op::Smooth; MAX_HISTORY * 2]);

    assert_eq!(app.editor().history().len(), MAX_HISTORY);
}

#[test]
fn preview_sheet_is_written_on_theme_surface() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [0, 200, 0]);
    let preview = dir.path().join("preview.png");

    let mut app = english_app(input.clone());
    app.open(&input).expect("open");
    app.apply_ops(&[Op::Theme]);
    assert_eq!(app.editor().theme(), ThemeMode::Dark);
    app.save_preview(&preview).expect("preview");

    let sheet = codec::load_image(&preview).expect("load preview");
    let (width, height) = sheet.dimensions();
    assert!(width > height);
    let dark_surface = filter_lens::theming::palette::DARK_SURFACE;
    assert_eq!(sheet.to_rgba8().get_pixel(0, 0), &dark_surface);
}

#[test]
fn save_settings_persists_language_and_final_theme() {
    let dir = tempdir().expect("temp dir");
    let input = write_input(dir.path(), [1, 2, 3]);
    let settings_dir = dir.path().join("settings");
    let flags = Flags {
        lang: Some("fr".to_string()),
        config_dir: Some(settings_dir.to_string_lossy().into_owned()),
        theme: Some(ThemeMode::Light),
        save_settings: true,
        input: input.clone(),
        ..Flags::default()
    };

    let mut app = App::with_config(&flags, Config::default());
    app.open(&input).expect("open");
    app.apply_ops(&[Op::Theme]);
    app.save_settings().expect("save settings");

    let (saved, warning) = config::load_with_override(Some(settings_dir));
    assert!(warning.is_none());
    assert_eq!(saved.general.language.as_deref(), Some("fr"));
    assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
    assert_eq!(saved.export, Config::default().export);
}
