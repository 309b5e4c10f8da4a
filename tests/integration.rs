// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config};
use iced_folio::app::PageWidgets;
use iced_folio::content::{self, Stat};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

const CUSTOM_PORTFOLIO: &str = r#"
technologies = [["Rust", "Iced"]]

[profile]
name = "Ada Lovelace"
role = "Analyst"
email = "ada@example.com"

[[stats]]
kind = "counter"
target = 120
label = "Programs"
suffix = "+"

[[stats]]
kind = "text"
value = "SQL"
label = "Language"

[[gallery]]
source = "pictures/engine.png"
alt_text = "Analytical engine"

[[gallery]]
source = "https://example.com/remote.jpg"
alt_text = "Remote picture"
"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    fs::write(&temp_config_file_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("nav-experience"), i18n_en.tr("nav-experience"));
}

#[test]
fn test_sectioned_settings_file_is_read() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "dark"

[counter]
duration_ms = 3000

[carousel]
auto_advance_ms = 8000

[content]
path = "/srv/portfolio.toml"
"#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.counter.duration_ms, Some(3000));
    assert_eq!(config.carousel.auto_advance_ms, Some(8000));
    assert_eq!(
        config.content.path.as_deref(),
        Some(std::path::Path::new("/srv/portfolio.toml"))
    );
}

#[test]
fn test_invalid_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[counter\nduration_ms = ")
        .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_custom_content_file_mounts_its_widgets() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let pictures = dir.path().join("pictures");
    fs::create_dir(&pictures).expect("create pictures dir");
    fs::write(pictures.join("engine.png"), b"not really a png").expect("write picture");
    let path = dir.path().join("portfolio.toml");
    fs::write(&path, CUSTOM_PORTFOLIO).expect("write portfolio");

    let (loaded, warning) = content::load(Some(&path));
    assert!(warning.is_none());
    assert_eq!(loaded.portfolio.profile.name, "Ada Lovelace");
    assert_eq!(loaded.base_dir.as_deref(), Some(dir.path()));

    let widgets = PageWidgets::mount(1, &loaded, &Config::default());
    assert_eq!(widgets.counters().len(), 2);
    assert!(matches!(loaded.portfolio.stats[0], Stat::Counter(_)));
    assert!(widgets.counters()[0].is_some());
    assert!(widgets.counters()[1].is_none());

    // The local picture exists relative to the content file; the remote one
    // is drawn as a placeholder.
    assert_eq!(widgets.handles().len(), 2);
    assert!(widgets.handles()[0].is_some());
    assert!(widgets.handles()[1].is_none());
}

#[test]
fn test_broken_content_file_falls_back_to_embedded() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("portfolio.toml");
    fs::write(&path, "[profile]\nname = ").expect("write portfolio");

    let (loaded, warning) = content::load(Some(&path));
    assert_eq!(warning.as_deref(), Some("notification-content-load-error"));
    assert!(!loaded.portfolio.gallery.is_empty());
    assert!(loaded.base_dir.is_none());
}

#[test]
fn test_every_locale_translates_page_keys() {
    let keys = [
        "window-title",
        "nav-home",
        "nav-expertise",
        "nav-experience",
        "nav-education",
        "hero-view-experience",
        "hero-contact",
        "section-gallery",
        "carousel-open-hint",
        "media-unavailable",
        "notification-content-reloaded",
    ];
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING"), "{lang} lacks {key}");
        }
    }
}
