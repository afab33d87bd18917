#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]
// On Windows hide console in release builds. Debug keeps console for diagnostics.

use anyhow::Result;
use eframe::NativeOptions;
use std::sync::Arc;

use scribe_settings::config::AppConfig;
use scribe_settings::gui::{self, SettingsScreen};
use scribe_settings::i18n;
use scribe_settings::prefs::{FileStore, Preferences};

const APP_NAME: &str = "Scribe Settings";

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    // Default filter suppresses noisy WGPU/eframe warnings
    // Users can override fully via RUST_LOG if desired.
    let default_directives = "info,egui=error,epaint=error,eframe=error,egui_wgpu=error,wgpu=error,wgpu_core=error,wgpu_hal=error,naga=error";
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// In-memory fallback: the screen still works, nothing is persisted
fn open_preferences(config: &AppConfig) -> Preferences {
    let path = config.preferences_path();
    match FileStore::open(&path) {
        Ok(store) => {
            tracing::info!("preferences: {}", store.path().display());
            Preferences::new(Arc::new(store))
        }
        Err(e) => {
            tracing::error!(
                "cannot open preferences at {}: {}; changes will not be saved",
                path.display(),
                e
            );
            Preferences::in_memory()
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    tracing::info!("{} version {}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    i18n::set_ui_language_preference(&config.ui_language);
    tracing::info!("ui locale {}", i18n::ui_locale());
    let prefs = open_preferences(&config);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id("scribe-settings") // Wayland app_id
            .with_title(i18n::tr("app-title"))
            .with_inner_size(egui::vec2(420.0, 760.0))
            .with_min_inner_size(egui::vec2(320.0, 480.0))
            .with_resizable(true),
        renderer: eframe::Renderer::Wgpu,
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            gui::fonts::setup_fonts(&cc.egui_ctx);
            Ok(Box::new(SettingsScreen::new(cc, prefs, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{} exited with error: {}", APP_NAME, e))?;

    Ok(())
}
