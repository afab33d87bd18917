use eframe::egui;
use std::sync::Arc;

fn read_first_existing(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Ok(data) = std::fs::read(p) {
            return Some(data);
        }
    }
    None
}

/// Lucide icons for chevrons, plus a system Arabic face so Arabic labels render.
pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    #[cfg(target_os = "macos")]
    let arabic_candidates = [
        "/System/Library/Fonts/GeezaPro.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ];

    #[cfg(target_os = "windows")]
    let arabic_candidates = [
        "C:\\Windows\\Fonts\\segoeui.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let arabic_candidates = [
        "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ];

    fonts.font_data.insert(
        "lucide".to_owned(),
        Arc::new(egui::FontData::from_static(
            lucide_icons::lucide_font_bytes(),
        )),
    );
    // Bind for explicit family name (FontFamily::Name("lucide"))
    fonts
        .families
        .entry(egui::FontFamily::Name("lucide".into()))
        .or_default()
        .insert(0, "lucide".to_owned());

    if let Some(arabic) = read_first_existing(&arabic_candidates) {
        fonts.font_data.insert(
            "arabic_fallback".to_owned(),
            Arc::new(egui::FontData::from_owned(arabic)),
        );
        // Fallback only: Latin text keeps the default face
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push("arabic_fallback".to_owned());
    } else {
        tracing::debug!("no Arabic system font found");
    }

    ctx.set_fonts(fonts);
}
