use eframe::egui::{self, RichText};

use super::row::{show_row, RowEvent};
use crate::cell::{SettingsRowCell, REUSE_IDENTIFIER};
use crate::config::{AppConfig, ThemeSetting};
use crate::environment::{CellEnvironment, Palette};
use crate::i18n;
use crate::languages::LANGUAGES_ABBR;
use crate::menu::{language_groups, root_groups, SectionGroup};
use crate::prefs::Preferences;
use crate::section::{Section, SectionState};

#[derive(Debug, Clone, PartialEq)]
enum Page {
    Root,
    Language(Section),
    TranslatePicker { lang: String, back: Box<Page> },
}

/// Rows are reused across frames and pages; each pass re-configures them.
struct CellPool {
    prefs: Preferences,
    cells: Vec<SettingsRowCell>,
}

impl CellPool {
    fn new(prefs: Preferences) -> Self {
        Self {
            prefs,
            cells: Vec::new(),
        }
    }

    fn dequeue(&mut self, index: usize) -> &mut SettingsRowCell {
        while self.cells.len() <= index {
            self.cells.push(SettingsRowCell::new(self.prefs.clone()));
        }
        &mut self.cells[index]
    }
}

/// Page reached by opening `cell` from `current`.
fn destination(cell: &SettingsRowCell, current: &Page) -> Option<Page> {
    let section = cell.section()?;
    match &section.state {
        SectionState::SpecificLang(_) => Some(Page::Language(section.clone())),
        SectionState::TranslateLang => Some(Page::TranslatePicker {
            lang: cell.language_code(),
            back: Box::new(current.clone()),
        }),
        _ => None,
    }
}

pub struct SettingsScreen {
    prefs: Preferences,
    config: AppConfig,
    page: Page,
    pool: CellPool,
}

impl SettingsScreen {
    pub fn new(cc: &eframe::CreationContext<'_>, prefs: Preferences, config: AppConfig) -> Self {
        match config.theme {
            ThemeSetting::Light => cc.egui_ctx.set_theme(egui::Theme::Light),
            ThemeSetting::Dark => cc.egui_ctx.set_theme(egui::Theme::Dark),
            ThemeSetting::Auto => {}
        }
        Self {
            pool: CellPool::new(prefs.clone()),
            prefs,
            config,
            page: Page::Root,
        }
    }

    fn show_groups(
        &mut self,
        ui: &mut egui::Ui,
        env: &CellEnvironment,
        groups: Vec<SectionGroup>,
    ) -> Option<Page> {
        let mut next = None;
        let mut index = 0usize;
        let current = self.page.clone();
        for group in groups {
            ui.add_space(10.0);
            ui.label(RichText::new(group.heading).strong());
            ui.add_space(4.0);
            for section in group.rows {
                let cell = self.pool.dequeue(index);
                cell.configure(section, env);
                let event = ui
                    .push_id((REUSE_IDENTIFIER, index), |ui| show_row(ui, cell))
                    .inner;
                if event == RowEvent::Opened {
                    next = destination(cell, &current);
                }
                ui.add_space(4.0);
                index += 1;
            }
        }
        next
    }

    // Returns true once a language was picked
    fn show_picker(&mut self, ui: &mut egui::Ui, lang: &str) -> bool {
        let current = self.prefs.translate_language(lang);
        let mut picked = false;
        ui.add_space(10.0);
        for (name, abbr) in LANGUAGES_ABBR.iter() {
            // A keyboard never translates from its own language
            if *abbr == lang {
                continue;
            }
            let label = i18n::localized(&i18n::language_name_key(name), name);
            if ui.selectable_label(current == *abbr, label).clicked() {
                tracing::info!("translate language for {} set to {}", lang, abbr);
                self.prefs.set_translate_language(lang, abbr);
                picked = true;
            }
        }
        picked
    }

    fn title(&self) -> String {
        match &self.page {
            Page::Root => i18n::tr("app-title"),
            Page::Language(section) => section.title.clone(),
            Page::TranslatePicker { .. } => i18n::tr("picker-title"),
        }
    }

    fn back_target(&self) -> Option<Page> {
        match &self.page {
            Page::Root => None,
            Page::Language(_) => Some(Page::Root),
            Page::TranslatePicker { back, .. } => Some((**back).clone()),
        }
    }
}

impl eframe::App for SettingsScreen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = Palette::for_dark_mode(ctx.style().visuals.dark_mode);
        let focused = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::WindowFocused(true)))
        });
        if focused {
            self.prefs.reload();
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            let env = CellEnvironment::new(
                self.config.device_class.resolve(ui.available_width()),
                i18n::ui_locale(),
                palette,
            );

            let mut next = None;
            ui.horizontal(|ui| {
                if let Some(target) = self.back_target() {
                    if ui.button(i18n::tr("btn-back")).clicked() {
                        next = Some(target);
                    }
                }
                ui.heading(self.title());
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.page.clone() {
                Page::Root => {
                    if let Some(page) = self.show_groups(ui, &env, root_groups()) {
                        next = Some(page);
                    }
                }
                Page::Language(group) => {
                    if let Some(page) = self.show_groups(ui, &env, language_groups(&group)) {
                        next = Some(page);
                    }
                }
                Page::TranslatePicker { lang, back } => {
                    if self.show_picker(ui, &lang) {
                        next = Some(*back);
                    }
                }
            });

            if let Some(page) = next {
                self.prefs.reload();
                self.page = page;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::DeviceClass;

    fn env() -> CellEnvironment {
        CellEnvironment::new(DeviceClass::Phone, "en", Palette::light())
    }

    #[test]
    fn pool_reuses_cells() {
        let mut pool = CellPool::new(Preferences::in_memory());
        pool.dequeue(2);
        assert_eq!(pool.cells.len(), 3);
        pool.dequeue(0);
        assert_eq!(pool.cells.len(), 3);
    }

    #[test]
    fn opening_language_row_drills_in() {
        let mut cell = SettingsRowCell::new(Preferences::in_memory());
        let german = Section::new("German", SectionState::SpecificLang("de".into()));
        cell.configure(german.clone(), &env());
        assert_eq!(destination(&cell, &Page::Root), Some(Page::Language(german)));
    }

    #[test]
    fn opening_translate_row_opens_picker_for_group_language() {
        let mut cell = SettingsRowCell::new(Preferences::in_memory());
        let german = Section::new("German", SectionState::SpecificLang("de".into()));
        let from = Page::Language(german.clone());
        cell.configure(
            Section::new("Translate", SectionState::TranslateLang).with_parent(german),
            &env(),
        );
        assert_eq!(
            destination(&cell, &from),
            Some(Page::TranslatePicker {
                lang: "de".into(),
                back: Box::new(from.clone()),
            })
        );
    }

    #[test]
    fn unbound_or_plain_rows_go_nowhere() {
        let mut cell = SettingsRowCell::new(Preferences::in_memory());
        assert_eq!(destination(&cell, &Page::Root), None);
        cell.configure(Section::new("Link", SectionState::ExternalLink), &env());
        assert_eq!(destination(&cell, &Page::Root), None);
    }
}
