use eframe::egui::{self, Color32, FontFamily, RichText};
use lucide_icons::Icon;

use crate::cell::{Chevron, Label, SettingsRowCell, ToggleSwitch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    Idle,
    /// A row without a toggle was clicked
    Opened,
}

fn show_label(ui: &mut egui::Ui, label: &Label, color: Color32) {
    if !label.is_visible() {
        return;
    }
    if let Some(text) = &label.text {
        ui.label(
            RichText::new(text)
                .size(label.font_size)
                .color(label.color.unwrap_or(color)),
        );
    }
}

/// Pill switch painted with the row's tints. Returns the new value when clicked.
fn switch(ui: &mut egui::Ui, toggle: &ToggleSwitch) -> Option<bool> {
    let size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let flipped = response.clicked().then_some(!toggle.is_on);
    let on = flipped.unwrap_or(toggle.is_on);

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, on);
        let radius = 0.5 * rect.height();
        let track = if on {
            toggle.on_tint
        } else {
            ui.visuals().widgets.inactive.bg_fill
        };
        ui.painter().rect_filled(rect, radius, track);
        let x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = egui::pos2(x, rect.center().y);
        ui.painter()
            .circle_filled(center, 0.8 * radius, toggle.thumb_tint);
    }
    if flipped.is_some() {
        // thumb tint is recomputed by the cell after this frame
        ui.ctx().request_repaint();
    }
    flipped
}

fn chevron_glyph(chevron: Chevron) -> char {
    match chevron {
        Chevron::Left => Icon::ChevronLeft.unicode(),
        Chevron::Right => Icon::ChevronRight.unicode(),
    }
}

/// Draw a configured row. Unbound rows draw nothing.
pub fn show_row(ui: &mut egui::Ui, cell: &mut SettingsRowCell) -> RowEvent {
    let Some(w) = cell.widgets().cloned() else {
        return RowEvent::Idle;
    };
    let strong = ui.visuals().strong_text_color();
    let weak = ui.visuals().weak_text_color();
    let mut flipped = None;

    let frame = egui::Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    show_label(ui, &w.title, strong);
                    show_label(ui, &w.description, weak);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !w.toggle.hidden {
                        flipped = switch(ui, &w.toggle);
                    }
                    if !w.icon.hidden {
                        if let Some(chevron) = w.icon.icon {
                            ui.label(
                                RichText::new(chevron_glyph(chevron))
                                    .family(FontFamily::Name("lucide".into()))
                                    .size(w.icon.size)
                                    .color(w.icon.tint.unwrap_or(weak)),
                            );
                        }
                    }
                    show_label(ui, &w.subtitle, weak);
                });
            });
        });

    if let Some(on) = flipped {
        cell.on_toggle_changed(on);
    }

    // Toggle rows only react through the switch itself
    if w.toggle.hidden {
        let response = frame
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            return RowEvent::Opened;
        }
    }
    RowEvent::Idle
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::environment::{CellEnvironment, DeviceClass, Palette};
    use crate::prefs::{MemoryStore, PrefKey, PreferenceName, PreferenceStore, Preferences};
    use crate::section::{Section, SectionState, UserInteractiveState};

    /// One headless pass drawing `cell` as the only row; returns its frame rect.
    fn run_pass(
        ctx: &egui::Context,
        cell: &mut SettingsRowCell,
        events: Vec<egui::Event>,
    ) -> (egui::Rect, RowEvent) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(400.0, 200.0),
            )),
            events,
            ..Default::default()
        };
        let mut out = (egui::Rect::NOTHING, RowEvent::Idle);
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let scoped = ui.scope(|ui| show_row(ui, cell));
                out = (scoped.response.rect, scoped.inner);
            });
        });
        out
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Move, press and release over `pos`; returns the event of the release pass.
    fn click(ctx: &egui::Context, cell: &mut SettingsRowCell, pos: egui::Pos2) -> RowEvent {
        run_pass(ctx, cell, vec![egui::Event::PointerMoved(pos)]);
        run_pass(ctx, cell, vec![button(pos, true)]);
        run_pass(ctx, cell, vec![button(pos, false)]).1
    }

    fn env() -> CellEnvironment {
        CellEnvironment::new(DeviceClass::Phone, "en", Palette::light())
    }

    fn german() -> Section {
        Section::new("German", SectionState::SpecificLang("de".into()))
    }

    #[test]
    fn clicking_switch_writes_preference() {
        let store = Arc::new(MemoryStore::new());
        let mut cell = SettingsRowCell::new(Preferences::new(store.clone()));
        cell.configure(
            Section::toggle("Comma", UserInteractiveState::ToggleCommaAndPeriod)
                .with_parent(german()),
            &env(),
        );
        let ctx = egui::Context::default();
        let (rect, _) = run_pass(&ctx, &mut cell, vec![]);

        // The switch sits flush against the right inner margin
        let on_switch = egui::pos2(rect.right() - 16.0 - 10.0, rect.center().y);
        assert_eq!(click(&ctx, &mut cell, on_switch), RowEvent::Idle);

        let key = PrefKey::new("de", PreferenceName::CommaAndPeriod);
        assert_eq!(store.get_bool(&key), Some(true));
        let w = cell.widgets().unwrap();
        assert!(w.toggle.is_on);
        assert_eq!(w.toggle.thumb_tint, Palette::light().cta);
    }

    #[test]
    fn clicking_plain_row_opens_it() {
        let store = Arc::new(MemoryStore::new());
        let mut cell = SettingsRowCell::new(Preferences::new(store.clone()));
        cell.configure(german(), &env());
        let ctx = egui::Context::default();
        crate::gui::fonts::setup_fonts(&ctx);
        let (rect, _) = run_pass(&ctx, &mut cell, vec![]);

        // inside the left margin, clear of the title label
        let on_margin = egui::pos2(rect.left() + 4.0, rect.center().y);
        assert_eq!(click(&ctx, &mut cell, on_margin), RowEvent::Opened);
        assert!(store.is_empty());
    }
}
