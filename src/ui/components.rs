//! Reusable UI components
//!
//! Standalone presentational widgets shared by the mockup views. All of
//! them are inert: they paint an interactive-looking control, show hover
//! feedback, and discard the click. The mockups wire no behavior to any
//! of these, and a faithful rendition keeps it that way.

use crate::theme;
use eframe::egui;

/// Which glyph the search bar shows, and on which side
#[derive(Clone, Copy)]
pub enum SearchIcon {
    LeadingMagnifier,
    TrailingSend,
}

impl SearchIcon {
    fn glyph(self) -> &'static str {
        match self {
            SearchIcon::LeadingMagnifier => egui_phosphor::regular::MAGNIFYING_GLASS,
            SearchIcon::TrailingSend => egui_phosphor::regular::PAPER_PLANE_TILT,
        }
    }
}

/// Inert search input: bordered frame, icon glyph, hint text. Shows a text
/// cursor on hover but accepts no input.
pub fn search_bar(ui: &mut egui::Ui, hint: &str, icon: SearchIcon) {
    let glyph = |ui: &mut egui::Ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(icon.glyph())
                    .size(16.0)
                    .color(theme::TEXT_FAINT),
            )
            .selectable(false),
        );
    };
    let hint_label = |ui: &mut egui::Ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(hint)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_FAINT),
            )
            .selectable(false),
        );
    };

    let response = theme::input_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                match icon {
                    SearchIcon::LeadingMagnifier => {
                        glyph(ui);
                        hint_label(ui);
                    }
                    SearchIcon::TrailingSend => {
                        hint_label(ui);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            glyph,
                        );
                    }
                }
            });
        })
        .response;

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Text);
    }
}

/// Solid filled button. Hover and press are painted; the click is discarded.
pub fn inert_button(ui: &mut egui::Ui, text: &str, fill: egui::Color32, size: egui::Vec2) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
        ui.painter().rect_filled(draw_rect, theme::RADIUS_MEDIUM, fill);
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(theme::FONT_BODY),
            theme::TEXT_ON_ACCENT,
        );
    }
}

/// Link-styled inert button ("Clear All"). Underlines on hover.
pub fn link_button(ui: &mut egui::Ui, text: &str) {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::LINK_BLUE),
        )
        .selectable(false)
        .sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        let rect = response.rect;
        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            egui::Stroke::new(1.0, theme::LINK_BLUE),
        );
    }
}

/// One past-query row in a history list. Hover tint only.
pub fn history_row(ui: &mut egui::Ui, text: &str) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::ROW_HEIGHT),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter()
            .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
    }
    ui.painter().text(
        rect.left_center() + egui::vec2(theme::SPACING_MD, 0.0),
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(theme::FONT_BODY),
        theme::TEXT_MUTED,
    );
}
