//! View rendering for the three mockups
//!
//! Each view is a pure pass over the fixture data in `content`: no input,
//! no branching on runtime state, same tree every frame. Sections mirror
//! the mockup card layout, divided by 1px rules like the original's
//! bordered blocks.

use super::App;
use crate::content;
use crate::theme;
use crate::ui::components::{self, SearchIcon};
use eframe::egui;

impl App {
    // ========================================================================
    // LANDING VIEW
    // ========================================================================

    pub(crate) fn render_landing(&self, ui: &mut egui::Ui) {
        // Hero banner
        egui::Frame::new()
            .fill(theme::HEADER_BLUE)
            .inner_margin(egui::Margin::same(theme::SECTION_PADDING))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                strong(ui, content::HERO_TITLE, theme::FONT_HERO, theme::TEXT_ON_ACCENT);
                ui.add_space(theme::SPACING_MD);
                text(ui, content::HERO_SUBTITLE, theme::FONT_BODY, theme::TEXT_ON_ACCENT);
            });

        // Feature grid, two columns
        theme::section_frame().show(ui, |ui| {
            ui.columns(2, |cols| {
                for (i, feature) in content::FEATURES.iter().enumerate() {
                    let col = &mut cols[i % 2];
                    strong(col, feature.title, theme::FONT_BODY, theme::HEADER_BLUE);
                    col.add_space(theme::SPACING_XS);
                    text(col, feature.description, theme::FONT_BODY, theme::TEXT_MUTED);
                    col.add_space(theme::SPACING_LG);
                }
            });
        });
        section_divider(ui);

        // Query mode placeholder
        theme::section_frame().show(ui, |ui| {
            text(ui, content::QUERY_MODE_HINT, theme::FONT_SMALL, theme::TEXT_DIM);
            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                strong(ui, content::GREETING, theme::FONT_TITLE, theme::TEXT_HEADING);
            });
        });
        section_divider(ui);

        // Search bar
        theme::section_frame().show(ui, |ui| {
            components::search_bar(ui, content::SEARCH_HINT, SearchIcon::LeadingMagnifier);
        });
        section_divider(ui);

        // Footer panels, three columns
        theme::section_frame().show(ui, |ui| {
            ui.columns(3, |cols| {
                for (i, panel) in content::FOOTER_PANELS.iter().enumerate() {
                    let col = &mut cols[i];
                    strong(col, panel.title, theme::FONT_BODY, theme::HEADER_BLUE);
                    col.add_space(theme::SPACING_MD);
                    if let Some(prose) = panel.prose {
                        text(col, prose, theme::FONT_SMALL, theme::TEXT_MUTED);
                    }
                    for bullet in panel.bullets {
                        text(col, bullet, theme::FONT_SMALL, theme::TEXT_MUTED);
                        col.add_space(theme::SPACING_SM);
                    }
                }
            });
        });

        // Disclaimer strip
        egui::Frame::new()
            .fill(theme::BG_STRIP)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    text(ui, content::DISCLAIMER, theme::FONT_CAPTION, theme::TEXT_DIM);
                });
            });
    }

    // ========================================================================
    // HISTORY PANEL VIEW
    // ========================================================================

    pub(crate) fn render_history(&self, ui: &mut egui::Ui) {
        card_header(ui);

        theme::section_frame().show(ui, |ui| {
            history_heading_row(ui);
            ui.add_space(theme::SPACING_MD);

            egui::ScrollArea::vertical()
                .id_salt("history_scroll")
                .max_height(theme::HISTORY_MAX_HEIGHT)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = theme::SPACING_SM;
                    for bucket in &content::HISTORY_PANEL_BUCKETS {
                        if let Some(label) = bucket.label {
                            ui.add_space(theme::SPACING_LG);
                            text(ui, label, theme::FONT_CAPTION, theme::TEXT_DIM);
                            ui.add_space(theme::SPACING_SM);
                        }
                        for entry in bucket.entries {
                            components::history_row(ui, entry);
                        }
                    }
                });
        });
        section_divider(ui);
    }

    // ========================================================================
    // ANSWER VIEW
    // ========================================================================

    pub(crate) fn render_answer(&self, ui: &mut egui::Ui) {
        card_header(ui);

        // Conversation history with labeled bucket headings
        theme::section_frame().show(ui, |ui| {
            history_heading_row(ui);
            ui.add_space(theme::SPACING_MD);
            ui.spacing_mut().item_spacing.y = theme::SPACING_SM;
            for bucket in &content::ANSWER_HISTORY_BUCKETS {
                if let Some(label) = bucket.label {
                    ui.add_space(theme::SPACING_LG);
                    strong(ui, label, theme::FONT_BODY, theme::TEXT_BODY);
                    ui.add_space(theme::SPACING_SM);
                }
                for entry in bucket.entries {
                    components::history_row(ui, entry);
                }
            }
            ui.add_space(theme::SPACING_LG);
            strong(ui, content::SETTINGS_LABEL, theme::FONT_BODY, theme::TEXT_BODY);
        });
        section_divider(ui);

        // Previously-asked question
        theme::section_frame().show(ui, |ui| {
            text(ui, content::ANSWER_QUESTION, theme::FONT_BODY, theme::TEXT_BODY);
        });
        section_divider(ui);

        // Canned answer outline
        theme::section_frame().show(ui, |ui| {
            strong(ui, content::ANSWER_LEAD, 18.0, theme::TEXT_HEADING);
            ui.add_space(theme::SPACING_XL);

            ui.spacing_mut().item_spacing.y = theme::SPACING_MD;
            for item in &content::ANSWER_OUTLINE {
                ui.horizontal(|ui| {
                    ui.add_space(item.depth as f32 * theme::OUTLINE_INDENT);
                    if item.strong {
                        strong(ui, item.text, theme::FONT_BODY, theme::TEXT_HEADING);
                    } else {
                        text(ui, item.text, theme::FONT_BODY, theme::TEXT_BODY);
                    }
                });
            }

            // Citation footer
            ui.add_space(theme::SPACING_XL);
            section_divider(ui);
            ui.add_space(theme::SPACING_XL);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(content::CITATION_HASH)
                        .monospace()
                        .size(theme::FONT_CAPTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            text(ui, content::CITATION_FORMAT, theme::FONT_CAPTION, theme::TEXT_DIM);
        });
        section_divider(ui);

        // Ask-anything bar with trust caption
        theme::section_frame().show(ui, |ui| {
            components::search_bar(ui, content::ASK_HINT, SearchIcon::TrailingSend);
            ui.add_space(theme::SPACING_MD);
            ui.vertical_centered(|ui| {
                text(ui, content::TRUST_CAPTION, theme::FONT_CAPTION, theme::TEXT_DIM);
            });
        });
    }
}

// ============================================================================
// SECTION HELPERS
// ============================================================================

/// "TORAH AI" brand header with the inert "+ New Chat" button
fn card_header(ui: &mut egui::Ui) {
    theme::section_frame().show(ui, |ui| {
        strong(ui, content::BRAND, theme::FONT_HERO, theme::HEADER_BLUE);
        ui.add_space(theme::SPACING_XL);
        components::inert_button(
            ui,
            content::NEW_CHAT_LABEL,
            theme::BTN_PRIMARY,
            egui::vec2(112.0, theme::BUTTON_HEIGHT),
        );
    });
    section_divider(ui);
}

/// "Conversation History" heading with the inert "Clear All" link
fn history_heading_row(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        strong(ui, content::HISTORY_HEADING, theme::FONT_BODY, theme::TEXT_BODY);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            components::link_button(ui, content::CLEAR_ALL_LABEL);
        });
    });
}

/// 1px rule between card sections (the mockups' border-b)
fn section_divider(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::STROKE_DEFAULT),
        egui::Sense::hover(),
    );
    ui.painter().line_segment(
        [rect.left_center(), rect.right_center()],
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
    );
}

fn text(ui: &mut egui::Ui, s: &str, size: f32, color: egui::Color32) {
    ui.add(
        egui::Label::new(egui::RichText::new(s).size(size).color(color))
            .wrap()
            .selectable(false),
    );
}

fn strong(ui: &mut egui::Ui, s: &str, size: f32, color: egui::Color32) {
    ui.add(
        egui::Label::new(egui::RichText::new(s).size(size).strong().color(color))
            .wrap()
            .selectable(false),
    );
}
