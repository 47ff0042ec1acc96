//! App module - the host shell that mounts one mockup view at a time

mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::ViewKind;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// SHELL STATE
// ============================================================================

pub struct App {
    /// The mounted view. The views themselves hold no state of their own.
    pub(crate) active_view: ViewKind,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            active_view: ViewKind::Landing,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Page background behind the card. The landing mockup sits on a
    /// slightly lighter gray than the other two.
    pub fn page_fill(&self) -> egui::Color32 {
        match self.active_view {
            ViewKind::Landing => theme::BG_PAGE_LIGHT,
            ViewKind::History | ViewKind::Answer => theme::BG_PAGE,
        }
    }
}
