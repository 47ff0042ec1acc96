#![windows_subsystem = "windows"]
//! Torah AI mockup viewer - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod content;
mod settings;
mod theme;
mod types;
mod ui;

use app::App;
use constants::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use types::ViewKind;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_STEM);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,torah_ai_mockup=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME);

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Torah AI mockup viewer starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(860.0, 940.0)))
        .with_min_inner_size([640.0, 480.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // View switcher - shell chrome, not part of any mockup
        egui::TopBottomPanel::top("view_tabs")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_CARD)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    for view in ViewKind::ALL {
                        let selected = self.active_view == view;
                        if theme::tab_button(ui, view.label(), selected) && !selected {
                            info!(view = view.label(), "Switching view");
                            self.active_view = view;
                        }
                    }
                });
            });

        // The mounted view, centered as a fixed-width card
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.page_fill()))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().id_salt("page").show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add_space(theme::CARD_TOP_MARGIN);

                    let card_width =
                        theme::CARD_MAX_WIDTH.min((ui.available_width() - 32.0).max(320.0));
                    let side_margin = ((ui.available_width() - card_width) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(side_margin);
                        ui.vertical(|ui| {
                            ui.set_width(card_width);
                            theme::card_frame().show(ui, |ui| {
                                ui.spacing_mut().item_spacing.y = 0.0;
                                match self.active_view {
                                    ViewKind::Landing => self.render_landing(ui),
                                    ViewKind::History => self.render_history(ui),
                                    ViewKind::Answer => self.render_answer(ui),
                                }
                            });
                        });
                    });

                    ui.add_space(theme::CARD_TOP_MARGIN);
                });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
