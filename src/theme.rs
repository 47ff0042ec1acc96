//! Centralized theme constants for the Torah AI mockups
//! All colors, sizes, and styling should reference these constants
//!
//! The palette is transliterated from the mockups' utility classes
//! (gray page, white card, blue-800 headings, blue-600 primary button).

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_PAGE: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6); // gray-100
pub const BG_PAGE_LIGHT: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb); // gray-50 (landing)
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_STRIP: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6); // gray-100 disclaimer strip
pub const BG_HOVER: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb); // gray-50 row hover

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const HEADER_BLUE: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf); // blue-800
pub const LINK_BLUE: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const TEXT_BODY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500
pub const TEXT_FAINT: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400 (input hints, icons)

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200 section dividers
pub const BORDER_INPUT: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300 input outline

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_PRIMARY: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const BTN_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x1d, 0x4e, 0xd8); // blue-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 24.0; // text-2xl
pub const FONT_TITLE: f32 = 20.0; // text-xl
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0; // text-sm
pub const FONT_CAPTION: f32 = 11.0; // text-xs

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const CARD_MAX_WIDTH: f32 = 768.0; // max-w-3xl
pub const CARD_TOP_MARGIN: f32 = 32.0; // my-8
pub const SECTION_PADDING: i8 = 24; // p-6
pub const HISTORY_MAX_HEIGHT: f32 = 240.0; // max-h-60
pub const OUTLINE_INDENT: f32 = 16.0; // one ml-4 step
pub const ROW_HEIGHT: f32 = 34.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_PAGE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_CARD,
        faint_bg_color: BG_PAGE_LIGHT,
        hyperlink_color: LINK_BLUE,
        override_text_color: Some(TEXT_BODY),
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_PAGE_LIGHT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_BODY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_PAGE_LIGHT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_MUTED),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_INPUT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_HEADING),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BORDER_SUBTLE,
                weak_bg_fill: BORDER_SUBTLE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_HEADING),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_PAGE_LIGHT,
                weak_bg_fill: BG_CARD,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_HEADING),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 20.0;
        style.spacing.scroll.floating_allocated_width = 0.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================

/// The white rounded card every view is laid out in
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(18),
        })
        .inner_margin(egui::Margin::same(0))
}

// =============================================================================
// HELPER - Section frame
// =============================================================================

/// Inner padding of one card section (the mockups' p-6 blocks)
pub fn section_frame() -> egui::Frame {
    egui::Frame::new().inner_margin(egui::Margin::same(SECTION_PADDING))
}

// =============================================================================
// HELPER - Input frame
// =============================================================================

/// Bordered rounded frame around the inert search inputs
pub fn input_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_INPUT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

// =============================================================================
// HELPER - Button visuals
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press
/// effects. Darkens on hover, slightly darkens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.06), rect.shrink(1.0))
    } else if response.hovered() {
        (darken(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

/// Pill tab for the shell's view switcher. Returns true if clicked.
pub fn tab_button(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(FONT_LABEL),
        TEXT_MUTED,
    );
    let size = egui::vec2(galley.size().x + 24.0, 26.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if ui.is_rect_visible(rect) {
        let (fill, text_color) = if selected {
            (HEADER_BLUE, TEXT_ON_ACCENT)
        } else if response.hovered() {
            (BORDER_SUBTLE, TEXT_HEADING)
        } else {
            (Color32::TRANSPARENT, TEXT_MUTED)
        };
        ui.painter().rect_filled(rect, RADIUS_MEDIUM, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(FONT_LABEL),
            text_color,
        );
    }
    response.clicked()
}

fn darken(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 * (1.0 - amount)) as u8;
    let g = (c.g() as f32 * (1.0 - amount)) as u8;
    let b = (c.b() as f32 * (1.0 - amount)) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_moves_toward_black() {
        let base = BTN_PRIMARY;
        let d = darken(base, 0.12);
        assert!(d.r() < base.r() || base.r() == 0);
        assert!(d.g() < base.g() || base.g() == 0);
        assert!(d.b() < base.b() || base.b() == 0);
        assert_eq!(darken(Color32::BLACK, 0.5), Color32::BLACK);
    }
}
