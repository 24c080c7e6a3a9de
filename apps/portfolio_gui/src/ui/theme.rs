//! Light/dark visuals and the shared palette.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(236, 72, 153);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);
pub const BACKDROP: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 230);

pub fn visuals_for(dark: bool) -> egui::Visuals {
    let mut visuals = if dark {
        let mut v = egui::Visuals::dark();
        v.panel_fill = egui::Color32::from_rgb(17, 24, 39);
        v.window_fill = egui::Color32::from_rgb(31, 41, 55);
        v.extreme_bg_color = egui::Color32::from_rgb(11, 15, 25);
        v.faint_bg_color = egui::Color32::from_rgb(31, 41, 55);
        v
    } else {
        let mut v = egui::Visuals::light();
        v.panel_fill = egui::Color32::from_rgb(249, 250, 251);
        v.window_fill = egui::Color32::WHITE;
        v.faint_bg_color = egui::Color32::from_rgb(243, 244, 246);
        v
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals
}

/// Card surface for the current mode.
pub fn card_fill(dark: bool) -> egui::Color32 {
    if dark {
        egui::Color32::from_rgb(31, 41, 55)
    } else {
        egui::Color32::WHITE
    }
}

/// Stand-in for a referenced image: a tinted block captioned with the reference.
pub fn paint_image_placeholder(painter: &egui::Painter, rect: egui::Rect, image: &str, dark: bool) {
    let (fill, text) = if dark {
        (egui::Color32::from_rgb(55, 65, 81), egui::Color32::from_gray(200))
    } else {
        (egui::Color32::from_rgb(229, 231, 235), egui::Color32::from_gray(90))
    };
    painter.rect_filled(rect, 8.0, fill);
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4)),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        image,
        egui::FontId::proportional(12.0),
        text,
    );
}

#[cfg(test)]
#[path = "../tests/theme_tests.rs"]
mod tests;
