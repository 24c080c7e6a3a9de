//! Full-window image overlay.

use eframe::egui;
use page_core::OverlayTarget;

use crate::ui::theme;

const CLOSE_SIZE: f32 = 32.0;

/// Draws the overlay for `image` and reports where a click landed this frame.
/// Widgets registered later sit on top for hit testing, so the close control
/// wins over the content frame, which wins over the backdrop.
pub fn show_lightbox(ctx: &egui::Context, image: &str, dark: bool) -> Option<OverlayTarget> {
    let screen = ctx.content_rect();
    let mut target = None;

    egui::Area::new(egui::Id::new("lightbox_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            let id = ui.id();

            let backdrop = ui.interact(screen, id.with("backdrop"), egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, theme::BACKDROP);

            let content_size = egui::vec2(
                (screen.width() * 0.8).min(960.0),
                (screen.height() * 0.8).min(720.0),
            );
            let content_rect = egui::Rect::from_center_size(screen.center(), content_size);
            let content = ui.interact(content_rect, id.with("content"), egui::Sense::click());
            theme::paint_image_placeholder(ui.painter(), content_rect, image, dark);

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(content_rect.right() - CLOSE_SIZE, content_rect.top() - CLOSE_SIZE - 8.0),
                egui::vec2(CLOSE_SIZE, CLOSE_SIZE),
            );
            let close = ui.put(
                close_rect,
                egui::Button::new(egui::RichText::new("✕").size(18.0))
                    .fill(egui::Color32::from_white_alpha(24))
                    .corner_radius(egui::CornerRadius::same(16)),
            );

            target = if close.clicked() {
                Some(OverlayTarget::CloseControl)
            } else if content.clicked() {
                Some(OverlayTarget::Content)
            } else if backdrop.clicked() {
                Some(OverlayTarget::Background)
            } else {
                None
            };
        });

    if target.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        target = Some(OverlayTarget::CloseControl);
    }
    target
}
