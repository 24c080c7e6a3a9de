//! Page sections. Each one reads the [`PageView`] and records what the user
//! did as [`UiAction`]s; nothing here mutates controller state directly.

use eframe::egui;
use page_core::{
    catalog::{
        ABOUT_PARAGRAPHS, BRAND_NAME, CONTACT_DETAILS, CONTACT_PITCH, COPYRIGHT, FOOTER_TAGLINE,
        HERO_INTRO, HERO_TITLE, HIGHLIGHTS, PROFILE_STATS, SECTION_ANCHORS,
    },
    PageInput, PageView,
};
use shared::domain::{FormField, PortfolioItem};

use crate::{
    controller::events::UiError,
    ui::theme::{self, ACCENT, ACCENT_SOFT},
};

const CARD_WIDTH: f32 = 320.0;
const CARD_IMAGE_HEIGHT: f32 = 200.0;

pub enum UiAction {
    Page(PageInput),
    ScrollTo(&'static str),
    DismissBanner,
}

pub fn show_nav(ui: &mut egui::Ui, view: &PageView<'_>, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(BRAND_NAME).strong().size(20.0).color(ACCENT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle = if view.is_dark { "☀ Light" } else { "🌙 Dark" };
            if ui.button(toggle).clicked() {
                actions.push(UiAction::Page(PageInput::ToggleTheme));
            }
            ui.separator();
            for anchor in SECTION_ANCHORS.iter().rev() {
                if ui.link(*anchor).clicked() {
                    actions.push(UiAction::ScrollTo(*anchor));
                }
            }
        });
    });
}

pub fn show_status_banner(
    ui: &mut egui::Ui,
    banner: Option<&UiError>,
    actions: &mut Vec<UiAction>,
) {
    let Some(banner) = banner else {
        return;
    };
    egui::Frame::NONE
        .fill(theme::ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(banner.banner_text()).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        actions.push(UiAction::DismissBanner);
                    }
                });
            });
        });
}

fn section_heading(
    ui: &mut egui::Ui,
    anchor: &'static str,
    title: &str,
    scroll_target: Option<&'static str>,
) {
    if scroll_target == Some(anchor) {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
    }
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(36.0).strong().color(ACCENT));
    });
    ui.add_space(24.0);
}

pub fn show_hero(
    ui: &mut egui::Ui,
    typed_tagline: &str,
    scroll_target: Option<&'static str>,
    actions: &mut Vec<UiAction>,
) {
    if scroll_target == Some(SECTION_ANCHORS[0]) {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
    }
    ui.add_space(96.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(HERO_TITLE).size(64.0).strong().color(ACCENT));
        ui.add_space(8.0);
        // Keep the line height stable while the tagline is still empty.
        ui.label(egui::RichText::new(format!("{typed_tagline}▍")).size(30.0));
        ui.add_space(16.0);
        ui.add_sized(
            [ui.available_width().min(640.0), 0.0],
            egui::Label::new(egui::RichText::new(HERO_INTRO).size(18.0).weak()).wrap(),
        );
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            let width = 300.0;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
            if ui
                .add(egui::Button::new("View My Work").fill(ACCENT))
                .clicked()
            {
                actions.push(UiAction::ScrollTo(SECTION_ANCHORS[2]));
            }
            if ui.button("Get In Touch").clicked() {
                actions.push(UiAction::ScrollTo(SECTION_ANCHORS[3]));
            }
        });
    });
    ui.add_space(96.0);
}

pub fn show_about(ui: &mut egui::Ui, dark: bool, scroll_target: Option<&'static str>) {
    section_heading(ui, SECTION_ANCHORS[1], "About Me", scroll_target);
    ui.columns(2, |columns| {
        for paragraph in ABOUT_PARAGRAPHS {
            columns[0].label(egui::RichText::new(paragraph).size(16.0));
            columns[0].add_space(12.0);
        }
        egui::Grid::new("profile_stats")
            .num_columns(2)
            .spacing([16.0, 16.0])
            .show(&mut columns[1], |ui| {
                for (index, stat) in PROFILE_STATS.iter().enumerate() {
                    card_frame(dark).show(ui, |ui| {
                        ui.set_min_width(140.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(stat.value)
                                    .size(28.0)
                                    .strong()
                                    .color(ACCENT),
                            );
                            ui.label(egui::RichText::new(stat.label).weak());
                        });
                    });
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });
}

pub fn show_portfolio(
    ui: &mut egui::Ui,
    view: &PageView<'_>,
    scroll_target: Option<&'static str>,
    actions: &mut Vec<UiAction>,
) {
    section_heading(ui, SECTION_ANCHORS[2], "My Portfolio", scroll_target);

    ui.horizontal_wrapped(|ui| {
        for option in &view.category_options {
            if ui.selectable_label(option.is_selected, option.label).clicked() {
                actions.push(UiAction::Page(PageInput::SelectCategory(
                    option.label.to_string(),
                )));
            }
        }
    });
    ui.add_space(16.0);

    if view.visible_items.is_empty() {
        ui.label(
            egui::RichText::new(format!(
                "Nothing to show for \"{}\".",
                view.selected_category.label()
            ))
            .italics()
            .weak(),
        );
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
        for item in &view.visible_items {
            portfolio_card(ui, item, view.is_dark, actions);
        }
    });
}

fn portfolio_card(
    ui: &mut egui::Ui,
    item: &PortfolioItem,
    dark: bool,
    actions: &mut Vec<UiAction>,
) {
    card_frame(dark).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT),
                egui::Sense::click(),
            );
            theme::paint_image_placeholder(ui.painter(), rect, item.image, dark);
            if response
                .on_hover_cursor(egui::CursorIcon::ZoomIn)
                .on_hover_text("View larger")
                .clicked()
            {
                actions.push(UiAction::Page(PageInput::ActivateCard(item.id)));
            }

            ui.add_space(8.0);
            ui.label(egui::RichText::new(item.title).size(18.0).strong());
            ui.label(egui::RichText::new(item.description).weak());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                badge(ui, item.category.label(), ACCENT);
                badge(ui, item.software, ACCENT_SOFT);
            });
        });
    });
}

pub fn show_highlights(ui: &mut egui::Ui, dark: bool, actions: &mut Vec<UiAction>) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Featured Projects")
                .size(36.0)
                .strong()
                .color(ACCENT),
        );
    });
    ui.add_space(24.0);

    for highlight in &HIGHLIGHTS {
        card_frame(dark).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(360.0, 240.0), egui::Sense::click());
                theme::paint_image_placeholder(ui.painter(), rect, highlight.image, dark);
                if response.on_hover_cursor(egui::CursorIcon::ZoomIn).clicked() {
                    actions.push(UiAction::Page(PageInput::OpenLightbox(
                        highlight.image.to_string(),
                    )));
                }
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(highlight.title).size(24.0).strong());
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(highlight.description).size(16.0));
                    ui.add_space(12.0);
                    ui.horizontal_wrapped(|ui| {
                        for stat in highlight.stats {
                            badge(ui, stat, ACCENT);
                        }
                    });
                });
            });
        });
        ui.add_space(24.0);
    }
}

pub fn show_contact(
    ui: &mut egui::Ui,
    view: &PageView<'_>,
    scroll_target: Option<&'static str>,
    actions: &mut Vec<UiAction>,
) {
    section_heading(ui, SECTION_ANCHORS[3], "Let's Work Together", scroll_target);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(CONTACT_PITCH).size(18.0).weak());
    });
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        for &(label, value) in CONTACT_DETAILS.iter() {
            columns[0].label(egui::RichText::new(label).strong());
            columns[0].label(value);
            columns[0].add_space(12.0);
        }

        card_frame(view.is_dark).show(&mut columns[1], |ui| {
            ui.add_enabled_ui(!view.submitting, |ui| {
                for field in [FormField::Name, FormField::Email, FormField::Message] {
                    contact_field(ui, view, field, actions);
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let props = &view.submit_button;
                let button = egui::Button::new(
                    egui::RichText::new(props.label).color(egui::Color32::WHITE),
                )
                .fill(ACCENT)
                .min_size(egui::vec2(160.0, 32.0));
                if ui.add_enabled(!props.disabled, button).clicked() {
                    actions.push(UiAction::Page(PageInput::SubmitForm));
                }
                if view.submitting {
                    ui.spinner();
                }
            });

            if let Some(error) = view.submit_error {
                ui.add_space(6.0);
                ui.colored_label(
                    theme::ERROR_STROKE,
                    UiError::from_submit_error(error).banner_text(),
                );
            }
        });
    });
}

fn contact_field(
    ui: &mut egui::Ui,
    view: &PageView<'_>,
    field: FormField,
    actions: &mut Vec<UiAction>,
) {
    ui.label(field.title());
    let mut value = view.fields.get(field).to_string();
    let hint = match field {
        FormField::Name => "Your name",
        FormField::Email => "your@email.com",
        FormField::Message => "Tell me about your project...",
    };
    let edit = match field {
        FormField::Message => egui::TextEdit::multiline(&mut value).desired_rows(5),
        FormField::Name | FormField::Email => egui::TextEdit::singleline(&mut value),
    };
    let response = ui.add(
        edit.id_salt(("contact_field", field.label()))
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(UiAction::Page(PageInput::SetField(field, value)));
    }
    ui.add_space(8.0);
}

pub fn show_footer(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new(BRAND_NAME).size(22.0).strong().color(ACCENT));
        ui.label(egui::RichText::new(FOOTER_TAGLINE).weak());
        ui.label(egui::RichText::new(COPYRIGHT).small().weak());
        ui.add_space(16.0);
    });
}

fn card_frame(dark: bool) -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::card_fill(dark))
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.25)))
        .inner_margin(egui::Margin::symmetric(14, 12))
}

fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.18))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}
