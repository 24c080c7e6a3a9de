//! Composition root for the page controllers.

use std::sync::Arc;

use shared::{
    domain::{ContactFields, FormField, ItemId, PortfolioItem},
    error::FieldError,
};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    contact::{
        ContactFormController, FormPhase, PendingSubmission, SubmissionResult, SubmitButtonProps,
    },
    filter::{CategoryFilter, CategoryOption, FilterController},
    lightbox::{LightboxController, OverlayTarget},
    submitter::SubmitError,
    theme::{ThemeController, ThemeSink},
};

/// Input events accepted from the render boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    SelectCategory(String),
    ActivateCard(ItemId),
    OpenLightbox(String),
    CloseLightbox,
    LightboxClick(OverlayTarget),
    ToggleTheme,
    SetField(FormField, String),
    SubmitForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in progress")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FieldError),
}

/// Follow-up work the renderer owes after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    None,
    StartSubmission(PendingSubmission),
    SubmitRejected(SubmitRejected),
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub selected_category: &'a CategoryFilter,
    pub category_options: Vec<CategoryOption>,
    pub visible_items: Vec<&'static PortfolioItem>,
    pub lightbox_image: Option<&'a str>,
    pub is_dark: bool,
    pub fields: &'a ContactFields,
    pub submitting: bool,
    pub submit_button: SubmitButtonProps,
    pub submit_error: Option<&'a SubmitError>,
}

#[derive(Debug)]
pub struct PageController {
    catalog: Catalog,
    filter: FilterController,
    lightbox: LightboxController,
    theme: ThemeController,
    contact: ContactFormController,
}

impl PageController {
    pub fn new(theme_sink: Arc<dyn ThemeSink>) -> Self {
        Self::with_catalog(Catalog::builtin(), theme_sink)
    }

    pub fn with_catalog(catalog: Catalog, theme_sink: Arc<dyn ThemeSink>) -> Self {
        Self {
            catalog,
            filter: FilterController::new(),
            lightbox: LightboxController::new(),
            theme: ThemeController::new(theme_sink),
            contact: ContactFormController::new(),
        }
    }

    pub fn view(&self) -> PageView<'_> {
        PageView {
            selected_category: self.filter.selected(),
            category_options: self.filter.options(),
            visible_items: self.visible_items(),
            lightbox_image: self.lightbox.active_image(),
            is_dark: self.theme.is_dark(),
            fields: self.contact.fields(),
            submitting: self.contact.is_submitting(),
            submit_button: self.contact.submit_button(),
            submit_error: self.contact.last_error(),
        }
    }

    pub fn dispatch(&mut self, input: PageInput) -> PageEffect {
        match input {
            PageInput::SelectCategory(label) => self.select_category(&label),
            PageInput::ActivateCard(id) => self.activate_card(id),
            PageInput::OpenLightbox(image) => self.open_lightbox(image),
            PageInput::CloseLightbox => self.close_lightbox(),
            PageInput::LightboxClick(target) => {
                self.lightbox_click(target);
            }
            PageInput::ToggleTheme => self.toggle_theme(),
            PageInput::SetField(field, value) => self.set_field(field, value),
            PageInput::SubmitForm => {
                return match self.submit_form() {
                    Ok(pending) => PageEffect::StartSubmission(pending),
                    Err(rejected) => PageEffect::SubmitRejected(rejected),
                };
            }
        }
        PageEffect::None
    }

    pub fn select_category(&mut self, label: &str) {
        self.filter.select_label(label);
    }

    pub fn visible_items(&self) -> Vec<&'static PortfolioItem> {
        self.filter.visible_items(&self.catalog)
    }

    /// Opens the lightbox on a card's image. Unknown ids are ignored.
    pub fn activate_card(&mut self, id: ItemId) {
        match self.catalog.find(id) {
            Some(item) => self.lightbox.open(item.image),
            None => tracing::debug!(id = id.0, "ignoring activation of unknown card"),
        }
    }

    pub fn open_lightbox(&mut self, image: impl Into<String>) {
        self.lightbox.open(image);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn lightbox_click(&mut self, target: OverlayTarget) -> bool {
        self.lightbox.handle_click(target)
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.contact.set_field(field, value);
    }

    pub fn form_phase(&self) -> &FormPhase {
        self.contact.phase()
    }

    /// Submit trigger. Required-field validation happens here, before the form
    /// controller sees the request.
    pub fn submit_form(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.contact.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        self.contact.fields().validate()?;
        self.contact.begin_submit().ok_or(SubmitRejected::InFlight)
    }

    pub fn complete_submission(&mut self, result: SubmissionResult) -> bool {
        self.contact.complete(result)
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
