use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use page_core::{
    catalog::HERO_TAGLINE, PageController, PageEffect, PageInput, SubmissionResult, SubmitError,
    ThemeMarker,
};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::{
        lightbox,
        sections::{self, UiAction},
        theme, typing,
    },
};

const ANIMATION_REPAINT: Duration = Duration::from_millis(100);
const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct PortfolioApp {
    page: PageController,
    theme_marker: ThemeMarker,
    applied_dark: Option<bool>,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status_banner: Option<UiError>,
    started_at: Instant,
    scroll_target: Option<&'static str>,
}

impl PortfolioApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let theme_marker = ThemeMarker::new();
        let page = PageController::new(Arc::new(theme_marker.clone()));
        Self {
            page,
            theme_marker,
            applied_dark: None,
            cmd_tx,
            ui_rx,
            status_banner: None,
            started_at: Instant::now(),
            scroll_target: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => tracing::info!("{message}"),
                UiEvent::Error(err) => {
                    tracing::error!(category = ?err.category(), context = ?err.context(), "{}", err.message());
                    self.status_banner = Some(err);
                }
                UiEvent::SubmissionFinished(result) => {
                    self.page.complete_submission(result);
                }
            }
        }
    }

    /// The theme controller writes the marker; visuals follow it here.
    fn sync_visuals(&mut self, ctx: &egui::Context) {
        let dark = self.theme_marker.is_dark();
        if self.applied_dark == Some(dark) {
            return;
        }
        ctx.set_visuals(theme::visuals_for(dark));
        self.applied_dark = Some(dark);
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Page(input) => {
                match self.page.dispatch(input) {
                    PageEffect::None => {}
                    PageEffect::StartSubmission(pending) => {
                        self.status_banner = None;
                        if let Err(undelivered) = dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::SubmitContact(pending),
                        ) {
                            let BackendCommand::SubmitContact(pending) = undelivered.command;
                            self.page.complete_submission(SubmissionResult {
                                ticket: pending.ticket,
                                outcome: Err(SubmitError::Transport(
                                    undelivered.error.message().to_string(),
                                )),
                            });
                            self.status_banner = Some(undelivered.error);
                        }
                    }
                    PageEffect::SubmitRejected(rejection) => {
                        tracing::debug!(%rejection, "submit rejected");
                        if let Some(error) = UiError::from_rejection(&rejection) {
                            self.status_banner = Some(error);
                        }
                    }
                }
            }
            UiAction::ScrollTo(anchor) => self.scroll_target = Some(anchor),
            UiAction::DismissBanner => self.status_banner = None,
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.sync_visuals(ctx);

        let elapsed = self.started_at.elapsed();
        let scroll_target = self.scroll_target.take();
        let mut actions = Vec::new();
        let view = self.page.view();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(6.0);
            sections::show_nav(ui, &view, &mut actions);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            sections::show_status_banner(ui, self.status_banner.as_ref(), &mut actions);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(1200.0);
                    sections::show_hero(
                        ui,
                        typing::typed_prefix(HERO_TAGLINE, elapsed),
                        scroll_target,
                        &mut actions,
                    );
                    sections::show_about(ui, view.is_dark, scroll_target);
                    sections::show_portfolio(ui, &view, scroll_target, &mut actions);
                    sections::show_highlights(ui, view.is_dark, &mut actions);
                    sections::show_contact(ui, &view, scroll_target, &mut actions);
                    sections::show_footer(ui);
                });
        });

        if let Some(image) = view.lightbox_image {
            if let Some(target) = lightbox::show_lightbox(ctx, image, view.is_dark) {
                actions.push(UiAction::Page(PageInput::LightboxClick(target)));
            }
        }

        let animating = view.submitting || !typing::typing_finished(HERO_TAGLINE, elapsed);
        drop(view);
        for action in actions {
            self.apply(action);
        }

        ctx.request_repaint_after(if animating {
            ANIMATION_REPAINT
        } else {
            IDLE_REPAINT
        });
    }
}
