use std::time::Duration;

use shared::domain::Category;

use super::*;
use crate::{submitter::DelayedSubmitter, theme::ThemeMarker};

fn page() -> (PageController, ThemeMarker) {
    let marker = ThemeMarker::new();
    (PageController::new(Arc::new(marker.clone())), marker)
}

fn fill_jane(page: &mut PageController) {
    page.dispatch(PageInput::SetField(FormField::Name, "Jane".into()));
    page.dispatch(PageInput::SetField(FormField::Email, "jane@x.com".into()));
    page.dispatch(PageInput::SetField(FormField::Message, "Hi".into()));
}

#[test]
fn initial_view_shows_everything_closed_and_light() {
    let (page, marker) = page();
    let view = page.view();
    assert_eq!(view.selected_category, &CategoryFilter::All);
    assert_eq!(view.visible_items.len(), 6);
    assert_eq!(view.lightbox_image, None);
    assert!(!view.is_dark);
    assert!(!marker.is_dark());
    assert!(view.fields.is_empty());
    assert!(!view.submitting);
    assert!(!view.submit_button.disabled);
}

#[test]
fn view_tracks_category_selection_synchronously() {
    let (mut page, _) = page();
    page.dispatch(PageInput::SelectCategory("Character".into()));
    let view = page.view();
    assert_eq!(view.selected_category, &CategoryFilter::Only(Category::Character));
    assert_eq!(view.visible_items.len(), 2);
    assert!(view
        .category_options
        .iter()
        .any(|option| option.label == "Character" && option.is_selected));

    page.dispatch(PageInput::SelectCategory("All".into()));
    assert_eq!(page.view().visible_items.len(), 6);
}

#[test]
fn card_activation_opens_its_image() {
    let (mut page, _) = page();
    page.dispatch(PageInput::ActivateCard(ItemId(4)));
    assert_eq!(
        page.view().lightbox_image,
        Some("/placeholder.svg?height=400&width=600")
    );

    page.dispatch(PageInput::CloseLightbox);
    page.dispatch(PageInput::ActivateCard(ItemId(99)));
    assert_eq!(page.view().lightbox_image, None);
}

#[test]
fn lightbox_click_routing() {
    let (mut page, _) = page();
    page.dispatch(PageInput::OpenLightbox("/image-a.png".into()));
    page.dispatch(PageInput::LightboxClick(OverlayTarget::Content));
    assert_eq!(page.view().lightbox_image, Some("/image-a.png"));

    page.dispatch(PageInput::LightboxClick(OverlayTarget::Background));
    assert_eq!(page.view().lightbox_image, None);
}

#[test]
fn lightbox_last_open_wins() {
    let (mut page, _) = page();
    page.open_lightbox("/x.png");
    page.open_lightbox("/y.png");
    assert_eq!(page.view().lightbox_image, Some("/y.png"));
}

#[test]
fn theme_toggle_drives_marker() {
    let (mut page, marker) = page();
    page.dispatch(PageInput::ToggleTheme);
    assert!(page.is_dark());
    assert!(marker.is_dark());
    page.dispatch(PageInput::ToggleTheme);
    assert!(!page.view().is_dark);
    assert!(!marker.is_dark());
}

#[test]
fn invalid_fields_are_rejected_before_the_form_starts() {
    let (mut page, _) = page();
    page.dispatch(PageInput::SetField(FormField::Name, "Jane".into()));
    page.dispatch(PageInput::SetField(FormField::Email, "jane".into()));
    page.dispatch(PageInput::SetField(FormField::Message, "Hi".into()));

    let effect = page.dispatch(PageInput::SubmitForm);
    assert!(matches!(
        effect,
        PageEffect::SubmitRejected(SubmitRejected::Invalid(FieldError::MalformedEmail(_)))
    ));
    assert_eq!(page.form_phase(), &FormPhase::Idle);
    assert_eq!(page.view().fields.email, "jane");
}

#[tokio::test(start_paused = true)]
async fn submit_scenario_with_simulated_delay() {
    let (mut page, marker) = page();
    fill_jane(&mut page);

    let pending = match page.dispatch(PageInput::SubmitForm) {
        PageEffect::StartSubmission(pending) => pending,
        other => panic!("expected submission to start, got {other:?}"),
    };
    assert!(page.view().submitting);
    assert!(page.view().submit_button.disabled);

    assert_eq!(
        page.dispatch(PageInput::SubmitForm),
        PageEffect::SubmitRejected(SubmitRejected::InFlight)
    );

    let started = tokio::time::Instant::now();
    let task = tokio::spawn(async move {
        let submitter = DelayedSubmitter::default();
        pending.run(&submitter).await
    });

    // Other controllers stay responsive while the submission is pending.
    page.dispatch(PageInput::ToggleTheme);
    page.dispatch(PageInput::SelectCategory("Props".into()));
    assert!(marker.is_dark());
    assert_eq!(page.view().visible_items.len(), 1);
    assert!(page.view().submitting);

    let result = task.await.expect("submission task");
    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert!(page.complete_submission(result));

    let view = page.view();
    assert!(!view.submitting);
    assert!(!view.submit_button.disabled);
    assert!(view.fields.is_empty());
    assert_eq!(view.submit_error, None);
}

#[test]
fn failed_submission_surfaces_error_and_keeps_fields() {
    let (mut page, _) = page();
    fill_jane(&mut page);
    let pending = page.submit_form().expect("starts");
    let error = SubmitError::Transport("connection reset".into());

    page.complete_submission(SubmissionResult {
        ticket: pending.ticket,
        outcome: Err(error.clone()),
    });

    let view = page.view();
    assert!(!view.submitting);
    assert_eq!(view.submit_error, Some(&error));
    assert_eq!(view.fields, &ContactFields::new("Jane", "jane@x.com", "Hi"));
    assert!(matches!(
        page.dispatch(PageInput::SubmitForm),
        PageEffect::StartSubmission(_)
    ));
}
