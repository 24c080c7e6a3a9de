use super::*;

use crossbeam_channel::bounded;
use page_core::{PageController, ThemeMarker};
use shared::domain::FormField;
use std::sync::Arc;

use crate::controller::events::UiErrorCategory;

fn pending_command() -> BackendCommand {
    let mut page = PageController::new(Arc::new(ThemeMarker::new()));
    page.set_field(FormField::Name, "Jane");
    page.set_field(FormField::Email, "jane@example.com");
    page.set_field(FormField::Message, "Hello");
    BackendCommand::SubmitContact(page.submit_form().expect("valid form"))
}

#[test]
fn queues_command_for_worker() {
    let (tx, rx) = bounded(1);
    assert!(dispatch_backend_command(&tx, pending_command()).is_ok());
    assert!(matches!(rx.try_recv(), Ok(BackendCommand::SubmitContact(_))));
}

#[test]
fn full_queue_hands_command_back() {
    let (tx, _rx) = bounded(1);
    dispatch_backend_command(&tx, pending_command()).expect("first fits");

    let undelivered =
        dispatch_backend_command(&tx, pending_command()).expect_err("queue should be full");
    assert!(matches!(undelivered.command, BackendCommand::SubmitContact(_)));
    assert_eq!(undelivered.error.category(), UiErrorCategory::Transport);
}

#[test]
fn disconnected_worker_is_a_transport_error() {
    let (tx, rx) = bounded(1);
    drop(rx);

    let undelivered =
        dispatch_backend_command(&tx, pending_command()).expect_err("worker is gone");
    assert_eq!(undelivered.error.category(), UiErrorCategory::Transport);
    assert!(undelivered.error.message().contains("disconnected"));
}
