//! Contact worker: a tokio runtime on its own thread that runs submissions and
//! reports results back to the UI.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use page_core::ContactSubmitter;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext, UiEvent},
};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    submitter: Arc<dyn ContactSubmitter>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build contact worker runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Contact worker ready".to_string()));
        runtime.block_on(async move {
            // Blocks this thread only; submissions run on the runtime's workers.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitContact(pending) => {
                        let submitter = Arc::clone(&submitter);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let ticket = pending.ticket;
                            tracing::debug!(ticket = ticket.value(), "running contact submission");
                            let result = pending.run(submitter.as_ref()).await;
                            if ui_tx.send(UiEvent::SubmissionFinished(result)).is_err() {
                                tracing::warn!(
                                    ticket = ticket.value(),
                                    "ui closed before submission finished"
                                );
                            }
                        });
                    }
                }
            }
            tracing::info!("ui command channel closed; contact worker stopping");
        });
    })
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
