//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext},
};

/// A command that never reached the worker, handed back so its caller can
/// unwind whatever state it set up for it.
#[derive(Debug)]
pub struct Undelivered {
    pub command: BackendCommand,
    pub error: UiError,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), Undelivered> {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact(_) => "submit_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(command)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(Undelivered {
                command,
                error: UiError::from_message(
                    UiErrorContext::General,
                    "UI command queue is full; please retry",
                ),
            })
        }
        Err(TrySendError::Disconnected(command)) => {
            tracing::error!(command = cmd_name, "contact worker is gone");
            Err(Undelivered {
                command,
                error: UiError::from_message(
                    UiErrorContext::General,
                    "Contact worker disconnected (possible startup/runtime failure)",
                ),
            })
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
