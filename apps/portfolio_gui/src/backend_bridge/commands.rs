//! Backend commands queued from UI to backend worker.

use page_core::PendingSubmission;

#[derive(Debug)]
pub enum BackendCommand {
    SubmitContact(PendingSubmission),
}
