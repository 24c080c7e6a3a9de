//! View-state controllers for the portfolio page.
//!
//! Each controller owns one slice of UI state. [`PageController`] composes them
//! and is the only type the render boundary talks to: it reads a [`PageView`]
//! and feeds back [`PageInput`] events. Submissions leave the controller as a
//! [`PendingSubmission`], run on whatever executor the renderer owns, and come
//! back through [`PageController::complete_submission`], so a slow submit never
//! holds the page hostage.

pub mod catalog;
pub mod contact;
pub mod filter;
pub mod lightbox;
pub mod page;
pub mod submitter;
pub mod theme;

pub use catalog::{Catalog, CatalogError};
pub use contact::{
    ContactFormController, FormPhase, PendingSubmission, SubmissionResult, SubmissionTicket,
    SubmitButtonProps,
};
pub use filter::{CategoryFilter, CategoryOption, FilterController};
pub use lightbox::{LightboxController, OverlayTarget};
pub use page::{PageController, PageEffect, PageInput, PageView, SubmitRejected};
pub use submitter::{
    submitter_for, ContactSubmitter, DelayedSubmitter, HttpContactSubmitter, SubmitError,
};
pub use theme::{ThemeController, ThemeMarker, ThemeSink};
