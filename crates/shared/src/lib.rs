//! Types shared by the page controllers, the desktop renderer and the CLI driver.

pub mod domain;
pub mod error;
pub mod protocol;
