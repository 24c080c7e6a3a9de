//! UI layer: app shell, page sections, lightbox overlay, and theme visuals.

pub mod app;
pub mod lightbox;
pub mod sections;
pub mod theme;
pub mod typing;

pub use app::PortfolioApp;
