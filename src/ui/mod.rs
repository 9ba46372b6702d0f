//! Terminal form with a live estimate beside it.

pub mod app;
pub mod dashboard;

pub use app::App;
