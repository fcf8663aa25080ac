//! Headless host for the writer core: settings, logging and one document pass.
mod app;
mod logging;
mod persistence;

pub use app::run_app;
