// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod effects;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod ticker;
pub mod ui;
