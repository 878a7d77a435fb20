mod app;
mod config;
mod effects;
mod input;
mod seed;
mod session;
mod ui;

pub use app::run_app;
