pub mod config;
pub mod controller;
pub mod display;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
