pub mod config;
pub mod content;
pub mod logging;
pub mod submit;
pub mod ui;
