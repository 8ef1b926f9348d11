pub mod arg;
pub mod archive;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod extract;
pub mod logging;
pub mod orchestrator;
pub mod ui;
