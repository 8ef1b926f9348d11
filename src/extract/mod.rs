pub mod command;
pub mod invoker;
pub mod runner;

pub use command::ExtractionCommand;
pub use invoker::extract_group;
pub use runner::{ProcessRunner, ToolRunner, ToolStatus};
