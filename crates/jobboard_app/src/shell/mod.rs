mod app;
mod effects;
mod logging;
mod render;

pub use app::{run, ShellConfig};
pub use logging::LogDestination;
