// Infrastructure module - Process-level services
pub mod logging;
