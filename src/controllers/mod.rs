pub mod batch;
pub mod errors;
pub mod ports;
pub mod progress_log;
pub mod render;
pub mod zoom;
