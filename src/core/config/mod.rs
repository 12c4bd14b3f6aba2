pub mod errors;
pub mod render_config;
pub mod render_job;
pub mod view;
