use crate::core::config::render_config::RenderConfig;
use crate::core::config::view::View;
use serde::{Deserialize, Serialize};

/// One entry of a batch: an optional index used in the output name, a
/// config and a view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderJob {
    #[serde(default)]
    pub job: Option<u32>,
    #[serde(flatten)]
    pub config: RenderConfig,
    #[serde(flatten)]
    pub view: View,
}
