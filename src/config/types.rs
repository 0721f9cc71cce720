use serde::{Deserialize, Serialize};
use webp_convert_common::OutputFormat;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Default output format when `-outputType` is not given
    #[serde(default)]
    pub output_type: Option<OutputFormat>,

    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// What to do when a watch-triggered conversion fails
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Capacity of the channel between the notify thread and the loop
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            event_buffer: default_event_buffer(),
        }
    }
}

/// Largest accepted `watch.event_buffer`.
pub const MAX_EVENT_BUFFER: usize = 1 << 20;

fn default_event_buffer() -> usize {
    100
}

/// Reaction of the watch loop to a failed conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and keep watching.
    #[default]
    Continue,
    /// Stop the loop and exit with the conversion error.
    Exit,
}
