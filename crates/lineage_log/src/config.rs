//! Log output configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for [`init_subscriber`](crate::init_subscriber).
///
/// `RUST_LOG`, when set, takes precedence over `level`.
///
/// # Example
///
/// ```toml
/// [log]
/// level = "info,my_app=debug"
/// json = true
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `"warn"` or `"info,my_app=debug"`
    #[serde(default = "default_level")]
    #[setters(into)]
    #[builder(setter(into))]
    level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}
