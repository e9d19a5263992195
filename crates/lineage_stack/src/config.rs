//! Stack capture configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for [`BacktraceCapture`](crate::BacktraceCapture).
///
/// # Example
///
/// ```toml
/// [stack]
/// enabled = true
/// max_depth = 16
/// short_names = true
/// exclude = ["std::rt::", "tokio::runtime"]
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
pub struct StackConfig {
    /// Whether snapshots are captured at all
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Maximum number of frames kept per snapshot
    #[serde(default = "default_max_depth")]
    max_depth: usize,

    /// Substrings matched against a frame's function name or file path.
    /// Matching frames are left out of the snapshot.
    #[serde(default = "default_exclude")]
    exclude: Vec<String>,

    /// Strip the current working directory from frame file paths
    #[serde(default = "default_trim_cwd")]
    trim_cwd: bool,

    /// Keep only the last two path segments of routine names
    #[serde(default)]
    short_names: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_max_depth() -> usize {
    32
}

fn default_trim_cwd() -> bool {
    true
}

/// Runtime and libtest harness frames.
fn default_exclude() -> Vec<String> {
    [
        "std::rt::",
        "std::panicking",
        "std::panic::",
        "std::sys",
        "std::thread::",
        "core::ops::function",
        "__rust_begin_short_backtrace",
        "test::run_test",
        "test::__rust",
        "/rustc/",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_depth: default_max_depth(),
            exclude: default_exclude(),
            trim_cwd: default_trim_cwd(),
            short_names: false,
        }
    }
}

impl StackConfig {
    /// True when a frame with this function name and file should be dropped.
    pub fn excludes(&self, function: &str, file: &str) -> bool {
        self.exclude
            .iter()
            .any(|pattern| function.contains(pattern.as_str()) || file.contains(pattern.as_str()))
    }
}
