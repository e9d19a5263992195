//! One-call toolkit setup.

use crate::{LineageConfig, LineageResult};
use lineage_log::init_subscriber;
use lineage_stack::{BacktraceCapture, DisabledCapture, set_global_capture};
use tracing::{info, instrument};

/// Install the tracing subscriber and the process-wide stack capture.
///
/// Call once, early in `main`, before any coded error is built: the stack
/// capture is fixed the first time a snapshot is taken. The capture is
/// installed first; if that fails, no subscriber is installed.
///
/// # Errors
///
/// Returns an error if the log filter does not parse, another subscriber is
/// already installed, or the global stack capture is already fixed.
#[instrument(skip(config))]
pub fn init(config: &LineageConfig) -> LineageResult<()> {
    let stack = config.stack();
    if *stack.enabled() {
        set_global_capture(BacktraceCapture::new(stack.clone()))?;
    } else {
        set_global_capture(DisabledCapture)?;
    }

    init_subscriber(config.log())?;

    info!(
        stack_enabled = *stack.enabled(),
        max_depth = *stack.max_depth(),
        log_level = %config.log().level(),
        "Lineage initialized"
    );
    Ok(())
}
