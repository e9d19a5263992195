//! Global subscriber installation.

use crate::{LogConfig, LogError, LogErrorKind};
use parking_lot::Mutex;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

static INSTALLED: Mutex<bool> = parking_lot::const_mutex(false);

/// Install a global `fmt` subscriber built from `config`.
///
/// The filter comes from `RUST_LOG` when it is set and parses, otherwise
/// from `config.level()`. Calling this again after a successful install
/// does nothing.
///
/// # Errors
///
/// Returns [`LogErrorKind::InvalidFilter`] if the configured level does not
/// parse, or [`LogErrorKind::Install`] if some other global subscriber is
/// already in place.
pub fn init_subscriber(config: &LogConfig) -> Result<(), LogError> {
    let mut installed = INSTALLED.lock();
    if *installed {
        debug!("Subscriber already installed");
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level()))
        .map_err(|e| {
            LogError::new(LogErrorKind::InvalidFilter(
                config.level().clone(),
                e.to_string(),
            ))
        })?;

    let fmt_layer = if *config.json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LogError::new(LogErrorKind::Install(e.to_string())))?;

    *installed = true;
    debug!(level = %config.level(), json = *config.json(), "Installed tracing subscriber");
    Ok(())
}
