//! Stack acquisition service.
//!
//! One capture is active per thread: a thread-scoped override installed with
//! [`set_default`] wins over the process-wide capture from
//! [`set_global_capture`], which in turn falls back to a
//! [`BacktraceCapture`] built from [`StackConfig::default`].

use crate::{Frame, StackConfig, StackError, StackErrorKind, StackSnapshot};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Frames belonging to the toolkit and the capture machinery. Always
/// dropped, regardless of configuration.
const INTERNAL_FRAMES: &[&str] = &["backtrace::", "lineage_stack::", "lineage_error::"];

/// Acquires a stack snapshot.
///
/// `skip` is the number of innermost caller frames to discard, counted after
/// the toolkit's own frames and unresolved frames. Returning `None` means no snapshot is
/// available; callers degrade by omitting the stack.
pub trait StackCapture: Send + Sync {
    /// Capture the current call stack.
    fn capture(&self, skip: usize) -> Option<StackSnapshot>;
}

/// Captures real call stacks with the `backtrace` crate.
#[derive(Debug, Clone)]
pub struct BacktraceCapture {
    config: StackConfig,
    cwd: Option<String>,
}

impl BacktraceCapture {
    /// Create a capture that filters and truncates according to `config`.
    pub fn new(config: StackConfig) -> Self {
        let cwd = if *config.trim_cwd() {
            std::env::current_dir()
                .ok()
                .map(|dir| format!("{}/", dir.display()))
        } else {
            None
        };
        Self { config, cwd }
    }

    /// The configuration this capture applies.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    fn trim_path(&self, path: &str) -> String {
        match &self.cwd {
            Some(prefix) => path.strip_prefix(prefix.as_str()).unwrap_or(path).to_string(),
            None => path.to_string(),
        }
    }
}

impl Default for BacktraceCapture {
    fn default() -> Self {
        Self::new(StackConfig::default())
    }
}

impl StackCapture for BacktraceCapture {
    fn capture(&self, skip: usize) -> Option<StackSnapshot> {
        if !*self.config.enabled() {
            return None;
        }

        let max_depth = *self.config.max_depth();
        let mut skipped = 0;
        let mut frames = Vec::new();

        backtrace::trace(|raw| {
            backtrace::resolve_frame(raw, |symbol| {
                let function = symbol
                    .name()
                    .map(|name| format!("{:#}", name))
                    .unwrap_or_default();
                let file = symbol
                    .filename()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default();

                if function.is_empty() && file.is_empty() {
                    return;
                }
                if INTERNAL_FRAMES.iter().any(|p| function.contains(p)) {
                    return;
                }
                if skipped < skip {
                    skipped += 1;
                    return;
                }
                if self.config.excludes(&function, &file) {
                    return;
                }

                let function = if *self.config.short_names() {
                    short_name(&function)
                } else {
                    function
                };
                frames.push(Frame::new(
                    self.trim_path(&file),
                    symbol.lineno().unwrap_or(0),
                    function,
                ));
            });
            frames.len() < max_depth
        });

        // One raw frame may resolve to several inlined symbols.
        frames.truncate(max_depth);
        trace!(skip, frames = frames.len(), "Captured stack snapshot");
        Some(StackSnapshot::new(frames))
    }
}

/// Shorten a routine path to its last two segments, e.g.
/// `app::users::Repo::load` becomes `Repo::load`.
///
/// Separators inside generic arguments or trait-impl brackets do not count,
/// so `<app::Repo as core::fmt::Debug>::fmt` is kept whole.
pub fn short_name(path: &str) -> String {
    let mut depth = 0_usize;
    let mut cuts = Vec::new();
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                cuts.push(i + 2);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    match cuts.len() {
        0 | 1 => path.to_string(),
        n => path[cuts[n - 2]..].to_string(),
    }
}

/// Never captures; errors carry no stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCapture;

impl StackCapture for DisabledCapture {
    fn capture(&self, _skip: usize) -> Option<StackSnapshot> {
        None
    }
}

/// Returns the same snapshot every time, ignoring `skip`.
#[derive(Debug, Clone, Default)]
pub struct FixedCapture {
    snapshot: StackSnapshot,
}

impl FixedCapture {
    /// Create a capture that always yields these frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            snapshot: StackSnapshot::new(frames),
        }
    }
}

impl StackCapture for FixedCapture {
    fn capture(&self, _skip: usize) -> Option<StackSnapshot> {
        Some(self.snapshot.clone())
    }
}

static GLOBAL: OnceLock<Arc<dyn StackCapture>> = OnceLock::new();

thread_local! {
    static CURRENT: RefCell<Option<Arc<dyn StackCapture>>> = const { RefCell::new(None) };
}

/// Install the process-wide capture.
///
/// Must run before the first snapshot is taken anywhere in the process;
/// the fallback capture is fixed on first use.
///
/// # Errors
///
/// Returns [`StackErrorKind::GlobalAlreadySet`] if a global capture is
/// already in place.
pub fn set_global_capture(capture: impl StackCapture + 'static) -> Result<(), StackError> {
    let capture: Arc<dyn StackCapture> = Arc::new(capture);
    GLOBAL
        .set(capture)
        .map_err(|_| StackError::new(StackErrorKind::GlobalAlreadySet))?;
    debug!("Installed global stack capture");
    Ok(())
}

/// Install `capture` for the current thread until the guard is dropped.
///
/// Guards nest: dropping one restores whatever was active before it.
pub fn set_default(capture: impl StackCapture + 'static) -> CaptureGuard {
    let capture: Arc<dyn StackCapture> = Arc::new(capture);
    let previous = CURRENT.with(|current| current.replace(Some(capture)));
    CaptureGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Capture the current call stack with the active capture.
pub fn capture(skip: usize) -> Option<StackSnapshot> {
    let scoped = CURRENT.with(|current| current.borrow().clone());
    match scoped {
        Some(capture) => capture.capture(skip),
        None => GLOBAL
            .get_or_init(|| Arc::new(BacktraceCapture::default()) as Arc<dyn StackCapture>)
            .capture(skip),
    }
}

/// Restores the previously active thread capture on drop.
#[must_use = "the capture is uninstalled when the guard is dropped"]
pub struct CaptureGuard {
    previous: Option<Arc<dyn StackCapture>>,
    // Thread-local state; the guard must be dropped on the thread that made it.
    _not_send: PhantomData<*const ()>,
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("restores_previous", &self.previous.is_some())
            .finish()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        let _ = CURRENT.try_with(|current| *current.borrow_mut() = previous);
    }
}
