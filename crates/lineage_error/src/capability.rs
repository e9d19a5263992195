//! Capability queries over type-erased errors.
//!
//! A cause is stored as `Box<dyn Error>`, which cannot be asked whether its
//! concrete type implements [`Tagged`] or [`Project`]. Types opt in through
//! a process-wide registry of downcast probes instead. Every
//! [`CodedError`] type registers itself the first time one is constructed;
//! other error types can register with [`register_tagged`] and
//! [`register_projection`].

use crate::{Code, CodedError, Projection};
use parking_lot::RwLock;
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::error::Error;
use std::sync::OnceLock;
use tracing::trace;

/// An error that exposes categorical tags.
pub trait Tagged {
    /// Current tags, in no particular order.
    fn tags(&self) -> Vec<String>;
}

/// An error that renders a structured [`Projection`] of itself.
pub trait Project {
    /// Structured view of this error and its causes.
    fn projection(&self) -> Projection;
}

type TagsProbe = fn(&(dyn Error + 'static)) -> Option<Vec<String>>;
type ProjectionProbe = fn(&(dyn Error + 'static)) -> Option<Projection>;

#[derive(Debug, Clone, Copy, Default)]
struct Probes {
    tags: Option<TagsProbe>,
    projection: Option<ProjectionProbe>,
}

fn registry() -> &'static RwLock<HashMap<TypeId, Probes>> {
    static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Probes>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Copy of the registered probes, so no lock is held while probes run.
fn probes() -> Vec<Probes> {
    registry().read().values().copied().collect()
}

fn probe_tags<E>(err: &(dyn Error + 'static)) -> Option<Vec<String>>
where
    E: Error + Tagged + 'static,
{
    err.downcast_ref::<E>().map(Tagged::tags)
}

fn probe_projection<E>(err: &(dyn Error + 'static)) -> Option<Projection>
where
    E: Error + Project + 'static,
{
    err.downcast_ref::<E>().map(Project::projection)
}

/// Make tags of `E` visible when an `E` is attached as a cause.
pub fn register_tagged<E>()
where
    E: Error + Tagged + 'static,
{
    registry()
        .write()
        .entry(TypeId::of::<E>())
        .or_default()
        .tags = Some(probe_tags::<E>);
    trace!(error_type = type_name::<E>(), "Registered tag capability");
}

/// Make `E` render its own projection when it appears as a wrapped cause.
pub fn register_projection<E>()
where
    E: Error + Project + 'static,
{
    registry()
        .write()
        .entry(TypeId::of::<E>())
        .or_default()
        .projection = Some(probe_projection::<E>);
    trace!(error_type = type_name::<E>(), "Registered projection capability");
}

/// Register both capabilities of `CodedError<C>`. Cheap after the first call.
pub(crate) fn register_node<C: Code>() {
    let id = TypeId::of::<CodedError<C>>();
    if registry().read().contains_key(&id) {
        return;
    }
    registry().write().insert(
        id,
        Probes {
            tags: Some(probe_tags::<CodedError<C>>),
            projection: Some(probe_projection::<CodedError<C>>),
        },
    );
    trace!(code_type = type_name::<C>(), "Registered coded error type");
}

/// Tags of `err`, if its type exposes them.
pub fn tags_of(err: &(dyn Error + 'static)) -> Option<Vec<String>> {
    probes()
        .into_iter()
        .find_map(|probes| probes.tags.and_then(|probe| probe(err)))
}

/// Projection of `err`, if its type renders one.
pub fn projection_of(err: &(dyn Error + 'static)) -> Option<Projection> {
    probes()
        .into_iter()
        .find_map(|probes| probes.projection.and_then(|probe| probe(err)))
}
