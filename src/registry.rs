//! Override registry: operation identifier → installed override + trampoline.
//!
//! An entry is created once, during the installation phase, and is never
//! removed: idiom overrides are process-wide and permanent once installed,
//! so there is deliberately no `unregister`. Registering the same operation
//! twice fails with `AlreadyRegistered` and leaves the first entry active.
//!
//! The original (pre-override) behavior is captured into a [`Trampoline`]
//! at registration time, before the override takes effect, so an override
//! can still reach the native implementation on demand.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ops::{CallContext, OpResult, OperationId};

// ---------------------------------------------------------------------------
// Behavior traits
// ---------------------------------------------------------------------------

/// A captured native behavior, invokable from a trampoline.
pub type NativeFn = dyn Fn(&CallContext) -> OpResult + Send + Sync;

/// An installed override.
///
/// Receives the call context and a trampoline to the original behavior.
/// The override decides whether to call the original before, after, or not
/// at all, and whether to transform its result.
pub trait OverrideBehavior: Send + Sync {
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult;
}

impl<F> OverrideBehavior for F
where
    F: Fn(&CallContext, &Trampoline) -> OpResult + Send + Sync,
{
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult {
        self(ctx, original)
    }
}

// ---------------------------------------------------------------------------
// Trampoline
// ---------------------------------------------------------------------------

/// Stored reference to an operation's original behavior.
///
/// The overlay never interprets the captured callable; it only stores and
/// invokes it. Empty when the platform exposed no original for the
/// operation, in which case `call` returns `None` and the override falls
/// back to a synthetic result.
#[derive(Clone)]
pub struct Trampoline {
    original: Option<Arc<NativeFn>>,
}

impl Trampoline {
    /// Wraps a captured native behavior.
    pub fn new(original: Arc<NativeFn>) -> Self {
        Self {
            original: Some(original),
        }
    }

    /// A trampoline for an operation with no exposed original.
    pub fn absent() -> Self {
        Self { original: None }
    }

    /// True when an original behavior was captured.
    pub fn is_present(&self) -> bool {
        self.original.is_some()
    }

    /// Invokes the original behavior, or returns `None` if none exists.
    pub fn call(&self, ctx: &CallContext) -> Option<OpResult> {
        self.original.as_ref().map(|f| f(ctx))
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// One installed override plus its captured original.
pub struct OverrideEntry {
    behavior: Box<dyn OverrideBehavior>,
    original: Trampoline,
}

impl OverrideEntry {
    pub fn behavior(&self) -> &dyn OverrideBehavior {
        &*self.behavior
    }

    pub fn original(&self) -> &Trampoline {
        &self.original
    }
}

/// Map of installed overrides. Entries are write-once.
#[derive(Default)]
pub struct OverrideRegistry {
    entries: HashMap<OperationId, OverrideEntry>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an override for `op`.
    ///
    /// `original` must be captured by the caller before the override takes
    /// effect. Fails with `AlreadyRegistered` if an entry exists; the
    /// first-installed override remains active in that case.
    pub fn register(
        &mut self,
        op: OperationId,
        behavior: Box<dyn OverrideBehavior>,
        original: Trampoline,
    ) -> Result<()> {
        if self.entries.contains_key(&op) {
            return Err(Error::AlreadyRegistered(op));
        }
        log::info!(
            "registry: override installed for {} (original {})",
            op,
            if original.is_present() {
                "captured"
            } else {
                "absent"
            }
        );
        self.entries.insert(
            op,
            OverrideEntry {
                behavior,
                original,
            },
        );
        Ok(())
    }

    /// Returns the entry for `op`, or `NotFound`.
    pub fn lookup(&self, op: OperationId) -> Result<&OverrideEntry> {
        self.entries.get(&op).ok_or(Error::NotFound(op))
    }

    /// Whether an override is installed for `op`.
    pub fn is_registered(&self, op: OperationId) -> bool {
        self.entries.contains_key(&op)
    }

    /// Number of installed overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
