//! Dispatch resolver: routes each call to its override or to the native
//! behavior.
//!
//! Resolution is a single lookup per call. No entry means pass-through: the
//! call reaches the host's native implementation unchanged, so the overlay
//! is safe to run even when nothing was overridden. With an entry, the
//! override runs and receives a trampoline to the original behavior; it
//! alone decides whether and when the original is invoked.
//!
//! No caching, no retries: every dispatch is a fresh, independent call. The
//! host may repeat the same operation any number of times (rotation,
//! redisplay), so overrides must not mutate shared state per call.
//!
//! Registration is expected to finish before dispatch traffic begins; the
//! registry is not mutated afterwards.

use std::sync::Arc;

use crate::ops::{CallContext, OpResult, OperationId};
use crate::platform::HostPlatform;
use crate::registry::{OverrideBehavior, OverrideRegistry, Trampoline};
use crate::Result;

/// Resolves dispatches against the override registry, falling back to the
/// host's native behavior.
pub struct Dispatcher {
    registry: OverrideRegistry,
    host: Arc<dyn HostPlatform>,
}

impl Dispatcher {
    pub fn new(host: Arc<dyn HostPlatform>) -> Self {
        Self {
            registry: OverrideRegistry::new(),
            host,
        }
    }

    /// Installs an override, capturing the host's original behavior for the
    /// operation into the entry's trampoline first.
    ///
    /// Fails with `AlreadyRegistered` on a duplicate; the first-installed
    /// override stays active.
    pub fn register(&mut self, op: OperationId, behavior: Box<dyn OverrideBehavior>) -> Result<()> {
        let original = if self.host.has_native(op) {
            let host = Arc::clone(&self.host);
            Trampoline::new(Arc::new(move |ctx: &CallContext| host.native_call(ctx)))
        } else {
            Trampoline::absent()
        };
        self.registry.register(op, behavior, original)
    }

    /// Routes one call: override if installed, native pass-through otherwise.
    pub fn dispatch(&self, ctx: &CallContext) -> OpResult {
        match self.registry.lookup(ctx.op) {
            Ok(entry) => {
                log::debug!("dispatch: {} -> override", ctx.op);
                entry.behavior().apply(ctx, entry.original())
            }
            Err(_) => {
                log::debug!("dispatch: {} -> native pass-through", ctx.op);
                self.host.native_call(ctx)
            }
        }
    }

    pub fn registry(&self) -> &OverrideRegistry {
        &self.registry
    }

    pub fn host(&self) -> &Arc<dyn HostPlatform> {
        &self.host
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idiom::Idiom;
    use crate::ops::{LineBreakMode, OpArgs};
    use crate::platform::HeadlessHost;

    fn dispatcher(detected: Idiom) -> Dispatcher {
        Dispatcher::new(Arc::new(HeadlessHost::new(detected)))
    }

    /// Unregistered operations must return exactly the native result.
    #[test]
    fn unregistered_operation_passes_through() {
        let d = dispatcher(Idiom::Phone);
        let ctx = CallContext::new(OpArgs::QueryIdiom);
        assert_eq!(d.dispatch(&ctx), d.host().native_call(&ctx));

        let ctx = CallContext::new(OpArgs::LinebreakMode { editing: false });
        assert_eq!(d.dispatch(&ctx), OpResult::LineBreak(LineBreakMode::Clip));
    }

    #[test]
    fn registered_override_takes_the_call() {
        let mut d = dispatcher(Idiom::Phone);
        d.register(
            OperationId::QueryIdiom,
            Box::new(|_ctx: &CallContext, _orig: &Trampoline| OpResult::Idiom(Idiom::Pad)),
        )
        .unwrap();
        let ctx = CallContext::new(OpArgs::QueryIdiom);
        assert_eq!(d.dispatch(&ctx), OpResult::Idiom(Idiom::Pad));
    }

    /// The trampoline handed to an override reaches the pre-override
    /// behavior, not the override itself.
    #[test]
    fn trampoline_reaches_native_behavior() {
        let mut d = dispatcher(Idiom::Phone);
        d.register(
            OperationId::QueryIdiom,
            Box::new(|ctx: &CallContext, orig: &Trampoline| {
                // Forward to the original, then replace its answer.
                let native = orig.call(ctx);
                assert_eq!(native, Some(OpResult::Idiom(Idiom::Phone)));
                OpResult::Idiom(Idiom::Tv)
            }),
        )
        .unwrap();
        let ctx = CallContext::new(OpArgs::QueryIdiom);
        assert_eq!(d.dispatch(&ctx), OpResult::Idiom(Idiom::Tv));
    }

    #[test]
    fn no_native_behavior_yields_absent_trampoline() {
        let mut d = dispatcher(Idiom::Phone);
        d.register(
            OperationId::BindPointerDriver,
            Box::new(|ctx: &CallContext, orig: &Trampoline| {
                assert!(orig.call(ctx).is_none());
                OpResult::PointerDrivers {
                    drivers: Vec::new(),
                    current: None,
                }
            }),
        )
        .unwrap();
        let ctx = CallContext::new(OpArgs::BindPointerDriver {
            surface: crate::ops::SurfaceId(1),
        });
        d.dispatch(&ctx);
    }

    #[test]
    fn duplicate_register_is_rejected() {
        let mut d = dispatcher(Idiom::Phone);
        let behavior = || {
            Box::new(|_: &CallContext, _: &Trampoline| OpResult::Idiom(Idiom::Pad))
                as Box<dyn OverrideBehavior>
        };
        d.register(OperationId::QueryIdiom, behavior()).unwrap();
        assert!(d.register(OperationId::QueryIdiom, behavior()).is_err());
    }

    /// Repeating a dispatch with identical arguments yields identical
    /// results; resolution keeps no per-call state.
    #[test]
    fn dispatch_is_idempotent() {
        let mut d = dispatcher(Idiom::Phone);
        d.register(
            OperationId::QueryIdiom,
            Box::new(|_: &CallContext, _: &Trampoline| OpResult::Idiom(Idiom::Pad)),
        )
        .unwrap();
        let ctx = CallContext::new(OpArgs::QueryIdiom);
        let first = d.dispatch(&ctx);
        for _ in 0..5 {
            assert_eq!(d.dispatch(&ctx), first);
        }
    }
}
