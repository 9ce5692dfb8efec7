//! Window selection override: resolves main/external window requests
//! against the host's currently connected display surfaces.
//!
//! Main prefers the first non-external surface in host enumeration order
//! but falls back to the first surface of any kind, so main resolves
//! whenever anything is connected; external is the first external one.
//! An absent window is a valid empty result (`None`), never a failure;
//! callers treat it as a no-op.

use std::sync::Arc;

use crate::ops::{CallContext, OpArgs, OpResult, WindowClass};
use crate::platform::{HostPlatform, WindowSurface};
use crate::registry::{OverrideBehavior, Trampoline};

/// Resolves window selection over the connected surface set.
pub struct WindowSelect {
    host: Arc<dyn HostPlatform>,
}

impl WindowSelect {
    pub fn new(host: Arc<dyn HostPlatform>) -> Self {
        Self { host }
    }
}

/// Selection contract, kept as a free function so the policy is testable
/// without a host.
pub(crate) fn resolve(surfaces: &[WindowSurface], class: WindowClass) -> Option<WindowSurface> {
    match class {
        // Prefer a built-in surface, but never leave main unresolved while
        // any surface is connected.
        WindowClass::Main => surfaces
            .iter()
            .find(|s| !s.external)
            .or_else(|| surfaces.first())
            .copied(),
        WindowClass::External => surfaces.iter().find(|s| s.external).copied(),
    }
}

impl OverrideBehavior for WindowSelect {
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult {
        let OpArgs::SelectWindow { class } = &ctx.args else {
            log::debug!("window: unexpected arguments for {}, skipping", ctx.op);
            return original.call(ctx).unwrap_or(OpResult::Window(None));
        };

        let surfaces = self.host.connected_surfaces();
        let selected = resolve(&surfaces, *class);
        if selected.is_none() {
            log::debug!("window: no {:?} surface connected", class);
        }
        OpResult::Window(selected.map(|s| s.id))
    }
}
