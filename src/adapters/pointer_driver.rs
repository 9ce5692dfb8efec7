//! Pointer-driver binding: owned bookkeeping of active pointer-interaction
//! drivers per interactive surface.
//!
//! The host enumerates drivers through this adapter instead of keeping its
//! own records. Attach/detach is an administrative surface exercised by the
//! initializer or by the host's setup code between dispatches; the dispatch
//! path itself only reads. The "current" driver for a surface is the most
//! recently attached one still active.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::ops::{CallContext, OpArgs, OpResult, PointerDriver, SurfaceId};
use crate::registry::{OverrideBehavior, Trampoline};

/// Registry of active pointer drivers, keyed by surface.
#[derive(Default)]
pub struct PointerDriverBinding {
    drivers: Mutex<Vec<PointerDriver>>,
    next_id: AtomicU32,
}

impl PointerDriverBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a driver for `surface` and returns it.
    pub fn attach(&self, surface: SurfaceId) -> PointerDriver {
        let driver = PointerDriver {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            surface,
        };
        let mut drivers = self.drivers.lock().unwrap_or_else(|e| e.into_inner());
        drivers.push(driver);
        log::debug!("pointer: driver {} attached to {:?}", driver.id, surface);
        driver
    }

    /// Deactivates a driver; unknown ids are ignored.
    pub fn detach(&self, driver_id: u32) {
        let mut drivers = self.drivers.lock().unwrap_or_else(|e| e.into_inner());
        drivers.retain(|d| d.id != driver_id);
        log::debug!("pointer: driver {} detached", driver_id);
    }

    /// Active drivers for one surface, in attach order.
    pub fn drivers_for(&self, surface: SurfaceId) -> Vec<PointerDriver> {
        let drivers = self.drivers.lock().unwrap_or_else(|e| e.into_inner());
        drivers
            .iter()
            .filter(|d| d.surface == surface)
            .copied()
            .collect()
    }
}

impl OverrideBehavior for PointerDriverBinding {
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult {
        let OpArgs::BindPointerDriver { surface } = &ctx.args else {
            log::debug!("pointer: unexpected arguments for {}, skipping", ctx.op);
            return original.call(ctx).unwrap_or(OpResult::PointerDrivers {
                drivers: Vec::new(),
                current: None,
            });
        };

        let drivers = self.drivers_for(*surface);
        let current = drivers.last().copied();
        OpResult::PointerDrivers { drivers, current }
    }
}
